pub mod game;
pub mod moves;
pub mod parser;

pub use game::{ParsedGame, PgnGame, DEFAULT_FEN};
pub use moves::{MoveBuilder, MoveNode, MoveTreeBuilder, Variation};
pub use parser::{parse_game, parse_game_bytes, parse_game_with};
