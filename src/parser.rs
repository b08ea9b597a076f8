mod movetext;
mod tags;
mod tokens;


use self::tokens::Token;
use crate::game::{ParsedGame, PgnGame};
use crate::moves::{MoveBuilder, MoveTreeBuilder};

use anyhow::{Context, Result};

/// Parses a single PGN game with the default [`MoveTreeBuilder`].
pub fn parse_game(pgn: &str) -> Result<ParsedGame> {
    parse_game_with(pgn, MoveTreeBuilder::default())
}

/// Parses a single PGN game from raw bytes, which must be UTF-8.
pub fn parse_game_bytes(bytes: &[u8]) -> Result<ParsedGame> {
    let pgn = std::str::from_utf8(bytes).context("PGN input is not valid UTF-8")?;
    parse_game(pgn)
}

/// Parses a single PGN game, streaming the movetext into the given builder,
/// which decides the shape of `moves` in the returned game.
pub fn parse_game_with<B: MoveBuilder>(pgn: &str, mut builder: B) -> Result<PgnGame<B::Moves>> {
    let pgn = pgn.trim();
    let tags = tags::extract_tags(pgn);
    let movetext = movetext::isolate_movetext(pgn);
    parse_movetext(&movetext, &mut builder)?;
    Ok(tags.into_game(builder.into_moves()))
}

/// Walks the braced movetext left to right and drives the builder.
fn parse_movetext<B: MoveBuilder>(movetext: &str, builder: &mut B) -> Result<()> {
    let parts = tokens::split_on_comments(movetext);
    let mut i = 0;
    while i < parts.len() {
        let part = parts[i].trim();
        if part == "{" {
            // The next element is the verbatim comment body, the one after
            // it the closing brace. A comment in the very first element
            // position precedes any move of the game.
            if let Some(body) = parts.get(i + 1) {
                dispatch(builder, Token::Comment(body.to_string()), i == 0)?;
            }
            i += 3;
        } else {
            for token in tokens::tokenize_span(part) {
                dispatch(builder, token, false)?;
            }
            i += 1;
        }
    }
    Ok(())
}

fn dispatch<B: MoveBuilder>(builder: &mut B, token: Token, before_first_move: bool) -> Result<()> {
    match token {
        Token::Comment(text) => {
            if before_first_move {
                builder.comment_before_first_move(&text)
            } else {
                builder.comment(&text)
            }
        }
        Token::Move(san) => builder.san_move(&san),
        Token::BeginVariation => builder.begin_variation(),
        Token::EndVariation => builder.end_variation(),
    }
}
