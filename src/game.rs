use crate::moves::Variation;

use serde::ser::SerializeMap;
use serde::Serialize;
use std::collections::HashMap;

/// Starting position assumed when a game carries no FEN tag.
pub const DEFAULT_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Recognized tag pairs as dedicated fields, every other tag pair in
/// `metadata`, and the movetext as whatever the move builder produced.
#[derive(Clone, Debug, PartialEq)]
pub struct PgnGame<M> {
    pub event: Option<String>,
    pub site: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>,
    pub plycount: Option<String>,
    pub eco: Option<String>,
    pub fen: String,
    pub timecontrol: Option<String>,
    pub round: Option<String>,
    pub date: Option<String>,
    pub annotator: Option<String>,
    pub termination: Option<String>,
    pub metadata: HashMap<String, String>,
    pub moves: M,
}

pub type ParsedGame = PgnGame<Variation>;

impl<M: Default> Default for PgnGame<M> {
    fn default() -> PgnGame<M> {
        PgnGame {
            event: None,
            site: None,
            white: None,
            black: None,
            result: None,
            plycount: None,
            eco: None,
            fen: DEFAULT_FEN.to_string(),
            timecontrol: None,
            round: None,
            date: None,
            annotator: None,
            termination: None,
            metadata: HashMap::new(),
            moves: M::default(),
        }
    }
}

impl<M> PgnGame<M> {
    fn fixed_tags(&self) -> [(&'static str, &Option<String>); 12] {
        [
            ("event", &self.event),
            ("site", &self.site),
            ("white", &self.white),
            ("black", &self.black),
            ("result", &self.result),
            ("plycount", &self.plycount),
            ("eco", &self.eco),
            ("timecontrol", &self.timecontrol),
            ("round", &self.round),
            ("date", &self.date),
            ("annotator", &self.annotator),
            ("termination", &self.termination),
        ]
    }
}

impl<M: Serialize> Serialize for PgnGame<M> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let fixed = self.fixed_tags();
        let present = fixed.iter().filter(|(_, value)| value.is_some()).count();

        // Absent tags are omitted entirely; fen, metadata and moves are
        // always present.
        let mut map = serializer.serialize_map(Some(present + 3))?;
        for (key, value) in fixed {
            if let Some(value) = value {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry("fen", &self.fen)?;
        map.serialize_entry("metadata", &self.metadata)?;
        map.serialize_entry("moves", &self.moves)?;
        map.end()
    }
}
