use crate::game::{PgnGame, DEFAULT_FEN};

use std::collections::HashMap;

#[derive(Debug, Default)]
pub(crate) struct GameTags {
    pub event: Option<String>,
    pub site: Option<String>,
    pub white: Option<String>,
    pub black: Option<String>,
    pub result: Option<String>,
    pub plycount: Option<String>,
    pub eco: Option<String>,
    pub fen: Option<String>,
    pub timecontrol: Option<String>,
    pub round: Option<String>,
    pub date: Option<String>,
    pub annotator: Option<String>,
    pub termination: Option<String>,
    pub metadata: HashMap<String, String>,
}

impl GameTags {
    pub(crate) fn into_game<M>(self, moves: M) -> PgnGame<M> {
        PgnGame {
            event: self.event,
            site: self.site,
            white: self.white,
            black: self.black,
            result: self.result,
            plycount: self.plycount,
            eco: self.eco,
            fen: self.fen.unwrap_or_else(|| DEFAULT_FEN.to_string()),
            timecontrol: self.timecontrol,
            round: self.round,
            date: self.date,
            annotator: self.annotator,
            termination: self.termination,
            metadata: self.metadata,
            moves,
        }
    }
}

/// Collects every `[Key "Value"]` line of the input. Keys are matched
/// case-insensitively; values keep their casing. Unbracketed lines are
/// skipped, so the movetext never contributes tags.
pub(crate) fn extract_tags(pgn: &str) -> GameTags {
    let mut tags = GameTags::default();
    for line in pgn.lines() {
        let line = line.trim();
        if !(line.starts_with('[') && line.ends_with(']')) {
            continue;
        }
        let cleaned: String = line
            .chars()
            .filter(|c| !matches!(c, '[' | ']' | '"'))
            .collect();
        let (key, value) = match cleaned.split_once(' ') {
            Some((key, value)) => (key.to_lowercase(), value.to_string()),
            None => (cleaned.to_lowercase(), String::new()),
        };
        match key.as_str() {
            "event" => tags.event = Some(value),
            "site" => tags.site = Some(value),
            "white" => tags.white = Some(value),
            "black" => tags.black = Some(value),
            "result" => tags.result = Some(value),
            "plycount" => tags.plycount = Some(value),
            "eco" => tags.eco = Some(value),
            "fen" => tags.fen = Some(value),
            "timecontrol" => tags.timecontrol = Some(value),
            "round" => tags.round = Some(value),
            "date" => tags.date = Some(value),
            "annotator" => tags.annotator = Some(value),
            "termination" => tags.termination = Some(value),
            _ => {
                tags.metadata.insert(key, value);
            }
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::extract_tags;

    #[test]
    fn recognized_keys_fill_dedicated_fields() {
        let tags = extract_tags(
            "[Event \"Hoogovens Group A\"]\n\
             [Site \"Wijk aan Zee NED\"]\n\
             [White \"Kasparov, Garry\"]\n\
             [Black \"Topalov, Veselin\"]\n\
             [Result \"1-0\"]\n\
             [ECO \"B07\"]",
        );
        assert_eq!(tags.event.as_deref(), Some("Hoogovens Group A"));
        assert_eq!(tags.site.as_deref(), Some("Wijk aan Zee NED"));
        assert_eq!(tags.white.as_deref(), Some("Kasparov, Garry"));
        assert_eq!(tags.black.as_deref(), Some("Topalov, Veselin"));
        assert_eq!(tags.result.as_deref(), Some("1-0"));
        assert_eq!(tags.eco.as_deref(), Some("B07"));
        assert!(tags.metadata.is_empty());
    }

    #[test]
    fn keys_match_case_insensitively() {
        let tags = extract_tags("[EVENT \"Casual\"]\n[timecontrol \"300+2\"]");
        assert_eq!(tags.event.as_deref(), Some("Casual"));
        assert_eq!(tags.timecontrol.as_deref(), Some("300+2"));
    }

    #[test]
    fn unrecognized_keys_land_in_metadata_lowercased() {
        let tags = extract_tags("[WhiteElo \"2851\"]\n[Opening \"Pirc Defense\"]");
        assert_eq!(tags.metadata["whiteelo"], "2851");
        assert_eq!(tags.metadata["opening"], "Pirc Defense");
    }

    #[test]
    fn values_keep_spaces_and_casing() {
        let tags = extract_tags("[Annotator \"J. van der Wiel\"]");
        assert_eq!(tags.annotator.as_deref(), Some("J. van der Wiel"));
    }

    #[test]
    fn unbracketed_lines_are_skipped() {
        let tags = extract_tags("[Event \"Test\"]\n\n1. e4 e5 {[%clk 0:03:00]} *");
        assert_eq!(tags.event.as_deref(), Some("Test"));
        assert!(tags.metadata.is_empty());
    }

    #[test]
    fn tag_without_a_value_maps_to_empty() {
        let tags = extract_tags("[Round]");
        assert_eq!(tags.round.as_deref(), Some(""));
    }

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let tags = extract_tags("[Event \"First\"]\n[Event \"Second\"]");
        assert_eq!(tags.event.as_deref(), Some("Second"));
    }

    #[test]
    fn missing_fen_defaults_to_the_starting_position() {
        let game = extract_tags("[Event \"Test\"]").into_game(());
        assert_eq!(game.fen, crate::game::DEFAULT_FEN);

        let game = extract_tags("[FEN \"8/8/8/8/8/5k2/7p/7K b - - 0 1\"]").into_game(());
        assert_eq!(game.fen, "8/8/8/8/8/5k2/7p/7K b - - 0 1");
    }
}
