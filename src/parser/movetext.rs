use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Tag section and movetext are separated by a blank line, but some
    // producers (chess.com exports among them) leave whitespace on it.
    static ref LOOSE_SEPARATOR: Regex = Regex::new(r"\]\n\s+\n").unwrap();
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();

    // Runs of numbered moves, or a game terminator. Anything between two
    // matches is annotation text that lost its braces.
    static ref MOVETEXT_RUN: Regex = {
        let san = r"[NBRQK]?[a-h1-8]?x?[a-hO][1-8-][O-]{0,3}[!?+#=]{0,2}[NBRQ]?[!?+#]{0,2}";
        let result = r"1-0|0-1|1/2-1/2|\*";
        Regex::new(&format!(
            r"(?:\s?[()]?\s?[()]?\s?[0-9]{{1,3}}\.{{1,3}}\s{san}(?:\s{san})?\s?[()]?\s?[()]?\s?)+|\s?(?:{result})\s?"
        ))
        .unwrap()
    };
}

/// Returns the movetext half of a game as a single line, comments braced.
/// Without a blank line after the tag section there is no movetext and the
/// result is empty.
pub(crate) fn isolate_movetext(pgn: &str) -> String {
    let rest = pgn
        .splitn(2, "]\n\n")
        .nth(1)
        .or_else(|| LOOSE_SEPARATOR.splitn(pgn, 2).nth(1));
    let Some(rest) = rest else {
        return String::new();
    };
    let flat = rest.replace('\n', " ");
    let flat = WHITESPACE_RUN.replace_all(&flat, " ");
    restore_comment_braces(flat.trim())
}

/// Re-inserts `{`/`}` around annotation text whose producer left it bare,
/// as in `1. e4 e5 This is a good opening 2. Nf3`.
///
/// The text is tiled into `MOVETEXT_RUN` matches and the gaps between
/// them; each gap gets wrapped in braces. A movetext that is a single
/// segment has nothing to recover and is returned as is, and so is one
/// that already contains braces, since a producer that brackets its
/// comments needs no guessing.
fn restore_comment_braces(movetext: &str) -> String {
    if movetext.contains('{') {
        return movetext.to_string();
    }

    let mut segments = 0;
    let mut last_end = 0;
    let mut rebuilt = String::with_capacity(movetext.len() + 16);
    for run in MOVETEXT_RUN.find_iter(movetext) {
        if run.start() > last_end {
            segments += 1;
            rebuilt.push('{');
            rebuilt.push_str(&movetext[last_end..run.start()]);
            rebuilt.push('}');
        }
        segments += 1;
        rebuilt.push_str(run.as_str());
        last_end = run.end();
    }
    if last_end < movetext.len() {
        segments += 1;
        rebuilt.push('{');
        rebuilt.push_str(&movetext[last_end..]);
        rebuilt.push('}');
    }

    if segments <= 1 {
        return movetext.to_string();
    }
    rebuilt
}
