use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Move numbers with their dots, including black continuations ("12...").
    static ref MOVE_NUMBER: Regex = Regex::new(r"[0-9]+\.+").unwrap();
}

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Token {
    Move(String),
    Comment(String),
    BeginVariation,
    EndVariation,
}

/// Splits movetext on `{`/`}`, keeping the braces as elements of their
/// own so comment bodies stay verbatim.
pub(crate) fn split_on_comments(movetext: &str) -> Vec<&str> {
    let mut parts = split_keeping(movetext, &['{', '}']);
    // A game opening with a comment starts on its brace, not on an empty
    // element.
    if !parts.is_empty() && parts[0].is_empty() {
        parts.remove(0);
    }
    parts
}

/// Tokenizes a comment-free span of movetext into moves and variation
/// markers. Move numbers are stripped first, then the bare `..`
/// continuation marker some producers emit after an interrupting comment.
pub(crate) fn tokenize_span(span: &str) -> Vec<Token> {
    // Padding makes both strips apply at the start of the span too.
    let padded = format!(" {span}");
    let stripped = MOVE_NUMBER.replace_all(&padded, "");
    let stripped = stripped.replace(" ..", "");
    let stripped = stripped.replace("  ", " ");

    let mut tokens = Vec::new();
    for piece in split_keeping(stripped.trim(), &['(', ')']) {
        match piece {
            "(" => tokens.push(Token::BeginVariation),
            ")" => tokens.push(Token::EndVariation),
            _ => {
                for word in piece.split_whitespace() {
                    tokens.push(Token::Move(word.to_string()));
                }
            }
        }
    }
    tokens
}

/// Like `str::split` with the delimiters kept as standalone elements.
/// Empty elements between adjacent delimiters are kept too.
fn split_keeping<'a>(text: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut last = 0;
    for (index, ch) in text.char_indices() {
        if delimiters.contains(&ch) {
            parts.push(&text[last..index]);
            parts.push(&text[index..index + ch.len_utf8()]);
            last = index + ch.len_utf8();
        }
    }
    parts.push(&text[last..]);
    parts
}
