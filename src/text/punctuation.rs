// text/punctuation.rs
use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Full-width marks and the ASCII text they become in sentences, applied in order.
///
/// `……` and `——` must stay ahead of `—` so the doubled forms collapse to a single mark.
#[rustfmt::skip]
pub static PUNCTUATIONS: &[(&str, &str)] = &[
    ("，", ","),
    ("。", "."),
    ("！", "!"),
    ("？", "?"),
    ("：", ":"),
    ("；", ";"),
    ("‘", "'"), ("’", "'"),
    ("“", "\""), ("”", "\""),
    ("「", "["), ("」", "]"),
    ("『", "["), ("』", "]"),
    ("（", "("), ("）", ")"),
    ("〔", "["), ("〕", "]"),
    ("【", "["), ("】", "]"),
    ("｛", "{"), ("｝", "}"),
    ("……", "..."),
    ("——", "-"),
    ("—", "-"),
    ("/", "/"), ("\\", "\\"),
    ("～", "~"),
    ("《", "<"), ("》", ">"),
    ("〈", "<"), ("〉", ">"),
    ("·", "·"),
    ("、", ","),
];

/// Every character on either side of the table.
static PUNCTUATION_CHARS: Lazy<HashSet<char>> = Lazy::new(|| {
    PUNCTUATIONS
        .iter()
        .flat_map(|(from, to)| from.chars().chain(to.chars()))
        .collect()
});

pub fn is_listed_punctuation(c: char) -> bool {
    PUNCTUATION_CHARS.contains(&c)
}

/// Characters allowed through into a sentence: `[a-z0-9_]`, ASCII whitespace and the
/// listed punctuation.
pub fn is_sentence_char(c: char) -> bool {
    c.is_ascii_lowercase()
        || c.is_ascii_digit()
        || c.is_ascii_whitespace()
        || c == '_'
        || is_listed_punctuation(c)
}

pub fn filter_sentence(s: &str) -> String {
    s.chars().filter(|&c| is_sentence_char(c)).collect()
}

pub fn to_half_width(s: &str) -> String {
    let mut out = s.to_string();
    for (from, to) in PUNCTUATIONS {
        if from != to && out.contains(from) {
            out = out.replace(from, to);
        }
    }
    out
}
