// text/mod.rs
use log::debug;

use crate::{
    dict::Lexicon,
    preprocessor::{
        LanguageMode, Segment, split_into_han_segments,
        utils::{is_opening_punctuation, is_punctuation, is_word_char},
    },
};

pub mod punctuation;
pub mod result;
pub mod romanize;
pub mod surname;
pub mod tone;

pub use result::{ConvertResult, Rendered};
pub use romanize::romanize;
pub use tone::ToneStyle;

fn is_syllable_char(c: char) -> bool {
    c.is_ascii_alphabetic() || tone::is_tone_digit(c)
}

/// Splits on every run of characters outside `[A-Za-z1-4]`, dropping empty pieces.
pub fn to_slice(s: &str) -> Vec<&str> {
    s.split(|c: char| !is_syllable_char(c))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Pinyin syllables joined by `sep`; punctuation is dropped.
pub fn convert<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    sep: &str,
    mode: LanguageMode,
) -> ConvertResult {
    let s = romanize(lexicon, text, mode, false);
    ConvertResult::new(to_slice(&s).join(sep))
}

/// Pinyin prose with punctuation turned into its ASCII form.
pub fn sentence<L: Lexicon + ?Sized>(lexicon: &L, text: &str, mode: LanguageMode) -> ConvertResult {
    let s = romanize(lexicon, text, mode, false);
    let s = punctuation::filter_sentence(&s);
    ConvertResult::new(punctuation::to_half_width(&s))
}

/// Like `convert`, with a leading surname read from the surname table.
pub fn name<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    sep: &str,
    mode: LanguageMode,
) -> ConvertResult {
    let s = romanize(lexicon, text, mode, true);
    ConvertResult::new(to_slice(&s).join(sep))
}

/// First letter of every syllable joined by `sep`.
pub fn abbr<L: Lexicon + ?Sized>(lexicon: &L, text: &str, sep: &str, mode: LanguageMode) -> String {
    let s = romanize(lexicon, text, mode, false);
    to_slice(&s)
        .into_iter()
        .filter_map(|t| t.get(..1))
        .collect::<Vec<_>>()
        .join(sep)
}

/// Words of a non-Han span: maximal runs of letters, marks, numbers, `_` and `-`.
fn words(s: &str) -> impl Iterator<Item = &str> {
    s.split(|c: char| !is_word_char(c)).filter(|w| !w.is_empty())
}

/// `convert` applied to Han spans only; other words are kept as written.
pub fn convert_only_chinese<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    sep: &str,
    mode: LanguageMode,
) -> ConvertResult {
    let mut tokens: Vec<String> = Vec::new();
    for segment in split_into_han_segments(text) {
        match segment {
            Segment::Han(han) => {
                let s = romanize(lexicon, han, mode, false);
                tokens.extend(to_slice(&s).into_iter().map(str::to_string));
            }
            Segment::Other(other) => tokens.extend(words(other).map(str::to_string)),
        }
    }
    ConvertResult::new(tokens.join(sep))
}

/// `sentence` applied to Han spans only; other text is kept as written apart from
/// full-width punctuation, which becomes ASCII.
pub fn sentence_only_chinese<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    mode: LanguageMode,
) -> ConvertResult {
    let mut out = String::with_capacity(text.len() * 2);
    // Whether the text written so far ends in an opening bracket or quote.
    let mut after_opening = false;
    let mut last_was_han = false;

    for segment in split_into_han_segments(text) {
        match segment {
            Segment::Han(han) => {
                // Han text without a record is dropped, as in `sentence`.
                let s = punctuation::filter_sentence(&romanize(lexicon, han, mode, false));
                let s = s.trim();
                let needs_space = out.chars().last().is_some_and(|c| !c.is_whitespace())
                    && !after_opening;
                if needs_space && !s.is_empty() {
                    out.push(' ');
                }
                out.push_str(s);
                after_opening = false;
                last_was_han = true;
            }
            Segment::Other(other) => {
                if let Some(first) = other.chars().next() {
                    if last_was_han && !first.is_whitespace() && !is_punctuation(first) {
                        out.push(' ');
                    }
                }
                out.push_str(&punctuation::to_half_width(other));
                after_opening = other.chars().last().is_some_and(is_opening_punctuation);
                last_was_han = false;
            }
        }
    }

    debug!("sentence: {:?}", out);
    ConvertResult::new(out.trim())
}
