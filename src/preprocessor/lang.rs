// preprocessor/lang.rs
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{dict::Script, preprocessor::utils::is_han};

/// Which dictionary passes a conversion runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum LanguageMode {
    Traditional,
    Simplified,
    /// Traditional pass first, then simplified.
    #[default]
    All,
}

impl LanguageMode {
    pub fn scripts(self) -> &'static [Script] {
        match self {
            LanguageMode::Traditional => &[Script::Traditional],
            LanguageMode::Simplified => &[Script::Simplified],
            LanguageMode::All => &[Script::Traditional, Script::Simplified],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Han(&'a str),
    Other(&'a str),
}

/// Splits text into maximal runs of Han and non-Han characters, in order.
pub fn split_into_han_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut byte_offset = 0usize;

    while byte_offset < text.len() {
        let Some(first) = text[byte_offset..].chars().next() else {
            break;
        };
        let is_han_start = is_han(first);

        let mut byte_end = byte_offset;
        for ch in text[byte_offset..].chars() {
            if is_han(ch) != is_han_start {
                break;
            }
            byte_end += ch.len_utf8();
        }

        let segment = &text[byte_offset..byte_end];
        segments.push(if is_han_start {
            Segment::Han(segment)
        } else {
            Segment::Other(segment)
        });
        byte_offset = byte_end;
    }

    debug!("han segments: {:?}", segments);
    segments
}
