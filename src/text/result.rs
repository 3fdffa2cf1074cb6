// text/result.rs
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;

use crate::text::{
    to_slice,
    tone::{ToneStyle, strip_tones, to_unicode},
};

/// Numeric-tone pinyin produced by a conversion. Every rendering is computed from the
/// stored string on demand, so calls can repeat in any order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct ConvertResult(String);

/// All renderings of one result, for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub ascii: String,
    pub unicode: String,
    pub none: String,
    pub tokens: Vec<String>,
}

impl ConvertResult {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// `mei3 hao3`
    pub fn ascii(&self) -> &str {
        &self.0
    }

    /// `měi hǎo`
    pub fn unicode(&self) -> String {
        to_unicode(&self.0)
    }

    /// `mei hao`
    pub fn none(&self) -> String {
        strip_tones(&self.0)
    }

    pub fn render(&self, style: ToneStyle) -> String {
        match style {
            ToneStyle::Ascii => self.0.clone(),
            ToneStyle::Unicode => self.unicode(),
            ToneStyle::None => self.none(),
        }
    }

    pub fn tokens(&self) -> Vec<&str> {
        to_slice(&self.0)
    }

    pub fn rendered(&self) -> Rendered {
        Rendered {
            ascii: self.0.clone(),
            unicode: self.unicode(),
            none: self.none(),
            tokens: self.tokens().into_iter().map(str::to_string).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ConvertResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl From<String> for ConvertResult {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for ConvertResult {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderings_come_from_one_string() {
        let r = ConvertResult::new("wo3-he2-shi2");
        assert_eq!(r.ascii(), "wo3-he2-shi2");
        assert_eq!(r.unicode(), "wǒ-hé-shí");
        assert_eq!(r.none(), "wo-he-shi");
        assert_eq!(r.render(ToneStyle::Unicode), r.unicode());
        assert_eq!(r.render(ToneStyle::Ascii), r.ascii());
        assert_eq!(r.to_string(), "wo3-he2-shi2");
    }

    #[test]
    fn repeated_calls_agree() {
        let r = ConvertResult::new("suan1 nai3");
        let first = (r.none(), r.unicode(), r.ascii().to_string());
        let second = (r.none(), r.unicode(), r.ascii().to_string());
        assert_eq!(first, second);
        assert_eq!(r.ascii(), "suan1 nai3");
    }

    #[test]
    fn rendered_serializes_all_forms() {
        let r = ConvertResult::new("ma3");
        let json = serde_json::to_value(r.rendered()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ascii": "ma3",
                "unicode": "mǎ",
                "none": "ma",
                "tokens": ["ma3"],
            })
        );
        assert_eq!(serde_json::to_string(&r).unwrap(), "\"ma3\"");
    }

    #[test]
    fn empty_result() {
        let r = ConvertResult::default();
        assert!(r.is_empty());
        assert!(r.tokens().is_empty());
        assert_eq!(r.unicode(), "");
    }
}
