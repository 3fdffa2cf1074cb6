// dict/mod.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub mod loader;

pub use loader::DICT_PATH_ENV;

/// Which written form of a record a lookup or substitution pass works on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    Traditional,
    Simplified,
}

/// One Han-text to pinyin mapping. `pinyin` holds space-joined numeric-tone syllables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub traditional: String,
    pub simplified: String,
    pub pinyin: String,
}

impl Record {
    pub fn new(
        traditional: impl Into<String>,
        simplified: impl Into<String>,
        pinyin: impl Into<String>,
    ) -> Self {
        Self {
            traditional: traditional.into(),
            simplified: simplified.into(),
            pinyin: pinyin.into(),
        }
    }

    pub fn text(&self, script: Script) -> &str {
        match script {
            Script::Traditional => &self.traditional,
            Script::Simplified => &self.simplified,
        }
    }
}

/// Read-only source of pinyin the romanizer runs against.
///
/// `lookup` is the exact-match index for one script, `records` the ordered list used by
/// the substring substitution pass. Implementations must not change between calls.
pub trait Lexicon {
    fn lookup(&self, script: Script, text: &str) -> Option<&str>;
    fn records(&self) -> &[Record];
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn lookup(&self, script: Script, text: &str) -> Option<&str> {
        (**self).lookup(script, text)
    }

    fn records(&self) -> &[Record] {
        (**self).records()
    }
}

/// Pinyin dictionary: records in file order plus one exact-match index per script.
///
/// Index entries point into `records`; for a duplicated key the first record wins, later
/// ones are only reachable through the substitution pass.
#[derive(Debug, Default, Clone)]
pub struct Dictionary {
    records: Vec<Record>,
    traditional: HashMap<String, usize>,
    simplified: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I: IntoIterator<Item = Record>>(records: I) -> Self {
        let mut dict = Self::new();
        for record in records {
            dict.push(record);
        }
        dict
    }

    pub fn push(&mut self, record: Record) {
        let idx = self.records.len();
        if !record.traditional.is_empty() {
            self.traditional
                .entry(record.traditional.clone())
                .or_insert(idx);
        }
        if !record.simplified.is_empty() {
            self.simplified
                .entry(record.simplified.clone())
                .or_insert(idx);
        }
        self.records.push(record);
    }

    pub fn get(&self, script: Script, text: &str) -> Option<&Record> {
        let index = match script {
            Script::Traditional => &self.traditional,
            Script::Simplified => &self.simplified,
        };
        index.get(text).map(|&idx| &self.records[idx])
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Lexicon for Dictionary {
    fn lookup(&self, script: Script, text: &str) -> Option<&str> {
        self.get(script, text).map(|r| r.pinyin.as_str())
    }

    fn records(&self) -> &[Record] {
        &self.records
    }
}

impl FromIterator<Record> for Dictionary {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self::from_records(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_wins_in_index() {
        let dict = Dictionary::from_records([
            Record::new("行", "行", "xing2"),
            Record::new("行", "行", "hang2"),
        ]);
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.lookup(Script::Traditional, "行"), Some("xing2"));
        assert_eq!(dict.lookup(Script::Simplified, "行"), Some("xing2"));
        assert_eq!(dict.records()[1].pinyin, "hang2");
    }

    #[test]
    fn scripts_are_indexed_separately() {
        let dict: Dictionary = [Record::new("馬", "马", "ma3")].into_iter().collect();
        assert_eq!(dict.lookup(Script::Traditional, "馬"), Some("ma3"));
        assert_eq!(dict.lookup(Script::Traditional, "马"), None);
        assert_eq!(dict.lookup(Script::Simplified, "马"), Some("ma3"));
        assert_eq!(dict.get(Script::Simplified, "馬"), None);
    }

    #[test]
    fn records_read_from_json() {
        let records: Vec<Record> = serde_json::from_str(
            r#"[{"traditional": "馬", "simplified": "马", "pinyin": "ma3"},
                {"traditional": "來", "simplified": "来", "pinyin": "lai2"}]"#,
        )
        .unwrap();
        let dict: Dictionary = records.into_iter().collect();
        assert_eq!(dict.lookup(Script::Simplified, "来"), Some("lai2"));
        assert_eq!(dict.get(Script::Traditional, "馬"), Some(&Record::new("馬", "马", "ma3")));
    }

    #[test]
    fn empty_keys_stay_out_of_the_index() {
        let dict = Dictionary::from_records([Record::new("", "马", "ma3")]);
        assert_eq!(dict.lookup(Script::Traditional, ""), None);
        assert_eq!(dict.lookup(Script::Simplified, "马"), Some("ma3"));
        assert!(!dict.is_empty());
    }
}
