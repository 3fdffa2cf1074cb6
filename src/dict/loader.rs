// dict/loader.rs
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    dict::{Dictionary, Record},
    error::PinyinError,
};

/// Environment variable naming a dictionary file that replaces the embedded sample.
pub const DICT_PATH_ENV: &str = "PINYIN_DICT_PATH";

const FIELD_SEPARATOR: char = '`';

pub static SAMPLE_DICT_STR: &str = include_str!("../../resource/cedict_sample.dict");

lazy_static::lazy_static! {
    static ref BUILTIN_DICT: Dictionary = SAMPLE_DICT_STR.parse().unwrap_or_else(|e| {
        warn!("embedded dictionary rejected, falling back to empty: {}", e);
        Dictionary::default()
    });
}

// Numeric-tone syllables, e.g. "ni3 hao3" or "lv4". Neutral tone may be bare or 5.
static PINYIN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z:]+[1-5]?(?: [A-Za-z:]+[1-5]?)*$").unwrap());

fn parse_line(line: &str, line_no: usize) -> Result<Option<Record>, PinyinError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    if line.trim().is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut fields = line.split(FIELD_SEPARATOR);
    let (Some(traditional), Some(simplified), Some(pinyin)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(PinyinError::Parse {
            line: line_no,
            reason: format!("expected 3 backtick-separated fields in {:?}", line),
        });
    };

    let pinyin = pinyin.trim();
    for (name, value) in [
        ("traditional", traditional),
        ("simplified", simplified),
        ("pinyin", pinyin),
    ] {
        if value.is_empty() {
            return Err(PinyinError::Parse {
                line: line_no,
                reason: format!("empty {} field", name),
            });
        }
    }

    if !PINYIN_REGEX.is_match(pinyin) {
        warn!(
            "line {}: unusual pinyin {:?} for {}/{}",
            line_no, pinyin, traditional, simplified
        );
    }

    Ok(Some(Record::new(traditional, simplified, pinyin)))
}

impl Dictionary {
    /// Reads the backtick format: `traditional`simplified`pinyin`, `#` starts a comment line.
    ///
    /// Any malformed line fails the whole load.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, PinyinError> {
        let mut dict = Dictionary::new();
        for (idx, line) in reader.lines().enumerate() {
            if let Some(record) = parse_line(&line?, idx + 1)? {
                dict.push(record);
            }
        }
        Ok(dict)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PinyinError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PinyinError::from(format!("failed to open dictionary {}: {}", path.display(), e))
        })?;
        let dict = Self::from_reader(BufReader::new(file))?;
        info!("loaded {} records from {}", dict.len(), path.display());
        Ok(dict)
    }

    /// Sample dictionary compiled into the crate. Covers a small set of common words only.
    pub fn builtin() -> &'static Dictionary {
        &BUILTIN_DICT
    }

    /// Loads the file named by `PINYIN_DICT_PATH`, or clones the embedded sample when unset.
    /// Use [`Dictionary::builtin`] directly to borrow the sample without the copy.
    pub fn load_default() -> Result<Self, PinyinError> {
        match std::env::var(DICT_PATH_ENV) {
            Ok(path) if !path.is_empty() => Self::from_path(path),
            _ => {
                debug!("{} not set, using embedded dictionary", DICT_PATH_ENV);
                Ok(Self::builtin().clone())
            }
        }
    }
}

impl FromStr for Dictionary {
    type Err = PinyinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_reader(s.as_bytes())
    }
}
