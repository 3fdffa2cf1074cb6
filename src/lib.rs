use std::path::Path;

use log::info;

pub mod dict;
mod error;
pub mod preprocessor;
pub mod text;

pub use dict::{DICT_PATH_ENV, Dictionary, Lexicon, Record, Script};
pub use error::PinyinError;
pub use preprocessor::LanguageMode;
pub use text::{ConvertResult, Rendered, ToneStyle, to_slice};

/// Chinese to pinyin converter over a read-only lexicon.
///
/// Every operation uses the converter's default [`LanguageMode`] (`All` unless changed
/// with [`Dict::with_mode`]); the `*_with` forms take the mode per call.
#[derive(Debug, Clone)]
pub struct Dict<L: Lexicon = Dictionary> {
    lexicon: L,
    mode: LanguageMode,
}

impl Dict<Dictionary> {
    /// create a converter over the dictionary named by `PINYIN_DICT_PATH`,
    /// or the embedded sample dictionary when the variable is unset
    pub fn new() -> Result<Self, PinyinError> {
        let dictionary = Dictionary::load_default()?;
        info!("Initializing Dict with {} records", dictionary.len());
        Ok(Self::with_lexicon(dictionary))
    }

    /// create a converter over a dictionary file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, PinyinError> {
        Ok(Self::with_lexicon(Dictionary::from_path(path)?))
    }
}

impl Dict<&'static Dictionary> {
    /// converter borrowing the embedded sample dictionary; nothing is copied
    pub fn builtin() -> Self {
        Self::with_lexicon(Dictionary::builtin())
    }
}

impl<L: Lexicon> Dict<L> {
    pub fn with_lexicon(lexicon: L) -> Self {
        Self {
            lexicon,
            mode: LanguageMode::All,
        }
    }

    pub fn with_mode(mut self, mode: LanguageMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn mode(&self) -> LanguageMode {
        self.mode
    }

    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    /// `我，何时能暴富？` with `" "` gives `wo3 he2 shi2 neng2 bao4 fu4`.
    pub fn convert(&self, text: &str, sep: &str) -> ConvertResult {
        self.convert_with(text, sep, self.mode)
    }

    pub fn convert_with(&self, text: &str, sep: &str, mode: LanguageMode) -> ConvertResult {
        text::convert(&self.lexicon, text, sep, mode)
    }

    /// `我，何时能暴富？` gives `wo3, he2 shi2 neng2 bao4 fu4?`.
    pub fn sentence(&self, text: &str) -> ConvertResult {
        self.sentence_with(text, self.mode)
    }

    pub fn sentence_with(&self, text: &str, mode: LanguageMode) -> ConvertResult {
        text::sentence(&self.lexicon, text, mode)
    }

    /// personal names: a leading surname is read with its surname reading
    pub fn name(&self, text: &str, sep: &str) -> ConvertResult {
        self.name_with(text, sep, self.mode)
    }

    pub fn name_with(&self, text: &str, sep: &str, mode: LanguageMode) -> ConvertResult {
        text::name(&self.lexicon, text, sep, mode)
    }

    /// `万俟沃喜欢吃酸奶` with `"-"` gives `m-q-w-x-h-c-s-n`.
    pub fn abbr(&self, text: &str, sep: &str) -> String {
        self.abbr_with(text, sep, self.mode)
    }

    pub fn abbr_with(&self, text: &str, sep: &str, mode: LanguageMode) -> String {
        text::abbr(&self.lexicon, text, sep, mode)
    }

    /// like [`Dict::convert`], but words outside Han text are kept as written
    pub fn convert_only_chinese(&self, text: &str, sep: &str) -> ConvertResult {
        self.convert_only_chinese_with(text, sep, self.mode)
    }

    pub fn convert_only_chinese_with(
        &self,
        text: &str,
        sep: &str,
        mode: LanguageMode,
    ) -> ConvertResult {
        text::convert_only_chinese(&self.lexicon, text, sep, mode)
    }

    /// like [`Dict::sentence`], but text outside Han spans is kept as written
    pub fn sentence_only_chinese(&self, text: &str) -> ConvertResult {
        self.sentence_only_chinese_with(text, self.mode)
    }

    pub fn sentence_only_chinese_with(&self, text: &str, mode: LanguageMode) -> ConvertResult {
        text::sentence_only_chinese(&self.lexicon, text, mode)
    }
}

impl Default for Dict<Dictionary> {
    /// converter over an owned copy of the embedded sample dictionary; [`Dict::builtin`]
    /// borrows it instead
    fn default() -> Self {
        Self::with_lexicon(Dictionary::builtin().clone())
    }
}
