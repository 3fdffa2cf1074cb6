// text/romanize.rs
use log::debug;

use crate::{
    dict::{Lexicon, Script},
    preprocessor::{LanguageMode, SENTINEL, prepare},
    text::surname::apply_surname,
};

/// Turns text into space-joined numeric-tone pinyin.
///
/// Han text without any matching record is left as is. With `is_name` set, a surname
/// prefixing the whole text is read from the surname table before the dictionary passes.
pub fn romanize<L: Lexicon + ?Sized>(
    lexicon: &L,
    text: &str,
    mode: LanguageMode,
    is_name: bool,
) -> String {
    let mut s = prepare(text);

    if is_name {
        apply_surname(&mut s);
    }

    for &script in mode.scripts() {
        s = substitute(lexicon, s, script);
    }

    finish(&s)
}

/// One dictionary pass. A buffer equal to a whole key is replaced in one step; otherwise
/// every record, in order, rewrites all occurrences of its text in the buffer. Text that
/// has already been rewritten is pinyin and never matches a later record.
fn substitute<L: Lexicon + ?Sized>(lexicon: &L, buf: String, script: Script) -> String {
    if let Some(pinyin) = lexicon.lookup(script, &buf) {
        debug!("{:?} whole-text hit: {} -> {}", script, buf, pinyin);
        return pinyin.to_string();
    }

    let mut buf = buf;
    for record in lexicon.records() {
        let key = record.text(script);
        if key.is_empty() || !buf.contains(key) {
            continue;
        }
        let mut tagged = String::with_capacity(record.pinyin.len() + 1);
        tagged.push(SENTINEL);
        tagged.push_str(&record.pinyin);
        buf = buf.replace(key, &tagged);
    }
    debug!("{:?} pass: {:?}", script, buf);
    buf
}

/// Sentinels become spaces, space runs collapse to one, ends are trimmed.
fn finish(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for c in s.chars() {
        let c = if c == SENTINEL { ' ' } else { c };
        if c == ' ' {
            if last_space {
                continue;
            }
            last_space = true;
        } else {
            last_space = false;
        }
        out.push(c);
    }
    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::{Dictionary, Record};

    fn dict() -> Dictionary {
        Dictionary::from_records([
            Record::new("萬俟", "万俟", "mo4 qi2"),
            Record::new("了然", "了然", "liao3 ran2"),
            Record::new("何時", "何时", "he2 shi2"),
            Record::new("喜歡", "喜欢", "xi3 huan1"),
            Record::new("好的", "好的", "hao3 de"),
            Record::new("我", "我", "wo3"),
            Record::new("嗯", "嗯", "en4"),
            Record::new("馬", "马", "ma3"),
            Record::new("來", "来", "lai2"),
            Record::new("了", "了", "le"),
            Record::new("單", "单", "dan1"),
        ])
    }

    #[test]
    fn whole_text_fast_path() {
        let d = dict();
        assert_eq!(romanize(&d, "了然", LanguageMode::All, false), "liao3 ran2");
        assert_eq!(romanize(&d, "马", LanguageMode::All, false), "ma3");
        assert_eq!(romanize(&d, "馬", LanguageMode::Traditional, false), "ma3");
    }

    #[test]
    fn substitution_is_context_sensitive() {
        let d = dict();
        assert_eq!(romanize(&d, "来了", LanguageMode::All, false), "lai2 le");
    }

    #[test]
    fn mode_selects_passes() {
        let d = dict();
        assert_eq!(romanize(&d, "马", LanguageMode::Traditional, false), "马");
        assert_eq!(romanize(&d, "馬", LanguageMode::Simplified, false), "馬");
        assert_eq!(romanize(&d, "何時", LanguageMode::Traditional, false), "he2 shi2");
    }

    #[test]
    fn latin_runs_are_kept_apart() {
        let d = dict();
        assert_eq!(romanize(&d, "嗯 en 好的", LanguageMode::All, false), "en4 en hao3 de");
        assert_eq!(romanize(&d, "我ok", LanguageMode::All, false), "wo3 ok");
    }

    #[test]
    fn punctuation_stays_attached() {
        let d = dict();
        assert_eq!(
            romanize(&d, "我，何时？", LanguageMode::All, false),
            "wo3， he2 shi2？"
        );
    }

    #[test]
    fn unknown_han_passes_through() {
        let d = dict();
        assert_eq!(romanize(&d, "我猫", LanguageMode::All, false), "wo3猫");
        assert_eq!(romanize(&d, "", LanguageMode::All, false), "");
    }

    #[test]
    fn name_mode_reads_surname_once() {
        let d = dict();
        assert_eq!(romanize(&d, "单单", LanguageMode::All, true), "shan4 dan1");
        assert_eq!(romanize(&d, "单单", LanguageMode::All, false), "dan1 dan1");
        assert_eq!(romanize(&d, "万俟", LanguageMode::All, true), "mo4 qi2");
    }

    #[test]
    fn record_order_decides_overlaps() {
        // "一" is rewritten by the traditional pass before "一个" is tried as simplified.
        let d = Dictionary::from_records([
            Record::new("一個", "一个", "yi2 ge4"),
            Record::new("一", "一", "yi1"),
            Record::new("個", "个", "ge4"),
        ]);
        assert_eq!(romanize(&d, "是一个", LanguageMode::All, false), "是 yi1 ge4");
        assert_eq!(romanize(&d, "是一个", LanguageMode::Simplified, false), "是 yi2 ge4");
    }

    #[test]
    fn finish_collapses_spaces() {
        assert_eq!(finish("\ta\t\tb  c \t"), "a b c");
        assert_eq!(finish("   "), "");
    }
}
