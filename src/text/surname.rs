// text/surname.rs
use log::debug;

use crate::preprocessor::SENTINEL;

/// Surnames read differently from the same characters in ordinary words.
///
/// Checked in order and only as a prefix of the whole name; compound surnames sit ahead
/// of the single characters they start with.
#[rustfmt::skip]
pub static SURNAMES: &[(&str, &str)] = &[
    ("万俟", "mo4 qi2"), ("尉迟", "yu4 chi2"), ("单于", "chan2 yu2"),
    ("不", "fou3"), ("沈", "shen3"), ("称", "cheng1"), ("车", "che1"),
    ("万", "wan4"), ("汤", "tang1"), ("阿", "a1"), ("丁", "ding1"),
    ("强", "qiang2"), ("仇", "qiu2"), ("叶", "ye4"), ("阚", "kan4"),
    ("乐", "yue4"), ("乜", "nie4"), ("陆", "lu4"), ("殷", "yin1"),
    ("牟", "mou2"), ("区", "ou1"), ("宿", "su4"), ("俞", "yu2"),
    ("余", "yu2"), ("齐", "qi2"), ("许", "xu3"), ("信", "xin4"),
    ("无", "wu2"), ("浣", "wan3"), ("艾", "ai4"), ("浅", "qian3"),
    ("烟", "yan1"), ("蓝", "lan2"), ("於", "yu2"), ("寻", "xun2"),
    ("殳", "shu1"), ("思", "si1"), ("鸟", "niao3"), ("卜", "bu3"),
    ("单", "shan4"), ("南", "nan2"), ("柏", "bai3"), ("朴", "piao2"),
    ("繁", "po2"), ("曾", "zeng1"), ("瞿", "qu2"), ("缪", "miao4"),
    ("石", "shi2"), ("冯", "feng2"), ("覃", "qin2"), ("幺", "yao1"),
    ("种", "chong2"), ("折", "she4"), ("燕", "yan1"), ("纪", "ji3"),
    ("过", "guo1"), ("华", "hua4"), ("冼", "xian3"), ("秘", "bi4"),
    ("重", "chong2"), ("解", "xie4"), ("那", "na1"), ("和", "he2"),
    ("贾", "jia3"), ("塔", "ta3"), ("盛", "sheng4"), ("查", "zha1"),
    ("盖", "ge3"), ("居", "ju1"), ("哈", "ha3"), ("的", "de1"),
    ("薄", "bo2"), ("佴", "nai4"), ("六", "lu4"), ("都", "du1"),
    ("翟", "zhai2"), ("扎", "za1"), ("藏", "zang4"), ("粘", "nian4"),
    ("难", "nan4"), ("若", "ruo4"),
];

pub fn find_surname(text: &str) -> Option<(&'static str, &'static str)> {
    SURNAMES
        .iter()
        .find(|(surname, _)| text.starts_with(surname))
        .copied()
}

/// Replaces the first table surname that prefixes `text` with its sentinel-tagged reading.
/// At most one surname is applied.
pub fn apply_surname(text: &mut String) -> bool {
    let Some((surname, reading)) = find_surname(text) else {
        return false;
    };
    debug!("surname {} -> {}", surname, reading);
    let mut tagged = String::with_capacity(reading.len() + 1);
    tagged.push(SENTINEL);
    tagged.push_str(reading);
    text.replace_range(..surname.len(), &tagged);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compound_surname_before_single() {
        let mut s = "万俟沃".to_string();
        assert!(apply_surname(&mut s));
        assert_eq!(s, "\tmo4 qi2沃");

        let mut s = "万里".to_string();
        assert!(apply_surname(&mut s));
        assert_eq!(s, "\twan4里");
    }

    #[test]
    fn only_prefix_is_replaced() {
        let mut s = "单单".to_string();
        assert!(apply_surname(&mut s));
        assert_eq!(s, "\tshan4单");
    }

    #[test]
    fn no_surname_leaves_text_alone() {
        let mut s = "我们".to_string();
        assert!(!apply_surname(&mut s));
        assert_eq!(s, "我们");

        let mut s = "\tTom单".to_string();
        assert!(!apply_surname(&mut s));
    }

    #[test]
    fn table_has_no_duplicates() {
        let mut names: Vec<_> = SURNAMES.iter().map(|(s, _)| *s).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SURNAMES.len());
    }
}
