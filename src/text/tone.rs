// text/tone.rs

/// Numeric-tone finals and their diacritic forms.
///
/// Longer finals come after the shorter finals they contain; `to_unicode` walks the table
/// backwards so `ang1` is rewritten before `a1` gets a chance to match inside it.
#[rustfmt::skip]
pub static FINALS: &[(&str, &str)] = &[
    // a o e i u v
    ("a1", "ā"), ("a2", "á"), ("a3", "ǎ"), ("a4", "à"),
    ("o1", "ō"), ("o2", "ó"), ("o3", "ǒ"), ("o4", "ò"),
    ("e1", "ē"), ("e2", "é"), ("e3", "ě"), ("e4", "è"),
    ("i1", "ī"), ("i2", "í"), ("i3", "ǐ"), ("i4", "ì"),
    ("u1", "ū"), ("u2", "ú"), ("u3", "ǔ"), ("u4", "ù"),
    ("v1", "ǖ"), ("v2", "ǘ"), ("v3", "ǚ"), ("v4", "ǜ"),
    // ai ei ui ao ou iu
    ("ai1", "āi"), ("ai2", "ái"), ("ai3", "ǎi"), ("ai4", "ài"),
    ("ei1", "ēi"), ("ei2", "éi"), ("ei3", "ěi"), ("ei4", "èi"),
    ("ui1", "uī"), ("ui2", "uí"), ("ui3", "uǐ"), ("ui4", "uì"),
    ("ao1", "āo"), ("ao2", "áo"), ("ao3", "ǎo"), ("ao4", "ào"),
    ("ou1", "ōu"), ("ou2", "óu"), ("ou3", "ǒu"), ("ou4", "òu"),
    ("iu1", "iū"), ("iu2", "iú"), ("iu3", "iǔ"), ("iu4", "iù"),
    // ie ue ve er
    ("ie1", "iē"), ("ie2", "ié"), ("ie3", "iě"), ("ie4", "iè"),
    ("ue1", "uē"), ("ue2", "ué"), ("ue3", "uě"), ("ue4", "uè"),
    ("ve1", "üē"), ("ve2", "üé"), ("ve3", "üě"), ("ve4", "üè"),
    ("er1", "ēr"), ("er2", "ér"), ("er3", "ěr"), ("er4", "èr"),
    // an en in un vn
    ("an1", "ān"), ("an2", "án"), ("an3", "ǎn"), ("an4", "àn"),
    ("en1", "ēn"), ("en2", "én"), ("en3", "ěn"), ("en4", "èn"),
    ("in1", "īn"), ("in2", "ín"), ("in3", "ǐn"), ("in4", "ìn"),
    ("un1", "ūn"), ("un2", "ún"), ("un3", "ǔn"), ("un4", "ùn"),
    ("vn1", "ǖn"), ("vn2", "ǘn"), ("vn3", "ǚn"), ("vn4", "ǜn"),
    // ang eng ing ong
    ("ang1", "āng"), ("ang2", "áng"), ("ang3", "ǎng"), ("ang4", "àng"),
    ("eng1", "ēng"), ("eng2", "éng"), ("eng3", "ěng"), ("eng4", "èng"),
    ("ing1", "īng"), ("ing2", "íng"), ("ing3", "ǐng"), ("ing4", "ìng"),
    ("ong1", "ōng"), ("ong2", "óng"), ("ong3", "ǒng"), ("ong4", "òng"),
];

/// How a result shows tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum ToneStyle {
    /// `mei3 hao3`
    #[default]
    Ascii,
    /// `měi hǎo`
    Unicode,
    /// `mei hao`
    None,
}

pub fn is_tone_digit(c: char) -> bool {
    matches!(c, '1'..='4')
}

pub fn to_unicode(s: &str) -> String {
    let mut out = s.to_string();
    for (ascii, unicode) in FINALS.iter().rev() {
        if out.contains(ascii) {
            out = out.replace(ascii, unicode);
        }
    }
    out
}

pub fn strip_tones(s: &str) -> String {
    s.chars().filter(|&c| !is_tone_digit(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longer_finals_win() {
        assert_eq!(to_unicode("huang1"), "huāng");
        assert_eq!(to_unicode("neng2"), "néng");
        assert_eq!(to_unicode("xiao3"), "xiǎo");
        assert_eq!(to_unicode("nai3"), "nǎi");
    }

    #[test]
    fn umlaut_and_medial_finals() {
        assert_eq!(to_unicode("lv4"), "lǜ");
        assert_eq!(to_unicode("lve4"), "lüè");
        assert_eq!(to_unicode("xue2"), "xué");
        assert_eq!(to_unicode("liu4"), "liù");
        assert_eq!(to_unicode("gui4"), "guì");
        assert_eq!(to_unicode("er2"), "ér");
    }

    #[test]
    fn neutral_and_foreign_text_untouched() {
        assert_eq!(to_unicode("de men"), "de men");
        assert_eq!(to_unicode("Key-Value"), "Key-Value");
        assert_eq!(to_unicode(""), "");
    }

    #[test]
    fn strip_removes_only_tone_digits() {
        let s = "wo3, he2 shi2 neng2 bao4 fu4? 2050";
        let stripped = strip_tones(s);
        assert_eq!(stripped, "wo, he shi neng bao fu? 050");
        let digits = s.chars().filter(|&c| is_tone_digit(c)).count();
        assert_eq!(stripped.len(), s.len() - digits);
    }

    #[test]
    fn every_final_has_four_tones() {
        assert_eq!(FINALS.len() % 4, 0);
        for chunk in FINALS.chunks(4) {
            let stem = chunk[0].0.trim_end_matches('1');
            for (tone, (ascii, _)) in chunk.iter().enumerate() {
                assert_eq!(*ascii, format!("{}{}", stem, tone + 1));
            }
        }
    }
}
