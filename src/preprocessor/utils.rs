use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// Separator put in front of every protected Latin run and every substituted reading.
pub const SENTINEL: char = '\t';

/// Han script ideographs, radicals and iteration marks.
pub fn is_han(c: char) -> bool {
    let code = c as u32;
    // CJK Unified Ideographs
    (0x4E00..=0x9FFF).contains(&code)
        // Extension A
        || (0x3400..=0x4DBF).contains(&code)
        // Extensions B-I
        || (0x20000..=0x2EE5F).contains(&code)
        // Extensions G-H
        || (0x30000..=0x323AF).contains(&code)
        // Compatibility ideographs
        || (0xF900..=0xFAFF).contains(&code)
        || (0x2F800..=0x2FA1F).contains(&code)
        // Radicals supplement, Kangxi radicals
        || (0x2E80..=0x2EFF).contains(&code)
        || (0x2F00..=0x2FDF).contains(&code)
        // 々 〇 〡-〩 〸-〻
        || matches!(code, 0x3005 | 0x3007 | 0x3021..=0x3029 | 0x3038..=0x303B)
}

/// `[A-Za-z0-9_-]`: characters of a run that substitution must never touch.
pub fn is_latin_run_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Letters, marks, numbers, punctuation, separators, Han and the sentinel survive
/// preparation; symbols and control characters do not.
pub fn is_kept(c: char) -> bool {
    c == SENTINEL
        || is_han(c)
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter
                | GeneralCategoryGroup::Mark
                | GeneralCategoryGroup::Number
                | GeneralCategoryGroup::Punctuation
                | GeneralCategoryGroup::Separator
        )
}

/// Word characters of non-Han text: letters, marks, numbers, `_` and `-`.
pub fn is_word_char(c: char) -> bool {
    c == '_'
        || c == '-'
        || matches!(
            c.general_category_group(),
            GeneralCategoryGroup::Letter | GeneralCategoryGroup::Mark | GeneralCategoryGroup::Number
        )
}

pub fn is_punctuation(c: char) -> bool {
    c.general_category_group() == GeneralCategoryGroup::Punctuation
}

/// Opening brackets and quotes (`Ps`, `Pi`).
pub fn is_opening_punctuation(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::OpenPunctuation | GeneralCategory::InitialPunctuation
    )
}
