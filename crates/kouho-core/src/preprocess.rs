use unicode_normalization::UnicodeNormalization;

/// Halfwidth/fullwidth forms block. An IME in mid-composition leaves one of
/// these as the last character of the query; matching works better with it
/// stripped.
const WIDE_FORMS_FIRST: char = '\u{FF00}';
const WIDE_FORMS_LAST: char = '\u{FFF0}';

/// Canonical form shared by dictionary keys and queries. NFC, not NFKC:
/// compatibility folding would rewrite the very width-form characters the
/// tail strip looks for.
pub fn normalize(text: &str) -> String {
    text.trim().nfc().collect()
}

/// Drop a trailing halfwidth/fullwidth-forms character from a query of at
/// least two characters.
pub fn strip_composition_tail(text: &str) -> &str {
    let mut chars = text.char_indices();
    let Some((last_idx, last)) = chars.next_back() else {
        return text;
    };
    if chars.next().is_none() {
        return text;
    }
    if (WIDE_FORMS_FIRST..=WIDE_FORMS_LAST).contains(&last) {
        &text[..last_idx]
    } else {
        text
    }
}

pub trait Preprocessor {
    // Default lookup-query preprocessor
    fn process(&self, text: &str) -> String {
        let text = normalize(text);
        strip_composition_tail(&text).to_string()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_trailing_wide_form() {
        assert_eq!(strip_composition_tail("かｋ"), "か");
        assert_eq!(strip_composition_tail("あい！"), "あい");
    }

    #[test]
    fn keeps_single_character_queries() {
        assert_eq!(strip_composition_tail("ｋ"), "ｋ");
        assert_eq!(strip_composition_tail("！"), "！");
    }

    #[test]
    fn keeps_ordinary_tails() {
        assert_eq!(strip_composition_tail("かき"), "かき");
        assert_eq!(strip_composition_tail("ab"), "ab");
        assert_eq!(strip_composition_tail(""), "");
    }

    #[test]
    fn block_boundaries() {
        // U+FF00 and U+FFF0 are inside the block, U+FEFF and U+FFF1 outside
        assert_eq!(strip_composition_tail("あ\u{FF00}"), "あ");
        assert_eq!(strip_composition_tail("あ\u{FFF0}"), "あ");
        assert_eq!(strip_composition_tail("あ\u{FEFF}"), "あ\u{FEFF}");
        assert_eq!(strip_composition_tail("あ\u{FFF1}"), "あ\u{FFF1}");
    }

    #[test]
    fn process_trims_and_strips() {
        let processed = DefaultPreprocessor.process("  かｋ ");
        assert_eq!(processed, "か");
    }

    #[test]
    fn process_normalizes_to_nfc() {
        // か + combining dakuten composes to が
        let processed = DefaultPreprocessor.process("か\u{3099}き");
        assert_eq!(processed, "がき");
    }
}
