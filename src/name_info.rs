//! Length and reversal of a name.
//!
//! Both are measured in Unicode scalar values (`char`), so `"José"` has four
//! characters whatever its byte length. Combining sequences are not kept
//! together: a decomposed `"e\u{301}"` counts as two and reverses to
//! `"\u{301}e"`.

use crate::Name;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameInfo {
    pub length: usize,
    pub reversed: String,
}

pub fn name_info(name: &Name) -> NameInfo {
    let name = name.as_str();
    NameInfo {
        length: char_count(name),
        reversed: reverse_chars(name),
    }
}

pub fn char_count(s: &str) -> usize {
    s.chars().count()
}

pub fn reverse_chars(s: &str) -> String {
    s.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(name: &str) -> NameInfo {
        name_info(&Name::from_input(name))
    }

    #[test]
    fn ascii_name() {
        assert_eq!(
            info("Ana"),
            NameInfo {
                length: 3,
                reversed: "anA".to_string()
            }
        );
    }

    #[test]
    fn default_name() {
        let NameInfo { length, reversed } = name_info(&Name::default());
        assert_eq!(length, 5);
        assert_eq!(reversed, "odnuM");
    }

    #[test]
    fn counts_chars_not_bytes() {
        let NameInfo { length, reversed } = info("José");
        assert_eq!(length, 4);
        assert_eq!(reversed, "ésoJ");

        assert_eq!(info("Ñandú 🦀").length, 7);
        assert_eq!(info("Ñandú 🦀").reversed, "🦀 údnaÑ");
    }

    #[test]
    fn combining_marks_are_separate_chars() {
        let NameInfo { length, reversed } = info("e\u{301}");
        assert_eq!(length, 2);
        assert_eq!(reversed, "\u{301}e");
    }

    #[test]
    fn reversal_is_an_involution() {
        for s in ["", "a", "Ana", "Ana María", "Ñandú 🦀", "e\u{301}x", "日本語"] {
            assert_eq!(reverse_chars(&reverse_chars(s)), s);
            assert_eq!(char_count(&reverse_chars(s)), char_count(s));
        }
    }

    #[test]
    fn palindrome_reverses_to_itself() {
        assert_eq!(info("anilina").reversed, "anilina");
    }
}
