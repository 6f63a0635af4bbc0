//! Locale-style string ordering for entity names.
//!
//! Approximates root collation: characters are first compared by a primary
//! weight (punctuation and whitespace, then digits, then letters, each folded
//! to lowercase without accents), then by accents, then by case with
//! lowercase first, and finally by code point.

use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Punctuation,
    Digit,
    Letter,
}

/// Compare two strings the way a human-facing sorted list would.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}

fn primary_key(s: &str) -> Vec<(CharClass, char)> {
    s.chars()
        .map(|c| {
            let base = fold(c);
            let class = if base.is_alphabetic() {
                CharClass::Letter
            } else if base.is_numeric() {
                CharClass::Digit
            } else {
                CharClass::Punctuation
            };
            (class, base)
        })
        .collect()
}

fn accent_key(s: &str) -> Vec<bool> {
    s.chars().map(|c| strip_accent(c) != c).collect()
}

fn case_key(s: &str) -> Vec<bool> {
    s.chars().map(char::is_uppercase).collect()
}

fn fold(c: char) -> char {
    let base = strip_accent(c);
    base.to_lowercase().next().unwrap_or(base)
}

fn strip_accent(c: char) -> char {
    match c {
        'À'..='Å' => 'A',
        'à'..='å' => 'a',
        'Ç' => 'C',
        'ç' => 'c',
        'È'..='Ë' => 'E',
        'è'..='ë' => 'e',
        'Ì'..='Ï' => 'I',
        'ì'..='ï' => 'i',
        'Ñ' => 'N',
        'ñ' => 'n',
        'Ò'..='Ö' | 'Ø' => 'O',
        'ò'..='ö' | 'ø' => 'o',
        'Ù'..='Ü' => 'U',
        'ù'..='ü' => 'u',
        'Ý' => 'Y',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}
