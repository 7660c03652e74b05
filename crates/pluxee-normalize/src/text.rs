//! Plain-text normalization: transliteration, case folding, digit extraction.

use unicode_normalization::UnicodeNormalization;

/// Normalize free text for the vendor file: strip diacritics, upper-case,
/// and trim surrounding whitespace. Never truncates.
///
/// Transliteration is NFKD decomposition with combining marks removed, so
/// "José Conceição" becomes "JOSE CONCEICAO".
pub fn normalize_text(raw: &str) -> String {
    raw.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase()
        .trim()
        .to_string()
}

/// Keep only ASCII digits from the input, in order.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

// Unicode combining-mark ranges; enough for Latin-script rosters.
fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036F}'
            | '\u{1AB0}'..='\u{1AFF}'
            | '\u{1DC0}'..='\u{1DFF}'
            | '\u{20D0}'..='\u{20FF}'
            | '\u{FE20}'..='\u{FE2F}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics_and_uppercases() {
        assert_eq!(normalize_text("José da Conceição"), "JOSE DA CONCEICAO");
        assert_eq!(normalize_text("  ângela  "), "ANGELA");
    }

    #[test]
    fn leaves_plain_ascii_alone() {
        assert_eq!(normalize_text("MARIA SILVA"), "MARIA SILVA");
    }

    #[test]
    fn digits_only_drops_punctuation() {
        assert_eq!(digits_only("123.456.789-01"), "12345678901");
        assert_eq!(digits_only("no digits"), "");
    }
}
