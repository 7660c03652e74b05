//! Fit-to-width abbreviation for names and place names.
//!
//! The vendor layout caps beneficiary names at 40 characters and district or
//! city names at 30. Middle tokens are shortened to initials one at a time,
//! keeping the first and last token intact for as long as possible.

use crate::text::normalize_text;

/// Abbreviate `raw` so the result never exceeds `limit` characters.
///
/// 1. Normalize (transliterate, upper-case, trim); return as-is if it fits.
/// 2. With one or two tokens there is nothing to abbreviate: hard-truncate.
/// 3. Otherwise shorten middle tokens longer than 2 chars to "X." left to
///    right, returning the first assembly of `first middles last` that fits.
/// 4. If none fits, "first last" hard-truncated to `limit`.
pub fn abbreviate(raw: &str, limit: usize) -> String {
    let normalized = normalize_text(raw);
    if normalized.chars().count() <= limit {
        return normalized;
    }

    let tokens: Vec<&str> = normalized.split_whitespace().collect();
    if tokens.len() <= 2 {
        return truncate_chars(&normalized, limit);
    }

    let first = tokens[0];
    let last = tokens[tokens.len() - 1];
    let mut middle: Vec<String> = tokens[1..tokens.len() - 1]
        .iter()
        .map(|token| (*token).to_string())
        .collect();

    for index in 0..middle.len() {
        if middle[index].chars().count() > 2
            && let Some(initial) = middle[index].chars().next()
        {
            middle[index] = format!("{initial}.");
        }
        let attempt = assemble(first, &middle, last);
        if attempt.chars().count() <= limit {
            return attempt;
        }
    }

    truncate_chars(&format!("{first} {last}"), limit)
}

fn assemble(first: &str, middle: &[String], last: &str) -> String {
    let mut parts = Vec::with_capacity(middle.len() + 2);
    parts.push(first);
    parts.extend(middle.iter().map(String::as_str));
    parts.push(last);
    parts.join(" ")
}

fn truncate_chars(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_pass_through_normalized() {
        // 29 chars, fits at limit 40.
        assert_eq!(
            abbreviate("Maria da Silva Santos Pereira", 40),
            "MARIA DA SILVA SANTOS PEREIRA"
        );
    }

    #[test]
    fn middle_tokens_abbreviate_left_to_right() {
        let name = "FRANCISCO ALEXANDRINO EVANGELISTA NASCIMENTO FIGUEIREDO";
        let out = abbreviate(name, 40);
        assert!(out.chars().count() <= 40, "got {out:?}");
        assert!(out.starts_with("FRANCISCO"));
        assert!(out.ends_with("FIGUEIREDO"));
        assert!(out.contains('.'));
    }

    #[test]
    fn stops_at_first_fitting_assembly() {
        // Abbreviating only the first middle token already fits.
        let out = abbreviate("ABCDEFGHIJ KLMNOPQRST UV WXYZABCDE", 30);
        assert_eq!(out, "ABCDEFGHIJ K. UV WXYZABCDE");
    }

    #[test]
    fn two_tokens_hard_truncate() {
        let out = abbreviate("SUPERCALIFRAGILISTIC EXPIALIDOCIOUSNAME", 20);
        assert_eq!(out.chars().count(), 20);
        assert_eq!(out, "SUPERCALIFRAGILISTIC");
    }

    #[test]
    fn short_middle_tokens_are_kept() {
        // "DA" stays, longer middles collapse.
        let out = abbreviate("MARIA DA CONCEICAO BATISTA FERREIRA DOS SANTOS", 30);
        assert!(out.chars().count() <= 30);
        assert!(out.contains("DA"));
    }

    #[test]
    fn fallback_joins_first_and_last() {
        let out = abbreviate("AAAAAAAAAAAAAAA BBBBBBB CCCCCCC DDDDDDDDDDDDDDD", 20);
        // Even "first last" exceeds 20 chars here, so it is truncated.
        assert_eq!(out, "AAAAAAAAAAAAAAA DDDD");
    }

    #[test]
    fn empty_input_yields_empty() {
        assert_eq!(abbreviate("", 30), "");
    }
}
