//! Raw person records as produced by the source extractors.

/// One person as extracted from the roster, before any normalization.
///
/// Records are immutable after extraction; the row builder folds them into
/// output rows and discards them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawPersonRecord {
    /// Raw name text, may carry diacritics and arbitrary casing.
    pub name: String,
    /// Raw CPF text, may carry punctuation. Empty when missing.
    pub cpf: String,
    /// Date-shaped substrings found near this person, in encounter order.
    /// The earliest parseable one becomes the birth date.
    pub birth_date_candidates: Vec<String>,
}

impl RawPersonRecord {
    /// A record is valid when it carries both a non-blank name and a CPF.
    /// Invalid records are skipped (not a hard failure).
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.cpf.trim().is_empty()
    }
}

/// Header labels resolved for the three logical fields of a tabular source.
///
/// Computed once per upload, immutable thereafter. `birth_date` is `None`
/// when the fuzzy match for the birth-date header fell below the confidence
/// floor; every row then uses the default birth date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumns {
    pub name: String,
    pub cpf: String,
    pub birth_date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validity_requires_name_and_cpf() {
        let mut person = RawPersonRecord {
            name: "JOAO DA SILVA".to_string(),
            cpf: "12345678901".to_string(),
            birth_date_candidates: vec![],
        };
        assert!(person.is_valid());

        person.cpf.clear();
        assert!(!person.is_valid());

        person.cpf = "12345678901".to_string();
        person.name = "   ".to_string();
        assert!(!person.is_valid());
    }
}
