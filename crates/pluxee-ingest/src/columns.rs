//! Fuzzy resolution of logical fields against header labels.

use rapidfuzz::fuzz;

use pluxee_model::{OrderError, ResolvedColumns, Result};

use crate::grid::RosterTable;

/// Header label for the beneficiary name field.
pub const NAME_TARGET: &str = "nome";
/// Header label for the CPF field.
pub const CPF_TARGET: &str = "cpf";
/// Header label for the birth-date field.
pub const BIRTH_DATE_TARGET: &str = "nascimento";

/// Minimum fuzzy score (0-100) for the optional birth-date column.
pub const BIRTH_DATE_FLOOR: f64 = 70.0;

/// Weight applied to the windowed partial score, so a substring hit inside
/// a verbose label ranks just below an exact whole-label match.
const PARTIAL_WEIGHT: f64 = 0.9;

/// Fuzzy score (0-100) between a header label and a target field name.
///
/// Whole-string ratio, lifted by a weighted sliding-window ratio so that
/// verbose labels containing the target ("nascimento do funcionario") still
/// score high instead of being diluted by their extra length.
fn similarity(header: &str, target: &str) -> f64 {
    let direct = fuzz::ratio(header.chars(), target.chars());

    let header_chars: Vec<char> = header.chars().collect();
    let target_chars: Vec<char> = target.chars().collect();
    let (needle, hay) = if header_chars.len() <= target_chars.len() {
        (&header_chars, &target_chars)
    } else {
        (&target_chars, &header_chars)
    };
    if needle.is_empty() {
        return direct;
    }
    let mut partial: f64 = 0.0;
    for window in hay.windows(needle.len()) {
        let score = fuzz::ratio(needle.iter().copied(), window.iter().copied());
        partial = partial.max(score);
    }
    direct.max(PARTIAL_WEIGHT * partial)
}

/// Best-scoring header for `target`, with an optional confidence floor.
///
/// Returns `None` when `headers` is empty or the best score stays below
/// the floor.
pub fn resolve<'a>(headers: &'a [String], target: &str, floor: Option<f64>) -> Option<&'a str> {
    let mut best: Option<(&str, f64)> = None;
    for header in headers {
        let score = similarity(header, target);
        if best.is_none_or(|(_, top)| score > top) {
            best = Some((header, score));
        }
    }
    let (header, score) = best?;
    if let Some(floor) = floor
        && score < floor
    {
        tracing::debug!(field = target, header, score, floor, "best match below floor");
        return None;
    }
    tracing::debug!(field = target, header, score, "resolved column");
    Some(header)
}

/// Resolve the three logical fields of a tabular roster.
///
/// Name and CPF are required but carry no floor: the best-scoring header is
/// accepted even when the score is poor, so a roster without a real name
/// column surfaces as wrong data downstream rather than as a hard failure.
/// Known weakness, kept deliberately. The birth-date column is optional and
/// gated at [`BIRTH_DATE_FLOOR`]; when absent, every row gets the default
/// birth date.
///
/// # Errors
///
/// [`OrderError::MissingHeaders`] when there are no header cells at all.
pub fn resolve_columns(table: &RosterTable) -> Result<ResolvedColumns> {
    let name = resolve(&table.headers, NAME_TARGET, None)
        .ok_or(OrderError::MissingHeaders { field: NAME_TARGET })?;
    let cpf = resolve(&table.headers, CPF_TARGET, None)
        .ok_or(OrderError::MissingHeaders { field: CPF_TARGET })?;
    let birth_date = resolve(&table.headers, BIRTH_DATE_TARGET, Some(BIRTH_DATE_FLOOR));

    Ok(ResolvedColumns {
        name: name.to_string(),
        cpf: cpf.to_string(),
        birth_date: birth_date.map(String::from),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::RosterGrid;

    fn headers(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| (*label).to_string()).collect()
    }

    #[test]
    fn exact_match_wins() {
        let headers = headers(&["matricula", "nome", "cpf"]);
        assert_eq!(resolve(&headers, NAME_TARGET, None), Some("nome"));
        assert_eq!(resolve(&headers, CPF_TARGET, None), Some("cpf"));
    }

    #[test]
    fn close_variants_resolve() {
        let headers = headers(&["nome completo", "cpf do titular", "data de nascimento"]);
        assert_eq!(resolve(&headers, NAME_TARGET, None), Some("nome completo"));
        assert_eq!(
            resolve(&headers, BIRTH_DATE_TARGET, Some(BIRTH_DATE_FLOOR)),
            Some("data de nascimento")
        );
    }

    #[test]
    fn required_fields_accept_poor_matches() {
        // No floor: some header always comes back, even an unrelated one.
        let headers = headers(&["full name", "document", "dob"]);
        assert!(resolve(&headers, NAME_TARGET, None).is_some());
        assert!(resolve(&headers, CPF_TARGET, None).is_some());
    }

    #[test]
    fn verbose_label_containing_target_clears_floor() {
        // The whole-string ratio alone would dilute this below 70.
        let headers = headers(&["nome", "cpf", "nascimento do funcionario"]);
        assert_eq!(
            resolve(&headers, BIRTH_DATE_TARGET, Some(BIRTH_DATE_FLOOR)),
            Some("nascimento do funcionario")
        );
    }

    #[test]
    fn optional_field_below_floor_is_absent() {
        let headers = headers(&["full name", "document cpf", "dob"]);
        assert_eq!(resolve(&headers, BIRTH_DATE_TARGET, Some(BIRTH_DATE_FLOOR)), None);
    }

    #[test]
    fn empty_headers_are_fatal_for_required_fields() {
        let table = RosterGrid::new(vec![vec![]]).into_table().expect("table");
        assert!(matches!(
            resolve_columns(&table),
            Err(OrderError::MissingHeaders { .. })
        ));
    }

    #[test]
    fn resolve_columns_full_roster() {
        let grid = RosterGrid::new(vec![
            vec!["Nome".into(), "CPF".into(), "Nascimento".into()],
            vec!["JOAO".into(), "123".into(), "01/01/1990".into()],
        ]);
        let table = grid.into_table().expect("table");
        let columns = resolve_columns(&table).expect("columns");
        assert_eq!(columns.name, "nome");
        assert_eq!(columns.cpf, "cpf");
        assert_eq!(columns.birth_date.as_deref(), Some("nascimento"));
    }
}
