//! Folding a resolved tabular source into raw person records.

use pluxee_model::{RawPersonRecord, ResolvedColumns};

use crate::grid::RosterTable;

/// Turn every data row into a [`RawPersonRecord`].
///
/// No validation happens here; rows missing name or CPF still come out and
/// are skipped later by the row builder, which keeps the skip count
/// observable in one place.
pub fn extract_tabular(table: &RosterTable, columns: &ResolvedColumns) -> Vec<RawPersonRecord> {
    table
        .rows
        .iter()
        .map(|row| {
            let birth = columns
                .birth_date
                .as_deref()
                .map(|label| table.cell(row, label))
                .filter(|cell| !cell.is_empty());
            RawPersonRecord {
                name: table.cell(row, &columns.name).to_string(),
                cpf: table.cell(row, &columns.cpf).to_string(),
                birth_date_candidates: birth.map(String::from).into_iter().collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::resolve_columns;
    use crate::grid::RosterGrid;

    fn table_from(rows: Vec<Vec<&str>>) -> RosterTable {
        RosterGrid::new(
            rows.into_iter()
                .map(|row| row.into_iter().map(String::from).collect())
                .collect(),
        )
        .into_table()
        .expect("table")
    }

    #[test]
    fn rows_become_records_in_order() {
        let table = table_from(vec![
            vec!["nome", "cpf", "nascimento"],
            vec!["JOAO DA SILVA", "123.456.789-01", "01/01/1990"],
            vec!["MARIA SOUZA", "987.654.321-00", ""],
        ]);
        let columns = resolve_columns(&table).expect("columns");
        let records = extract_tabular(&table, &columns);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "JOAO DA SILVA");
        assert_eq!(records[0].cpf, "123.456.789-01");
        assert_eq!(records[0].birth_date_candidates, vec!["01/01/1990"]);
        assert_eq!(records[1].birth_date_candidates, Vec::<String>::new());
    }

    #[test]
    fn unresolved_birth_column_leaves_no_candidates() {
        let table = table_from(vec![
            vec!["nome", "cpf", "admissao"],
            vec!["JOAO", "123", "01/01/2020"],
        ]);
        let columns = resolve_columns(&table).expect("columns");
        assert!(columns.birth_date.is_none());
        let records = extract_tabular(&table, &columns);
        assert!(records[0].birth_date_candidates.is_empty());
    }
}
