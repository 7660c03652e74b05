//! Integration tests: extracted records through to a written workbook.

use chrono::NaiveDate;

use pluxee_model::{DeliveryConfig, RawPersonRecord};
use pluxee_order::{BuildConfig, build_rows, write_workbook};

fn delivery() -> DeliveryConfig {
    DeliveryConfig {
        delivery_site: "MATRIZ".to_string(),
        cep: "01310-100".to_string(),
        street: "AVENIDA PAULISTA".to_string(),
        number: "1000".to_string(),
        district: "BELA VISTA".to_string(),
        city: "SAO PAULO".to_string(),
        uf: "SP".to_string(),
        responsible: "ANA PEREIRA".to_string(),
        ddd: "11".to_string(),
        phone: "999999999".to_string(),
        hand_delivery: "Não".to_string(),
        ..DeliveryConfig::default()
    }
}

fn records() -> Vec<RawPersonRecord> {
    vec![
        RawPersonRecord {
            name: "JOAO DA SILVA".to_string(),
            cpf: "123.456.789-01".to_string(),
            birth_date_candidates: vec!["01/01/1990".to_string()],
        },
        RawPersonRecord {
            name: String::new(),
            cpf: "11111111111".to_string(),
            birth_date_candidates: vec![],
        },
        RawPersonRecord {
            name: "MARIA SOUZA".to_string(),
            cpf: "98765432100".to_string(),
            birth_date_candidates: vec![],
        },
    ]
}

#[test]
fn row_count_is_twice_the_valid_persons() {
    let run_date = NaiveDate::from_ymd_opt(2026, 8, 23).expect("date");
    let config = BuildConfig::for_run_date(run_date, delivery());
    let outcome = build_rows(&records(), &config);

    assert_eq!(outcome.emitted, 2);
    assert_eq!(outcome.skipped, 1);
    assert_eq!(outcome.rows.len(), 2 * outcome.emitted);
    assert!(outcome.rows.iter().all(|row| row.credit_date == "23/09/2026"));
}

#[test]
fn delivery_fields_pass_through_verbatim() {
    let run_date = NaiveDate::from_ymd_opt(2026, 8, 23).expect("date");
    let config = BuildConfig::for_run_date(run_date, delivery());
    let outcome = build_rows(&records(), &config);

    for row in &outcome.rows {
        assert_eq!(row.delivery, delivery());
    }
}

#[test]
fn workbook_writes_to_disk() {
    let run_date = NaiveDate::from_ymd_opt(2026, 8, 23).expect("date");
    let config = BuildConfig::for_run_date(run_date, delivery());
    let outcome = build_rows(&records(), &config);

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("PLANSIP3C_TESTE.xlsx");
    write_workbook(&outcome.rows, &path).expect("write workbook");
    assert!(path.exists());
    assert!(std::fs::metadata(&path).expect("metadata").len() > 0);
}
