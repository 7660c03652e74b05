//! End-to-end pipeline tests: roster file in, workbook on disk out.

use std::io::Write;

use pluxee_cli::pipeline::{GenerateRequest, finalize_delivery, run_generate};
use pluxee_model::DeliveryConfig;

fn write_roster(dir: &std::path::Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut file = std::fs::File::create(&path).expect("create roster");
    file.write_all(content.as_bytes()).expect("write roster");
    path
}

fn delivery() -> DeliveryConfig {
    finalize_delivery(DeliveryConfig {
        delivery_site: "MATRIZ".to_string(),
        district: "Jardim das Laranjeiras Imperiais do Sul".to_string(),
        city: "são paulo".to_string(),
        uf: "sp".to_string(),
        ..DeliveryConfig::default()
    })
}

#[test]
fn csv_roster_generates_workbook() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(
        dir.path(),
        "funcionarios.csv",
        "Nome,CPF,Nascimento\n\
         JOAO DA SILVA,123.456.789-01,01/01/1990\n\
         ,99999999999,\n\
         MARIA SOUZA,987.654.321-00,15/05/1985\n",
    );

    let request = GenerateRequest {
        roster,
        delivery: delivery(),
        client_name: "ACME Ltda.".to_string(),
        output_dir: dir.path().join("out"),
    };
    let result = run_generate(&request).expect("generate");

    assert_eq!(result.persons, 3);
    assert_eq!(result.emitted, 2);
    assert_eq!(result.skipped, 1);
    assert_eq!(result.rows, 4);
    assert_eq!(result.birth_column.as_deref(), Some("nascimento"));
    assert!(result.output_path.ends_with("PLANSIP3C_ACMELtda.xlsx"));
    assert!(result.output_path.exists());
}

#[test]
fn empty_roster_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let roster = write_roster(dir.path(), "vazio.csv", "");

    let request = GenerateRequest {
        roster,
        delivery: delivery(),
        client_name: "ACME".to_string(),
        output_dir: dir.path().to_path_buf(),
    };
    assert!(run_generate(&request).is_err());
}

#[test]
fn finalize_delivery_enforces_boundary_limits() {
    let config = delivery();
    assert!(config.district.chars().count() <= 30);
    assert_eq!(config.city, "SAO PAULO");
    assert_eq!(config.uf, "SP");
}
