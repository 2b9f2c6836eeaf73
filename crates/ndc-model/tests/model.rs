//! Tests for ndc-model types.

use chrono::NaiveDate;
use ndc_model::{
    BatchContext, CellValue, RawRecord, RecordOutcome, TaxIdKind, date_from_serial, spreadsheet_row,
};

#[test]
fn cell_blankness() {
    assert!(CellValue::Empty.is_blank());
    assert!(CellValue::from("   ").is_blank());
    assert!(!CellValue::from(" x ").is_blank());
    assert!(!CellValue::from(0.0).is_blank());
    assert!(!CellValue::from(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()).is_blank());
}

#[test]
fn cell_rendering() {
    assert_eq!(CellValue::from(12.0).render(), "12");
    assert_eq!(CellValue::from(1234.5).render(), "1234.5");
    assert_eq!(CellValue::from(-3_i64).render(), "-3");
    assert_eq!(CellValue::from("0012").render(), "0012");
    assert_eq!(CellValue::Empty.render(), "");
    let date = NaiveDate::from_ymd_opt(2024, 12, 25).unwrap();
    assert_eq!(CellValue::from(date).to_string(), "2024-12-25");
}

#[test]
fn serial_days_count_from_1899_12_30() {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d);
    assert_eq!(date_from_serial(45000.0), date(2023, 3, 15));
    assert_eq!(date_from_serial(45000.75), date(2023, 3, 15));
    assert_eq!(date_from_serial(1.0), date(1899, 12, 31));
    assert_eq!(date_from_serial(f64::NAN), None);
}

#[test]
fn raw_record_missing_fields_read_as_empty() {
    let record = RawRecord::new().with("nr_Doc_Cob", "123");
    assert_eq!(record.value("nr_Doc_Cob"), &CellValue::from("123"));
    assert_eq!(record.value("absent"), &CellValue::Empty);
    assert!(record.is_blank("absent"));
    assert!(record.get("absent").is_none());
    assert_eq!(record.len(), 1);
}

#[test]
fn raw_record_collects_from_pairs() {
    let record: RawRecord = [("a", "1"), ("b", "")].into_iter().collect();
    assert_eq!(record.fields().collect::<Vec<_>>(), vec!["a", "b"]);
    assert!(record.is_blank("b"));
}

#[test]
fn tax_id_classified_by_length() {
    assert_eq!(TaxIdKind::classify("12345678901"), TaxIdKind::Individual);
    assert_eq!(TaxIdKind::classify("12345678000199"), TaxIdKind::Organization);
    assert_eq!(TaxIdKind::classify(""), TaxIdKind::Organization);
    assert_eq!(TaxIdKind::Individual.tag(), "cd_cpf");
    assert_eq!(TaxIdKind::Organization.tag(), "cd_cnpj");
}

#[test]
fn batch_context_counts() {
    let mut context = BatchContext::new("dados.csv", "saida", 3);
    context.record_success(RecordOutcome {
        row: spreadsheet_row(0),
        artifact_name: "ND01______12.0001".to_string(),
        digest: "d41d8cd98f00b204e9800998ecf8427e".to_string(),
        artifact_path: None,
        archive_path: None,
        warnings: 2,
    });
    context.record_failure(spreadsheet_row(1), "missing required fields: nr_Doc_Cob");
    context.record_failure(spreadsheet_row(2), "boom");

    assert_eq!(context.total(), 3);
    assert_eq!(context.succeeded(), 1);
    assert_eq!(context.failed(), 2);
    assert_eq!(context.processed(), 3);
    assert_eq!(context.warnings(), 2);
    assert!(context.has_failures());
    let rows: Vec<usize> = context.failures().iter().map(|f| f.row).collect();
    assert_eq!(rows, vec![3, 4]);
}

#[test]
fn batch_context_serializes() {
    let context = BatchContext::new("dados.csv", "saida", 0);
    let json = serde_json::to_string(&context).expect("serialize context");
    let round: BatchContext = serde_json::from_str(&json).expect("deserialize context");
    assert_eq!(round, context);
}
