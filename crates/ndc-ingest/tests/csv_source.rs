use std::collections::BTreeMap;
use std::io::Write;

use ndc_ingest::{IngestError, IngestOptions, parse_records, read_records};
use ndc_model::CellValue;
use tempfile::NamedTempFile;

fn temp_csv(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents).expect("write csv");
    file.flush().expect("flush csv");
    file
}

#[test]
fn reads_semicolon_export_with_bom() {
    let file = temp_csv(
        "\u{feff}nr_Doc_Cob ; vl_NDC;linha_1\n 123 ;10,5;\n;;\n456;7;Mensalidade\n".as_bytes(),
    );
    let table = read_records(file.path(), &IngestOptions::default()).expect("read csv");

    assert_eq!(table.headers, ["nr_Doc_Cob", "vl_NDC", "linha_1"]);
    assert_eq!(table.len(), 2, "blank row skipped");
    assert_eq!(table.encoding, "UTF-8");

    let first = &table.records[0];
    assert_eq!(first.value("nr_Doc_Cob"), &CellValue::from("123"));
    assert_eq!(first.value("vl_NDC"), &CellValue::from("10,5"));
    assert_eq!(first.value("linha_1"), &CellValue::Empty);
    assert_eq!(table.records[1].value("linha_1"), &CellValue::from("Mensalidade"));
}

#[test]
fn decodes_windows_1252_exports() {
    let file = temp_csv(b"credora_nm_credora,nr_Doc_Cob\nUnimed S\xe3o Jos\xe9,1\n");
    let table = read_records(file.path(), &IngestOptions::default()).expect("read csv");
    assert_eq!(table.encoding, "windows-1252");
    assert_eq!(
        table.records[0].value("credora_nm_credora"),
        &CellValue::from("Unimed São José")
    );
}

#[test]
fn aliases_rename_headers() {
    let options = IngestOptions {
        delimiter: None,
        aliases: BTreeMap::from([("codigo_destino".to_string(), "cd_Uni_Destino".to_string())]),
    };
    let table = parse_records("codigo_destino,tp_arquivoNDC\n1,01\n", &options).expect("parse");
    assert_eq!(table.headers, ["cd_Uni_Destino", "tp_arquivoNDC"]);
    assert_eq!(table.records[0].value("cd_Uni_Destino"), &CellValue::from("1"));
    assert!(table.records[0].value("codigo_destino").is_blank());
}

#[test]
fn short_and_long_rows_are_tolerated() {
    let table = parse_records("a,b,c\n1\n1,2,3,4\n", &IngestOptions::default()).expect("parse");
    assert_eq!(table.len(), 2);
    assert_eq!(table.records[0].value("b"), &CellValue::Empty);
    assert_eq!(table.records[1].value("c"), &CellValue::from("3"));
    assert_eq!(table.records[1].len(), 3);
}

#[test]
fn explicit_delimiter_overrides_sniffing() {
    let options = IngestOptions {
        delimiter: Some(b'|'),
        ..IngestOptions::default()
    };
    let table = parse_records("a|b\n1,5|x\n", &options).expect("parse");
    assert_eq!(table.records[0].value("a"), &CellValue::from("1,5"));
}

#[test]
fn header_only_source_has_no_records() {
    let table = parse_records("a;b\n\n", &IngestOptions::default()).expect("parse");
    assert!(table.is_empty());
    assert_eq!(table.headers, ["a", "b"]);
}

#[test]
fn empty_source_is_an_error() {
    let result = parse_records("\n  \n", &IngestOptions::default());
    assert!(matches!(result, Err(IngestError::MissingHeader)));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");
    let error = read_records(&path, &IngestOptions::default()).expect_err("missing file");
    assert!(error.to_string().contains("absent.csv"));
}
