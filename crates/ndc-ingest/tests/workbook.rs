use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use ndc_ingest::{IngestError, IngestOptions, read_records};
use ndc_model::CellValue;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#;

const WORKBOOK: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets><sheet name="Planilha1" sheetId="1" r:id="rId1"/></sheets>
</workbook>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#;

/// Style 1 applies the built-in date format 14.
const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<cellXfs count="2"><xf numFmtId="0"/><xf numFmtId="14" applyNumberFormat="1"/></cellXfs>
</styleSheet>"#;

const SHEET: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<sheetData>
<row r="1">
<c r="A1" t="inlineStr"><is><t>codigo_destino</t></is></c>
<c r="B1" t="inlineStr"><is><t>nr_Doc_Cob</t></is></c>
<c r="C1" t="inlineStr"><is><t>vl_NDC</t></is></c>
<c r="D1" t="inlineStr"><is><t>dt_Ven_NDC</t></is></c>
</row>
<row r="2">
<c r="A2"><v>1</v></c>
<c r="B2" t="inlineStr"><is><t>1234567890</t></is></c>
<c r="C2"><v>10.5</v></c>
<c r="D2" s="1"><v>45000</v></c>
</row>
<row r="4">
<c r="A4"><v>32</v></c>
<c r="B4" t="inlineStr"><is><t>ND-2</t></is></c>
</row>
</sheetData>
</worksheet>"#;

fn write_workbook(path: &Path) {
    let mut zip = ZipWriter::new(File::create(path).expect("create workbook"));
    for (name, contents) in [
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", ROOT_RELS),
        ("xl/workbook.xml", WORKBOOK),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS),
        ("xl/styles.xml", STYLES),
        ("xl/worksheets/sheet1.xml", SHEET),
    ] {
        zip.start_file(name, SimpleFileOptions::default())
            .expect("start entry");
        zip.write_all(contents.as_bytes()).expect("write entry");
    }
    zip.finish().expect("finish workbook");
}

#[test]
fn reads_first_sheet_with_typed_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("dados.xlsx");
    write_workbook(&path);
    let options = IngestOptions {
        delimiter: None,
        aliases: BTreeMap::from([("codigo_destino".to_string(), "cd_Uni_Destino".to_string())]),
    };

    let table = read_records(&path, &options).expect("read workbook");

    assert_eq!(
        table.headers,
        ["cd_Uni_Destino", "nr_Doc_Cob", "vl_NDC", "dt_Ven_NDC"]
    );
    assert_eq!(table.len(), 2, "blank row skipped");
    assert_eq!(table.encoding, "workbook");

    let first = &table.records[0];
    assert_eq!(first.value("cd_Uni_Destino"), &CellValue::Number(1.0));
    assert_eq!(first.value("nr_Doc_Cob"), &CellValue::from("1234567890"));
    assert_eq!(first.value("vl_NDC"), &CellValue::Number(10.5));
    assert_eq!(
        first.value("dt_Ven_NDC"),
        &CellValue::Date(NaiveDate::from_ymd_opt(2023, 3, 15).expect("valid date"))
    );

    let second = &table.records[1];
    assert_eq!(second.value("cd_Uni_Destino").render(), "32");
    assert_eq!(second.value("nr_Doc_Cob"), &CellValue::from("ND-2"));
    assert!(second.value("vl_NDC").is_blank());
    assert!(second.value("dt_Ven_NDC").is_blank());
}

#[test]
fn unreadable_workbook_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("corrompido.xlsx");
    std::fs::write(&path, b"nr_Doc_Cob;vl_NDC\n1;2\n").expect("write file");

    let error = read_records(&path, &IngestOptions::default()).expect_err("not a workbook");
    assert!(matches!(error, IngestError::Workbook { .. }));
    assert!(error.to_string().contains("corrompido.xlsx"));
}
