use std::fs::{self, File};
use std::io::Read;

use ndc_core::{TransformedRecord, transform_record};
use ndc_map::MappingOptions;
use ndc_model::RawRecord;
use ndc_output::{
    ArchiveOptions, OutputOptions, archive_artifact, encode_artifact, render_xml, write_durably,
    write_record,
};
use zip::{CompressionMethod, ZipArchive};

fn minimal_row() -> RawRecord {
    RawRecord::new()
        .with("cd_Uni_Destino", "1")
        .with("cd_Uni_Origem", "32")
        .with("tp_arquivoNDC", "01")
        .with("nr_Doc_Cob", "1234567890")
        .with("nr_Nota_Debito", "ND-1")
        .with("dt_Emissao_NDC", "25/12/2024")
        .with("dt_Ven_NDC", "2025-01-10")
        .with("vl_NDC", "10,5")
}

fn transform(raw: &RawRecord) -> TransformedRecord {
    transform_record(raw, &MappingOptions::default()).expect("transform record")
}

#[test]
fn xml_has_prolog_namespace_and_indentation() {
    let xml = render_xml(&transform(&minimal_row()).document).expect("render xml");
    let expected_head = concat!(
        "<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n",
        "<ptuA560 xmlns=\"http://ptu.unimed.coop.br/schemas/V3_0\">\n",
        "  <cabecalho>\n",
        "    <nrVerTra_PTU>02</nrVerTra_PTU>\n",
        "    <unimed>\n",
        "      <cd_Uni_Destino>0001</cd_Uni_Destino>\n",
        "      <cd_Uni_Origem>0032</cd_Uni_Origem>\n",
        "    </unimed>\n",
        "    <tp_arquivoNDC>01</tp_arquivoNDC>\n",
        "  </cabecalho>\n",
        "  <arquivoA560>\n",
        "    <Documento1>\n",
        "      <nr_Doc_Cob>1234567890</nr_Doc_Cob>\n",
        "      <Nota_Debito>\n",
        "        <nr_Nota_Debito>ND-1</nr_Nota_Debito>\n",
        "        <dt_Emissao_NDC>20241225</dt_Emissao_NDC>\n",
        "        <dt_Ven_NDC>20250110</dt_Ven_NDC>\n",
        "        <vl_NDC>10.50</vl_NDC>\n",
        "      </Nota_Debito>\n",
        "    </Documento1>\n",
    );
    assert!(xml.starts_with(expected_head), "{xml}");
    assert!(xml.contains("      <nm_credora></nm_credora>\n"));
    assert!(xml.ends_with(concat!(
        "  </arquivoA560>\n",
        "  <hash>ef97b8b37aa1dd5b909de7fac7288201</hash>\n",
        "</ptuA560>"
    )));
}

#[test]
fn postal_stamp_follows_hash() {
    let raw = minimal_row()
        .with("cmb_dt_postagem", "02/01/2025")
        .with("cmb_nr_protocolo", "PR-99");
    let xml = render_xml(&transform(&raw).document).expect("render xml");
    assert!(xml.ends_with(concat!(
        "  <hash>ef97b8b37aa1dd5b909de7fac7288201</hash>\n",
        "  <carimboCMB>\n",
        "    <dt_postagem>02/01/2025</dt_postagem>\n",
        "    <nr_protocolo>PR-99</nr_protocolo>\n",
        "  </carimboCMB>\n",
        "</ptuA560>"
    )));
}

#[test]
fn artifact_bytes_are_single_byte_ascii() {
    let raw = minimal_row().with("credora_nm_credora", "Cooperativa São João");
    let bytes = encode_artifact(&transform(&raw).document).expect("encode");
    assert!(bytes.is_ascii());
    let text = String::from_utf8(bytes).expect("ascii text");
    assert!(text.contains("<nm_credora>Cooperativa Sao Joao</nm_credora>"));
}

#[test]
fn durable_write_leaves_no_temp_files() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("saida");
    let path = write_durably(&out, "ND01_4567890.0032", b"<x/>").expect("write");
    assert_eq!(path, out.join("ND01_4567890.0032"));
    assert_eq!(fs::read(&path).expect("read back"), b"<x/>");
    assert_eq!(fs::read_dir(&out).expect("list").count(), 1);
}

#[test]
fn archive_replaces_original() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_durably(dir.path(), "ND01_4567890.0032", b"<conteudo/>").expect("write");

    let outcome = archive_artifact(&path, &ArchiveOptions::default()).expect("archive");
    assert_eq!(outcome.archive_path, dir.path().join("ND01_4567890.zip"));
    assert!(outcome.original_removed);
    assert!(!path.exists());

    let mut archive =
        ZipArchive::new(File::open(&outcome.archive_path).expect("open zip")).expect("zip");
    assert_eq!(archive.len(), 1);
    let mut entry = archive.by_name("ND01_4567890.0032").expect("entry");
    let mut contents = String::new();
    entry.read_to_string(&mut contents).expect("read entry");
    assert_eq!(contents, "<conteudo/>");
}

#[test]
fn archive_can_keep_original() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_durably(dir.path(), "ND01______12.0001", b"abc").expect("write");
    let options = ArchiveOptions {
        level: 0,
        remove_original: false,
    };
    let outcome = archive_artifact(&path, &options).expect("archive");
    assert!(!outcome.original_removed);
    assert!(path.exists());
    assert!(outcome.archive_path.exists());
}

#[test]
fn archive_level_zero_stores_and_one_to_nine_deflate() {
    let dir = tempfile::tempdir().expect("temp dir");
    for level in 0..=9u8 {
        let name = format!("ND01______1{level}.0001");
        let path =
            write_durably(dir.path(), &name, b"<conteudo>aaaaaaaaaa</conteudo>").expect("write");
        let options = ArchiveOptions {
            level,
            remove_original: true,
        };
        let outcome = archive_artifact(&path, &options).expect("archive");
        assert!(outcome.original_removed);

        let mut archive =
            ZipArchive::new(File::open(&outcome.archive_path).expect("open zip")).expect("zip");
        let mut entry = archive.by_name(&name).expect("entry");
        let expected = if level == 0 {
            CompressionMethod::Stored
        } else {
            CompressionMethod::Deflated
        };
        assert_eq!(entry.compression(), expected, "level {level}");
        let mut contents = String::new();
        entry.read_to_string(&mut contents).expect("read entry");
        assert_eq!(contents, "<conteudo>aaaaaaaaaa</conteudo>");
    }
}

#[test]
fn archive_rejects_out_of_range_level() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = write_durably(dir.path(), "ND01______12.0001", b"abc").expect("write");
    let options = ArchiveOptions {
        level: 10,
        remove_original: true,
    };
    assert!(archive_artifact(&path, &options).is_err());
    assert!(path.exists());
}

#[test]
fn write_record_with_and_without_archive() {
    let dir = tempfile::tempdir().expect("temp dir");
    let record = transform(&minimal_row());

    let plain = write_record(
        &record,
        &OutputOptions {
            output_dir: dir.path().join("plain"),
            archive: None,
        },
    )
    .expect("write plain");
    let artifact = plain.artifact_path.expect("artifact path");
    assert!(artifact.ends_with("ND01_4567890.0032"));
    assert!(plain.archive_path.is_none());

    let zipped = write_record(
        &record,
        &OutputOptions {
            output_dir: dir.path().join("zipped"),
            archive: Some(ArchiveOptions::default()),
        },
    )
    .expect("write zipped");
    assert!(zipped.artifact_path.is_none());
    let archive = zipped.archive_path.expect("archive path");
    assert!(archive.ends_with("ND01_4567890.zip"));
    assert_eq!(zipped.bytes, plain.bytes);
}
