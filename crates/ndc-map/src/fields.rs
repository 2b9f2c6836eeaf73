//! Source field names understood by the mapper.
//!
//! Document fields are written without prefix for the first document and with
//! [`SECOND_DOCUMENT_PREFIX`] for the second. Billing slip fields additionally
//! carry [`SLIP_PREFIX`], party fields carry the role prefix
//! (`credora_` / `devedora_`).

use ndc_model::{MAX_INSTRUCTIONS, MAX_NOTE_LINES, MAX_OBSERVATIONS, PartyRole};

pub const PROTOCOL_VERSION: &str = "nrVerTra_PTU";
pub const DESTINATION_UNIT: &str = "cd_Uni_Destino";
pub const ORIGIN_UNIT: &str = "cd_Uni_Origem";
pub const FILE_TYPE: &str = "tp_arquivoNDC";
pub const PARTIAL_FLAG: &str = "tp_arq_parcial";

pub const SECOND_DOCUMENT_PREFIX: &str = "doc2_";
pub const SLIP_PREFIX: &str = "boleto_";

pub const DOCUMENT_NUMBER: &str = "nr_Doc_Cob";
pub const NOTE_NUMBER: &str = "nr_Nota_Debito";
pub const ISSUE_DATE: &str = "dt_Emissao_NDC";
pub const DUE_DATE: &str = "dt_Ven_NDC";
pub const AMOUNT: &str = "vl_NDC";
pub const NOTE_LINE_GROUP: &str = "linha";

pub const BANK_CODE: &str = "nr_Banco";
pub const AGENCY_CODE: &str = "agencia_Cd_Cedente";
pub const OUR_NUMBER: &str = "nosso_Numero";
pub const BANK_USAGE: &str = "uso_banco";
pub const WALLET: &str = "ds_carteira";
pub const SPECIES: &str = "especie";
pub const DOCUMENT_SPECIES: &str = "especie_doc";
pub const ACCEPTANCE: &str = "aceite";
pub const PROCESSING_DATE: &str = "dt_proces";
pub const PAYMENT_PLACE: &str = "local_pgto";
pub const PAYMENT_PLACE_NOTE: &str = "obs_local_pagto";
pub const INSTRUCTION_GROUP: &str = "instrucao";
pub const OBSERVATION_GROUP: &str = "observacao";
pub const DIGITABLE_LINE: &str = "linha_digitavel";
pub const BARCODE: &str = "cd_barras";

pub const STREET_TYPE: &str = "tp_logradouro";
pub const STREET_NAME: &str = "ds_lograd";
pub const STREET_NUMBER: &str = "nr_lograd";
pub const COMPLEMENT: &str = "compl_lograd";
pub const NEIGHBORHOOD: &str = "ds_bairro";
pub const MUNICIPALITY: &str = "cd_munic";
pub const POSTAL_CODE: &str = "nr_cep";
pub const TAX_ID: &str = "cpf_cnpj";
pub const AREA_CODE: &str = "nr_ddd";
pub const PHONE_NUMBER: &str = "nr_fone";

pub const POSTING_DATE: &str = "cmb_dt_postagem";
pub const STAMP_PROTOCOL: &str = "cmb_nr_protocolo";

/// Fields checked when required-field validation is enabled.
pub const REQUIRED_FIELDS: &[&str] = &[
    DESTINATION_UNIT,
    ORIGIN_UNIT,
    FILE_TYPE,
    DOCUMENT_NUMBER,
    NOTE_NUMBER,
    ISSUE_DATE,
    DUE_DATE,
    AMOUNT,
    "credora_nm_credora",
    "credora_tp_logradouro",
    "credora_ds_lograd",
    "credora_nr_lograd",
    "credora_cd_munic",
    "credora_nr_cep",
    "credora_cpf_cnpj",
    "devedora_nm_devedora",
    "devedora_tp_logradouro",
    "devedora_ds_lograd",
    "devedora_nr_lograd",
    "devedora_cd_munic",
    "devedora_nr_cep",
    "devedora_cpf_cnpj",
];

const SLIP_LEADING_FIELDS: [&str; 11] = [
    BANK_CODE,
    AGENCY_CODE,
    OUR_NUMBER,
    BANK_USAGE,
    WALLET,
    SPECIES,
    DOCUMENT_SPECIES,
    ACCEPTANCE,
    PROCESSING_DATE,
    PAYMENT_PLACE,
    PAYMENT_PLACE_NOTE,
];

const PARTY_ADDRESS_FIELDS: [&str; 7] = [
    STREET_TYPE,
    STREET_NAME,
    STREET_NUMBER,
    COMPLEMENT,
    NEIGHBORHOOD,
    MUNICIPALITY,
    POSTAL_CODE,
];

/// Every source field name the mapper reads, in document order.
pub fn expected_fields() -> Vec<String> {
    let mut fields: Vec<String> = [
        PROTOCOL_VERSION,
        DESTINATION_UNIT,
        ORIGIN_UNIT,
        FILE_TYPE,
        PARTIAL_FLAG,
    ]
    .iter()
    .map(|field| (*field).to_string())
    .collect();

    for prefix in ["", SECOND_DOCUMENT_PREFIX] {
        for field in [DOCUMENT_NUMBER, NOTE_NUMBER, ISSUE_DATE, DUE_DATE, AMOUNT] {
            fields.push(format!("{prefix}{field}"));
        }
        for index in 1..=MAX_NOTE_LINES {
            fields.push(format!("{prefix}{NOTE_LINE_GROUP}_{index}"));
        }
        let slip = format!("{prefix}{SLIP_PREFIX}");
        for field in SLIP_LEADING_FIELDS {
            fields.push(format!("{slip}{field}"));
        }
        for index in 1..=MAX_INSTRUCTIONS {
            fields.push(format!("{slip}{INSTRUCTION_GROUP}_{index}"));
        }
        for index in 1..=MAX_OBSERVATIONS {
            fields.push(format!("{slip}{OBSERVATION_GROUP}_{index}"));
        }
        fields.push(format!("{slip}{DIGITABLE_LINE}"));
        fields.push(format!("{slip}{BARCODE}"));
    }

    for role in [PartyRole::Creditor, PartyRole::Debtor] {
        let prefix = role.source_prefix();
        fields.push(format!("{prefix}{}", role.name_field()));
        for field in PARTY_ADDRESS_FIELDS {
            fields.push(format!("{prefix}{field}"));
        }
        for field in [TAX_ID, AREA_CODE, PHONE_NUMBER] {
            fields.push(format!("{prefix}{field}"));
        }
    }

    fields.push(POSTING_DATE.to_string());
    fields.push(STAMP_PROTOCOL.to_string());
    fields
}
