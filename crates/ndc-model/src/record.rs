//! Intermediate representation of one notice, produced by the record mapper.
//!
//! Values are kept as raw [`CellValue`]s: formatting and sanitization happen
//! in the document builder, which needs the original cell type (a numeric
//! date serial is not the same thing as the text `"45000"` once rendered).

use crate::value::CellValue;

/// Protocol version used when the source leaves `nrVerTra_PTU` blank.
pub const DEFAULT_PROTOCOL_VERSION: &str = "02";

/// Upper bound of the `linha_N` group on a debit note.
pub const MAX_NOTE_LINES: usize = 32;

/// Upper bound of the `boleto_instrucao_N` group.
pub const MAX_INSTRUCTIONS: usize = 3;

/// Upper bound of the `boleto_observacao_N` group.
pub const MAX_OBSERVATIONS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct A560Record {
    pub header: HeaderInput,
    pub first: DocumentInput,
    /// Present only when the source carries a second document number.
    pub second: Option<DocumentInput>,
    pub creditor: PartyInput,
    pub debtor: PartyInput,
    pub postal_stamp: PostalStampInput,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderInput {
    pub protocol_version: CellValue,
    pub destination_unit: CellValue,
    pub origin_unit: CellValue,
    pub file_type: CellValue,
    pub partial_flag: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInput {
    pub document_number: CellValue,
    pub debit_note: DebitNoteInput,
    pub slip: BillingSlipInput,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DebitNoteInput {
    pub number: CellValue,
    pub issue_date: CellValue,
    pub due_date: CellValue,
    pub amount: CellValue,
    /// Non-blank lines in source index order.
    pub lines: Vec<CellValue>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillingSlipInput {
    pub bank_code: CellValue,
    pub agency_code: CellValue,
    pub our_number: CellValue,
    pub bank_usage: CellValue,
    pub wallet: CellValue,
    pub species: CellValue,
    pub document_species: CellValue,
    pub acceptance: CellValue,
    pub processing_date: CellValue,
    pub payment_place: CellValue,
    pub payment_place_note: CellValue,
    pub instructions: Vec<CellValue>,
    pub observations: Vec<CellValue>,
    pub digitable_line: CellValue,
    pub barcode: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartyInput {
    pub name: CellValue,
    pub address: AddressInput,
    pub tax_id: CellValue,
    pub phone: PhoneInput,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressInput {
    pub street_type: CellValue,
    pub street_name: CellValue,
    pub number: CellValue,
    pub complement: CellValue,
    pub neighborhood: CellValue,
    pub municipality_code: CellValue,
    pub postal_code: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhoneInput {
    pub area_code: CellValue,
    pub number: CellValue,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostalStampInput {
    pub posting_date: CellValue,
    pub protocol_number: CellValue,
}

/// Which side of the claim a party block describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartyRole {
    Creditor,
    Debtor,
}

impl PartyRole {
    /// Prefix of the party's fields in the tabular source.
    pub const fn source_prefix(self) -> &'static str {
        match self {
            Self::Creditor => "credora_",
            Self::Debtor => "devedora_",
        }
    }

    /// Name field suffix (`nm_credora` / `nm_devedora`).
    pub const fn name_field(self) -> &'static str {
        match self {
            Self::Creditor => "nm_credora",
            Self::Debtor => "nm_devedora",
        }
    }

    pub const fn block_tag(self) -> &'static str {
        match self {
            Self::Creditor => "Dados_Credora",
            Self::Debtor => "Dados_Devedora",
        }
    }
}

/// Tax id classification, decided purely by character length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaxIdKind {
    /// Exactly 11 characters (CPF).
    Individual,
    /// Any other length (CNPJ).
    Organization,
}

impl TaxIdKind {
    pub const INDIVIDUAL_LEN: usize = 11;

    pub fn classify(tax_id: &str) -> Self {
        if tax_id.chars().count() == Self::INDIVIDUAL_LEN {
            Self::Individual
        } else {
            Self::Organization
        }
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Individual => "cd_cpf",
            Self::Organization => "cd_cnpj",
        }
    }
}
