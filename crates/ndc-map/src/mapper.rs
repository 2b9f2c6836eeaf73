use ndc_model::{
    A560Record, AddressInput, BillingSlipInput, CellValue, DEFAULT_PROTOCOL_VERSION,
    DebitNoteInput, DocumentInput, HeaderInput, MAX_INSTRUCTIONS, MAX_NOTE_LINES,
    MAX_OBSERVATIONS, PartyInput, PartyRole, PhoneInput, PostalStampInput, RawRecord,
};
use tracing::trace;

use crate::error::MappingError;
use crate::fields::{
    ACCEPTANCE, AGENCY_CODE, AMOUNT, AREA_CODE, BANK_CODE, BANK_USAGE, BARCODE, COMPLEMENT,
    DESTINATION_UNIT, DIGITABLE_LINE, DOCUMENT_NUMBER, DOCUMENT_SPECIES, DUE_DATE, FILE_TYPE,
    INSTRUCTION_GROUP, ISSUE_DATE, MUNICIPALITY, NEIGHBORHOOD, NOTE_LINE_GROUP, NOTE_NUMBER,
    OBSERVATION_GROUP, ORIGIN_UNIT, OUR_NUMBER, PARTIAL_FLAG, PAYMENT_PLACE, PAYMENT_PLACE_NOTE,
    PHONE_NUMBER, POSTAL_CODE, POSTING_DATE, PROCESSING_DATE, PROTOCOL_VERSION, REQUIRED_FIELDS,
    SECOND_DOCUMENT_PREFIX, SLIP_PREFIX, SPECIES, STAMP_PROTOCOL, STREET_NAME, STREET_NUMBER,
    STREET_TYPE, TAX_ID, WALLET,
};
use crate::groups::collect_group;

/// Mapper behaviour switches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingOptions {
    /// Reject records whose essential fields are blank. Off by default:
    /// blanks normally flow through as empty leaves.
    pub require_fields: bool,
    /// Protocol version used when `nrVerTra_PTU` is blank.
    pub default_protocol_version: String,
}

impl Default for MappingOptions {
    fn default() -> Self {
        Self {
            require_fields: false,
            default_protocol_version: DEFAULT_PROTOCOL_VERSION.to_string(),
        }
    }
}

/// Map one source row into the intermediate notice record.
pub fn map_record(raw: &RawRecord, options: &MappingOptions) -> Result<A560Record, MappingError> {
    if options.require_fields {
        check_required(raw)?;
    }

    let second = if raw.is_blank(&format!("{SECOND_DOCUMENT_PREFIX}{DOCUMENT_NUMBER}")) {
        None
    } else {
        Some(map_document(raw, SECOND_DOCUMENT_PREFIX))
    };
    trace!(fields = raw.len(), second_document = second.is_some(), "mapped record");

    Ok(A560Record {
        header: map_header(raw, options),
        first: map_document(raw, ""),
        second,
        creditor: map_party(raw, PartyRole::Creditor),
        debtor: map_party(raw, PartyRole::Debtor),
        postal_stamp: PostalStampInput {
            posting_date: raw.value(POSTING_DATE).clone(),
            protocol_number: raw.value(STAMP_PROTOCOL).clone(),
        },
    })
}

fn check_required(raw: &RawRecord) -> Result<(), MappingError> {
    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| raw.is_blank(field))
        .map(|field| (*field).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MappingError::MissingRequiredFields { fields: missing })
    }
}

fn map_header(raw: &RawRecord, options: &MappingOptions) -> HeaderInput {
    let protocol_version = if raw.is_blank(PROTOCOL_VERSION) {
        CellValue::from(options.default_protocol_version.as_str())
    } else {
        raw.value(PROTOCOL_VERSION).clone()
    };
    HeaderInput {
        protocol_version,
        destination_unit: raw.value(DESTINATION_UNIT).clone(),
        origin_unit: raw.value(ORIGIN_UNIT).clone(),
        file_type: raw.value(FILE_TYPE).clone(),
        partial_flag: raw.value(PARTIAL_FLAG).clone(),
    }
}

fn map_document(raw: &RawRecord, prefix: &str) -> DocumentInput {
    let field = |name: &str| raw.value(&format!("{prefix}{name}")).clone();
    DocumentInput {
        document_number: field(DOCUMENT_NUMBER),
        debit_note: DebitNoteInput {
            number: field(NOTE_NUMBER),
            issue_date: field(ISSUE_DATE),
            due_date: field(DUE_DATE),
            amount: field(AMOUNT),
            lines: collect_group(raw, &format!("{prefix}{NOTE_LINE_GROUP}"), MAX_NOTE_LINES),
        },
        slip: map_slip(raw, &format!("{prefix}{SLIP_PREFIX}")),
    }
}

fn map_slip(raw: &RawRecord, prefix: &str) -> BillingSlipInput {
    let field = |name: &str| raw.value(&format!("{prefix}{name}")).clone();
    BillingSlipInput {
        bank_code: field(BANK_CODE),
        agency_code: field(AGENCY_CODE),
        our_number: field(OUR_NUMBER),
        bank_usage: field(BANK_USAGE),
        wallet: field(WALLET),
        species: field(SPECIES),
        document_species: field(DOCUMENT_SPECIES),
        acceptance: field(ACCEPTANCE),
        processing_date: field(PROCESSING_DATE),
        payment_place: field(PAYMENT_PLACE),
        payment_place_note: field(PAYMENT_PLACE_NOTE),
        instructions: collect_group(
            raw,
            &format!("{prefix}{INSTRUCTION_GROUP}"),
            MAX_INSTRUCTIONS,
        ),
        observations: collect_group(
            raw,
            &format!("{prefix}{OBSERVATION_GROUP}"),
            MAX_OBSERVATIONS,
        ),
        digitable_line: field(DIGITABLE_LINE),
        barcode: field(BARCODE),
    }
}

fn map_party(raw: &RawRecord, role: PartyRole) -> PartyInput {
    let prefix = role.source_prefix();
    let field = |name: &str| raw.value(&format!("{prefix}{name}")).clone();
    PartyInput {
        name: field(role.name_field()),
        address: AddressInput {
            street_type: field(STREET_TYPE),
            street_name: field(STREET_NAME),
            number: field(STREET_NUMBER),
            complement: field(COMPLEMENT),
            neighborhood: field(NEIGHBORHOOD),
            municipality_code: field(MUNICIPALITY),
            postal_code: field(POSTAL_CODE),
        },
        tax_id: field(TAX_ID),
        phone: PhoneInput {
            area_code: field(AREA_CODE),
            number: field(PHONE_NUMBER),
        },
    }
}
