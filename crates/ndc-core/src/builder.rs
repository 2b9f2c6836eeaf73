//! Document builder: intermediate record to finished, hashed document.

use ndc_model::{
    A560Record, AddressInput, BillingSlipInput, CellValue, DebitNoteInput, DocumentInput,
    HeaderInput, PartyInput, PartyRole, PostalStampInput, TaxIdKind,
};
use tracing::debug;

use crate::digest::content_digest;
use crate::document::{
    A560Document, Address, BillingSlip, DebitNote, Header, NoteLine, NoticeBody, Party, Phone,
    PostalStamp, PrimaryDocument, SecondaryDocument, TaxId,
};
use crate::error::DocumentError;
use crate::format::{FormatWarning, format_date, format_money, zero_pad};
use crate::sanitize::sanitize;

const PROTOCOL_VERSION_WIDTH: usize = 2;
const UNIT_CODE_WIDTH: usize = 4;
const STREET_TYPE_WIDTH: usize = 2;
const LINE_POSITION_WIDTH: usize = 2;

/// A finished document plus the formatting warnings raised while building it.
#[derive(Debug, Clone)]
pub struct BuiltDocument {
    pub document: A560Document,
    pub warnings: Vec<FormatWarning>,
}

/// Build the document for `record`, compute its digest and seal it.
pub fn build_document(record: &A560Record) -> Result<BuiltDocument, DocumentError> {
    let mut builder = DocumentBuilder::default();
    let mut document = A560Document {
        header: builder.header(&record.header),
        body: NoticeBody {
            first: builder.primary(&record.first),
            second: record
                .second
                .as_ref()
                .and_then(|second| builder.secondary(second)),
            creditor: builder.party(&record.creditor, PartyRole::Creditor),
            debtor: builder.party(&record.debtor, PartyRole::Debtor),
        },
        hash: String::new(),
        postal_stamp: builder.postal_stamp(&record.postal_stamp),
    };
    document.hash = content_digest(&document)?;
    debug!(
        hash = %document.hash,
        second_document = document.body.second.is_some(),
        warnings = builder.warnings.len(),
        "document built"
    );
    Ok(BuiltDocument {
        document,
        warnings: builder.warnings,
    })
}

/// Sanitized text of a cell.
pub fn leaf_text(value: &CellValue) -> String {
    sanitize(&value.render())
}

/// Zero-padded, sanitized text; blank cells stay blank.
pub fn padded_text(value: &CellValue, width: usize) -> String {
    if value.is_blank() {
        String::new()
    } else {
        sanitize(&zero_pad(value, width))
    }
}

#[derive(Debug, Default)]
struct DocumentBuilder {
    warnings: Vec<FormatWarning>,
}

impl DocumentBuilder {
    fn optional(value: &CellValue) -> Option<String> {
        if value.is_blank() {
            None
        } else {
            Some(leaf_text(value))
        }
    }

    fn date(&mut self, field: &str, value: &CellValue) -> String {
        sanitize(&format_date(field, value, &mut self.warnings))
    }

    fn money(&mut self, field: &str, value: &CellValue) -> String {
        sanitize(&format_money(field, value, &mut self.warnings))
    }

    fn header(&mut self, input: &HeaderInput) -> Header {
        Header {
            protocol_version: padded_text(&input.protocol_version, PROTOCOL_VERSION_WIDTH),
            destination_unit: padded_text(&input.destination_unit, UNIT_CODE_WIDTH),
            origin_unit: padded_text(&input.origin_unit, UNIT_CODE_WIDTH),
            file_type: leaf_text(&input.file_type),
            partial_flag: Self::optional(&input.partial_flag),
        }
    }

    fn primary(&mut self, input: &DocumentInput) -> PrimaryDocument {
        PrimaryDocument {
            document_number: leaf_text(&input.document_number),
            debit_note: self.debit_note("Documento1", &input.debit_note),
            slip: self.slip(&input.slip),
        }
    }

    fn secondary(&mut self, input: &DocumentInput) -> Option<SecondaryDocument> {
        if input.document_number.is_blank() {
            return None;
        }
        let debit_note = if input.debit_note.number.is_blank() {
            None
        } else {
            Some(self.debit_note("Documento2", &input.debit_note))
        };
        Some(SecondaryDocument {
            document_number: leaf_text(&input.document_number),
            debit_note,
            slip: self.slip(&input.slip),
        })
    }

    fn debit_note(&mut self, document: &str, input: &DebitNoteInput) -> DebitNote {
        let path = format!("{document}/Nota_Debito");
        let lines = input
            .lines
            .iter()
            .filter(|line| !line.is_blank())
            .enumerate()
            .map(|(index, line)| NoteLine {
                position: zero_pad(&(index + 1), LINE_POSITION_WIDTH),
                text: leaf_text(line),
            })
            .collect();
        DebitNote {
            number: leaf_text(&input.number),
            issue_date: self.date(&format!("{path}/dt_Emissao_NDC"), &input.issue_date),
            due_date: self.date(&format!("{path}/dt_Ven_NDC"), &input.due_date),
            amount: self.money(&format!("{path}/vl_NDC"), &input.amount),
            lines,
        }
    }

    fn slip(&mut self, input: &BillingSlipInput) -> Option<BillingSlip> {
        if input.bank_code.is_blank() {
            return None;
        }
        let non_blank = |values: &[CellValue]| -> Vec<String> {
            values
                .iter()
                .filter(|value| !value.is_blank())
                .map(leaf_text)
                .collect()
        };
        Some(BillingSlip {
            bank_code: leaf_text(&input.bank_code),
            agency_code: leaf_text(&input.agency_code),
            our_number: leaf_text(&input.our_number),
            bank_usage: Self::optional(&input.bank_usage),
            wallet: Self::optional(&input.wallet),
            species: Self::optional(&input.species),
            document_species: Self::optional(&input.document_species),
            acceptance: Self::optional(&input.acceptance),
            processing_date: Self::optional(&input.processing_date),
            payment_place: leaf_text(&input.payment_place),
            payment_place_note: leaf_text(&input.payment_place_note),
            instructions: non_blank(&input.instructions),
            observations: non_blank(&input.observations),
            digitable_line: leaf_text(&input.digitable_line),
            barcode: leaf_text(&input.barcode),
        })
    }

    fn party(&mut self, input: &PartyInput, role: PartyRole) -> Party {
        let raw_tax_id = input.tax_id.render();
        let phone = if input.phone.area_code.is_blank() || input.phone.number.is_blank() {
            None
        } else {
            Some(Phone {
                area_code: leaf_text(&input.phone.area_code),
                number: leaf_text(&input.phone.number),
            })
        };
        Party {
            role,
            name: leaf_text(&input.name),
            address: Self::address(&input.address),
            tax_id: TaxId {
                kind: TaxIdKind::classify(&raw_tax_id),
                value: sanitize(&raw_tax_id),
            },
            phone,
        }
    }

    fn address(input: &AddressInput) -> Address {
        Address {
            street_type: padded_text(&input.street_type, STREET_TYPE_WIDTH),
            street_name: leaf_text(&input.street_name),
            number: leaf_text(&input.number),
            complement: Self::optional(&input.complement),
            neighborhood: Self::optional(&input.neighborhood),
            municipality_code: leaf_text(&input.municipality_code),
            postal_code: leaf_text(&input.postal_code),
        }
    }

    fn postal_stamp(&mut self, input: &PostalStampInput) -> Option<PostalStamp> {
        if input.posting_date.is_blank() || input.protocol_number.is_blank() {
            return None;
        }
        Some(PostalStamp {
            posting_date: leaf_text(&input.posting_date),
            protocol_number: leaf_text(&input.protocol_number),
        })
    }
}
