//! Data model for the PTU A560 debit-note notice generator.
//!
//! - [`RawRecord`] / [`CellValue`]: one tabular input row, as read from the source.
//! - [`A560Record`]: the typed intermediate representation produced by the mapper.
//! - [`BatchContext`]: explicit per-batch counters and outcomes.

pub mod batch;
pub mod record;
pub mod value;

pub use batch::{BatchContext, RecordFailure, RecordOutcome, spreadsheet_row};
pub use record::{
    A560Record, AddressInput, BillingSlipInput, DEFAULT_PROTOCOL_VERSION, DebitNoteInput,
    DocumentInput, HeaderInput, MAX_INSTRUCTIONS, MAX_NOTE_LINES, MAX_OBSERVATIONS, PartyInput,
    PartyRole, PhoneInput, PostalStampInput, TaxIdKind,
};
pub use value::{CellValue, RawRecord, date_from_serial};
