//! Field formatting: zero padding, dates and amounts.
//!
//! Date and amount formatting never fails the record. Unusable input yields a
//! safe default (`""` for dates, `"0.00"` for amounts) and a [`FormatWarning`]
//! pushed to the caller's sink.

use std::fmt;

use chrono::NaiveDate;
use ndc_model::{CellValue, date_from_serial};
use tracing::warn;

pub const DEFAULT_AMOUNT: &str = "0.00";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    InvalidDate,
    InvalidAmount,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDate => f.write_str("invalid date"),
            Self::InvalidAmount => f.write_str("invalid amount"),
        }
    }
}

/// A value that could not be formatted and was replaced by a default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatWarning {
    /// Document path of the leaf, e.g. `Documento1/Nota_Debito/dt_Ven_NDC`.
    pub field: String,
    pub value: String,
    pub kind: WarningKind,
}

impl fmt::Display for FormatWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} '{}'", self.field, self.kind, self.value)
    }
}

/// Left-pad the rendered value with `'0'` up to `width` characters.
///
/// Values already `width` characters or longer are returned unchanged.
pub fn zero_pad<T: fmt::Display + ?Sized>(value: &T, width: usize) -> String {
    let rendered = value.to_string();
    format!("{rendered:0>width$}")
}

/// Format a date as `YYYYMMDD`, recording a warning for unusable input.
pub fn format_date(field: &str, value: &CellValue, warnings: &mut Vec<FormatWarning>) -> String {
    try_format_date(value).unwrap_or_else(|kind| {
        record_warning(field, value, kind, warnings);
        String::new()
    })
}

/// Format an amount as `D.DD`, recording a warning for unusable input.
pub fn format_money(field: &str, value: &CellValue, warnings: &mut Vec<FormatWarning>) -> String {
    try_format_money(value).unwrap_or_else(|kind| {
        record_warning(field, value, kind, warnings);
        DEFAULT_AMOUNT.to_string()
    })
}

fn record_warning(field: &str, value: &CellValue, kind: WarningKind, sink: &mut Vec<FormatWarning>) {
    warn!(field, %kind, "unformattable value replaced by default");
    sink.push(FormatWarning {
        field: field.to_string(),
        value: value.render(),
        kind,
    });
}

/// Accepts a date cell, `DD/MM/YYYY`, `YYYY-MM-DD[Thh:mm..]`, `DD-MM-YYYY`,
/// or a spreadsheet serial day count (numeric cell or numeric text).
///
/// Blank input and serial `0` yield `Ok("")`.
pub fn try_format_date(value: &CellValue) -> Result<String, WarningKind> {
    if value.is_blank() {
        return Ok(String::new());
    }
    let date = match value {
        CellValue::Empty => return Ok(String::new()),
        CellValue::Number(serial) if *serial == 0.0 => return Ok(String::new()),
        CellValue::Date(date) => Some(*date),
        CellValue::Number(serial) => date_from_serial(*serial),
        CellValue::Text(text) => parse_date_text(text.trim()),
    };
    date.map(|date| date.format("%Y%m%d").to_string())
        .ok_or(WarningKind::InvalidDate)
}

fn parse_date_text(text: &str) -> Option<NaiveDate> {
    if text.contains('/') {
        let parts: Vec<&str> = text.split('/').collect();
        let [day, month, year] = parts.as_slice() else {
            return None;
        };
        return ymd(year, month, day);
    }
    if text.contains('-') {
        let date_part = text.split(['T', ' ']).next().unwrap_or(text);
        let parts: Vec<&str> = date_part.split('-').collect();
        let [first, second, third] = parts.as_slice() else {
            return None;
        };
        return if first.len() == 4 {
            ymd(first, second, third)
        } else {
            ymd(third, second, first)
        };
    }
    text.parse::<f64>().ok().and_then(date_from_serial)
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    if year.len() != 4 {
        return None;
    }
    let year: i32 = year.trim().parse().ok()?;
    let month: u32 = month.trim().parse().ok()?;
    let day: u32 = day.trim().parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Accepts a number or text with a comma (or point) decimal separator.
///
/// Blank input yields `Ok("0.00")`.
pub fn try_format_money(value: &CellValue) -> Result<String, WarningKind> {
    let amount = match value {
        _ if value.is_blank() => return Ok(DEFAULT_AMOUNT.to_string()),
        CellValue::Number(amount) => *amount,
        CellValue::Text(text) => text
            .trim()
            .replacen(',', ".", 1)
            .parse::<f64>()
            .map_err(|_| WarningKind::InvalidAmount)?,
        CellValue::Empty | CellValue::Date(_) => return Err(WarningKind::InvalidAmount),
    };
    if !amount.is_finite() {
        return Err(WarningKind::InvalidAmount);
    }
    if amount == 0.0 {
        return Ok(DEFAULT_AMOUNT.to_string());
    }
    Ok(format!("{:.2}", round_cents(amount)))
}

/// Rounds exact half cents away from zero; `{:.2}` alone would round them
/// to even. Only multiples of 1/8 can sit exactly on a half cent.
fn round_cents(amount: f64) -> f64 {
    let cents = amount * 100.0;
    if (amount * 8.0).fract() == 0.0 && cents.fract().abs() == 0.5 {
        cents.round() / 100.0
    } else {
        amount
    }
}
