#![deny(unsafe_code)]

//! Record mapper.
//!
//! Flattens one [`RawRecord`](ndc_model::RawRecord) into an
//! [`A560Record`](ndc_model::A560Record). Numbered repeated groups are read by
//! bounded index iteration; the second document is only populated when its
//! document number is present.

pub mod error;
pub mod fields;
pub mod groups;
pub mod mapper;

pub use error::MappingError;
pub use fields::{REQUIRED_FIELDS, expected_fields};
pub use groups::collect_group;
pub use mapper::{MappingOptions, map_record};
