//! PTU A560 core: sanitizing, field formatting, document assembly, content
//! digest and artifact naming.

pub mod builder;
pub mod digest;
pub mod document;
pub mod error;
pub mod format;
pub mod naming;
pub mod sanitize;
pub mod transform;

pub use builder::{BuiltDocument, build_document};
pub use digest::{content_digest, digest_text, encode_latin1, hashed_text, verify_digest};
pub use document::{A560_NAMESPACE, A560Document, DocumentVisitor, HASH_TAG, ROOT_TAG};
pub use error::{DocumentError, TransformError};
pub use format::{FormatWarning, WarningKind, format_date, format_money, zero_pad};
pub use naming::{archive_name, artifact_name};
pub use sanitize::sanitize;
pub use transform::{TransformedRecord, transform_record};
