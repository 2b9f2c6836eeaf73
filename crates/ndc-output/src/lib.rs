//! Output layer: XML serialization, durable artifact writes and ZIP archival.

pub mod archive;
pub mod artifact;
pub mod persist;
pub mod xml;

pub use archive::{ArchiveOptions, ArchiveOutcome, archive_artifact};
pub use artifact::{OutputOptions, WrittenArtifact, write_record};
pub use persist::write_durably;
pub use xml::{XML_ENCODING, encode_artifact, render_xml};
