//! Library side of the `ndc` command: configuration, logging, the batch
//! pipeline and the JSON report.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod report;
