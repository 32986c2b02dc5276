//! Core type definitions for StudyDesk
//!
//! This module contains all shared types used across the application:
//! knowledge and collection entities, derived study artifacts, chat
//! messages, and upload candidates/receipts.

mod artifact_types;
mod chat_types;
mod knowledge_types;
mod upload_types;

pub use artifact_types::*;
pub use chat_types::*;
pub use knowledge_types::*;
pub use upload_types::*;

/// Format a byte count as a megabyte label, e.g. `10.00 MB`
pub fn format_megabytes(size: u64) -> String {
    format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
}
