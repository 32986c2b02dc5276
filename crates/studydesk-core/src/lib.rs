//! StudyDesk Core Library
//!
//! This crate provides the core client model for StudyDesk, including:
//! - Domain entities (collections, knowledge, study artifacts, chat messages)
//! - The in-memory mock data store
//! - Upload intake, admission rules and the simulated upload service
//! - The assistant responder seam for the chat panel
//! - The non-modal notification channel
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      studydesk-core                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  chat/         - Assistant responder trait + simulation     │
//! │  store/        - Seeded in-memory mock store                │
//! │  upload/       - Intake, admission rules, upload service    │
//! │  types/        - Shared type definitions                    │
//! │  notify.rs     - Notification channel                       │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod chat;
pub mod error;
pub mod notify;
pub mod store;
pub mod types;
pub mod upload;

// Re-export commonly used types
pub use error::{ChatError, Error, Result, StoreError, UploadError};
pub use types::*;

// Re-export services and state
pub use chat::{AssistantResponder, SimulatedResponder};
pub use notify::{Notification, NotificationHub, NotificationLevel};
pub use store::MockStore;
pub use upload::{
    admit, picker_accept_label, PreviewLease, PreviewRegistry, SimulatedUpload, UploadIntake,
    UploadService, MAX_AUDIO_BYTES, MAX_FILE_BYTES, MAX_IMAGE_BYTES, SUPPORTED_EXTENSIONS,
};
