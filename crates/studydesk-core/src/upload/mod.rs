//! Upload intake, validation and transfer
//!
//! This module provides:
//! - Size-based admission rules for upload candidates
//! - The single-candidate intake state machine
//! - Preview-lease bookkeeping for staged candidates
//! - The `UploadService` trait and its simulated implementation

mod intake;
mod preview;
mod service;

pub use intake::{
    admit, picker_accept_label, UploadIntake, MAX_AUDIO_BYTES, MAX_FILE_BYTES, MAX_IMAGE_BYTES,
    SUPPORTED_EXTENSIONS,
};
pub use preview::{PreviewLease, PreviewRegistry};
pub use service::{SimulatedUpload, UploadService};
