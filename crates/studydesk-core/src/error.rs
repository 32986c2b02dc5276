//! Error types for StudyDesk Core

use thiserror::Error;

/// Main error type for StudyDesk operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Upload error: {0}")]
    Upload(#[from] UploadError),

    #[error("Chat error: {0}")]
    Chat(#[from] ChatError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Upload intake and transfer errors
///
/// The three oversize variants carry the user-facing wording of the
/// admission rules; they surface through the notification hub verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    #[error("Audio files must be less than 25MB")]
    AudioTooLarge,

    #[error("Image files must be less than 20MB")]
    ImageTooLarge,

    #[error("File must be less than 500MB")]
    FileTooLarge,

    #[error("Nothing selected to upload")]
    NothingSelected,

    #[error("An upload is already in progress")]
    AlreadyUploading,

    #[error("Upload failed: {0}")]
    TransferFailed(String),
}

/// Chat send errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChatError {
    #[error("Cannot send an empty message")]
    EmptyMessage,

    #[error("A send is already awaiting its reply")]
    SendInFlight,

    #[error("Assistant failed to respond: {0}")]
    ResponderFailed(String),
}

/// Mock store errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Duplicate id: {0}")]
    DuplicateId(String),

    #[error("Record not found: {0}")]
    NotFound(String),
}

impl serde::Serialize for Error {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
