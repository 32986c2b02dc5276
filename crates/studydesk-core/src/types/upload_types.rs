//! Upload candidate and receipt types

use serde::{Deserialize, Serialize};

/// Synthetic file name given to pasted-text candidates
pub const PASTED_TEXT_NAME: &str = "pasted-text.txt";

/// A file or pasted-text object staged for upload but not yet committed
///
/// The intake holds at most one candidate at a time; selecting a file clears
/// pasted text and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UploadCandidate {
    File {
        name: String,
        mime: String,
        size: u64,
    },
    PastedText {
        text: String,
    },
}

impl UploadCandidate {
    /// File candidate; the MIME type is guessed from the name when the
    /// picker did not provide one
    pub fn file(name: impl Into<String>, mime: Option<&str>, size: u64) -> Self {
        let name = name.into();
        let mime = match mime {
            Some(m) => m.to_string(),
            None => mime_guess::from_path(&name)
                .first_or_octet_stream()
                .to_string(),
        };
        Self::File { name, mime, size }
    }

    /// Pasted-text candidate; returns `None` for empty or whitespace-only
    /// input (the paste dialog only confirms non-empty content)
    pub fn pasted_text(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            return None;
        }
        Some(Self::PastedText { text })
    }

    /// Display name shown in the drop zone
    pub fn display_name(&self) -> &str {
        match self {
            Self::File { name, .. } => name,
            Self::PastedText { .. } => PASTED_TEXT_NAME,
        }
    }

    /// MIME type used for admission and classification
    pub fn mime(&self) -> &str {
        match self {
            Self::File { mime, .. } => mime,
            Self::PastedText { .. } => "text/plain",
        }
    }

    /// Size in bytes
    pub fn size_bytes(&self) -> u64 {
        match self {
            Self::File { size, .. } => *size,
            Self::PastedText { text } => text.len() as u64,
        }
    }

    /// Secondary label under the name: megabytes for files, character
    /// count for pasted text
    pub fn size_label(&self) -> String {
        match self {
            Self::File { size, .. } => super::format_megabytes(*size),
            Self::PastedText { text } => format!("{} characters", text.chars().count()),
        }
    }
}

/// Acknowledgment returned by a completed upload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub id: String,
    /// Title for the resulting knowledge row (the candidate's display name)
    pub title: String,
    pub size: u64,
    /// SHA-256 over the candidate's content identity
    pub checksum: String,
    pub completed_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_candidate_mime_guess() {
        let candidate = UploadCandidate::file("slides.pdf", None, 1024);
        assert_eq!(candidate.mime(), "application/pdf");
        assert_eq!(candidate.display_name(), "slides.pdf");
        assert_eq!(candidate.size_bytes(), 1024);
    }

    #[test]
    fn test_file_candidate_explicit_mime_wins() {
        let candidate = UploadCandidate::file("voice-memo", Some("audio/mpeg"), 10);
        assert_eq!(candidate.mime(), "audio/mpeg");
    }

    #[test]
    fn test_pasted_text_rejects_blank_input() {
        assert!(UploadCandidate::pasted_text("").is_none());
        assert!(UploadCandidate::pasted_text("   \n\t").is_none());

        let candidate = UploadCandidate::pasted_text("mitochondria notes").unwrap();
        assert_eq!(candidate.display_name(), PASTED_TEXT_NAME);
        assert_eq!(candidate.mime(), "text/plain");
        assert_eq!(candidate.size_label(), "18 characters");
    }
}
