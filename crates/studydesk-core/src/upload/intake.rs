//! Upload intake and admission rules

use super::preview::{PreviewLease, PreviewRegistry};
use crate::error::UploadError;
use crate::types::UploadCandidate;
use std::sync::Arc;
use tracing::{debug, info};

/// Maximum admitted size for `audio/*` candidates (25 MiB)
pub const MAX_AUDIO_BYTES: u64 = 25 * 1024 * 1024;
/// Maximum admitted size for `image/*` candidates (20 MiB)
pub const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;
/// Maximum admitted size for everything else (500 MiB)
pub const MAX_FILE_BYTES: u64 = 500 * 1024 * 1024;

/// Extensions the file picker enumerates
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "pdf", "docx", "pptx", "txt", "doc", "mp4", "mp3", "md", "xls", "csv", "ppt", "pages", "epub",
    "xlsx", "html", "webm", "png", "jpeg", "webp", "jpg", "heic",
];

/// Accept-list label for the file picker, e.g. `.pdf, .docx, ...`
pub fn picker_accept_label() -> String {
    SUPPORTED_EXTENSIONS
        .iter()
        .map(|ext| format!(".{ext}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Size-based admission decision
///
/// Rules are evaluated in order, first match wins; a size exactly at a
/// limit is admitted.
pub fn admit(mime: &str, size: u64) -> Result<(), UploadError> {
    if mime.starts_with("audio/") && size > MAX_AUDIO_BYTES {
        return Err(UploadError::AudioTooLarge);
    }
    if mime.starts_with("image/") && size > MAX_IMAGE_BYTES {
        return Err(UploadError::ImageTooLarge);
    }
    if size > MAX_FILE_BYTES {
        return Err(UploadError::FileTooLarge);
    }
    Ok(())
}

/// Single-candidate intake
///
/// Holds at most one staged candidate (file or pasted text) together with
/// its preview lease. Staging a new candidate always replaces the previous
/// one and swaps the lease; a rejected file leaves the previous candidate
/// in place.
pub struct UploadIntake {
    previews: Arc<PreviewRegistry>,
    candidate: Option<UploadCandidate>,
    lease: Option<PreviewLease>,
}

impl UploadIntake {
    pub fn new(previews: Arc<PreviewRegistry>) -> Self {
        Self {
            previews,
            candidate: None,
            lease: None,
        }
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    pub fn has_candidate(&self) -> bool {
        self.candidate.is_some()
    }

    /// Preview URL for the staged candidate, if any
    pub fn preview_url(&self) -> Option<&str> {
        self.lease.as_ref().map(|l| l.url())
    }

    /// Gate a picked/dropped file through admission and stage it
    pub fn select_file(
        &mut self,
        name: &str,
        mime: Option<&str>,
        size: u64,
    ) -> Result<(), UploadError> {
        let candidate = UploadCandidate::file(name, mime, size);
        admit(candidate.mime(), candidate.size_bytes())?;

        info!("Staged file candidate: {} ({})", name, candidate.size_label());
        self.stage(candidate);
        Ok(())
    }

    /// Stage confirmed pasted text; returns false for blank input, which
    /// keeps the paste dialog open
    pub fn confirm_pasted_text(&mut self, text: &str) -> bool {
        match UploadCandidate::pasted_text(text) {
            Some(candidate) => {
                debug!("Staged pasted text ({})", candidate.size_label());
                self.stage(candidate);
                true
            }
            None => false,
        }
    }

    /// Drop the staged candidate and release its preview lease
    pub fn clear(&mut self) {
        self.candidate = None;
        if let Some(lease) = self.lease.take() {
            self.previews.release(lease);
        }
    }

    fn stage(&mut self, candidate: UploadCandidate) {
        if let Some(old) = self.lease.take() {
            self.previews.release(old);
        }
        self.lease = Some(self.previews.lease_for(&candidate));
        self.candidate = Some(candidate);
    }
}

impl Drop for UploadIntake {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn intake() -> UploadIntake {
        UploadIntake::new(Arc::new(PreviewRegistry::new()))
    }

    #[test]
    fn test_admission_boundaries() {
        // Exactly at the limit is admitted, one byte over is not.
        assert!(admit("audio/mpeg", 25 * MIB).is_ok());
        assert_eq!(admit("audio/mpeg", 25 * MIB + 1), Err(UploadError::AudioTooLarge));

        assert!(admit("image/png", 20 * MIB).is_ok());
        assert_eq!(admit("image/png", 20 * MIB + 1), Err(UploadError::ImageTooLarge));

        assert!(admit("application/pdf", 500 * MIB).is_ok());
        assert_eq!(admit("application/pdf", 500 * MIB + 1), Err(UploadError::FileTooLarge));
    }

    #[test]
    fn test_category_rule_wins_over_default() {
        // An oversize audio file reports the audio limit even though it is
        // also under the 500 MiB default.
        assert_eq!(admit("audio/wav", 30 * MIB), Err(UploadError::AudioTooLarge));
        assert_eq!(admit("image/webp", 450 * MIB), Err(UploadError::ImageTooLarge));
    }

    #[test]
    fn test_select_replaces_previous_candidate() {
        let mut intake = intake();

        intake.select_file("a.pdf", None, MIB).unwrap();
        intake.select_file("b.pdf", None, 2 * MIB).unwrap();

        assert_eq!(intake.candidate().unwrap().display_name(), "b.pdf");
    }

    #[test]
    fn test_file_and_paste_are_mutually_exclusive() {
        let mut intake = intake();

        intake.select_file("a.pdf", None, MIB).unwrap();
        assert!(intake.confirm_pasted_text("some pasted notes"));
        assert!(matches!(
            intake.candidate(),
            Some(UploadCandidate::PastedText { .. })
        ));

        intake.select_file("c.txt", None, 100).unwrap();
        assert!(matches!(intake.candidate(), Some(UploadCandidate::File { .. })));
    }

    #[test]
    fn test_rejection_preserves_previous_candidate() {
        let mut intake = intake();

        intake.select_file("keep.pdf", None, MIB).unwrap();
        let err = intake
            .select_file("too-big.mp3", Some("audio/mpeg"), 30 * MIB)
            .unwrap_err();

        assert_eq!(err, UploadError::AudioTooLarge);
        assert_eq!(intake.candidate().unwrap().display_name(), "keep.pdf");
    }

    #[test]
    fn test_blank_paste_is_not_staged() {
        let mut intake = intake();
        assert!(!intake.confirm_pasted_text("   \n"));
        assert!(intake.candidate().is_none());
    }

    #[test]
    fn test_preview_leases_do_not_leak() {
        let registry = Arc::new(PreviewRegistry::new());
        let mut intake = UploadIntake::new(Arc::clone(&registry));

        intake.select_file("a.pdf", None, MIB).unwrap();
        assert_eq!(registry.active_leases(), 1);

        // Replacement swaps the lease rather than stacking a second one.
        assert!(intake.confirm_pasted_text("pasted"));
        assert_eq!(registry.active_leases(), 1);

        intake.clear();
        assert_eq!(registry.active_leases(), 0);

        intake.select_file("b.pdf", None, MIB).unwrap();
        drop(intake);
        assert_eq!(registry.active_leases(), 0);
    }
}
