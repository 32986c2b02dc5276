//! Upload service trait and simulated implementation

use crate::error::UploadError;
use crate::types::{UploadCandidate, UploadReceipt};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::info;

/// Commits a staged candidate
///
/// The client model has no real backend; implementations simulate the
/// transfer. The trait seam keeps the flow mockable in tests.
#[async_trait]
pub trait UploadService: Send + Sync {
    async fn submit(&self, candidate: &UploadCandidate) -> Result<UploadReceipt, UploadError>;
}

/// Simulated transfer: fixed delay, then a receipt with a content checksum
pub struct SimulatedUpload {
    delay: Duration,
    fail_next: AtomicBool,
}

impl SimulatedUpload {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(2))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            fail_next: AtomicBool::new(false),
        }
    }

    /// Make the next submission fail (for exercising the retry path)
    pub fn fail_next(&self) {
        self.fail_next.store(true, Ordering::SeqCst);
    }
}

impl Default for SimulatedUpload {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UploadService for SimulatedUpload {
    async fn submit(&self, candidate: &UploadCandidate) -> Result<UploadReceipt, UploadError> {
        info!(
            "Uploading {} ({} bytes)",
            candidate.display_name(),
            candidate.size_bytes()
        );

        tokio::time::sleep(self.delay).await;

        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(UploadError::TransferFailed(
                "simulated transfer failure".to_string(),
            ));
        }

        Ok(UploadReceipt {
            id: uuid::Uuid::new_v4().to_string(),
            title: candidate.display_name().to_string(),
            size: candidate.size_bytes(),
            checksum: hex::encode(Sha256::digest(content_identity(candidate))),
            completed_at: chrono::Utc::now(),
        })
    }
}

/// Bytes identifying the candidate's content for checksumming
///
/// Pasted text carries its content; picked files are identified by name and
/// size since the client model never reads file bytes.
fn content_identity(candidate: &UploadCandidate) -> Vec<u8> {
    match candidate {
        UploadCandidate::File { name, size, .. } => format!("{name}:{size}").into_bytes(),
        UploadCandidate::PastedText { text } => text.clone().into_bytes(),
    }
}
