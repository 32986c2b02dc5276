//! Preview-lease registry
//!
//! Staging a candidate allocates a temporary local reference so the shell
//! can render a preview. The registry tracks live leases; a lease must be
//! released when its candidate is replaced or cleared.

use crate::types::UploadCandidate;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use parking_lot::Mutex;
use std::collections::HashSet;
use tracing::warn;
use uuid::Uuid;

/// A leased preview reference for a staged candidate
///
/// Deliberately not `Clone`: there is exactly one holder, and returning the
/// lease to the registry consumes it.
#[derive(Debug)]
pub struct PreviewLease {
    id: Uuid,
    url: String,
}

impl PreviewLease {
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Tracks live preview leases
#[derive(Default)]
pub struct PreviewRegistry {
    active: Mutex<HashSet<Uuid>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a preview reference for a candidate
    ///
    /// Files get an object-URL style handle; pasted text is small enough to
    /// inline as a data URL.
    pub fn lease_for(&self, candidate: &UploadCandidate) -> PreviewLease {
        let id = Uuid::new_v4();
        let url = match candidate {
            UploadCandidate::File { .. } => format!("blob:studydesk/{id}"),
            UploadCandidate::PastedText { text } => {
                format!("data:text/plain;base64,{}", BASE64.encode(text.as_bytes()))
            }
        };

        self.active.lock().insert(id);
        PreviewLease { id, url }
    }

    /// Release a lease, consuming it
    pub fn release(&self, lease: PreviewLease) {
        if !self.active.lock().remove(&lease.id) {
            warn!("Released unknown preview lease: {}", lease.id);
        }
    }

    /// Number of leases currently held
    pub fn active_leases(&self) -> usize {
        self.active.lock().len()
    }
}
