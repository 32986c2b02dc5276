//! Upload modal state machine
//!
//! Wraps the core intake with the modal's interaction state: drag highlight,
//! the paste dialog, the uploading flag and the epoch guard that drops
//! completions resolving after the modal was dismissed.

use crate::events::{UiEvent, UiEvents};
use parking_lot::Mutex;
use std::sync::Arc;
use studydesk_core::{
    MockStore, NotificationHub, PreviewRegistry, UploadCandidate, UploadError, UploadIntake,
    UploadService,
};
use tokio::task::JoinHandle;
use tracing::debug;

/// State of the "Upload Knowledge" modal
pub struct UploadModal {
    intake: UploadIntake,
    drag_active: bool,
    paste_dialog_open: bool,
    uploading: bool,
    open: bool,
    /// Bumped on close; an in-flight submission from an older epoch applies
    /// no state when it completes
    epoch: u64,

    service: Arc<dyn UploadService>,
    store: Arc<MockStore>,
    events: UiEvents,
    notifications: NotificationHub,
}

impl UploadModal {
    pub fn new(
        service: Arc<dyn UploadService>,
        store: Arc<MockStore>,
        previews: Arc<PreviewRegistry>,
        events: UiEvents,
        notifications: NotificationHub,
    ) -> Self {
        Self {
            intake: UploadIntake::new(previews),
            drag_active: false,
            paste_dialog_open: false,
            uploading: false,
            open: true,
            epoch: 0,
            service,
            store,
            events,
            notifications,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_uploading(&self) -> bool {
        self.uploading
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// Drag-enter/leave highlight over the drop zone
    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.intake.candidate()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.intake.preview_url()
    }

    /// Stage a dropped or picked file; a rejection is routed through the
    /// notification hub and leaves any previous candidate in place
    pub fn select_file(&mut self, name: &str, mime: Option<&str>, size: u64) {
        self.drag_active = false;
        if self.uploading {
            debug!("Ignoring file selection while an upload is in flight");
            return;
        }
        if let Err(e) = self.intake.select_file(name, mime, size) {
            self.notifications.error(e.to_string());
        }
    }

    pub fn is_paste_dialog_open(&self) -> bool {
        self.paste_dialog_open
    }

    pub fn open_paste_dialog(&mut self) {
        self.paste_dialog_open = true;
    }

    pub fn cancel_paste_dialog(&mut self) {
        self.paste_dialog_open = false;
    }

    /// Confirm the paste dialog; blank input keeps the dialog open
    pub fn confirm_paste(&mut self, text: &str) -> bool {
        if self.uploading {
            debug!("Ignoring pasted text while an upload is in flight");
            return false;
        }
        if self.intake.confirm_pasted_text(text) {
            self.paste_dialog_open = false;
            true
        } else {
            false
        }
    }

    /// Whether the upload control is enabled
    pub fn can_upload(&self) -> bool {
        self.intake.has_candidate() && !self.uploading
    }

    /// Label of the primary control
    pub fn upload_button_label(&self) -> &'static str {
        if self.uploading {
            "Uploading..."
        } else {
            "Done"
        }
    }

    /// Submit the staged candidate
    ///
    /// On success the resulting knowledge row is appended to the store, the
    /// candidate is cleared and the modal closes. On failure the candidate
    /// is preserved so retry does not require reselection.
    pub fn begin_upload(modal: &Arc<Mutex<Self>>) -> Result<JoinHandle<()>, UploadError> {
        let (candidate, sent_epoch, service, store, notifications) = {
            let mut m = modal.lock();
            let candidate = m
                .intake
                .candidate()
                .cloned()
                .ok_or(UploadError::NothingSelected)?;
            if m.uploading {
                return Err(UploadError::AlreadyUploading);
            }
            m.uploading = true;
            (
                candidate,
                m.epoch,
                Arc::clone(&m.service),
                Arc::clone(&m.store),
                m.notifications.clone(),
            )
        };

        let modal = Arc::clone(modal);
        Ok(tokio::spawn(async move {
            let result = service.submit(&candidate).await;

            let mut m = modal.lock();
            if m.epoch != sent_epoch {
                debug!("Upload completed after modal dismissal, dropping");
                return;
            }
            m.uploading = false;

            match result {
                Ok(receipt) => {
                    match store.add_knowledge_from_receipt(&receipt) {
                        Ok(knowledge) => {
                            notifications.info(format!("Uploaded {}", knowledge.title))
                        }
                        Err(e) => notifications.error(e.to_string()),
                    }
                    m.close();
                }
                Err(e) => notifications.error(e.to_string()),
            }
        }))
    }

    /// Close the modal: the candidate is cleared, the paste dialog dropped
    /// and any in-flight completion invalidated
    pub fn close(&mut self) {
        self.epoch += 1;
        self.uploading = false;
        self.paste_dialog_open = false;
        self.drag_active = false;
        self.intake.clear();
        self.open = false;
        self.events.emit(UiEvent::UploadModalClosed);
    }
}
