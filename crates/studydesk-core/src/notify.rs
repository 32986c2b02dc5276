//! Notification channel
//!
//! All user-visible conditions (oversize rejections, transfer failures)
//! flow through a single non-modal channel that the rendering shell drains.

use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::warn;

/// Severity of a notification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Warning,
    Error,
}

/// A single user-visible notification
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

/// Sender half of the notification channel
///
/// Cheap to clone; every subsystem that needs to surface a condition holds
/// one. A dropped receiver makes sends no-ops.
#[derive(Clone)]
pub struct NotificationHub {
    tx: mpsc::UnboundedSender<Notification>,
}

impl NotificationHub {
    /// Create the hub and the receiver the shell drains
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Info, message.into());
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Warning, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NotificationLevel::Error, message.into());
    }

    fn push(&self, level: NotificationLevel, message: String) {
        match level {
            NotificationLevel::Info => tracing::info!("{}", message),
            NotificationLevel::Warning => warn!("{}", message),
            NotificationLevel::Error => tracing::error!("{}", message),
        }
        let _ = self.tx.send(Notification::new(level, message));
    }
}
