//! UI events emitted toward the rendering shell
//!
//! State machines publish here; the shell reacts (scrolls the transcript,
//! performs navigation, unmounts a closed modal).

use tokio::sync::mpsc;

/// Event emitted from the interaction model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// The chat transcript changed; scroll to the newest message
    TranscriptChanged,
    /// Navigate to a path (resolved through `Route::parse` by the shell)
    Navigate { path: String },
    /// The upload modal finished closing (user action or completed upload)
    UploadModalClosed,
}

/// Sender half of the UI event channel
#[derive(Clone)]
pub struct UiEvents {
    tx: mpsc::UnboundedSender<UiEvent>,
}

impl UiEvents {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<UiEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn emit(&self, event: UiEvent) {
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_emit_order() {
        let (events, mut rx) = UiEvents::channel();

        events.emit(UiEvent::TranscriptChanged);
        events.emit(UiEvent::Navigate { path: "/quizzes".to_string() });

        assert_eq!(rx.try_recv().unwrap(), UiEvent::TranscriptChanged);
        assert_eq!(
            rx.try_recv().unwrap(),
            UiEvent::Navigate { path: "/quizzes".to_string() }
        );
    }
}
