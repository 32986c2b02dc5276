//! Chat panel state
//!
//! Owns the transcript and the send/attach interactions. The user message
//! is appended synchronously on send; the assistant reply resolves through
//! the responder seam and is appended when it arrives. Only one send can be
//! outstanding at a time, so replies land in send order.

use crate::events::{UiEvent, UiEvents};
use crate::panels::{Sidebar, SplitPane};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use studydesk_core::{
    admit, AssistantResponder, ChatError, ChatMessage, NotificationHub, PreviewLease,
    PreviewRegistry, UploadCandidate,
};
use tokio::task::JoinHandle;
use tracing::debug;

/// Tabs of the right-hand content pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentTab {
    Knowledge,
    Flashcards,
    Quizzes,
    StudyGuides,
    Notes,
}

impl ContentTab {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Knowledge => "Knowledge",
            Self::Flashcards => "Flashcards",
            Self::Quizzes => "Quizzes",
            Self::StudyGuides => "Study Guides",
            Self::Notes => "Notes",
        }
    }
}

/// Shortcut buttons under the chat input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    CreateFlashcards,
    CreateQuiz,
    CreateStudyGuide,
}

impl QuickAction {
    /// Navigation target; resolved by the shell through the route table
    pub fn target_path(&self) -> &'static str {
        match self {
            Self::CreateFlashcards => "/flashcards/create",
            Self::CreateQuiz => "/quizzes/create",
            Self::CreateStudyGuide => "/study-guides/create",
        }
    }
}

/// Two-pane chat workspace: transcript left, tabbed content right
pub struct ChatPanel {
    /// Resizable split between transcript and content
    pub split: SplitPane,
    /// Collapsible navigation sidebar
    pub sidebar: Sidebar,

    transcript: Arc<Mutex<Vec<ChatMessage>>>,
    waiting: Arc<AtomicBool>,
    /// Bumped on teardown; replies from an older epoch are discarded
    epoch: Arc<AtomicU64>,
    input: String,
    active_tab: ContentTab,
    attachment_leases: Vec<PreviewLease>,

    responder: Arc<dyn AssistantResponder>,
    previews: Arc<PreviewRegistry>,
    events: UiEvents,
    notifications: NotificationHub,
}

impl ChatPanel {
    pub fn new(
        responder: Arc<dyn AssistantResponder>,
        previews: Arc<PreviewRegistry>,
        events: UiEvents,
        notifications: NotificationHub,
    ) -> Self {
        Self {
            split: SplitPane::new(),
            sidebar: Sidebar::new(),
            transcript: Arc::new(Mutex::new(Vec::new())),
            waiting: Arc::new(AtomicBool::new(false)),
            epoch: Arc::new(AtomicU64::new(0)),
            input: String::new(),
            active_tab: ContentTab::Knowledge,
            attachment_leases: Vec::new(),
            responder,
            previews,
            events,
            notifications,
        }
    }

    /// Snapshot of the transcript
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.transcript.lock().clone()
    }

    pub fn is_waiting(&self) -> bool {
        self.waiting.load(Ordering::SeqCst)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn active_tab(&self) -> ContentTab {
        self.active_tab
    }

    pub fn set_tab(&mut self, tab: ContentTab) {
        self.active_tab = tab;
    }

    /// Whether the send control is enabled
    pub fn can_send(&self) -> bool {
        !self.input.trim().is_empty() && !self.is_waiting()
    }

    /// Send the current input
    ///
    /// Appends the user message immediately, clears the input and resolves
    /// the assistant reply on the returned task. Only one send may be
    /// outstanding.
    pub fn send_message(&mut self) -> Result<JoinHandle<()>, ChatError> {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if self.is_waiting() {
            return Err(ChatError::SendInFlight);
        }

        self.input.clear();
        self.waiting.store(true, Ordering::SeqCst);
        self.push_message(ChatMessage::user_text(text.clone()));

        let transcript = Arc::clone(&self.transcript);
        let waiting = Arc::clone(&self.waiting);
        let epoch = Arc::clone(&self.epoch);
        let sent_epoch = epoch.load(Ordering::SeqCst);
        let responder = Arc::clone(&self.responder);
        let events = self.events.clone();
        let notifications = self.notifications.clone();

        Ok(tokio::spawn(async move {
            let reply = responder.respond(&text).await;

            if epoch.load(Ordering::SeqCst) != sent_epoch {
                debug!("Reply resolved after panel teardown, dropping");
                return;
            }
            waiting.store(false, Ordering::SeqCst);

            match reply {
                Ok(reply) => {
                    transcript.lock().push(ChatMessage::assistant_text(reply));
                    events.emit(UiEvent::TranscriptChanged);
                }
                Err(e) => notifications.error(e.to_string()),
            }
        }))
    }

    /// Append one attachment message for a selected file
    ///
    /// Attachments go through the same admission rules as the upload modal;
    /// an oversize file is reported and appends nothing.
    pub fn attach_file(&mut self, name: &str, mime: Option<&str>, size: u64) {
        let candidate = UploadCandidate::file(name, mime, size);
        if let Err(e) = admit(candidate.mime(), candidate.size_bytes()) {
            self.notifications.error(e.to_string());
            return;
        }

        let lease = self.previews.lease_for(&candidate);
        self.push_message(ChatMessage::user_attachment(
            name,
            lease.url(),
            candidate.mime(),
        ));
        self.attachment_leases.push(lease);
    }

    /// Emit navigation for one of the shortcut buttons
    pub fn quick_action(&self, action: QuickAction) {
        self.events.emit(UiEvent::Navigate {
            path: action.target_path().to_string(),
        });
    }

    /// Tear the panel down: pending replies are discarded and attachment
    /// previews released
    pub fn close(&mut self) {
        self.epoch.fetch_add(1, Ordering::SeqCst);
        self.waiting.store(false, Ordering::SeqCst);
        for lease in self.attachment_leases.drain(..) {
            self.previews.release(lease);
        }
    }

    fn push_message(&self, message: ChatMessage) {
        self.transcript.lock().push(message);
        self.events.emit(UiEvent::TranscriptChanged);
    }
}

impl Drop for ChatPanel {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use studydesk_core::{MessageKind, NotificationHub, SimulatedResponder};

    struct Fixture {
        panel: ChatPanel,
        events_rx: tokio::sync::mpsc::UnboundedReceiver<UiEvent>,
        notify_rx: tokio::sync::mpsc::UnboundedReceiver<studydesk_core::Notification>,
        previews: Arc<PreviewRegistry>,
    }

    fn fixture() -> Fixture {
        let (events, events_rx) = UiEvents::channel();
        let (hub, notify_rx) = NotificationHub::channel();
        let previews = Arc::new(PreviewRegistry::new());
        let panel = ChatPanel::new(
            Arc::new(SimulatedResponder::new()),
            Arc::clone(&previews),
            events,
            hub,
        );
        Fixture {
            panel,
            events_rx,
            notify_rx,
            previews,
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_send_appends_user_then_reply_in_order() {
        let mut fx = fixture();

        for prompt in ["What is Big O?", "And binary search?"] {
            fx.panel.set_input(prompt);
            let handle = fx.panel.send_message().unwrap();

            // Optimistic append: the user message is visible immediately.
            let before = fx.panel.messages();
            assert!(before.last().unwrap().is_user);
            assert!(fx.panel.is_waiting());

            handle.await.unwrap();
            assert!(!fx.panel.is_waiting());
        }

        let messages = fx.panel.messages();
        assert_eq!(messages.len(), 4);
        assert!(messages[0].is_user);
        assert!(!messages[1].is_user);
        assert!(messages[1].text.as_ref().unwrap().contains("What is Big O?"));
        assert!(messages[2].is_user);
        assert!(messages[3].text.as_ref().unwrap().contains("And binary search?"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_outstanding_send_at_a_time() {
        let mut fx = fixture();

        fx.panel.set_input("first");
        let handle = fx.panel.send_message().unwrap();

        fx.panel.set_input("second");
        assert_eq!(fx.panel.send_message().unwrap_err(), ChatError::SendInFlight);
        assert!(!fx.panel.can_send());

        handle.await.unwrap();
        assert!(fx.panel.can_send());
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_input_is_rejected() {
        let mut fx = fixture();
        fx.panel.set_input("   ");
        assert_eq!(fx.panel.send_message().unwrap_err(), ChatError::EmptyMessage);
        assert!(fx.panel.messages().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_after_teardown_is_dropped() {
        let mut fx = fixture();

        fx.panel.set_input("orphaned");
        let handle = fx.panel.send_message().unwrap();
        fx.panel.close();
        handle.await.unwrap();

        let messages = fx.panel.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].is_user);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transcript_changes_emit_scroll_events() {
        let mut fx = fixture();

        fx.panel.set_input("hello");
        let handle = fx.panel.send_message().unwrap();
        handle.await.unwrap();

        // One event for the user message, one for the reply.
        assert_eq!(fx.events_rx.try_recv().unwrap(), UiEvent::TranscriptChanged);
        assert_eq!(fx.events_rx.try_recv().unwrap(), UiEvent::TranscriptChanged);
        assert!(fx.events_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_attachments_are_validated_and_classified() {
        let mut fx = fixture();

        fx.panel.attach_file("diagram.png", None, 1024);
        fx.panel.attach_file("paper.pdf", None, 2048);
        // Same admission rules as the upload modal.
        fx.panel
            .attach_file("podcast.mp3", Some("audio/mpeg"), 30 * 1024 * 1024);

        let messages = fx.panel.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].kind, MessageKind::Image);
        assert_eq!(messages[1].kind, MessageKind::File);

        let rejection = fx.notify_rx.try_recv().unwrap();
        assert_eq!(rejection.message, "Audio files must be less than 25MB");
    }

    #[tokio::test(start_paused = true)]
    async fn test_attachment_previews_released_on_close() {
        let mut fx = fixture();

        fx.panel.attach_file("a.png", None, 10);
        fx.panel.attach_file("b.pdf", None, 10);
        assert_eq!(fx.previews.active_leases(), 2);

        fx.panel.close();
        assert_eq!(fx.previews.active_leases(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quick_actions_navigate() {
        let fx = fixture();
        let mut events_rx = fx.events_rx;

        fx.panel.quick_action(QuickAction::CreateQuiz);
        assert_eq!(
            events_rx.try_recv().unwrap(),
            UiEvent::Navigate { path: "/quizzes/create".to_string() }
        );
    }

    mockall::mock! {
        Responder {}

        #[async_trait::async_trait]
        impl AssistantResponder for Responder {
            async fn respond(&self, prompt: &str) -> Result<String, ChatError>;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_responder_failure_is_reported_not_appended() {
        let mut responder = MockResponder::new();
        responder
            .expect_respond()
            .returning(|_| Err(ChatError::ResponderFailed("backend offline".to_string())));

        let (events, _events_rx) = UiEvents::channel();
        let (hub, mut notify_rx) = NotificationHub::channel();
        let mut panel = ChatPanel::new(
            Arc::new(responder),
            Arc::new(PreviewRegistry::new()),
            events,
            hub,
        );

        panel.set_input("hello?");
        panel.send_message().unwrap().await.unwrap();

        assert_eq!(panel.messages().len(), 1);
        assert!(!panel.is_waiting());
        assert!(notify_rx.try_recv().unwrap().message.contains("backend offline"));
    }
}
