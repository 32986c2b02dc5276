//! Main application state

use crate::events::UiEvents;
use crate::modals::UploadModal;
use crate::panels::ChatPanel;
use crate::routes::Route;
use crate::theme::{ThemeContext, ThemeMode};
use crate::wizard::CreateCollectionWizard;
use parking_lot::Mutex;
use std::sync::Arc;
use studydesk_core::{
    AssistantResponder, MockStore, Notification, NotificationHub, PreviewRegistry,
    SimulatedResponder, SimulatedUpload, UploadService,
};
use tokio::sync::mpsc;
use tracing::info;

/// Main application state
///
/// Everything is injected; there are no globals. Route changes mount and
/// unmount the route-scoped components (chat panel, wizard).
pub struct AppState {
    // === Backend Services ===
    /// In-memory data source
    pub store: Arc<MockStore>,
    /// Upload transfer seam
    pub uploads: Arc<dyn UploadService>,
    /// Assistant reply seam
    pub responder: Arc<dyn AssistantResponder>,
    /// Preview-lease registry shared by intake and chat attachments
    pub previews: Arc<PreviewRegistry>,
    /// Non-modal notification channel
    pub notifications: NotificationHub,
    /// UI event channel toward the shell
    pub events: UiEvents,

    // === UI State ===
    /// Session theme; dark by default
    pub theme: ThemeContext,
    /// Current route
    pub route: Route,
    /// Chat workspace, mounted on the knowledge view
    pub chat: Option<ChatPanel>,
    /// Upload modal, mounted on demand
    pub upload_modal: Option<Arc<Mutex<UploadModal>>>,
    /// Creation wizard, mounted on the create-collection route
    pub wizard: Option<CreateCollectionWizard>,
}

impl AppState {
    /// Create application state with injected services
    pub fn new(
        store: Arc<MockStore>,
        uploads: Arc<dyn UploadService>,
        responder: Arc<dyn AssistantResponder>,
        notifications: NotificationHub,
        events: UiEvents,
    ) -> Self {
        Self {
            store,
            uploads,
            responder,
            previews: Arc::new(PreviewRegistry::new()),
            notifications,
            events,
            theme: ThemeContext::new(ThemeMode::Dark),
            route: Route::Home,
            chat: None,
            upload_modal: None,
            wizard: None,
        }
    }

    /// State backed by the seeded store and the simulated services, plus
    /// the receivers the shell drains
    pub fn simulated() -> (
        Self,
        mpsc::UnboundedReceiver<crate::events::UiEvent>,
        mpsc::UnboundedReceiver<Notification>,
    ) {
        let (events, events_rx) = UiEvents::channel();
        let (notifications, notify_rx) = NotificationHub::channel();
        let state = Self::new(
            Arc::new(MockStore::seeded()),
            Arc::new(SimulatedUpload::new()),
            Arc::new(SimulatedResponder::new()),
            notifications,
            events,
        );
        (state, events_rx, notify_rx)
    }

    /// Resolve a path and mount/unmount route-scoped components
    pub fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        info!("Navigate: {}", route.path());

        // Leaving a route tears its components down.
        if let Some(mut chat) = self.chat.take() {
            chat.close();
        }
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.cancel();
        }
        self.wizard = None;

        match &route {
            Route::KnowledgeView { .. } => {
                self.chat = Some(ChatPanel::new(
                    Arc::clone(&self.responder),
                    Arc::clone(&self.previews),
                    self.events.clone(),
                    self.notifications.clone(),
                ));
            }
            Route::CreateCollection => {
                self.wizard = Some(CreateCollectionWizard::new(
                    Arc::clone(&self.store),
                    self.notifications.clone(),
                ));
            }
            _ => {}
        }

        self.route = route;
    }

    /// Flip the session theme
    pub fn toggle_theme(&self) -> ThemeMode {
        self.theme.toggle()
    }

    /// Mount the upload modal unless one is already open
    pub fn open_upload_modal(&mut self) {
        let already_open = self
            .upload_modal
            .as_ref()
            .map(|m| m.lock().is_open())
            .unwrap_or(false);
        if already_open {
            return;
        }

        self.upload_modal = Some(Arc::new(Mutex::new(UploadModal::new(
            Arc::clone(&self.uploads),
            Arc::clone(&self.store),
            Arc::clone(&self.previews),
            self.events.clone(),
            self.notifications.clone(),
        ))));
    }

    /// Submit the wizard's naming step; advancing opens the upload modal
    pub fn submit_wizard_name(&mut self) -> bool {
        let advanced = self
            .wizard
            .as_mut()
            .map(|w| w.submit_name())
            .unwrap_or(false);
        if advanced {
            self.open_upload_modal();
        }
        advanced
    }

    /// Close the upload modal via user action
    pub fn close_upload_modal(&mut self) {
        if let Some(modal) = &self.upload_modal {
            modal.lock().close();
        }
        self.on_upload_modal_closed();
    }

    /// React to the modal having closed (user action or completed upload):
    /// unmount it and let an active wizard finish
    pub fn on_upload_modal_closed(&mut self) {
        self.upload_modal = None;
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.upload_closed();
        }
    }

    /// Dismiss the wizard's success acknowledgment
    pub fn acknowledge_wizard(&mut self) {
        let done = self
            .wizard
            .as_mut()
            .map(|w| w.acknowledge())
            .unwrap_or(false);
        if done {
            self.wizard = None;
        }
    }
}
