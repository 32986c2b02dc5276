//! Collection-creation wizard
//!
//! Two-step flow: name the collection, then upload initial knowledge.
//! Completion creates the collection record in the store; cancellation at
//! any step writes nothing.

use crate::modals::CreateCollectionModal;
use std::sync::Arc;
use studydesk_core::{Collection, MockStore, NotificationHub};
use tracing::{debug, info};

/// Wizard state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Step 1: "What are you studying?"
    Naming,
    /// Step 2: upload modal is open
    Uploading,
    /// Success acknowledgment
    Done,
    /// Aborted via back navigation
    Cancelled,
}

impl WizardStep {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Cancelled)
    }
}

/// Coordinates the naming modal and the upload modal
pub struct CreateCollectionWizard {
    step: WizardStep,
    /// Step-1 modal state
    pub naming: CreateCollectionModal,
    collection_name: Option<String>,
    created: Option<Collection>,

    store: Arc<MockStore>,
    notifications: NotificationHub,
}

impl CreateCollectionWizard {
    pub fn new(store: Arc<MockStore>, notifications: NotificationHub) -> Self {
        Self {
            step: WizardStep::Naming,
            naming: CreateCollectionModal::new(),
            collection_name: None,
            created: None,
            store,
            notifications,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Committed collection name, available from step 2 on
    pub fn collection_name(&self) -> Option<&str> {
        self.collection_name.as_deref()
    }

    /// The record created on completion
    pub fn created(&self) -> Option<&Collection> {
        self.created.as_ref()
    }

    /// Step-indicator dots `(naming, uploading)`; hidden once terminal
    pub fn step_dots(&self) -> Option<(bool, bool)> {
        match self.step {
            WizardStep::Naming => Some((true, false)),
            WizardStep::Uploading => Some((false, true)),
            WizardStep::Done | WizardStep::Cancelled => None,
        }
    }

    /// Submit step 1; returns whether the wizard advanced (the shell opens
    /// the upload modal on `true`)
    pub fn submit_name(&mut self) -> bool {
        if self.step != WizardStep::Naming {
            return false;
        }
        let Some(name) = self.naming.submit() else {
            debug!("Ignoring name submission with blank input");
            return false;
        };

        info!("Creating collection: {}", name);
        self.collection_name = Some(name);
        self.step = WizardStep::Uploading;
        true
    }

    /// The upload modal closed, with or without a completed upload; the
    /// wizard finishes and the collection record is created
    pub fn upload_closed(&mut self) {
        if self.step != WizardStep::Uploading {
            return;
        }

        // collection_name is always set on the Naming -> Uploading edge
        if let Some(name) = self.collection_name.clone() {
            match self.store.add_collection(name) {
                Ok(collection) => self.created = Some(collection),
                Err(e) => self.notifications.error(e.to_string()),
            }
        }
        self.step = WizardStep::Done;
    }

    /// Success text shown in the `Done` state
    pub fn success_message(&self) -> Option<String> {
        if self.step != WizardStep::Done {
            return None;
        }
        self.collection_name
            .as_ref()
            .map(|name| format!("Your collection \"{name}\" was created successfully."))
    }

    /// Dismiss the success acknowledgment; returns whether the wizard
    /// should unmount
    pub fn acknowledge(&mut self) -> bool {
        self.step == WizardStep::Done
    }

    /// Abort via back navigation from any non-terminal state
    pub fn cancel(&mut self) {
        if self.step.is_terminal() {
            return;
        }
        info!("Create-collection flow cancelled at {:?}", self.step);
        self.step = WizardStep::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn wizard() -> (CreateCollectionWizard, Arc<MockStore>) {
        let store = Arc::new(MockStore::empty());
        let (hub, _rx) = NotificationHub::channel();
        (CreateCollectionWizard::new(Arc::clone(&store), hub), store)
    }

    #[test]
    fn test_blank_name_never_reaches_uploading() {
        let (mut wizard, _store) = wizard();

        assert!(!wizard.submit_name());
        wizard.naming.set_name("   ");
        assert!(!wizard.submit_name());
        assert_eq!(wizard.step(), WizardStep::Naming);
    }

    #[test]
    fn test_long_name_is_truncated_before_submission() {
        let (mut wizard, _store) = wizard();

        wizard.naming.set_name(&"a".repeat(80));
        assert!(wizard.submit_name());
        assert_eq!(wizard.collection_name().unwrap().chars().count(), 50);
    }

    #[test]
    fn test_happy_path_creates_the_collection() {
        let (mut wizard, store) = wizard();

        wizard.naming.set_name("Biology");
        assert_eq!(wizard.step_dots(), Some((true, false)));

        assert!(wizard.submit_name());
        assert_eq!(wizard.step(), WizardStep::Uploading);
        assert_eq!(wizard.step_dots(), Some((false, true)));
        // Nothing is written until the flow completes.
        assert!(store.collections().is_empty());

        wizard.upload_closed();
        assert_eq!(wizard.step(), WizardStep::Done);
        assert_eq!(wizard.step_dots(), None);
        assert_eq!(
            wizard.success_message().unwrap(),
            "Your collection \"Biology\" was created successfully."
        );

        let collections = store.collections();
        assert_eq!(collections.len(), 1);
        assert_eq!(collections[0].title, "Biology");
        assert_eq!(collections[0].knowledge_count, 0);
        assert_eq!(wizard.created().unwrap().title, "Biology");

        assert!(wizard.acknowledge());
    }

    #[test]
    fn test_cancel_writes_nothing() {
        let (mut wizard, store) = wizard();

        wizard.naming.set_name("Chemistry");
        wizard.submit_name();
        wizard.cancel();

        assert_eq!(wizard.step(), WizardStep::Cancelled);
        assert!(store.collections().is_empty());
        assert_eq!(wizard.step_dots(), None);
        assert!(wizard.success_message().is_none());
        assert!(!wizard.acknowledge());

        // A cancelled wizard stays cancelled.
        wizard.upload_closed();
        assert_eq!(wizard.step(), WizardStep::Cancelled);
    }

    #[test]
    fn test_upload_closed_only_applies_once() {
        let (mut wizard, store) = wizard();

        wizard.naming.set_name("Physics");
        wizard.submit_name();
        wizard.upload_closed();
        wizard.upload_closed();

        assert_eq!(store.collections().len(), 1);
    }
}
