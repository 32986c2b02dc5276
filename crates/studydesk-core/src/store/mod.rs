//! In-memory mock data store
//!
//! The sole data source for the client: typed collections of domain
//! entities seeded from an embedded JSON snapshot. Nothing is persisted
//! beyond the session. Writes are limited to what the upload and
//! collection-creation flows produce.

use crate::error::{Result, StoreError};
use crate::types::{
    Collection, Flashcard, Knowledge, Note, Quiz, StudyGuide, UploadReceipt, User,
};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::info;

static SEED: Lazy<StoreData> = Lazy::new(|| {
    serde_json::from_str(include_str!("seed.json")).expect("embedded seed data is valid JSON")
});

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreData {
    collections: Vec<Collection>,
    featured_collections: Vec<Collection>,
    knowledge_items: Vec<Knowledge>,
    flashcards: Vec<Flashcard>,
    quizzes: Vec<Quiz>,
    study_guides: Vec<StudyGuide>,
    notes: Vec<Note>,
    user: User,
}

/// Session-local store of domain entities
pub struct MockStore {
    inner: RwLock<StoreData>,
}

impl MockStore {
    /// Store populated with the demo data set
    pub fn seeded() -> Self {
        Self {
            inner: RwLock::new(SEED.clone()),
        }
    }

    /// Store with no entities (useful for tests)
    pub fn empty() -> Self {
        Self {
            inner: RwLock::new(StoreData {
                collections: Vec::new(),
                featured_collections: Vec::new(),
                knowledge_items: Vec::new(),
                flashcards: Vec::new(),
                quizzes: Vec::new(),
                study_guides: Vec::new(),
                notes: Vec::new(),
                user: User {
                    id: "u1".to_string(),
                    name: "Alex Johnson".to_string(),
                    email: "alex@studydesk.app".to_string(),
                    avatar: None,
                },
            }),
        }
    }

    pub fn collections(&self) -> Vec<Collection> {
        self.inner.read().collections.clone()
    }

    pub fn featured_collections(&self) -> Vec<Collection> {
        self.inner.read().featured_collections.clone()
    }

    pub fn knowledge_items(&self) -> Vec<Knowledge> {
        self.inner.read().knowledge_items.clone()
    }

    pub fn flashcards(&self) -> Vec<Flashcard> {
        self.inner.read().flashcards.clone()
    }

    pub fn quizzes(&self) -> Vec<Quiz> {
        self.inner.read().quizzes.clone()
    }

    pub fn study_guides(&self) -> Vec<StudyGuide> {
        self.inner.read().study_guides.clone()
    }

    pub fn notes(&self) -> Vec<Note> {
        self.inner.read().notes.clone()
    }

    pub fn user(&self) -> User {
        self.inner.read().user.clone()
    }

    pub fn collection(&self, id: &str) -> Option<Collection> {
        self.inner
            .read()
            .collections
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn knowledge(&self, id: &str) -> Option<Knowledge> {
        self.inner
            .read()
            .knowledge_items
            .iter()
            .find(|k| k.id == id)
            .cloned()
    }

    /// Flashcards grouped under a collection label
    pub fn flashcards_for(&self, collection_id: &str) -> Vec<Flashcard> {
        self.inner
            .read()
            .flashcards
            .iter()
            .filter(|f| f.collection_id == collection_id)
            .cloned()
            .collect()
    }

    /// Create a fresh collection; called on wizard completion
    pub fn add_collection(&self, title: impl Into<String>) -> Result<Collection> {
        let collection = Collection::new(title);
        let mut data = self.inner.write();

        if data.collections.iter().any(|c| c.id == collection.id) {
            return Err(StoreError::DuplicateId(collection.id.clone()).into());
        }

        info!("Created collection: {} ({})", collection.title, collection.id);
        data.collections.push(collection.clone());
        Ok(collection)
    }

    /// Append a knowledge row produced by a completed upload
    pub fn add_knowledge_from_receipt(&self, receipt: &UploadReceipt) -> Result<Knowledge> {
        let knowledge = Knowledge::from_receipt(receipt);
        let mut data = self.inner.write();

        if data.knowledge_items.iter().any(|k| k.id == knowledge.id) {
            return Err(StoreError::DuplicateId(knowledge.id.clone()).into());
        }

        info!(
            "Added knowledge: {} ({:?})",
            knowledge.title, knowledge.knowledge_type
        );
        data.knowledge_items.push(knowledge.clone());
        Ok(knowledge)
    }
}
