//! Derived study artifact types
//!
//! Flashcards, quizzes, study guides and notes are generated from a
//! collection's knowledge. `collection_id` values are illustrative labels
//! from the mock set, not validated foreign keys.

use serde::{Deserialize, Serialize};

/// Review difficulty of a flashcard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Question/answer pair
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub collection_id: String,
    pub last_reviewed: Option<chrono::DateTime<chrono::Utc>>,
    pub difficulty: Option<Difficulty>,
}

/// Generated quiz metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub collection_id: String,
    pub question_count: u32,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_completed: Option<chrono::DateTime<chrono::Utc>>,
}

/// Long-form generated study guide
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyGuide {
    pub id: String,
    pub title: String,
    pub content: String,
    pub collection_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Free-form note
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub collection_id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
