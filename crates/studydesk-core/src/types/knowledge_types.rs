//! Knowledge and collection entities

use serde::{Deserialize, Serialize};

/// Content type of a knowledge item
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KnowledgeType {
    Document,
    Pdf,
    Video,
    Image,
    Text,
}

impl KnowledgeType {
    /// Classify a MIME type into a knowledge type
    pub fn from_mime(mime: &str) -> Self {
        if mime == "application/pdf" {
            Self::Pdf
        } else if mime.starts_with("video/") {
            Self::Video
        } else if mime.starts_with("image/") {
            Self::Image
        } else if mime.starts_with("text/") {
            Self::Text
        } else {
            Self::Document
        }
    }

    /// Classify a file name by its guessed MIME type
    pub fn from_file_name(name: &str) -> Self {
        let mime = mime_guess::from_path(name)
            .first_or_octet_stream()
            .to_string();
        Self::from_mime(&mime)
    }
}

/// A single uploaded/ingested content unit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Knowledge {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub knowledge_type: KnowledgeType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub file_size: Option<String>,
    pub thumbnail: Option<String>,
}

impl Knowledge {
    /// Build a knowledge row from a completed upload receipt
    pub fn from_receipt(receipt: &super::UploadReceipt) -> Self {
        let now = chrono::Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: receipt.title.clone(),
            knowledge_type: KnowledgeType::from_file_name(&receipt.title),
            created_at: now,
            updated_at: now,
            file_size: Some(super::format_megabytes(receipt.size)),
            thumbnail: None,
        }
    }
}

/// A named grouping of knowledge items and derived study artifacts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub knowledge_count: u32,
    pub is_public: bool,
}

impl Collection {
    /// Create a fresh private collection with no knowledge yet
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            color: None,
            icon: None,
            created_at: chrono::Utc::now(),
            knowledge_count: 0,
            is_public: false,
        }
    }
}

/// Account profile shown in the chrome
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub avatar: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_knowledge_type_from_mime() {
        assert_eq!(KnowledgeType::from_mime("application/pdf"), KnowledgeType::Pdf);
        assert_eq!(KnowledgeType::from_mime("video/mp4"), KnowledgeType::Video);
        assert_eq!(KnowledgeType::from_mime("image/png"), KnowledgeType::Image);
        assert_eq!(KnowledgeType::from_mime("text/plain"), KnowledgeType::Text);
        assert_eq!(
            KnowledgeType::from_mime("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
            KnowledgeType::Document
        );
    }

    #[test]
    fn test_knowledge_type_from_file_name() {
        assert_eq!(KnowledgeType::from_file_name("lecture.pdf"), KnowledgeType::Pdf);
        assert_eq!(KnowledgeType::from_file_name("roadmap.png"), KnowledgeType::Image);
        assert_eq!(KnowledgeType::from_file_name("notes.txt"), KnowledgeType::Text);
        assert_eq!(KnowledgeType::from_file_name("intro.mp4"), KnowledgeType::Video);
    }

    #[test]
    fn test_new_collection_defaults() {
        let collection = Collection::new("Biology");
        assert_eq!(collection.title, "Biology");
        assert_eq!(collection.knowledge_count, 0);
        assert!(!collection.is_public);
    }
}
