//! Collection-naming modal state
//!
//! First step of the creation wizard: "What are you studying?". Input is
//! truncated at the field level rather than rejected, and submission
//! requires a non-empty trimmed name.

/// Maximum collection name length; longer input is truncated as typed
pub const MAX_NAME_LENGTH: usize = 50;

/// State of the naming modal
#[derive(Debug, Default)]
pub struct CreateCollectionModal {
    name: String,
}

impl CreateCollectionModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply typed input, truncating past the length limit
    pub fn set_name(&mut self, raw: &str) {
        self.name = raw.chars().take(MAX_NAME_LENGTH).collect();
    }

    /// Counter under the input, e.g. `7/50`
    pub fn counter_label(&self) -> String {
        format!("{}/{}", self.name.chars().count(), MAX_NAME_LENGTH)
    }

    /// Whether the "Next" control is enabled
    pub fn can_submit(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Commit the trimmed name, or `None` when blank
    pub fn submit(&self) -> Option<String> {
        let trimmed = self.name.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_is_truncated_not_rejected() {
        let mut modal = CreateCollectionModal::new();
        modal.set_name(&"x".repeat(80));

        assert_eq!(modal.name().chars().count(), MAX_NAME_LENGTH);
        assert_eq!(modal.counter_label(), "50/50");
        assert!(modal.can_submit());
    }

    #[test]
    fn test_blank_name_cannot_submit() {
        let mut modal = CreateCollectionModal::new();
        assert!(!modal.can_submit());

        modal.set_name("   ");
        assert!(!modal.can_submit());
        assert!(modal.submit().is_none());
    }

    #[test]
    fn test_submit_trims() {
        let mut modal = CreateCollectionModal::new();
        modal.set_name("  Biology  ");
        assert_eq!(modal.submit().unwrap(), "Biology");
    }

    #[test]
    fn test_truncation_is_character_based() {
        let mut modal = CreateCollectionModal::new();
        modal.set_name(&"é".repeat(60));
        assert_eq!(modal.name().chars().count(), MAX_NAME_LENGTH);
    }
}
