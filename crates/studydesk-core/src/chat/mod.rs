//! Assistant responder trait and simulated implementation
//!
//! The chat panel appends the user's message synchronously and resolves the
//! assistant reply through this seam. The simulated responder stands in for
//! a real request/response cycle with a fixed delay.

use crate::error::ChatError;
use async_trait::async_trait;
use std::time::Duration;

/// Produces the assistant reply for a user prompt
#[async_trait]
pub trait AssistantResponder: Send + Sync {
    async fn respond(&self, prompt: &str) -> Result<String, ChatError>;
}

/// Fixed-delay responder whose reply references the prompt verbatim
pub struct SimulatedResponder {
    delay: Duration,
}

impl SimulatedResponder {
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedResponder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssistantResponder for SimulatedResponder {
    async fn respond(&self, prompt: &str) -> Result<String, ChatError> {
        tokio::time::sleep(self.delay).await;
        Ok(format!(
            "This is a simulated response to \"{prompt}\". The actual implementation would ask your assistant backend."
        ))
    }
}
