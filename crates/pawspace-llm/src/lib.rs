//! PawSpace LLM Provider Layer
//!
//! Advisory collaborator implementations for the assessment core.
//!
//! # Architecture
//!
//! This crate provides implementations of the `AdvisoryProvider` trait from
//! `pawspace-domain`. Every backend answers the same question: given a
//! plain-text description of a candidate, return free text with a score,
//! concerns and recommendations.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing and offline dry runs
//! - `OllamaProvider`: Local Ollama API integration
//! - `OpenAiProvider`: OpenAI-compatible chat completions API
//!
//! # Examples
//!
//! ```
//! use pawspace_llm::MockProvider;
//! use pawspace_domain::AdvisoryProvider;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let provider = MockProvider::new("score: 90\napproved: true");
//! let result = provider.advise("any candidate").await.unwrap();
//! assert_eq!(result, "score: 90\napproved: true");
//! # }
//! ```

#![warn(missing_docs)]

pub mod ollama;
pub mod openai;

use pawspace_domain::AdvisoryProvider;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

pub use ollama::OllamaProvider;
pub use openai::OpenAiProvider;

/// Sampling temperature used for assessments
///
/// Kept low so repeated assessments of the same candidate stay consistent.
pub const ASSESSMENT_TEMPERATURE: f32 = 0.3;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

#[derive(Debug, Clone)]
enum MockReply {
    Text(String),
    Error(String),
}

/// Mock advisory provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Clones share their response table and counters.
///
/// # Examples
///
/// ```
/// use pawspace_llm::MockProvider;
/// use pawspace_domain::AdvisoryProvider;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// // Simple fixed response
/// let provider = MockProvider::new("score: 80");
/// assert_eq!(provider.advise("any prompt").await.unwrap(), "score: 80");
///
/// // Per-prompt responses
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "score: 10");
/// assert_eq!(provider.advise("prompt1").await.unwrap(), "score: 10");
///
/// // Injected failures
/// let provider = MockProvider::failing("service unavailable");
/// assert!(provider.advise("prompt").await.is_err());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_reply: MockReply,
    responses: Arc<Mutex<HashMap<String, MockReply>>>,
    call_count: Arc<AtomicUsize>,
    pending_failures: Arc<AtomicUsize>,
    delay: Option<Duration>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self::with_default(MockReply::Text(response.into()))
    }

    /// Create a MockProvider that fails every call
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_default(MockReply::Error(message.into()))
    }

    fn with_default(default_reply: MockReply) -> Self {
        Self {
            default_reply,
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(AtomicUsize::new(0)),
            pending_failures: Arc::new(AtomicUsize::new(0)),
            delay: None,
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), MockReply::Text(response.into()));
    }

    /// Configure to return an error for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(prompt.into(), MockReply::Error("Mock error".to_string()));
    }

    /// Fail the next `times` calls before answering normally
    pub fn fail_next(&self, times: usize) {
        self.pending_failures.store(times, Ordering::SeqCst);
    }

    /// Wait `delay` before every answer
    ///
    /// The wait is a timer, so a cancelled call stops waiting.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Get the number of times advise was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Reset the call count
    pub fn reset_call_count(&self) {
        self.call_count.store(0, Ordering::SeqCst);
    }

    fn take_pending_failure(&self) -> bool {
        self.pending_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("score: 0")
    }
}

impl AdvisoryProvider for MockProvider {
    type Error = LlmError;

    async fn advise(&self, prompt: &str) -> Result<String, Self::Error> {
        self.call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.take_pending_failure() {
            return Err(LlmError::Communication("Mock transient failure".to_string()));
        }

        let reply = self
            .responses
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_reply.clone());

        match reply {
            MockReply::Text(text) => Ok(text),
            MockReply::Error(message) => Err(LlmError::Other(message)),
        }
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.advise("any prompt").await;
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[tokio::test]
    async fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.advise("hello").await.unwrap(), "world");
        assert_eq!(provider.advise("foo").await.unwrap(), "bar");
        assert_eq!(provider.advise("unknown").await.unwrap(), "score: 0");
    }

    #[tokio::test]
    async fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);

        provider.advise("prompt1").await.unwrap();
        assert_eq!(provider.call_count(), 1);

        provider.advise("prompt2").await.unwrap();
        assert_eq!(provider.call_count(), 2);

        provider.reset_call_count();
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.advise("bad prompt").await;
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[tokio::test]
    async fn test_mock_provider_failing() {
        let provider = MockProvider::failing("down");
        match provider.advise("anything").await {
            Err(LlmError::Other(msg)) => assert_eq!(msg, "down"),
            other => panic!("Expected Other error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mock_provider_fail_next() {
        let provider = MockProvider::new("score: 75");
        provider.fail_next(2);

        assert!(matches!(provider.advise("p").await, Err(LlmError::Communication(_))));
        assert!(matches!(provider.advise("p").await, Err(LlmError::Communication(_))));
        assert_eq!(provider.advise("p").await.unwrap(), "score: 75");
        assert_eq!(provider.call_count(), 3);
    }

    #[tokio::test]
    async fn test_mock_provider_clone() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.advise("test").await.unwrap();

        // Both share the same call count
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_provider_delay_stops_when_dropped() {
        let provider = MockProvider::new("late").with_delay(Duration::from_secs(30));
        let started = std::time::Instant::now();

        let result = tokio::time::timeout(Duration::from_millis(50), provider.advise("p")).await;

        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
        assert_eq!(provider.call_count(), 1);
    }

    #[test]
    fn test_model_name() {
        assert_eq!(MockProvider::default().model_name(), "mock");
    }
}
