//! Trait definitions for external interactions
//!
//! The scoring core has exactly one outside boundary: the advisory
//! collaborator. Implementations live in `pawspace-llm`.

use std::future::Future;

/// Opaque text-generation collaborator that supplies a preliminary,
/// non-authoritative assessment
///
/// The provider receives a plain-text description of a candidate and
/// returns free text that loosely follows the advisory format (a `score`
/// line, `- concern` lines, `- recommendation` lines). Nothing it returns
/// is trusted for the final approval decision.
///
/// Implementations may write `async fn advise`. Dropping the returned
/// future must abandon the request, so a caller's timeout bounds the work
/// and not only the wait.
pub trait AdvisoryProvider {
    /// Error type for advisory calls
    type Error;

    /// Produce an advisory assessment for the given prompt
    fn advise(&self, prompt: &str) -> impl Future<Output = Result<String, Self::Error>> + Send;

    /// Name of the model or backend, for logs
    fn model_name(&self) -> &str {
        "advisory"
    }
}
