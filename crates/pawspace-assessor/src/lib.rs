//! PawSpace Assessor
//!
//! Combines an advisory text-generation provider with the deterministic rule
//! evaluator into one approval decision.
//!
//! # Architecture
//!
//! ```text
//! Candidate → PromptBuilder → AdvisoryProvider → parser ─┐
//!     └──────────────→ RuleEvaluator ─────────────────────┴→ Assessment
//! ```
//!
//! The advisory score is provisional. Every rule violation subtracts its
//! deduction, and approval is recomputed from the final score against
//! `minimum_approval_score`, so rules can always veto an optimistic advisory.
//! If the provider fails, times out, or answers with nothing, the result is
//! [`Assessment::safe_failure`](pawspace_domain::Assessment::safe_failure).
//!
//! # Example Usage
//!
//! ```no_run
//! use pawspace_assessor::Assessor;
//! use pawspace_domain::SpaceProfile;
//! use pawspace_llm::MockProvider;
//!
//! # async fn example() {
//! let assessor = Assessor::default_config(MockProvider::new("score: 90\napproved: true"));
//! let space = SpaceProfile::new("Backyard", 40.0)
//!     .with_safety_features(["fencing", "emergency_equipment", "first_aid_kit"]);
//!
//! let assessment = assessor.assess_space(&space).await;
//! assert_eq!(assessment.score, 40);
//! assert!(!assessment.approved);
//! # }
//! ```

#![warn(missing_docs)]

mod assessor;
mod config;
mod error;
mod history;
mod parser;
mod prompt;

#[cfg(test)]
mod tests;

pub use assessor::{apply_violations, Assessor, Evaluation};
pub use config::AssessorConfig;
pub use error::AssessorError;
pub use history::{AssessmentHistory, HistoryEntry, DEFAULT_HISTORY_CAPACITY};
pub use parser::{parse_advisory_response, AdvisoryReport};
pub use prompt::PromptBuilder;
