//! PawSpace Domain Layer
//!
//! Core data model for the booking eligibility and compatibility scoring
//! core. This crate carries no infrastructure: it defines what a candidate
//! looks like, what an assessment looks like, and the trait seam through
//! which the external advisory collaborator is reached.
//!
//! ## Key Concepts
//!
//! - **Candidate**: a space-registration payload, or a booking + pet + space triple
//! - **Violation**: a deterministic rule failure with a severity and a fixed deduction
//! - **Assessment**: the final approval record (approved, score, concerns, recommendations)
//! - **Advisory provider**: the opaque text-generation collaborator
//!
//! ## Architecture
//!
//! - Only `uuid` as an external dependency
//! - Pure data and value logic
//! - Collaborator implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod assessment;
pub mod candidate;
pub mod ids;
pub mod tags;
pub mod traits;

// Re-exports for convenience
pub use assessment::{
    Assessment, RuleKind, Severity, Violation, MAX_SCORE, SAFE_FAILURE_CONCERN,
    SAFE_FAILURE_RECOMMENDATION,
};
pub use candidate::{
    BookingCandidate, BookingRequest, Candidate, PetProfile, SpaceKind, SpaceProfile,
};
pub use ids::{BookingId, PetId, SpaceId};
pub use tags::normalize_tag;
pub use traits::AdvisoryProvider;
