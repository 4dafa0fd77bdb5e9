//! PawSpace Rules
//!
//! Deterministic rule evaluation for space registrations and bookings.
//!
//! The rule evaluator applies fixed thresholds only: no external calls, no
//! randomness. Checks run in a fixed order so the resulting concerns are
//! always listed the same way:
//!
//! 1. Capacity (spaces)
//! 2. Required safety features (spaces)
//! 3. Pricing fairness (spaces with a stated hourly rate)
//! 4. Pet/space compatibility (bookings)
//! 5. Special-needs accommodation (bookings whose pet declares needs)
//!
//! # Examples
//!
//! ```
//! use pawspace_domain::{Candidate, RuleKind, SpaceProfile};
//! use pawspace_rules::{RuleEvaluator, RulesConfig};
//!
//! let evaluator = RuleEvaluator::new(RulesConfig::default());
//! let space = SpaceProfile::new("Tiny patio", 40.0);
//!
//! let violations = evaluator.evaluate(&Candidate::Space(space));
//! assert_eq!(violations[0].rule, RuleKind::Capacity);
//! assert_eq!(violations[1].rule, RuleKind::SafetyFeatures);
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod evaluator;

pub use config::{DeductionTable, PricingLimits, RulesConfig};
pub use error::RulesError;
pub use evaluator::RuleEvaluator;
