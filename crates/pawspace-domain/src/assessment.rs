//! Assessment output and rule violations

use std::fmt;

/// Upper bound of the assessment score
pub const MAX_SCORE: u8 = 100;

/// Concern text of the safe-failure assessment
pub const SAFE_FAILURE_CONCERN: &str = "Assessment failed due to technical error";

/// Recommendation text of the safe-failure assessment
pub const SAFE_FAILURE_RECOMMENDATION: &str = "Please try again or contact support";

/// Severity of a rule violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Blocks approval on its own for almost any advisory score
    Critical,
    /// Significant problem
    Major,
    /// Worth fixing, rarely decisive
    Minor,
}

impl Severity {
    /// Lowercase name of the severity
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Major => "major",
            Severity::Minor => "minor",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which static rule produced a violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleKind {
    /// Minimum square footage
    Capacity,
    /// Required safety features
    SafetyFeatures,
    /// Pet type accepted by the space
    PetCompatibility,
    /// Special-needs accommodations
    SpecialNeeds,
    /// Hourly rate inside the fair-pricing band
    PricingFairness,
}

impl RuleKind {
    /// Stable snake_case name of the rule
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleKind::Capacity => "capacity",
            RuleKind::SafetyFeatures => "safety_features",
            RuleKind::PetCompatibility => "pet_compatibility",
            RuleKind::SpecialNeeds => "special_needs",
            RuleKind::PricingFairness => "pricing_fairness",
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deterministic rule failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Rule that failed
    pub rule: RuleKind,

    /// Severity of the failure
    pub severity: Severity,

    /// Human-readable description, appended to the assessment concerns
    pub violation: String,

    /// Suggested fix, appended to the assessment recommendations
    pub recommendation: String,

    /// Points subtracted from the advisory score
    pub deduction: u8,
}

/// Final approval record for one candidate
///
/// Built fresh for every evaluation and never persisted by the core.
/// `approved` is always derived from `score`, never copied from the
/// advisory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assessment {
    /// Whether the candidate passed
    pub approved: bool,

    /// Final score in `0..=100`
    pub score: u8,

    /// Advisory concerns first, then rule concerns in evaluation order
    pub concerns: Vec<String>,

    /// Advisory recommendations first, then rule recommendations
    pub recommendations: Vec<String>,
}

impl Assessment {
    /// Build an assessment whose approval is derived from the score
    pub fn from_score(
        score: u8,
        minimum_approval_score: u8,
        concerns: Vec<String>,
        recommendations: Vec<String>,
    ) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            approved: score >= minimum_approval_score,
            score,
            concerns,
            recommendations,
        }
    }

    /// The fixed fallback returned when the advisory collaborator is unusable
    ///
    /// # Examples
    ///
    /// ```
    /// use pawspace_domain::Assessment;
    ///
    /// let failed = Assessment::safe_failure();
    /// assert!(!failed.approved);
    /// assert_eq!(failed.score, 0);
    /// assert!(failed.is_safe_failure());
    /// ```
    pub fn safe_failure() -> Self {
        Self {
            approved: false,
            score: 0,
            concerns: vec![SAFE_FAILURE_CONCERN.to_string()],
            recommendations: vec![SAFE_FAILURE_RECOMMENDATION.to_string()],
        }
    }

    /// Whether this is exactly the safe-failure fallback
    pub fn is_safe_failure(&self) -> bool {
        *self == Self::safe_failure()
    }
}
