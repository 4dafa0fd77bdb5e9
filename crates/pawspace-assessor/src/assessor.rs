//! Core Assessor implementation

use crate::config::AssessorConfig;
use crate::error::AssessorError;
use crate::parser::{parse_advisory_response, AdvisoryReport};
use crate::prompt::PromptBuilder;
use pawspace_domain::{
    AdvisoryProvider, Assessment, BookingCandidate, Candidate, SpaceProfile, Violation,
};
use pawspace_rules::RuleEvaluator;
use rand::Rng;
use std::fmt::Display;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// An assessment together with the rule violations that shaped it
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    /// Final assessment
    pub assessment: Assessment,

    /// Rule violations, in evaluation order; empty on safe failure
    pub violations: Vec<Violation>,
}

impl Evaluation {
    fn safe_failure() -> Self {
        Self {
            assessment: Assessment::safe_failure(),
            violations: Vec::new(),
        }
    }
}

/// Combines the advisory provider with the rule evaluator
pub struct Assessor<A>
where
    A: AdvisoryProvider,
{
    provider: A,
    rules: RuleEvaluator,
    config: AssessorConfig,
}

impl<A> Assessor<A>
where
    A: AdvisoryProvider,
    A::Error: Display,
{
    /// Create a new Assessor
    pub fn new(provider: A, rules: RuleEvaluator, config: AssessorConfig) -> Self {
        Self {
            provider,
            rules,
            config,
        }
    }

    /// Create an Assessor with default rules and configuration
    pub fn default_config(provider: A) -> Self {
        Self::new(provider, RuleEvaluator::default(), AssessorConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &AssessorConfig {
        &self.config
    }

    /// Rule evaluator used for deductions
    pub fn rules(&self) -> &RuleEvaluator {
        &self.rules
    }

    /// Assess a candidate
    ///
    /// Never fails: an unusable advisory call yields
    /// [`Assessment::safe_failure`].
    pub async fn assess(&self, candidate: &Candidate) -> Assessment {
        self.evaluate(candidate).await.assessment
    }

    /// Assess a space registration
    pub async fn assess_space(&self, space: &SpaceProfile) -> Assessment {
        self.assess(&Candidate::Space(space.clone())).await
    }

    /// Assess a booking together with its pet and space
    pub async fn assess_booking(&self, booking: &BookingCandidate) -> Assessment {
        self.assess(&Candidate::Booking(booking.clone())).await
    }

    /// Assess a candidate and keep the rule violations
    pub async fn evaluate(&self, candidate: &Candidate) -> Evaluation {
        info!(
            "Starting {} assessment with model '{}'",
            candidate.kind(),
            self.provider.model_name()
        );

        let prompt = PromptBuilder::new(candidate).build();
        debug!("Prompt length: {} chars", prompt.len());

        let response = match self.request_advisory(&prompt).await {
            Ok(response) => response,
            Err(e) => {
                warn!("{} assessment failed: {}", candidate.kind(), e);
                return Evaluation::safe_failure();
            }
        };

        let report = parse_advisory_response(&response);
        let violations = self.rules.evaluate(candidate);
        let assessment = apply_violations(report, &violations, self.config.minimum_approval_score);

        info!(
            "{} assessment complete: score {}, approved {}, {} rule violations",
            candidate.kind(),
            assessment.score,
            assessment.approved,
            violations.len()
        );

        Evaluation {
            assessment,
            violations,
        }
    }

    /// Call the provider, retrying as configured
    async fn request_advisory(&self, prompt: &str) -> Result<String, AssessorError> {
        let attempts = self.config.total_attempts();
        let mut retry = 0;

        loop {
            match self.call_advisory(prompt).await {
                Ok(response) => return Ok(response),
                Err(e) if retry + 1 < attempts => {
                    retry += 1;
                    let delay = self.backoff(retry);
                    warn!(
                        "Advisory call failed (attempt {}/{}): {}; retrying in {:?}",
                        retry, attempts, e, delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One advisory call under the configured timeout
    ///
    /// On timeout the provider future is dropped, which cancels the request.
    async fn call_advisory(&self, prompt: &str) -> Result<String, AssessorError> {
        let response = timeout(self.config.advisory_timeout(), self.provider.advise(prompt))
            .await
            .map_err(|_| AssessorError::Timeout(self.config.advisory_timeout_secs))?
            .map_err(|e| AssessorError::Advisory(e.to_string()))?;

        if response.trim().is_empty() {
            return Err(AssessorError::EmptyResponse);
        }

        debug!("Advisory response length: {} chars", response.len());
        Ok(response)
    }

    fn backoff(&self, retry: u32) -> Duration {
        let jitter = match self.config.retry_jitter_ms {
            0 => 0,
            max => rand::rng().random_range(0..=max),
        };
        self.config.retry_delay(retry) + Duration::from_millis(jitter)
    }
}

/// Merge rule violations into an advisory report
///
/// Concerns and recommendations keep advisory entries first. Each violation
/// subtracts its deduction, floored at zero. Approval is derived from the
/// final score only; the report's approval hint is ignored.
///
/// # Examples
///
/// ```
/// use pawspace_assessor::{apply_violations, parse_advisory_response};
///
/// let report = parse_advisory_response("score: 85\napproved: true");
/// let assessment = apply_violations(report, &[], 70);
/// assert_eq!(assessment.score, 85);
/// assert!(assessment.approved);
/// ```
pub fn apply_violations(
    report: AdvisoryReport,
    violations: &[Violation],
    minimum_approval_score: u8,
) -> Assessment {
    let AdvisoryReport {
        mut score,
        mut concerns,
        mut recommendations,
        approved_hint,
    } = report;

    for violation in violations {
        debug!(
            "Rule {} ({}) deducts {}",
            violation.rule, violation.severity, violation.deduction
        );
        concerns.push(violation.violation.clone());
        recommendations.push(violation.recommendation.clone());
        score = score.saturating_sub(violation.deduction);
    }

    let assessment = Assessment::from_score(score, minimum_approval_score, concerns, recommendations);
    if approved_hint && !assessment.approved {
        debug!("Advisory claimed approval; overridden by score {}", assessment.score);
    }
    assessment
}
