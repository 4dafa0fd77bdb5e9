//! Space and booking assessment commands.

use crate::cli::CandidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::input::{load_booking, load_space};
use crate::output::Formatter;
use crate::provider::Advisor;
use pawspace_assessor::Assessor;
use pawspace_domain::{AdvisoryProvider, Candidate};
use pawspace_rules::RuleEvaluator;
use tracing::debug;

/// Execute the space command.
pub async fn execute_space(
    args: CandidateArgs,
    config: &Config,
    advisor: Advisor,
    formatter: &Formatter,
) -> Result<()> {
    let space = load_space(&args.file)?;
    println!(
        "{}",
        assess(Candidate::Space(space), config, advisor, formatter).await?
    );
    Ok(())
}

/// Execute the booking command.
pub async fn execute_booking(
    args: CandidateArgs,
    config: &Config,
    advisor: Advisor,
    formatter: &Formatter,
) -> Result<()> {
    let booking = load_booking(&args.file)?;
    println!(
        "{}",
        assess(Candidate::Booking(booking), config, advisor, formatter).await?
    );
    Ok(())
}

/// Assess a candidate and render the result.
async fn assess(
    candidate: Candidate,
    config: &Config,
    advisor: Advisor,
    formatter: &Formatter,
) -> Result<String> {
    debug!(
        "Assessing {} with model '{}'",
        candidate.kind(),
        advisor.model_name()
    );

    let assessor = Assessor::new(
        advisor,
        RuleEvaluator::new(config.rules.clone()),
        config.assessor.clone(),
    );
    let assessment = assessor.assess(&candidate).await;
    formatter.format_assessment(candidate.kind(), &assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use pawspace_domain::{BookingCandidate, PetProfile, SpaceProfile};
    use pawspace_llm::MockProvider;

    fn fixed(advice: &str) -> Advisor {
        Advisor::Fixed(MockProvider::new(advice))
    }

    #[tokio::test]
    async fn test_assess_space_quiet() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let space = SpaceProfile::new("Patio", 40.0).with_safety_features([
            "fencing",
            "emergency_equipment",
            "first_aid_kit",
        ]);

        let output = assess(
            Candidate::Space(space),
            &Config::default(),
            fixed("score: 90\napproved: true"),
            &formatter,
        )
        .await
        .unwrap();

        assert_eq!(output, "rejected 40");
    }

    #[tokio::test]
    async fn test_assess_booking_json() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let space = SpaceProfile::new("Yard", 200.0).with_allowed_pet_types(["dog"]);
        let booking = BookingCandidate::new(PetProfile::new("Tom", "cat"), space, 0, 60);

        let output = assess(
            Candidate::Booking(booking),
            &Config::default(),
            fixed("score: 85"),
            &formatter,
        )
        .await
        .unwrap();

        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["kind"], "booking");
        assert_eq!(value["score"], 55);
        assert_eq!(value["approved"], false);
    }

    #[tokio::test]
    async fn test_config_threshold_applies() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let mut config = Config::default();
        config.assessor.minimum_approval_score = 50;
        let space = SpaceProfile::new("Yard", 200.0).with_allowed_pet_types(["dog"]);
        let booking = BookingCandidate::new(PetProfile::new("Tom", "cat"), space, 0, 60);

        let output = assess(Candidate::Booking(booking), &config, fixed("score: 85"), &formatter)
            .await
            .unwrap();

        assert_eq!(output, "approved 55");
    }
}
