//! Integration tests for the Assessor

#[cfg(test)]
mod tests {
    use crate::{
        apply_violations, parse_advisory_response, AssessmentHistory, Assessor, AssessorConfig,
    };
    use pawspace_domain::{
        Assessment, BookingCandidate, Candidate, PetProfile, RuleKind, SpaceProfile,
        SAFE_FAILURE_CONCERN, SAFE_FAILURE_RECOMMENDATION,
    };
    use pawspace_llm::MockProvider;
    use pawspace_rules::{RuleEvaluator, RulesConfig};
    use proptest::prelude::*;
    use std::time::{Duration, Instant};

    const ALL_SAFETY_FEATURES: [&str; 5] = [
        "fencing",
        "emergency_equipment",
        "first_aid_kit",
        "surveillance",
        "fire_safety",
    ];

    fn compliant_space() -> SpaceProfile {
        SpaceProfile::new("Meadow Run", 150.0)
            .with_safety_features(ALL_SAFETY_FEATURES)
            .with_allowed_pet_types(["dog", "cat"])
    }

    fn fast_retry_config(retries: u32) -> AssessorConfig {
        AssessorConfig {
            advisory_max_retries: retries,
            retry_base_delay_ms: 1,
            retry_jitter_ms: 0,
            ..AssessorConfig::default()
        }
    }

    #[tokio::test]
    async fn test_small_space_missing_features() {
        let assessor = Assessor::default_config(MockProvider::new("score: 90\napproved: true"));
        let space = SpaceProfile::new("Patio", 40.0).with_safety_features([
            "fencing",
            "emergency_equipment",
            "first_aid_kit",
        ]);

        let assessment = assessor.assess_space(&space).await;

        assert_eq!(assessment.score, 40);
        assert!(!assessment.approved);
        assert_eq!(assessment.concerns.len(), 2);
        assert!(assessment.concerns[0].starts_with("Space capacity does not meet"));
        assert!(assessment.concerns[1].contains("surveillance"));
        assert!(assessment.concerns[1].contains("fire_safety"));
        assert_eq!(assessment.recommendations.len(), 2);
    }

    #[tokio::test]
    async fn test_cat_in_dog_only_space() {
        let assessor = Assessor::default_config(MockProvider::new("score: 85"));
        let space = compliant_space().with_allowed_pet_types(["dog"]);
        let booking = BookingCandidate::new(PetProfile::new("Misu", "cat"), space, 0, 3600);

        let assessment = assessor.assess_booking(&booking).await;

        assert_eq!(assessment.score, 55);
        assert!(!assessment.approved);
        assert_eq!(
            assessment.concerns,
            vec!["Pet may not be compatible with this space".to_string()]
        );
    }

    #[tokio::test]
    async fn test_advisory_approval_claim_is_ignored() {
        let assessor = Assessor::default_config(MockProvider::new("score: 40\napproved: true"));
        let space = SpaceProfile::new("Barn", 300.0).with_safety_features([
            "fencing",
            "emergency_equipment",
            "first_aid_kit",
            "surveillance",
        ]);

        let assessment = assessor.assess_space(&space).await;

        assert_eq!(assessment.score, 10);
        assert!(!assessment.approved);
    }

    #[tokio::test]
    async fn test_failing_provider_returns_safe_failure() {
        let assessor = Assessor::default_config(MockProvider::failing("connection refused"));

        let assessment = assessor.assess(&Candidate::Space(compliant_space())).await;

        assert_eq!(
            assessment,
            Assessment {
                approved: false,
                score: 0,
                concerns: vec![SAFE_FAILURE_CONCERN.to_string()],
                recommendations: vec![SAFE_FAILURE_RECOMMENDATION.to_string()],
            }
        );
    }

    #[tokio::test]
    async fn test_failure_detail_not_exposed() {
        let assessor = Assessor::default_config(MockProvider::failing("secret stack trace"));
        let assessment = assessor.assess_space(&compliant_space()).await;

        assert!(assessment
            .concerns
            .iter()
            .all(|c| !c.contains("secret stack trace")));
    }

    #[tokio::test]
    async fn test_same_input_same_assessment() {
        let provider = MockProvider::new("score: 77\n- concern: muddy ground\n- recommend gravel");
        let assessor = Assessor::default_config(provider);
        let booking = BookingCandidate::new(
            PetProfile::new("Rex", "dog").with_special_needs(["anxiety"]),
            compliant_space(),
            0,
            3600,
        );
        let candidate = Candidate::Booking(booking);

        let first = assessor.assess(&candidate).await;
        let second = assessor.assess(&candidate).await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_concurrent_assessments_agree() {
        let assessor = Assessor::default_config(MockProvider::new("score: 88"));
        let candidate = Candidate::Space(SpaceProfile::new("Lot", 20.0));

        let (a, b) = tokio::join!(assessor.assess(&candidate), assessor.assess(&candidate));

        assert_eq!(a, b);
        assert_eq!(a.score, 38);
    }

    #[tokio::test]
    async fn test_advisory_timeout_returns_safe_failure() {
        let provider = MockProvider::new("score: 100").with_delay(Duration::from_millis(1500));
        let config = AssessorConfig {
            advisory_timeout_secs: 1,
            ..AssessorConfig::default()
        };
        let assessor = Assessor::new(provider, RuleEvaluator::default(), config);

        let assessment = assessor.assess_space(&compliant_space()).await;

        assert!(assessment.is_safe_failure());
    }

    fn slow_assessor(retries: u32) -> (Assessor<MockProvider>, MockProvider) {
        let provider = MockProvider::new("score: 100").with_delay(Duration::from_secs(6));
        let counter = provider.clone();
        let config = AssessorConfig {
            advisory_timeout_secs: 1,
            ..fast_retry_config(retries)
        };
        (Assessor::new(provider, RuleEvaluator::default(), config), counter)
    }

    #[test]
    fn test_timed_out_call_does_not_outlive_runtime() {
        let started = Instant::now();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let (assessor, _) = slow_assessor(0);

        let assessment = runtime.block_on(assessor.assess_space(&compliant_space()));
        assert!(assessment.is_safe_failure());
        drop(runtime);

        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn test_retries_cancel_timed_out_attempts() {
        let started = Instant::now();
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .unwrap();
        let (assessor, counter) = slow_assessor(1);

        let assessment = runtime.block_on(assessor.assess_space(&compliant_space()));
        assert!(assessment.is_safe_failure());
        drop(runtime);

        assert_eq!(counter.call_count(), 2);
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_no_retry_by_default() {
        let provider = MockProvider::new("score: 100");
        provider.fail_next(1);
        let counter = provider.clone();
        let assessor = Assessor::default_config(provider);

        let assessment = assessor.assess_space(&compliant_space()).await;

        assert!(assessment.is_safe_failure());
        assert_eq!(counter.call_count(), 1);
    }

    #[tokio::test]
    async fn test_retry_recovers_from_transient_failures() {
        let provider = MockProvider::new("score: 100");
        provider.fail_next(2);
        let counter = provider.clone();
        let assessor = Assessor::new(provider, RuleEvaluator::default(), fast_retry_config(2));

        let assessment = assessor.assess_space(&compliant_space()).await;

        assert_eq!(assessment.score, 100);
        assert!(assessment.approved);
        assert_eq!(counter.call_count(), 3);
    }

    #[tokio::test]
    async fn test_retries_exhausted_returns_safe_failure() {
        let provider = MockProvider::new("score: 100");
        provider.fail_next(5);
        let counter = provider.clone();
        let assessor = Assessor::new(provider, RuleEvaluator::default(), fast_retry_config(1));

        let assessment = assessor.assess_space(&compliant_space()).await;

        assert!(assessment.is_safe_failure());
        assert_eq!(counter.call_count(), 2);
    }

    #[tokio::test]
    async fn test_special_needs_without_accommodations() {
        let assessor = Assessor::default_config(MockProvider::new("score: 100"));
        let pet = PetProfile::new("Old Bess", "dog").with_special_needs(["mobility_impaired"]);
        let booking = BookingCandidate::new(pet, compliant_space(), 0, 3600);

        let evaluation = assessor.evaluate(&Candidate::Booking(booking)).await;

        assert_eq!(evaluation.assessment.score, 75);
        assert!(evaluation.assessment.approved);
        assert_eq!(evaluation.violations.len(), 1);
        assert_eq!(evaluation.violations[0].rule, RuleKind::SpecialNeeds);
    }

    #[tokio::test]
    async fn test_special_needs_with_accommodation() {
        let assessor = Assessor::default_config(MockProvider::new("score: 100"));
        let pet = PetProfile::new("Old Bess", "dog").with_special_needs(["Mobility Impaired"]);
        let space = compliant_space().with_special_accommodations(["ramps"]);
        let booking = BookingCandidate::new(pet, space, 0, 3600);

        let assessment = assessor.assess_booking(&booking).await;

        assert_eq!(assessment.score, 100);
        assert!(assessment.concerns.is_empty());
    }

    #[tokio::test]
    async fn test_pricing_outside_band() {
        let assessor = Assessor::default_config(MockProvider::new("score: 95"));
        let space = compliant_space().with_hourly_rate(450.0);

        let evaluation = assessor.evaluate(&Candidate::Space(space)).await;

        assert_eq!(evaluation.assessment.score, 80);
        assert!(evaluation.assessment.approved);
        assert_eq!(evaluation.violations[0].rule, RuleKind::PricingFairness);
    }

    #[tokio::test]
    async fn test_advisory_concerns_come_first() {
        let provider = MockProvider::new(
            "score: 60\n- concern: gate latch is loose\n- recommendation: replace the latch",
        );
        let assessor = Assessor::default_config(provider);

        let assessment = assessor.assess_space(&SpaceProfile::new("Yard", 120.0)).await;

        assert_eq!(assessment.concerns[0], "concern: gate latch is loose");
        assert!(assessment.concerns[1].starts_with("Missing critical safety features"));
        assert_eq!(assessment.recommendations[0], "recommendation: replace the latch");
        assert_eq!(assessment.score, 30);
    }

    #[tokio::test]
    async fn test_unparseable_advisory_defaults_to_zero() {
        let assessor = Assessor::default_config(MockProvider::new("This place looks great!"));

        let assessment = assessor.assess_space(&compliant_space()).await;

        assert_eq!(assessment.score, 0);
        assert!(!assessment.approved);
        assert!(!assessment.is_safe_failure());
    }

    #[tokio::test]
    async fn test_custom_threshold_and_rules() {
        let rules = RulesConfig {
            required_safety_features: vec!["fencing".to_string()],
            ..RulesConfig::default()
        };
        let config = AssessorConfig {
            minimum_approval_score: 50,
            ..AssessorConfig::default()
        };
        let assessor = Assessor::new(
            MockProvider::new("score: 55"),
            RuleEvaluator::new(rules),
            config,
        );
        let space = SpaceProfile::new("Field", 200.0).with_safety_features(["Fencing"]);

        let assessment = assessor.assess_space(&space).await;

        assert_eq!(assessment.score, 55);
        assert!(assessment.approved);
    }

    #[tokio::test]
    async fn test_history_records_outcomes() {
        let assessor = Assessor::default_config(MockProvider::new("score: 90"));
        let mut history = AssessmentHistory::new(10);

        for candidate in [
            Candidate::Space(compliant_space()),
            Candidate::Space(SpaceProfile::new("Shed", 10.0)),
        ] {
            let evaluation = assessor.evaluate(&candidate).await;
            history.record(candidate.kind(), &evaluation);
        }

        assert_eq!(history.approved_count(), 1);
        assert_eq!(history.rejected_count(), 1);
        assert_eq!(history.latest().map(|e| e.violations.len()), Some(2));
    }

    proptest! {
        #[test]
        fn prop_score_is_floored_difference(
            advisory in 0u8..=100,
            deductions in proptest::collection::vec(0u8..=40, 0..5),
        ) {
            let report = parse_advisory_response(&format!("score: {}\napproved: true", advisory));
            let violations: Vec<_> = deductions
                .iter()
                .map(|&d| pawspace_domain::Violation {
                    rule: RuleKind::Capacity,
                    severity: pawspace_domain::Severity::Major,
                    violation: "v".to_string(),
                    recommendation: "r".to_string(),
                    deduction: d,
                })
                .collect();

            let assessment = apply_violations(report, &violations, 70);
            let total: i32 = deductions.iter().map(|&d| i32::from(d)).sum();
            let expected = (i32::from(advisory) - total).max(0);

            prop_assert_eq!(i32::from(assessment.score), expected);
            prop_assert_eq!(assessment.approved, assessment.score >= 70);
            prop_assert_eq!(assessment.concerns.len(), deductions.len());
        }

        #[test]
        fn prop_score_never_exceeds_max(advisory in 0u64..1_000_000) {
            let report = parse_advisory_response(&format!("Score: {}", advisory));
            prop_assert!(report.score <= 100);
            prop_assert_eq!(u64::from(report.score), advisory.min(100));
        }
    }
}
