//! Rule evaluation logic

use crate::RulesConfig;
use pawspace_domain::tags::{normalize_all, normalize_tag};
use pawspace_domain::{
    BookingCandidate, Candidate, PetProfile, RuleKind, Severity, SpaceProfile, Violation,
};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// The rule evaluator checks candidates against static thresholds
///
/// Construction normalizes every configured tag once; evaluation is a pure
/// function of the candidate and never fails. Missing collections on the
/// candidate behave as empty sets.
#[derive(Debug, Clone)]
pub struct RuleEvaluator {
    config: RulesConfig,
    capacity_baseline: f64,
    required_safety_features: Vec<String>,
    special_needs_requirements: BTreeMap<String, BTreeSet<String>>,
}

impl RuleEvaluator {
    /// Create a new evaluator with the given configuration
    pub fn new(config: RulesConfig) -> Self {
        let capacity_baseline = config.capacity_baseline();

        let mut required_safety_features = Vec::new();
        for feature in &config.required_safety_features {
            let tag = normalize_tag(feature);
            if !tag.is_empty() && !required_safety_features.contains(&tag) {
                required_safety_features.push(tag);
            }
        }

        let special_needs_requirements = config
            .special_needs_requirements
            .iter()
            .map(|(need, accs)| (normalize_tag(need), normalize_all(accs)))
            .collect();

        Self {
            config,
            capacity_baseline,
            required_safety_features,
            special_needs_requirements,
        }
    }

    /// Create an evaluator with the default thresholds
    pub fn default_config() -> Self {
        Self::new(RulesConfig::default())
    }

    /// The configuration this evaluator was built from
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Evaluate any candidate
    pub fn evaluate(&self, candidate: &Candidate) -> Vec<Violation> {
        match candidate {
            Candidate::Space(space) => self.evaluate_space(space),
            Candidate::Booking(booking) => self.evaluate_booking(booking),
        }
    }

    /// Evaluate a space-registration candidate
    pub fn evaluate_space(&self, space: &SpaceProfile) -> Vec<Violation> {
        let mut violations = Vec::new();

        // 1. Capacity
        if let Some(v) = self.check_capacity(space) {
            violations.push(v);
        }

        // 2. Safety features
        if let Some(v) = self.check_safety_features(space) {
            violations.push(v);
        }

        // 3. Pricing fairness (only when a rate is stated)
        if let Some(v) = self.check_pricing(space) {
            violations.push(v);
        }

        debug!(
            "Space '{}' evaluated: {} violation(s)",
            space.name,
            violations.len()
        );

        violations
    }

    /// Evaluate a booking candidate
    pub fn evaluate_booking(&self, candidate: &BookingCandidate) -> Vec<Violation> {
        let mut violations = Vec::new();

        // 1. Pet/space compatibility
        if let Some(v) = self.check_compatibility(&candidate.pet, &candidate.space) {
            violations.push(v);
        }

        // 2. Special needs (only when the pet declares any)
        if candidate.pet.has_special_needs() {
            if let Some(v) = self.check_special_needs(&candidate.pet, &candidate.space) {
                violations.push(v);
            }
        }

        debug!(
            "Booking {} evaluated: {} violation(s)",
            candidate.booking.id,
            violations.len()
        );

        violations
    }

    /// Space must reach the capacity baseline
    fn check_capacity(&self, space: &SpaceProfile) -> Option<Violation> {
        let area = space.square_footage;
        if !area.is_nan() && area >= self.capacity_baseline {
            return None;
        }

        debug!(
            "Capacity check failed: {} sq ft < {} sq ft",
            area, self.capacity_baseline
        );

        Some(Violation {
            rule: RuleKind::Capacity,
            severity: Severity::Major,
            violation: format!(
                "Space capacity does not meet minimum requirements ({:.0} sq ft, minimum {:.0} sq ft)",
                area, self.capacity_baseline
            ),
            recommendation: "Please ensure minimum space requirements per pet type".to_string(),
            deduction: self.config.deductions.capacity,
        })
    }

    /// Space must declare every required safety feature
    ///
    /// Any number of missing features yields a single violation.
    fn check_safety_features(&self, space: &SpaceProfile) -> Option<Violation> {
        let declared = normalize_all(&space.safety_features);
        let missing: Vec<&str> = self
            .required_safety_features
            .iter()
            .filter(|f| !declared.contains(f.as_str()))
            .map(String::as_str)
            .collect();

        if missing.is_empty() {
            return None;
        }

        debug!("Safety check failed, missing: {:?}", missing);

        Some(Violation {
            rule: RuleKind::SafetyFeatures,
            severity: Severity::Critical,
            violation: format!("Missing critical safety features: {}", missing.join(", ")),
            recommendation: "Add required safety features like fencing, emergency equipment"
                .to_string(),
            deduction: self.config.deductions.safety_features,
        })
    }

    /// Stated hourly rate must lie inside the fair-pricing band
    fn check_pricing(&self, space: &SpaceProfile) -> Option<Violation> {
        let rate = space.hourly_rate?;
        let limits = &self.config.pricing;
        if !rate.is_nan() && rate >= limits.min_hourly_rate && rate <= limits.max_hourly_rate {
            return None;
        }

        debug!(
            "Pricing check failed: {} outside [{}, {}]",
            rate, limits.min_hourly_rate, limits.max_hourly_rate
        );

        Some(Violation {
            rule: RuleKind::PricingFairness,
            severity: Severity::Minor,
            violation: format!(
                "Hourly rate {:.2} is outside the fair pricing range {:.2}-{:.2}",
                rate, limits.min_hourly_rate, limits.max_hourly_rate
            ),
            recommendation: "Adjust the hourly rate to fall within the fair pricing range"
                .to_string(),
            deduction: self.config.deductions.pricing_fairness,
        })
    }

    /// Space must accept the pet's type
    fn check_compatibility(&self, pet: &PetProfile, space: &SpaceProfile) -> Option<Violation> {
        let pet_type = normalize_tag(&pet.pet_type);
        let allowed = normalize_all(&space.allowed_pet_types);
        if !pet_type.is_empty() && allowed.contains(&pet_type) {
            return None;
        }

        debug!(
            "Compatibility check failed: '{}' not in {:?}",
            pet_type, allowed
        );

        Some(Violation {
            rule: RuleKind::PetCompatibility,
            severity: Severity::Critical,
            violation: "Pet may not be compatible with this space".to_string(),
            recommendation: "Consider a more suitable space for this pet type".to_string(),
            deduction: self.config.deductions.pet_compatibility,
        })
    }

    /// Space must offer an accommodation matching the pet's special needs
    ///
    /// Passes when any accommodation on site satisfies any one of the
    /// pet's needs; needs without a configured mapping contribute nothing.
    fn check_special_needs(&self, pet: &PetProfile, space: &SpaceProfile) -> Option<Violation> {
        let accommodations = normalize_all(&space.special_accommodations);
        let satisfied = pet
            .special_needs
            .iter()
            .filter_map(|need| self.special_needs_requirements.get(&normalize_tag(need)))
            .any(|required| !required.is_disjoint(&accommodations));

        if satisfied {
            return None;
        }

        debug!(
            "Special-needs check failed: needs {:?}, accommodations {:?}",
            pet.special_needs, accommodations
        );

        Some(Violation {
            rule: RuleKind::SpecialNeeds,
            severity: Severity::Major,
            violation: "Space may not adequately accommodate pet's special needs".to_string(),
            recommendation: "Ensure space has necessary accommodations for special needs"
                .to_string(),
            deduction: self.config.deductions.special_needs,
        })
    }
}

impl Default for RuleEvaluator {
    fn default() -> Self {
        Self::default_config()
    }
}
