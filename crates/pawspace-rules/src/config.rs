//! Rule thresholds and deductions

use crate::RulesError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fair-pricing band for hourly rates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingLimits {
    /// Lowest acceptable hourly rate
    pub min_hourly_rate: f64,

    /// Highest acceptable hourly rate
    pub max_hourly_rate: f64,
}

impl Default for PricingLimits {
    fn default() -> Self {
        Self {
            min_hourly_rate: 5.0,
            max_hourly_rate: 100.0,
        }
    }
}

/// Points subtracted from the advisory score per failed rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionTable {
    /// Space below the capacity baseline (major)
    pub capacity: u8,

    /// Any required safety feature missing (critical)
    pub safety_features: u8,

    /// Pet type not accepted by the space (critical)
    pub pet_compatibility: u8,

    /// Special needs not accommodated (major)
    pub special_needs: u8,

    /// Hourly rate outside the fair-pricing band (minor)
    pub pricing_fairness: u8,
}

impl Default for DeductionTable {
    fn default() -> Self {
        Self {
            capacity: 20,
            safety_features: 30,
            pet_compatibility: 30,
            special_needs: 25,
            pricing_fairness: 15,
        }
    }
}

/// Configuration for the rule evaluator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Minimum square footage per pet category
    ///
    /// The capacity check uses the largest entry as its floor, whatever
    /// pet types the space accepts.
    pub min_space_per_pet: BTreeMap<String, f64>,

    /// Safety features every space must declare
    pub required_safety_features: Vec<String>,

    /// Accommodations that satisfy each special need
    pub special_needs_requirements: BTreeMap<String, Vec<String>>,

    /// Fair-pricing band
    pub pricing: PricingLimits,

    /// Deduction per failed rule
    pub deductions: DeductionTable,
}

impl Default for RulesConfig {
    fn default() -> Self {
        let min_space_per_pet = [("dog", 100.0), ("cat", 50.0), ("bird", 30.0), ("other", 50.0)]
            .into_iter()
            .map(|(pet, area)| (pet.to_string(), area))
            .collect();

        let required_safety_features = [
            "fencing",
            "emergency_equipment",
            "first_aid_kit",
            "surveillance",
            "fire_safety",
        ]
        .into_iter()
        .map(String::from)
        .collect();

        let special_needs_requirements = [
            ("mobility_impaired", ["ramps", "wide_passages"]),
            ("elderly", ["soft_surfaces", "quiet_areas"]),
            ("anxiety", ["quiet_areas", "separate_spaces"]),
            ("medical", ["medical_station", "refrigeration"]),
        ]
        .into_iter()
        .map(|(need, accs)| {
            (
                need.to_string(),
                accs.into_iter().map(String::from).collect::<Vec<_>>(),
            )
        })
        .collect();

        Self {
            min_space_per_pet,
            required_safety_features,
            special_needs_requirements,
            pricing: PricingLimits::default(),
            deductions: DeductionTable::default(),
        }
    }
}

impl RulesConfig {
    /// Square footage every space must reach
    ///
    /// This is the largest per-pet minimum (dogs, by default).
    pub fn capacity_baseline(&self) -> f64 {
        self.min_space_per_pet
            .values()
            .copied()
            .filter(|v| v.is_finite())
            .fold(0.0, f64::max)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), RulesError> {
        for (pet, area) in &self.min_space_per_pet {
            if !area.is_finite() || *area < 0.0 {
                return Err(RulesError::Invalid(format!(
                    "min_space_per_pet.{} must be a non-negative number",
                    pet
                )));
            }
        }

        let pricing = &self.pricing;
        if !pricing.min_hourly_rate.is_finite() || !pricing.max_hourly_rate.is_finite() {
            return Err(RulesError::Invalid(
                "pricing limits must be finite numbers".to_string(),
            ));
        }
        if pricing.min_hourly_rate > pricing.max_hourly_rate {
            return Err(RulesError::Invalid(format!(
                "pricing.min_hourly_rate {} exceeds pricing.max_hourly_rate {}",
                pricing.min_hourly_rate, pricing.max_hourly_rate
            )));
        }

        let d = &self.deductions;
        for (name, value) in [
            ("capacity", d.capacity),
            ("safety_features", d.safety_features),
            ("pet_compatibility", d.pet_compatibility),
            ("special_needs", d.special_needs),
            ("pricing_fairness", d.pricing_fairness),
        ] {
            if value > 100 {
                return Err(RulesError::Invalid(format!(
                    "deductions.{} must be at most 100 (got {})",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Load configuration from a TOML string
    ///
    /// Missing tables fall back to the defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, RulesError> {
        let config: RulesConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, RulesError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
