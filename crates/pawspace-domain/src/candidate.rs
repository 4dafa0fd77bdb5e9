//! Candidates submitted for assessment
//!
//! A candidate is either a space-registration payload (a host listing a
//! new space) or a booking triple (a booking request together with the
//! pet and the space it refers to).

use crate::ids::{BookingId, PetId, SpaceId};
use std::collections::BTreeSet;
use std::fmt;

/// Kind of space a host can list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpaceKind {
    /// Private backyard
    #[default]
    Yard,
    /// Day camp
    Camp,
    /// Sanctuary
    Sanctuary,
    /// Pet cafe
    Cafe,
}

impl SpaceKind {
    /// Parse a space kind from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "yard" => Some(SpaceKind::Yard),
            "camp" => Some(SpaceKind::Camp),
            "sanctuary" => Some(SpaceKind::Sanctuary),
            "cafe" => Some(SpaceKind::Cafe),
            _ => None,
        }
    }

    /// Lowercase name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SpaceKind::Yard => "yard",
            SpaceKind::Camp => "camp",
            SpaceKind::Sanctuary => "sanctuary",
            SpaceKind::Cafe => "cafe",
        }
    }
}

impl fmt::Display for SpaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A listed (or to-be-listed) space
///
/// Collections that were not supplied are empty sets; the rule evaluator
/// treats an empty set as "nothing provided".
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpaceProfile {
    /// Space identifier
    pub id: SpaceId,

    /// Display name
    pub name: String,

    /// Kind of space
    pub kind: SpaceKind,

    /// Total usable area in square feet
    pub square_footage: f64,

    /// Safety feature tags (fencing, emergency equipment, ...)
    pub safety_features: BTreeSet<String>,

    /// Pet types the host accepts
    pub allowed_pet_types: BTreeSet<String>,

    /// Special-needs accommodations on site (ramps, quiet areas, ...)
    pub special_accommodations: BTreeSet<String>,

    /// Hourly price, if the listing states one
    pub hourly_rate: Option<f64>,
}

impl SpaceProfile {
    /// Create a space with the given name and area and no declared features
    pub fn new(name: impl Into<String>, square_footage: f64) -> Self {
        Self {
            id: SpaceId::new(),
            name: name.into(),
            square_footage,
            ..Self::default()
        }
    }

    /// Builder-style helper to set the safety features
    pub fn with_safety_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.safety_features = features.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper to set the accepted pet types
    pub fn with_allowed_pet_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_pet_types = types.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper to set the special-needs accommodations
    pub fn with_special_accommodations<I, S>(mut self, accommodations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_accommodations = accommodations.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style helper to set the hourly rate
    pub fn with_hourly_rate(mut self, rate: f64) -> Self {
        self.hourly_rate = Some(rate);
        self
    }
}

/// A pet as seen by the scoring core
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PetProfile {
    /// Pet identifier
    pub id: PetId,

    /// Pet name
    pub name: String,

    /// Species / type ("dog", "cat", ...)
    pub pet_type: String,

    /// Declared special needs, in the order the owner listed them
    pub special_needs: Vec<String>,
}

impl PetProfile {
    /// Create a pet without special needs
    pub fn new(name: impl Into<String>, pet_type: impl Into<String>) -> Self {
        Self {
            id: PetId::new(),
            name: name.into(),
            pet_type: pet_type.into(),
            special_needs: Vec::new(),
        }
    }

    /// Builder-style helper to set the special needs
    pub fn with_special_needs<I, S>(mut self, needs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_needs = needs.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the pet declares at least one special need
    pub fn has_special_needs(&self) -> bool {
        self.special_needs.iter().any(|n| !n.trim().is_empty())
    }
}

/// A booking request: a time window referencing a pet and a space
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    /// Booking identifier
    pub id: BookingId,

    /// Requested pet
    pub pet_id: PetId,

    /// Requested space
    pub space_id: SpaceId,

    /// Start of the window (Unix seconds)
    pub start_time: u64,

    /// End of the window (Unix seconds)
    pub end_time: u64,
}

impl BookingRequest {
    /// Create a booking for the given pet and space
    pub fn new(pet_id: PetId, space_id: SpaceId, start_time: u64, end_time: u64) -> Self {
        Self {
            id: BookingId::new(),
            pet_id,
            space_id,
            start_time,
            end_time,
        }
    }

    /// Length of the booking window in seconds (0 for inverted windows)
    pub fn duration_secs(&self) -> u64 {
        self.end_time.saturating_sub(self.start_time)
    }
}

/// A booking together with the pet and space it refers to
#[derive(Debug, Clone, PartialEq)]
pub struct BookingCandidate {
    /// The booking request
    pub booking: BookingRequest,

    /// The requested pet
    pub pet: PetProfile,

    /// The requested space
    pub space: SpaceProfile,
}

impl BookingCandidate {
    /// Build a candidate for `pet` in `space` over the given window
    pub fn new(pet: PetProfile, space: SpaceProfile, start_time: u64, end_time: u64) -> Self {
        let booking = BookingRequest::new(pet.id, space.id, start_time, end_time);
        Self { booking, pet, space }
    }
}

/// Anything that can be assessed
#[derive(Debug, Clone, PartialEq)]
pub enum Candidate {
    /// Space-registration payload
    Space(SpaceProfile),

    /// Booking + pet + space triple
    Booking(BookingCandidate),
}

impl Candidate {
    /// Short label for logs and history entries
    pub fn kind(&self) -> &'static str {
        match self {
            Candidate::Space(_) => "space",
            Candidate::Booking(_) => "booking",
        }
    }
}

impl From<SpaceProfile> for Candidate {
    fn from(space: SpaceProfile) -> Self {
        Candidate::Space(space)
    }
}

impl From<BookingCandidate> for Candidate {
    fn from(booking: BookingCandidate) -> Self {
        Candidate::Booking(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_kind_parse() {
        assert_eq!(SpaceKind::parse("Yard"), Some(SpaceKind::Yard));
        assert_eq!(SpaceKind::parse(" cafe "), Some(SpaceKind::Cafe));
        assert_eq!(SpaceKind::parse("kennel"), None);
    }

    #[test]
    fn test_space_defaults_are_empty() {
        let space = SpaceProfile::new("Back lot", 120.0);
        assert!(space.safety_features.is_empty());
        assert!(space.allowed_pet_types.is_empty());
        assert!(space.special_accommodations.is_empty());
        assert!(space.hourly_rate.is_none());
    }

    #[test]
    fn test_pet_special_needs_ignore_blank() {
        let pet = PetProfile::new("Rex", "dog").with_special_needs([" "]);
        assert!(!pet.has_special_needs());

        let pet = PetProfile::new("Rex", "dog").with_special_needs(["elderly"]);
        assert!(pet.has_special_needs());
    }

    #[test]
    fn test_booking_candidate_links_ids() {
        let pet = PetProfile::new("Mia", "cat");
        let space = SpaceProfile::new("Cat cafe", 80.0);
        let candidate = BookingCandidate::new(pet.clone(), space.clone(), 100, 3700);

        assert_eq!(candidate.booking.pet_id, pet.id);
        assert_eq!(candidate.booking.space_id, space.id);
        assert_eq!(candidate.booking.duration_secs(), 3600);
    }

    #[test]
    fn test_inverted_window_has_zero_duration() {
        let booking = BookingRequest::new(PetId::new(), SpaceId::new(), 500, 100);
        assert_eq!(booking.duration_secs(), 0);
    }

    #[test]
    fn test_candidate_kind() {
        let space: Candidate = SpaceProfile::new("Yard", 10.0).into();
        assert_eq!(space.kind(), "space");
    }
}
