//! Candidate input files.
//!
//! Spaces are a flat TOML table; bookings use `[booking]`, `[pet]` and
//! `[space]` tables. Missing collections are read as empty.

use crate::error::{CliError, Result};
use pawspace_domain::{
    BookingCandidate, BookingId, BookingRequest, Candidate, PetId, PetProfile, SpaceId,
    SpaceKind, SpaceProfile,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Space definition as written in an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct SpaceInput {
    #[serde(default)]
    id: Option<String>,
    #[serde(default = "default_space_name")]
    name: String,
    #[serde(default)]
    kind: Option<String>,
    #[serde(default)]
    square_footage: f64,
    #[serde(default)]
    safety_features: Vec<String>,
    #[serde(default)]
    allowed_pet_types: Vec<String>,
    #[serde(default)]
    special_accommodations: Vec<String>,
    #[serde(default)]
    hourly_rate: Option<f64>,
}

/// Pet definition as written in an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct PetInput {
    #[serde(default)]
    id: Option<String>,
    #[serde(default = "default_pet_name")]
    name: String,
    #[serde(rename = "type")]
    pet_type: String,
    #[serde(default)]
    special_needs: Vec<String>,
}

/// Booking window as written in an input file.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingInput {
    #[serde(default)]
    id: Option<String>,
    start_time: u64,
    end_time: u64,
}

/// A complete booking input file.
#[derive(Debug, Clone, Deserialize)]
pub struct BookingFile {
    booking: BookingInput,
    pet: PetInput,
    space: SpaceInput,
}

impl SpaceInput {
    /// Convert to the domain type.
    pub fn into_domain(self) -> Result<SpaceProfile> {
        let id = match self.id {
            Some(id) => SpaceId::from_string(&id).map_err(CliError::InvalidInput)?,
            None => SpaceId::new(),
        };
        let kind = match self.kind {
            Some(kind) => SpaceKind::parse(&kind).ok_or_else(|| {
                CliError::InvalidInput(format!(
                    "Unknown space kind '{}'. Expected yard, camp, sanctuary or cafe",
                    kind
                ))
            })?,
            None => SpaceKind::default(),
        };

        let mut space = SpaceProfile::new(self.name, self.square_footage)
            .with_safety_features(self.safety_features)
            .with_allowed_pet_types(self.allowed_pet_types)
            .with_special_accommodations(self.special_accommodations);
        space.id = id;
        space.kind = kind;
        space.hourly_rate = self.hourly_rate;
        Ok(space)
    }
}

impl PetInput {
    /// Convert to the domain type.
    pub fn into_domain(self) -> Result<PetProfile> {
        let id = match self.id {
            Some(id) => PetId::from_string(&id).map_err(CliError::InvalidInput)?,
            None => PetId::new(),
        };
        let mut pet = PetProfile::new(self.name, self.pet_type).with_special_needs(self.special_needs);
        pet.id = id;
        Ok(pet)
    }
}

impl BookingFile {
    /// Convert to the domain type.
    pub fn into_domain(self) -> Result<BookingCandidate> {
        if self.booking.end_time < self.booking.start_time {
            return Err(CliError::InvalidInput(format!(
                "Booking ends ({}) before it starts ({})",
                self.booking.end_time, self.booking.start_time
            )));
        }

        let pet = self.pet.into_domain()?;
        let space = self.space.into_domain()?;
        let id = match self.booking.id {
            Some(id) => BookingId::from_string(&id).map_err(CliError::InvalidInput)?,
            None => BookingId::new(),
        };

        let mut booking =
            BookingRequest::new(pet.id, space.id, self.booking.start_time, self.booking.end_time);
        booking.id = id;

        Ok(BookingCandidate {
            booking,
            pet,
            space,
        })
    }
}

/// Load a space candidate from a TOML file.
pub fn load_space(path: &Path) -> Result<SpaceProfile> {
    let contents = fs::read_to_string(path)?;
    let input: SpaceInput = toml::from_str(&contents)?;
    input.into_domain()
}

/// Load a booking candidate from a TOML file.
pub fn load_booking(path: &Path) -> Result<BookingCandidate> {
    let contents = fs::read_to_string(path)?;
    let input: BookingFile = toml::from_str(&contents)?;
    input.into_domain()
}

/// Load either kind of candidate.
pub fn load_candidate(path: &Path, booking: bool) -> Result<Candidate> {
    if booking {
        load_booking(path).map(Candidate::Booking)
    } else {
        load_space(path).map(Candidate::Space)
    }
}

fn default_space_name() -> String {
    "Unnamed space".to_string()
}

fn default_pet_name() -> String {
    "Unnamed pet".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_space() {
        let file = write_temp(
            r#"
            name = "Sunny Yard"
            kind = "yard"
            square_footage = 240.5
            safety_features = ["fencing", "first aid kit"]
            allowed_pet_types = ["dog"]
            hourly_rate = 25.0
            "#,
        );

        let space = load_space(file.path()).unwrap();
        assert_eq!(space.name, "Sunny Yard");
        assert_eq!(space.kind, SpaceKind::Yard);
        assert_eq!(space.square_footage, 240.5);
        assert!(space.safety_features.contains("first aid kit"));
        assert!(space.special_accommodations.is_empty());
        assert_eq!(space.hourly_rate, Some(25.0));
    }

    #[test]
    fn test_space_defaults_when_fields_missing() {
        let file = write_temp("");
        let space = load_space(file.path()).unwrap();
        assert_eq!(space.name, "Unnamed space");
        assert_eq!(space.square_footage, 0.0);
        assert!(space.safety_features.is_empty());
        assert_eq!(space.hourly_rate, None);
    }

    #[test]
    fn test_unknown_space_kind() {
        let file = write_temp("kind = \"castle\"");
        assert!(matches!(
            load_space(file.path()),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_space_id_is_kept() {
        let id = SpaceId::new();
        let file = write_temp(&format!("id = \"{}\"", id));
        assert_eq!(load_space(file.path()).unwrap().id, id);
    }

    #[test]
    fn test_invalid_space_id() {
        let file = write_temp("id = \"not-a-uuid\"");
        assert!(load_space(file.path()).is_err());
    }

    #[test]
    fn test_load_booking() {
        let file = write_temp(
            r#"
            [booking]
            start_time = 1700000000
            end_time = 1700003600

            [pet]
            name = "Biscuit"
            type = "dog"
            special_needs = ["elderly"]

            [space]
            name = "Quiet Barn"
            square_footage = 400
            allowed_pet_types = ["dog", "cat"]
            special_accommodations = ["quiet_areas"]
            "#,
        );

        let candidate = load_booking(file.path()).unwrap();
        assert_eq!(candidate.pet.pet_type, "dog");
        assert_eq!(candidate.pet.special_needs, vec!["elderly".to_string()]);
        assert_eq!(candidate.booking.duration_secs(), 3600);
        assert_eq!(candidate.booking.pet_id, candidate.pet.id);
        assert_eq!(candidate.booking.space_id, candidate.space.id);
    }

    #[test]
    fn test_booking_requires_pet_type() {
        let file = write_temp(
            "[booking]\nstart_time = 0\nend_time = 10\n[pet]\nname = \"X\"\n[space]\n",
        );
        assert!(matches!(load_booking(file.path()), Err(CliError::Toml(_))));
    }

    #[test]
    fn test_inverted_booking_window() {
        let file = write_temp(
            "[booking]\nstart_time = 10\nend_time = 5\n[pet]\ntype = \"cat\"\n[space]\n",
        );
        assert!(matches!(
            load_booking(file.path()),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = load_candidate(Path::new("/nonexistent/space.toml"), false);
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
