//! Advisory prompt construction

use pawspace_domain::{BookingCandidate, Candidate, PetProfile, SpaceProfile};
use std::collections::BTreeSet;
use std::fmt::Write;

/// Builds the text sent to the advisory provider
pub struct PromptBuilder<'a> {
    candidate: &'a Candidate,
}

impl<'a> PromptBuilder<'a> {
    /// Create a prompt builder for a candidate
    pub fn new(candidate: &'a Candidate) -> Self {
        Self { candidate }
    }

    /// Build the complete assessment prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        match self.candidate {
            Candidate::Space(space) => {
                prompt.push_str(SPACE_INSTRUCTIONS);
                prompt.push_str("\n\nSpace details:\n");
                write_space(&mut prompt, space);
                prompt.push('\n');
                prompt.push_str(SPACE_ASPECTS);
            }
            Candidate::Booking(candidate) => {
                prompt.push_str(BOOKING_INSTRUCTIONS);
                prompt.push_str("\n\n");
                write_booking(&mut prompt, candidate);
                prompt.push('\n');
                prompt.push_str(BOOKING_ASPECTS);
            }
        }

        prompt.push_str("\n\n");
        prompt.push_str(OUTPUT_FORMAT_REMINDER);
        prompt
    }
}

fn write_space(out: &mut String, space: &SpaceProfile) {
    field(out, "name", &space.name);
    field(out, "kind", space.kind.as_str());
    field(out, "square_footage", &format!("{}", space.square_footage));
    field(out, "safety_features", &join(&space.safety_features));
    field(out, "allowed_pet_types", &join(&space.allowed_pet_types));
    field(
        out,
        "special_accommodations",
        &join(&space.special_accommodations),
    );
    let rate = space
        .hourly_rate
        .map(|r| format!("{:.2}", r))
        .unwrap_or_else(|| "not stated".to_string());
    field(out, "hourly_rate", &rate);
}

fn write_pet(out: &mut String, pet: &PetProfile) {
    field(out, "name", &pet.name);
    field(out, "type", &pet.pet_type);
    let needs: Vec<&str> = pet
        .special_needs
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();
    let needs = if needs.is_empty() {
        "none".to_string()
    } else {
        needs.join(", ")
    };
    field(out, "special_needs", &needs);
}

fn write_booking(out: &mut String, candidate: &BookingCandidate) {
    let booking = &candidate.booking;
    out.push_str("Booking details:\n");
    field(out, "start_time", &booking.start_time.to_string());
    field(out, "end_time", &booking.end_time.to_string());
    field(out, "duration_minutes", &(booking.duration_secs() / 60).to_string());

    out.push_str("\nPet details:\n");
    write_pet(out, &candidate.pet);

    out.push_str("\nSpace details:\n");
    write_space(out, &candidate.space);
}

fn field(out: &mut String, name: &str, value: &str) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}: {}", name, value);
}

fn join(values: &BTreeSet<String>) -> String {
    if values.is_empty() {
        return "none".to_string();
    }
    values.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

const SPACE_INSTRUCTIONS: &str =
    "Assess the following pet care space for animal welfare and safety compliance.";

const SPACE_ASPECTS: &str = r#"Consider the following aspects:
1. Space capacity and requirements
2. Safety features
3. Pricing fairness
4. Special needs accommodations"#;

const BOOKING_INSTRUCTIONS: &str =
    "Assess the following pet care booking for animal welfare and safety compliance.";

const BOOKING_ASPECTS: &str = r#"Consider:
1. Pet-space compatibility
2. Special needs accommodation
3. Capacity management
4. Safety considerations"#;

const OUTPUT_FORMAT_REMINDER: &str = r#"Answer using exactly this format, one item per line:
score: <0-100>
- concern: <one concern>
- recommendation: <one recommendation>
approved: true|false"#;
