//! Candidate Profile
//!
//! Normalizes raw candidate-submitted form fields into an immutable
//! [`CandidateProfile`]. Validation reports every missing mandatory field at
//! once so the form can be corrected in a single pass.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreResult, ValidationError};
use crate::tier::ExperienceTier;

/// Upper bound accepted for years of experience
pub const MAX_EXPERIENCE_YEARS: u32 = 50;

/// Mandatory fields in form order, paired with their display names
const MANDATORY_FIELDS: [(&str, &str); 5] = [
    ("full_name", "Full Name"),
    ("email", "Email"),
    ("phone", "Phone"),
    ("position", "Position Applied For"),
    ("tech_stack", "Tech Stack"),
];

/// Years of experience as submitted: a number input or free text.
///
/// Fractional numbers deserialize so validation can reject them with a
/// proper message instead of a JSON error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawExperience {
    Years(i64),
    Fractional(f64),
    Text(String),
}

/// Unvalidated profile fields as submitted by the UI collaborator.
///
/// Every field defaults to empty so partial submissions deserialize and are
/// then rejected by [`validate_profile`] with the full list of gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProfile {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub experience: Option<RawExperience>,
    pub position: String,
    pub location: String,
    /// Comma-separated technology names
    pub tech_stack: String,
}

impl RawProfile {
    /// Parse a raw profile from a JSON object
    pub fn from_json_str(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a raw profile from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    fn field(&self, name: &str) -> &str {
        match name {
            "full_name" => &self.full_name,
            "email" => &self.email,
            "phone" => &self.phone,
            "position" => &self.position,
            "tech_stack" => &self.tech_stack,
            _ => "",
        }
    }
}

/// A validated candidate profile.
///
/// Fields are private: once built by [`validate_profile`] the record cannot
/// be changed for the lifetime of the interview session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateProfile {
    full_name: String,
    email: String,
    phone: String,
    experience: u32,
    position: String,
    location: Option<String>,
    tech_stack: Vec<String>,
}

impl CandidateProfile {
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Years of experience
    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Technologies in the order the candidate listed them (never empty)
    pub fn tech_stack(&self) -> &[String] {
        &self.tech_stack
    }

    /// Tech stack joined for display and prompts, e.g. `"Python, React"`
    pub fn tech_stack_display(&self) -> String {
        self.tech_stack.join(", ")
    }

    /// Experience tier driving question count and difficulty
    pub fn tier(&self) -> ExperienceTier {
        ExperienceTier::from_years(self.experience)
    }
}

/// Validate raw form fields into a [`CandidateProfile`].
///
/// Checks run in a fixed order: missing mandatory fields (all reported
/// together), email shape, phone characters, tech stack contents, then
/// years of experience.
pub fn validate_profile(raw: &RawProfile) -> Result<CandidateProfile, ValidationError> {
    let missing: Vec<String> = MANDATORY_FIELDS
        .iter()
        .filter(|(field, _)| raw.field(field).trim().is_empty())
        .map(|(_, display)| display.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let email = raw.email.trim().to_lowercase();
    if !email.contains('@') || !email.contains('.') {
        return Err(ValidationError::InvalidEmail);
    }

    let phone = raw.phone.trim().to_string();
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' '))
    {
        return Err(ValidationError::InvalidPhone);
    }

    let tech_stack = parse_tech_stack(&raw.tech_stack);
    if tech_stack.is_empty() {
        return Err(ValidationError::EmptyTechStack);
    }

    let experience = parse_experience(raw.experience.as_ref())?;

    let location = raw.location.trim();

    Ok(CandidateProfile {
        full_name: raw.full_name.trim().to_string(),
        email,
        phone,
        experience,
        position: raw.position.trim().to_string(),
        location: (!location.is_empty()).then(|| location.to_string()),
        tech_stack,
    })
}

/// Split a comma-separated tech stack, trimming entries and dropping blanks
pub fn parse_tech_stack(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tech| !tech.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_experience(raw: Option<&RawExperience>) -> Result<u32, ValidationError> {
    let years = match raw {
        None => return Ok(0),
        Some(RawExperience::Years(years)) => *years,
        Some(RawExperience::Fractional(years)) => {
            if years.fract() != 0.0 || !(0.0..=f64::from(MAX_EXPERIENCE_YEARS)).contains(years) {
                return Err(ValidationError::InvalidExperience(years.to_string()));
            }
            *years as i64
        }
        Some(RawExperience::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(0);
            }
            text.parse::<i64>()
                .map_err(|_| ValidationError::InvalidExperience(text.to_string()))?
        }
    };

    u32::try_from(years)
        .ok()
        .filter(|years| *years <= MAX_EXPERIENCE_YEARS)
        .ok_or_else(|| ValidationError::InvalidExperience(years.to_string()))
}
