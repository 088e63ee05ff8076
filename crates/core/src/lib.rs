//! TalentScout Core
//!
//! Foundational types for the TalentScout workspace. This crate has zero
//! dependencies on application-level code (LLM providers, session handling,
//! configuration files).
//!
//! ## Module Organization
//!
//! - `error` - Core error types (`CoreError`, `CoreResult`, `ValidationError`)
//! - `profile` - Raw form fields, profile validation, `CandidateProfile`
//! - `tier` - Experience tiers (`ExperienceTier`)

pub mod error;
pub mod profile;
pub mod tier;

// ── Error Types ────────────────────────────────────────────────────────
pub use error::{CoreError, CoreResult, ValidationError};

// ── Candidate Profile ──────────────────────────────────────────────────
pub use profile::{
    parse_tech_stack, validate_profile, CandidateProfile, RawExperience, RawProfile,
    MAX_EXPERIENCE_YEARS,
};

// ── Experience Tiers ───────────────────────────────────────────────────
pub use tier::ExperienceTier;
