//! Integration Tests Module
//!
//! End-to-end tests for TalentScout: profile validation, the interview flow
//! controller, and the command layer, all against a scripted language model.

// Scripted provider and fixtures shared by the tests below
mod support;

// Profile validation and tier selection
mod profile_test;

// Flow controller state machine
mod interview_flow_test;

// Command layer over AppState
mod commands_test;
