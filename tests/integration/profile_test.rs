//! Profile Validation Integration Tests
//!
//! Raw submissions through to canonical profiles and experience tiers.

use talent_scout_core::{
    validate_profile, ExperienceTier, RawExperience, RawProfile, ValidationError,
};

use crate::support::raw_profile;

#[test]
fn test_valid_profile_is_normalized() {
    let profile = validate_profile(&raw_profile(3, " Python ,, React ,")).unwrap();

    assert_eq!(profile.email(), "jane.doe@example.com");
    assert_eq!(profile.tech_stack(), ["Python".to_string(), "React".to_string()]);
    assert_eq!(profile.tech_stack_display(), "Python, React");
    assert_eq!(profile.location(), Some("Berlin"));
    assert_eq!(profile.tier(), ExperienceTier::MidLevel);
}

#[test]
fn test_all_missing_fields_reported_together() {
    let err = validate_profile(&RawProfile::default()).unwrap_err();
    assert_eq!(
        err.missing_fields(),
        [
            "Full Name".to_string(),
            "Email".to_string(),
            "Phone".to_string(),
            "Position Applied For".to_string(),
            "Tech Stack".to_string(),
        ]
    );
}

#[test]
fn test_field_checks() {
    let bad_email = RawProfile {
        email: "jane.example.com".to_string(),
        ..raw_profile(3, "Go")
    };
    assert_eq!(validate_profile(&bad_email), Err(ValidationError::InvalidEmail));

    let bad_phone = RawProfile {
        phone: "555-CALL-NOW".to_string(),
        ..raw_profile(3, "Go")
    };
    assert_eq!(validate_profile(&bad_phone), Err(ValidationError::InvalidPhone));

    let empty_stack = raw_profile(3, " , ,");
    assert_eq!(
        validate_profile(&empty_stack),
        Err(ValidationError::EmptyTechStack)
    );
}

#[test]
fn test_experience_parsing() {
    let text = RawProfile {
        experience: Some(RawExperience::Text(" 7 ".to_string())),
        ..raw_profile(0, "Go")
    };
    let profile = validate_profile(&text).unwrap();
    assert_eq!(profile.experience(), 7);
    assert_eq!(profile.tier(), ExperienceTier::Senior);

    let absent = RawProfile {
        experience: None,
        ..raw_profile(0, "Go")
    };
    assert_eq!(validate_profile(&absent).unwrap().experience(), 0);

    for bad in [
        RawExperience::Years(-1),
        RawExperience::Years(51),
        RawExperience::Text("many".to_string()),
    ] {
        let raw = RawProfile {
            experience: Some(bad),
            ..raw_profile(0, "Go")
        };
        assert!(matches!(
            validate_profile(&raw),
            Err(ValidationError::InvalidExperience(_))
        ));
    }
}

#[test]
fn test_profile_from_json() {
    let raw = RawProfile::from_json_str(
        r#"{
            "full_name": "Linus",
            "email": "linus@kernel.org",
            "phone": "0123 456",
            "experience": "1",
            "position": "Maintainer",
            "tech_stack": "C"
        }"#,
    )
    .unwrap();

    let profile = validate_profile(&raw).unwrap();
    assert_eq!(profile.tier(), ExperienceTier::Junior);
    assert_eq!(profile.location(), None);
}
