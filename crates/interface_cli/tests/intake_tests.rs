//! CLI intake tests
//!
//! Exercise submission parsing, the printed report and configuration
//! loading without spawning the binary.

use domain_speaker::{
    BrowserName, InMemorySpeakerRepository, RegisterErrorKind, RegistrationEvaluator,
};
use interface_cli::{register_json, CliConfig, SpeakerSubmission};
use rust_decimal_macros::dec;

const APPROVABLE: &str = r#"{
    "first_name": "First",
    "last_name": "Last",
    "email": "example@domain.com",
    "employer": "Example Employer",
    "has_blog": true,
    "blog_url": "",
    "browser": { "name": "test", "major_version": 1 },
    "years_experience": 1,
    "certifications": [],
    "sessions": [ { "title": "test title", "description": "test description" } ]
}"#;

mod submissions {
    use super::*;

    #[test]
    fn test_submission_maps_onto_speaker() {
        let submission: SpeakerSubmission = serde_json::from_str(
            r#"{
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@example.com",
                "browser": { "name": "MSIE 8.0", "major_version": 8 },
                "sessions": [ { "title": "Engines", "description": "Analytical" } ]
            }"#,
        )
        .unwrap();

        let speaker = submission.into_speaker();

        assert_eq!(speaker.display_name(), "Ada Lovelace");
        assert_eq!(speaker.browser.name, BrowserName::InternetExplorer);
        assert_eq!(speaker.browser.major_version, 8);
        assert_eq!(speaker.years_experience, None);
        assert_eq!(speaker.sessions.len(), 1);
        assert!(!speaker.sessions[0].is_approved());
    }

    #[test]
    fn test_missing_fields_parse_as_blank() {
        let submission: SpeakerSubmission = serde_json::from_str("{}").unwrap();
        let speaker = submission.into_speaker();

        assert!(speaker.first_name.is_empty());
        assert!(speaker.sessions.is_empty());
        assert_eq!(speaker.browser.name, BrowserName::Unknown);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let repository = InMemorySpeakerRepository::new();
        let result = register_json("{ not json", &RegistrationEvaluator::default(), &repository);

        assert!(result.is_err());
        assert_eq!(repository.save_count(), 0);
    }
}

mod reports {
    use super::*;

    #[test]
    fn test_successful_report() {
        let repository = InMemorySpeakerRepository::new();

        let report = register_json(APPROVABLE, &RegistrationEvaluator::default(), &repository)
            .unwrap();

        assert!(report.is_success());
        assert_eq!(report.registration_fee, Some(dec!(500)));
        assert_eq!(report.approved_sessions, vec!["test title".to_string()]);
        assert_eq!(repository.save_count(), 1);

        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("speaker_id").is_some());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_rejected_report() {
        let repository = InMemorySpeakerRepository::new();

        let report = register_json(
            r#"{ "first_name": "First", "last_name": "Last", "email": "x@domain.com" }"#,
            &RegistrationEvaluator::default(),
            &repository,
        )
        .unwrap();

        assert!(!report.is_success());
        assert_eq!(report.response.error, Some(RegisterErrorKind::NoSessionsProvided));
        assert!(report.message.is_some());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["error"], "NoSessionsProvided");
        assert!(json.get("registration_fee").is_none());
    }
}

mod configuration {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_when_unset() {
        let config = CliConfig::from_env_with_prefix("REGCLI_UNSET").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_reads_prefixed_environment() {
        std::env::set_var("REGCLI_SET_LOG_LEVEL", "debug");
        std::env::set_var("REGCLI_SET_LOG_JSON", "true");
        std::env::set_var("REGCLI_SET_POLICY_FILE", "/etc/registration/policy.toml");

        let config = CliConfig::from_env_with_prefix("REGCLI_SET").unwrap();

        assert_eq!(config.log_level, "debug");
        assert!(config.log_json);
        assert_eq!(
            config.policy_file,
            Some(PathBuf::from("/etc/registration/policy.toml"))
        );
    }
}
