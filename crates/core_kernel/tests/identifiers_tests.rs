//! Unit tests for the identifier newtypes
//!
//! Tests cover creation, parsing, conversion, serialization and display
//! formatting for speaker and session identifiers.

use core_kernel::{SessionId, SpeakerId};
use proptest::prelude::*;
use uuid::Uuid;

mod speaker_id_tests {
    use super::*;

    #[test]
    fn test_new_generates_unique_ids() {
        assert_ne!(SpeakerId::new(), SpeakerId::new());
    }

    #[test]
    fn test_uuid_conversions() {
        let uuid = Uuid::new_v4();
        let id = SpeakerId::from(uuid);
        let back: Uuid = id.into();
        assert_eq!(back, uuid);
    }

    #[test]
    fn test_prefix() {
        assert_eq!(SpeakerId::prefix(), "SPK");
    }

    #[test]
    fn test_from_str_without_prefix() {
        let uuid = Uuid::new_v4();
        let parsed: SpeakerId = uuid.to_string().parse().unwrap();
        assert_eq!(*parsed.as_uuid(), uuid);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!("SPK-not-a-uuid".parse::<SpeakerId>().is_err());
        assert!("".parse::<SpeakerId>().is_err());
    }

    #[test]
    fn test_json_is_bare_uuid() {
        let uuid = Uuid::new_v4();
        let id = SpeakerId::from_uuid(uuid);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", uuid));

        let back: SpeakerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}

mod session_id_tests {
    use super::*;

    #[test]
    fn test_prefix() {
        assert_eq!(SessionId::prefix(), "SES");
    }

    #[test]
    fn test_default_is_random() {
        assert_ne!(SessionId::default(), SessionId::default());
    }
}

proptest! {
    #[test]
    fn prop_display_form_parses_back(bytes in any::<[u8; 16]>()) {
        let id = SpeakerId::from_uuid(Uuid::from_bytes(bytes));
        let parsed: SpeakerId = id.to_string().parse().unwrap();
        prop_assert_eq!(parsed, id);
    }
}
