//! Record requirement parsing and evaluation tests.

use horizon_menu_core::{
    MenuError, RecordSelection, RecordsRequired, RecordsRequiredValue, SelectionContext,
};

#[derive(Debug, serde::Deserialize)]
struct Entry {
    #[serde(default)]
    records_required: RecordsRequired,
}

fn parse(json: &str) -> Result<RecordsRequired, serde_json::Error> {
    serde_json::from_str::<Entry>(json).map(|entry| entry.records_required)
}

#[test]
fn test_deserialize_accepted_values() {
    assert_eq!(parse("{}").unwrap(), RecordsRequired::Exactly(1));
    assert_eq!(parse(r#"{"records_required": false}"#).unwrap(), RecordsRequired::Any);
    assert_eq!(parse(r#"{"records_required": true}"#).unwrap(), RecordsRequired::AtLeastOne);
    assert_eq!(parse(r#"{"records_required": 0}"#).unwrap(), RecordsRequired::Exactly(0));
    assert_eq!(parse(r#"{"records_required": 4}"#).unwrap(), RecordsRequired::Exactly(4));
}

#[test]
fn test_deserialize_rejected_values() {
    for value in ["-1", r#""two""#, "2.5", "null"] {
        let json = format!(r#"{{"records_required": {value}}}"#);
        assert!(parse(&json).is_err(), "{value} should be rejected");
    }
}

#[test]
fn test_serialize_uses_loose_form() {
    let values = [
        (RecordsRequired::Any, "false"),
        (RecordsRequired::AtLeastOne, "true"),
        (RecordsRequired::Exactly(3), "3"),
    ];
    for (policy, expected) in values {
        assert_eq!(serde_json::to_string(&policy).unwrap(), expected);
    }
}

#[test]
fn test_conversion_error_is_configuration() {
    let err: MenuError = RecordsRequired::try_from(RecordsRequiredValue::from("two"))
        .unwrap_err()
        .into();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("records_required"));
}

#[test]
fn test_policy_against_selection() {
    let clicked_outside = RecordSelection::new(vec!['a', 'b']).with_clicked('z');
    assert_eq!(clicked_outside.active_count(), 3);
    assert!(RecordsRequired::Exactly(3).is_met_by(clicked_outside.active_count()));
    assert!(!RecordsRequired::default().is_met_by(clicked_outside.active_count()));
    assert!(RecordsRequired::Any.is_met_by(RecordSelection::<char>::empty().active_count()));
}
