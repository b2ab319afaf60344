use super::*;

// =============================================================
// validate
// =============================================================

#[test]
fn complete_payload_validates() {
    let payload = MessagePayload::new("Dinda", "Hi", "Sehat");
    assert_eq!(payload.validate(), Ok(()));
}

#[test]
fn whitespace_only_field_is_missing() {
    let payload = MessagePayload::new("Dinda", "   \n\t", "Sehat");
    let err = payload.validate().unwrap_err();
    assert_eq!(err.missing, vec![Field::Message]);
}

#[test]
fn every_blank_field_is_reported_in_order() {
    let err = MessagePayload::default().validate().unwrap_err();
    assert_eq!(err.missing, vec![Field::Name, Field::Message, Field::Hope]);
    assert_eq!(err.to_string(), "required fields are empty: Nama, Pesan singkat, Harapan 2026");
}

#[test]
fn values_are_not_trimmed_on_store() {
    let mut payload = MessagePayload::default();
    payload.set(Field::Name, "  Dinda ");
    assert_eq!(payload.get(Field::Name), "  Dinda ");
    assert!(payload.validate().is_err());
}

// =============================================================
// Wire shape
// =============================================================

#[test]
fn serializes_with_canonical_keys() {
    let payload = MessagePayload::new("Dinda", "Hi", "Sehat");
    let json = serde_json::to_value(&payload).unwrap();
    assert_eq!(json, serde_json::json!({ "name": "Dinda", "message": "Hi", "hope2026": "Sehat" }));
}

#[test]
fn rejects_record_missing_a_key() {
    let parsed = serde_json::from_str::<MessagePayload>(r#"{"name":"a","message":"b"}"#);
    assert!(parsed.is_err());
}

#[test]
fn set_targets_each_field() {
    let mut payload = MessagePayload::default();
    payload.set(Field::Name, "n");
    payload.set(Field::Message, "m");
    payload.set(Field::Hope, "h");
    assert_eq!(payload, MessagePayload::new("n", "m", "h"));
}
