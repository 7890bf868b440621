use eventkeeper_core::{validate, Event, RawEventFields, MISSING_FIELDS_MESSAGE};

#[test]
fn serialization_uses_expected_wire_fields() {
    let event = validate("Workshop", "2026-07-01", "Coding practice").unwrap();

    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "title": "Workshop",
            "date": "2026-07-01",
            "description": "Coding practice"
        })
    );

    let decoded: Event = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, event);
}

#[test]
fn deserialize_rejects_blank_fields() {
    let value = serde_json::json!({
        "title": "   ",
        "date": "2026-07-01",
        "description": "blank title"
    });

    let err = serde_json::from_value::<Event>(value).unwrap_err();
    assert!(
        err.to_string().contains(MISSING_FIELDS_MESSAGE),
        "unexpected error: {err}"
    );
}

#[test]
fn deserialize_rejects_missing_fields() {
    let value = serde_json::json!({ "title": "Only title" });
    assert!(serde_json::from_value::<Event>(value).is_err());
}

#[test]
fn raw_fields_validate_matches_free_function() {
    let raw = RawEventFields::new("Talk", "2026-06-10", "Tech");
    assert_eq!(
        raw.validate().unwrap(),
        validate("Talk", "2026-06-10", "Tech").unwrap()
    );
}
