use voxbook::domain::MeetingDetails;

#[test]
fn given_well_formed_json_when_decoding_then_returns_details() {
    let json = r#"{"duration_minutes": 30, "start_timestamp": "2024-12-26T12:00:00+05:30"}"#;

    let details: MeetingDetails = serde_json::from_str(json).unwrap();

    assert_eq!(details.duration_minutes, 30);
    assert_eq!(details.start_timestamp, "2024-12-26T12:00:00+05:30");
}

#[test]
fn given_missing_duration_when_decoding_then_fails() {
    let json = r#"{"start_timestamp": "2024-12-26T12:00:00+05:30"}"#;

    let result: Result<MeetingDetails, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn given_missing_timestamp_when_decoding_then_fails() {
    let json = r#"{"duration_minutes": 30}"#;

    let result: Result<MeetingDetails, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn given_non_integer_duration_when_decoding_then_fails() {
    let json = r#"{"duration_minutes": "30 minutes", "start_timestamp": "2024-12-26T12:00:00+05:30"}"#;

    let result: Result<MeetingDetails, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn given_negative_duration_when_decoding_then_fails() {
    let json = r#"{"duration_minutes": -15, "start_timestamp": "2024-12-26T12:00:00+05:30"}"#;

    let result: Result<MeetingDetails, _> = serde_json::from_str(json);

    assert!(result.is_err());
}

#[test]
fn given_unexpected_extra_field_when_decoding_then_fails() {
    let json = r#"{"duration_minutes": 30, "start_timestamp": "2024-12-26T12:00:00+05:30", "location": "Berlin"}"#;

    let result: Result<MeetingDetails, _> = serde_json::from_str(json);

    assert!(result.is_err());
}
