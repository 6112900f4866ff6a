use voxbook::domain::AudioSource;

#[test]
fn given_path_when_creating_source_then_as_str_returns_it_unchanged() {
    let source = AudioSource::from_path("/var/memos/standup.wav");

    assert_eq!(source.as_str(), "/var/memos/standup.wav");
}

#[test]
fn given_nested_path_when_reading_file_name_then_returns_last_component() {
    let source = AudioSource::from_path("/var/memos/2024/standup.m4a");

    assert_eq!(source.file_name(), Some("standup.m4a"));
}

#[test]
fn given_audio_source_when_displayed_then_matches_as_str() {
    let source = AudioSource::from_path("memo.wav");

    assert_eq!(format!("{}", source), source.as_str());
}
