use super::*;

#[test]
fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.depth, 2);
    assert_eq!(config.transcript_path, "game_transcript.json");
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let config = Config::load(Path::new("does_not_exist.toml")).unwrap();
    assert_eq!(config.depth, 2);
}

#[test]
fn test_parse_partial_config() {
    let config: Config = toml::from_str("depth = 4").unwrap();
    assert_eq!(config.depth, 4);
    assert_eq!(config.transcript_path, "game_transcript.json");
}

#[test]
fn test_parse_full_config() {
    let config: Config = toml::from_str(
        r#"
        depth = 3
        transcript_path = "out.json"
        "#,
    )
    .unwrap();
    assert_eq!(config.depth, 3);
    assert_eq!(config.transcript_path, "out.json");
}
