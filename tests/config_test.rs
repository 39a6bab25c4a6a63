//! Loading configuration files from disk.

use std::io::Write;

use parlor_games::{ComputerStrategy, FirstMover, GameConfig};
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_full_file() {
    let file = write_config(
        r#"
seed = 99

[tictactoe]
target_score = 3
first_mover = "random"
strategy = "first_available"
human_marker = "A"
computer_marker = "B"
prompt_between_games = false

[rps]
target_score = 2
computer_name = "Hal"

[twenty_one]
dealer_stay_threshold = 16
"#,
    );

    let config = GameConfig::load(Some(file.path())).unwrap();
    assert_eq!(*config.seed(), Some(99));
    assert_eq!(*config.tictactoe().target_score(), 3);
    assert_eq!(*config.tictactoe().first_mover(), FirstMover::Random);
    assert_eq!(*config.tictactoe().strategy(), ComputerStrategy::FirstAvailable);
    assert_eq!(*config.tictactoe().human_marker(), 'A');
    assert!(!*config.tictactoe().prompt_between_games());
    assert_eq!(config.rps().computer_name().as_deref(), Some("Hal"));
    assert_eq!(*config.twenty_one().dealer_stay_threshold(), 16);
}

#[test]
fn test_partial_file_keeps_defaults() {
    let file = write_config("[rps]\ntarget_score = 1\n");
    let config = GameConfig::from_file(file.path()).unwrap();

    assert_eq!(*config.rps().target_score(), 1);
    assert_eq!(*config.tictactoe().target_score(), 5);
    assert_eq!(*config.twenty_one().dealer_stay_threshold(), 17);
}

#[test]
fn test_cli_seed_overrides_file() {
    let file = write_config("seed = 1\n");
    let config = GameConfig::load(Some(file.path())).unwrap().with_seed(Some(2));
    assert_eq!(*config.seed(), Some(2));

    let kept = GameConfig::load(Some(file.path())).unwrap().with_seed(None);
    assert_eq!(*kept.seed(), Some(1));
}

#[test]
fn test_invalid_file_rejected() {
    let file = write_config("[tictactoe]\nhuman_marker = \"5\"\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("confused"));

    let file = write_config("[twenty_one]\ndealer_stay_threshold = 0\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
