// tests/integration_test.rs
use std::process::Command;

#[test]
fn test_release_gap_help() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-gap"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("release-gap"));
    assert!(stdout.contains("Count the releases between two tags"));
    assert!(stdout.contains("--filter"));
}

#[test]
fn test_release_gap_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-gap"))
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_missing_arguments_fail_with_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_release-gap"))
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_config_loading() {
    use release_gap::config::load_config;

    // Explicit fixture path loads independently of the environment
    let config = load_config(Some("tests/fixtures/releasegap_full.toml"))
        .expect("Should load fixture config");
    assert_eq!(config.github.token, Some("fixture-token".to_string()));
    assert!(config.defaults.verify_release);
}

#[test]
fn test_version_parsing_and_ordering() {
    use release_gap::domain::TaggedVersion;

    // Test parsing a version out of a prefixed tag
    let version = TaggedVersion::parse("v1.2.3").expect("Should parse version");
    assert_eq!(version.version.major, 1);
    assert_eq!(version.version.minor, 2);
    assert_eq!(version.version.patch, 3);

    // Test that semver ordering ignores the tag prefix
    let plain = TaggedVersion::parse("1.2.4").expect("Should parse version");
    assert!(version < plain);

    // Test that a prerelease sorts before its release
    let rc = TaggedVersion::parse("v1.2.3-rc.1").expect("Should parse version");
    assert!(rc < version);
}

#[test]
fn test_end_to_end_compare() {
    use release_gap::listing::MockLister;
    use release_gap::{compare, CompareOptions};

    let mut lister = MockLister::new();
    lister.add_tag("v1.0.0");
    lister.add_tag("v1.1.0");
    lister.add_tag("v1.2.0");

    let options = CompareOptions {
        target_tag: Some("v1.2.0".to_string()),
        ..Default::default()
    };
    let comparison =
        compare(&lister, "acme", "widget", "v1.0.0", &options).expect("Compare should succeed");

    assert_eq!(comparison.distance, 2);
    assert_eq!(comparison.notes.len(), 1);
    assert_eq!(comparison.notes[0].tag, "v1.1.0");
}
