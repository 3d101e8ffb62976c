// tests/config_test.rs
use serial_test::serial;
use std::env;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use version_gate::config::{load_config, Config, CONFIG_FILE_NAME};
use version_gate::git::Backend;

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
version_file = "release/VERSION"

[tags]
pattern = "release-{version}"
remote = "upstream"
check_remote = false

[git]
backend = "libgit2"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.version_file, "release/VERSION");
    assert_eq!(config.tags.pattern, "release-{version}");
    assert_eq!(config.tags.remote, "upstream");
    assert!(!config.tags.check_remote);
    assert_eq!(config.git.backend, Backend::Libgit2);
    assert_eq!(config.git.program, "git");
}

#[test]
fn test_missing_explicit_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");
    let err = load_config(Some(path.to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}

#[test]
fn test_unparsable_file_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[git]\nbackend = \"svn\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = load_config(Some(temp_file.path().to_str().unwrap())).unwrap_err();
    assert!(err.to_string().contains("Cannot parse"));
}

#[test]
#[serial]
fn test_config_discovered_in_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "version_file = \"VERSION.txt\"\n",
    )
    .unwrap();

    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    assert_eq!(result.unwrap().version_file, "VERSION.txt");
}

#[test]
#[serial]
fn test_defaults_without_config_file() {
    let dir = TempDir::new().unwrap();
    let original_dir = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let result = load_config(None);
    env::set_current_dir(original_dir).unwrap();

    let config = result.unwrap();
    if version_gate::config::user_config_path().map_or(true, |p| !p.exists()) {
        assert_eq!(config, Config::default());
    }
}
