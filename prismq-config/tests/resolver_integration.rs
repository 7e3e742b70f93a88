//! Integration tests for configuration resolution.
//!
//! Environment-dependent tests are marked `#[serial]`: environment
//! variables are process-global, so they must not run concurrently with
//! each other or with other tests that read the same keys.

mod common;

use std::fs;

use common::EnvGuard;
use prismq_config::prompt::ScriptedPrompter;
use prismq_config::store::{EnvFileStore, SettingsStore};
use prismq_config::{init_logger, AppEnv, ConfigResolver, LogLevel};
use serial_test::serial;
use tempfile::TempDir;

fn non_interactive(temp: &TempDir) -> ConfigResolver {
    ConfigResolver::new()
        .with_start_dir(temp.path())
        .non_interactive()
}

#[test]
#[serial]
fn environment_overrides_settings_store() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "APP_ENV=development\n").unwrap();

    let _guard = EnvGuard::set("APP_ENV", "production");
    let settings = non_interactive(&temp).resolve().unwrap();
    assert_eq!(settings.app_env, AppEnv::Production);
}

#[test]
#[serial]
fn environment_overrides_boolean_and_paths() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "DEBUG=true\n").unwrap();

    let _debug = EnvGuard::set("DEBUG", "0");
    let _output = EnvGuard::set("OUTPUT_DIR", "custom-out");

    let settings = non_interactive(&temp).resolve().unwrap();
    assert!(!settings.debug);
    assert_eq!(settings.output_dir, temp.path().join("custom-out"));
    assert!(settings.output_dir.is_dir());
}

#[test]
#[serial]
fn api_key_prefers_environment_over_store() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "OPENAI_API_KEY=from-store\n").unwrap();

    let settings = non_interactive(&temp).resolve().unwrap();
    assert_eq!(settings.api_key("openai").unwrap(), "from-store");

    let _guard = EnvGuard::set("OPENAI_API_KEY", "from-env");
    assert_eq!(settings.api_key("openai").unwrap(), "from-env");
}

#[test]
#[serial]
fn absolute_path_setting_is_used_verbatim() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let absolute = elsewhere.path().join("shared-cache");

    let _guard = EnvGuard::set("CACHE_DIR", &absolute.display().to_string());
    let settings = non_interactive(&temp).resolve().unwrap();

    assert_eq!(settings.cache_dir, absolute);
    assert!(absolute.is_dir());
}

#[test]
#[serial]
fn init_logger_honors_log_level_environment_variable() {
    let _guard = EnvGuard::set("LOG_LEVEL", "warning");
    assert_eq!(init_logger(false, false).level(), LogLevel::Warning);

    // Flags still beat the environment.
    assert_eq!(init_logger(true, false).level(), LogLevel::Debug);
    assert_eq!(init_logger(false, true).level(), LogLevel::Error);
}

#[test]
#[serial]
fn init_logger_ignores_invalid_log_level_value() {
    let _guard = EnvGuard::set("LOG_LEVEL", "chatty");
    assert_eq!(init_logger(false, false).level(), LogLevel::Info);
}

#[test]
fn prompted_value_round_trips_through_the_store() {
    let temp = TempDir::new().unwrap();

    let prompter = ScriptedPrompter::new(["PrismQ.Collector", "python3.12"]);
    let first = ConfigResolver::new()
        .with_start_dir(temp.path())
        .with_prompter(prompter)
        .resolve()
        .unwrap();
    assert_eq!(first.app_name, "PrismQ.Collector");

    // A fresh resolver against the same store must not prompt again.
    let silent = ScriptedPrompter::new(Vec::<String>::new());
    let second = ConfigResolver::new()
        .with_start_dir(temp.path())
        .with_prompter(silent)
        .resolve()
        .unwrap();
    assert_eq!(second.app_name, "PrismQ.Collector");
    assert_eq!(second.python_executable, "python3.12");
}

#[test]
#[serial]
fn boolean_parsing_table() {
    for (value, expected) in [
        ("true", true),
        ("TRUE", true),
        ("1", true),
        ("yes", true),
        ("false", false),
        ("0", false),
        ("", false),
        ("no", false),
    ] {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".env"), format!("DEBUG={value}\n")).unwrap();

        let settings = non_interactive(&temp).resolve().unwrap();
        assert_eq!(
            settings.debug, expected,
            "DEBUG={value:?} should parse to {expected}"
        );
    }
}

// Serialized: a concurrently running test could set OUTPUT_DIR between
// the two resolutions and break the equality check.
#[test]
#[serial]
fn data_directory_creation_is_idempotent() {
    let temp = TempDir::new().unwrap();

    let first = non_interactive(&temp).resolve().unwrap();
    assert!(first.output_dir.is_dir());

    // Second resolution against the same working directory must not error.
    let second = non_interactive(&temp).resolve().unwrap();
    assert_eq!(first.output_dir, second.output_dir);
}

#[test]
#[serial]
fn malformed_store_lines_do_not_break_resolution() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "no equals here\nAPP_NAME=PrismQ.Kept\n=orphan value\nLOG_LEVEL=DEBUG\n",
    )
    .unwrap();

    let settings = non_interactive(&temp).resolve().unwrap();
    assert_eq!(settings.app_name, "PrismQ.Kept");
    assert_eq!(settings.log_level, LogLevel::Debug);
}

#[test]
fn api_key_lookup_never_touches_the_store() {
    let temp = TempDir::new().unwrap();
    let settings = non_interactive(&temp).resolve().unwrap();

    let before = fs::read_to_string(&settings.settings_path).unwrap();
    assert!(settings.api_key("nonexistent").is_none());
    assert!(settings.api_key("also-nonexistent").is_none());
    let after = fs::read_to_string(&settings.settings_path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn explicit_settings_file_skips_discovery() {
    let base = TempDir::new().unwrap();
    // Even under an umbrella, an explicit file pins the working directory.
    let nested = base.path().join("PrismQ").join("module");
    fs::create_dir_all(&nested).unwrap();
    let explicit = nested.join("local.env");

    let settings = ConfigResolver::new()
        .with_settings_file(&explicit)
        .non_interactive()
        .resolve()
        .unwrap();

    assert_eq!(settings.working_directory, nested);
    assert_eq!(settings.settings_path, explicit);
    assert!(!base.path().join("PrismQ_WD").exists());
}

#[test]
fn new_store_is_seeded_with_working_directory() {
    let temp = TempDir::new().unwrap();
    let settings = non_interactive(&temp).resolve().unwrap();

    let contents = fs::read_to_string(&settings.settings_path).unwrap();
    assert!(contents.starts_with("WORKING_DIRECTORY="));
    assert!(contents.contains(&temp.path().display().to_string()));
}

#[test]
#[serial]
fn existing_store_values_are_preserved() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".env"),
        "APP_NAME=CustomApp\nDEBUG=false\n",
    )
    .unwrap();

    let settings = non_interactive(&temp).resolve().unwrap();
    assert_eq!(settings.app_name, "CustomApp");
    assert!(!settings.debug);

    let contents = fs::read_to_string(&settings.settings_path).unwrap();
    assert!(contents.contains("APP_NAME=CustomApp"));
    assert!(contents.contains("WORKING_DIRECTORY="));
}

// Appends from independent store handles are not synchronized: this is the
// documented shared-file consistency model, not a bug. Two processes that
// prompt-and-append the same key concurrently may interleave; the file ends
// up with duplicate entries and the last one wins at parse time. This test
// pins that behaviour with two handles in one process.
#[test]
fn unsynchronized_appends_leave_duplicates_with_last_writer_winning() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".env");
    fs::write(&path, "").unwrap();

    let mut first = EnvFileStore::new(&path);
    let mut second = EnvFileStore::new(&path);

    first.append("APP_NAME", "PrismQ.First").unwrap();
    second.append("APP_NAME", "PrismQ.Second").unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("APP_NAME=").count(), 2);

    let values = first.load().unwrap();
    assert_eq!(values["APP_NAME"], "PrismQ.Second");
}
