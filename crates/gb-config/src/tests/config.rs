use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, none, ok, some};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Happy Path Tests
// =========================================================================

#[test]
#[serial]
fn given_no_config_file_when_load_then_ok_with_defaults() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("GB_API_BASE_URL");

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    let config = result.unwrap();
    assert_that!(config.api.base_url, eq(crate::DEFAULT_API_BASE_URL));
    assert_that!(config.storage.file, eq(crate::DEFAULT_STORAGE_FILE));
    assert_that!(config.logging.file, none());
}

#[test]
#[serial]
fn given_no_config_file_when_load_and_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_valid_toml_file_when_load_then_uses_toml_values() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _url = EnvGuard::remove("GB_API_BASE_URL");
    let _file = EnvGuard::remove("GB_STORAGE_FILE");
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://api.gobarber.app"

            [storage]
            file = "auth.json"

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url, eq("https://api.gobarber.app"));
    assert_that!(config.storage.file, eq("auth.json"));
    assert_that!(config.logging.level.0, eq(LevelFilter::Debug));
}

#[test]
#[serial]
fn given_env_var_and_toml_when_load_then_env_var_overrides_toml() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        r#"
            [api]
            base_url = "https://api.gobarber.app"
        "#,
    )
    .unwrap();
    let _url = EnvGuard::set("GB_API_BASE_URL", "http://10.0.2.2:3333");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.api.base_url, eq("http://10.0.2.2:3333"));
}

#[test]
#[serial]
fn given_log_env_vars_when_load_then_logging_overridden() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("GB_LOG_LEVEL", "warn");
    let _colored = EnvGuard::set("GB_LOG_COLORED", "0");
    let _file = EnvGuard::set("GB_LOG_FILE", "gb.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.level.0, eq(LevelFilter::Warn));
    assert_that!(config.logging.colored, eq(false));
    assert_that!(config.logging.file, some(eq("gb.log")));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let nested = temp.path().join("nested").join("dir");
    let _dir = EnvGuard::set("GB_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.is_dir());
}

#[test]
#[serial]
fn given_config_dir_when_storage_path_then_joined_under_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::remove("GB_STORAGE_FILE");

    // When
    let config = Config::load().unwrap();
    let path = config.storage_path_in(&Config::config_dir().unwrap());

    // Then
    assert_eq!(path, temp.path().join("session.json"));
}

#[test]
#[serial]
fn given_log_file_when_log_file_path_then_inside_log_dir() {
    // Given
    let (temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("GB_LOG_FILE", "gb.log");

    // When
    let config = Config::load().unwrap();
    let path = config.log_file_path_in(&Config::config_dir().unwrap());

    // Then
    assert_eq!(path, Some(temp.path().join("log").join("gb.log")));
}

#[test]
#[serial]
fn given_explicit_dir_when_load_from_then_reads_that_dir() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let _url = EnvGuard::remove("GB_API_BASE_URL");
    let _file = EnvGuard::remove("GB_STORAGE_FILE");
    std::fs::write(
        temp.path().join("config.toml"),
        "[api]\nbase_url = \"https://api.gobarber.test\"\n",
    )
    .unwrap();

    // When
    let config = Config::load_from(temp.path()).unwrap();

    // Then
    assert_that!(config.api.base_url, eq("https://api.gobarber.test"));
    assert_eq!(
        config.storage_path_in(temp.path()),
        temp.path().join("session.json")
    );
}

#[test]
fn given_no_log_file_when_destination_then_stderr() {
    let mut config = Config::default();
    assert_that!(config.logging.destination(), eq("stderr"));

    config.logging.file = Some("gb.log".to_string());
    assert_that!(config.logging.destination(), eq("gb.log"));
}

// =========================================================================
// Error Tests
// =========================================================================

#[test]
#[serial]
fn given_invalid_toml_when_load_then_error_names_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join("config.toml"), "[api\nbase_url = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}
