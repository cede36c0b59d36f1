use crate::config::{Config, ConfigError};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::time::Duration;

fn clear_env() {
    env::remove_var("PORT");
    env::remove_var("SUPABASE_URL");
    env::remove_var("SUPABASE_ANON_KEY");
    env::remove_var("SUPABASE_TIMEOUT_SECS");
    env::remove_var("VERBOSE_ERRORS");
}

fn set_required_env() {
    env::set_var("SUPABASE_URL", "http://localhost:8000");
    env::set_var("SUPABASE_ANON_KEY", "test-anon-key");
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();
    set_required_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 4000);
    assert_eq!(config.supabase_url, "http://localhost:8000");
    assert_eq!(config.supabase_anon_key, "test-anon-key");
    assert_eq!(config.store_timeout, Duration::from_secs(30));
    assert!(config.verbose_errors);
}

#[test]
#[serial]
fn test_config_from_env_with_custom_port() {
    clear_env();
    set_required_env();
    env::set_var("PORT", "8080");

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, 8080);

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_config_strips_trailing_slash_from_url() {
    clear_env();
    env::set_var("SUPABASE_URL", "http://localhost:8000/");
    env::set_var("SUPABASE_ANON_KEY", "test-anon-key");

    let config = Config::from_env().unwrap();

    assert_eq!(config.supabase_url, "http://localhost:8000");
}

#[test]
#[serial]
fn test_config_requires_supabase_url() {
    clear_env();
    env::set_var("SUPABASE_ANON_KEY", "test-anon-key");

    let result = Config::from_env();

    assert!(matches!(
        result.unwrap_err(),
        ConfigError::MissingEnv("SUPABASE_URL")
    ));
}

#[test]
#[serial]
fn test_config_rejects_blank_anon_key() {
    clear_env();
    env::set_var("SUPABASE_URL", "http://localhost:8000");
    env::set_var("SUPABASE_ANON_KEY", "   ");

    let result = Config::from_env();

    assert!(matches!(
        result.unwrap_err(),
        ConfigError::MissingEnv("SUPABASE_ANON_KEY")
    ));
}

#[test]
#[serial]
fn test_config_invalid_port() {
    clear_env();
    set_required_env();
    env::set_var("PORT", "not-a-number");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::InvalidPort(_)));

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_config_port_zero() {
    clear_env();
    set_required_env();
    env::set_var("PORT", "0");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::PortOutOfRange(0)));

    env::remove_var("PORT");
}

#[test]
#[serial]
fn test_config_custom_timeout() {
    clear_env();
    set_required_env();
    env::set_var("SUPABASE_TIMEOUT_SECS", "5");

    let config = Config::from_env().unwrap();

    assert_eq!(config.store_timeout, Duration::from_secs(5));

    env::remove_var("SUPABASE_TIMEOUT_SECS");
}

#[test]
#[serial]
fn test_config_rejects_zero_timeout() {
    clear_env();
    set_required_env();
    env::set_var("SUPABASE_TIMEOUT_SECS", "0");

    let result = Config::from_env();

    assert!(matches!(result.unwrap_err(), ConfigError::InvalidTimeout(_)));

    env::remove_var("SUPABASE_TIMEOUT_SECS");
}

#[rstest]
#[case("true", true)]
#[case("false", false)]
#[case("not-a-bool", true)]
#[serial]
fn test_config_verbose_errors_parsing(#[case] raw: &str, #[case] expected: bool) {
    clear_env();
    set_required_env();
    env::set_var("VERBOSE_ERRORS", raw);

    let config = Config::from_env().unwrap();

    assert_eq!(config.verbose_errors, expected);

    env::remove_var("VERBOSE_ERRORS");
}
