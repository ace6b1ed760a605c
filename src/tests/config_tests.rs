use std::collections::HashMap;
use std::time::Duration;

use crate::api::middleware::{is_excluded, performance_label};
use crate::config::{Config, Environment};
use crate::startup::build_storage;
use crate::infrastructure::storage::Storage;

fn config_from(pairs: &[(&str, &str)]) -> Config {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    Config::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_config_defaults() {
    let config = config_from(&[]);
    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, "info");
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api_base_url, "http://localhost:3000");
    assert!(config.seed_demo_data);
    assert_eq!(config.bind_address(), "0.0.0.0:3000");
}

#[test]
fn test_config_overrides() {
    let config = config_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("APP_ENV", "Production"),
        ("SEED_DEMO_DATA", "false"),
    ]);
    assert_eq!(config.bind_address(), "127.0.0.1:8080");
    assert_eq!(config.log_level, "debug");
    assert!(config.environment.is_production());
    assert!(!config.seed_demo_data);
}

#[test]
fn test_config_bad_values_fall_back() {
    let config = config_from(&[("PORT", "not-a-port"), ("SEED_DEMO_DATA", "maybe"), ("APP_ENV", "staging")]);
    assert_eq!(config.port, 3000);
    assert!(config.seed_demo_data);
    assert_eq!(config.environment, Environment::Development);
}

#[test]
fn test_config_legacy_variable_names() {
    let config = config_from(&[
        ("NODE_ENV", "production"),
        ("NUXT_PUBLIC_API_BASE", "https://api.example.com"),
    ]);
    assert!(config.environment.is_production());
    assert_eq!(config.api_base_url, "https://api.example.com");

    let config = config_from(&[
        ("APP_ENV", "development"),
        ("NODE_ENV", "production"),
        ("PUBLIC_API_BASE", "https://new.example.com"),
        ("NUXT_PUBLIC_API_BASE", "https://old.example.com"),
    ]);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.api_base_url, "https://new.example.com");
}

#[tokio::test]
async fn test_seeding_follows_config() {
    let seeded = build_storage(&config_from(&[]));
    assert_eq!(seeded.count().await.unwrap(), 3);

    let empty = build_storage(&config_from(&[("SEED_DEMO_DATA", "false")]));
    assert_eq!(empty.count().await.unwrap(), 0);
    let first = empty
        .append("First".to_string(), "first@example.com".to_string())
        .await
        .unwrap();
    assert_eq!(first.id, "1");
}

#[test]
fn test_request_log_exclusions() {
    assert!(is_excluded("/favicon.ico"));
    assert!(is_excluded("/_nuxt/app.js"));
    assert!(is_excluded("/assets/logo.png"));
    assert!(is_excluded("/api/health"));
    assert!(!is_excluded("/api/graphql"));
}

#[test]
fn test_performance_label() {
    assert_eq!(performance_label(Duration::from_millis(10)), "Good");
    assert_eq!(performance_label(Duration::from_millis(500)), "Good");
    assert_eq!(performance_label(Duration::from_millis(501)), "Slow");
    assert_eq!(performance_label(Duration::from_millis(1000)), "Slow");
    assert_eq!(performance_label(Duration::from_millis(1001)), "Very Slow");
}
