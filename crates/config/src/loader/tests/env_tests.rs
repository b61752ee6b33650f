//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test that `from_env()` reads the live process environment.
//! - Test `env_var_or_none` empty/whitespace filtering.

use secrecy::ExposeSecret;
use serial_test::serial;

use super::env_lock;
use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::types::Variant;

#[test]
#[serial]
fn test_from_env_collects_notify_vars() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("NOTIFY_HOSTNAME", Some("db01")),
            ("NOTIFY_PARAMETER_ILERT_API_KEY", Some("il1api-env")),
            ("ILERT_UNRELATED", Some("ignored")),
        ],
        || {
            let config = ConfigLoader::new(Variant::Extension)
                .from_env()
                .build()
                .unwrap();

            assert_eq!(config.context.get("NOTIFY_HOSTNAME"), Some("db01"));
            assert!(!config.context.contains_key("ILERT_UNRELATED"));
            assert_eq!(config.api_key.expose_secret(), "il1api-env");
        },
    );
}

#[test]
#[serial]
fn test_from_env_then_payload_override() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("NOTIFY_SERVICESTATE", Some("WARNING"))], || {
        let context = ConfigLoader::new(Variant::Extension)
            .from_env()
            .with_payload(["NOTIFY_SERVICESTATE=CRITICAL"])
            .context();

        assert_eq!(context.get("NOTIFY_SERVICESTATE"), Some("CRITICAL"));
    });
}

#[test]
#[serial]
fn test_from_env_pager_variant() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("NOTIFY_CONTACTPAGER", Some("il1api-pager"))], || {
        let config = ConfigLoader::new(Variant::Pager)
            .from_env()
            .build()
            .unwrap();

        assert_eq!(config.context.get("CONTACTPAGER"), Some("il1api-pager"));
        assert_eq!(config.api_key.expose_secret(), "il1api-pager");
    });
}

#[test]
#[serial]
fn test_env_var_or_none_filters_blank_values() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("ILERT_TEST_EMPTY", Some("")),
            ("ILERT_TEST_BLANK", Some("   ")),
            ("ILERT_TEST_PADDED", Some("  value  ")),
            ("ILERT_TEST_UNSET", None),
        ],
        || {
            assert_eq!(env_var_or_none("ILERT_TEST_EMPTY"), None);
            assert_eq!(env_var_or_none("ILERT_TEST_BLANK"), None);
            assert_eq!(
                env_var_or_none("ILERT_TEST_PADDED"),
                Some("value".to_string())
            );
            assert_eq!(env_var_or_none("ILERT_TEST_UNSET"), None);
        },
    );
}
