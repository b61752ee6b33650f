//! Environment variable collection.
//!
//! Responsibilities:
//! - Select the alert context variables CheckMK exports to notification plugins.
//! - Apply the variant's key style to their names.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Command-line tokens (see payload.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Only variables whose name contains `NOTIFY_` are collected.
//! - Variables whose name or value is not valid UTF-8 are skipped.
//! - Empty values are kept; CheckMK exports empty macros as empty strings.

use std::ffi::OsStr;

use crate::constants::NOTIFY_MARKER;
use crate::types::KeyStyle;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Select the alert context entries from a set of environment variables.
///
/// With [`KeyStyle::StripPrefix`], a leading `NOTIFY_` is removed from the
/// name. A variable named exactly `NOTIFY_` would then have an empty key and
/// is skipped.
pub fn collect_notify_vars<I, K, V>(vars: I, style: KeyStyle) -> Vec<(String, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<OsStr>,
    V: AsRef<OsStr>,
{
    vars.into_iter()
        .filter_map(|(name, value)| {
            let name = name.as_ref().to_str()?;
            if !name.contains(NOTIFY_MARKER) {
                return None;
            }
            let value = value.as_ref().to_str()?;
            let key = match style {
                KeyStyle::Verbatim => name,
                KeyStyle::StripPrefix => name.strip_prefix(NOTIFY_MARKER).unwrap_or(name),
            };
            if key.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}
