//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with common type conversions
//! and fallback defaults. Every reader has a `_from` variant that accepts a
//! provider closure so configuration code can be tested without touching the
//! process environment.
//!
//! # Examples
//! ```rust,no_run
//! use ludoteca::config::env::{read_flag, read_u32};
//!
//! let credentials = read_flag("CORS_CREDENTIALS", false);
//! let port = read_u32("PORT", 8080);
//! ```

use std::str::FromStr;

/// Reads a boolean flag from an environment variable.
///
/// Returns `true` for any of the following case-insensitive values:
/// `"1"`, `"true"`, `"yes"`, `"on"`. Surrounding quotes are stripped.
pub fn read_flag(name: &str, default: bool) -> bool {
    read_flag_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a boolean flag using a custom provider function.
///
/// # Example
/// ```rust
/// use ludoteca::config::env::read_flag_from;
///
/// assert!(read_flag_from(|_| Some("yes".into()), "ENABLE_FEATURE", false));
/// assert!(!read_flag_from(|_| None, "ENABLE_FEATURE", false));
/// ```
pub fn read_flag_from<F>(provider: F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match provider(name) {
        Some(v) => {
            let s = v.trim().trim_matches(|c| c == '"' || c == '\'');
            matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
        }
        None => default,
    }
}

/// Reads a `u32` from an environment variable, returning the provided
/// default if the variable is missing or does not parse.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_parsed_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads any `FromStr` value using a custom provider function.
pub fn read_parsed_from<T, F>(provider: F, name: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<T>().ok())
        .unwrap_or(default)
}
