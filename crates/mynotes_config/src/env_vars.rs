//! Environment variable handling for the My Notes service.
//!
//! Secrets never live in config files. A config value equal to
//! `secret_from_env` is replaced at load time with the value of
//! `MYNOTES_SECRET_<PATH>` or, failing that, a legacy variable name.

use crate::models::SECRET_FROM_ENV;
use serde_json::Value;
use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "MYNOTES";

/// The prefix for secret environment variables
pub const SECRET_PREFIX: &str = "MYNOTES_SECRET";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// The separator for secret environment variables
pub const SECRET_SEPARATOR: &str = "_";

/// Variable names the push keys were historically read from.
const LEGACY_ALIASES: &[(&str, &str)] = &[
    ("push.public_key", "VAPID_PUBLIC_KEY"),
    ("push.private_key", "VAPID_PRIVATE_KEY"),
];

/// Get the prefix for configuration environment variables
pub fn get_config_prefix() -> String {
    env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a secret path to an environment variable name
///
/// `push.private_key` becomes `MYNOTES_SECRET_PUSH_PRIVATE_KEY`.
pub fn secret_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', SECRET_SEPARATOR);
    format!("{}{}{}", SECRET_PREFIX, SECRET_SEPARATOR, path).to_uppercase()
}

/// Legacy variable name for a secret path, if one exists.
pub fn legacy_secret_env_var(path: &str) -> Option<&'static str> {
    LEGACY_ALIASES
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, var)| *var)
}

/// Resolve a secret path through `lookup`, preferring the prefixed name.
pub fn resolve_secret<F>(path: &str, lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(value) = lookup(&secret_path_to_env_var(path)) {
        return Some(value);
    }
    legacy_secret_env_var(path).and_then(lookup)
}

/// Replace every `secret_from_env` string in `value` using `lookup`.
///
/// Returns the paths that could not be resolved; those keep the marker.
pub fn inject_secrets<F>(value: &mut Value, lookup: F) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    fn walk<F>(path: &mut Vec<String>, obj: &mut Value, lookup: &F, missing: &mut Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        match obj {
            Value::Object(map) => {
                for (k, v) in map.iter_mut() {
                    path.push(k.clone());
                    walk(path, v, lookup, missing);
                    path.pop();
                }
            }
            Value::String(s) if s.as_str() == SECRET_FROM_ENV => {
                let path_str = path.join(".");
                match resolve_secret(&path_str, lookup) {
                    Some(env_val) => *s = env_val,
                    None => missing.push(path_str),
                }
            }
            _ => {}
        }
    }

    let mut missing = Vec::new();
    walk(&mut Vec::new(), value, &lookup, &mut missing);
    missing
}

/// `lookup` implementation backed by the process environment.
pub fn process_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.is_empty())
}
