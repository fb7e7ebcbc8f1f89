//! Environment variable access.

use std::collections::BTreeMap;
use std::ffi::OsString;

/// Read an environment variable, treating an empty value the same as unset.
///
/// Non-UTF-8 values are logged and treated as unset.
#[must_use]
pub fn non_empty_env(var: &str) -> Option<String> {
    match std::env::var(var) {
        Ok(v) if v.is_empty() => None,
        Ok(v) => Some(v),
        Err(std::env::VarError::NotPresent) => None,
        Err(std::env::VarError::NotUnicode(raw)) => {
            tracing::warn!(var, value = ?raw, "env var is not valid UTF-8, ignoring");
            None
        },
    }
}

/// Snapshot of the whole process environment, keyed by variable name.
///
/// Values are taken verbatim, so `FOO=a=b` yields `FOO -> "a=b"`.
#[must_use]
pub fn environment_snapshot() -> BTreeMap<String, String> {
    snapshot_from(std::env::vars_os())
}

/// Build an environment snapshot from raw name/value pairs.
///
/// Invalid UTF-8 is replaced rather than rejected so a single odd variable
/// cannot hide the rest.
pub fn snapshot_from<I>(vars: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    vars.into_iter()
        .map(|(name, value)| {
            (name.to_string_lossy().into_owned(), value.to_string_lossy().into_owned())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(name: &str, value: &str) -> (OsString, OsString) {
        (OsString::from(name), OsString::from(value))
    }

    #[test]
    fn test_snapshot_keeps_equals_in_value() {
        let env = snapshot_from(vec![pair("FOO", "a=b"), pair("EMPTY", "")]);
        assert_eq!(env.get("FOO").map(String::as_str), Some("a=b"));
        assert_eq!(env.get("EMPTY").map(String::as_str), Some(""));
    }

    #[test]
    fn test_snapshot_sorted_by_name() {
        let env = snapshot_from(vec![pair("ZETA", "1"), pair("ALPHA", "2")]);
        let names: Vec<&str> = env.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["ALPHA", "ZETA"]);
    }

    #[test]
    fn test_process_snapshot_matches_vars() {
        let env = environment_snapshot();
        for (name, value) in std::env::vars() {
            assert_eq!(env.get(&name), Some(&value), "missing {name}");
        }
    }

    #[test]
    fn test_non_empty_env_missing_var() {
        assert_eq!(non_empty_env("GUESTBOOK_TEST_DEFINITELY_UNSET_41823"), None);
    }
}
