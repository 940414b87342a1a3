//! Startup check for required configuration settings.

use std::collections::HashMap;

use crate::error::CoreError;

/// Somewhere named settings can be looked up.
pub trait SettingsSource {
    fn is_set(&self, name: &str) -> bool;
}

/// Process environment. A variable set to the empty string counts as unset.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSettings;

impl SettingsSource for EnvSettings {
    fn is_set(&self, name: &str) -> bool {
        std::env::var_os(name).is_some_and(|v| !v.is_empty())
    }
}

/// Same rule as [`EnvSettings`]: an empty value counts as unset.
impl SettingsSource for HashMap<String, String> {
    fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(|v| !v.is_empty())
    }
}

/// Fail with [`CoreError::MissingSettings`] naming every entry of
/// `required` that `source` does not define.
///
/// Missing names are reported once each, in the order they were declared.
pub fn check_settings<S>(required: &[&str], source: &S) -> Result<(), CoreError>
where
    S: SettingsSource + ?Sized,
{
    let mut missing: Vec<String> = Vec::new();
    for name in required {
        if !source.is_set(name) && !missing.iter().any(|m| m == name) {
            missing.push((*name).to_string());
        }
    }

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::MissingSettings(missing))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use assert_matches::assert_matches;

    use super::*;

    fn source(names: &[&str]) -> HashMap<String, String> {
        names
            .iter()
            .map(|n| (n.to_string(), "value".to_string()))
            .collect()
    }

    fn missing_of(err: CoreError) -> HashSet<String> {
        match err {
            CoreError::MissingSettings(names) => names.into_iter().collect(),
            other => panic!("expected MissingSettings, got {other:?}"),
        }
    }

    #[test]
    fn all_present_is_ok() {
        let settings = source(&["DATABASE_URL", "PUBLIC_BASE_URL"]);
        assert!(check_settings(&["DATABASE_URL", "PUBLIC_BASE_URL"], &settings).is_ok());
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut settings = source(&["PUBLIC_BASE_URL"]);
        settings.insert("DATABASE_URL".to_string(), String::new());

        let err = check_settings(&["DATABASE_URL", "PUBLIC_BASE_URL"], &settings).unwrap_err();
        assert_eq!(missing_of(err), HashSet::from(["DATABASE_URL".to_string()]));
    }

    #[test]
    fn empty_requirement_list_is_ok() {
        assert!(check_settings(&[], &source(&[])).is_ok());
    }

    #[test]
    fn reports_exactly_the_missing_subset() {
        let settings = source(&["B"]);
        let err = check_settings(&["A", "B", "C"], &settings).unwrap_err();

        let expected: HashSet<String> = ["A", "C"].iter().map(|s| s.to_string()).collect();
        assert_eq!(missing_of(err), expected);
    }

    #[test]
    fn every_missing_subset_is_named() {
        let all = ["A", "B", "C"];
        for mask in 0u8..8 {
            let present: Vec<&str> = all
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, n)| *n)
                .collect();
            let expected: HashSet<String> = all
                .iter()
                .filter(|n| !present.contains(n))
                .map(|n| n.to_string())
                .collect();

            let result = check_settings(&all, &source(&present));

            if expected.is_empty() {
                assert!(result.is_ok(), "mask {mask}");
            } else {
                assert_eq!(missing_of(result.unwrap_err()), expected, "mask {mask}");
            }
        }
    }

    #[test]
    fn duplicates_are_reported_once() {
        let err = check_settings(&["A", "A"], &source(&[])).unwrap_err();
        assert_matches!(err, CoreError::MissingSettings(ref names) if names == &["A".to_string()]);
    }

    #[test]
    fn message_lists_missing_names() {
        let err = check_settings(&["A", "B"], &source(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "The following settings have not been set: A, B"
        );
    }

    #[test]
    fn env_source_treats_empty_as_unset() {
        // Names chosen so they cannot collide with a real environment.
        std::env::set_var("COLLECTIONS_CORE_TEST_EMPTY", "");
        std::env::set_var("COLLECTIONS_CORE_TEST_SET", "1");

        assert!(!EnvSettings.is_set("COLLECTIONS_CORE_TEST_EMPTY"));
        assert!(EnvSettings.is_set("COLLECTIONS_CORE_TEST_SET"));
        assert!(!EnvSettings.is_set("COLLECTIONS_CORE_TEST_NEVER_SET"));
    }
}
