//! Response field selection via `?fields=` and `?fields!=`.

use serde_json::Value;

/// Top-level keys to keep (`include`) or drop (`exclude`) from a response.
///
/// Both lists are comma-separated; unknown names are ignored. When both are
/// given, `include` is applied first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    include: Option<Vec<String>>,
    exclude: Vec<String>,
}

fn split_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl FieldSelection {
    pub fn new(include: Option<&str>, exclude: Option<&str>) -> Self {
        Self {
            include: include.map(split_names).filter(|names| !names.is_empty()),
            exclude: exclude.map(split_names).unwrap_or_default(),
        }
    }

    pub fn is_noop(&self) -> bool {
        self.include.is_none() && self.exclude.is_empty()
    }

    /// Filter `value` in place. Arrays are filtered item by item; scalars
    /// are left alone.
    pub fn apply(&self, value: &mut Value) {
        if self.is_noop() {
            return;
        }
        match value {
            Value::Array(items) => items.iter_mut().for_each(|item| self.apply(item)),
            Value::Object(map) => {
                if let Some(include) = &self.include {
                    map.retain(|key, _| include.iter().any(|name| name == key));
                }
                for name in &self.exclude {
                    map.remove(name);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn work() -> Value {
        json!({"id": 1, "title": "Metropolis", "slug": "metropolis", "admin_notes": "x"})
    }

    #[test]
    fn include_keeps_only_named_keys() {
        let mut value = work();
        FieldSelection::new(Some("id, title,unknown"), None).apply(&mut value);
        assert_eq!(value, json!({"id": 1, "title": "Metropolis"}));
    }

    #[test]
    fn exclude_drops_named_keys() {
        let mut value = work();
        FieldSelection::new(None, Some("admin_notes,slug")).apply(&mut value);
        assert_eq!(value, json!({"id": 1, "title": "Metropolis"}));
    }

    #[test]
    fn include_then_exclude() {
        let mut value = work();
        FieldSelection::new(Some("id,title"), Some("title")).apply(&mut value);
        assert_eq!(value, json!({"id": 1}));
    }

    #[test]
    fn arrays_are_filtered_per_item() {
        let mut value = json!([work(), work()]);
        FieldSelection::new(Some("id"), None).apply(&mut value);
        assert_eq!(value, json!([{"id": 1}, {"id": 1}]));
    }

    #[test]
    fn empty_parameters_are_a_noop() {
        let selection = FieldSelection::new(Some(" , "), Some(""));
        assert!(selection.is_noop());

        let mut value = work();
        selection.apply(&mut value);
        assert_eq!(value, work());
    }
}
