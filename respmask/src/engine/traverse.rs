//! JSON tree traversal for both masking modes.
//!
//! Only `Value::String` leaves are ever replaced. Keys, array lengths and
//! every other value are left exactly as they were.

use serde_json::{Map, Value};

use super::{Mode, RuleSet};

/// Masks every string leaf of `root` selected by `rules` under `mode`.
///
/// Returns the number of leaves replaced. A `root` that is not a JSON object
/// is left untouched and `0` is returned.
///
/// ```rust
/// use respmask::{Mode, RuleSet, mask};
/// use serde_json::json;
///
/// let mut body = json!({"user": {"email": "test@example.com"}, "email": "ops@example.com"});
/// let rules = RuleSet::new().with("user.email", |_: &str| String::from("[hidden]"));
///
/// assert_eq!(mask(&mut body, &rules, Mode::Exact), 1);
/// assert_eq!(body, json!({"user": {"email": "[hidden]"}, "email": "ops@example.com"}));
/// ```
pub fn mask(root: &mut Value, rules: &RuleSet, mode: Mode) -> usize {
    match root {
        Value::Object(map) => mask_object(map, rules, mode),
        _ => 0,
    }
}

/// Same as [`mask`] for a document already known to be an object.
pub fn mask_object(root: &mut Map<String, Value>, rules: &RuleSet, mode: Mode) -> usize {
    if rules.is_empty() {
        return 0;
    }
    match mode {
        Mode::Exact => exact_object(root, "", rules),
        Mode::Recursive => recursive_object(root, rules),
    }
}

fn replace_if_selected(value: &mut Value, selector: &str, rules: &RuleSet) -> usize {
    match (value, rules.get(selector)) {
        (Value::String(text), Some(rule)) => {
            *text = rule.mask(text);
            1
        }
        _ => 0,
    }
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

fn exact_object(map: &mut Map<String, Value>, path: &str, rules: &RuleSet) -> usize {
    map.iter_mut()
        .map(|(key, value)| {
            let path = child_path(path, key);
            replace_if_selected(value, &path, rules) + exact_value(value, &path, rules)
        })
        .sum()
}

fn exact_value(value: &mut Value, path: &str, rules: &RuleSet) -> usize {
    match value {
        Value::Object(map) => exact_object(map, path, rules),
        Value::Array(items) => exact_array(items, path, rules),
        _ => 0,
    }
}

// Array elements inherit the array's own path: indices never become segments.
fn exact_array(items: &mut [Value], path: &str, rules: &RuleSet) -> usize {
    items
        .iter_mut()
        .map(|item| match item {
            Value::String(_) => replace_if_selected(item, path, rules),
            _ => exact_value(item, path, rules),
        })
        .sum()
}

fn recursive_object(map: &mut Map<String, Value>, rules: &RuleSet) -> usize {
    map.iter_mut()
        .map(|(key, value)| replace_if_selected(value, key, rules) + recursive_value(value, rules))
        .sum()
}

fn recursive_value(value: &mut Value, rules: &RuleSet) -> usize {
    match value {
        Value::Object(map) => recursive_object(map, rules),
        Value::Array(items) => items
            .iter_mut()
            .map(|item| recursive_value(item, rules))
            .sum(),
        _ => 0,
    }
}
