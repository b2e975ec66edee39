use serde_json::{Map, Value};

pub(crate) const NOT_AVAILABLE: &str = "N/A";
pub(crate) const NOT_SET: &str = "[not set]";

pub(crate) fn or_na(value: Option<&str>) -> &str {
    value.unwrap_or(NOT_AVAILABLE)
}

/// Strings print bare; everything else prints as compact JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => NOT_AVAILABLE.to_string(),
        other => other.to_string(),
    }
}

pub(crate) fn metadata_text(metadata: &Map<String, Value>) -> String {
    Value::Object(metadata.clone()).to_string()
}

pub(crate) fn print_banner(title: &str) {
    println!();
    println!("{}", "=".repeat(50));
    println!("{title}");
    println!("{}", "=".repeat(50));
}

/// One line per metadata key present on either side, in key order.
pub(crate) fn metadata_changes(
    before: Option<&Map<String, Value>>,
    after: &Map<String, Value>,
) -> Vec<String> {
    let empty = Map::new();
    let before = before.unwrap_or(&empty);
    let mut keys: Vec<&String> = before.keys().chain(after.keys()).collect();
    keys.sort();
    keys.dedup();
    keys.into_iter()
        .map(|key| {
            let old = before
                .get(key)
                .map(value_text)
                .unwrap_or_else(|| NOT_SET.to_string());
            let new = after
                .get(key)
                .map(value_text)
                .unwrap_or_else(|| NOT_SET.to_string());
            if old == new {
                format!("{key}: '{old}' (unchanged)")
            } else {
                format!("{key}: '{old}' → '{new}'")
            }
        })
        .collect()
}
