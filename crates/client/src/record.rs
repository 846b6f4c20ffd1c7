//! Row records and the narrow typed view the probe reads

use serde_json::Value;

/// A single row as returned by the remote service. The schema belongs to the
/// backend, not to this tool, so rows stay as open JSON objects.
pub type Record = serde_json::Map<String, Value>;

/// The handful of product fields the probe summarizes. Everything is optional
/// because the remote table may not carry these columns at all.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSummary {
    pub id: Option<String>,
    pub name: Option<String>,
    pub category: Option<String>,
    pub is_active: Option<bool>,
}

impl ProductSummary {
    /// Extract the summary fields from a raw row.
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.get("id").and_then(scalar_to_string),
            name: record.get("name").and_then(scalar_to_string),
            category: record.get("category").and_then(scalar_to_string),
            is_active: record.get("is_active").and_then(Value::as_bool),
        }
    }
}

impl std::fmt::Display for ProductSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "id={} name={} category={} active={}",
            self.id.as_deref().unwrap_or("-"),
            self.name.as_deref().unwrap_or("-"),
            self.category.as_deref().unwrap_or("-"),
            self.is_active.map(|a| a.to_string()).as_deref().unwrap_or("-"),
        )
    }
}

// Ids come back as integers or strings depending on the table definition.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Record {
        value.as_object().expect("test row must be an object").clone()
    }

    #[test]
    fn extracts_all_fields() {
        let row = record(json!({
            "id": 7,
            "name": "Widget",
            "category": "tools",
            "is_active": true,
            "price": 9.99
        }));

        let summary = ProductSummary::from_record(&row);
        assert_eq!(summary.id.as_deref(), Some("7"));
        assert_eq!(summary.name.as_deref(), Some("Widget"));
        assert_eq!(summary.category.as_deref(), Some("tools"));
        assert_eq!(summary.is_active, Some(true));
    }

    #[test]
    fn tolerates_string_ids_and_missing_fields() {
        let row = record(json!({ "id": "a1b2", "name": "Widget" }));

        let summary = ProductSummary::from_record(&row);
        assert_eq!(summary.id.as_deref(), Some("a1b2"));
        assert_eq!(summary.category, None);
        assert_eq!(summary.is_active, None);
    }

    #[test]
    fn display_uses_dash_for_missing_values() {
        let row = record(json!({ "name": "Widget" }));
        let summary = ProductSummary::from_record(&row);

        assert_eq!(summary.to_string(), "id=- name=Widget category=- active=-");
    }

    #[test]
    fn ignores_non_scalar_fields() {
        let row = record(json!({ "id": {"nested": 1}, "is_active": "yes" }));

        let summary = ProductSummary::from_record(&row);
        assert_eq!(summary.id, None);
        assert_eq!(summary.is_active, None);
    }
}
