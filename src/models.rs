//! Frontend Models
//!
//! Data structures matching backend payloads. The backend owns all business
//! logic; these records are consumed as-is beyond boundary coercion.

use serde::{Deserialize, Serialize};

/// Stored credential metadata (matches backend).
///
/// Secret values never reach the frontend; only metadata is listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub id: u32,
    pub service_type: String,
    pub credential_type: String,
    pub display_name: String,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub last_used: Option<String>,
}

/// Catalog entry for a supported external service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    pub service_type: String,
    pub display_name: String,
    pub credential_type: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Asset category, referenced (never owned) by asset records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

/// Backend-computed list totals attached to list responses.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AssetSummary {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub total_equity: f64,
}

/// Entity list plus optional summary, as handed to the generic page.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPayload<T> {
    pub items: Vec<T>,
    pub summary: Option<AssetSummary>,
}

// ========================
// Form Schema
// ========================

/// Input kind for a schema-driven form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Select,
    Textarea,
    Checkbox,
}

/// One field descriptor in the create/edit form schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: FieldKind,
    #[serde(default)]
    pub required: bool,
    /// Options for `select` fields: (value, label) pairs.
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Form-field descriptor returned by an entity's schema endpoint, used to
/// render the create/edit modal dynamically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    pub fields: Vec<FormField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_deserializes_with_defaults() {
        let json = r#"{
            "fields": [
                {"name": "name", "label": "Name", "type": "text", "required": true},
                {"name": "category_id", "label": "Category", "type": "select",
                 "options": [{"value": "1", "label": "Vehicles"}]},
                {"name": "current_value", "label": "Current Value", "type": "number"}
            ]
        }"#;
        let schema: FormSchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.fields.len(), 3);
        assert_eq!(schema.fields[0].kind, FieldKind::Text);
        assert!(schema.fields[0].required);
        assert!(!schema.fields[2].required);
        assert_eq!(schema.fields[1].kind, FieldKind::Select);
        assert_eq!(schema.fields[1].options[0].label, "Vehicles");
        assert!(schema.fields[0].options.is_empty());
    }

    #[test]
    fn test_summary_defaults_missing_fields() {
        let summary: AssetSummary = serde_json::from_str(r#"{"count": 2}"#).unwrap();
        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_value, 0.0);
        assert_eq!(summary.total_equity, 0.0);
    }

    #[test]
    fn test_credential_roundtrip() {
        let json = r#"{
            "id": 7,
            "service_type": "plaid",
            "credential_type": "api_key",
            "display_name": "Plaid",
            "is_active": true,
            "created_at": "2024-01-05T12:00:00Z",
            "updated_at": null,
            "last_used": null
        }"#;
        let cred: Credential = serde_json::from_str(json).unwrap();
        assert_eq!(cred.service_type, "plaid");
        assert!(cred.is_active);
        assert!(cred.last_used.is_none());
    }
}
