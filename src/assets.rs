//! Asset Records
//!
//! Raw asset payloads and their typed view models. The backend sends numeric
//! fields either as JSON numbers or as string-encoded decimals; everything is
//! coerced at this boundary so renderers only ever see `f64`.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::models::Category;

/// Asset record as it arrives over the wire.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawAsset {
    pub id: u32,
    pub name: String,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub current_value: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub purchase_price: Option<f64>,
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub amount_owed: Option<f64>,
    /// Backend-computed: current value minus owed.
    #[serde(default, deserialize_with = "de_lenient_f64")]
    pub equity: Option<f64>,
    #[serde(default)]
    pub purchase_date: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub custom_fields: BTreeMap<String, Value>,
}

/// Typed view model handed to renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetRecord {
    pub id: u32,
    pub name: String,
    /// Load-bearing: defaults to 0.0 when the backend omits it.
    pub current_value: f64,
    pub purchase_price: Option<f64>,
    pub amount_owed: Option<f64>,
    pub equity: f64,
    pub purchase_date: Option<String>,
    pub notes: Option<String>,
    pub category: Option<Category>,
    pub custom_fields: BTreeMap<String, Value>,
}

/// Normalize a raw payload into the view model.
///
/// Equity is backend-computed and passed through; when the payload omits it,
/// it is derived as `current_value - owed` for display only.
pub fn transform_asset(raw: RawAsset) -> AssetRecord {
    let current_value = raw.current_value.unwrap_or(0.0);
    let equity = raw
        .equity
        .unwrap_or_else(|| current_value - raw.amount_owed.unwrap_or(0.0));
    AssetRecord {
        id: raw.id,
        name: raw.name,
        current_value,
        purchase_price: raw.purchase_price,
        amount_owed: raw.amount_owed,
        equity,
        purchase_date: raw.purchase_date,
        notes: raw.notes,
        category: raw.category,
        custom_fields: raw.custom_fields,
    }
}

/// Accept a number, a string-encoded number, or null.
///
/// Unparseable strings become `None` rather than failing the whole list.
fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Seed for the edit modal: current field values keyed by schema field name.
pub fn edit_values(asset: &AssetRecord) -> serde_json::Map<String, Value> {
    let mut map = serde_json::Map::new();
    map.insert("name".into(), Value::String(asset.name.clone()));
    map.insert("current_value".into(), json_number(asset.current_value));
    if let Some(p) = asset.purchase_price {
        map.insert("purchase_price".into(), json_number(p));
    }
    if let Some(o) = asset.amount_owed {
        map.insert("amount_owed".into(), json_number(o));
    }
    if let Some(d) = &asset.purchase_date {
        map.insert("purchase_date".into(), Value::String(d.clone()));
    }
    if let Some(n) = &asset.notes {
        map.insert("notes".into(), Value::String(n.clone()));
    }
    if let Some(c) = &asset.category {
        map.insert("category_id".into(), Value::String(c.id.to_string()));
    }
    for (k, v) in &asset.custom_fields {
        map.insert(k.clone(), v.clone());
    }
    map
}

fn json_number(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawAsset {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_string_numbers_become_f64() {
        let raw = parse(
            r#"{"id": 1, "name": "Truck", "current_value": "15000.50",
                "purchase_price": 20000, "equity": "9000"}"#,
        );
        let asset = transform_asset(raw);
        assert_eq!(asset.current_value, 15000.50);
        assert_eq!(asset.purchase_price, Some(20000.0));
        assert_eq!(asset.equity, 9000.0);
    }

    #[test]
    fn test_absent_optionals_stay_none() {
        let raw = parse(r#"{"id": 2, "name": "Watch", "current_value": 800}"#);
        assert_eq!(raw.purchase_price, None);
        assert_eq!(raw.amount_owed, None);
        let asset = transform_asset(raw);
        assert_eq!(asset.purchase_price, None);
        assert_eq!(asset.amount_owed, None);
    }

    #[test]
    fn test_current_value_is_load_bearing() {
        let raw = parse(r#"{"id": 3, "name": "Misc"}"#);
        let asset = transform_asset(raw);
        assert_eq!(asset.current_value, 0.0);
        assert_eq!(asset.equity, 0.0);
    }

    #[test]
    fn test_equity_derived_only_when_absent() {
        let raw = parse(
            r#"{"id": 4, "name": "Boat", "current_value": 30000, "amount_owed": 12000}"#,
        );
        let asset = transform_asset(raw);
        assert_eq!(asset.equity, 18000.0);

        // Backend-provided equity is passed through untouched.
        let raw = parse(
            r#"{"id": 5, "name": "Boat", "current_value": 30000,
                "amount_owed": 12000, "equity": 17500}"#,
        );
        assert_eq!(transform_asset(raw).equity, 17500.0);
    }

    #[test]
    fn test_garbage_string_number_degrades_to_none() {
        let raw = parse(r#"{"id": 6, "name": "X", "purchase_price": "n/a"}"#);
        assert_eq!(raw.purchase_price, None);
    }

    #[test]
    fn test_category_and_custom_fields_pass_through() {
        let raw = parse(
            r##"{"id": 7, "name": "Trailer", "current_value": 5000,
                "category": {"id": 3, "name": "Vehicles", "color": "#f97316"},
                "custom_fields": {"vin": "ABC123"}}"##,
        );
        let asset = transform_asset(raw);
        let cat = asset.category.as_ref().unwrap();
        assert_eq!(cat.name, "Vehicles");
        assert_eq!(cat.color.as_deref(), Some("#f97316"));
        assert_eq!(asset.custom_fields["vin"], "ABC123");
    }

    #[test]
    fn test_edit_values_skips_absent_fields() {
        let raw = parse(r#"{"id": 8, "name": "Watch", "current_value": 800}"#);
        let values = edit_values(&transform_asset(raw));
        assert_eq!(values["name"], "Watch");
        assert_eq!(values["current_value"], 800.0);
        assert!(!values.contains_key("purchase_price"));
        assert!(!values.contains_key("notes"));
    }
}
