//! Entity Modal Component
//!
//! Create/edit modal driven by a backend-supplied form schema. Field values
//! live in a signal map, so a failed submit leaves everything the user typed
//! in place.

use std::collections::HashMap;

use leptos::prelude::*;
use serde_json::Value;

use crate::models::{FieldKind, FormField, FormSchema};

/// Turn raw field strings into the JSON payload the backend expects.
///
/// Required fields must be non-empty; number fields must parse; empty
/// optional fields are omitted rather than sent as empty strings.
pub fn collect_fields(
    schema: &FormSchema,
    values: &HashMap<String, String>,
) -> Result<serde_json::Map<String, Value>, String> {
    let mut out = serde_json::Map::new();
    for field in &schema.fields {
        let raw = values
            .get(&field.name)
            .map(|s| s.trim().to_string())
            .unwrap_or_default();

        if field.kind == FieldKind::Checkbox {
            out.insert(field.name.clone(), Value::Bool(raw == "true"));
            continue;
        }

        if raw.is_empty() {
            if field.required {
                return Err(format!("{} is required", field.label));
            }
            continue;
        }

        let value = match field.kind {
            FieldKind::Number => {
                let number: f64 = raw
                    .parse()
                    .map_err(|_| format!("{} must be a number", field.label))?;
                serde_json::Number::from_f64(number)
                    .map(Value::Number)
                    .ok_or_else(|| format!("{} must be a finite number", field.label))?
            }
            _ => Value::String(raw),
        };
        out.insert(field.name.clone(), value);
    }
    Ok(out)
}

/// Stringify prefill values for the input map.
fn seed_values(initial: &serde_json::Map<String, Value>) -> HashMap<String, String> {
    initial
        .iter()
        .map(|(name, value)| {
            let text = match value {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                _ => String::new(),
            };
            (name.clone(), text)
        })
        .collect()
}

/// Schema-driven create/edit form in a modal overlay.
#[component]
pub fn EntityModal(
    schema: FormSchema,
    #[prop(into)] title: String,
    initial: serde_json::Map<String, Value>,
    /// Submit error from the caller (kept visible, form state untouched).
    error: ReadSignal<Option<String>>,
    submitting: ReadSignal<bool>,
    #[prop(into)] on_submit: Callback<serde_json::Map<String, Value>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let values = RwSignal::new(seed_values(&initial));
    let local_error = RwSignal::new(None::<String>);
    let shown_error = move || local_error.get().or_else(|| error.get());

    let schema_for_submit = schema.clone();
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match collect_fields(&schema_for_submit, &values.get_untracked()) {
            Ok(fields) => {
                local_error.set(None);
                on_submit.run(fields);
            }
            Err(message) => local_error.set(Some(message)),
        }
    };

    view! {
        <div class="modal-overlay">
            <div class="modal">
                <div class="modal-header">
                    <span class="modal-title">{title}</span>
                    <button class="modal-close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <form class="modal-form" on:submit=submit>
                    {schema
                        .fields
                        .iter()
                        .cloned()
                        .map(|field| field_input(field, values))
                        .collect_view()}

                    {move || shown_error().map(|message| view! {
                        <div class="form-error">{message}</div>
                    })}

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="save-btn" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Saving..." } else { "Save" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_input(field: FormField, values: RwSignal<HashMap<String, String>>) -> impl IntoView {
    let name = field.name.clone();
    let read_name = name.clone();
    let current = move || {
        values.with(|map| map.get(&read_name).cloned().unwrap_or_default())
    };
    let write_name = name.clone();
    let set_current = move |text: String| {
        values.update(|map| {
            map.insert(write_name.clone(), text);
        });
    };

    let label = if field.required {
        format!("{} *", field.label)
    } else {
        field.label.clone()
    };
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let input = match field.kind {
        FieldKind::Textarea => view! {
            <textarea
                placeholder=placeholder
                prop:value=current
                on:input=move |ev| set_current(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::Select => {
            let options = field.options.clone();
            view! {
                <select
                    prop:value=current
                    on:change=move |ev| set_current(event_target_value(&ev))
                >
                    <option value="">"Select..."</option>
                    {options
                        .into_iter()
                        .map(|opt| view! { <option value=opt.value>{opt.label}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        FieldKind::Checkbox => view! {
            <input
                type="checkbox"
                prop:checked=move || current() == "true"
                on:change=move |ev| set_current(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        kind => {
            let input_type = match kind {
                FieldKind::Number => "number",
                FieldKind::Date => "date",
                _ => "text",
            };
            view! {
                <input
                    type=input_type
                    step=(kind == FieldKind::Number).then_some("any")
                    placeholder=placeholder
                    prop:value=current
                    on:input=move |ev| set_current(event_target_value(&ev))
                />
            }
            .into_any()
        }
    };

    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            {input}
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FieldOption, FormSchema};

    fn schema() -> FormSchema {
        serde_json::from_str(
            r#"{
                "fields": [
                    {"name": "name", "label": "Name", "type": "text", "required": true},
                    {"name": "current_value", "label": "Current Value", "type": "number"},
                    {"name": "notes", "label": "Notes", "type": "textarea"},
                    {"name": "insured", "label": "Insured", "type": "checkbox"}
                ]
            }"#,
        )
        .unwrap()
    }

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_collect_coerces_numbers() {
        let fields = collect_fields(
            &schema(),
            &values(&[("name", "Truck"), ("current_value", "15000.5")]),
        )
        .unwrap();
        assert_eq!(fields["name"], "Truck");
        assert_eq!(fields["current_value"], 15000.5);
    }

    #[test]
    fn test_collect_rejects_missing_required() {
        let err = collect_fields(&schema(), &values(&[("current_value", "5")])).unwrap_err();
        assert_eq!(err, "Name is required");
    }

    #[test]
    fn test_collect_rejects_bad_number() {
        let err = collect_fields(
            &schema(),
            &values(&[("name", "Truck"), ("current_value", "lots")]),
        )
        .unwrap_err();
        assert_eq!(err, "Current Value must be a number");
    }

    #[test]
    fn test_collect_omits_empty_optionals() {
        let fields =
            collect_fields(&schema(), &values(&[("name", "Truck"), ("notes", "  ")])).unwrap();
        assert!(!fields.contains_key("notes"));
        // Checkboxes always submit an explicit boolean.
        assert_eq!(fields["insured"], false);
    }

    #[test]
    fn test_seed_values_stringifies_prefill() {
        let mut initial = serde_json::Map::new();
        initial.insert("name".into(), Value::String("Truck".into()));
        initial.insert("current_value".into(), serde_json::json!(800.0));
        initial.insert("insured".into(), Value::Bool(true));
        let seeded = seed_values(&initial);
        assert_eq!(seeded["name"], "Truck");
        assert_eq!(seeded["insured"], "true");
        assert!(seeded["current_value"].parse::<f64>().unwrap() == 800.0);
    }
}
