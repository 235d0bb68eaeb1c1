//! Check decoded tool arguments against the tool's JSON Schema before execution.

use crate::error::ParleyError;

use super::arguments::ToolArguments;
use super::types::ToolParameters;

/// Validate arguments against a tool's parameter schema.
///
/// Top-level only: the object type, required field presence, and the
/// declared type of each supplied property. Unknown extra fields pass.
pub fn validate_arguments(args: &ToolArguments, params: &ToolParameters) -> Result<(), ParleyError> {
    check(args.raw(), &params.schema).map_err(ParleyError::InvalidArgument)
}

fn check(args: &serde_json::Value, schema: &serde_json::Value) -> Result<(), String> {
    if schema.get("type").and_then(|v| v.as_str()) == Some("object") && !args.is_object() {
        return Err(format!(
            "expected object arguments, got {}",
            json_type_name(args)
        ));
    }

    let Some(obj) = args.as_object() else {
        return Ok(());
    };

    if let Some(required) = schema.get("required").and_then(|v| v.as_array()) {
        for name in required.iter().filter_map(|f| f.as_str()) {
            if !obj.contains_key(name) {
                return Err(format!("missing required field '{name}'"));
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(|v| v.as_object()) {
        for (key, value) in obj {
            let expected = properties
                .get(key)
                .and_then(|p| p.get("type"))
                .and_then(|t| t.as_str());
            if let Some(expected_type) = expected {
                if !value_matches_type(value, expected_type) {
                    return Err(format!(
                        "field '{}' expected type '{}', got {}",
                        key,
                        expected_type,
                        json_type_name(value)
                    ));
                }
            }
        }
    }

    Ok(())
}

fn value_matches_type(value: &serde_json::Value, expected: &str) -> bool {
    match expected {
        // Optional fields are routinely sent as explicit nulls.
        _ if value.is_null() => true,
        "string" => value.is_string(),
        "number" => value.is_number(),
        "integer" => value.is_i64() || value.is_u64(),
        "boolean" => value.is_boolean(),
        "object" => value.is_object(),
        "array" => value.is_array(),
        _ => true,
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn city_params() -> ToolParameters {
        ToolParameters::object()
            .string("city", "The city name", true)
            .build()
    }

    fn validate(args: serde_json::Value, params: &ToolParameters) -> Result<(), String> {
        validate_arguments(&ToolArguments::new(args), params).map_err(|e| e.to_string())
    }

    #[test]
    fn rejects_non_object_args() {
        let err = validate(json!("London"), &city_params()).unwrap_err();
        assert!(err.contains("expected object arguments, got string"), "{err}");
    }

    #[test]
    fn rejects_missing_required_field() {
        let err = validate(json!({}), &city_params()).unwrap_err();
        assert!(err.contains("missing required field 'city'"), "{err}");
    }

    #[test]
    fn rejects_wrong_property_type() {
        let err = validate(json!({"city": 42}), &city_params()).unwrap_err();
        assert!(err.contains("field 'city' expected type 'string', got number"), "{err}");
    }

    #[test]
    fn accepts_valid_and_extra_fields() {
        assert!(validate(json!({"city": "Paris", "units": "metric"}), &city_params()).is_ok());
    }

    #[test]
    fn accepts_null_for_optional_field() {
        let params = ToolParameters::object()
            .string("topic", "Optional topic", false)
            .build();
        assert!(validate(json!({"topic": null}), &params).is_ok());
        assert!(validate(json!({}), &params).is_ok());
    }

    #[test]
    fn empty_schema_accepts_anything() {
        assert!(validate(json!({"anything": 1}), &ToolParameters::empty()).is_ok());
    }
}
