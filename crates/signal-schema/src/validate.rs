//! Validation of raw payloads against a [`Schema`]

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::schema::Schema;

/// Validate `payload` against `schema`
///
/// Returns a value conforming exactly to the schema: declared defaults
/// filled in, numeric strings coerced, undeclared fields dropped. A payload
/// that already conforms round-trips unchanged.
pub fn validate(schema: &Schema, payload: &Value) -> Result<Value, ValidationError> {
    validate_at(schema, payload, "")
}

/// Validate `payload` against `schema`, then decode it into its typed form
pub fn parse_validated<T: DeserializeOwned>(
    schema: &Schema,
    payload: &Value,
) -> Result<T, ValidationError> {
    let validated = validate(schema, payload)?;
    serde_json::from_value(validated).map_err(|e| ValidationError::Decode(e.to_string()))
}

fn validate_at(schema: &Schema, value: &Value, path: &str) -> Result<Value, ValidationError> {
    match schema {
        Schema::String => match value {
            Value::String(s) => Ok(Value::String(s.clone())),
            other => Err(mismatch(path, schema, other)),
        },

        Schema::Number { min, max } => {
            let number = coerce_number(value).ok_or_else(|| mismatch(path, schema, value))?;
            if min.is_some_and(|min| number < min) || max.is_some_and(|max| number > max) {
                return Err(ValidationError::OutOfRange {
                    path: path.to_string(),
                    expected: schema.type_name(),
                    actual: number.to_string(),
                });
            }
            // Preserve the original representation for already-numeric input
            // so conforming payloads round-trip bit-for-bit.
            match value {
                Value::Number(n) => Ok(Value::Number(n.clone())),
                _ => serde_json::Number::from_f64(number)
                    .map(Value::Number)
                    .ok_or_else(|| mismatch(path, schema, value)),
            }
        }

        Schema::Integer => match value {
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Value::Number(n.clone())),
            Value::String(s) => s
                .trim()
                .parse::<i64>()
                .map(Value::from)
                .map_err(|_| mismatch(path, schema, value)),
            other => Err(mismatch(path, schema, other)),
        },

        Schema::Boolean => match value {
            Value::Bool(b) => Ok(Value::Bool(*b)),
            other => Err(mismatch(path, schema, other)),
        },

        Schema::Enum(variants) => match value {
            Value::String(s) if variants.contains(&s.as_str()) => Ok(Value::String(s.clone())),
            other => Err(ValidationError::InvalidVariant {
                path: path.to_string(),
                expected: variants.join(", "),
                actual: describe_value(other),
            }),
        },

        Schema::Array { items, min_items } => {
            let Value::Array(elements) = value else {
                return Err(mismatch(path, schema, value));
            };
            if elements.len() < *min_items {
                return Err(ValidationError::TooFewItems {
                    path: path.to_string(),
                    min: *min_items,
                    len: elements.len(),
                });
            }
            let mut out = Vec::with_capacity(elements.len());
            for (index, element) in elements.iter().enumerate() {
                out.push(validate_at(items, element, &format!("{path}[{index}]"))?);
            }
            Ok(Value::Array(out))
        }

        Schema::Object(fields) => {
            let Value::Object(map) = value else {
                return Err(mismatch(path, schema, value));
            };
            let mut out = Map::new();
            for field in fields {
                let field_path = child_path(path, field.name);
                let found = map
                    .get(field.name)
                    .or_else(|| field.aliases.iter().find_map(|alias| map.get(*alias)));
                match found {
                    Some(raw) => {
                        out.insert(
                            field.name.to_string(),
                            validate_at(&field.schema, raw, &field_path)?,
                        );
                    }
                    None if field.required => {
                        return Err(ValidationError::MissingField {
                            path: field_path,
                            expected: field.schema.type_name(),
                        });
                    }
                    None => {
                        if let Some(default) = &field.default {
                            out.insert(field.name.to_string(), default.clone());
                        }
                    }
                }
            }
            Ok(Value::Object(out))
        }
    }
}

fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn mismatch(path: &str, schema: &Schema, value: &Value) -> ValidationError {
    ValidationError::TypeMismatch {
        path: path.to_string(),
        expected: schema.type_name(),
        actual: describe_value(value),
    }
}

fn child_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{base}.{name}")
    }
}

fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
