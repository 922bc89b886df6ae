//! Schema description values
//!
//! A [`Schema`] is an ordinary value built at startup, mirroring the shape
//! the upstream model is instructed to produce. The same value drives both
//! validation ([`crate::validate`]) and the JSON Schema handed to the model
//! as an output or tool-argument contract (`to_json_schema`).

use serde_json::{Value, json};

/// Declarative description of an expected payload shape
#[derive(Debug, Clone, PartialEq)]
pub enum Schema {
    /// Any string
    String,
    /// A number, optionally bounded (inclusive)
    Number {
        /// Inclusive lower bound
        min: Option<f64>,
        /// Inclusive upper bound
        max: Option<f64>,
    },
    /// An integer
    Integer,
    /// A boolean
    Boolean,
    /// A string restricted to a fixed set of variants
    Enum(Vec<&'static str>),
    /// A homogeneous array
    Array {
        /// Schema every item must conform to
        items: Box<Schema>,
        /// Minimum number of items
        min_items: usize,
    },
    /// An object with declared fields; undeclared fields are dropped
    Object(Vec<Field>),
}

impl Schema {
    /// Unbounded number
    pub fn number() -> Self {
        Self::Number {
            min: None,
            max: None,
        }
    }

    /// Number bounded to `[min, max]`
    pub fn number_in(min: f64, max: f64) -> Self {
        Self::Number {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Array of `items` with no minimum length
    pub fn array(items: Schema) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items: 0,
        }
    }

    /// Array of `items` requiring at least `min_items` entries
    pub fn array_min(items: Schema, min_items: usize) -> Self {
        Self::Array {
            items: Box::new(items),
            min_items,
        }
    }

    /// Short human-readable name used in error messages
    pub fn type_name(&self) -> String {
        match self {
            Self::String => "string".to_string(),
            Self::Number {
                min: Some(min),
                max: Some(max),
            } => format!("number in [{min}, {max}]"),
            Self::Number { .. } => "number".to_string(),
            Self::Integer => "integer".to_string(),
            Self::Boolean => "boolean".to_string(),
            Self::Enum(variants) => format!("one of [{}]", variants.join(", ")),
            Self::Array { .. } => "array".to_string(),
            Self::Object(_) => "object".to_string(),
        }
    }

    /// Render as a JSON Schema value for the model-invocation boundary
    pub fn to_json_schema(&self) -> Value {
        match self {
            Self::String => json!({ "type": "string" }),
            Self::Number { min, max } => {
                let mut out = json!({ "type": "number" });
                if let Some(min) = min {
                    out["minimum"] = json!(min);
                }
                if let Some(max) = max {
                    out["maximum"] = json!(max);
                }
                out
            }
            Self::Integer => json!({ "type": "integer" }),
            Self::Boolean => json!({ "type": "boolean" }),
            Self::Enum(variants) => json!({ "type": "string", "enum": variants }),
            Self::Array { items, min_items } => {
                let mut out = json!({ "type": "array", "items": items.to_json_schema() });
                if *min_items > 0 {
                    out["minItems"] = json!(min_items);
                }
                out
            }
            Self::Object(fields) => {
                let mut properties = serde_json::Map::new();
                let mut required = Vec::new();
                for field in fields {
                    let mut prop = field.schema.to_json_schema();
                    if let Some(description) = &field.description {
                        prop["description"] = json!(description);
                    }
                    properties.insert(field.name.to_string(), prop);
                    if field.required {
                        required.push(field.name);
                    }
                }
                json!({
                    "type": "object",
                    "properties": properties,
                    "required": required,
                })
            }
        }
    }
}

/// One declared field of an object schema
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Field name as it appears in the payload
    pub name: &'static str,
    /// Alternate names accepted at the validation boundary
    pub aliases: Vec<&'static str>,
    /// Shape the field value must conform to
    pub schema: Schema,
    /// Whether the field must be present
    pub required: bool,
    /// Default inserted when an optional field is absent
    pub default: Option<Value>,
    /// Description surfaced in the JSON Schema handed to the model
    pub description: Option<String>,
}

impl Field {
    /// A required field
    pub fn required(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            schema,
            required: true,
            default: None,
            description: None,
        }
    }

    /// An optional field with a declared default
    pub fn optional(name: &'static str, schema: Schema, default: Value) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            schema,
            required: false,
            default: Some(default),
            description: None,
        }
    }

    /// An optional field that is simply omitted when absent
    pub fn omittable(name: &'static str, schema: Schema) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            schema,
            required: false,
            default: None,
            description: None,
        }
    }

    /// Accept `alias` as an alternate spelling of this field
    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    /// Attach a description for the model-facing JSON Schema
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
