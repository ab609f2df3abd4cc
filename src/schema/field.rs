// ABOUTME: Defines Field and FieldKind - one named, typed entry of an input schema.
// ABOUTME: Each kind knows how to check a JSON value and describe itself.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Value, json};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9_%+'-]+(?:\.[A-Za-z0-9_%+'-]+)*",
        r"@(?:[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?\.)+",
        r"[A-Za-z]{2,}$",
    ))
    .expect("email pattern is valid")
});

/// The scalar type a field accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    String,
    /// A string shaped like an email address.
    Email,
    Number,
    Integer,
    Boolean,
    /// A string restricted to one of the listed values.
    Enum(Vec<String>),
}

impl FieldKind {
    /// Check a present, non-null value. Returns the reason on mismatch.
    pub(crate) fn check(&self, value: &Value) -> Result<(), String> {
        match self {
            FieldKind::String => match value {
                Value::String(_) => Ok(()),
                other => Err(format!("expected string, received {}", type_name(other))),
            },
            FieldKind::Email => match value {
                Value::String(s) if EMAIL_RE.is_match(s) => Ok(()),
                Value::String(_) => Err("invalid email".to_string()),
                other => Err(format!("expected string, received {}", type_name(other))),
            },
            FieldKind::Number => match value {
                Value::Number(_) => Ok(()),
                other => Err(format!("expected number, received {}", type_name(other))),
            },
            FieldKind::Integer => match value {
                Value::Number(n) if n.is_i64() || n.is_u64() => Ok(()),
                Value::Number(_) => Err("expected integer, received float".to_string()),
                other => Err(format!("expected integer, received {}", type_name(other))),
            },
            FieldKind::Boolean => match value {
                Value::Bool(_) => Ok(()),
                other => Err(format!("expected boolean, received {}", type_name(other))),
            },
            FieldKind::Enum(values) => match value {
                Value::String(s) if values.iter().any(|v| v == s) => Ok(()),
                Value::String(s) => Err(format!(
                    "invalid enum value '{}', expected one of: {}",
                    s,
                    values.join(", ")
                )),
                other => Err(format!("expected string, received {}", type_name(other))),
            },
        }
    }

    fn json_type(&self) -> &'static str {
        match self {
            FieldKind::String | FieldKind::Email | FieldKind::Enum(_) => "string",
            FieldKind::Number => "number",
            FieldKind::Integer => "integer",
            FieldKind::Boolean => "boolean",
        }
    }
}

/// A named field of an input schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    /// Absent and `null` are both accepted when set.
    pub optional: bool,
    pub description: Option<String>,
}

impl Field {
    /// Create a required field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            optional: false,
            description: None,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::String)
    }

    pub fn email(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Email)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Number)
    }

    pub fn integer(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Integer)
    }

    pub fn boolean(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Boolean)
    }

    pub fn one_of<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(name, FieldKind::Enum(values.into_iter().map(Into::into).collect()))
    }

    /// Mark the field as optional (nullable).
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach a human-readable description.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// JSON Schema fragment for this field's `properties` entry.
    pub fn to_json_schema(&self) -> Value {
        let mut prop = serde_json::Map::new();
        if self.optional {
            prop.insert("type".into(), json!([self.kind.json_type(), "null"]));
        } else {
            prop.insert("type".into(), json!(self.kind.json_type()));
        }
        match &self.kind {
            FieldKind::Email => {
                prop.insert("format".into(), json!("email"));
            }
            FieldKind::Enum(values) => {
                prop.insert("enum".into(), json!(values));
            }
            _ => {}
        }
        if let Some(desc) = &self.description {
            prop.insert("description".into(), json!(desc));
        }
        Value::Object(prop)
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
