// ABOUTME: Defines InputSchema - the flat field map a tool declares for its input.
// ABOUTME: Validation yields a normalized JSON object or a SchemaValidationError.

use serde_json::{Map, Value, json};

use super::Field;
use super::field::type_name;
use crate::error::{FieldIssue, SchemaValidationError};

/// Declarative description of a tool's input.
///
/// Fields keep their declaration order, which is also the order of issues
/// reported by [`InputSchema::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSchema {
    fields: Vec<Field>,
}

impl InputSchema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field. A later field with the same name replaces the earlier one.
    pub fn field(mut self, field: Field) -> Self {
        self.fields.retain(|f| f.name != field.name);
        self.fields.push(field);
        self
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Validate untrusted input.
    ///
    /// Objects are checked field by field; unknown keys are dropped and absent
    /// optional fields are filled with `null`. A bare non-object value is bound
    /// to the only field when the schema declares exactly one.
    pub fn validate(&self, raw: &Value) -> Result<Map<String, Value>, SchemaValidationError> {
        let object = match raw {
            Value::Object(map) => map,
            scalar => match self.fields.as_slice() {
                [only] => return self.validate_fields(raw, &single(&only.name, scalar)),
                _ => {
                    return Err(self.reject(
                        raw,
                        vec![FieldIssue::new(
                            "",
                            format!("expected object, received {}", type_name(scalar)),
                        )],
                    ));
                }
            },
        };
        self.validate_fields(raw, object)
    }

    fn validate_fields(
        &self,
        raw: &Value,
        object: &Map<String, Value>,
    ) -> Result<Map<String, Value>, SchemaValidationError> {
        let mut parsed = Map::new();
        let mut issues = Vec::new();

        for field in &self.fields {
            match object.get(&field.name) {
                None | Some(Value::Null) if field.optional => {
                    parsed.insert(field.name.clone(), Value::Null);
                }
                None => issues.push(FieldIssue::new(&field.name, "required")),
                Some(value) => match field.kind.check(value) {
                    Ok(()) => {
                        parsed.insert(field.name.clone(), value.clone());
                    }
                    Err(reason) => issues.push(FieldIssue::new(&field.name, reason)),
                },
            }
        }

        if issues.is_empty() {
            Ok(parsed)
        } else {
            Err(self.reject(raw, issues))
        }
    }

    fn reject(&self, raw: &Value, issues: Vec<FieldIssue>) -> SchemaValidationError {
        SchemaValidationError {
            input: serde_json::to_string(raw).unwrap_or_else(|_| raw.to_string()),
            issues,
        }
    }

    /// Export as a JSON Schema object for model function calling.
    pub fn to_json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.clone(), f.to_json_schema()))
            .collect();
        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| !f.optional)
            .map(|f| f.name.as_str())
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
            "additionalProperties": false
        })
    }
}

fn single(name: &str, value: &Value) -> Map<String, Value> {
    let mut map = Map::new();
    map.insert(name.to_string(), value.clone());
    map
}
