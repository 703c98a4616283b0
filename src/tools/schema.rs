use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// A single named input parameter of a tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
    pub required: bool,
}

impl ParamSpec {
    pub fn string(name: &str, description: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            param_type: "string".to_string(),
            description: description.to_string(),
            required,
        }
    }
}

/// Ordered input parameters of a tool
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputSchema {
    pub params: Vec<ParamSpec>,
}

impl InputSchema {
    pub fn new(params: Vec<ParamSpec>) -> Self {
        Self { params }
    }

    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.params
            .iter()
            .filter(|p| p.required)
            .map(|p| p.name.as_str())
    }

    /// Render as a JSON Schema object, as advertised to MCP clients
    pub fn to_json_schema(&self) -> Map<String, Value> {
        let mut properties = Map::new();
        for param in &self.params {
            properties.insert(
                param.name.clone(),
                json!({
                    "type": param.param_type,
                    "description": param.description,
                }),
            );
        }

        let mut schema = Map::new();
        schema.insert("type".to_string(), json!("object"));
        schema.insert("properties".to_string(), Value::Object(properties));
        schema.insert(
            "required".to_string(),
            Value::Array(self.required().map(|n| json!(n)).collect()),
        );
        schema
    }
}

/// Represents a tool definition; immutable once registered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

impl ToolDefinition {
    pub fn new(name: &str, description: &str, input_schema: InputSchema) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }

    /// Listing entry in the `tools/list` wire shape
    pub fn to_listing(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "inputSchema": Value::Object(self.input_schema.to_json_schema()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_shape() {
        let schema = InputSchema::new(vec![
            ParamSpec::string("refund_id", "ID of the refund", true),
            ParamSpec::string("email", "Override email", false),
        ]);

        assert_eq!(
            Value::Object(schema.to_json_schema()),
            json!({
                "type": "object",
                "properties": {
                    "refund_id": { "type": "string", "description": "ID of the refund" },
                    "email": { "type": "string", "description": "Override email" },
                },
                "required": ["refund_id"],
            })
        );
    }

    #[test]
    fn test_empty_required_list_is_present() {
        let schema = InputSchema::new(vec![ParamSpec::string("email", "filter", false)]);
        assert_eq!(schema.to_json_schema()["required"], json!([]));
    }
}
