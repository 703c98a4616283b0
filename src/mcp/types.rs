use serde::Serialize;
use serde_json::{Map, Value};

/// Arguments of a single tool invocation
pub type ToolArguments = Map<String, Value>;

/// Request to call a registered tool
#[derive(Debug, Clone)]
pub struct ToolCallRequest {
    pub name: String,
    pub arguments: ToolArguments,
}

/// Result of a tool call: an ordered list of text blocks
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolCallResponse {
    pub content: Vec<ToolContent>,
}

impl ToolCallResponse {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
        }
    }

    /// Concatenated text of all blocks
    pub fn joined_text(&self) -> String {
        self.content
            .iter()
            .map(|c| match c {
                ToolContent::Text { text } => text.as_str(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    Text { text: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_content_wire_shape() {
        let response = ToolCallResponse::text("[]");
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "content": [{ "type": "text", "text": "[]" }] })
        );
    }
}
