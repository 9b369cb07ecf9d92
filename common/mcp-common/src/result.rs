//! Result helpers for MCP tool responses

use rmcp::{
    model::{CallToolResult, Content},
    ErrorData as McpError,
};
use serde::Serialize;

/// Serialize `data` as pretty JSON and wrap it in a successful tool result
///
/// Serialization failures surface as an internal error.
pub fn json_success<T: Serialize>(data: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Receipt {
        id: i64,
        status: &'static str,
    }

    #[test]
    fn test_json_success() {
        let result = json_success(&Receipt {
            id: 7,
            status: "success",
        })
        .unwrap();
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);

        match &result.content[0].raw {
            RawContent::Text(text) => {
                let value: serde_json::Value = serde_json::from_str(&text.text).unwrap();
                assert_eq!(value["id"], 7);
                assert_eq!(value["status"], "success");
            }
            _ => panic!("expected text content"),
        }
    }

    #[test]
    fn test_json_success_empty_list() {
        let result = json_success(&Vec::<i64>::new()).unwrap();
        assert_eq!(result.content.len(), 1);
    }
}
