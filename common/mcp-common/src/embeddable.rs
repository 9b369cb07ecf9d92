//! In-process tool execution
//!
//! [`EmbeddableMcp`] lets a host call a server's tools directly, without
//! spawning a subprocess or speaking the stdio protocol.
//!
//! ```rust,ignore
//! use mcp_common::EmbeddableMcp;
//!
//! let server = ExpenseMcpServer::new()?;
//! let result = server
//!     .call_tool("add_expense", serde_json::json!({ "amount": 1200, "category": "food" }))
//!     .await?;
//! ```

use async_trait::async_trait;
use rmcp::model::{CallToolResult, ErrorCode, Tool};
use serde_json::Value;

/// Error type for embeddable MCP operations
#[derive(Debug, thiserror::Error)]
pub enum EmbeddableError {
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Missing, mistyped or rejected arguments
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    #[error("tool execution failed: {0}")]
    ExecutionError(String),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    /// Any other MCP error, with its protocol code preserved
    #[error("mcp error {code}: {message}")]
    McpError { code: i32, message: String },
}

impl From<rmcp::ErrorData> for EmbeddableError {
    fn from(err: rmcp::ErrorData) -> Self {
        let message = err.message.to_string();
        if err.code == ErrorCode::INVALID_PARAMS {
            EmbeddableError::InvalidParams(message)
        } else if err.code == ErrorCode::INTERNAL_ERROR {
            EmbeddableError::ExecutionError(message)
        } else {
            EmbeddableError::McpError {
                code: err.code.0,
                message,
            }
        }
    }
}

/// Result type for embeddable MCP operations
pub type EmbeddableResult<T> = Result<T, EmbeddableError>;

/// MCP server callable in-process
///
/// Implementations must be `Send + Sync` so tool calls can run concurrently
/// from multiple tasks. Servers built with `#[tool_router]` list their tools
/// through the router and dispatch `call_tool` by name.
#[async_trait]
pub trait EmbeddableMcp: Send + Sync {
    /// Server name as used in MCP configuration files
    fn server_name(&self) -> &str;

    /// All tools with their names, descriptions and input schemas
    fn list_tools(&self) -> Vec<Tool>;

    /// Run the tool `name` with JSON object `params`
    ///
    /// Fails with [`EmbeddableError::ToolNotFound`] for unknown names and
    /// [`EmbeddableError::InvalidParams`] when the arguments are rejected.
    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult>;

    fn server_description(&self) -> Option<&str> {
        None
    }

    fn server_version(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::ErrorData;

    struct EchoServer;

    #[async_trait]
    impl EmbeddableMcp for EchoServer {
        fn server_name(&self) -> &str {
            "echo"
        }

        fn list_tools(&self) -> Vec<Tool> {
            vec![]
        }

        async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
            match name {
                "fail" => Err(ErrorData::invalid_params("amount must be >= 0", None).into()),
                "echo" => crate::json_success(&params).map_err(Into::into),
                _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
            }
        }
    }

    #[test]
    fn test_defaults() {
        let server = EchoServer;
        assert_eq!(server.server_name(), "echo");
        assert!(server.list_tools().is_empty());
        assert!(server.server_description().is_none());
        assert!(server.server_version().is_none());
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let result = EchoServer.call_tool("unknown", serde_json::json!({})).await;
        assert!(matches!(result, Err(EmbeddableError::ToolNotFound(_))));
    }

    #[tokio::test]
    async fn test_invalid_params_keep_their_kind() {
        let result = EchoServer.call_tool("fail", serde_json::json!({})).await;
        match result {
            Err(EmbeddableError::InvalidParams(msg)) => assert!(msg.contains("amount")),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_other_codes_are_preserved() {
        let err: EmbeddableError = ErrorData::resource_not_found("gone", None).into();
        match err {
            EmbeddableError::McpError { code, .. } => {
                assert_eq!(code, ErrorCode::RESOURCE_NOT_FOUND.0)
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
