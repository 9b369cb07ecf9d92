//! MCP Common - Shared plumbing for MCP servers
//!
//! - **Startup**: `serve_stdio!` builds the server and serves it over stdio
//! - **Logging**: [`init_tracing`] writes to stderr, never stdout
//! - **Results**: [`json_success`] wraps serializable data as a tool result
//! - **Errors**: [`IntoMcpError`] / [`ResultExt`] turn domain errors into MCP errors
//! - **Embeddable**: [`EmbeddableMcp`] calls tools in-process by name
//!
//! # Example
//!
//! ```rust,ignore
//! // main.rs
//! mcp_common::serve_stdio!(ExpenseMcpServer, "expense_mcp");
//!
//! // a tool body
//! let rows = store.list_in_range(range).to_mcp_err()?;
//! json_success(&rows)
//! ```

pub mod embeddable;
pub mod error;
pub mod init;
pub mod result;

// Re-export commonly used items at crate root
pub use embeddable::{EmbeddableError, EmbeddableMcp, EmbeddableResult};
pub use error::{IntoMcpError, McpResult, ResultExt};
pub use init::init_tracing;
pub use result::json_success;

// Re-export rmcp types that are commonly needed
pub use rmcp::{
    model::{CallToolResult, Content, Tool},
    ErrorData as McpError,
};

// Re-export async_trait for implementing EmbeddableMcp
pub use async_trait::async_trait;
