//! Error conversion for MCP servers
//!
//! Domain errors implement [`IntoMcpError`]; tool bodies then use
//! [`ResultExt::to_mcp_err`] with `?`.

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Conversion of an error into the MCP error sent back to the caller
///
/// Implementations choose the error code: caller mistakes should become
/// `invalid_params`, everything else `internal_error` unless a more specific
/// code exists.
pub trait IntoMcpError {
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for McpError {
    fn into_mcp_error(self) -> McpError {
        self
    }
}

impl IntoMcpError for std::io::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("IO error: {}", self), None)
    }
}

impl IntoMcpError for serde_json::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(format!("JSON error: {}", self), None)
    }
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        // {:#} keeps the context chain on one line
        McpError::internal_error(format!("{:#}", self), None)
    }
}

/// Extension trait for Result types to convert to MCP errors
///
/// ```rust,ignore
/// let id = store.insert(&expense).to_mcp_err()?;
/// ```
pub trait ResultExt<T> {
    fn to_mcp_err(self) -> McpResult<T>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> McpResult<T> {
        self.map_err(IntoMcpError::into_mcp_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_io_error_is_internal() {
        let result: Result<(), std::io::Error> =
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "not found"));
        let err = result.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("not found"));
    }

    #[test]
    fn test_anyhow_keeps_context() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("disk full")).context("saving");
        let err = result.to_mcp_err().unwrap_err();
        assert!(err.message.contains("saving"));
        assert!(err.message.contains("disk full"));
    }

    #[test]
    fn test_mcp_error_passes_through() {
        let result: McpResult<()> = Err(McpError::invalid_params("bad date", None));
        let err = result.to_mcp_err().unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_ok_is_untouched() {
        let result: Result<u8, std::io::Error> = Ok(3);
        assert_eq!(result.to_mcp_err().unwrap(), 3);
    }
}
