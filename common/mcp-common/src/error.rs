//! Error handling utilities for MCP servers

use rmcp::ErrorData as McpError;

/// Type alias for MCP tool results
pub type McpResult<T> = Result<T, McpError>;

/// Conversion of a domain error into an MCP protocol error
///
/// Implement this for a server's own error type so handlers can use
/// [`ResultExt::to_mcp_err`] and decide per variant whether the caller
/// sent bad input (`invalid_params`) or the server failed (`internal_error`).
///
/// ```rust,ignore
/// impl IntoMcpError for LookupError {
///     fn into_mcp_error(self) -> McpError {
///         match self {
///             LookupError::BadKey(_) => invalid_params(self.to_string()),
///             LookupError::Backend(_) => internal_error(self.to_string()),
///         }
///     }
/// }
/// ```
pub trait IntoMcpError {
    /// Convert this error into an MCP error
    fn into_mcp_error(self) -> McpError;
}

impl IntoMcpError for anyhow::Error {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self.to_string(), None)
    }
}

impl IntoMcpError for String {
    fn into_mcp_error(self) -> McpError {
        McpError::internal_error(self, None)
    }
}

/// Extension trait adding `to_mcp_err()` to any `Result` whose error
/// implements [`IntoMcpError`]
pub trait ResultExt<T> {
    /// Convert the error to an MCP error
    fn to_mcp_err(self) -> Result<T, McpError>;
}

impl<T, E: IntoMcpError> ResultExt<T> for Result<T, E> {
    fn to_mcp_err(self) -> Result<T, McpError> {
        self.map_err(|e| e.into_mcp_error())
    }
}

/// Create an internal error with a message
pub fn internal_error(message: impl Into<String>) -> McpError {
    McpError::internal_error(message.into(), None)
}

/// Create an invalid params error with a message
///
/// Use this when the caller sent arguments the tool cannot accept, or named
/// a tool the server does not have.
pub fn invalid_params(message: impl Into<String>) -> McpError {
    McpError::invalid_params(message.into(), None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_into_mcp_error_string() {
        let err = "backend exploded".to_string().into_mcp_error();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
        assert!(err.message.contains("backend exploded"));
    }

    #[test]
    fn test_result_ext_anyhow() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("connection refused"));
        let err = result.to_mcp_err().unwrap_err();
        assert!(err.message.contains("connection refused"));
    }

    #[test]
    fn test_invalid_params() {
        let err = invalid_params("query: Required");
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "query: Required");
    }

    #[test]
    fn test_internal_error() {
        let err = internal_error("schema unavailable");
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
