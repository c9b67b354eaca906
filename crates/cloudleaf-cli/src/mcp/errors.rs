//! Error mapping for the MCP server

use cloudleaf_core::LendingError;
use rmcp::ErrorData;

/// Converts a lending error into an MCP error.
///
/// Mistakes the caller can fix (bad credentials, wrong book, no session)
/// become `invalid_params`; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &LendingError) -> ErrorData {
    let text = format!("{message}: {error}");
    if error.is_user_error() {
        ErrorData::invalid_params(text, None)
    } else {
        ErrorData::internal_error(text, None)
    }
}
