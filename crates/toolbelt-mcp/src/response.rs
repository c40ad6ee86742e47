//! MCP response helpers

use rmcp::model::{CallToolResult, Content};

/// Plain text tool result
pub fn tool_text_result(text: String) -> CallToolResult {
    CallToolResult {
        content: vec![Content::text(text)],
        is_error: None,
        meta: None,
        structured_content: None,
    }
}
