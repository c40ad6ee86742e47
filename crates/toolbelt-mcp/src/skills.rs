//! Skills MCP server
//!
//! Exposes one tool whose description is the live skill catalog, so it is
//! listed by hand rather than through the `#[tool]` macros.

use crate::response::tool_text_result;
use rmcp::model::{
    CallToolRequestParam, CallToolResult, ErrorCode, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
};
use rmcp::schemars::JsonSchema;
use rmcp::service::RequestContext;
use rmcp::{ErrorData, RoleServer, ServerHandler};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use toolbelt_skills::SkillTool;
use tracing::{debug, info};

#[derive(Debug, Deserialize, JsonSchema)]
pub struct SkillsToolInput {
    /// Name of the skill to load, e.g. "pdf"
    pub command: String,
}

#[derive(Debug, Clone)]
pub struct SkillsServer {
    tool: Arc<SkillTool>,
    input_schema: Arc<JsonObject>,
}

impl SkillsServer {
    pub fn new(tool: SkillTool) -> Self {
        Self {
            tool: Arc::new(tool),
            input_schema: Arc::new(input_schema()),
        }
    }

    /// The single advertised tool
    pub fn tools(&self) -> Vec<Tool> {
        vec![Tool::new(
            self.tool.name().to_string(),
            self.tool.description(),
            self.input_schema.clone(),
        )]
    }

    /// Dispatch a tool call by name with raw JSON arguments
    pub fn call(
        &self,
        name: &str,
        arguments: Option<JsonObject>,
    ) -> Result<CallToolResult, ErrorData> {
        if name != self.tool.name() {
            return Err(ErrorData::new(
                ErrorCode::METHOD_NOT_FOUND,
                format!("Unknown tool: {}", name),
                None,
            ));
        }

        let arguments = arguments.map_or(Value::Null, Value::Object);
        let input: SkillsToolInput = serde_json::from_value(arguments)
            .map_err(|e| ErrorData::invalid_params(e.to_string(), None))?;

        info!("Loading skill '{}'", input.command);
        Ok(tool_text_result(self.tool.invoke(&input.command)))
    }
}

fn input_schema() -> JsonObject {
    let schema = schemars::schema_for!(SkillsToolInput);
    match serde_json::to_value(schema) {
        Ok(Value::Object(map)) => map,
        _ => JsonObject::new(),
    }
}

impl ServerHandler for SkillsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(format!(
                "Load task-specific skills with the `{}` tool.",
                self.tool.name()
            )),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        debug!("Listing skills tool ({} skills)", self.tool.registry().len());
        Ok(ListToolsResult::with_all_items(self.tools()))
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        self.call(request.name.as_ref(), request.arguments)
    }
}
