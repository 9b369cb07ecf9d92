//! MCP Server implementation for expense tracking
//!
//! Exposes the expense tools and the category resource. Handler
//! implementations are in the handlers module.

use chrono::{Local, NaiveDate};
use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, ResultExt};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, ListResourcesResult, PaginatedRequestParam, ReadResourceRequestParam,
        ReadResourceResult, ResourceContents, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
    tool, tool_handler, tool_router, ErrorData as McpError, RoleServer,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::config::ExpenseConfig;
use crate::handlers;
use crate::params::*;
use crate::repository::{ExpenseRepository, ExpenseStore};
use crate::resources::{CategoryDocument, CATEGORIES_URI};
use crate::types::ExpenseError;

const INSTRUCTIONS: &str = "Expense tracker MCP server. \
    Use add_expense to record a spend, get_expense to list entries in a date range, \
    summarize_expense for per-category totals, and remove_expense to delete an entry by id. \
    Dates are YYYY-MM-DD and default to today. \
    The expense://categories resource lists the known categories.";

/// Current local date, computed per call
fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The main Expense MCP Server
#[derive(Clone)]
pub struct ExpenseMcpServer {
    store: Arc<dyn ExpenseStore>,
    categories: CategoryDocument,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Tool Router - Each tool delegates to its handler
// ============================================================================

#[tool_router]
impl ExpenseMcpServer {
    /// Build the server from the on-disk config
    ///
    /// Fails if the database cannot be opened or the schema cannot be created.
    pub fn new() -> Result<Self, anyhow::Error> {
        let config = ExpenseConfig::load()?;
        Self::from_config(&config)
    }

    pub fn from_config(config: &ExpenseConfig) -> Result<Self, anyhow::Error> {
        let db_path = config.database_path();
        let repository = ExpenseRepository::open(
            &db_path,
            Duration::from_secs(config.database.busy_timeout_secs),
        )?;

        let rows = repository.count()?;
        tracing::info!(rows, "Expense database ready at {:?}", db_path);

        Ok(Self::with_store(
            Arc::new(repository),
            config.categories_path(),
        ))
    }

    /// Build the server around an already constructed store
    pub fn with_store(store: Arc<dyn ExpenseStore>, categories_path: PathBuf) -> Self {
        Self {
            store,
            categories: CategoryDocument::new(categories_path),
            tool_router: Self::tool_router(),
        }
    }

    /// Raw text of the category document
    pub async fn category_list(&self) -> Result<String, McpError> {
        self.categories.read().await.map_err(unreadable).to_mcp_err()
    }

    /// Contents of the resource at `uri`
    pub async fn resource_contents(&self, uri: &str) -> Result<ResourceContents, McpError> {
        if uri != CATEGORIES_URI {
            return Err(McpError::resource_not_found(
                format!("Unknown resource: {}", uri),
                Some(json!({ "uri": uri })),
            ));
        }

        self.categories
            .contents()
            .await
            .map_err(unreadable)
            .to_mcp_err()
    }

    #[tool(
        description = "Add a new expense. amount is a non-negative integer, category is required; subcategory and note are optional. date is YYYY-MM-DD and defaults to today. Returns the new id and the date used."
    )]
    async fn add_expense(
        &self,
        Parameters(params): Parameters<AddExpenseParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::add_expense(self.store.as_ref(), params, today()).await
    }

    #[tool(
        description = "List expenses dated between start_date and end_date inclusive (YYYY-MM-DD, default today), in insertion order."
    )]
    async fn get_expense(
        &self,
        Parameters(params): Parameters<GetExpenseParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::get_expense(self.store.as_ref(), params, today()).await
    }

    #[tool(
        description = "Total expense amounts per category between start_date and end_date inclusive, largest first. Optionally restrict to one category."
    )]
    async fn summarize_expense(
        &self,
        Parameters(params): Parameters<SummarizeExpenseParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::summarize_expense(self.store.as_ref(), params, today()).await
    }

    #[tool(
        description = "Remove an expense by id. Removing an id that does not exist still succeeds; rows_affected is 0 in that case."
    )]
    async fn remove_expense(
        &self,
        Parameters(params): Parameters<RemoveExpenseParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::remove_expense(self.store.as_ref(), params).await
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for ExpenseMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.into()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            ..Default::default()
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(vec![
            self.categories.describe(),
        ]))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        let contents = self.resource_contents(&request.uri).await?;

        Ok(ReadResourceResult {
            contents: vec![contents],
        })
    }
}

// ============================================================================
// EmbeddableMcp Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for ExpenseMcpServer {
    fn server_name(&self) -> &str {
        "expense"
    }

    fn server_description(&self) -> Option<&str> {
        Some(INSTRUCTIONS)
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "add_expense" => {
                let params: AddExpenseParams = parse_params(params)?;
                self.add_expense(Parameters(params)).await.map_err(Into::into)
            }

            "get_expense" => {
                let params: GetExpenseParams = parse_params(params)?;
                self.get_expense(Parameters(params)).await.map_err(Into::into)
            }

            "summarize_expense" => {
                let params: SummarizeExpenseParams = parse_params(params)?;
                self.summarize_expense(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "remove_expense" => {
                let params: RemoveExpenseParams = parse_params(params)?;
                self.remove_expense(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}

fn unreadable(err: ExpenseError) -> ExpenseError {
    tracing::warn!("Category document unavailable: {}", err);
    err
}

/// Missing or mistyped arguments are a caller error, not a serialization failure
fn parse_params<T: serde::de::DeserializeOwned>(params: Value) -> EmbeddableResult<T> {
    serde_json::from_value(params).map_err(|e| EmbeddableError::InvalidParams(e.to_string()))
}
