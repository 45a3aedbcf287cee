//! MCP Server implementation
//!
//! This module defines the main MCP server that exposes Linear issue and
//! comment operations as tools. Handler implementations are in the
//! handlers/ module; this layer only routes and tags errors.

use mcp_common::{async_trait, EmbeddableError, EmbeddableMcp, EmbeddableResult, McpError};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};
use serde_json::Value;

use crate::handlers;
use crate::linear::Session;
use crate::params::*;

/// The main Linear MCP Server
#[derive(Clone)]
pub struct LinearMcpServer {
    session: Session,
    tool_router: ToolRouter<Self>,
}

// ============================================================================
// Issue Tools
// ============================================================================

#[tool_router]
impl LinearMcpServer {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Create a new Linear issue. Requires title, description and teamId; optionally assignee, priority (0-4), project and parent issue"
    )]
    async fn linear_create_issue(
        &self,
        Parameters(params): Parameters<IssueCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "create issue",
            handlers::create_issue(&self.session, params).await,
        )
    }

    #[tool(description = "Create several Linear issues in a single batch")]
    async fn linear_create_issues(
        &self,
        Parameters(params): Parameters<IssueBatchCreateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "create issues",
            handlers::create_issues(&self.session, params).await,
        )
    }

    #[tool(
        description = "Update a Linear issue. stateId must be a string: either a workflow state id or a state name such as 'Done' (first matching state across teams)"
    )]
    async fn linear_update_issue(
        &self,
        Parameters(params): Parameters<IssueUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "update issue",
            handlers::update_issue(&self.session, params).await,
        )
    }

    #[tool(
        description = "Apply the same update to several Linear issues. stateId must be a string: a workflow state id or a state name"
    )]
    async fn linear_bulk_update_issues(
        &self,
        Parameters(params): Parameters<IssueBulkUpdateParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "bulk update issues",
            handlers::bulk_update_issues(&self.session, params).await,
        )
    }

    #[tool(
        description = "Search Linear issues. A query like 'ENG-123' matches that exact issue; other text is a full-text search. Returns the paginated result as JSON"
    )]
    async fn linear_search_issues(
        &self,
        Parameters(params): Parameters<IssueSearchParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_json(
            "search issues",
            handlers::search_issues(&self.session, params).await,
        )
    }

    #[tool(description = "Delete a Linear issue")]
    async fn linear_delete_issue(
        &self,
        Parameters(params): Parameters<IssueDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "delete issue",
            handlers::delete_issue(&self.session, params).await,
        )
    }

    #[tool(description = "Delete several Linear issues in one request")]
    async fn linear_delete_issues(
        &self,
        Parameters(params): Parameters<IssueBatchDeleteParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "delete issues",
            handlers::delete_issues(&self.session, params).await,
        )
    }

    // ========================================================================
    // Comment Tools
    // ========================================================================

    #[tool(description = "Add a comment to a Linear issue, or reply to a comment with parentId")]
    async fn linear_add_comment(
        &self,
        Parameters(params): Parameters<CommentAddParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "add comment",
            handlers::add_comment(&self.session, params).await,
        )
    }

    #[tool(
        description = "List comments on a Linear issue, 25 per page by default. Pass the returned cursor as 'after' for the next page"
    )]
    async fn linear_get_comments(
        &self,
        Parameters(params): Parameters<CommentListParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_text(
            "get comments",
            handlers::get_comments(&self.session, params).await,
        )
    }

    // ========================================================================
    // Team Tools
    // ========================================================================

    #[tool(description = "List Linear teams with their workflow states")]
    async fn linear_list_teams(
        &self,
        Parameters(_): Parameters<EmptyParams>,
    ) -> Result<CallToolResult, McpError> {
        handlers::respond_json("list teams", handlers::list_teams(&self.session).await)
    }
}

// ============================================================================
// Server Handler Implementation
// ============================================================================

#[tool_handler]
impl rmcp::ServerHandler for LinearMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Linear MCP Server - create, update, search and delete Linear issues \
                 and manage their comments through the Linear GraphQL API. Requires \
                 LINEAR_API_KEY to be set."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Embeddable Implementation
// ============================================================================

#[async_trait]
impl EmbeddableMcp for LinearMcpServer {
    fn server_name(&self) -> &str {
        "linear"
    }

    fn server_description(&self) -> Option<&str> {
        Some("Linear MCP Server - issue and comment operations over the Linear GraphQL API.")
    }

    fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    async fn call_tool(&self, name: &str, params: Value) -> EmbeddableResult<CallToolResult> {
        match name {
            "linear_create_issue" => {
                let params: IssueCreateParams = serde_json::from_value(params)?;
                self.linear_create_issue(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_create_issues" => {
                let params: IssueBatchCreateParams = serde_json::from_value(params)?;
                self.linear_create_issues(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_update_issue" => {
                let params: IssueUpdateParams = serde_json::from_value(params)?;
                self.linear_update_issue(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_bulk_update_issues" => {
                let params: IssueBulkUpdateParams = serde_json::from_value(params)?;
                self.linear_bulk_update_issues(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_search_issues" => {
                let params: IssueSearchParams = serde_json::from_value(params)?;
                self.linear_search_issues(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_delete_issue" => {
                let params: IssueDeleteParams = serde_json::from_value(params)?;
                self.linear_delete_issue(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_delete_issues" => {
                let params: IssueBatchDeleteParams = serde_json::from_value(params)?;
                self.linear_delete_issues(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_add_comment" => {
                let params: CommentAddParams = serde_json::from_value(params)?;
                self.linear_add_comment(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_get_comments" => {
                let params: CommentListParams = serde_json::from_value(params)?;
                self.linear_get_comments(Parameters(params))
                    .await
                    .map_err(Into::into)
            }

            "linear_list_teams" => self
                .linear_list_teams(Parameters(EmptyParams {}))
                .await
                .map_err(Into::into),

            _ => Err(EmbeddableError::ToolNotFound(name.to_string())),
        }
    }
}
