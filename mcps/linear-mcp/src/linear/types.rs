//! Response projections and mutation inputs for the Linear GraphQL schema
//!
//! Only the fields the tools actually render are selected; everything else
//! stays on the server side.

use serde::{Deserialize, Serialize};

// ============================================================================
// Projections
// ============================================================================

/// Issue as returned by create/update mutations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub project: Option<ProjectRef>,
    #[serde(default)]
    pub parent: Option<ParentRef>,
    #[serde(default)]
    pub state: Option<StateRef>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRef {
    pub name: String,
}

/// Minimal reference to a parent issue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentRef {
    pub id: String,
    pub identifier: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRef {
    pub name: String,
}

/// Comment projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub body: String,
    pub url: String,
    #[serde(default)]
    pub user: Option<CommentAuthor>,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub name: String,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

impl CommentAuthor {
    /// Display name when set, plain name otherwise
    pub fn label(&self) -> &str {
        match self.display_name.as_deref() {
            Some(display) if !display.is_empty() => display,
            _ => &self.name,
        }
    }
}

/// Cursor-based pagination info
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor", default)]
    pub end_cursor: Option<String>,
}

/// One page of an issue's comments
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentConnection {
    pub nodes: Vec<Comment>,
    #[serde(rename = "pageInfo")]
    pub page_info: PageInfo,
}

/// Team with its workflow states, used for state-name lookups
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub key: String,
    pub name: String,
    #[serde(default)]
    pub states: Vec<WorkflowState>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowState {
    pub id: String,
    pub name: String,
}

// ============================================================================
// Mutation payloads
// ============================================================================

/// `IssuePayload`: success flag plus the affected issue
#[derive(Debug, Clone, Deserialize)]
pub struct IssuePayload {
    pub success: bool,
    #[serde(default)]
    pub issue: Option<Issue>,
}

/// `IssueBatchPayload` from `issueBatchCreate`
#[derive(Debug, Clone, Deserialize)]
pub struct IssueBatchPayload {
    pub success: bool,
    #[serde(default)]
    pub issues: Option<Vec<Issue>>,
}

/// Payload for mutations that only report success
#[derive(Debug, Clone, Deserialize)]
pub struct SuccessPayload {
    pub success: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentPayload {
    pub success: bool,
    #[serde(default)]
    pub comment: Option<Comment>,
}

// ============================================================================
// Mutation inputs
// ============================================================================

/// `IssueCreateInput` as sent to Linear
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateInput {
    pub title: String,
    pub description: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// `IssueUpdateInput` as sent to Linear. `state_id` is always a resolved id.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_id: Option<String>,
}

/// `CommentCreateInput` as sent to Linear
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreateInput {
    pub issue_id: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_as_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_icon_url: Option<String>,
}

/// Arguments for the `issues` search query
#[derive(Debug, Clone, PartialEq)]
pub struct IssueSearch {
    pub filter: serde_json::Map<String, serde_json::Value>,
    pub first: u32,
    pub after: Option<String>,
    pub order_by: String,
}
