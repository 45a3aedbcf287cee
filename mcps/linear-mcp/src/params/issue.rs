//! Issue-related parameter types
//!
//! Required fields default to empty instead of failing deserialization, so a
//! missing field reaches validation and is reported by name.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parameters for creating an issue
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreateParams {
    #[serde(default)]
    #[schemars(description = "Issue title")]
    pub title: String,

    #[serde(default)]
    #[schemars(description = "Issue description (markdown supported)")]
    pub description: String,

    #[serde(default)]
    #[schemars(description = "ID of the team the issue belongs to")]
    pub team_id: String,

    #[schemars(description = "ID of the user to assign")]
    pub assignee_id: Option<String>,

    #[schemars(description = "Priority: 0 none, 1 urgent, 2 high, 3 medium, 4 low")]
    pub priority: Option<i32>,

    #[schemars(description = "ID of the project to add the issue to")]
    pub project_id: Option<String>,

    #[schemars(description = "ID of the parent issue, to create a sub-issue")]
    pub parent_id: Option<String>,
}

/// Parameters for creating several issues in one call
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IssueBatchCreateParams {
    #[serde(default)]
    #[schemars(description = "Issues to create, in order")]
    pub issues: Vec<IssueCreateParams>,
}

/// Fields to change on an issue
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateFields {
    #[schemars(description = "New title")]
    pub title: Option<String>,

    #[schemars(description = "New description")]
    pub description: Option<String>,

    #[schemars(description = "ID of the user to assign")]
    pub assignee_id: Option<String>,

    #[schemars(description = "New priority (0-4)")]
    pub priority: Option<i32>,

    #[schemars(description = "ID of the project to move the issue to")]
    pub project_id: Option<String>,

    #[schemars(
        description = "Workflow state as a string: either a state ID or a state name such as 'Done' (case-insensitive)"
    )]
    pub state_id: Option<String>,
}

/// Parameters for updating one issue
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IssueUpdateParams {
    #[serde(default)]
    #[schemars(description = "Issue ID or identifier (e.g., 'ENG-123')")]
    pub id: String,

    #[schemars(description = "Fields to update")]
    pub update: Option<IssueUpdateFields>,
}

/// Parameters for applying one update to several issues
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueBulkUpdateParams {
    #[serde(default)]
    #[schemars(description = "IDs of the issues to update")]
    pub issue_ids: Vec<String>,

    #[schemars(description = "Fields to update on every issue")]
    pub update: Option<IssueUpdateFields>,
}

/// Parameters for searching issues
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct IssueSearchParams {
    #[schemars(
        description = "Free-text search, or an issue identifier such as 'ENG-123' to match that issue exactly"
    )]
    pub query: Option<String>,

    #[schemars(description = "Raw Linear IssueFilter object merged with the other filters")]
    pub filter: Option<Map<String, Value>>,

    #[schemars(description = "Only issues in this project")]
    pub project_id: Option<String>,

    #[schemars(description = "Only issues in any of these teams")]
    pub team_ids: Option<Vec<String>>,

    #[schemars(description = "Only issues assigned to any of these users")]
    pub assignee_ids: Option<Vec<String>>,

    #[schemars(description = "Only issues in any of these workflow states (by name)")]
    pub states: Option<Vec<String>>,

    #[schemars(description = "Only issues with this priority (0-4)")]
    pub priority: Option<i32>,

    #[schemars(description = "Page size (default 50)")]
    pub first: Option<u32>,

    #[schemars(description = "Cursor from a previous page's pageInfo.endCursor")]
    pub after: Option<String>,

    #[schemars(description = "Sort key: 'updatedAt' (default) or 'createdAt'")]
    pub order_by: Option<String>,
}

/// Parameters for deleting one issue
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IssueDeleteParams {
    #[serde(default)]
    #[schemars(description = "Issue ID or identifier")]
    pub id: String,
}

/// Parameters for deleting several issues
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct IssueBatchDeleteParams {
    #[serde(default)]
    #[schemars(description = "Issue IDs or identifiers to delete")]
    pub ids: Vec<String>,
}
