//! Comment-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for adding a comment to an issue
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentAddParams {
    #[serde(default)]
    #[schemars(description = "Issue ID or identifier (e.g., 'ENG-123')")]
    pub issue_id: String,

    #[serde(default)]
    #[schemars(description = "Comment body (markdown supported)")]
    pub body: String,

    #[schemars(description = "ID of the comment to reply to")]
    pub parent_id: Option<String>,

    #[schemars(description = "Name to show as the comment author (OAuth apps only)")]
    pub create_as_user: Option<String>,

    #[schemars(description = "Avatar URL to show with createAsUser")]
    pub display_icon_url: Option<String>,
}

/// Parameters for listing an issue's comments
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    #[serde(default)]
    #[schemars(description = "Issue ID or identifier")]
    pub issue_id: String,

    #[schemars(description = "Number of comments to return (default 25)")]
    pub first: Option<u32>,

    #[schemars(description = "Cursor from the previous page")]
    pub after: Option<String>,
}
