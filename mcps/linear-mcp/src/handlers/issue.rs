//! Issue handler implementations
//!
//! Every handler runs the same three phases: obtain the authenticated client,
//! validate required fields, then make exactly one Linear call (plus at most
//! one team lookup when an update names a workflow state).

use serde_json::Value;
use tracing::info;

use crate::error::{ToolError, ToolResult};
use crate::linear::types::IssueCreateInput;
use crate::linear::Session;
use crate::params::{
    IssueBatchCreateParams, IssueBatchDeleteParams, IssueBulkUpdateParams, IssueCreateParams,
    IssueDeleteParams, IssueSearchParams, IssueUpdateParams,
};

use super::filter::build_search;
use super::format;
use super::resolve::resolve_update;
use super::validation::validate_required;

impl From<IssueCreateParams> for IssueCreateInput {
    fn from(params: IssueCreateParams) -> Self {
        Self {
            title: params.title,
            description: params.description,
            team_id: params.team_id,
            assignee_id: params.assignee_id,
            priority: params.priority,
            project_id: params.project_id,
            parent_id: params.parent_id,
        }
    }
}

fn validate_create(params: &IssueCreateParams, prefix: &str) -> ToolResult<()> {
    validate_required(&[
        (&format!("{prefix}title"), &params.title),
        (&format!("{prefix}description"), &params.description),
        (&format!("{prefix}teamId"), &params.team_id),
    ])
}

/// Create a single issue
pub async fn create_issue(session: &Session, params: IssueCreateParams) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_create(&params, "")?;

    let payload = api.create_issue(params.into()).await?;
    let issue = format::require_issue(payload, "Failed to create issue")?;

    info!(identifier = %issue.identifier, "created issue");
    Ok(format::created_issue(&issue))
}

/// Create several issues in one batch
pub async fn create_issues(
    session: &Session,
    params: IssueBatchCreateParams,
) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("issues", &params.issues)])?;
    for (i, issue) in params.issues.iter().enumerate() {
        validate_create(issue, &format!("issues[{i}]."))?;
    }

    let inputs = params.issues.into_iter().map(IssueCreateInput::from).collect();
    let payload = api.create_issues(inputs).await?;
    let issues = format::require_issues(payload, "Failed to create issues")?;

    info!(count = issues.len(), "created issues");
    Ok(format::created_issues(&issues))
}

/// Update one issue, resolving a state name if given
pub async fn update_issue(session: &Session, params: IssueUpdateParams) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("id", &params.id), ("update", &params.update)])?;
    let fields = params.update.ok_or_else(|| ToolError::validation("update"))?;

    let input = resolve_update(api, fields).await?;
    let payload = api.update_issue(&params.id, input).await?;
    let issue = format::require_issue(payload, "Failed to update issue")?;

    info!(identifier = %issue.identifier, "updated issue");
    Ok(format::updated_issue(&issue))
}

/// Apply the same update to several issues
pub async fn bulk_update_issues(
    session: &Session,
    params: IssueBulkUpdateParams,
) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("issueIds", &params.issue_ids), ("update", &params.update)])?;
    let fields = params.update.ok_or_else(|| ToolError::validation("update"))?;

    let input = resolve_update(api, fields).await?;
    let payload = api.update_issues(&params.issue_ids, input).await?;
    format::require_success(payload.success, "Failed to update issues")?;

    info!(count = params.issue_ids.len(), "bulk updated issues");
    Ok(format::bulk_updated(params.issue_ids.len()))
}

/// Search issues; the paginated connection is returned as-is
pub async fn search_issues(session: &Session, params: IssueSearchParams) -> ToolResult<Value> {
    let api = session.verify_auth()?;
    let search = build_search(&params);
    Ok(api.search_issues(search).await?)
}

/// Delete one issue
pub async fn delete_issue(session: &Session, params: IssueDeleteParams) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("id", &params.id)])?;

    let payload = api.delete_issue(&params.id).await?;
    format::require_success(payload.success, "Failed to delete issue")?;

    info!(id = %params.id, "deleted issue");
    Ok(format::deleted_issue(&params.id))
}

/// Delete several issues
pub async fn delete_issues(
    session: &Session,
    params: IssueBatchDeleteParams,
) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("ids", &params.ids)])?;

    let payload = api.delete_issues(&params.ids).await?;
    format::require_success(payload.success, "Failed to delete issues")?;

    info!(count = params.ids.len(), "deleted issues");
    Ok(format::deleted_issues(&params.ids))
}
