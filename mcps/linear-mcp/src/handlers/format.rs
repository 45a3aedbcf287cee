//! Success/failure normalization and text rendering for tool replies

use chrono::{DateTime, Utc};

use crate::error::{ToolError, ToolResult};
use crate::linear::types::{Comment, CommentConnection, Issue, IssueBatchPayload, IssuePayload};

// ============================================================================
// Payload checks
// ============================================================================

/// `success: false` is a failure, and so is success without the issue
pub fn require_issue(payload: IssuePayload, failure: &str) -> ToolResult<Issue> {
    match payload {
        IssuePayload {
            success: true,
            issue: Some(issue),
        } => Ok(issue),
        _ => Err(ToolError::operation_failed(failure)),
    }
}

pub fn require_issues(payload: IssueBatchPayload, failure: &str) -> ToolResult<Vec<Issue>> {
    match payload {
        IssueBatchPayload {
            success: true,
            issues: Some(issues),
        } => Ok(issues),
        _ => Err(ToolError::operation_failed(failure)),
    }
}

pub fn require_success(success: bool, failure: &str) -> ToolResult<()> {
    if success {
        Ok(())
    } else {
        Err(ToolError::operation_failed(failure))
    }
}

// ============================================================================
// Issues
// ============================================================================

pub fn created_issue(issue: &Issue) -> String {
    let mut out = String::from("Successfully created issue\n");
    push_issue_lines(&mut out, issue, false);
    out
}

pub fn updated_issue(issue: &Issue) -> String {
    let mut out = String::from("Successfully updated issue\n");
    push_issue_lines(&mut out, issue, true);
    out
}

fn push_issue_lines(out: &mut String, issue: &Issue, with_state: bool) {
    out.push_str(&format!("ID: {}\n", issue.identifier));
    out.push_str(&format!("Title: {}\n", issue.title));
    out.push_str(&format!("URL: {}\n", issue.url));
    if with_state {
        if let Some(state) = &issue.state {
            out.push_str(&format!("State: {}\n", state.name));
        }
    }
    out.push_str(&format!(
        "Project: {}",
        issue.project.as_ref().map(|p| p.name.as_str()).unwrap_or("None")
    ));
    if let Some(parent) = &issue.parent {
        out.push_str(&format!("\nParent: {}", parent.identifier));
    }
}

pub fn created_issues(issues: &[Issue]) -> String {
    let mut out = format!("Successfully created {} issues:", issues.len());
    for issue in issues {
        out.push_str(&format!("\n- {}: {}", issue.identifier, issue.title));
        out.push_str(&format!("\n  URL: {}", issue.url));
        if let Some(parent) = &issue.parent {
            out.push_str(&format!("\n  Parent: {}", parent.identifier));
        }
    }
    out
}

pub fn bulk_updated(count: usize) -> String {
    format!("Successfully updated {count} issues")
}

pub fn deleted_issue(id: &str) -> String {
    format!("Successfully deleted issue {id}")
}

pub fn deleted_issues(ids: &[String]) -> String {
    format!("Successfully deleted {} issues: {}", ids.len(), ids.join(", "))
}

// ============================================================================
// Comments
// ============================================================================

pub fn added_comment(comment: &Comment) -> String {
    format!(
        "Successfully added comment\nComment ID: {}\nURL: {}\nBy: {}\nCreated: {}",
        comment.id,
        comment.url,
        author(comment),
        format_timestamp(&comment.created_at)
    )
}

pub fn comment_list(issue_id: &str, page: &CommentConnection) -> String {
    if page.nodes.is_empty() {
        return format!("No comments found on {issue_id}");
    }

    let entries: Vec<String> = page
        .nodes
        .iter()
        .enumerate()
        .map(|(i, comment)| {
            format!(
                "{}. {} ({}): {}\n   {}",
                i + 1,
                author(comment),
                format_timestamp(&comment.created_at),
                comment.body,
                comment.url
            )
        })
        .collect();

    let mut out = format!("Comments on {issue_id}:\n\n{}", entries.join("\n\n"));

    if page.page_info.has_next_page {
        if let Some(cursor) = &page.page_info.end_cursor {
            out.push_str(&format!(
                "\n\nMore comments available. Pass after: \"{cursor}\" to fetch the next page."
            ));
        }
    }

    out
}

fn author(comment: &Comment) -> &str {
    comment
        .user
        .as_ref()
        .map(|user| user.label())
        .unwrap_or("Unknown")
}

/// Render an ISO-8601 timestamp in UTC, e.g. `January 1, 2024 at 00:00 UTC`
pub fn format_timestamp(iso: &str) -> String {
    match iso.parse::<DateTime<Utc>>() {
        Ok(dt) => dt.format("%B %-d, %Y at %H:%M UTC").to_string(),
        Err(_) => iso.to_string(),
    }
}
