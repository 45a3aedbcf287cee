//! Comment handler implementations

use tracing::info;

use crate::error::{ToolError, ToolResult};
use crate::linear::types::CommentCreateInput;
use crate::linear::Session;
use crate::params::{CommentAddParams, CommentListParams};

use super::format;
use super::validation::validate_required;

pub const DEFAULT_COMMENT_PAGE_SIZE: u32 = 25;

/// Add a comment (or a reply, with `parentId`) to an issue
pub async fn add_comment(session: &Session, params: CommentAddParams) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("issueId", &params.issue_id), ("body", &params.body)])?;

    let input = CommentCreateInput {
        issue_id: params.issue_id,
        body: params.body,
        parent_id: params.parent_id,
        create_as_user: params.create_as_user,
        display_icon_url: params.display_icon_url,
    };
    let payload = api.add_comment(input).await?;
    format::require_success(payload.success, "Failed to add comment")?;
    let comment = payload
        .comment
        .ok_or_else(|| ToolError::operation_failed("Failed to add comment"))?;

    info!(comment_id = %comment.id, "added comment");
    Ok(format::added_comment(&comment))
}

/// One page of an issue's comments
pub async fn get_comments(session: &Session, params: CommentListParams) -> ToolResult<String> {
    let api = session.verify_auth()?;
    validate_required(&[("issueId", &params.issue_id)])?;

    let first = params
        .first
        .filter(|&n| n > 0)
        .unwrap_or(DEFAULT_COMMENT_PAGE_SIZE);
    let page = api
        .get_comments(&params.issue_id, first, params.after.as_deref())
        .await?
        .ok_or_else(|| ToolError::NotFound {
            kind: "Issue",
            value: params.issue_id.clone(),
        })?;

    Ok(format::comment_list(&params.issue_id, &page))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::linear::types::{Comment, CommentAuthor, CommentConnection, PageInfo};
    use crate::linear::LinearError;
    use crate::testing::{Call, FakeLinear};

    fn comment(id: &str, author: &str, created_at: &str) -> Comment {
        Comment {
            id: id.to_string(),
            body: format!("note {id}"),
            url: format!("https://linear.app/acme/comment/{id}"),
            user: Some(CommentAuthor {
                name: author.to_string(),
                display_name: None,
            }),
            created_at: created_at.to_string(),
        }
    }

    fn add_params() -> CommentAddParams {
        CommentAddParams {
            issue_id: "ENG-1".to_string(),
            body: "Looks good".to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_comment_summary() {
        let fake = Arc::new(
            FakeLinear::new().with_comment(comment("c1", "bob", "2024-01-01T00:00:00.000Z")),
        );
        let text = add_comment(&fake.session(), add_params()).await.unwrap();

        assert!(text.contains("Comment ID: c1"));
        assert!(text.contains("By: bob"));
        assert!(text.contains("Created: January 1, 2024 at 00:00 UTC"));
        match &fake.calls()[..] {
            [Call::AddComment(input)] => {
                assert_eq!(input.issue_id, "ENG-1");
                assert_eq!(input.body, "Looks good");
                assert!(input.parent_id.is_none());
            }
            other => panic!("unexpected calls: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_add_comment_missing_body() {
        let fake = Arc::new(FakeLinear::new());
        let params = CommentAddParams {
            body: String::new(),
            ..add_params()
        };
        let err = add_comment(&fake.session(), params).await.unwrap_err();
        assert!(matches!(err, ToolError::Validation { field } if field == "body"));
        assert!(fake.calls().is_empty());
    }

    #[tokio::test]
    async fn test_add_comment_without_comment_payload_fails() {
        let fake = Arc::new(FakeLinear::new());
        let err = add_comment(&fake.session(), add_params()).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to add comment");
    }

    #[tokio::test]
    async fn test_add_comment_unauthenticated() {
        let err = add_comment(&Session::unauthenticated(), add_params())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ToolError::Transport(LinearError::NotAuthenticated)
        ));
    }

    #[tokio::test]
    async fn test_get_comments_defaults_and_is_repeatable() {
        let page = CommentConnection {
            nodes: vec![
                comment("c1", "alice", "2024-01-01T09:30:00.000Z"),
                comment("c2", "bob", "2024-01-02T10:00:00.000Z"),
            ],
            page_info: PageInfo {
                has_next_page: true,
                end_cursor: Some("cursor-2".to_string()),
            },
        };
        let fake = Arc::new(FakeLinear::new().with_comments(page));
        let session = fake.session();
        let params = CommentListParams {
            issue_id: "ENG-1".to_string(),
            ..Default::default()
        };

        let first = get_comments(&session, params.clone()).await.unwrap();
        let second = get_comments(&session, params).await.unwrap();

        assert_eq!(first, second);
        assert!(first.starts_with("Comments on ENG-1:"));
        assert!(first.contains("Pass after: \"cursor-2\""));
        assert_eq!(
            fake.calls()[0],
            Call::GetComments {
                issue_id: "ENG-1".to_string(),
                first: DEFAULT_COMMENT_PAGE_SIZE,
                after: None,
            }
        );
    }

    #[tokio::test]
    async fn test_get_comments_passes_cursor() {
        let page = CommentConnection {
            nodes: vec![],
            page_info: PageInfo {
                has_next_page: false,
                end_cursor: None,
            },
        };
        let fake = Arc::new(FakeLinear::new().with_comments(page));
        let params = CommentListParams {
            issue_id: "ENG-1".to_string(),
            first: Some(5),
            after: Some("cursor-2".to_string()),
        };
        let text = get_comments(&fake.session(), params).await.unwrap();

        assert_eq!(text, "No comments found on ENG-1");
        assert_eq!(
            fake.calls(),
            vec![Call::GetComments {
                issue_id: "ENG-1".to_string(),
                first: 5,
                after: Some("cursor-2".to_string()),
            }]
        );
    }

    #[tokio::test]
    async fn test_get_comments_unknown_issue() {
        let fake = Arc::new(FakeLinear::new());
        let params = CommentListParams {
            issue_id: "ENG-404".to_string(),
            ..Default::default()
        };
        let err = get_comments(&fake.session(), params).await.unwrap_err();
        assert_eq!(err.to_string(), "Issue not found: ENG-404");
    }
}
