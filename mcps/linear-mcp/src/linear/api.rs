//! The operations the tool handlers need from Linear
//!
//! Handlers only ever talk to this trait. [`LinearClient`](super::LinearClient)
//! implements it over HTTPS; tests substitute a recording fake.

use async_trait::async_trait;
use serde_json::Value;

use super::error::LinearResult;
use super::types::{
    CommentConnection, CommentCreateInput, CommentPayload, IssueBatchPayload, IssueCreateInput,
    IssuePayload, IssueSearch, IssueUpdateInput, SuccessPayload, Team,
};

#[async_trait]
pub trait LinearApi: Send + Sync {
    /// `issueCreate`
    async fn create_issue(&self, input: IssueCreateInput) -> LinearResult<IssuePayload>;

    /// `issueBatchCreate`
    async fn create_issues(&self, inputs: Vec<IssueCreateInput>)
        -> LinearResult<IssueBatchPayload>;

    /// `issueUpdate`
    async fn update_issue(&self, id: &str, input: IssueUpdateInput) -> LinearResult<IssuePayload>;

    /// `issueBatchUpdate`. Linear does not return usable issue bodies here.
    async fn update_issues(
        &self,
        ids: &[String],
        input: IssueUpdateInput,
    ) -> LinearResult<SuccessPayload>;

    /// `issues(filter, first, after, orderBy)`, returned as the raw connection
    async fn search_issues(&self, search: IssueSearch) -> LinearResult<Value>;

    /// `issueDelete`
    async fn delete_issue(&self, id: &str) -> LinearResult<SuccessPayload>;

    /// Delete several issues in one request; succeeds only if all do
    async fn delete_issues(&self, ids: &[String]) -> LinearResult<SuccessPayload>;

    /// `commentCreate`
    async fn add_comment(&self, input: CommentCreateInput) -> LinearResult<CommentPayload>;

    /// One page of comments for an issue, `None` when the issue does not exist
    async fn get_comments(
        &self,
        issue_id: &str,
        first: u32,
        after: Option<&str>,
    ) -> LinearResult<Option<CommentConnection>>;

    /// All teams with their workflow states, in listing order
    async fn get_teams(&self) -> LinearResult<Vec<Team>>;
}
