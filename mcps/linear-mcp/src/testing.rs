//! Recording fake of the Linear API for handler tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::linear::types::{
    Comment, CommentConnection, CommentCreateInput, CommentPayload, Issue, IssueBatchPayload,
    IssueCreateInput, IssuePayload, IssueSearch, IssueUpdateInput, SuccessPayload, Team,
    WorkflowState,
};
use crate::linear::{LinearApi, LinearError, LinearResult, Session};

/// One recorded adapter call
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateIssue(IssueCreateInput),
    CreateIssues(Vec<IssueCreateInput>),
    UpdateIssue(String, IssueUpdateInput),
    UpdateIssues(Vec<String>, IssueUpdateInput),
    SearchIssues(IssueSearch),
    DeleteIssue(String),
    DeleteIssues(Vec<String>),
    AddComment(CommentCreateInput),
    GetComments {
        issue_id: String,
        first: u32,
        after: Option<String>,
    },
    GetTeams,
}

/// Canned responses plus a log of every call made
pub struct FakeLinear {
    calls: Mutex<Vec<Call>>,
    success: bool,
    issue: Option<Issue>,
    comment: Option<Comment>,
    comments: Option<CommentConnection>,
    teams: Vec<Team>,
    search_result: Value,
    errors: HashMap<&'static str, fn() -> LinearError>,
}

impl FakeLinear {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            success: true,
            issue: Some(issue("ENG-1")),
            comment: None,
            comments: None,
            teams: Vec::new(),
            search_result: json!({
                "nodes": [],
                "pageInfo": { "hasNextPage": false, "endCursor": null }
            }),
            errors: HashMap::new(),
        }
    }

    pub fn failing(mut self) -> Self {
        self.success = false;
        self
    }

    pub fn with_issue(mut self, issue: Option<Issue>) -> Self {
        self.issue = issue;
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comment = Some(comment);
        self
    }

    pub fn with_comments(mut self, comments: CommentConnection) -> Self {
        self.comments = Some(comments);
        self
    }

    pub fn with_teams(mut self, teams: Vec<Team>) -> Self {
        self.teams = teams;
        self
    }

    pub fn with_search_result(mut self, result: Value) -> Self {
        self.search_result = result;
        self
    }

    /// Make `operation` (a `LinearApi` method name) fail after recording the call
    pub fn with_error(mut self, operation: &'static str, error: fn() -> LinearError) -> Self {
        self.errors.insert(operation, error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn team_lookups(&self) -> usize {
        self.calls()
            .iter()
            .filter(|c| matches!(c, Call::GetTeams))
            .count()
    }

    /// Session sharing this fake, so the test can still inspect calls
    pub fn session(self: &Arc<Self>) -> Session {
        Session::new(self.clone())
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn injected(&self, operation: &str) -> LinearResult<()> {
        match self.errors.get(operation) {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }

    fn issue_payload(&self) -> IssuePayload {
        IssuePayload {
            success: self.success,
            issue: self.issue.clone(),
        }
    }
}

#[async_trait]
impl LinearApi for FakeLinear {
    async fn create_issue(&self, input: IssueCreateInput) -> LinearResult<IssuePayload> {
        self.record(Call::CreateIssue(input));
        self.injected("create_issue")?;
        Ok(self.issue_payload())
    }

    async fn create_issues(
        &self,
        inputs: Vec<IssueCreateInput>,
    ) -> LinearResult<IssueBatchPayload> {
        let issues = inputs
            .iter()
            .enumerate()
            .map(|(i, _)| issue(&format!("ENG-{}", i + 1)))
            .collect();
        self.record(Call::CreateIssues(inputs));
        self.injected("create_issues")?;
        Ok(IssueBatchPayload {
            success: self.success,
            issues: Some(issues),
        })
    }

    async fn update_issue(&self, id: &str, input: IssueUpdateInput) -> LinearResult<IssuePayload> {
        self.record(Call::UpdateIssue(id.to_string(), input));
        self.injected("update_issue")?;
        Ok(self.issue_payload())
    }

    async fn update_issues(
        &self,
        ids: &[String],
        input: IssueUpdateInput,
    ) -> LinearResult<SuccessPayload> {
        self.record(Call::UpdateIssues(ids.to_vec(), input));
        self.injected("update_issues")?;
        Ok(SuccessPayload {
            success: self.success,
        })
    }

    async fn search_issues(&self, search: IssueSearch) -> LinearResult<Value> {
        self.record(Call::SearchIssues(search));
        self.injected("search_issues")?;
        Ok(self.search_result.clone())
    }

    async fn delete_issue(&self, id: &str) -> LinearResult<SuccessPayload> {
        self.record(Call::DeleteIssue(id.to_string()));
        self.injected("delete_issue")?;
        Ok(SuccessPayload {
            success: self.success,
        })
    }

    async fn delete_issues(&self, ids: &[String]) -> LinearResult<SuccessPayload> {
        self.record(Call::DeleteIssues(ids.to_vec()));
        self.injected("delete_issues")?;
        Ok(SuccessPayload {
            success: self.success,
        })
    }

    async fn add_comment(&self, input: CommentCreateInput) -> LinearResult<CommentPayload> {
        self.record(Call::AddComment(input));
        self.injected("add_comment")?;
        Ok(CommentPayload {
            success: self.success,
            comment: self.comment.clone(),
        })
    }

    async fn get_comments(
        &self,
        issue_id: &str,
        first: u32,
        after: Option<&str>,
    ) -> LinearResult<Option<CommentConnection>> {
        self.record(Call::GetComments {
            issue_id: issue_id.to_string(),
            first,
            after: after.map(String::from),
        });
        self.injected("get_comments")?;
        Ok(self.comments.clone())
    }

    async fn get_teams(&self) -> LinearResult<Vec<Team>> {
        self.record(Call::GetTeams);
        self.injected("get_teams")?;
        Ok(self.teams.clone())
    }
}

/// Issue with predictable title and url and no optional parts
pub fn issue(identifier: &str) -> Issue {
    Issue {
        id: format!("id-{identifier}"),
        identifier: identifier.to_string(),
        title: format!("Issue {identifier}"),
        url: format!("https://linear.app/acme/issue/{identifier}"),
        project: None,
        parent: None,
        state: None,
    }
}

/// Team with `(id, name)` workflow states
pub fn team(key: &str, states: &[(&str, &str)]) -> Team {
    Team {
        id: format!("team-{key}"),
        key: key.to_string(),
        name: key.to_string(),
        states: states
            .iter()
            .map(|(id, name)| WorkflowState {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect(),
    }
}
