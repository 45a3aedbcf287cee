//! HTTPS GraphQL client for the Linear API
//!
//! Every operation is a single `POST` of `{ query, variables }` with the API
//! key in the `Authorization` header.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, error, instrument};

use super::api::LinearApi;
use super::error::{LinearError, LinearResult};
use super::queries;
use super::types::{
    CommentConnection, CommentCreateInput, CommentPayload, IssueBatchPayload, IssueCreateInput,
    IssuePayload, IssueSearch, IssueUpdateInput, SuccessPayload, Team, WorkflowState,
};
use crate::config::LinearConfig;

/// Linear GraphQL client
pub struct LinearClient {
    http: Client,
    api_url: String,
    api_key: String,
}

#[derive(Serialize)]
struct GraphQLRequest<'a> {
    query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    variables: Option<Value>,
}

#[derive(Deserialize)]
struct GraphQLResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Deserialize, Debug)]
struct GraphQLError {
    message: String,
}

// Response envelopes, one per operation

#[derive(Deserialize)]
struct CreateIssueData {
    #[serde(rename = "issueCreate")]
    issue_create: IssuePayload,
}

#[derive(Deserialize)]
struct CreateIssuesData {
    #[serde(rename = "issueBatchCreate")]
    issue_batch_create: IssueBatchPayload,
}

#[derive(Deserialize)]
struct UpdateIssueData {
    #[serde(rename = "issueUpdate")]
    issue_update: IssuePayload,
}

#[derive(Deserialize)]
struct UpdateIssuesData {
    #[serde(rename = "issueBatchUpdate")]
    issue_batch_update: SuccessPayload,
}

#[derive(Deserialize)]
struct SearchIssuesData {
    issues: Value,
}

#[derive(Deserialize)]
struct DeleteIssueData {
    #[serde(rename = "issueDelete")]
    issue_delete: SuccessPayload,
}

#[derive(Deserialize)]
struct AddCommentData {
    #[serde(rename = "commentCreate")]
    comment_create: CommentPayload,
}

#[derive(Deserialize)]
struct GetCommentsData {
    issue: Option<IssueComments>,
}

#[derive(Deserialize)]
struct IssueComments {
    comments: CommentConnection,
}

#[derive(Deserialize)]
struct TeamsData {
    teams: Connection<TeamNode>,
}

#[derive(Deserialize)]
struct Connection<T> {
    nodes: Vec<T>,
}

#[derive(Deserialize)]
struct TeamNode {
    id: String,
    key: String,
    name: String,
    states: Connection<WorkflowState>,
}

impl From<TeamNode> for Team {
    fn from(node: TeamNode) -> Self {
        Self {
            id: node.id,
            key: node.key,
            name: node.name,
            states: node.states.nodes,
        }
    }
}

impl LinearClient {
    pub fn new(config: &LinearConfig, api_key: String) -> LinearResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("linear-mcp/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
            api_key,
        })
    }

    /// Execute a GraphQL document and decode its `data` object
    #[instrument(skip(self, query, variables), fields(operation = operation_name(query)))]
    pub async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Option<Value>,
    ) -> LinearResult<T> {
        debug!("sending GraphQL request");

        let request = GraphQLRequest { query, variables };

        let response = self
            .http
            .post(&self.api_url)
            .header("Authorization", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        decode(status, &body)
    }
}

/// Apply the response envelope rules to a raw HTTP reply
fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> LinearResult<T> {
    if !status.is_success() {
        error!(status = status.as_u16(), "Linear API request failed");
        return Err(LinearError::Api {
            status: status.as_u16(),
            message: body.to_string(),
        });
    }

    let body: GraphQLResponse<Value> = serde_json::from_str(body)?;

    if let Some(errors) = body.errors.filter(|e| !e.is_empty()) {
        let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
        error!(?messages, "Linear returned GraphQL errors");
        return Err(LinearError::GraphQL { messages });
    }

    let data = body
        .data
        .filter(|d| !d.is_null())
        .ok_or(LinearError::EmptyResponse)?;
    Ok(serde_json::from_value(data)?)
}

/// True only when every one of `expected` aliases came back with `success: true`
fn all_deleted(data: Map<String, Value>, expected: usize) -> LinearResult<bool> {
    let mut success = data.len() == expected;
    for (alias, payload) in data {
        let payload: Option<SuccessPayload> = serde_json::from_value(payload)?;
        if !payload.is_some_and(|p| p.success) {
            debug!(%alias, "aliased issueDelete reported failure");
            success = false;
        }
    }
    Ok(success)
}

/// First line of a GraphQL document, for log context
fn operation_name(query: &str) -> &str {
    query.trim().lines().next().unwrap_or_default()
}

#[async_trait]
impl LinearApi for LinearClient {
    async fn create_issue(&self, input: IssueCreateInput) -> LinearResult<IssuePayload> {
        let data: CreateIssueData = self
            .query(queries::CREATE_ISSUE_MUTATION, Some(json!({ "input": input })))
            .await?;
        Ok(data.issue_create)
    }

    async fn create_issues(
        &self,
        inputs: Vec<IssueCreateInput>,
    ) -> LinearResult<IssueBatchPayload> {
        let variables = json!({ "input": { "issues": inputs } });
        let data: CreateIssuesData = self
            .query(queries::CREATE_ISSUES_MUTATION, Some(variables))
            .await?;
        Ok(data.issue_batch_create)
    }

    async fn update_issue(&self, id: &str, input: IssueUpdateInput) -> LinearResult<IssuePayload> {
        let variables = json!({ "id": id, "input": input });
        let data: UpdateIssueData = self
            .query(queries::UPDATE_ISSUE_MUTATION, Some(variables))
            .await?;
        Ok(data.issue_update)
    }

    async fn update_issues(
        &self,
        ids: &[String],
        input: IssueUpdateInput,
    ) -> LinearResult<SuccessPayload> {
        let variables = json!({ "ids": ids, "input": input });
        let data: UpdateIssuesData = self
            .query(queries::UPDATE_ISSUES_MUTATION, Some(variables))
            .await?;
        Ok(data.issue_batch_update)
    }

    async fn search_issues(&self, search: IssueSearch) -> LinearResult<Value> {
        let variables = json!({
            "filter": search.filter,
            "first": search.first,
            "after": search.after,
            "orderBy": search.order_by,
        });
        let data: SearchIssuesData = self
            .query(queries::SEARCH_ISSUES_QUERY, Some(variables))
            .await?;
        Ok(data.issues)
    }

    async fn delete_issue(&self, id: &str) -> LinearResult<SuccessPayload> {
        let data: DeleteIssueData = self
            .query(queries::DELETE_ISSUE_MUTATION, Some(json!({ "id": id })))
            .await?;
        Ok(data.issue_delete)
    }

    async fn delete_issues(&self, ids: &[String]) -> LinearResult<SuccessPayload> {
        let document = queries::batch_delete_mutation(ids.len());
        let variables: Map<String, Value> = ids
            .iter()
            .enumerate()
            .map(|(i, id)| (format!("id{i}"), Value::String(id.clone())))
            .collect();

        let data: Map<String, Value> = self.query(&document, Some(Value::Object(variables))).await?;

        Ok(SuccessPayload {
            success: all_deleted(data, ids.len())?,
        })
    }

    async fn add_comment(&self, input: CommentCreateInput) -> LinearResult<CommentPayload> {
        let data: AddCommentData = self
            .query(queries::ADD_COMMENT_MUTATION, Some(json!({ "input": input })))
            .await?;
        Ok(data.comment_create)
    }

    async fn get_comments(
        &self,
        issue_id: &str,
        first: u32,
        after: Option<&str>,
    ) -> LinearResult<Option<CommentConnection>> {
        let variables = json!({ "issueId": issue_id, "first": first, "after": after });
        let data: GetCommentsData = self
            .query(queries::GET_COMMENTS_QUERY, Some(variables))
            .await?;
        Ok(data.issue.map(|issue| issue.comments))
    }

    async fn get_teams(&self) -> LinearResult<Vec<Team>> {
        let data: TeamsData = self.query(queries::GET_TEAMS_QUERY, None).await?;
        Ok(data.teams.nodes.into_iter().map(Team::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_name_is_first_line() {
        assert_eq!(
            operation_name(queries::DELETE_ISSUE_MUTATION),
            "mutation DeleteIssue($id: String!) {"
        );
    }

    #[test]
    fn test_team_node_flattens_states() {
        let node: TeamNode = serde_json::from_value(json!({
            "id": "t1",
            "key": "ENG",
            "name": "Engineering",
            "states": { "nodes": [{ "id": "s1", "name": "Done" }] }
        }))
        .unwrap();

        let team = Team::from(node);
        assert_eq!(team.key, "ENG");
        assert_eq!(team.states.len(), 1);
        assert_eq!(team.states[0].name, "Done");
    }

    #[test]
    fn test_graphql_errors_deserialize() {
        let body: GraphQLResponse<Value> = serde_json::from_value(json!({
            "data": null,
            "errors": [{ "message": "Entity not found", "extensions": {} }]
        }))
        .unwrap();

        assert!(body.data.is_none());
        assert_eq!(body.errors.unwrap()[0].message, "Entity not found");
    }

    #[derive(Debug, Deserialize)]
    struct Viewer {
        viewer: Named,
    }

    #[derive(Debug, Deserialize)]
    struct Named {
        name: String,
    }

    #[test]
    fn test_decode_data() {
        let viewer: Viewer =
            decode(StatusCode::OK, r#"{"data": {"viewer": {"name": "alice"}}}"#).unwrap();
        assert_eq!(viewer.viewer.name, "alice");
    }

    #[test]
    fn test_decode_non_success_status() {
        let err = decode::<Viewer>(StatusCode::UNAUTHORIZED, "Authentication required").unwrap_err();
        assert!(matches!(
            err,
            LinearError::Api { status: 401, ref message } if message == "Authentication required"
        ));
    }

    #[test]
    fn test_decode_graphql_errors() {
        let body = r#"{"data": null, "errors": [{"message": "Entity not found"}, {"message": "Forbidden"}]}"#;
        let err = decode::<Viewer>(StatusCode::OK, body).unwrap_err();
        assert!(matches!(
            err,
            LinearError::GraphQL { ref messages } if messages == &["Entity not found", "Forbidden"]
        ));
    }

    #[test]
    fn test_decode_empty_errors_array_is_ignored() {
        let body = r#"{"data": {"viewer": {"name": "bob"}}, "errors": []}"#;
        let viewer: Viewer = decode(StatusCode::OK, body).unwrap();
        assert_eq!(viewer.viewer.name, "bob");
    }

    #[test]
    fn test_decode_missing_data() {
        for body in [r#"{}"#, r#"{"data": null}"#] {
            let err = decode::<Viewer>(StatusCode::OK, body).unwrap_err();
            assert!(matches!(err, LinearError::EmptyResponse));
        }
    }

    #[test]
    fn test_decode_malformed_body() {
        let err = decode::<Viewer>(StatusCode::OK, "<html>").unwrap_err();
        assert!(matches!(err, LinearError::Decode(_)));
    }

    fn aliases(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected object"),
        }
    }

    #[test]
    fn test_all_deleted() {
        let data = aliases(json!({ "d0": { "success": true }, "d1": { "success": true } }));
        assert!(all_deleted(data, 2).unwrap());
    }

    #[test]
    fn test_all_deleted_one_alias_failed() {
        let data = aliases(json!({ "d0": { "success": true }, "d1": { "success": false } }));
        assert!(!all_deleted(data, 2).unwrap());
    }

    #[test]
    fn test_all_deleted_missing_alias() {
        let data = aliases(json!({ "d0": { "success": true } }));
        assert!(!all_deleted(data, 2).unwrap());
    }

    #[test]
    fn test_all_deleted_null_alias() {
        let data = aliases(json!({ "d0": { "success": true }, "d1": null }));
        assert!(!all_deleted(data, 2).unwrap());
    }
}
