//! Issue search filter construction
//!
//! Turns [`IssueSearchParams`] into Linear's nested `IssueFilter` object. A
//! query shaped like `ENG-123` becomes an exact team-key + number match;
//! anything else becomes a full-text `search` term.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Map, Value};

use crate::linear::types::IssueSearch;
use crate::params::IssueSearchParams;

pub const DEFAULT_PAGE_SIZE: u32 = 50;
pub const DEFAULT_ORDER_BY: &str = "updatedAt";

static ISSUE_IDENTIFIER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+-\d+$").expect("Invalid issue identifier regex"));

/// Split `ENG-123` into `("ENG", 123)`
pub fn parse_issue_identifier(query: &str) -> Option<(&str, i64)> {
    if !ISSUE_IDENTIFIER_REGEX.is_match(query) {
        return None;
    }
    let (team_key, number) = query.rsplit_once('-')?;
    Some((team_key, number.parse().ok()?))
}

/// Build the `IssueFilter` object for a search request
pub fn build_filter(params: &IssueSearchParams) -> Map<String, Value> {
    let mut filter = params.filter.clone().unwrap_or_default();

    let query = params.query.as_deref().map(str::trim).unwrap_or_default();
    if let Some((team_key, number)) = parse_issue_identifier(query) {
        merge_term(&mut filter, "team", json!({ "key": { "eq": team_key } }));
        merge_term(&mut filter, "number", json!({ "eq": number }));
    } else if !query.is_empty() {
        filter.insert("search".to_string(), json!(query));
    }

    if let Some(project_id) = &params.project_id {
        merge_term(&mut filter, "project", json!({ "id": { "eq": project_id } }));
    }
    if let Some(team_ids) = &params.team_ids {
        merge_term(&mut filter, "team", json!({ "id": { "in": team_ids } }));
    }
    if let Some(assignee_ids) = &params.assignee_ids {
        merge_term(&mut filter, "assignee", json!({ "id": { "in": assignee_ids } }));
    }
    if let Some(states) = &params.states {
        merge_term(&mut filter, "state", json!({ "name": { "in": states } }));
    }
    if let Some(priority) = params.priority {
        merge_term(&mut filter, "priority", json!({ "eq": priority }));
    }

    filter
}

/// Full search arguments: filter plus pagination and ordering defaults
pub fn build_search(params: &IssueSearchParams) -> IssueSearch {
    IssueSearch {
        filter: build_filter(params),
        first: params
            .first
            .filter(|&n| n > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE),
        after: params.after.clone(),
        order_by: params
            .order_by
            .clone()
            .filter(|o| !o.is_empty())
            .unwrap_or_else(|| DEFAULT_ORDER_BY.to_string()),
    }
}

/// Insert `term` under `key`, merging object fields with any existing term
fn merge_term(filter: &mut Map<String, Value>, key: &str, term: Value) {
    if let (Some(Value::Object(existing)), Value::Object(incoming)) = (filter.get_mut(key), &term)
    {
        for (field, value) in incoming {
            existing.insert(field.clone(), value.clone());
        }
        return;
    }
    filter.insert(key.to_string(), term);
}
