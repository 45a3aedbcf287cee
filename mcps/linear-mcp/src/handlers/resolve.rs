//! Workflow-state reference resolution
//!
//! Callers may name a state ("Done") instead of passing its id. Names are
//! matched case-insensitively against every team's states, in the order
//! Linear lists them; the first match wins even if another team has a state
//! with the same name.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::error::{ToolError, ToolResult};
use crate::linear::types::{IssueUpdateInput, Team, WorkflowState};
use crate::linear::LinearApi;
use crate::params::IssueUpdateFields;

static OPAQUE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$")
        .expect("Invalid opaque id regex")
});

/// A workflow state given either by id or by display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateReference {
    Id(String),
    Name(String),
}

impl StateReference {
    pub fn parse(value: &str) -> Self {
        if is_opaque_id(value) {
            Self::Id(value.to_string())
        } else {
            Self::Name(value.to_string())
        }
    }
}

/// Whether `value` has the 8-4-4-4-12 hex shape of a Linear id
pub fn is_opaque_id(value: &str) -> bool {
    OPAQUE_ID_REGEX.is_match(value)
}

/// First state, scanning teams then states in order, whose name matches
pub fn find_state<'a>(teams: &'a [Team], name: &str) -> Option<&'a WorkflowState> {
    let wanted = name.to_lowercase();
    teams
        .iter()
        .flat_map(|team| team.states.iter())
        .find(|state| state.name.to_lowercase() == wanted)
}

/// Turn a state reference into an id, looking names up in Linear
pub async fn resolve_state_id(api: &dyn LinearApi, reference: StateReference) -> ToolResult<String> {
    match reference {
        StateReference::Id(id) => Ok(id),
        StateReference::Name(name) => {
            let teams = api.get_teams().await?;
            let state = find_state(&teams, &name).ok_or_else(|| ToolError::NotFound {
                kind: "Workflow state",
                value: name.clone(),
            })?;
            debug!(name = %name, state_id = %state.id, "resolved workflow state");
            Ok(state.id.clone())
        }
    }
}

/// Build the mutation input, resolving `stateId` first when it is a name
pub async fn resolve_update(
    api: &dyn LinearApi,
    fields: IssueUpdateFields,
) -> ToolResult<IssueUpdateInput> {
    let state_id = match fields.state_id {
        Some(value) => Some(resolve_state_id(api, StateReference::parse(&value)).await?),
        None => None,
    };

    Ok(IssueUpdateInput {
        title: fields.title,
        description: fields.description,
        assignee_id: fields.assignee_id,
        priority: fields.priority,
        project_id: fields.project_id,
        state_id,
    })
}
