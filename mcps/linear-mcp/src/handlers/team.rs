//! Team handler implementations

use crate::error::ToolResult;
use crate::linear::types::Team;
use crate::linear::Session;

/// All teams visible to the API key, with their workflow states
pub async fn list_teams(session: &Session) -> ToolResult<Vec<Team>> {
    let api = session.verify_auth()?;
    Ok(api.get_teams().await?)
}
