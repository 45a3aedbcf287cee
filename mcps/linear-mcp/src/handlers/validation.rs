//! Structural presence checks for tool parameters

use crate::error::{ToolError, ToolResult};

/// A value that can be absent, or present but empty
pub trait Presence {
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T> Presence for Vec<T> {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

impl Presence for crate::params::IssueUpdateFields {
    fn is_present(&self) -> bool {
        true
    }
}

/// Fail on the first field, in order, that is missing or empty
pub fn validate_required(fields: &[(&str, &dyn Presence)]) -> ToolResult<()> {
    match fields.iter().find(|(_, value)| !value.is_present()) {
        Some((name, _)) => Err(ToolError::validation(*name)),
        None => Ok(()),
    }
}
