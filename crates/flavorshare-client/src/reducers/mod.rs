//! State transitions.
//!
//! Every user action is a method on [`AppState`](crate::state::AppState)
//! returning an [`Outcome`](crate::state::Outcome).  A rejected action
//! returns an [`ActionError`] and leaves the state exactly as it was; an
//! accepted one mutates the state and lists the [`Effect`](crate::state::Effect)s
//! the caller must persist.

pub mod favorites;
pub mod navigation;
pub mod recipes;
pub mod session;
pub mod settings;

use flavorshare_shared::ActionError;

/// Reject empty required form fields.
pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ActionError> {
    if value.is_empty() {
        return Err(ActionError::MissingField(field));
    }
    Ok(())
}
