use thiserror::Error;

use crate::types::RecipeId;

/// Reasons a user action is rejected.
///
/// A rejected action never changes application state, so callers can tell
/// "nothing happened because of bad input" apart from a successful no-change.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("Required field is empty: {0}")]
    MissingField(&'static str),

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    #[error("Review comment is empty")]
    EmptyComment,

    #[error("Rating out of range: {0} (expected 1-5)")]
    InvalidRating(u8),
}
