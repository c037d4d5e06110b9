use flavorshare_shared::ActionError;
use flavorshare_store::StoreError;
use thiserror::Error;

/// Errors returned by [`Client`](crate::Client) commands.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The action was rejected; nothing changed.
    #[error(transparent)]
    Action(#[from] ActionError),

    /// The action was applied in memory but could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ClientError {
    /// The rejection reason, if this is a rejected action.
    pub fn action(&self) -> Option<&ActionError> {
        match self {
            Self::Action(e) => Some(e),
            Self::Store(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
