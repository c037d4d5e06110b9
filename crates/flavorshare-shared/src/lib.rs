//! # flavorshare-shared
//!
//! Domain types and pure derivations used by every FlavorShare crate:
//! records, identity derivation, feed ranking, instruction parsing and the
//! action rejection reasons. Nothing in here performs I/O.

pub mod constants;
pub mod error;
pub mod identity;
pub mod models;
pub mod ranking;
pub mod steps;
pub mod types;

pub use error::ActionError;
pub use models::*;
pub use types::*;
