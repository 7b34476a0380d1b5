//! Domain layer for the Roster plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`user`]: User record model as served by the directory endpoint

pub mod error;
pub mod user;

pub use error::{Result, RosterError};
pub use user::{Address, Company, UserRecord};
