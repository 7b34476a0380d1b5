//! Infrastructure layer for the Zellij plugin sandbox.
//!
//! Inside the sandbox the plugin sees its own data folder at `/data` and the
//! host filesystem (rooted at Zellij's working directory) under `/host`.

pub mod paths;

pub use paths::{data_dir, expand_tilde};
