//! Directory pipeline: load, index, filter.
//!
//! These pieces are free of Zellij APIs and of any terminal painting. They talk
//! to the rendering side only through the [`View`](crate::ui::view::View) trait,
//! which keeps them testable with a recording double.
//!
//! # Modules
//!
//! - [`loader`]: Endpoint constants, response parsing, load settling
//! - [`index`]: Distinct city/company options for the selectors
//! - [`filter`]: Query + selector predicates over the full collection

pub mod filter;
pub mod index;
pub mod loader;

pub use filter::{apply_filters, cycle_selection, FilterState, Step};
pub use index::FilterIndex;
pub use loader::{parse_response, settle, LoadPhase, USERS_ENDPOINT};
