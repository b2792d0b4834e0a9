//! Shared types for the storefront order flow
//!
//! Contains only the domain types exchanged across the collaborator boundary
//! and the tracing bootstrap. Component-internal types (like the production
//! gateway configuration) are kept in their respective crates.

pub mod logging;
pub mod types;

pub use types::*;
