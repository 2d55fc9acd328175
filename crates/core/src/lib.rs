//! Shared domain types for the Atelier backend.
//!
//! Holds the pieces every other crate needs: the domain error enum,
//! id generation, and common type aliases.

pub mod error;
pub mod ids;
pub mod types;
