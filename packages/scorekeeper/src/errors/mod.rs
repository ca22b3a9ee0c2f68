//! Error handling for the scorekeeper engines.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
