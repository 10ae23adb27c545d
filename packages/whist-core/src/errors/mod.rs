//! Error handling for the whist engine.

pub mod domain;

pub use domain::{DomainError, ValidationKind};
