//! Error handling for the shifumi backend.

pub mod domain;

pub use domain::DomainError;
