//! # Bloglist Core
//!
//! The domain layer of the bloglist service.
//! This crate contains the post/author model, the ports infrastructure must
//! implement, and the services that enforce authorization and keep the
//! author/post relationship consistent.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;
pub mod stats;

#[cfg(test)]
pub(crate) mod testing;

pub use error::DomainError;
