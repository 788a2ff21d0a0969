//! # Blog Core
//!
//! The domain layer of the blog backend.
//! This crate contains the post entity, its validation rules, and the ports
//! that storage and upstream integrations implement. It has no infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::DomainError;
