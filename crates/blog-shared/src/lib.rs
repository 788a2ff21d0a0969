//! # Blog Shared
//!
//! Wire types shared between the API server and the bundled frontend.

pub mod dto;
pub mod response;

pub use response::{MessageResponse, StatusResponse};
