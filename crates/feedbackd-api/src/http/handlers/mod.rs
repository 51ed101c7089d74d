//! HTTP request handlers for the REST API.

pub mod auth;
pub mod feedback;
pub mod stats;
