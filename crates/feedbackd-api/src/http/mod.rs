//! HTTP/REST API layer for feedbackd.
//!
//! Axum-based JSON API: a public submission endpoint, admin login, and
//! token-gated admin listing/statistics endpoints. CORS is permissive
//! and every request is traced.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
