//! Shared domain types for feedbackd.
//!
//! This crate contains the core domain types used across the service:
//! Feedback and its submission/statistics shapes, plus the error enums.
//!
//! Zero infrastructure dependencies -- only serde, chrono, thiserror.

pub mod error;
pub mod feedback;
