//! Business logic and repository trait definition for feedbackd.
//!
//! This crate defines the "port" (repository trait) that the
//! infrastructure layer implements. It depends only on
//! `feedbackd-types` -- never on `feedbackd-infra` or any database/IO
//! crate.

pub mod auth;
pub mod repository;
pub mod service;
pub mod validate;
