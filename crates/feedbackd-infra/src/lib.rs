//! Infrastructure layer for feedbackd.
//!
//! Contains the SQLite implementation of the repository trait defined
//! in `feedbackd-core`.

pub mod sqlite;
