//! FeedbackRepository trait definition.
//!
//! The persistence port implemented in feedbackd-infra (e.g.
//! `SqliteFeedbackRepository`). Uses native async fn in traits (RPITIT,
//! Rust 2024 edition).

use feedbackd_types::error::StorageError;
use feedbackd_types::feedback::{Feedback, NewFeedback};

/// Repository trait for feedback persistence.
///
/// The store only ever holds validated records: callers must run the
/// validator before `insert`. Rows are immutable once written.
pub trait FeedbackRepository: Send + Sync {
    /// Insert a validated record. Storage assigns `id` (strictly
    /// increasing) and `created_at`; returns the new id.
    fn insert(
        &self,
        feedback: &NewFeedback,
    ) -> impl std::future::Future<Output = Result<i64, StorageError>> + Send;

    /// All records, newest first: `created_at` DESC with ties broken by
    /// `id` DESC so same-second inserts keep insertion order reversed.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Feedback>, StorageError>> + Send;

    /// All records in unspecified order. Used for aggregation, where
    /// ordering is irrelevant.
    fn list_all_unordered(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Feedback>, StorageError>> + Send;
}
