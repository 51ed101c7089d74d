//! Feedback service.
//!
//! Orchestrates submission (validate, trim, insert), listing, and
//! aggregate statistics. Generic over the repository trait so the core
//! crate never depends on the database layer.

use feedbackd_types::error::{FeedbackError, StorageError};
use feedbackd_types::feedback::{Feedback, FeedbackDraft, FeedbackStats};

use crate::repository::FeedbackRepository;
use crate::validate;

/// Confirmation text returned with every accepted submission.
pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! Your feedback has been submitted successfully.";

/// Result of an accepted submission: the new row id plus the fixed
/// confirmation message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub id: i64,
    pub message: &'static str,
}

/// Service orchestrating the feedback lifecycle.
pub struct FeedbackService<R: FeedbackRepository> {
    repo: R,
}

impl<R: FeedbackRepository> FeedbackService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate and persist a submission.
    ///
    /// Invalid input returns the first violated rule without touching
    /// storage. On success the repository assigns the id and timestamp.
    pub async fn submit(&self, draft: FeedbackDraft) -> Result<SubmitReceipt, FeedbackError> {
        let new_feedback = validate::validate(&draft)?;
        let id = self.repo.insert(&new_feedback).await?;
        tracing::info!(id, rating = new_feedback.rating, "feedback stored");
        Ok(SubmitReceipt {
            id,
            message: CONFIRMATION_MESSAGE,
        })
    }

    /// All feedback, newest first. Authorization is enforced by the API
    /// layer, not here.
    pub async fn list_feedback(&self) -> Result<Vec<Feedback>, StorageError> {
        self.repo.list_all().await
    }

    /// Aggregate statistics over every record.
    ///
    /// The average is rounded to 2 decimal places and is 0 for an empty
    /// store. Ratings of 3 are neutral: counted in `total` and the
    /// average, in neither `positive` nor `negative`.
    pub async fn stats(&self) -> Result<FeedbackStats, StorageError> {
        let rows = self.repo.list_all_unordered().await?;

        let total = rows.len() as u64;
        let avg_rating = if total == 0 {
            0.0
        } else {
            let sum: u64 = rows.iter().map(|r| u64::from(r.rating)).sum();
            round2(sum as f64 / total as f64)
        };
        let positive = rows.iter().filter(|r| r.rating >= 4).count() as u64;
        let negative = rows.iter().filter(|r| r.rating < 3).count() as u64;

        Ok(FeedbackStats {
            total,
            avg_rating,
            positive,
            negative,
        })
    }
}

/// Round to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
