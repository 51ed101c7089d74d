//! Feedback domain types.
//!
//! `FeedbackDraft` is the raw submission body, `NewFeedback` the
//! validated/trimmed form ready for insertion, and `Feedback` a
//! persisted row. Wire field names are camelCase (`createdAt`,
//! `avgRating`) to match the public JSON contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted feedback record.
///
/// Immutable after creation: the service never updates or deletes rows.
/// `id` is assigned by storage (auto-increment, strictly increasing),
/// `created_at` is set by the storage layer at insert time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

/// An unvalidated submission body as received from the client.
///
/// Every field is optional so that missing JSON keys deserialize
/// instead of rejecting the request before validation can name the
/// first missing field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedbackDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub rating: Option<i64>,
}

/// A validated submission with trimmed fields, ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub rating: u8,
}

/// Aggregate statistics over all feedback records.
///
/// `avg_rating` is rounded to 2 decimal places and is 0 when there are
/// no records. Records rated exactly 3 count toward `total` and the
/// average but are neither positive nor negative.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub total: u64,
    pub avg_rating: f64,
    pub positive: u64,
    pub negative: u64,
}
