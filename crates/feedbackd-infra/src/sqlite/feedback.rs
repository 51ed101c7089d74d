//! SQLite feedback repository implementation.
//!
//! Implements `FeedbackRepository` from `feedbackd-core` using sqlx
//! with the split read/write pools: raw queries, a private Row struct
//! for SQLite-to-domain mapping, writes on the writer pool only.

use chrono::{DateTime, NaiveDateTime, Utc};
use feedbackd_core::repository::FeedbackRepository;
use feedbackd_types::error::StorageError;
use feedbackd_types::feedback::{Feedback, NewFeedback};
use sqlx::Row;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `FeedbackRepository`.
pub struct SqliteFeedbackRepository {
    pool: DatabasePool,
}

impl SqliteFeedbackRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    async fn fetch_all(&self, query: &str) -> Result<Vec<Feedback>, StorageError> {
        let rows = sqlx::query(query)
            .fetch_all(&self.pool.reader)
            .await
            .map_err(|e| StorageError::Query(e.to_string()))?;

        rows.iter()
            .map(|row| FeedbackRow::from_row(row).and_then(FeedbackRow::into_feedback))
            .collect()
    }
}

/// Internal row type for mapping SQLite rows to domain Feedback.
struct FeedbackRow {
    id: i64,
    name: String,
    email: String,
    mobile: String,
    message: String,
    rating: i64,
    created_at: String,
}

impl FeedbackRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, StorageError> {
        let get = |e: sqlx::Error| StorageError::Query(e.to_string());
        Ok(Self {
            id: row.try_get("id").map_err(get)?,
            name: row.try_get("name").map_err(get)?,
            email: row.try_get("email").map_err(get)?,
            mobile: row.try_get("mobile").map_err(get)?,
            message: row.try_get("message").map_err(get)?,
            rating: row.try_get("rating").map_err(get)?,
            created_at: row.try_get("created_at").map_err(get)?,
        })
    }

    fn into_feedback(self) -> Result<Feedback, StorageError> {
        let created_at = parse_datetime(&self.created_at)?;
        Ok(Feedback {
            id: self.id,
            name: self.name,
            email: self.email,
            mobile: self.mobile,
            message: self.message,
            rating: self.rating as u8,
            created_at,
        })
    }
}

/// Parse a stored timestamp: RFC 3339 as written by `insert`, with a
/// fallback for the `CURRENT_TIMESTAMP` column default.
fn parse_datetime(value: &str) -> Result<DateTime<Utc>, StorageError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| StorageError::Query(format!("invalid created_at '{value}': {e}")))
}

impl FeedbackRepository for SqliteFeedbackRepository {
    async fn insert(&self, feedback: &NewFeedback) -> Result<i64, StorageError> {
        let created_at = Utc::now().to_rfc3339();
        let result = sqlx::query(
            "INSERT INTO feedbacks (name, email, mobile, message, rating, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&feedback.name)
        .bind(&feedback.email)
        .bind(&feedback.mobile)
        .bind(&feedback.message)
        .bind(i64::from(feedback.rating))
        .bind(&created_at)
        .execute(&self.pool.writer)
        .await
        .map_err(|e| StorageError::Query(e.to_string()))?;

        Ok(result.last_insert_rowid())
    }

    async fn list_all(&self) -> Result<Vec<Feedback>, StorageError> {
        // Newest first; id breaks ties for same-second inserts.
        self.fetch_all(
            "SELECT id, name, email, mobile, message, rating, created_at
             FROM feedbacks ORDER BY created_at DESC, id DESC",
        )
        .await
    }

    async fn list_all_unordered(&self) -> Result<Vec<Feedback>, StorageError> {
        self.fetch_all(
            "SELECT id, name, email, mobile, message, rating, created_at FROM feedbacks",
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_repo() -> SqliteFeedbackRepository {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("test.db");
        let url = format!("sqlite://{}?mode=rwc", db_path.display());
        // Leak tempdir so it lives for the test
        std::mem::forget(dir);
        SqliteFeedbackRepository::new(DatabasePool::new(&url).await.unwrap())
    }

    fn make_feedback(name: &str, rating: u8) -> NewFeedback {
        NewFeedback {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "1234567890".to_string(),
            message: format!("Message from {name}"),
            rating,
        }
    }

    #[tokio::test]
    async fn test_insert_returns_increasing_ids() {
        let repo = test_repo().await;

        let first = repo.insert(&make_feedback("Ada", 5)).await.unwrap();
        let second = repo.insert(&make_feedback("Grace", 4)).await.unwrap();

        assert!(second > first);
    }

    #[tokio::test]
    async fn test_insert_then_read_round_trips_fields() {
        let repo = test_repo().await;
        repo.insert(&make_feedback("Ada", 3)).await.unwrap();

        let rows = repo.list_all().await.unwrap();
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.name, "Ada");
        assert_eq!(row.email, "ada@example.com");
        assert_eq!(row.mobile, "1234567890");
        assert_eq!(row.rating, 3);
        // created_at was assigned by the repository, not the caller.
        assert!(row.created_at <= Utc::now());
    }

    #[tokio::test]
    async fn test_list_all_is_newest_first() {
        let repo = test_repo().await;
        // Same-second inserts: the id tie-break keeps reverse insertion
        // order.
        for name in ["A", "B", "C"] {
            repo.insert(&make_feedback(name, 4)).await.unwrap();
        }

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|f| f.name)
            .collect();
        assert_eq!(names, vec!["C", "B", "A"]);
    }

    #[tokio::test]
    async fn test_list_all_unordered_returns_every_row() {
        let repo = test_repo().await;
        for rating in [5, 5, 1, 3] {
            repo.insert(&make_feedback("A", rating)).await.unwrap();
        }

        let rows = repo.list_all_unordered().await.unwrap();
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_parse_datetime_accepts_column_default_format() {
        let dt = parse_datetime("2026-08-27 10:15:00").unwrap();
        assert_eq!(dt.to_rfc3339(), "2026-08-27T10:15:00+00:00");
    }
}
