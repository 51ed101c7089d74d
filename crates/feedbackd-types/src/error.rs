use thiserror::Error;

/// Validation failures for a feedback submission.
///
/// Display strings are part of the public wire contract: the API
/// returns them verbatim in 400 responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    MissingName,

    #[error("Email is required")]
    MissingEmail,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Mobile number is required")]
    MissingMobile,

    #[error("Mobile number must be exactly 10 digits")]
    InvalidMobile,

    #[error("Message is required")]
    MissingMessage,

    /// Covers a missing rating, a rating of 0, and a rating outside
    /// [1,5]: the contract has a single combined check with one message.
    #[error("Rating must be between 1 and 5")]
    InvalidRating,
}

/// Authentication and authorization failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Unauthorized")]
    Unauthorized,
}

/// Errors from the persistence layer (used by the repository trait in
/// feedbackd-core).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),
}

/// Composite error for the feedback service: a submission either fails
/// validation (before any storage access) or fails in storage.
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(ValidationError::MissingName.to_string(), "Name is required");
        assert_eq!(
            ValidationError::InvalidMobile.to_string(),
            "Mobile number must be exactly 10 digits"
        );
        assert_eq!(
            ValidationError::InvalidRating.to_string(),
            "Rating must be between 1 and 5"
        );
    }

    #[test]
    fn test_auth_error_display() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
        assert_eq!(AuthError::Unauthorized.to_string(), "Unauthorized");
    }

    #[test]
    fn test_feedback_error_is_transparent() {
        let err = FeedbackError::from(ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Invalid email format");
    }
}
