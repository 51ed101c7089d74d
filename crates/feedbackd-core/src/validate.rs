//! Submission validation.
//!
//! Pure functions with no side effects. Rules run in a fixed order and
//! the first failure wins; the error Display strings are returned
//! verbatim to the client.
//!
//! Pattern checks (email, mobile) run against the raw, untrimmed value:
//! both patterns reject whitespace, so a padded value like
//! `" ada@example.com "` fails the format rule rather than being
//! silently accepted. Trimming happens only once validation has passed.

use feedbackd_types::error::ValidationError;
use feedbackd_types::feedback::{FeedbackDraft, NewFeedback};

/// Validate a draft submission and produce the trimmed record to insert.
///
/// Rule order: name present, email present, email format, mobile
/// present, mobile format, message present, rating in [1,5].
pub fn validate(draft: &FeedbackDraft) -> Result<NewFeedback, ValidationError> {
    let name = require(&draft.name, ValidationError::MissingName)?;
    let email = require(&draft.email, ValidationError::MissingEmail)?;
    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    let mobile = require(&draft.mobile, ValidationError::MissingMobile)?;
    if !is_valid_mobile(mobile) {
        return Err(ValidationError::InvalidMobile);
    }
    let message = require(&draft.message, ValidationError::MissingMessage)?;

    // A single combined check: absent, zero, and out-of-range ratings
    // all map to the same error.
    let rating = match draft.rating {
        Some(r) if (1..=5).contains(&r) => r as u8,
        _ => return Err(ValidationError::InvalidRating),
    };

    Ok(NewFeedback {
        name: name.trim().to_string(),
        email: email.trim().to_string(),
        mobile: mobile.trim().to_string(),
        message: message.trim().to_string(),
        rating,
    })
}

/// Presence check: the field must exist and be non-blank after trimming.
fn require<'a>(
    field: &'a Option<String>,
    missing: ValidationError,
) -> Result<&'a str, ValidationError> {
    match field.as_deref() {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(missing),
    }
}

/// Simple two-part address check: one or more non-whitespace, non-`@`
/// characters, then `@`, then a domain containing at least one `.`,
/// again with no whitespace or extra `@`.
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let ok_part = |s: &str| !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '@');
    ok_part(local) && ok_part(host) && ok_part(tld)
}

/// Exactly 10 ASCII decimal digits: no spaces, no country code, no `+`.
fn is_valid_mobile(mobile: &str) -> bool {
    mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit())
}
