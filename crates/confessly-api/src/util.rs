use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use confessly_db::models::{CommentRow, ConfessionRow};
use confessly_types::api::{CommentResponse, ConfessionResponse};
use confessly_types::models::{ANONYMOUS_HANDLE, comment_author_handle};

use crate::error::ApiError;

/// SQLite stores timestamps as "YYYY-MM-DD HH:MM:SS" without timezone.
/// Parse as naive UTC; corrupt values degrade to the epoch with a warning.
pub fn parse_timestamp(raw: &str) -> DateTime<Utc> {
    raw.parse::<DateTime<Utc>>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc()))
        .unwrap_or_else(|e| {
            warn!("Corrupt timestamp '{}': {}", raw, e);
            DateTime::default()
        })
}

/// Checks length on the text as submitted and returns it trimmed.
pub fn validate_text(raw: &str, max_chars: usize, what: &str) -> Result<String, ApiError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ApiError::bad_request(format!("{what} content is required")));
    }
    if raw.chars().count() > max_chars {
        return Err(ApiError::bad_request(format!(
            "{what} must be {max_chars} characters or less"
        )));
    }
    Ok(trimmed.to_string())
}

/// Reader view. The author is deliberately not part of the output.
pub fn confession_response(row: ConfessionRow) -> ConfessionResponse {
    ConfessionResponse {
        id: row.id,
        content: row.content,
        mood: row.mood,
        location: row.location,
        tagged_users: row.tagged_users,
        upvotes: row.upvotes,
        downvotes: row.downvotes,
        created_at: parse_timestamp(&row.created_at),
        author_handle: ANONYMOUS_HANDLE.to_string(),
    }
}

pub fn comment_response(row: CommentRow) -> CommentResponse {
    CommentResponse {
        id: row.id,
        content: row.content,
        author_handle: comment_author_handle(row.user_id).to_string(),
        created_at: parse_timestamp(&row.created_at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn parses_sqlite_and_rfc3339_timestamps() {
        let t = parse_timestamp("2024-03-05 07:08:09");
        assert_eq!((t.year(), t.month(), t.day()), (2024, 3, 5));
        assert_eq!((t.hour(), t.minute(), t.second()), (7, 8, 9));

        let t = parse_timestamp("2024-03-05T07:08:09Z");
        assert_eq!(t.hour(), 7);

        assert_eq!(parse_timestamp("yesterday"), DateTime::<Utc>::default());
    }

    #[test]
    fn text_limits_count_characters() {
        assert_eq!(validate_text("  hi  ", 10, "Comment").unwrap(), "hi");
        assert!(validate_text("   ", 10, "Comment").is_err());
        assert!(validate_text(&"a".repeat(300), 300, "Comment").is_ok());
        assert!(validate_text(&"a".repeat(301), 300, "Comment").is_err());
        // multi-byte characters count once each
        assert!(validate_text(&"é".repeat(500), 500, "Confession").is_ok());
    }

    #[test]
    fn limit_error_names_the_limit() {
        match validate_text(&"x".repeat(501), 500, "Confession") {
            Err(ApiError::BadRequest(msg)) => {
                assert_eq!(msg, "Confession must be 500 characters or less")
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
