//! Message headers, content trees and time windows.
//!
//! A [`MessageRef`] is the lightweight header record used for filtering
//! before any body is fetched; [`MessageContent`] is the separately fetched
//! full content, which may be flat or a tree of MIME-like parts.

use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{FolderRef, MessageId};

/// Placeholder substituted when a message has no extractable text at all.
pub const NO_CONTENT_PLACEHOLDER: &str = "(No content)";

/// A lightweight message header, as delivered by the host's listing calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRef {
    /// Host-assigned message identifier.
    pub id: MessageId,
    /// Sender, as the host displays it (name, address or both).
    pub author: String,
    /// Subject line; may be empty.
    pub subject: String,
    /// Normalized send date. Hosts deliver timestamps in varying units;
    /// conversion happens once at ingestion, see [`date_from_epoch_ms`].
    pub date: DateTime<Utc>,
    /// Whether the message has been read.
    pub read: bool,
    /// Folder the message lives in.
    pub folder: FolderRef,
}

/// Normalizes a raw epoch-millisecond timestamp from the host into the
/// comparable instant type used for all range checks.
pub fn date_from_epoch_ms(millis: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis)
}

/// One node of a message's MIME-like part tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    /// MIME content type, possibly with parameters (e.g. "text/plain; charset=utf-8").
    pub content_type: String,
    /// Decoded part body, if this part carries one.
    pub body: Option<String>,
    /// Nested sub-parts for multipart containers.
    pub parts: Vec<MessagePart>,
}

impl MessagePart {
    /// Creates a leaf part with a body.
    pub fn leaf(content_type: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            body: Some(body.into()),
            parts: Vec::new(),
        }
    }

    /// Creates a container part holding sub-parts.
    pub fn container(content_type: impl Into<String>, parts: Vec<MessagePart>) -> Self {
        Self {
            content_type: content_type.into(),
            body: None,
            parts,
        }
    }

    fn is_plain_text(&self) -> bool {
        self.content_type
            .split(';')
            .next()
            .is_some_and(|media| media.trim().eq_ignore_ascii_case("text/plain"))
    }
}

/// A message's full content, fetched separately from its header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageContent {
    /// Flat body, present when the host does not deliver a part tree.
    pub body: Option<String>,
    /// Part tree, empty for flat messages.
    pub parts: Vec<MessagePart>,
}

impl MessageContent {
    /// Extracts the displayable plain text of this message.
    ///
    /// Takes the first `text/plain` part found by a depth-first search over
    /// the part tree, falls back to the flat body, and substitutes
    /// [`NO_CONTENT_PLACEHOLDER`] when neither yields text. Every summarize,
    /// reply and task path goes through this one routine.
    pub fn plain_text(&self) -> String {
        if let Some(text) = find_plain_part(&self.parts) {
            return text;
        }
        match &self.body {
            Some(body) if !body.is_empty() => body.clone(),
            _ => NO_CONTENT_PLACEHOLDER.to_string(),
        }
    }
}

fn find_plain_part(parts: &[MessagePart]) -> Option<String> {
    for part in parts {
        if part.is_plain_text() {
            if let Some(body) = &part.body {
                if !body.is_empty() {
                    return Some(body.clone());
                }
            }
        }
        if let Some(found) = find_plain_part(&part.parts) {
            return Some(found);
        }
    }
    None
}

/// An inclusive time window used to select messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Inclusive upper bound.
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Creates a range over `[start, end]`. Arguments given out of order are
    /// swapped so the range always satisfies `start <= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// The last `hours` hours, ending now.
    pub fn last_hours(hours: i64) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::hours(hours),
            end,
        }
    }

    /// The last `days` days, ending now.
    pub fn last_days(days: i64) -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::days(days),
            end,
        }
    }

    /// Yesterday as a full calendar day, midnight to midnight in UTC.
    pub fn yesterday() -> Self {
        let today = Utc::now().date_naive().and_time(NaiveTime::MIN).and_utc();
        Self {
            start: today - Duration::days(1),
            end: today - Duration::milliseconds(1),
        }
    }

    /// Whether `instant` falls within the range, bounds included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }
}
