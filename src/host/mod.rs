//! Narrow interface to the host mail client.
//!
//! Everything this crate needs from the surrounding mail client goes
//! through [`MailHost`]: paged folder listings, message content, read
//! flags, task lists and reply composition. The host side owns storage,
//! rendering and account management.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{FolderRef, MessageContent, MessageId, MessageRef, TaskListId};

/// Errors surfaced by host mail client calls.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host API call itself failed.
    #[error("host API call failed: {0}")]
    Api(String),

    /// A referenced message, folder or task list does not exist.
    #[error("not found: {0}")]
    NotFound(String),
}

/// Result type for host operations.
pub type HostResult<T> = Result<T, HostError>;

/// One page of a folder listing plus the token for the next page.
#[derive(Debug, Clone, Default)]
pub struct MessagePage {
    /// Headers in the order the host delivered them.
    pub messages: Vec<MessageRef>,
    /// Opaque continuation token; `None` means the listing is exhausted.
    pub continuation: Option<String>,
}

/// A task list offered by the host's task/calendar store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskList {
    /// Host-assigned list identifier.
    pub id: TaskListId,
    /// Display name.
    pub name: String,
}

/// A task item to create in the host's task store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    /// Task title.
    pub title: String,
    /// Optional due date; hosts without due-date support may ignore it.
    pub due: Option<DateTime<Utc>>,
    /// Free-form notes.
    pub notes: String,
}

/// The surface this crate consumes from the host mail client.
///
/// Dates crossing this boundary must already be normalized to UTC
/// instants; implementations converting raw host timestamps can use
/// [`crate::domain::date_from_epoch_ms`]. All methods are fallible host
/// calls and none of them retries internally.
#[async_trait]
pub trait MailHost: Send + Sync {
    /// Lists one page of message headers in `folder`, continuing from a
    /// previous page's token when given.
    async fn list_messages(
        &self,
        folder: &FolderRef,
        continuation: Option<&str>,
    ) -> HostResult<MessagePage>;

    /// Fetches a message's full content, flat or as a part tree.
    async fn get_message_content(&self, id: &MessageId) -> HostResult<MessageContent>;

    /// Marks a message as read.
    async fn mark_read(&self, id: &MessageId) -> HostResult<()>;

    /// Lists the task lists available for task creation.
    async fn list_task_lists(&self) -> HostResult<Vec<TaskList>>;

    /// Creates a task in the given list.
    async fn create_task(&self, list: &TaskListId, task: &NewTask) -> HostResult<()>;

    /// Opens a reply to `id` pre-populated with `body`.
    async fn begin_reply(&self, id: &MessageId, body: &str) -> HostResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_error_display() {
        let api = HostError::Api("messages.list failed".to_string());
        assert_eq!(api.to_string(), "host API call failed: messages.list failed");

        let missing = HostError::NotFound("task list list-9".to_string());
        assert!(missing.to_string().contains("not found"));
    }

    #[test]
    fn empty_page_has_no_continuation() {
        let page = MessagePage::default();
        assert!(page.messages.is_empty());
        assert!(page.continuation.is_none());
    }

    #[test]
    fn new_task_serialization_roundtrip() {
        let task = NewTask {
            title: "Email: Quarterly report".to_string(),
            due: None,
            notes: "Follow up with finance.".to_string(),
        };

        let json = serde_json::to_string(&task).unwrap();
        let deserialized: NewTask = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, task);
    }
}
