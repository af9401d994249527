//! Identifier types for host-owned entities.
//!
//! These newtype wrappers provide type safety for identifiers handed out by
//! the host mail client, preventing accidental mixing of different ID kinds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a message, assigned by the host mail client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Unique identifier for a task list in the host's task/calendar store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskListId(pub String);

impl fmt::Display for TaskListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TaskListId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TaskListId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// Identifies a mail folder by owning account and path.
///
/// Folders are opaque to this crate and only ever compared for identity.
/// Some host query modes cannot filter by folder natively, so collectors
/// re-check this identity on every message they see.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderRef {
    /// Account the folder belongs to.
    pub account_id: String,
    /// Folder path within the account (e.g. "/INBOX").
    pub path: String,
}

impl FolderRef {
    /// Creates a folder reference from an account and path.
    pub fn new(account_id: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            account_id: account_id.into(),
            path: path.into(),
        }
    }
}

impl fmt::Display for FolderRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.account_id, self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_id_display() {
        let id = MessageId::from("msg-42");
        assert_eq!(id.to_string(), "msg-42");
    }

    #[test]
    fn folder_identity_requires_account_and_path() {
        let a = FolderRef::new("acct-1", "/INBOX");
        let b = FolderRef::new("acct-1", "/INBOX");
        let other_account = FolderRef::new("acct-2", "/INBOX");
        let other_path = FolderRef::new("acct-1", "/Archive");

        assert_eq!(a, b);
        assert_ne!(a, other_account);
        assert_ne!(a, other_path);
    }

    #[test]
    fn folder_display() {
        let folder = FolderRef::new("acct-1", "/INBOX");
        assert_eq!(folder.to_string(), "acct-1:/INBOX");
    }

    #[test]
    fn id_serialization_roundtrip() {
        let id = TaskListId::from("list-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"list-1\"");

        let deserialized: TaskListId = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, id);
    }
}
