//! Core domain types shared across services.

mod message;
mod types;

pub use message::{
    date_from_epoch_ms, MessageContent, MessagePart, MessageRef, TimeRange, NO_CONTENT_PLACEHOLDER,
};
pub use types::{FolderRef, MessageId, TaskListId};
