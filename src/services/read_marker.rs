//! Bulk read-flag updates.

use std::sync::Arc;

use tracing::debug;

use crate::domain::MessageRef;
use crate::host::{HostResult, MailHost};

/// Marks collected messages as read, skipping the already-read ones.
pub struct ReadMarker<H: MailHost> {
    host: Arc<H>,
}

impl<H: MailHost> ReadMarker<H> {
    /// Creates a marker over the given host.
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    /// Marks every still-unread message in `messages` as read and returns
    /// how many updates were issued.
    ///
    /// Already-read messages are skipped without an update call. Any failed
    /// update fails the whole operation; the count is only observable on
    /// full success.
    pub async fn mark_read(&self, messages: &[MessageRef]) -> HostResult<usize> {
        let mut count = 0;
        for message in messages {
            if message.read {
                continue;
            }
            self.host.mark_read(&message.id).await?;
            count += 1;
        }

        debug!(total = messages.len(), updated = count, "marked messages read");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FolderRef, MessageContent, MessageId};
    use crate::host::{HostError, MessagePage, NewTask, TaskList};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    fn message(id: &str, read: bool) -> MessageRef {
        MessageRef {
            id: MessageId::from(id),
            author: format!("{id}@example.com"),
            subject: String::new(),
            date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            read,
            folder: FolderRef::new("acct-1", "/INBOX"),
        }
    }

    /// Host fake recording mark-read calls, optionally failing on one ID.
    struct MarkingHost {
        marked: Mutex<Vec<String>>,
        fail_on: Option<String>,
    }

    impl MarkingHost {
        fn new() -> Self {
            Self {
                marked: Mutex::new(Vec::new()),
                fail_on: None,
            }
        }

        fn failing_on(id: &str) -> Self {
            Self {
                marked: Mutex::new(Vec::new()),
                fail_on: Some(id.to_string()),
            }
        }
    }

    #[async_trait]
    impl MailHost for MarkingHost {
        async fn list_messages(
            &self,
            _folder: &FolderRef,
            _continuation: Option<&str>,
        ) -> crate::host::HostResult<MessagePage> {
            Ok(MessagePage::default())
        }

        async fn get_message_content(
            &self,
            id: &MessageId,
        ) -> crate::host::HostResult<MessageContent> {
            Err(HostError::NotFound(id.to_string()))
        }

        async fn mark_read(&self, id: &MessageId) -> crate::host::HostResult<()> {
            if self.fail_on.as_deref() == Some(id.0.as_str()) {
                return Err(HostError::Api(format!("update failed for {id}")));
            }
            self.marked.lock().unwrap().push(id.0.clone());
            Ok(())
        }

        async fn list_task_lists(&self) -> crate::host::HostResult<Vec<TaskList>> {
            Ok(Vec::new())
        }

        async fn create_task(
            &self,
            _list: &crate::domain::TaskListId,
            _task: &NewTask,
        ) -> crate::host::HostResult<()> {
            Ok(())
        }

        async fn begin_reply(&self, _id: &MessageId, _body: &str) -> crate::host::HostResult<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn skips_already_read_messages_and_counts_updates() {
        let host = Arc::new(MarkingHost::new());
        let marker = ReadMarker::new(Arc::clone(&host));

        let messages = vec![
            message("m1", false),
            message("m2", true),
            message("m3", false),
        ];
        let count = marker.mark_read(&messages).await.unwrap();

        assert_eq!(count, 2);
        assert_eq!(*host.marked.lock().unwrap(), vec!["m1", "m3"]);
    }

    #[tokio::test]
    async fn empty_input_marks_nothing() {
        let marker = ReadMarker::new(Arc::new(MarkingHost::new()));
        assert_eq!(marker.mark_read(&[]).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn single_update_failure_fails_the_whole_operation() {
        let host = Arc::new(MarkingHost::failing_on("m3"));
        let marker = ReadMarker::new(Arc::clone(&host));

        let messages = vec![
            message("m1", false),
            message("m3", false),
            message("m4", false),
        ];
        let err = marker.mark_read(&messages).await.unwrap_err();

        assert!(matches!(err, HostError::Api(_)));
        // The failure aborted iteration before m4.
        assert_eq!(*host.marked.lock().unwrap(), vec!["m1"]);
    }
}
