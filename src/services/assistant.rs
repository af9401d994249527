//! Single-message assistant actions: summarize, draft a reply, create a
//! task.
//!
//! These share the plain-text extraction and prompt wording with the bulk
//! pipeline but bound the body at the looser single-message limit, since
//! only one body occupies the prompt.

use std::sync::Arc;

use tracing::debug;

use super::generation::Generator;
use super::prompts::{self, DEFAULT_SYSTEM_PROMPT, SINGLE_BODY_LIMIT};
use super::AssistantError;
use crate::domain::{MessageRef, TaskListId};
use crate::host::{MailHost, NewTask, TaskList};

/// Heading inserted above an AI summary inside task notes.
const SUMMARY_HEADING: &str = "--- AI Summary ---";

/// Runs assistant actions against the currently selected message.
pub struct MessageAssistant<H: MailHost, G: Generator> {
    host: Arc<H>,
    generator: Arc<G>,
}

impl<H: MailHost, G: Generator> MessageAssistant<H, G> {
    /// Creates an assistant over the given host and generation backend.
    pub fn new(host: Arc<H>, generator: Arc<G>) -> Self {
        Self { host, generator }
    }

    /// Task lists available as targets for [`Self::create_task`], for the
    /// host's list picker.
    pub async fn task_lists(&self) -> Result<Vec<TaskList>, AssistantError> {
        Ok(self.host.list_task_lists().await?)
    }

    async fn message_body(&self, message: &MessageRef) -> Result<String, AssistantError> {
        let content = self.host.get_message_content(&message.id).await?;
        let body = content.plain_text();
        Ok(prompts::truncate_chars(&body, SINGLE_BODY_LIMIT).to_string())
    }

    /// Summarizes one message, optionally calling out `keywords`.
    pub async fn summarize_message(
        &self,
        message: &MessageRef,
        keywords: &str,
    ) -> Result<String, AssistantError> {
        let body = self.message_body(message).await?;
        let prompt = prompts::single_summary_prompt(&message.author, keywords, &body);
        let summary = self.generator.generate(&prompt, DEFAULT_SYSTEM_PROMPT).await?;
        Ok(summary)
    }

    /// Drafts a reply to `message` and opens it in the host's composer.
    ///
    /// Returns the drafted text so the caller can display it alongside the
    /// opened compose window.
    pub async fn draft_reply(
        &self,
        message: &MessageRef,
        instructions: Option<&str>,
    ) -> Result<String, AssistantError> {
        let body = self.message_body(message).await?;
        let prompt = prompts::reply_prompt(&message.author, instructions, &body);
        let draft = self.generator.generate(&prompt, DEFAULT_SYSTEM_PROMPT).await?;

        self.host.begin_reply(&message.id, &draft).await?;
        debug!(message = %message.id, "reply draft opened in composer");
        Ok(draft)
    }

    /// Converts `message` into a task in `list`.
    ///
    /// The task notes start from the user's `notes`, gain an AI summary
    /// section when `include_summary` is set, and always end with the
    /// original subject, sender and received date. The message date becomes
    /// the due date; hosts without due-date support ignore it. Returns the
    /// created task payload.
    pub async fn create_task(
        &self,
        message: &MessageRef,
        list: &TaskListId,
        notes: &str,
        include_summary: bool,
        keywords: &str,
    ) -> Result<NewTask, AssistantError> {
        let mut final_notes = notes.trim().to_string();

        if include_summary {
            let summary = self.summarize_message(message, keywords).await?;
            if final_notes.is_empty() {
                final_notes = format!("{SUMMARY_HEADING}\n{summary}");
            } else {
                final_notes.push_str(&format!("\n\n{SUMMARY_HEADING}\n{summary}"));
            }
        }

        final_notes.push_str(&format!("\n\nOriginal Subject: {}", message.subject));
        final_notes.push_str(&format!("\nFrom: {}", message.author));
        final_notes.push_str(&format!(
            "\nReceived: {}",
            message.date.format("%Y-%m-%d %H:%M UTC")
        ));

        let title = if message.subject.is_empty() {
            "Email Task".to_string()
        } else {
            format!("Email: {}", message.subject)
        };

        let task = NewTask {
            title,
            due: Some(message.date),
            notes: final_notes,
        };
        self.host.create_task(list, &task).await?;

        debug!(message = %message.id, list = %list, "task created from message");
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FolderRef, MessageContent, MessageId, MessagePart};
    use crate::host::{HostError, HostResult, MessagePage, TaskList};
    use crate::services::generation::MockGenerator;
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    fn selected_message() -> MessageRef {
        MessageRef {
            id: MessageId::from("msg-1"),
            author: "Alice <alice@example.com>".to_string(),
            subject: "Quarterly report".to_string(),
            date: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            read: false,
            folder: FolderRef::new("acct-1", "/INBOX"),
        }
    }

    /// Host fake with one message body, recording replies and created tasks.
    struct SingleMessageHost {
        content: MessageContent,
        replies: Mutex<Vec<(String, String)>>,
        tasks: Mutex<Vec<(TaskListId, NewTask)>>,
    }

    impl SingleMessageHost {
        fn with_plain_body(body: &str) -> Self {
            Self {
                content: MessageContent {
                    body: None,
                    parts: vec![MessagePart::leaf("text/plain", body)],
                },
                replies: Mutex::new(Vec::new()),
                tasks: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl MailHost for SingleMessageHost {
        async fn list_messages(
            &self,
            _folder: &FolderRef,
            _continuation: Option<&str>,
        ) -> HostResult<MessagePage> {
            Ok(MessagePage::default())
        }

        async fn get_message_content(&self, id: &MessageId) -> HostResult<MessageContent> {
            if id.0 == "msg-1" {
                Ok(self.content.clone())
            } else {
                Err(HostError::NotFound(id.to_string()))
            }
        }

        async fn mark_read(&self, _id: &MessageId) -> HostResult<()> {
            Ok(())
        }

        async fn list_task_lists(&self) -> HostResult<Vec<TaskList>> {
            Ok(vec![TaskList {
                id: crate::domain::TaskListId::from("list-1"),
                name: "Tasks".to_string(),
            }])
        }

        async fn create_task(
            &self,
            list: &crate::domain::TaskListId,
            task: &NewTask,
        ) -> HostResult<()> {
            self.tasks.lock().unwrap().push((list.clone(), task.clone()));
            Ok(())
        }

        async fn begin_reply(&self, id: &MessageId, body: &str) -> HostResult<()> {
            self.replies.lock().unwrap().push((id.0.clone(), body.to_string()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn summarize_uses_the_single_message_bound() {
        let long_body = "y".repeat(SINGLE_BODY_LIMIT + 500);
        let host = Arc::new(SingleMessageHost::with_plain_body(&long_body));

        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, _| {
                prompt.starts_with("Please summarize this email from Alice <alice@example.com>:")
                    && prompt.len() < SINGLE_BODY_LIMIT + 200
            })
            .times(1)
            .returning(|_, _| Ok("the summary".to_string()));

        let assistant = MessageAssistant::new(host, Arc::new(generator));
        let summary = assistant
            .summarize_message(&selected_message(), "")
            .await
            .unwrap();
        assert_eq!(summary, "the summary");
    }

    #[tokio::test]
    async fn draft_reply_opens_composer_with_generated_text() {
        let host = Arc::new(SingleMessageHost::with_plain_body("please review the figures"));

        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .withf(|prompt, _| {
                prompt.contains("Draft a polite reply")
                    && prompt.contains("Please follow these specific instructions for the reply: keep it short")
            })
            .times(1)
            .returning(|_, _| Ok("Dear Alice, ...".to_string()));

        let assistant = MessageAssistant::new(Arc::clone(&host), Arc::new(generator));
        let draft = assistant
            .draft_reply(&selected_message(), Some("keep it short"))
            .await
            .unwrap();

        assert_eq!(draft, "Dear Alice, ...");
        let replies = host.replies.lock().unwrap();
        assert_eq!(*replies, vec![("msg-1".to_string(), "Dear Alice, ...".to_string())]);
    }

    #[tokio::test]
    async fn create_task_without_summary_builds_notes_and_title() {
        let host = Arc::new(SingleMessageHost::with_plain_body("body"));

        let mut generator = MockGenerator::new();
        generator.expect_generate().times(0);

        let assistant = MessageAssistant::new(Arc::clone(&host), Arc::new(generator));
        let task = assistant
            .create_task(
                &selected_message(),
                &TaskListId::from("list-1"),
                "  check the numbers  ",
                false,
                "",
            )
            .await
            .unwrap();

        assert_eq!(task.title, "Email: Quarterly report");
        assert_eq!(task.due, Some(selected_message().date));
        assert!(task.notes.starts_with("check the numbers"));
        assert!(task.notes.contains("\n\nOriginal Subject: Quarterly report"));
        assert!(task.notes.contains("\nFrom: Alice <alice@example.com>"));
        assert!(task.notes.contains("\nReceived: "));

        let tasks = host.tasks.lock().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].0, TaskListId::from("list-1"));
    }

    #[tokio::test]
    async fn create_task_with_summary_prepends_heading() {
        let host = Arc::new(SingleMessageHost::with_plain_body("body"));

        let mut generator = MockGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .returning(|_, _| Ok("generated summary".to_string()));

        let assistant = MessageAssistant::new(host, Arc::new(generator));
        let task = assistant
            .create_task(
                &selected_message(),
                &TaskListId::from("list-1"),
                "",
                true,
                "",
            )
            .await
            .unwrap();

        assert!(task.notes.starts_with("--- AI Summary ---\ngenerated summary"));
    }

    #[tokio::test]
    async fn create_task_falls_back_to_generic_title() {
        let host = Arc::new(SingleMessageHost::with_plain_body("body"));

        let mut generator = MockGenerator::new();
        generator.expect_generate().times(0);

        let mut message = selected_message();
        message.subject = String::new();

        let assistant = MessageAssistant::new(host, Arc::new(generator));
        let task = assistant
            .create_task(&message, &TaskListId::from("list-1"), "", false, "")
            .await
            .unwrap();
        assert_eq!(task.title, "Email Task");
    }
}
