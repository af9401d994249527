//! Bulk summarization: bound the input, fetch bodies, assemble one prompt.

use std::sync::Arc;

use tracing::debug;

use super::generation::Generator;
use super::prompts::{self, BULK_BODY_LIMIT, BULK_MESSAGE_CAP, DEFAULT_SYSTEM_PROMPT};
use super::AssistantError;
use crate::domain::MessageRef;
use crate::host::MailHost;

/// Fixed result for an empty input set; returned without any generation
/// call.
pub const EMPTY_SUMMARY: &str = "No messages to summarize.";

/// Summarizes a set of collected messages in a single model call.
pub struct BulkSummarizer<H: MailHost, G: Generator> {
    host: Arc<H>,
    generator: Arc<G>,
}

impl<H: MailHost, G: Generator> BulkSummarizer<H, G> {
    /// Creates a summarizer over the given host and generation backend.
    pub fn new(host: Arc<H>, generator: Arc<G>) -> Self {
        Self { host, generator }
    }

    /// Summarizes `messages`, grouped by topic, optionally calling out
    /// `keywords`.
    ///
    /// At most [`BULK_MESSAGE_CAP`] messages are retained, in their given
    /// order; each retained message's body is fetched, reduced to its first
    /// plain-text part and truncated to [`BULK_BODY_LIMIT`] characters.
    /// Body fetches run sequentially, so the assembled prompt preserves the
    /// retained order. An empty input returns [`EMPTY_SUMMARY`] without
    /// touching the network.
    pub async fn summarize(
        &self,
        messages: &[MessageRef],
        keywords: &str,
    ) -> Result<String, AssistantError> {
        if messages.is_empty() {
            return Ok(EMPTY_SUMMARY.to_string());
        }

        let retained = &messages[..messages.len().min(BULK_MESSAGE_CAP)];
        if retained.len() < messages.len() {
            debug!(
                total = messages.len(),
                retained = retained.len(),
                "capping bulk summary input"
            );
        }

        let mut blocks = String::new();
        for message in retained {
            let content = self.host.get_message_content(&message.id).await?;
            let body = content.plain_text();
            blocks.push_str(&prompts::bulk_message_block(
                &message.author,
                &message.subject,
                prompts::truncate_chars(&body, BULK_BODY_LIMIT),
            ));
        }

        let prompt = prompts::bulk_summary_prompt(retained.len(), keywords, &blocks);
        let summary = self.generator.generate(&prompt, DEFAULT_SYSTEM_PROMPT).await?;
        Ok(summary)
    }
}
