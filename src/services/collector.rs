//! Message collection over the host's paged listing protocol.

use std::sync::Arc;

use tracing::debug;

use crate::domain::{FolderRef, MessageRef, TimeRange};
use crate::host::{HostResult, MailHost};

/// Collects message headers matching a folder, time window and read state.
pub struct MessageCollector<H: MailHost> {
    host: Arc<H>,
}

impl<H: MailHost> MessageCollector<H> {
    /// Creates a collector over the given host.
    pub fn new(host: Arc<H>) -> Self {
        Self { host }
    }

    /// Pages through `folder` to exhaustion and returns every header whose
    /// date falls inside `range` (bounds inclusive), optionally keeping only
    /// unread messages.
    ///
    /// Pages are fetched strictly sequentially since each continuation token
    /// comes from the previous page. Matches are returned in delivery order;
    /// the host is not assumed to deliver messages date-sorted, so the scan
    /// never stops early on an out-of-range date. Folder identity is
    /// re-checked per message because some host query modes cannot filter by
    /// folder natively. A failed page fetch fails the whole collection; no
    /// partial list is returned.
    pub async fn collect(
        &self,
        folder: &FolderRef,
        range: TimeRange,
        only_unread: bool,
    ) -> HostResult<Vec<MessageRef>> {
        let mut matches = Vec::new();
        let mut continuation: Option<String> = None;
        let mut pages = 0usize;

        loop {
            let page = self
                .host
                .list_messages(folder, continuation.as_deref())
                .await?;
            pages += 1;

            for message in page.messages {
                if message.folder != *folder {
                    continue;
                }
                if !range.contains(message.date) {
                    continue;
                }
                if only_unread && message.read {
                    continue;
                }
                matches.push(message);
            }

            match page.continuation {
                Some(token) => continuation = Some(token),
                None => break,
            }
        }

        debug!(pages, matched = matches.len(), %folder, "collected messages in range");
        Ok(matches)
    }
}
