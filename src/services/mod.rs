//! Assistant services built on the provider and host abstractions.
//!
//! The pipeline runs collect → bound → fetch bodies → assemble prompt →
//! generate; every stage is a plain value over the [`crate::host::MailHost`]
//! and [`Generator`] seams so hosts and tests can substitute either side.

mod assistant;
mod collector;
mod generation;
pub mod prompts;
mod read_marker;
mod summarizer;

pub use assistant::MessageAssistant;
pub use collector::MessageCollector;
pub use generation::{GenerationService, Generator};
pub use read_marker::ReadMarker;
pub use summarizer::{BulkSummarizer, EMPTY_SUMMARY};

use thiserror::Error;

use crate::host::HostError;
use crate::providers::ai::GenerateError;

/// Umbrella error for assistant operations that touch both the host and a
/// generation backend.
///
/// Nothing in the core retries; the UI-event boundary catches this once and
/// renders it as a status message.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// A host mail client call failed.
    #[error(transparent)]
    Host(#[from] HostError),

    /// The generation backend failed.
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assistant_error_wraps_both_sides_transparently() {
        let host: AssistantError = HostError::NotFound("msg-1".to_string()).into();
        assert_eq!(host.to_string(), "not found: msg-1");

        let generate: AssistantError = GenerateError::Http {
            status: 503,
            body: "overloaded".to_string(),
        }
        .into();
        assert!(generate.to_string().contains("503"));
    }
}
