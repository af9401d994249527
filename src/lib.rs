//! missive - AI assistant core for email clients
//!
//! This crate provides the engine behind an email client's AI assistant:
//! a multi-provider text generation abstraction over four structurally
//! different HTTP backends, and a bulk retrieval-and-summarization pipeline
//! that pages through a mailbox, filters by time window and read state, and
//! bounds what is sent to the model.
//!
//! The host mail client is consumed through the narrow [`host::MailHost`]
//! trait; rendering, message storage and options UI stay on the host side.

pub mod config;
pub mod domain;
pub mod host;
pub mod providers;
pub mod services;

pub use services::{
    AssistantError, BulkSummarizer, GenerationService, Generator, MessageAssistant,
    MessageCollector, ReadMarker,
};
