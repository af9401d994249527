//! Prompt text and bounding constants.
//!
//! The bulk and single-message paths share their prompt wording and
//! truncation limits through this module so the two cannot drift apart.

/// Persona applied when a caller does not supply a system prompt.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful email assistant.";

/// Hard cap on how many messages are folded into one bulk summary prompt.
pub const BULK_MESSAGE_CAP: usize = 20;

/// Per-message body bound in the bulk path, where many bodies share one
/// prompt.
pub const BULK_BODY_LIMIT: usize = 500;

/// Body bound for single-message prompts; deliberately looser than
/// [`BULK_BODY_LIMIT`] since only one body occupies the prompt.
pub const SINGLE_BODY_LIMIT: usize = 5_000;

/// Truncates `text` to at most `limit` characters, on a character boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn keyword_clause(keywords: &str) -> Option<String> {
    if keywords.trim().is_empty() {
        return None;
    }
    Some(format!(
        "\nPay special attention and explicitly mention if any of the following keywords are discussed: {keywords}\n"
    ))
}

/// Prompt asking for a topic-grouped summary of `count` message blocks.
pub fn bulk_summary_prompt(count: usize, keywords: &str, blocks: &str) -> String {
    let mut prompt = format!(
        "Please provide a concise summary of these {count} emails. Group them by topic if possible.\n"
    );
    if let Some(clause) = keyword_clause(keywords) {
        prompt.push_str(&clause);
    }
    prompt.push_str("\nHere are the emails:\n");
    prompt.push_str(blocks);
    prompt
}

/// One `From / Subject / Body` block of a bulk summary prompt.
pub fn bulk_message_block(author: &str, subject: &str, body: &str) -> String {
    format!("From: {author}\nSubject: {subject}\nBody: {body}...\n\n")
}

/// Prompt asking for a summary of one message.
pub fn single_summary_prompt(author: &str, keywords: &str, body: &str) -> String {
    let mut prompt = format!("Please summarize this email from {author}:\n");
    if let Some(clause) = keyword_clause(keywords) {
        prompt.push_str(&clause);
    }
    prompt.push('\n');
    prompt.push_str(body);
    prompt
}

/// Prompt asking for a reply draft, optionally steered by explicit
/// instructions.
pub fn reply_prompt(author: &str, instructions: Option<&str>, body: &str) -> String {
    let mut prompt = format!("Draft a polite reply to this email from {author}.");
    if let Some(instructions) = instructions.map(str::trim).filter(|i| !i.is_empty()) {
        prompt.push_str(&format!(
            " Please follow these specific instructions for the reply: {instructions}"
        ));
    }
    prompt.push_str(&format!("\n\nThe email content is:\n\n{body}"));
    prompt
}
