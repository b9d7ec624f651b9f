//! Chat transcript model.
//!
//! Entries are append-only and live only in the view; nothing is persisted,
//! so a navigation drops the conversation.

use uuid::Uuid;

/// Who produced a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    pub fn label(&self) -> &'static str {
        match self {
            Sender::User => "Tú",
            Sender::Bot => "Chatbot",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Sender::User => "chatbot-message chatbot-message--user",
            Sender::Bot => "chatbot-message chatbot-message--bot",
        }
    }
}

/// One chat turn. The text is rendered as a text node, never as markup.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptEntry {
    pub id: Uuid,
    pub sender: Sender,
    pub text: String,
}

impl TranscriptEntry {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            text: text.into(),
        }
    }
}

/// Trim the raw input. Empty or whitespace-only questions are rejected and
/// must cause neither a transcript entry nor a network call.
pub fn normalize_question(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_surrounding_whitespace() {
        assert_eq!(
            normalize_question("  ¿cuál es mi graduación?  ").as_deref(),
            Some("¿cuál es mi graduación?")
        );
    }

    #[test]
    fn normalize_rejects_empty_and_whitespace_only_input() {
        assert_eq!(normalize_question(""), None);
        assert_eq!(normalize_question("   "), None);
        assert_eq!(normalize_question("\n\t "), None);
    }

    #[test]
    fn entries_get_distinct_ids() {
        let a = TranscriptEntry::new(Sender::User, "hola");
        let b = TranscriptEntry::new(Sender::User, "hola");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn sender_labels() {
        assert_eq!(Sender::User.label(), "Tú");
        assert_eq!(Sender::Bot.label(), "Chatbot");
    }
}
