//! Immutable email entities.

use chrono::{DateTime, Utc};

/// Unique identifier for an email.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmailId(pub u64);

/// The author of an email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    /// Short name shown in list rows.
    pub first_name: String,
    /// Full display name used in thread items and recipient lines.
    pub full_name: String,
    /// Mail address shown in the thread header.
    pub address: String,
}

impl Sender {
    /// Creates a sender, deriving the short name from the full name.
    #[must_use]
    pub fn new(full_name: impl Into<String>, address: impl Into<String>) -> Self {
        let full_name = full_name.into();
        let first_name = full_name
            .split_whitespace()
            .next()
            .unwrap_or(&full_name)
            .to_string();
        Self {
            first_name,
            full_name,
            address: address.into(),
        }
    }
}

/// A single email, possibly carrying a thread of replies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Unique identifier.
    pub id: EmailId,
    /// Author of the message.
    pub sender: Sender,
    /// Subject line.
    pub subject: String,
    /// Full message body.
    pub body: String,
    /// When the message was created.
    pub created_at: DateTime<Utc>,
    /// Whether the user has starred the message.
    pub starred: bool,
    /// Replies to this message, oldest first.
    pub replies: Vec<Email>,
}

impl Email {
    /// Creates an unstarred email with no replies.
    #[must_use]
    pub fn new(
        id: EmailId,
        sender: Sender,
        subject: impl Into<String>,
        body: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            sender,
            subject: subject.into(),
            body: body.into(),
            created_at,
            starred: false,
            replies: Vec::new(),
        }
    }

    /// Attaches a reply thread, oldest first.
    #[must_use]
    pub fn with_replies(mut self, replies: Vec<Self>) -> Self {
        self.replies = replies;
        self
    }

    /// Finds an email by id among `emails`, searching one level of replies.
    #[must_use]
    pub fn find_in(emails: &[Self], id: EmailId) -> Option<&Self> {
        emails.iter().find_map(|email| {
            if email.id == id {
                Some(email)
            } else {
                email.replies.iter().find(|reply| reply.id == id)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn email(id: u64, name: &str) -> Email {
        Email::new(
            EmailId(id),
            Sender::new(name, "test@example.com"),
            "Subject",
            "Body",
            Utc::now(),
        )
    }

    #[test]
    fn test_sender_first_name_derived() {
        let sender = Sender::new("Maya Lindqvist", "maya@example.com");
        assert_eq!(sender.first_name, "Maya");
        assert_eq!(sender.full_name, "Maya Lindqvist");
    }

    #[test]
    fn test_sender_single_word_name() {
        let sender = Sender::new("Maya", "maya@example.com");
        assert_eq!(sender.first_name, "Maya");
    }

    #[test]
    fn test_find_in_top_level() {
        let emails = vec![email(1, "A"), email(2, "B")];
        let found = Email::find_in(&emails, EmailId(2));
        assert_eq!(found.map(|e| e.sender.full_name.as_str()), Some("B"));
    }

    #[test]
    fn test_find_in_reply() {
        let emails = vec![email(1, "A").with_replies(vec![email(101, "B")])];
        let found = Email::find_in(&emails, EmailId(101));
        assert_eq!(found.map(|e| e.sender.full_name.as_str()), Some("B"));
    }

    #[test]
    fn test_find_in_missing() {
        let emails = vec![email(1, "A")];
        assert!(Email::find_in(&emails, EmailId(99)).is_none());
    }
}
