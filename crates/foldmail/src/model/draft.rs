//! Reply composer draft and recipient expansion.

use foldmail_data::Email;

/// Ephemeral composer state.
///
/// Lives on the application, not in the content snapshot; it is reset
/// whenever the composer closes.
#[derive(Debug, Clone, Default)]
pub struct ReplyDraft {
    /// Draft body text.
    pub body: String,
}

impl ReplyDraft {
    /// True when there is nothing worth sending.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Empties the draft after send or dismiss.
    pub fn clear(&mut self) {
        self.body.clear();
    }
}

/// Builds the recipient line for a reply to `email`.
///
/// Replying to all addresses the original sender plus every thread
/// participant, deduplicated in first-seen order; a plain reply addresses
/// the sender alone.
#[must_use]
pub fn recipient_line(email: &Email, reply_all: bool) -> String {
    if !reply_all {
        return email.sender.full_name.clone();
    }

    let mut names: Vec<&str> = vec![email.sender.full_name.as_str()];
    for reply in &email.replies {
        let name = reply.sender.full_name.as_str();
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names.join(", ")
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use foldmail_data::{EmailId, Sender};

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
    fn test_plain_reply_addresses_sender_only() {
        let root = email(2, "B").with_replies(vec![email(101, "C")]);
        assert_eq!(recipient_line(&root, false), "B");
    }

    #[test]
    fn test_reply_all_collapses_repeated_sender() {
        let root = email(1, "A").with_replies(vec![email(101, "B"), email(102, "A")]);
        assert_eq!(recipient_line(&root, true), "A, B");
    }

    #[test]
    fn test_reply_all_without_thread_is_sender_only() {
        let root = email(1, "A");
        assert_eq!(recipient_line(&root, true), "A");
    }

    #[test]
    fn test_reply_all_keeps_first_seen_order() {
        let root = email(1, "A").with_replies(vec![
            email(101, "C"),
            email(102, "B"),
            email(103, "C"),
        ]);
        assert_eq!(recipient_line(&root, true), "A, C, B");
    }

    #[test]
    fn test_blank_draft_detection() {
        let mut draft = ReplyDraft::default();
        assert!(draft.is_blank());

        draft.body = "  \n ".to_string();
        assert!(draft.is_blank());

        draft.body = "On my way.".to_string();
        assert!(!draft.is_blank());

        draft.clear();
        assert!(draft.is_blank());
    }
}
