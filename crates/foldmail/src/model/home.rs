//! Content state snapshot and its pure mutations.

use foldmail_data::{Email, EmailId};

/// Immutable snapshot of inbox content state.
///
/// Every mutation builds a complete replacement snapshot; the runtime
/// re-renders from whichever snapshot is current, so panes can never observe
/// a half-applied change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HomeState {
    /// Inbox emails in arrival order.
    pub emails: Vec<Email>,
    /// True only before the stream produces its first snapshot.
    pub loading: bool,
    /// Failure reported by the email stream, if any.
    pub error: Option<String>,
    /// Currently opened email.
    pub selected: Option<Email>,
    /// Email being replied to; implies the composer is showing.
    pub reply_to: Option<Email>,
    /// Whether the composer addresses every thread participant.
    pub reply_all: bool,
}

impl HomeState {
    /// State shown between startup and the first stream event.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Fresh snapshot holding only the newly arrived list.
    ///
    /// Selection, reply target, and any earlier error are dropped; each
    /// stream event rebuilds content state from scratch.
    #[must_use]
    pub fn loaded(emails: Vec<Email>) -> Self {
        Self {
            emails,
            ..Self::default()
        }
    }

    /// Fresh snapshot holding only the stream failure.
    ///
    /// The previous list is discarded along with everything else; the stream
    /// has no retry, so stale rows would be unrecoverable anyway.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    /// Toggles the star on the matching top-level email.
    ///
    /// The open email is refreshed from the updated list so the detail pane
    /// and the list row never disagree on star state. Unknown ids leave the
    /// snapshot unchanged.
    #[must_use]
    pub fn star_email(&self, id: EmailId) -> Self {
        let emails: Vec<Email> = self
            .emails
            .iter()
            .map(|email| {
                let mut email = email.clone();
                if email.id == id {
                    email.starred = !email.starred;
                }
                email
            })
            .collect();

        let selected = self.selected.as_ref().map(|current| {
            emails
                .iter()
                .find(|email| email.id == current.id)
                .cloned()
                .unwrap_or_else(|| current.clone())
        });

        Self {
            emails,
            selected,
            loading: self.loading,
            error: self.error.clone(),
            reply_to: self.reply_to.clone(),
            reply_all: self.reply_all,
        }
    }

    /// Opens the matching top-level email; the reply target is kept.
    #[must_use]
    pub fn select_email(&self, id: EmailId) -> Self {
        let Some(email) = self.emails.iter().find(|email| email.id == id) else {
            return self.clone();
        };
        Self {
            selected: Some(email.clone()),
            ..self.clone()
        }
    }

    /// Closes the open email and any composer, back to the list root.
    #[must_use]
    pub fn clear_email(&self) -> Self {
        Self {
            selected: None,
            reply_to: None,
            reply_all: false,
            ..self.clone()
        }
    }

    /// Opens the composer for the matching email or thread reply.
    ///
    /// Reply actions are offered on every thread item, so the id is resolved
    /// one level into reply threads as well. The selection is kept; in the
    /// expanded layout the thread stays visible beside the composer.
    #[must_use]
    pub fn set_replying(&self, id: EmailId, reply_all: bool) -> Self {
        let Some(email) = Email::find_in(&self.emails, id) else {
            return self.clone();
        };
        Self {
            reply_to: Some(email.clone()),
            reply_all,
            ..self.clone()
        }
    }

    /// Dismisses the composer; the open email is kept.
    #[must_use]
    pub fn clear_replying(&self) -> Self {
        Self {
            reply_to: None,
            reply_all: false,
            ..self.clone()
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use foldmail_data::Sender;
    use proptest::prelude::*;

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

    fn two_emails() -> Vec<Email> {
        vec![email(1, "A"), email(2, "B")]
    }

    #[test]
    fn test_initial_state_is_loading() {
        let state = HomeState::initial();
        assert!(state.loading);
        assert!(state.emails.is_empty());
        assert!(state.error.is_none());
    }

    #[test]
    fn test_loaded_snapshot_has_default_flags() {
        let after = HomeState::loaded(vec![email(3, "C")]);

        assert_eq!(after.emails.len(), 1);
        assert!(!after.loading);
        assert!(after.error.is_none());
        assert!(after.selected.is_none());
        assert!(after.reply_to.is_none());
        assert!(!after.reply_all);
    }

    #[test]
    fn test_failed_snapshot_holds_only_error() {
        let failed = HomeState::failed("socket closed");

        assert_eq!(failed.error.as_deref(), Some("socket closed"));
        assert!(failed.emails.is_empty());
        assert!(failed.selected.is_none());
        assert!(!failed.loading);
    }

    #[test]
    fn test_star_toggles_only_target() {
        let state = HomeState::loaded(two_emails()).star_email(EmailId(1));

        assert!(state.emails[0].starred);
        assert!(!state.emails[1].starred);
    }

    #[test]
    fn test_star_twice_restores_flag() {
        let state = HomeState::loaded(two_emails());
        let toggled = state.star_email(EmailId(2)).star_email(EmailId(2));
        assert_eq!(toggled, state);
    }

    #[test]
    fn test_star_refreshes_open_email() {
        let state = HomeState::loaded(two_emails())
            .select_email(EmailId(2))
            .star_email(EmailId(2));

        assert!(state.selected.as_ref().unwrap().starred);
        assert_eq!(state.selected.as_ref().unwrap(), &state.emails[1]);
    }

    #[test]
    fn test_star_unknown_id_is_noop() {
        let state = HomeState::loaded(two_emails());
        assert_eq!(state.star_email(EmailId(99)), state);
    }

    #[test]
    fn test_clear_email_resets_selection_and_reply() {
        let state = HomeState::loaded(two_emails())
            .select_email(EmailId(1))
            .set_replying(EmailId(2), true)
            .clear_email();

        assert!(state.selected.is_none());
        assert!(state.reply_to.is_none());
        assert!(!state.reply_all);
        assert_eq!(state.emails.len(), 2);
    }

    #[test]
    fn test_clear_replying_keeps_selection() {
        let before = HomeState::loaded(two_emails()).select_email(EmailId(1));
        let after = before.set_replying(EmailId(1), true).clear_replying();

        assert!(after.reply_to.is_none());
        assert!(!after.reply_all);
        assert_eq!(after.selected, before.selected);
        assert_eq!(after.emails, before.emails);
    }

    #[test]
    fn test_select_keeps_reply_target() {
        let state = HomeState::loaded(two_emails())
            .set_replying(EmailId(1), false)
            .select_email(EmailId(2));

        assert_eq!(state.reply_to.as_ref().unwrap().id, EmailId(1));
        assert_eq!(state.selected.as_ref().unwrap().id, EmailId(2));
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let state = HomeState::loaded(two_emails());
        assert_eq!(state.select_email(EmailId(99)), state);
    }

    #[test]
    fn test_set_replying_resolves_thread_reply() {
        let root = email(1, "A").with_replies(vec![email(101, "B")]);
        let state = HomeState::loaded(vec![root]).set_replying(EmailId(101), false);

        assert_eq!(state.reply_to.as_ref().unwrap().id, EmailId(101));
        assert_eq!(state.reply_to.as_ref().unwrap().sender.full_name, "B");
    }

    proptest! {
        #[test]
        fn test_star_toggle_twice_is_identity(
            toggles in proptest::collection::vec(1u64..=5, 0..16),
            target in 1u64..=5,
        ) {
            let mut state = HomeState::loaded(
                (1..=5).map(|id| email(id, "Sender")).collect(),
            )
            .select_email(EmailId(3));

            for id in toggles {
                state = state.star_email(EmailId(id));
                let selected = state.selected.as_ref().unwrap();
                let listed = state
                    .emails
                    .iter()
                    .find(|email| email.id == selected.id)
                    .unwrap();
                prop_assert_eq!(selected.starred, listed.starred);
            }

            let twice = state.star_email(EmailId(target)).star_email(EmailId(target));
            prop_assert_eq!(twice, state);
        }
    }
}
