//! Pane routing for the content area.

use crate::model::{HomeState, LayoutMode};

/// Relative width of the narrow pane in two-pane arrangements.
pub const NARROW_PORTION: u16 = 3;
/// Relative width of the wide pane in two-pane arrangements.
pub const WIDE_PORTION: u16 = 7;

/// Which panes fill the content area.
///
/// Two-pane variants split the width `NARROW_PORTION` to `WIDE_PORTION`,
/// giving the opened content visual priority over the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneArrangement {
    /// Email list alone, full width.
    List,
    /// Thread detail alone, full width.
    Detail,
    /// Reply composer alone, full width.
    Reply,
    /// List beside thread detail.
    ListDetail,
    /// Thread detail beside reply composer.
    DetailReply,
}

/// Chooses the pane arrangement for the current snapshot.
///
/// Strict precedence: an open composer wins over an open email, which wins
/// over the plain list. Total over every state and mode combination.
#[must_use]
pub const fn route(state: &HomeState, mode: LayoutMode) -> PaneArrangement {
    match (state.reply_to.is_some(), state.selected.is_some(), mode) {
        (true, _, LayoutMode::Compact) => PaneArrangement::Reply,
        (true, _, LayoutMode::Expanded) => PaneArrangement::DetailReply,
        (false, true, LayoutMode::Compact) => PaneArrangement::Detail,
        (false, true, LayoutMode::Expanded) => PaneArrangement::ListDetail,
        (false, false, _) => PaneArrangement::List,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use foldmail_data::{Email, EmailId, Sender};

    use super::*;

    fn state_with(selected: bool, replying: bool) -> HomeState {
        let email = Email::new(
            EmailId(1),
            Sender::new("A", "a@example.com"),
            "Subject",
            "Body",
            Utc::now(),
        );
        let mut state = HomeState::loaded(vec![email]);
        if selected {
            state = state.select_email(EmailId(1));
        }
        if replying {
            state = state.set_replying(EmailId(1), false);
        }
        state
    }

    #[test]
    fn test_reply_wins_in_compact() {
        let state = state_with(true, true);
        assert_eq!(route(&state, LayoutMode::Compact), PaneArrangement::Reply);
    }

    #[test]
    fn test_reply_shares_with_detail_in_expanded() {
        let state = state_with(true, true);
        assert_eq!(
            route(&state, LayoutMode::Expanded),
            PaneArrangement::DetailReply
        );
    }

    #[test]
    fn test_reply_precedes_detail_even_without_selection() {
        let state = state_with(false, true);
        assert_eq!(route(&state, LayoutMode::Compact), PaneArrangement::Reply);
        assert_eq!(
            route(&state, LayoutMode::Expanded),
            PaneArrangement::DetailReply
        );
    }

    #[test]
    fn test_selection_routes_detail() {
        let state = state_with(true, false);
        assert_eq!(route(&state, LayoutMode::Compact), PaneArrangement::Detail);
        assert_eq!(
            route(&state, LayoutMode::Expanded),
            PaneArrangement::ListDetail
        );
    }

    #[test]
    fn test_bare_list_in_both_modes() {
        let state = state_with(false, false);
        assert_eq!(route(&state, LayoutMode::Compact), PaneArrangement::List);
        assert_eq!(route(&state, LayoutMode::Expanded), PaneArrangement::List);
    }

    #[test]
    fn test_mode_flip_keeps_selection_visible() {
        let state = state_with(true, false);

        assert_eq!(route(&state, LayoutMode::Compact), PaneArrangement::Detail);
        assert_eq!(
            route(&state, LayoutMode::Expanded),
            PaneArrangement::ListDetail
        );
        assert!(state.selected.is_some(), "routing never consumes state");
    }

    #[test]
    fn test_portions_favor_opened_content() {
        assert!(WIDE_PORTION > NARROW_PORTION);
    }

    #[test]
    fn test_compact_reply_fills_width_and_addresses_sender() {
        let emails = vec![
            Email::new(
                EmailId(1),
                Sender::new("A", "a@example.com"),
                "First",
                "Body",
                Utc::now(),
            ),
            Email::new(
                EmailId(2),
                Sender::new("B", "b@example.com"),
                "Second",
                "Body",
                Utc::now(),
            ),
        ];
        let state = HomeState::loaded(emails)
            .select_email(EmailId(2))
            .set_replying(EmailId(2), false);

        assert_eq!(route(&state, LayoutMode::Compact), PaneArrangement::Reply);

        let target = state.reply_to.as_ref().unwrap();
        assert_eq!(crate::model::recipient_line(target, false), "B");
    }
}
