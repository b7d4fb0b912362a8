//! Top-level navigation destinations.

/// Chrome destinations shown in the bottom bar or side rail.
///
/// Exactly one destination is active at a time; activating Inbox also closes
/// whatever email is open so the list comes back to its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Destination {
    /// Incoming mail.
    #[default]
    Inbox,
    /// Starred mail.
    Starred,
    /// Sent mail.
    Sent,
    /// Deleted mail.
    Trash,
}

impl Destination {
    /// All destinations in display order.
    pub const ALL: [Self; 4] = [Self::Inbox, Self::Starred, Self::Sent, Self::Trash];

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inbox => "Inbox",
            Self::Starred => "Starred",
            Self::Sent => "Sent",
            Self::Trash => "Trash",
        }
    }

    /// Icon glyph shown beside the label.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Inbox => "📥",
            Self::Starred => "⭐",
            Self::Sent => "📤",
            Self::Trash => "🗑️",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_inbox() {
        assert_eq!(Destination::default(), Destination::Inbox);
    }

    #[test]
    fn test_all_starts_at_inbox() {
        assert_eq!(Destination::ALL[0], Destination::Inbox);
        assert_eq!(Destination::ALL.len(), 4);
    }
}
