//! Repository seam producing the inbox as an observable stream.

use std::time::Duration;

use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tracing::info;

use super::fixtures;
use super::model::Email;
use crate::error::{RepositoryError, Result};

/// Stream of inbox snapshots or failures.
///
/// Each item carries the full current email list; subscribers replace their
/// copy rather than merge.
pub type EmailListStream = BoxStream<'static, Result<Vec<Email>>>;

/// Source of inbox data observed by the UI.
///
/// The stream stays open for the life of the subscription and is restartable
/// only by calling [`all_emails`](Self::all_emails) again.
pub trait EmailRepository {
    /// Subscribes to the full email list.
    fn all_emails(&self) -> EmailListStream;
}

/// Simulated fetch latency before the seeded inbox is emitted.
const FETCH_DELAY: Duration = Duration::from_millis(350);

/// In-memory repository seeded with sample data.
#[derive(Debug, Clone, Default)]
pub struct FixtureRepository {
    failure: Option<String>,
}

impl FixtureRepository {
    /// Creates a repository serving the seeded sample inbox.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository whose stream emits a single failure.
    #[must_use]
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
        }
    }
}

impl EmailRepository for FixtureRepository {
    fn all_emails(&self) -> EmailListStream {
        let failure = self.failure.clone();
        stream::once(async move {
            tokio::time::sleep(FETCH_DELAY).await;
            if let Some(reason) = failure {
                return Err(RepositoryError::Unavailable(reason));
            }
            let emails = fixtures::sample_inbox();
            info!(count = emails.len(), "fixture inbox ready");
            Ok(emails)
        })
        .chain(stream::pending())
        .boxed()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::super::model::EmailId;
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_stream_emits_seeded_inbox() {
        let repo = FixtureRepository::new();
        let mut stream = repo.all_emails();

        let emails = stream.next().await.unwrap().unwrap();
        assert_eq!(emails.len(), 8);
        assert_eq!(emails[0].id, EmailId(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stream_stays_open_after_emission() {
        let repo = FixtureRepository::new();
        let mut stream = repo.all_emails();

        stream.next().await.unwrap().unwrap();
        let second = tokio::time::timeout(Duration::from_secs(5), stream.next()).await;
        assert!(second.is_err(), "no further items expected");
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_stream_surfaces_error() {
        let repo = FixtureRepository::failing("socket closed");
        let mut stream = repo.all_emails();

        let result = stream.next().await.unwrap();
        assert_eq!(
            result,
            Err(RepositoryError::Unavailable("socket closed".to_string()))
        );
    }

    #[test]
    fn test_fixture_ids_unique() {
        let emails = fixtures::sample_inbox();
        let mut seen = HashSet::new();
        for email in &emails {
            assert!(seen.insert(email.id), "duplicate id {:?}", email.id);
            for reply in &email.replies {
                assert!(seen.insert(reply.id), "duplicate id {:?}", reply.id);
            }
        }
    }

    #[test]
    fn test_fixture_threads_are_single_level() {
        for email in fixtures::sample_inbox() {
            for reply in &email.replies {
                assert!(reply.replies.is_empty());
                assert_ne!(reply.id, email.id, "reply must not cycle to its root");
            }
        }
    }

    #[test]
    fn test_fixture_seeds_reply_all_collapse_case() {
        let emails = fixtures::sample_inbox();
        let has_repeat = emails.iter().any(|email| {
            email
                .replies
                .iter()
                .any(|reply| reply.sender.full_name == email.sender.full_name)
        });
        assert!(has_repeat, "a thread should repeat its root sender");
    }
}
