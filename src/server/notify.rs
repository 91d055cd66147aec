//! Push notification port for team lifecycle events.
//!
//! Squad assembly finishes out-of-band, so the only way users learn their
//! team is ready is a push through whatever channel the deployment wires in
//! (websocket fan-out, SSE, a chat webhook). The server core stays ignorant
//! of the channel: it talks to [`NotificationSink`] and treats delivery as
//! best-effort.

use async_trait::async_trait;
use thiserror::Error;

use crate::model::team::TeamStatusDto;

/// Delivery failure from a notification channel.
///
/// Never escalated: callers log it and move on, because a lost push must not
/// fail the work that triggered it.
#[derive(Error, Debug)]
#[error("Failed to deliver notification: {0}")]
pub struct NotifyError(pub String);

/// Outbound channel for telling a user their team changed state.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify_team_status(
        &self,
        user_id: i32,
        status: &TeamStatusDto,
    ) -> Result<(), NotifyError>;
}

/// Default sink that just logs the event.
///
/// Stands in wherever no real push channel is configured; also makes local
/// runs observable without standing up a delivery path.
pub struct LogNotifier;

#[async_trait]
impl NotificationSink for LogNotifier {
    async fn notify_team_status(
        &self,
        user_id: i32,
        status: &TeamStatusDto,
    ) -> Result<(), NotifyError> {
        tracing::info!(
            "Team status for user {}: ready={} team_id={:?}",
            user_id,
            status.is_ready,
            status.team_id
        );

        Ok(())
    }
}
