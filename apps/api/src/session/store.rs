use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::session::{Effect, Event, SessionContext};

/// In-memory session registry. Nothing outlives the process.
///
/// The lock is only held while an event is applied, never across a generation call.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
    notification_ttl: Duration,
}

impl SessionStore {
    pub fn new(notification_ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            notification_ttl,
        }
    }

    pub async fn create(&self, now: DateTime<Utc>) -> Uuid {
        let id = Uuid::new_v4();
        let context = SessionContext::new(id, self.notification_ttl, now);
        self.sessions.write().await.insert(id, context);
        info!(session = %id, "Session created");
        id
    }

    pub async fn contains(&self, id: Uuid) -> bool {
        self.sessions.read().await.contains_key(&id)
    }

    /// Runs `f` against the session, or returns `None` if it does not exist.
    pub async fn with_session<R>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut SessionContext) -> R,
    ) -> Option<R> {
        let mut sessions = self.sessions.write().await;
        sessions.get_mut(&id).map(f)
    }

    pub async fn apply(&self, id: Uuid, event: Event, now: DateTime<Utc>) -> Option<Effect> {
        self.with_session(id, |ctx| ctx.apply(event, now)).await
    }

    /// Removes sessions idle for longer than `idle_ttl`. Sessions with a request
    /// in flight are kept. Returns how many were removed.
    pub async fn evict_idle(&self, now: DateTime<Utc>, idle_ttl: Duration) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, ctx| ctx.is_busy() || now - ctx.last_seen < idle_ttl);
        before - sessions.len()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
