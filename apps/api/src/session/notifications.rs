//! Toast notifications as a bounded, ordered queue with explicit expiry.
//!
//! Notifications stack in arrival order. Each one expires `ttl` after it was
//! raised; when the queue is full the oldest entry is dropped.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

pub const DEFAULT_CAPACITY: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    /// Banner colour for the page.
    pub fn color(self) -> &'static str {
        match self {
            NotificationKind::Success => "#4CAF50",
            NotificationKind::Error => "#f44336",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Notification {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    next_id: u64,
    ttl: Duration,
    capacity: usize,
}

impl NotificationQueue {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            next_id: 1,
            ttl,
            capacity: capacity.max(1),
        }
    }

    /// Enqueues a notification and returns its id.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        message: impl Into<String>,
        now: DateTime<Utc>,
    ) -> u64 {
        self.prune(now);
        while self.items.len() >= self.capacity {
            self.items.pop_front();
        }

        let id = self.next_id;
        self.next_id += 1;
        self.items.push_back(Notification {
            id,
            kind,
            message: message.into(),
            created_at: now,
            expires_at: now + self.ttl,
        });
        id
    }

    /// Drops every expired notification.
    pub fn prune(&mut self, now: DateTime<Utc>) {
        self.items.retain(|n| !n.is_expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
