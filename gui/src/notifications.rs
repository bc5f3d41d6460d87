//! Transient toast notifications

use std::time::{Duration, Instant};

const SUCCESS_TTL: Duration = Duration::from_secs(2);
const ERROR_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn ttl(&self) -> Duration {
        match self {
            NotificationKind::Success => SUCCESS_TTL,
            NotificationKind::Error => ERROR_TTL,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub message: String,
    pub created_at: Instant,
}

impl Notification {
    fn new(kind: NotificationKind, message: impl Into<String>, created_at: Instant) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            message: message.into(),
            created_at,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.kind.ttl()
    }
}

/// Newest-last queue of visible toasts
#[derive(Debug, Clone, Default)]
pub struct Notifications {
    items: Vec<Notification>,
}

impl Notifications {
    pub fn success(&mut self, message: impl Into<String>) -> &Notification {
        self.push(NotificationKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> &Notification {
        self.push(NotificationKind::Error, message)
    }

    fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> &Notification {
        let notification = Notification::new(kind, message, Instant::now());
        match kind {
            NotificationKind::Success => tracing::info!(message = %notification.message, "notify"),
            NotificationKind::Error => tracing::warn!(message = %notification.message, "notify"),
        }
        self.items.push(notification);
        &self.items[self.items.len() - 1]
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|n| n.id != id);
    }

    /// Drop expired toasts; returns true if anything was removed
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|n| !n.is_expired(now));
        self.items.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn last(&self) -> Option<&Notification> {
        self.items.last()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_outlive_successes() {
        let mut queue = Notifications::default();
        let start = queue.success("saved").created_at;
        queue.error("failed");

        assert!(queue.prune(start + Duration::from_millis(2500)));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.last().unwrap().kind, NotificationKind::Error);

        assert!(queue.prune(start + Duration::from_secs(5)));
        assert!(queue.is_empty());
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut queue = Notifications::default();
        let id = queue.error("one").id.clone();
        queue.error("two");
        queue.dismiss(&id);

        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["two"]);
    }

    #[test]
    fn prune_reports_no_change() {
        let mut queue = Notifications::default();
        queue.success("fresh");
        assert!(!queue.prune(Instant::now()));
    }
}
