use std::collections::VecDeque;
use std::time::Duration;

use crate::domain::{LedgerError, Notification, NotificationLevel};

/// Queue of prompts shown one at a time.
///
/// Info prompts expire on their own; warnings and errors block until the
/// user dismisses them.
#[derive(Debug)]
pub struct NotificationManager {
    queue: VecDeque<Notification>,
    default_duration: Duration,
}

impl Default for NotificationManager {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl NotificationManager {
    #[must_use]
    pub fn new(default_duration: Duration) -> Self {
        Self {
            queue: VecDeque::new(),
            default_duration,
        }
    }

    pub fn push(&mut self, notification: Notification) {
        self.queue
            .push_back(notification.with_duration(self.default_duration));
    }

    pub fn notify(
        &mut self,
        level: NotificationLevel,
        title: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.push(Notification::new(level, title, message));
    }

    pub fn info(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Info, title, message);
    }

    pub fn warn(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Warn, title, message);
    }

    pub fn error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notify(NotificationLevel::Error, title, message);
    }

    /// Queues the prompt matching a failed operation.
    pub fn report(&mut self, title: impl Into<String>, error: &LedgerError) {
        self.push(Notification::from_error(title, error));
    }

    pub fn tick(&mut self) {
        let Some(front) = self.queue.front_mut() else {
            return;
        };
        front.mark_displayed();
        if front.level == NotificationLevel::Info && front.is_expired() {
            self.advance();
        }
    }

    /// Closes the prompt currently shown.
    pub fn dismiss(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.queue.pop_front();
        if let Some(next) = self.queue.front_mut() {
            next.mark_displayed();
        }
    }

    #[must_use]
    pub fn current_notification(&self) -> Option<&Notification> {
        self.queue.front()
    }

    /// Returns whether the shown prompt waits for the user.
    #[must_use]
    pub fn is_blocking(&self) -> bool {
        self.queue
            .front()
            .is_some_and(|n| n.level != NotificationLevel::Info)
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.queue.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
