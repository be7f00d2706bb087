//! Toast notifications.
//!
//! Screens report outcomes through the [`Notifier`] trait and never look at
//! what happens to the message afterwards. The TUI uses [`ToastQueue`];
//! tests use [`RecordingNotifier`].

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen.
pub const TOAST_TTL: Duration = Duration::from_secs(4);

/// Maximum number of toasts kept at once; older ones are dropped.
pub const MAX_TOASTS: usize = 5;

/// Visual weight of a notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Sink for short user-facing messages.
pub trait Notifier {
    fn notify(&mut self, message: &str, severity: Severity);
}

/// A message on screen, stamped for expiry.
#[derive(Clone, Debug)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub raised_at: Instant,
}

/// Bounded queue of toasts, newest last.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops toasts older than [`TOAST_TTL`] as of `now`.
    pub fn expire(&mut self, now: Instant) {
        self.toasts
            .retain(|t| now.saturating_duration_since(t.raised_at) <= TOAST_TTL);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// The most recent toast, if any.
    pub fn latest(&self) -> Option<&Toast> {
        self.toasts.back()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn push(&mut self, toast: Toast) {
        if self.toasts.len() >= MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, message: &str, severity: Severity) {
        match severity {
            Severity::Error => tracing::warn!(toast = message, "error notification"),
            _ => tracing::info!(toast = message, ?severity, "notification"),
        }
        self.push(Toast {
            message: message.to_string(),
            severity,
            raised_at: Instant::now(),
        });
    }
}

/// Notifier that records every message, for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<(String, Severity)>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last recorded message.
    pub fn last(&self) -> Option<(&str, Severity)> {
        self.messages.last().map(|(m, s)| (m.as_str(), *s))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str, severity: Severity) {
        self.messages.push((message.to_string(), severity));
    }
}
