//! Transient toast notifications.

use std::time::{Duration, Instant};

use tracing::{info, warn};

/// How long a toast stays on screen.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// Visual style of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Errors and rejected input.
    Destructive,
}

/// A single notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_destructive(&self) -> bool {
        self.variant == ToastVariant::Destructive
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= TOAST_DURATION
    }
}

/// Collects toasts in display order and mirrors them to the log.
#[derive(Debug, Default)]
pub struct Notifier {
    toasts: Vec<Toast>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a confirmation toast.
    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Default);
    }

    /// Show an error toast.
    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.push(title.into(), description.into(), ToastVariant::Destructive);
    }

    fn push(&mut self, title: String, description: String, variant: ToastVariant) {
        match variant {
            ToastVariant::Default => info!(%title, %description, "toast"),
            ToastVariant::Destructive => warn!(%title, %description, "toast"),
        }
        self.toasts.push(Toast {
            title,
            description,
            variant,
            shown_at: Instant::now(),
        });
    }

    /// Every toast shown so far, oldest first.
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn last(&self) -> Option<&Toast> {
        self.toasts.last()
    }

    /// Toasts still visible at `now`; expired ones are dropped.
    pub fn visible(&mut self, now: Instant) -> &[Toast] {
        self.toasts.retain(|t| !t.is_expired(now));
        &self.toasts
    }

    /// Take all pending toasts, e.g. to print them.
    pub fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}
