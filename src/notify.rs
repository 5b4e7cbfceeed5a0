use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// How long a notification stays visible before it dismisses itself.
pub const AUTO_HIDE_MS: i64 = 2500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub visible: bool,
    pub shown_at: DateTime<Utc>,
}

impl Notification {
    pub fn auto_hide() -> Duration { Duration::milliseconds(AUTO_HIDE_MS) }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now - self.shown_at >= Self::auto_hide()
    }
}

/// Single-slot notification area: each new message replaces the previous one.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    current: Option<Notification>,
}

impl Notifier {
    pub fn show(&mut self, kind: NotificationKind, message: impl Into<String>) {
        self.show_at(kind, message, Utc::now());
    }

    pub fn show_at(&mut self, kind: NotificationKind, message: impl Into<String>, now: DateTime<Utc>) {
        self.current = Some(Notification { message: message.into(), kind, visible: true, shown_at: now });
    }

    pub fn dismiss(&mut self) {
        if let Some(n) = self.current.as_mut() {
            n.visible = false;
        }
    }

    /// Hides the current notification once its display time has elapsed.
    pub fn dismiss_expired(&mut self, now: DateTime<Utc>) -> bool {
        match self.current.as_mut() {
            Some(n) if n.visible && n.is_expired(now) => {
                n.visible = false;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> { self.current.as_ref() }

    pub fn visible(&self) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newer_message_supersedes_older() {
        let mut n = Notifier::default();
        n.show(NotificationKind::Info, "first");
        n.show(NotificationKind::Success, "second");
        assert_eq!(n.visible().map(|n| n.message.as_str()), Some("second"));
    }

    #[test]
    fn expires_after_auto_hide() {
        let t0 = Utc::now();
        let mut n = Notifier::default();
        n.show_at(NotificationKind::Success, "done", t0);
        assert!(!n.dismiss_expired(t0 + Duration::milliseconds(2499)));
        assert!(n.visible().is_some());
        assert!(n.dismiss_expired(t0 + Duration::milliseconds(2500)));
        assert!(n.visible().is_none());
        assert!(n.current().is_some());
    }

    #[test]
    fn manual_dismiss_hides() {
        let mut n = Notifier::default();
        n.show(NotificationKind::Error, "nope");
        n.dismiss();
        assert!(n.visible().is_none());
    }
}
