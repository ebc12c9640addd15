//! Passive desktop notifications.

use notify_rust::Notification;
use tracing::warn;

const APP_NAME: &str = "Folder Tray";

/// Shows short messages to the user without blocking.
pub trait Notifier {
    /// Display `summary` with `body`. Failures are logged, never returned.
    fn notify(&self, summary: &str, body: &str);
}

/// Notifier backed by the OS notification service.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, summary: &str, body: &str) {
        if let Err(e) = Notification::new()
            .appname(APP_NAME)
            .summary(summary)
            .body(body)
            .show()
        {
            warn!(error = ?e, summary, "Failed to show notification");
        }
    }
}
