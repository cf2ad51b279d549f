/// Timeout of desktop popups, in milliseconds.
pub const NOTIFICATION_TIMEOUT_MS: u32 = 10_000;

/// Best-effort desktop notifications. Delivery failures are logged and
/// otherwise ignored.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    /// A notifier that uses the desktop backend if it was compiled in.
    /// Prints a warning when it was not.
    pub fn new() -> Notifier {
        if cfg!(feature = "desktop-notifications") {
            Notifier { enabled: true }
        } else {
            println!(
                "Desktop notifications are not available. Rebuild with the 'desktop-notifications' feature to enable them."
            );
            Notifier { enabled: false }
        }
    }

    pub fn disabled() -> Notifier {
        Notifier { enabled: false }
    }

    pub fn notify(&self, title: &str, message: &str) {
        if !self.enabled {
            return;
        }
        if let Err(e) = show(title, message) {
            tracing::warn!(error = %e, "failed to show notification");
        }
    }
}

#[cfg(feature = "desktop-notifications")]
fn show(title: &str, message: &str) -> anyhow::Result<()> {
    notify_rust::Notification::new()
        .summary(title)
        .body(message)
        .timeout(notify_rust::Timeout::Milliseconds(NOTIFICATION_TIMEOUT_MS))
        .show()
        .map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(())
}

#[cfg(not(feature = "desktop-notifications"))]
fn show(_title: &str, _message: &str) -> anyhow::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_notifier_is_a_no_op() {
        let notifier = Notifier::disabled();
        assert!(!notifier.enabled);
        notifier.notify("Task Completed!", "You finished 'flashcards'");
    }
}
