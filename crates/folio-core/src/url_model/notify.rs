//! User-facing notices raised while generating urls.

/// Fire-and-forget message surface (a modal in the admin UI, stderr in the
/// CLI).
pub trait Notifier {
    fn notify(&self, title: &str, body: &str);
}

impl<F: Fn(&str, &str)> Notifier for F {
    fn notify(&self, title: &str, body: &str) {
        self(title, body)
    }
}

/// Sends notices to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, title: &str, body: &str) {
        tracing::warn!(notice = title, "{}", body);
    }
}
