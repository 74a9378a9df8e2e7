//! Terminal notification surface.

use std::io::Write;
use std::sync::Mutex;

use ziplookup_search::{Notification, NotificationKind, Notifier, NotifyError};

/// Writes each notification as one `[kind] message` line.
pub(crate) struct TerminalNotifier<W> {
    out: Mutex<W>,
}

impl<W: Write> TerminalNotifier<W> {
    pub(crate) fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write> Notifier for TerminalNotifier<W> {
    fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let label = match notification.kind {
            NotificationKind::Info => "[info]",
            NotificationKind::Success => "[ok]",
            NotificationKind::Error => "[error]",
        };
        let mut out = self.out.lock().map_err(|e| NotifyError(e.to_string()))?;
        writeln!(out, "{label} {}", notification.message)
            .and_then(|()| out.flush())
            .map_err(|e| NotifyError(e.to_string()))
    }
}
