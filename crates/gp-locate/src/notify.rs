//! Side channel for acquisition problems.

/// How intrusive a notice should be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Severity {
    /// Informational; the page keeps working with fallback data.
    Passive,
    /// Demands acknowledgement (e.g. the host has no location support).
    Blocking,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Notice {
    pub message:  String,
    pub severity: Severity,
}

impl Notice {
    pub fn passive(message: impl Into<String>) -> Self {
        Self {
            message:  message.into(),
            severity: Severity::Passive,
        }
    }

    pub fn blocking(message: impl Into<String>) -> Self {
        Self {
            message:  message.into(),
            severity: Severity::Blocking,
        }
    }
}

/// Receives notices published by [`Locator::acquire`][crate::Locator::acquire].
///
/// A page with an alert region passes a notifier that writes into it; a
/// page without one keeps the default [`LogNotifier`].
pub trait Notifier {
    fn notify(&mut self, notice: &Notice);
}

/// Writes notices to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: &Notice) {
        match notice.severity {
            Severity::Passive => tracing::warn!("{}", notice.message),
            Severity::Blocking => tracing::error!("{}", notice.message),
        }
    }
}

impl<N: Notifier + ?Sized> Notifier for &mut N {
    fn notify(&mut self, notice: &Notice) {
        (**self).notify(notice);
    }
}
