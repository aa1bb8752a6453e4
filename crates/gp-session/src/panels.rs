//! Optional text regions around the map.

use gp_locate::{LogNotifier, Notice, Notifier, Severity};

/// Callbacks for the page's text regions.
///
/// All methods have default no-op implementations; a page without a given
/// region simply does not override the method.
///
/// # Example — form mirror
///
/// ```rust,ignore
/// struct FormMirror { lat: String, lon: String }
///
/// impl DisplayPanels for FormMirror {
///     fn show_form_fields(&mut self, lat: &str, lon: &str) {
///         self.lat = lat.to_owned();
///         self.lon = lon.to_owned();
///     }
/// }
/// ```
pub trait DisplayPanels {
    /// `"Latitude: …, Longitude: …"` for the current position.
    fn show_current_location(&mut self, _text: &str) {}

    /// Same format, for the QR position.
    fn show_target_location(&mut self, _text: &str) {}

    /// `"12.34 km"`.
    fn show_distance(&mut self, _text: &str) {}

    /// The latitude/longitude inputs, 7 decimals each.
    fn show_form_fields(&mut self, _lat: &str, _lon: &str) {}

    fn set_loading(&mut self, _loading: bool) {}

    /// A message the user must acknowledge.
    fn alert(&mut self, _message: &str) {}

    /// The page's inline notice element, for problems that do not stop the
    /// page (e.g. location permission denied).
    fn show_notice(&mut self, _message: &str) {}
}

/// A [`DisplayPanels`] for pages with no text regions at all.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPanels;

impl DisplayPanels for NoopPanels {}

impl<P: DisplayPanels + ?Sized> DisplayPanels for &mut P {
    fn show_current_location(&mut self, text: &str) {
        (**self).show_current_location(text)
    }

    fn show_target_location(&mut self, text: &str) {
        (**self).show_target_location(text)
    }

    fn show_distance(&mut self, text: &str) {
        (**self).show_distance(text)
    }

    fn show_form_fields(&mut self, lat: &str, lon: &str) {
        (**self).show_form_fields(lat, lon)
    }

    fn set_loading(&mut self, loading: bool) {
        (**self).set_loading(loading)
    }

    fn alert(&mut self, message: &str) {
        (**self).alert(message)
    }

    fn show_notice(&mut self, message: &str) {
        (**self).show_notice(message)
    }
}

/// Routes acquisition notices into the page.
///
/// Passive notices land in the inline notice element and blocking ones in
/// an alert.  Both are logged as well, the way [`LogNotifier`] does.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanelNotifier<P: DisplayPanels> {
    panels: P,
}

impl<P: DisplayPanels> PanelNotifier<P> {
    pub fn new(panels: P) -> Self {
        Self { panels }
    }

    pub fn panels(&self) -> &P {
        &self.panels
    }

    pub fn into_inner(self) -> P {
        self.panels
    }
}

impl<P: DisplayPanels> Notifier for PanelNotifier<P> {
    fn notify(&mut self, notice: &Notice) {
        LogNotifier.notify(notice);
        match notice.severity {
            Severity::Passive => self.panels.show_notice(&notice.message),
            Severity::Blocking => self.panels.alert(&notice.message),
        }
    }
}
