use crate::chart::WheelSettings;

/// Zoom step and closed clamp range
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            step: 0.2,
            min: 0.5,
            max: 2.0,
        }
    }
}

impl From<&WheelSettings> for ZoomLimits {
    fn from(settings: &WheelSettings) -> Self {
        Self {
            step: settings.zoom_step,
            min: settings.zoom_min,
            max: settings.zoom_max,
        }
    }
}

impl ZoomLimits {
    fn clamp(&self, zoom: f32) -> f32 {
        // max/min chain rather than f32::clamp, which panics on min > max
        let clamped = zoom.max(self.min).min(self.max);
        (clamped * 10_000.0).round() / 10_000.0
    }
}

/// Named actions a host can bind to keys or buttons: (id, label)
pub const BINDABLE_ACTIONS: &[(&str, &str)] = &[
    ("zoom_in", "Zoom In"),
    ("zoom_out", "Zoom Out"),
    ("toggle_aspects", "Toggle Aspects"),
    ("clear_focus", "Clear Focus"),
];

/// Runtime view state owned by one wheel view.
///
/// All mutators return whether anything changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    zoom_factor: f32,
    show_aspects: bool,
    focused_body: Option<String>,
    limits: ZoomLimits,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::with_limits(ZoomLimits::default())
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ZoomLimits) -> Self {
        Self {
            zoom_factor: limits.clamp(1.0),
            show_aspects: true,
            focused_body: None,
            limits,
        }
    }

    pub fn zoom_factor(&self) -> f32 {
        self.zoom_factor
    }

    pub fn show_aspects(&self) -> bool {
        self.show_aspects
    }

    pub fn focused_body(&self) -> Option<&str> {
        self.focused_body.as_deref()
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn zoom_in(&mut self) -> bool {
        self.set_zoom(self.zoom_factor + self.limits.step)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.set_zoom(self.zoom_factor - self.limits.step)
    }

    fn set_zoom(&mut self, zoom: f32) -> bool {
        let zoom = self.limits.clamp(zoom);
        if zoom == self.zoom_factor {
            return false;
        }
        log::trace!("Zoom {} -> {}", self.zoom_factor, zoom);
        self.zoom_factor = zoom;
        true
    }

    pub fn toggle_aspects(&mut self) -> bool {
        self.show_aspects = !self.show_aspects;
        log::trace!("Aspects {}", if self.show_aspects { "shown" } else { "hidden" });
        true
    }

    /// Focus `name`, replacing any previously focused body.
    pub fn set_focused_body(&mut self, name: &str) -> bool {
        if self.focused_body.as_deref() == Some(name) {
            return false;
        }
        log::trace!("Focus {:?} -> {:?}", self.focused_body, name);
        self.focused_body = Some(name.to_string());
        true
    }

    pub fn clear_focused_body(&mut self) -> bool {
        if self.focused_body.is_none() {
            return false;
        }
        log::trace!("Focus {:?} cleared", self.focused_body);
        self.focused_body = None;
        true
    }

    /// Clear focus only if `name` is the focused body
    pub fn release_focus(&mut self, name: &str) -> bool {
        if self.focused_body.as_deref() != Some(name) {
            return false;
        }
        self.clear_focused_body()
    }

    /// Run a named action from [`BINDABLE_ACTIONS`]
    pub fn execute_action(&mut self, action: &str) -> bool {
        match action {
            "zoom_in" => self.zoom_in(),
            "zoom_out" => self.zoom_out(),
            "toggle_aspects" => self.toggle_aspects(),
            "clear_focus" => self.clear_focused_body(),
            _ => {
                log::debug!("Unknown wheel action {:?}", action);
                false
            }
        }
    }
}
