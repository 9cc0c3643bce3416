//! One mounted wheel: a chart snapshot, its view state, and the generator
//! that turns both into a scene.

use crate::chart::{ChartData, WheelSettings};
use crate::interaction::{ViewState, WheelEvent, ZoomLimits};
use crate::rendering::{render_svg, ChartSpec, ChartSpecGenerator};
use crate::tooltip::Tooltip;

pub struct WheelView {
    generator: ChartSpecGenerator,
    data: Option<ChartData>,
    view: ViewState,
}

impl WheelView {
    /// A view over `data` with default settings. `None` renders the
    /// placeholder.
    pub fn new(data: Option<ChartData>) -> Self {
        Self::with_settings(data, WheelSettings::default())
    }

    pub fn with_settings(data: Option<ChartData>, settings: WheelSettings) -> Self {
        let view = ViewState::with_limits(ZoomLimits::from(&settings));
        Self {
            generator: ChartSpecGenerator::with_settings(settings),
            data,
            view,
        }
    }

    pub fn data(&self) -> Option<&ChartData> {
        self.data.as_ref()
    }

    pub fn settings(&self) -> &WheelSettings {
        self.generator.settings()
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Swap in a new snapshot. Focus on a body the new chart lacks is dropped.
    pub fn set_data(&mut self, data: Option<ChartData>) {
        self.data = data;
        if let Some(name) = self.view.focused_body().map(str::to_string) {
            if !self.has_body(&name) {
                self.view.clear_focused_body();
            }
        }
    }

    fn has_body(&self, name: &str) -> bool {
        self.data.as_ref().is_some_and(|d| d.body(name).is_some())
    }

    /// Scene for the current data and view state
    pub fn render(&self) -> ChartSpec {
        self.generator.generate(self.data.as_ref(), &self.view)
    }

    /// Scene plus tooltip as an SVG document
    pub fn to_svg(&self) -> String {
        render_svg(&self.render(), self.tooltip().as_ref())
    }

    pub fn zoom_in(&mut self) -> bool {
        self.view.zoom_in()
    }

    pub fn zoom_out(&mut self) -> bool {
        self.view.zoom_out()
    }

    pub fn toggle_aspects(&mut self) -> bool {
        self.view.toggle_aspects()
    }

    /// Focus a body by name; names not in the chart are ignored.
    pub fn set_focused_body(&mut self, name: &str) -> bool {
        if !self.has_body(name) {
            log::debug!("Ignoring focus on unknown body {:?}", name);
            return false;
        }
        self.view.set_focused_body(name)
    }

    pub fn clear_focused_body(&mut self) -> bool {
        self.view.clear_focused_body()
    }

    /// Dispatch a pointer or keyboard event. Returns whether to re-render.
    pub fn handle_event(&mut self, event: &WheelEvent) -> bool {
        if let Some(target) = event.focus_target() {
            if !self.has_body(target) {
                log::debug!("Ignoring focus on unknown body {:?}", target);
                return false;
            }
        }
        self.view.handle_event(event)
    }

    pub fn execute_action(&mut self, action: &str) -> bool {
        self.view.execute_action(action)
    }

    /// Description of the focused body, if any
    pub fn tooltip(&self) -> Option<Tooltip> {
        let name = self.view.focused_body()?;
        self.data.as_ref()?.body(name).map(Tooltip::for_body)
    }
}
