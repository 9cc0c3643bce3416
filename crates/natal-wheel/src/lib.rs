//! Natal chart wheel rendering core.
//!
//! Takes a caller-supplied [`ChartData`] snapshot and turns it into a scene of
//! vector primitives: background rings, zodiac labels, house spokes, aspect
//! chords and body markers. A [`WheelView`] owns the per-session view state
//! (zoom, aspect visibility, focused body) and re-derives the scene after
//! every interaction.

pub mod aspects;
pub mod chart;
pub mod config;
pub mod interaction;
pub mod loader;
pub mod rendering;
pub mod tooltip;
pub mod wheel;

pub use aspects::{visible_chords, AspectKind, AspectTone, Chord};
pub use chart::{position, Body, ChartData, HouseCusp, WheelSettings};
pub use chart::data::Aspect;
pub use config::load_wheel_settings;
pub use interaction::{Key, ViewState, WheelEvent};
pub use loader::{load_chart_data_from_json, ChartDataError};
pub use rendering::{render_svg, ChartSpec, ChartSpecGenerator, SceneMode};
pub use tooltip::Tooltip;
pub use wheel::WheelView;
