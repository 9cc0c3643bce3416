pub mod generator;
pub mod glyphs;
pub mod placement;
pub mod primitives;
pub mod spec;
pub mod svg;

pub use generator::ChartSpecGenerator;
pub use spec::{ChartMetadata, ChartSpec, SceneMode, ViewTransform};
pub use svg::render_svg;
