use crate::rendering::primitives::{Color, Point, Shape};
use serde::{Deserialize, Serialize};

/// What the scene shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SceneMode {
    Wheel,
    /// No bodies to plot; only the message is drawn
    Placeholder { message: String },
}

/// Zoom applied on top of the fixed-radius geometry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    pub scale: f32,
    /// Fixed point of the scale (the wheel center)
    pub origin: Point,
}

impl ViewTransform {
    /// Where a scene point ends up on the rendering surface
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.origin.x + (p.x - self.origin.x) * self.scale,
            y: self.origin.y + (p.y - self.origin.y) * self.scale,
        }
    }
}

/// Chart metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartMetadata {
    pub body_count: usize,
    pub chord_count: usize,
    pub spoke_count: usize,
}

/// Declarative description of one rendered wheel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub width: f32,
    pub height: f32,
    pub center: Point,
    pub radius: f32,
    pub background_color: Color,
    pub transform: ViewTransform,
    pub mode: SceneMode,
    pub shapes: Vec<Shape>,
    pub metadata: ChartMetadata,
}

impl ChartSpec {
    /// Create an empty scene for a wheel of `radius` around `center`
    pub fn new(width: f32, height: f32, center: Point, radius: f32) -> Self {
        Self {
            width,
            height,
            center,
            radius,
            background_color: Color::BLACK,
            transform: ViewTransform {
                scale: 1.0,
                origin: center,
            },
            mode: SceneMode::Wheel,
            shapes: Vec::new(),
            metadata: ChartMetadata::default(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.mode, SceneMode::Placeholder { .. })
    }

    pub fn body_markers(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::BodyMarker { .. }))
    }

    pub fn aspect_lines(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::AspectLine { .. }))
    }

    pub fn house_spokes(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::HouseSpoke { .. }))
    }

    pub fn sign_labels(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::SignLabel { .. }))
    }

    /// Retrograde decorations attached to `body_id`
    pub fn retrograde_marks_for<'a>(&'a self, body_id: &'a str) -> impl Iterator<Item = &'a Shape> {
        self.shapes.iter().filter(move |s| {
            matches!(s, Shape::RetrogradeMark { body_id: id, .. } if id == body_id)
        })
    }

    /// The marker tagged with `body_id`
    pub fn marker(&self, body_id: &str) -> Option<&Shape> {
        self.body_markers()
            .find(|s| matches!(s, Shape::BodyMarker { body_id: id, .. } if id == body_id))
    }
}
