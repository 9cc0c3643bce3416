use serde::{Deserialize, Serialize};

use crate::rendering::primitives::Point;

/// Scene constants and styling for the wheel.
///
/// Every field has a default, so a settings file only needs to name what it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelSettings {
    // Canvas
    pub width: f32,
    pub height: f32,
    pub center_x: f32,
    pub center_y: f32,
    /// Nominal outer radius R
    pub radius: f32,

    // Radii ratios (fractions of R)
    pub sign_label_ratio: f32,
    pub cusp_ratio: f32,
    pub body_ratio: f32,
    pub aspect_ratio: f32,
    pub ring_ratios: Vec<f32>,

    // Orientation: degrees added to every longitude before mapping.
    // 270 puts 0° Aries at 9 o'clock.
    pub shift_in_degrees: f64,
    pub counter_clockwise: bool,

    // Markers
    pub marker_radius: f32,
    pub symbol_size: f32,
    pub sign_symbol_size: f32,
    pub retrograde_offset: f32,
    /// Minimum angular gap between body glyphs; 0 disables spreading
    pub min_glyph_separation: f64,

    // Zoom
    pub zoom_step: f32,
    pub zoom_min: f32,
    pub zoom_max: f32,

    // Theme colors
    pub color_background: String,
    pub color_circles: String,
    pub color_cusps: String,
    pub color_signs: String,
    pub color_points: String,
    pub aspect_colors: AspectColors,

    // Stroke widths
    pub stroke_circles: f32,
    pub stroke_cusps: f32,
    pub stroke_aspects: f32,
    pub stroke_points: f32,

    pub placeholder_message: String,
}

/// One color per aspect tone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AspectColors {
    pub harmonious: String,
    pub tense: String,
    pub neutral: String,
}

impl Default for AspectColors {
    fn default() -> Self {
        Self {
            harmonious: "#27AE60".to_string(), // Green
            tense: "#FF4500".to_string(),      // OrangeRed
            neutral: "#4169E1".to_string(),    // RoyalBlue
        }
    }
}

impl Default for WheelSettings {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            center_x: 250.0,
            center_y: 250.0,
            radius: 200.0,

            sign_label_ratio: 0.95,
            cusp_ratio: 1.0,
            body_ratio: 0.8,
            aspect_ratio: 0.6,
            ring_ratios: vec![1.0, 0.8, 0.6],

            shift_in_degrees: 270.0,
            counter_clockwise: true,

            marker_radius: 10.0,
            symbol_size: 14.0,
            sign_symbol_size: 16.0,
            retrograde_offset: 10.0,
            min_glyph_separation: 0.0,

            zoom_step: 0.2,
            zoom_min: 0.5,
            zoom_max: 2.0,

            color_background: "#1a1a1a".to_string(),
            color_circles: "#444444".to_string(),
            color_cusps: "#cccccc".to_string(),
            color_signs: "#ffffff".to_string(),
            color_points: "#eeeeee".to_string(),
            aspect_colors: AspectColors::default(),

            stroke_circles: 1.0,
            stroke_cusps: 1.0,
            stroke_aspects: 1.2,
            stroke_points: 1.5,

            placeholder_message: "No chart data".to_string(),
        }
    }
}

impl WheelSettings {
    pub fn center(&self) -> Point {
        Point {
            x: self.center_x,
            y: self.center_y,
        }
    }

    /// Map a longitude onto the circle at `ratio` × R.
    pub fn point_at(&self, longitude: f64, ratio: f32) -> Point {
        super::get_point_position(
            self.center(),
            self.radius * ratio,
            longitude,
            self.shift_in_degrees,
            self.counter_clockwise,
        )
    }

    pub fn sign_label_radius(&self) -> f32 {
        self.radius * self.sign_label_ratio
    }

    pub fn cusp_radius(&self) -> f32 {
        self.radius * self.cusp_ratio
    }

    pub fn body_radius(&self) -> f32 {
        self.radius * self.body_ratio
    }

    pub fn aspect_radius(&self) -> f32 {
        self.radius * self.aspect_ratio
    }
}
