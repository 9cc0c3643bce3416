pub mod data;
pub mod settings;

pub use data::{Aspect, Body, ChartData, HouseCusp};
pub use settings::{AspectColors, WheelSettings};

use crate::rendering::primitives::{Color, Point};

/// Default wheel origin
pub const DEFAULT_CENTER: Point = Point { x: 250.0, y: 250.0 };

/// Default orientation shift: places 0° longitude at 9 o'clock
pub const DEFAULT_SHIFT_DEGREES: f64 = 270.0;

/// Default direction: signs run counter-clockwise on screen
pub const DEFAULT_COUNTER_CLOCKWISE: bool = true;

/// Wrap any longitude into [0, 360).
pub fn normalize_longitude(longitude: f64) -> f64 {
    let wrapped = longitude.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Map a longitude to a point on the circle of `radius` around `center`.
///
/// `angle = (longitude + shift - 90)` in degrees, measured in screen
/// coordinates (y grows downwards), so increasing longitude turns clockwise.
/// `counter_clockwise` mirrors the angle.
pub fn get_point_position(
    center: Point,
    radius: f32,
    longitude: f64,
    shift_degrees: f64,
    counter_clockwise: bool,
) -> Point {
    let mut angle = normalize_longitude(longitude + shift_degrees) - 90.0;
    if counter_clockwise {
        angle = -angle;
    }
    let angle_rad = angle.to_radians();
    let radius = radius as f64;
    Point {
        x: (center.x as f64 + radius * angle_rad.cos()) as f32,
        y: (center.y as f64 + radius * angle_rad.sin()) as f32,
    }
}

/// Map a longitude onto the default wheel.
pub fn position(longitude: f64, radius: f32) -> Point {
    get_point_position(
        DEFAULT_CENTER,
        radius,
        longitude,
        DEFAULT_SHIFT_DEGREES,
        DEFAULT_COUNTER_CLOCKWISE,
    )
}

/// Parse a settings color, falling back to white on malformed input
pub fn parse_hex_color(hex: &str) -> Color {
    Color::from_hex(hex).unwrap_or_else(|| {
        log::debug!("Unparseable color {:?}, using white", hex);
        Color::WHITE
    })
}
