use crate::aspects::{visible_chords, AspectTone, Chord};
use crate::chart::{parse_hex_color, ChartData, WheelSettings};
use crate::interaction::ViewState;
use crate::rendering::glyphs::{body_glyph, sign_glyph, RETROGRADE_GLYPH, SIGN_NAMES};
use crate::rendering::placement::spread_longitudes;
use crate::rendering::primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartMetadata, ChartSpec, SceneMode, ViewTransform};
use crate::tooltip::describe_body;

/// Glyphs displaced by less than this (px) get no leader line
const LEADER_THRESHOLD: f32 = 0.5;

/// ChartSpec generator - converts chart data and view state to a scene
pub struct ChartSpecGenerator {
    settings: WheelSettings,
}

impl ChartSpecGenerator {
    /// Create a new generator with default settings
    pub fn new() -> Self {
        Self {
            settings: WheelSettings::default(),
        }
    }

    pub fn with_settings(settings: WheelSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &WheelSettings {
        &self.settings
    }

    /// Build the full scene. Zoom only sets the view transform; shape
    /// coordinates are the same at every zoom level.
    pub fn generate(&self, data: Option<&ChartData>, view: &ViewState) -> ChartSpec {
        let s = &self.settings;
        let center = s.center();

        let mut spec = ChartSpec::new(s.width, s.height, center, s.radius);
        spec.background_color = parse_hex_color(&s.color_background);
        spec.transform = ViewTransform {
            scale: view.zoom_factor(),
            origin: center,
        };

        let Some(data) = data.filter(|d| !d.is_empty()) else {
            log::debug!("No bodies to plot, rendering placeholder");
            spec.mode = SceneMode::Placeholder {
                message: s.placeholder_message.clone(),
            };
            spec.shapes.push(Shape::Text {
                position: center,
                content: s.placeholder_message.clone(),
                size: s.symbol_size,
                color: parse_hex_color(&s.color_points),
                anchor: TextAnchor::Middle,
            });
            return spec;
        };

        let mut shapes = Vec::new();
        shapes.extend(self.generate_rings());
        shapes.extend(self.generate_sign_labels());

        let spokes = self.generate_house_spokes(data);
        let spoke_count = spokes.len();
        shapes.extend(spokes);

        let chords = visible_chords(data, view.show_aspects(), s);
        let chord_count = chords.len();
        shapes.extend(self.generate_aspect_shapes(&chords));

        shapes.extend(self.generate_body_shapes(data));

        spec.shapes = shapes;
        spec.metadata = ChartMetadata {
            body_count: data.planets.len(),
            chord_count,
            spoke_count,
        };
        spec
    }

    /// Decorative reference circles
    fn generate_rings(&self) -> Vec<Shape> {
        let s = &self.settings;
        s.ring_ratios
            .iter()
            .map(|ratio| Shape::Circle {
                center: s.center(),
                radius: s.radius * ratio,
                fill: None,
                stroke: Some(Stroke {
                    color: parse_hex_color(&s.color_circles),
                    width: s.stroke_circles,
                }),
            })
            .collect()
    }

    /// Twelve sign glyphs at each sign's starting longitude
    fn generate_sign_labels(&self) -> Vec<Shape> {
        let s = &self.settings;
        let color = parse_hex_color(&s.color_signs);
        SIGN_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| Shape::SignLabel {
                sign_index: i as u8,
                sign: name.to_string(),
                position: s.point_at(i as f64 * 30.0, s.sign_label_ratio),
                glyph: sign_glyph(name),
                size: s.sign_symbol_size,
                color,
            })
            .collect()
    }

    /// One spoke per cusp present in the data; absent houses are skipped
    fn generate_house_spokes(&self, data: &ChartData) -> Vec<Shape> {
        let s = &self.settings;
        let stroke = Stroke {
            color: parse_hex_color(&s.color_cusps),
            width: s.stroke_cusps,
        };
        data.house_cusps()
            .into_iter()
            .map(|(house_num, longitude)| Shape::HouseSpoke {
                house_num,
                from: s.center(),
                to: s.point_at(longitude, s.cusp_ratio),
                stroke: stroke.clone(),
            })
            .collect()
    }

    fn aspect_color(&self, tone: AspectTone) -> Color {
        let colors = &self.settings.aspect_colors;
        let hex = match tone {
            AspectTone::Harmonious => &colors.harmonious,
            AspectTone::Tense => &colors.tense,
            AspectTone::Neutral => &colors.neutral,
        };
        parse_hex_color(hex)
    }

    /// Generate aspect line shapes
    fn generate_aspect_shapes(&self, chords: &[Chord]) -> Vec<Shape> {
        chords
            .iter()
            .map(|chord| Shape::AspectLine {
                from: chord.from,
                to: chord.to,
                planet1: chord.planet1.clone(),
                planet2: chord.planet2.clone(),
                aspect_type: chord.kind.name().to_string(),
                tone: chord.color_class,
                color: self.aspect_color(chord.color_class),
                width: self.settings.stroke_aspects,
                style: if chord.dashed {
                    LineStyle::Dashed
                } else {
                    LineStyle::Solid
                },
                orb: chord.orb,
            })
            .collect()
    }

    /// Markers, leader lines for spread glyphs, and retrograde marks
    fn generate_body_shapes(&self, data: &ChartData) -> Vec<Shape> {
        let s = &self.settings;
        let color = parse_hex_color(&s.color_points);
        let longitudes: Vec<f64> = data.planets.iter().map(|b| b.longitude).collect();
        let display = spread_longitudes(&longitudes, s.min_glyph_separation);

        let mut shapes = Vec::with_capacity(data.planets.len() * 2);
        for (body, display_lon) in data.planets.iter().zip(display) {
            let center = s.point_at(body.longitude, s.body_ratio);
            let glyph_position = if s.min_glyph_separation > 0.0 {
                s.point_at(display_lon, s.body_ratio)
            } else {
                center
            };

            if center.distance(&glyph_position) > LEADER_THRESHOLD {
                shapes.push(Shape::Line {
                    from: center,
                    to: glyph_position,
                    stroke: Stroke {
                        color,
                        width: s.stroke_points,
                    },
                });
            }

            shapes.push(Shape::BodyMarker {
                body_id: body.name.clone(),
                center,
                radius: s.marker_radius,
                glyph: body_glyph(&body.name),
                glyph_position,
                size: s.symbol_size,
                color,
                label: describe_body(body),
            });

            if body.retrograde {
                shapes.push(Shape::RetrogradeMark {
                    body_id: body.name.clone(),
                    position: Point {
                        x: glyph_position.x + s.retrograde_offset,
                        y: glyph_position.y - s.retrograde_offset,
                    },
                    glyph: RETROGRADE_GLYPH.to_string(),
                    size: s.symbol_size * 0.6,
                    color,
                });
            }
        }
        shapes
    }
}

impl Default for ChartSpecGenerator {
    fn default() -> Self {
        Self::new()
    }
}
