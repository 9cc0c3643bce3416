//! SVG output for a generated scene.
//!
//! The wheel goes into one group whose transform carries the zoom, so the
//! shape coordinates in the document match the scene exactly. The tooltip is
//! drawn outside that group and is not scaled.

use crate::rendering::primitives::{Color, LineStyle, Point, Shape, Stroke, TextAnchor};
use crate::rendering::spec::{ChartSpec, SceneMode};
use crate::tooltip::Tooltip;

const DASH_PATTERN: &str = "4 3";
const TOOLTIP_LINE_HEIGHT: f32 = 16.0;
const TOOLTIP_PADDING: f32 = 8.0;

/// Format a coordinate with at most two decimals and no trailing zeros
fn fmt_num(value: f32) -> String {
    let mut s = format!("{:.2}", value);
    while s.contains('.') && s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}

/// Escape text for element content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn color_attr(color: Color) -> String {
    color.to_css_string()
}

fn stroke_attrs(stroke: &Stroke) -> String {
    format!(
        "stroke=\"{}\" stroke-width=\"{}\"",
        color_attr(stroke.color),
        fmt_num(stroke.width)
    )
}

fn anchor_attr(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn text_element(class: &str, position: Point, size: f32, color: Color, content: &str) -> String {
    format!(
        "<text class=\"{}\" x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"middle\" dominant-baseline=\"central\">{}</text>",
        class,
        fmt_num(position.x),
        fmt_num(position.y),
        fmt_num(size),
        color_attr(color),
        escape_xml(content)
    )
}

fn render_shape(shape: &Shape) -> String {
    match shape {
        Shape::Circle {
            center,
            radius,
            fill,
            stroke,
        } => {
            let fill = fill.map(color_attr).unwrap_or_else(|| "none".to_string());
            let stroke = stroke.as_ref().map(stroke_attrs).unwrap_or_default();
            format!(
                "<circle class=\"ring\" cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" {}/>",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                fill,
                stroke
            )
        }
        Shape::Line { from, to, stroke } => format!(
            "<line class=\"leader\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_attrs(stroke)
        ),
        Shape::Text {
            position,
            content,
            size,
            color,
            anchor,
        } => format!(
            "<text x=\"{}\" y=\"{}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{}\">{}</text>",
            fmt_num(position.x),
            fmt_num(position.y),
            fmt_num(*size),
            color_attr(*color),
            anchor_attr(*anchor),
            escape_xml(content)
        ),
        Shape::SignLabel {
            sign,
            position,
            glyph,
            size,
            color,
            ..
        } => {
            let mut out = format!("<g class=\"sign\" aria-label=\"{}\">", escape_xml(sign));
            out.push_str(&text_element("sign-glyph", *position, *size, *color, glyph));
            out.push_str("</g>");
            out
        }
        Shape::HouseSpoke {
            house_num,
            from,
            to,
            stroke,
        } => format!(
            "<line class=\"cusp\" data-house=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" {}/>",
            house_num,
            fmt_num(from.x),
            fmt_num(from.y),
            fmt_num(to.x),
            fmt_num(to.y),
            stroke_attrs(stroke)
        ),
        Shape::AspectLine {
            from,
            to,
            planet1,
            planet2,
            aspect_type,
            tone,
            color,
            width,
            style,
            ..
        } => {
            let dash = match style {
                LineStyle::Dashed => format!(" stroke-dasharray=\"{}\"", DASH_PATTERN),
                LineStyle::Solid => String::new(),
            };
            format!(
                "<line class=\"aspect {}\" data-aspect=\"{}\" data-from=\"{}\" data-to=\"{}\" x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                tone.css_class(),
                escape_xml(aspect_type),
                escape_xml(planet1),
                escape_xml(planet2),
                fmt_num(from.x),
                fmt_num(from.y),
                fmt_num(to.x),
                fmt_num(to.y),
                color_attr(*color),
                fmt_num(*width),
                dash
            )
        }
        Shape::BodyMarker {
            body_id,
            center,
            radius,
            glyph,
            glyph_position,
            size,
            color,
            label,
        } => {
            let label = escape_xml(label);
            let mut out = format!(
                "<g class=\"body\" data-body=\"{}\" tabindex=\"0\" role=\"img\" aria-label=\"{}\"><title>{}</title>",
                escape_xml(body_id),
                label,
                label
            );
            out.push_str(&format!(
                "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"none\" stroke=\"{}\"/>",
                fmt_num(center.x),
                fmt_num(center.y),
                fmt_num(*radius),
                color_attr(*color)
            ));
            out.push_str(&text_element("body-glyph", *glyph_position, *size, *color, glyph));
            out.push_str("</g>");
            out
        }
        Shape::RetrogradeMark {
            body_id,
            position,
            glyph,
            size,
            color,
        } => {
            let mut out = format!("<g class=\"retrograde\" data-body=\"{}\">", escape_xml(body_id));
            out.push_str(&text_element("retrograde-glyph", *position, *size, *color, glyph));
            out.push_str("</g>");
            out
        }
    }
}

fn render_tooltip(tooltip: &Tooltip, spec: &ChartSpec) -> String {
    let line_count = tooltip.lines.len() + 1;
    let longest = std::iter::once(&tooltip.title)
        .chain(tooltip.lines.iter())
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest as f32 * 8.0 + TOOLTIP_PADDING * 2.0;
    let height = line_count as f32 * TOOLTIP_LINE_HEIGHT + TOOLTIP_PADDING * 2.0;
    let x = TOOLTIP_PADDING;
    let y = TOOLTIP_PADDING;

    let mut out = format!(
        "<g class=\"tooltip\" role=\"tooltip\" aria-live=\"polite\" data-body=\"{}\">",
        escape_xml(&tooltip.body_id)
    );
    out.push_str(&format!(
        "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" rx=\"4\" fill=\"{}\" fill-opacity=\"0.9\" stroke=\"{}\"/>",
        fmt_num(x),
        fmt_num(y),
        fmt_num(width.min(spec.width - 2.0 * x)),
        fmt_num(height),
        color_attr(spec.background_color),
        color_attr(Color::WHITE)
    ));
    out.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" font-size=\"13\" fill=\"{}\">",
        fmt_num(x + TOOLTIP_PADDING),
        fmt_num(y + TOOLTIP_PADDING),
        color_attr(Color::WHITE)
    ));
    out.push_str(&format!(
        "<tspan x=\"{}\" dy=\"{}\" font-weight=\"bold\">{}</tspan>",
        fmt_num(x + TOOLTIP_PADDING),
        fmt_num(TOOLTIP_LINE_HEIGHT * 0.8),
        escape_xml(&tooltip.title)
    ));
    for line in &tooltip.lines {
        out.push_str(&format!(
            "<tspan x=\"{}\" dy=\"{}\">{}</tspan>",
            fmt_num(x + TOOLTIP_PADDING),
            fmt_num(TOOLTIP_LINE_HEIGHT),
            escape_xml(line)
        ));
    }
    out.push_str("</text></g>");
    out
}

/// Serialize a scene, plus the focused body's tooltip if any, to SVG.
pub fn render_svg(spec: &ChartSpec, tooltip: Option<&Tooltip>) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" role=\"img\" aria-label=\"Natal chart wheel\">\n",
        w = fmt_num(spec.width),
        h = fmt_num(spec.height)
    ));
    out.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
        color_attr(spec.background_color)
    ));

    match &spec.mode {
        SceneMode::Placeholder { .. } => {
            out.push_str("<g class=\"placeholder\" role=\"status\">\n");
            for shape in &spec.shapes {
                out.push_str(&render_shape(shape));
                out.push('\n');
            }
            out.push_str("</g>\n");
        }
        SceneMode::Wheel => {
            let t = &spec.transform;
            out.push_str(&format!(
                "<g class=\"wheel\" transform=\"translate({cx} {cy}) scale({z}) translate({ncx} {ncy})\">\n",
                cx = fmt_num(t.origin.x),
                cy = fmt_num(t.origin.y),
                z = fmt_num(t.scale),
                ncx = fmt_num(-t.origin.x),
                ncy = fmt_num(-t.origin.y)
            ));
            for shape in &spec.shapes {
                out.push_str(&render_shape(shape));
                out.push('\n');
            }
            out.push_str("</g>\n");
            if let Some(tooltip) = tooltip {
                out.push_str(&render_tooltip(tooltip, spec));
                out.push('\n');
            }
        }
    }

    out.push_str("</svg>\n");
    out
}
