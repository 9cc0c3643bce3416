//! Accessible descriptions of bodies.
//!
//! Every body marker carries a static label; the tooltip is the richer block
//! shown while one body is focused.

use serde::{Deserialize, Serialize};

use crate::chart::Body;

/// "Capricorn 25.50°", or just the degree when the sign is unknown
fn sign_position(body: &Body) -> String {
    if body.sign.is_empty() {
        format!("{:.2}°", body.degree)
    } else {
        format!("{} {:.2}°", body.sign, body.degree)
    }
}

/// Static label attached to a body marker.
pub fn describe_body(body: &Body) -> String {
    let mut label = format!("{}, {}", body.name, sign_position(body));
    if body.house > 0 {
        label.push_str(&format!(", house {}", body.house));
    }
    if body.retrograde {
        label.push_str(", retrograde");
    }
    label
}

/// Description block for the focused body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub body_id: String,
    pub title: String,
    pub lines: Vec<String>,
}

impl Tooltip {
    pub fn for_body(body: &Body) -> Self {
        let mut lines = vec![sign_position(body)];
        if body.house > 0 {
            lines.push(format!("House {}", body.house));
        }
        if body.retrograde {
            lines.push("Retrograde".to_string());
        }
        Self {
            body_id: body.name.clone(),
            title: body.name.clone(),
            lines,
        }
    }

    /// Plain-text rendering, one field per line
    pub fn text(&self) -> String {
        let mut out = self.title.clone();
        for line in &self.lines {
            out.push('\n');
            out.push_str(line);
        }
        out
    }
}
