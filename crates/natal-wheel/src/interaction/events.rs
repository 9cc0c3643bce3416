//! Pointer and keyboard events driving the view state.
//!
//! Pointer hover and keyboard focus produce the same transitions, so a
//! keyboard user can inspect every body a mouse user can.

use super::view_state::ViewState;

/// Keys the wheel reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Escape,
    Plus,
    Minus,
    Char(char),
}

/// Events addressed to the wheel; body ids are body names
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WheelEvent {
    PointerEnter(String),
    PointerLeave(String),
    FocusIn(String),
    FocusOut(String),
    KeyDown { target: Option<String>, key: Key },
}

impl WheelEvent {
    /// Body this event would focus, if any
    pub fn focus_target(&self) -> Option<&str> {
        match self {
            WheelEvent::PointerEnter(id) | WheelEvent::FocusIn(id) => Some(id.as_str()),
            WheelEvent::KeyDown {
                target: Some(id),
                key: Key::Enter | Key::Space,
            } => Some(id.as_str()),
            _ => None,
        }
    }
}

impl ViewState {
    /// Apply one event. Returns whether the view needs re-rendering.
    pub fn handle_event(&mut self, event: &WheelEvent) -> bool {
        if let Some(id) = event.focus_target() {
            return self.set_focused_body(id);
        }
        match event {
            WheelEvent::PointerLeave(id) | WheelEvent::FocusOut(id) => self.release_focus(id),
            WheelEvent::KeyDown { key, .. } => match key {
                Key::Escape => self.clear_focused_body(),
                Key::Plus | Key::Char('+') | Key::Char('=') => self.zoom_in(),
                Key::Minus | Key::Char('-') => self.zoom_out(),
                Key::Char('a') | Key::Char('A') => self.toggle_aspects(),
                _ => false,
            },
            _ => false,
        }
    }
}
