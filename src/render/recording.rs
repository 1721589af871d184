//! A canvas that remembers what was drawn
//!
//! Used by tests and the headless native driver.

use glam::Vec2;

use super::Canvas;
use crate::sim::Sprite;

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Sprite { sprite: Sprite, pos: Vec2 },
    Circle { center: Vec2, radius: f32 },
    Text { text: String, pos: Vec2 },
}

/// Canvas that appends every call to `calls`
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Positions at which `sprite` was drawn, in call order
    pub fn positions_of(&self, sprite: Sprite) -> Vec<Vec2> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Sprite { sprite: s, pos } if *s == sprite => Some(*pos),
                _ => None,
            })
            .collect()
    }

    pub fn circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DrawCall::Circle { .. }))
            .count()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2) {
        self.calls.push(DrawCall::Sprite { sprite, pos });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.calls.push(DrawCall::Circle { center, radius });
    }

    fn fill_text(&mut self, text: &str, pos: Vec2) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            pos,
        });
    }
}
