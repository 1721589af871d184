//! Rendering seam
//!
//! The simulation never draws directly. A front-end implements [`Canvas`]
//! (HTML canvas on the web, a recorder in tests) and [`render`] walks the
//! world issuing draw calls in back-to-front order.

pub mod recording;

pub use recording::{DrawCall, RecordingCanvas};

use glam::Vec2;

use crate::consts::{COLUMNS, ROW_HEIGHT, ROWS, TILE_WIDTH};
use crate::settings::Settings;
use crate::sim::{CharacterSelector, Collide, Entity, GamePhase, GameState, Sprite};

/// Drawing primitives the game needs from a front-end
pub trait Canvas {
    /// Draw an image with its top-left corner at `pos`
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2);

    /// Outline a circle (collider debugging)
    fn stroke_circle(&mut self, center: Vec2, radius: f32);

    fn fill_text(&mut self, text: &str, pos: Vec2);
}

/// Terrain row sprites, top to bottom
pub const TERRAIN: [Sprite; ROWS as usize] = [
    Sprite::WaterBlock,
    Sprite::StoneBlock,
    Sprite::StoneBlock,
    Sprite::StoneBlock,
    Sprite::GrassBlock,
    Sprite::GrassBlock,
];

/// Where the HUD line goes
const HUD_POS: Vec2 = Vec2::new(8.0, 40.0);

/// Draw the water, stone and grass grid
pub fn render_terrain(canvas: &mut dyn Canvas) {
    for (row, sprite) in TERRAIN.iter().enumerate() {
        for col in 0..COLUMNS {
            canvas.draw_sprite(
                *sprite,
                Vec2::new(col as f32 * TILE_WIDTH, row as f32 * ROW_HEIGHT),
            );
        }
    }
}

/// Draw one frame of the game
pub fn render(state: &GameState, canvas: &mut dyn Canvas, settings: &Settings) {
    render_terrain(canvas);

    match &state.phase {
        GamePhase::SelectingCharacter(selector) => render_selector(selector, canvas),
        GamePhase::Playing => {
            for entity in state.entities().filter(|e| e.is_active()) {
                render_entity(entity, canvas, settings.show_colliders);
            }
            canvas.fill_text(&format!("Score: {}", state.score()), HUD_POS);
        }
    }
}

fn render_entity(entity: &dyn Entity, canvas: &mut dyn Canvas, show_colliders: bool) {
    entity.render(canvas);
    if show_colliders {
        entity.hitbox().render(canvas);
    }
}

/// Highlight behind the roster, then the characters on top
pub fn render_selector(selector: &CharacterSelector, canvas: &mut dyn Canvas) {
    canvas.draw_sprite(Sprite::Selector, selector.position());
    for (index, sprite) in selector.characters().iter().enumerate() {
        canvas.draw_sprite(*sprite, CharacterSelector::slot_position(index));
    }
    canvas.fill_text("Pick a character: \u{2190} \u{2192} then Enter", HUD_POS);
}
