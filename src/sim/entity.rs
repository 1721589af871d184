//! Shared entity vocabulary: sprites, lifecycle and the per-tick contract

use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collider::Collide;
use super::state::GameEvent;
use crate::render::Canvas;

/// Every image the game draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    EnemyBug,
    CharBoy,
    CharCatGirl,
    CharHornGirl,
    CharPinkGirl,
    CharPrincessGirl,
    GemBlue,
    GemGreen,
    GemOrange,
    WaterBlock,
    StoneBlock,
    GrassBlock,
    Selector,
}

impl Sprite {
    /// Selectable player characters, in selector order
    pub const CHARACTERS: [Sprite; 5] = [
        Sprite::CharBoy,
        Sprite::CharCatGirl,
        Sprite::CharHornGirl,
        Sprite::CharPinkGirl,
        Sprite::CharPrincessGirl,
    ];

    /// All sprites (for preloading)
    pub const ALL: [Sprite; 13] = [
        Sprite::EnemyBug,
        Sprite::CharBoy,
        Sprite::CharCatGirl,
        Sprite::CharHornGirl,
        Sprite::CharPinkGirl,
        Sprite::CharPrincessGirl,
        Sprite::GemBlue,
        Sprite::GemGreen,
        Sprite::GemOrange,
        Sprite::WaterBlock,
        Sprite::StoneBlock,
        Sprite::GrassBlock,
        Sprite::Selector,
    ];

    /// Asset path relative to the page
    pub fn path(&self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::CharBoy => "images/char-boy.png",
            Sprite::CharCatGirl => "images/char-cat-girl.png",
            Sprite::CharHornGirl => "images/char-horn-girl.png",
            Sprite::CharPinkGirl => "images/char-pink-girl.png",
            Sprite::CharPrincessGirl => "images/char-princess-girl.png",
            Sprite::GemBlue => "images/Gem Blue.png",
            Sprite::GemGreen => "images/Gem Green.png",
            Sprite::GemOrange => "images/Gem Orange.png",
            Sprite::WaterBlock => "images/water-block.png",
            Sprite::StoneBlock => "images/stone-block.png",
            Sprite::GrassBlock => "images/grass-block.png",
            Sprite::Selector => "images/Selector.png",
        }
    }

    pub fn is_character(&self) -> bool {
        Self::CHARACTERS.contains(self)
    }
}

/// Entities are built without a position and placed on their first update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Lifecycle {
    #[default]
    Uninitialized,
    Active,
}

/// Everything an entity may read or touch during one update
pub struct TickContext<'a> {
    /// Seconds since the previous tick
    pub dt: f32,
    /// Current play-field width
    pub field_width: f32,
    pub rng: &'a mut Pcg32,
    /// Events raised this tick
    pub events: &'a mut Vec<GameEvent>,
}

/// Common contract for everything that lives in the world
pub trait Entity: Collide {
    fn update(&mut self, ctx: &mut TickContext<'_>);

    fn sprite(&self) -> Sprite;

    /// False until the first update has placed the entity
    fn is_active(&self) -> bool {
        true
    }

    /// Draw at the entity position (sprite top-left)
    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_sprite(self.sprite(), self.position());
    }
}
