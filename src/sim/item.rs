//! Collectible gems

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collider::{Collide, Collider};
use super::enemy::Enemy;
use super::entity::{Entity, Sprite, TickContext};
use crate::consts::{COLUMNS, LANE_COUNT};

/// Gem variants, each worth a fixed score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Blue,
    Green,
    Orange,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Blue, ItemKind::Green, ItemKind::Orange];

    pub fn score_value(&self) -> u32 {
        match self {
            ItemKind::Blue => 10,
            ItemKind::Green => 20,
            ItemKind::Orange => 30,
        }
    }

    pub fn sprite(&self) -> Sprite {
        match self {
            ItemKind::Blue => Sprite::GemBlue,
            ItemKind::Green => Sprite::GemGreen,
            ItemKind::Orange => Sprite::GemOrange,
        }
    }
}

/// A stationary gem sitting on an enemy lane
#[derive(Debug, Clone, Serialize)]
pub struct Item {
    pub pos: Vec2,
    pub kind: ItemKind,
    pub collider: Collider,
}

impl Item {
    pub fn new(kind: ItemKind, pos: Vec2) -> Self {
        Self {
            pos,
            kind,
            collider: Collider::new(50.0, 110.0, 25.0),
        }
    }

    /// Random gem on a random column of a random lane
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, column_width: f32) -> Self {
        let kind = ItemKind::ALL[rng.random_range(0..ItemKind::ALL.len())];
        let column = rng.random_range(0..COLUMNS);
        let lane = rng.random_range(0..LANE_COUNT);
        let pos = Vec2::new(column_width * column as f32, Enemy::lane_y(lane));
        log::debug!("Spawned {:?} gem at column {}, lane {}", kind, column, lane);
        Self::new(kind, pos)
    }

    pub fn score_value(&self) -> u32 {
        self.kind.score_value()
    }
}

impl Collide for Item {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn collider(&self) -> &Collider {
        &self.collider
    }
}

impl Entity for Item {
    /// Gems don't move
    fn update(&mut self, _ctx: &mut TickContext<'_>) {}

    fn sprite(&self) -> Sprite {
        self.kind.sprite()
    }
}
