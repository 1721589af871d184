//! Enemy bugs
//!
//! Bugs crawl left to right along one of three lanes. Leaving the right edge
//! recycles the bug: it reappears off the left edge on a fresh lane at a fresh
//! speed. Bugs are never destroyed.

use glam::Vec2;
use rand::Rng;
use serde::Serialize;

use super::collider::{Collide, Collider};
use super::entity::{Entity, Lifecycle, Sprite, TickContext};
use crate::consts::*;

/// A lane-bound enemy
#[derive(Debug, Clone, Serialize)]
pub struct Enemy {
    pub pos: Vec2,
    /// Lane index in `0..LANE_COUNT`
    pub lane: u32,
    /// Horizontal speed (units/s)
    pub speed: f32,
    pub sprite: Sprite,
    pub collider: Collider,
    pub lifecycle: Lifecycle,
}

impl Default for Enemy {
    fn default() -> Self {
        Self::new()
    }
}

impl Enemy {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            lane: 0,
            speed: 0.0,
            sprite: Sprite::EnemyBug,
            collider: Collider::new(55.0, 110.0, 30.0),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// y coordinate of a lane
    #[inline]
    pub fn lane_y(lane: u32) -> f32 {
        ENEMY_MIN_Y + ROW_HEIGHT * lane as f32
    }

    /// Move off the left edge onto a random lane with a random speed
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.speed = ENEMY_SPEED_STEP * rng.random_range(1..=ENEMY_SPEED_TIERS) as f32;
        self.lane = rng.random_range(0..LANE_COUNT);
        self.pos = Vec2::new(ENEMY_SPAWN_X, Self::lane_y(self.lane));
        self.lifecycle = Lifecycle::Active;
    }

    /// Crawl for `dt` seconds. Returns true if the bug was recycled.
    pub fn advance<R: Rng + ?Sized>(&mut self, dt: f32, field_width: f32, rng: &mut R) -> bool {
        if self.lifecycle == Lifecycle::Uninitialized {
            self.reset(rng);
        }

        self.pos.x += self.speed * dt;

        if self.pos.x > field_width {
            self.reset(rng);
            return true;
        }
        false
    }
}

impl Collide for Enemy {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn collider(&self) -> &Collider {
        &self.collider
    }
}

impl Entity for Enemy {
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        if self.advance(ctx.dt, ctx.field_width, &mut *ctx.rng) {
            log::debug!("Enemy recycled onto lane {} at {}", self.lane, self.speed);
        }
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }

    fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }
}
