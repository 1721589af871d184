//! The player-controlled character
//!
//! Movement is tile based: each directional input queues exactly one step,
//! applied on the next update. The player starts on the bottom row and scores
//! by reaching the water row at the top.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collider::{Collide, Collider};
use super::entity::{Entity, Lifecycle, Sprite, TickContext};
use super::state::{GameEvent, RespawnCause};
use crate::consts::*;

/// A movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Unit step in screen space (y grows downward)
    pub fn unit(&self) -> Vec2 {
        match self {
            Direction::Left => Vec2::NEG_X,
            Direction::Right => Vec2::X,
            Direction::Up => Vec2::NEG_Y,
            Direction::Down => Vec2::Y,
        }
    }
}

/// Movement limits for the player's position
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Bounds {
    /// Clamp a point, x first then y. Never panics on inverted bounds.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.max(self.min_x).min(self.max_x),
            p.y.max(self.min_y).min(self.max_y),
        )
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min_x && p.x <= self.max_x && p.y >= self.min_y && p.y <= self.max_y
    }
}

/// The player
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Movement queued by input, applied and cleared on the next update
    pub pending: Vec2,
    pub score: u32,
    pub bounds: Bounds,
    /// Size of one horizontal (x) and one vertical (y) step
    pub step: Vec2,
    pub sprite: Sprite,
    pub collider: Collider,
    pub lifecycle: Lifecycle,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: Vec2::ZERO,
            pending: Vec2::ZERO,
            score: 0,
            bounds: Bounds::default(),
            step: Vec2::ZERO,
            sprite: Sprite::CharBoy,
            collider: Collider::new(50.0, 120.0, 30.0),
            lifecycle: Lifecycle::Uninitialized,
        }
    }

    /// Derive step sizes and bounds from the field width
    pub fn start(&mut self, field_width: f32) {
        let move_h = field_width / COLUMNS as f32;
        let move_v = ROW_HEIGHT;
        self.step = Vec2::new(move_h, move_v);
        self.pending = Vec2::ZERO;
        self.bounds = Bounds {
            min_x: 0.0,
            max_x: move_h * (COLUMNS - 1) as f32,
            min_y: PLAYER_MIN_Y,
            max_y: move_v * (ROWS - 1) as f32 + PLAYER_MIN_Y,
        };
        self.lifecycle = Lifecycle::Active;
    }

    /// The spawn tile: center column, bottom row
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.step.x * (COLUMNS / 2) as f32, self.bounds.max_y)
    }

    /// Back to the spawn tile with nothing queued. Score is left alone.
    pub fn respawn(&mut self) {
        self.pos = self.spawn_point();
        self.pending = Vec2::ZERO;
    }

    /// Queue one step, replacing anything queued earlier
    pub fn handle_input(&mut self, direction: Direction) {
        self.pending = direction.unit() * self.step;
    }

    /// Apply queued movement. Returns why the player respawned, if it did.
    pub fn advance(&mut self, field_width: f32) -> Option<RespawnCause> {
        if self.lifecycle == Lifecycle::Uninitialized {
            self.start(field_width);
            self.respawn();
            return Some(RespawnCause::Spawned);
        }

        self.pos += self.pending;
        self.pending = Vec2::ZERO;
        self.pos = self.bounds.clamp(self.pos);

        if self.pos.y == self.bounds.min_y {
            self.score += SHORE_BONUS;
            self.respawn();
            return Some(RespawnCause::ReachedShore);
        }
        None
    }
}

impl Collide for Player {
    fn position(&self) -> Vec2 {
        self.pos
    }

    fn collider(&self) -> &Collider {
        &self.collider
    }
}

impl Entity for Player {
    fn update(&mut self, ctx: &mut TickContext<'_>) {
        match self.advance(ctx.field_width) {
            Some(RespawnCause::ReachedShore) => {
                log::info!("Reached the water! Score: {}", self.score);
                ctx.events.push(GameEvent::ReachedShore { score: self.score });
                ctx.events.push(GameEvent::PlayerRespawned {
                    cause: RespawnCause::ReachedShore,
                });
            }
            Some(cause) => ctx.events.push(GameEvent::PlayerRespawned { cause }),
            None => {}
        }
    }

    fn sprite(&self) -> Sprite {
        self.sprite
    }

    fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }
}
