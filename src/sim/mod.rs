//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through `tick`
//! - Seeded RNG only
//! - Stable iteration order (enemies and items in index order)
//! - No rendering or platform dependencies beyond the `Canvas` seam

pub mod collider;
pub mod enemy;
pub mod entity;
pub mod item;
pub mod player;
pub mod selector;
pub mod state;
pub mod tick;

pub use collider::{Collide, Collider, Hitbox};
pub use enemy::Enemy;
pub use entity::{Entity, Lifecycle, Sprite, TickContext};
pub use item::{Item, ItemKind};
pub use player::{Bounds, Direction, Player};
pub use selector::CharacterSelector;
pub use state::{GameEvent, GamePhase, GameState, RespawnCause};
pub use tick::{Input, check_collisions, handle_input, tick};
