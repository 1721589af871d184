//! Game state and core simulation types
//!
//! One `GameState` holds the whole world. Front-ends own it and pass it by
//! reference into `tick`, `handle_input` and `render`.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::enemy::Enemy;
use super::entity::{Entity, Sprite};
use super::item::{Item, ItemKind};
use super::player::Player;
use super::selector::CharacterSelector;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GamePhase {
    /// Choosing a character, entities are frozen
    SelectingCharacter(CharacterSelector),
    /// Active gameplay
    Playing,
}

/// Why the player was put back on the spawn tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RespawnCause {
    /// First placement after the game starts
    Spawned,
    /// Made it to the water (+5)
    ReachedShore,
    /// Touched a bug (score lost)
    CaughtByEnemy,
}

/// Notable things that happened during a tick, for front-ends to react to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GameEvent {
    CharacterSelected { sprite: Sprite },
    PlayerRespawned { cause: RespawnCause },
    ReachedShore { score: u32 },
    /// Index of the enemy that caught the player
    CaughtByEnemy { enemy: usize },
    ItemCollected { kind: ItemKind, score: u32 },
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    pub(crate) rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (gameplay ticks only)
    pub time_ticks: u64,
    pub player: Player,
    /// Fixed for the life of the game
    pub enemies: Vec<Enemy>,
    /// Gems on the field, in spawn order
    pub items: Vec<Item>,
    /// Events not yet drained by the front-end
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game state with the given seed and default settings
    pub fn new(seed: u64) -> Self {
        Self::with_settings(seed, &Settings::default())
    }

    pub fn with_settings(seed: u64, settings: &Settings) -> Self {
        let phase = if settings.character_select {
            GamePhase::SelectingCharacter(CharacterSelector::new(settings.characters.clone()))
        } else {
            GamePhase::Playing
        };

        log::info!(
            "New game: seed={}, enemies={}, phase={:?}",
            seed,
            settings.enemy_count,
            phase
        );

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase,
            time_ticks: 0,
            player: Player::new(),
            enemies: (0..settings.enemy_count).map(|_| Enemy::new()).collect(),
            items: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.player.score
    }

    pub fn is_selecting(&self) -> bool {
        matches!(self.phase, GamePhase::SelectingCharacter(_))
    }

    /// Every entity in draw order: items, enemies, then the player
    pub fn entities(&self) -> impl Iterator<Item = &dyn Entity> + '_ {
        self.items
            .iter()
            .map(|item| item as &dyn Entity)
            .chain(self.enemies.iter().map(|enemy| enemy as &dyn Entity))
            .chain(std::iter::once(&self.player as &dyn Entity))
    }

    /// Replace the gems with one fresh gem
    pub fn respawn_items(&mut self) {
        let item = Item::spawn(&mut self.rng, self.player.step.x);
        self.items.clear();
        self.items.push(item);
    }

    /// Take every event raised since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
