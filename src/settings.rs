//! Game settings
//!
//! Read from JSON. Every field is optional; missing fields keep their
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_ENEMY_COUNT, DEFAULT_FIELD_WIDTH};
use crate::sim::Sprite;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Debug ===
    /// Outline every collider
    pub show_colliders: bool,

    // === Gameplay ===
    /// Start on the character select screen
    pub character_select: bool,
    /// Characters offered by the selector, in order
    pub characters: Vec<Sprite>,
    /// Number of bugs
    pub enemy_count: usize,
    /// RNG seed; None picks one at startup
    pub seed: Option<u64>,

    // === Headless ===
    /// Field width when no display supplies one
    pub field_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_colliders: false,

            character_select: true,
            characters: Sprite::CHARACTERS.to_vec(),
            enemy_count: DEFAULT_ENEMY_COUNT,
            seed: None,

            field_width: DEFAULT_FIELD_WIDTH,
        }
    }
}

impl Settings {
    /// Parse settings from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Serialize settings to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Bad settings in {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Can't read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seed to use for a new game
    pub fn seed_or(&self, fallback: u64) -> u64 {
        self.seed.unwrap_or(fallback)
    }

    /// Replace values the game can't run with
    fn sanitize(&mut self) {
        let before = self.characters.len();
        self.characters.retain(Sprite::is_character);
        if self.characters.len() != before {
            log::warn!("Dropped {} non-character sprites from roster", before - self.characters.len());
        }
        if self.characters.is_empty() {
            self.characters = Sprite::CHARACTERS.to_vec();
        }
        if !(self.field_width.is_finite() && self.field_width > 0.0) {
            log::warn!("Field width {} is unusable, using default", self.field_width);
            self.field_width = DEFAULT_FIELD_WIDTH;
        }
    }
}
