//! Pre-game character selection

use glam::Vec2;
use serde::Serialize;

use super::entity::Sprite;
use crate::consts::{PLAYER_MIN_Y, ROW_HEIGHT, ROWS, TILE_WIDTH};

/// Highlight moving over a row of characters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterSelector {
    /// Never empty
    characters: Vec<Sprite>,
    /// Highlighted index, always within `characters`
    index: usize,
}

impl Default for CharacterSelector {
    fn default() -> Self {
        Self::new(Sprite::CHARACTERS.to_vec())
    }
}

impl CharacterSelector {
    /// Selector over the playable sprites in `characters`. Falls back to the
    /// full roster when none are playable.
    pub fn new(mut characters: Vec<Sprite>) -> Self {
        let before = characters.len();
        characters.retain(Sprite::is_character);
        if characters.len() != before {
            log::warn!("Dropped {} non-character sprites from roster", before - characters.len());
        }
        if characters.is_empty() {
            log::warn!("Empty character roster, using the full set");
            characters = Sprite::CHARACTERS.to_vec();
        }
        Self {
            characters,
            index: 0,
        }
    }

    pub fn characters(&self) -> &[Sprite] {
        &self.characters
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn move_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.index = (self.index + 1).min(self.characters.len().saturating_sub(1));
    }

    pub fn highlighted(&self) -> Sprite {
        self.characters[self.index]
    }

    /// The character to play as
    pub fn confirm(&self) -> Sprite {
        self.highlighted()
    }

    /// Top-left of the tile for slot `index` (the spawn row)
    pub fn slot_position(index: usize) -> Vec2 {
        Vec2::new(
            TILE_WIDTH * index as f32,
            ROW_HEIGHT * (ROWS - 1) as f32 + PLAYER_MIN_Y,
        )
    }

    /// Top-left of the highlight
    pub fn position(&self) -> Vec2 {
        Self::slot_position(self.index)
    }
}
