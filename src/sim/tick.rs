//! Simulation tick
//!
//! One tick updates every entity, then runs the collision pass. Updates
//! always finish before any collision is checked.

use serde::{Deserialize, Serialize};

use super::collider::Collide;
use super::entity::{Entity, TickContext};
use super::player::Direction;
use super::state::{GameEvent, GamePhase, GameState, RespawnCause};

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Left,
    Right,
    Up,
    Down,
    /// Pick the highlighted character
    Confirm,
}

impl Input {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" | "Left" => Some(Input::Left),
            "ArrowRight" | "Right" => Some(Input::Right),
            "ArrowUp" | "Up" => Some(Input::Up),
            "ArrowDown" | "Down" => Some(Input::Down),
            "Enter" | " " => Some(Input::Confirm),
            _ => None,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        match self {
            Input::Left => Some(Direction::Left),
            Input::Right => Some(Direction::Right),
            Input::Up => Some(Direction::Up),
            Input::Down => Some(Direction::Down),
            Input::Confirm => None,
        }
    }
}

/// Route an input to the character selector or the player
pub fn handle_input(state: &mut GameState, input: Input) {
    let chosen = match &mut state.phase {
        GamePhase::SelectingCharacter(selector) => match input {
            Input::Left => {
                selector.move_left();
                None
            }
            Input::Right => {
                selector.move_right();
                None
            }
            Input::Confirm => Some(selector.confirm()),
            Input::Up | Input::Down => None,
        },
        GamePhase::Playing => {
            if let Some(direction) = input.direction() {
                state.player.handle_input(direction);
            }
            None
        }
    };

    if let Some(sprite) = chosen {
        log::info!("Character selected: {:?}", sprite);
        state.player.sprite = sprite;
        state.phase = GamePhase::Playing;
        state.events.push(GameEvent::CharacterSelected { sprite });
    }
}

/// Advance the game by `dt` seconds on a field `field_width` wide
pub fn tick(state: &mut GameState, dt: f32, field_width: f32) {
    // Nothing moves until a character is picked
    if state.is_selecting() {
        return;
    }

    state.time_ticks += 1;
    let first_event = state.events.len();

    let mut ctx = TickContext {
        dt,
        field_width,
        rng: &mut state.rng,
        events: &mut state.events,
    };
    for enemy in &mut state.enemies {
        enemy.update(&mut ctx);
    }
    for item in &mut state.items {
        item.update(&mut ctx);
    }
    state.player.update(&mut ctx);

    let respawned = state.events[first_event..]
        .iter()
        .any(|e| matches!(e, GameEvent::PlayerRespawned { .. }));
    if respawned {
        state.respawn_items();
    }

    check_collisions(state);
}

/// Player vs enemies, then player vs items
///
/// Only the first overlapping enemy (in index order) is handled. Every
/// overlapping item is collected. Entities not yet placed never collide.
pub fn check_collisions(state: &mut GameState) {
    if !state.player.is_active() {
        return;
    }
    let player_box = state.player.hitbox();

    if let Some(index) = state
        .enemies
        .iter()
        .position(|enemy| enemy.is_active() && enemy.hitbox().overlaps(&player_box))
    {
        log::info!(
            "Caught by enemy {} at {:?}, score {} lost",
            index,
            state.player.pos,
            state.player.score
        );
        state.player.score = 0;
        state.player.respawn();
        state.events.push(GameEvent::CaughtByEnemy { enemy: index });
        state.events.push(GameEvent::PlayerRespawned {
            cause: RespawnCause::CaughtByEnemy,
        });
        state.respawn_items();
    }

    let player_box = state.player.hitbox();
    let mut collected = Vec::new();
    state.items.retain(|item| {
        if item.is_active() && item.hitbox().overlaps(&player_box) {
            collected.push(item.kind);
            false
        } else {
            true
        }
    });

    for kind in collected {
        state.player.score += kind.score_value();
        log::info!(
            "Collected {:?} gem (+{}), score {}",
            kind,
            kind.score_value(),
            state.player.score
        );
        state.events.push(GameEvent::ItemCollected {
            kind,
            score: state.player.score,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{DEFAULT_FIELD_WIDTH, ENEMY_SPAWN_X};
    use crate::settings::Settings;
    use crate::sim::entity::{Lifecycle, Sprite};
    use crate::sim::item::{Item, ItemKind};
    use glam::Vec2;

    const DT: f32 = 1.0 / 60.0;

    /// Started game with every bug parked far off the field
    fn playing_state(seed: u64) -> GameState {
        let settings = Settings {
            character_select: false,
            ..Default::default()
        };
        let mut state = GameState::with_settings(seed, &settings);
        tick(&mut state, 0.0, DEFAULT_FIELD_WIDTH);
        for enemy in &mut state.enemies {
            enemy.pos.x = -1000.0;
            enemy.speed = 0.0;
        }
        state.drain_events();
        state
    }

    /// Put an item exactly on the player's collider
    fn item_on_player(state: &GameState, kind: ItemKind) -> Item {
        let mut item = Item::new(kind, Vec2::ZERO);
        item.pos = state.player.hitbox().center - item.collider.offset;
        item
    }

    fn enemy_onto(state: &mut GameState, index: usize, player_pos: Vec2) {
        let target = player_pos + state.player.collider.offset;
        let enemy = &mut state.enemies[index];
        enemy.pos = target - enemy.collider.offset;
    }

    #[test]
    fn test_input_mapping() {
        assert_eq!(Input::from_key("ArrowLeft"), Some(Input::Left));
        assert_eq!(Input::from_key("ArrowUp"), Some(Input::Up));
        assert_eq!(Input::from_key("Enter"), Some(Input::Confirm));
        assert_eq!(Input::from_key("q"), None);
        assert_eq!(Input::Down.direction(), Some(Direction::Down));
        assert_eq!(Input::Confirm.direction(), None);
    }

    #[test]
    fn test_selection_freezes_world() {
        let mut state = GameState::new(1);
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);

        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.player.lifecycle, Lifecycle::Uninitialized);
        assert!(state.enemies.iter().all(|e| e.lifecycle == Lifecycle::Uninitialized));
    }

    #[test]
    fn test_select_then_play() {
        let mut state = GameState::new(1);

        handle_input(&mut state, Input::Up);
        handle_input(&mut state, Input::Right);
        handle_input(&mut state, Input::Confirm);

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.sprite, Sprite::CharCatGirl);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::CharacterSelected {
                sprite: Sprite::CharCatGirl
            }]
        );

        // One way: confirm no longer does anything, arrows go to the player
        handle_input(&mut state, Input::Confirm);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.drain_events().is_empty());

        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);
        handle_input(&mut state, Input::Left);
        assert_eq!(state.player.pending, Vec2::new(-101.0, 0.0));
    }

    #[test]
    fn test_first_tick_spawns_everything() {
        let settings = Settings {
            character_select: false,
            ..Default::default()
        };
        let mut state = GameState::with_settings(11, &settings);
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);

        assert_eq!(state.time_ticks, 1);
        assert_eq!(state.player.pos, Vec2::new(202.0, 380.0));
        assert!(state.enemies.iter().all(|e| e.lifecycle == Lifecycle::Active));
        assert_eq!(state.items.len(), 1);
        assert!(state.events.contains(&GameEvent::PlayerRespawned {
            cause: RespawnCause::Spawned
        }));
    }

    #[test]
    fn test_unplaced_entities_never_collide() {
        let settings = Settings {
            character_select: false,
            ..Default::default()
        };
        let mut state = GameState::with_settings(1, &settings);
        state.player.score = 7;

        check_collisions(&mut state);

        assert_eq!(state.player.score, 7);
        assert!(state.events.is_empty());
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_unplaced_enemy_ignored() {
        let mut state = playing_state(5);
        state.player.score = 12;
        let pos = Vec2::new(0.0, 131.0);
        state.player.pos = pos;
        enemy_onto(&mut state, 0, pos);
        state.enemies[0].lifecycle = Lifecycle::Uninitialized;
        state.items.clear();

        check_collisions(&mut state);

        assert_eq!(state.player.score, 12);
        assert!(!state.events.iter().any(|e| matches!(e, GameEvent::CaughtByEnemy { .. })));
    }

    #[test]
    fn test_field_width_read_every_tick() {
        let mut state = playing_state(9);
        state.enemies[0].pos.x = 600.0;
        state.enemies[0].speed = 0.0;

        tick(&mut state, DT, 707.0);
        assert_eq!(state.enemies[0].pos.x, 600.0);

        // Display shrank
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);
        assert_eq!(state.enemies[0].pos.x, ENEMY_SPAWN_X);
    }

    #[test]
    fn test_enemy_collision_resets_score() {
        let mut state = playing_state(5);
        state.player.score = 25;
        let pos = Vec2::new(0.0, 131.0);
        state.player.pos = pos;
        enemy_onto(&mut state, 1, pos);

        check_collisions(&mut state);

        assert_eq!(state.player.score, 0);
        assert_eq!(state.player.pos, state.player.spawn_point());
        assert_eq!(state.player.pending, Vec2::ZERO);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::CaughtByEnemy { enemy: 1 }));
        assert!(events.contains(&GameEvent::PlayerRespawned {
            cause: RespawnCause::CaughtByEnemy
        }));
    }

    #[test]
    fn test_only_first_enemy_counts() {
        let mut state = playing_state(5);
        let pos = Vec2::new(101.0, 214.0);
        state.player.pos = pos;
        enemy_onto(&mut state, 0, pos);
        enemy_onto(&mut state, 2, pos);

        check_collisions(&mut state);

        let caught: Vec<_> = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::CaughtByEnemy { .. }))
            .collect();
        assert_eq!(caught, vec![GameEvent::CaughtByEnemy { enemy: 0 }]);
    }

    #[test]
    fn test_collects_every_overlapping_item() {
        let mut state = playing_state(9);
        state.player.pos = Vec2::new(303.0, 131.0);
        state.player.score = 5;

        let far = Item::new(ItemKind::Blue, Vec2::new(0.0, 58.0));
        state.items = vec![
            item_on_player(&state, ItemKind::Blue),
            item_on_player(&state, ItemKind::Green),
            far.clone(),
            item_on_player(&state, ItemKind::Orange),
        ];

        check_collisions(&mut state);

        assert_eq!(state.player.score, 5 + 10 + 20 + 30);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].pos, far.pos);

        let collected = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::ItemCollected { .. }))
            .count();
        assert_eq!(collected, 3);
    }

    #[test]
    fn test_walking_onto_gem() {
        let mut state = playing_state(21);
        // Gem on the bottom lane, same column as the spawn tile
        state.items = vec![Item::new(ItemKind::Orange, Vec2::new(202.0, 224.0))];

        handle_input(&mut state, Input::Up);
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);
        assert_eq!(state.items.len(), 1);

        handle_input(&mut state, Input::Up);
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);
        assert!(state.items.is_empty());
        assert_eq!(state.score(), 30);
    }

    #[test]
    fn test_reaching_shore_refreshes_items() {
        let mut state = playing_state(4);
        state.items.clear();
        state.player.pos = Vec2::new(202.0, 48.0);

        handle_input(&mut state, Input::Up);
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);

        assert_eq!(state.score(), 5);
        assert_eq!(state.player.pos, state.player.spawn_point());
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_loss_overrides_shore_bonus_in_same_tick() {
        let mut state = playing_state(4);
        state.player.pos = Vec2::new(202.0, 48.0);
        state.player.score = 10;
        // A bug sitting on the spawn tile catches the player as it respawns
        let spawn = state.player.spawn_point();
        enemy_onto(&mut state, 0, spawn);

        handle_input(&mut state, Input::Up);
        tick(&mut state, DT, DEFAULT_FIELD_WIDTH);

        assert_eq!(state.score(), 0);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::ReachedShore { score: 15 }));
        assert!(events.contains(&GameEvent::CaughtByEnemy { enemy: 0 }));
    }

    #[test]
    fn test_moving_enemy_catches_player() {
        let mut state = playing_state(8);
        state.player.score = 20;
        state.player.pos = Vec2::new(202.0, 214.0);

        // Bottom lane bug just left of the player, closing in
        let enemy = &mut state.enemies[0];
        enemy.lane = 2;
        enemy.pos = Vec2::new(100.0, 224.0);
        enemy.speed = 100.0;

        tick(&mut state, 0.5, DEFAULT_FIELD_WIDTH);

        assert_eq!(state.score(), 0);
        assert_eq!(state.player.pos, state.player.spawn_point());
    }

    #[test]
    fn test_determinism() {
        let settings = Settings {
            character_select: false,
            ..Default::default()
        };
        let mut state1 = GameState::with_settings(99999, &settings);
        let mut state2 = GameState::with_settings(99999, &settings);

        let inputs = [None, Some(Input::Up), None, Some(Input::Left), Some(Input::Up)];
        for _ in 0..50 {
            for input in inputs {
                if let Some(input) = input {
                    handle_input(&mut state1, input);
                    handle_input(&mut state2, input);
                }
                tick(&mut state1, DT * 4.0, DEFAULT_FIELD_WIDTH);
                tick(&mut state2, DT * 4.0, DEFAULT_FIELD_WIDTH);
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.player.pos, state2.player.pos);
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.speed, b.speed);
        }
    }
}
