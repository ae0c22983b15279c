//! Session state and simulation context
//!
//! Everything that changes during a play-through lives in `GameState`. Screen
//! bounds, frame rate and the seeded RNG live in `SimContext`, which is passed
//! to every tick so the core never touches globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{EnemyKind, Player, Shot};
use super::formation::Formation;
use crate::consts::*;

/// How the enemy grid is populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormationStyle {
    /// Plain 30x20 rectangles, all Basic
    #[default]
    Blocks,
    /// 40x40 sprites, one variant per row
    Sprites,
}

impl FormationStyle {
    pub fn kind_for_row(&self, row: usize) -> EnemyKind {
        match self {
            FormationStyle::Blocks => EnemyKind::Basic,
            FormationStyle::Sprites => match row % 3 {
                0 => EnemyKind::Fast,
                1 => EnemyKind::Basic,
                _ => EnemyKind::Slow,
            },
        }
    }
}

/// Entity sizes and grid style for a new session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionLayout {
    pub player_size: Vec2,
    pub enemy_size: Vec2,
    pub style: FormationStyle,
}

impl Default for SessionLayout {
    fn default() -> Self {
        Self {
            player_size: Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            enemy_size: Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT),
            style: FormationStyle::Blocks,
        }
    }
}

impl SessionLayout {
    /// Sprite sessions take the player size from its image and scale enemies
    pub fn sprites(player_size: Vec2) -> Self {
        Self {
            player_size,
            enemy_size: Vec2::splat(ENEMY_SPRITE_SIZE),
            style: FormationStyle::Sprites,
        }
    }
}

/// Explicit context handed to every simulation step
#[derive(Debug, Clone)]
pub struct SimContext {
    /// Screen size (width, height)
    pub screen: Vec2,
    /// Target frames per second
    pub frame_rate: u32,
    seed: u64,
    rng: Pcg32,
}

impl SimContext {
    pub fn new(screen: Vec2, frame_rate: u32, seed: u64) -> Self {
        Self {
            screen,
            frame_rate,
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}

impl Default for SimContext {
    fn default() -> Self {
        Self::new(Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT), FRAME_RATE, 0)
    }
}

/// Complete state of one play-through
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Enemies destroyed so far
    pub score: u64,
    /// Scales enemy fire probability, grows every frame
    pub difficulty: f64,
    /// Frames simulated in this session
    pub frame: u64,
    pub player: Player,
    /// Shots fired by the player (spawn order)
    pub player_shots: Vec<Shot>,
    /// Shots fired by the formation (spawn order)
    pub enemy_shots: Vec<Shot>,
    pub formation: Formation,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Fresh session: full formation, three lives, zero score
    pub fn new(screen: Vec2, layout: &SessionLayout) -> Self {
        let mut next_id = 1;
        let formation = Formation::grid(
            layout.enemy_size,
            |row| layout.style.kind_for_row(row),
            || {
                let id = next_id;
                next_id += 1;
                id
            },
        );

        Self {
            score: 0,
            difficulty: DIFFICULTY_START,
            frame: 0,
            player: Player::new(screen, layout.player_size),
            player_shots: Vec::new(),
            enemy_shots: Vec::new(),
            formation,
            next_id,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session() {
        let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let mut state = GameState::new(screen, &SessionLayout::default());
        assert_eq!(state.score, 0);
        assert_eq!(state.player.lives, 3);
        assert_eq!(state.formation.len(), 24);
        assert!(state.player_shots.is_empty() && state.enemy_shots.is_empty());
        // IDs continue after the formation
        assert_eq!(state.next_entity_id(), 25);
    }

    #[test]
    fn test_sprite_layout_rows() {
        let screen = Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT);
        let state = GameState::new(screen, &SessionLayout::sprites(Vec2::new(64.0, 48.0)));
        let kinds: Vec<EnemyKind> = state
            .formation
            .enemies()
            .iter()
            .step_by(FORMATION_COLS)
            .map(|e| e.kind)
            .collect();
        assert_eq!(kinds, vec![EnemyKind::Fast, EnemyKind::Basic, EnemyKind::Slow]);
        assert_eq!(state.formation.enemies()[0].rect.size, Vec2::splat(40.0));
        assert_eq!(state.player.rect.size, Vec2::new(64.0, 48.0));
    }

    #[test]
    fn test_context_is_reproducible() {
        use rand::Rng;
        let mut a = SimContext::new(Vec2::new(800.0, 600.0), 60, 9);
        let mut b = SimContext::new(Vec2::new(800.0, 600.0), 60, 9);
        let xs: Vec<u32> = (0..5).map(|_| a.rng().random()).collect();
        let ys: Vec<u32> = (0..5).map(|_| b.rng().random()).collect();
        assert_eq!(xs, ys);
        assert_eq!(a.seed(), 9);
    }
}
