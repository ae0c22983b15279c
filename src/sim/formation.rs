//! Formation controller
//!
//! The enemies move as one block. A single shared direction lives here and
//! nowhere else: any member touching a side wall flips it and drops the whole
//! formation once, no matter how many members touched.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Enemy, EnemyKind, Entity, Shot, StepContext};
use super::rect::Rect;
use crate::consts::*;

/// Shared horizontal direction of the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    /// +1 for right, -1 for left
    #[inline]
    pub fn sign(&self) -> f32 {
        match self {
            Direction::Right => 1.0,
            Direction::Left => -1.0,
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            Direction::Right => Direction::Left,
            Direction::Left => Direction::Right,
        }
    }
}

/// Per-member speed for a formation of `remaining` enemies.
///
/// Replaces each enemy's variant speed every frame, so the formation speeds
/// up as it thins out.
pub fn formation_speed(remaining: usize) -> f32 {
    1.0 + (3.0 - remaining as f32 / 8.0)
}

/// Chance that the formation fires this frame
pub fn enemy_fire_chance(difficulty: f64) -> f64 {
    ENEMY_FIRE_CHANCE * difficulty
}

/// What happened during one formation update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormationStep {
    /// A member touched a side wall, so the formation turned and descended
    pub edge_hit: bool,
}

/// The live set of enemies plus their shared direction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Formation {
    direction: Direction,
    enemies: Vec<Enemy>,
}

impl Formation {
    pub fn new(enemies: Vec<Enemy>) -> Self {
        Self {
            direction: Direction::Right,
            enemies,
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Standard 3x8 grid. `kind_for_row` picks the variant of each row and
    /// `next_id` hands out entity IDs.
    pub fn grid(
        enemy_size: Vec2,
        kind_for_row: impl Fn(usize) -> EnemyKind,
        mut next_id: impl FnMut() -> u32,
    ) -> Self {
        let mut enemies = Vec::with_capacity(FORMATION_ROWS * FORMATION_COLS);
        for row in 0..FORMATION_ROWS {
            let kind = kind_for_row(row);
            for col in 0..FORMATION_COLS {
                let pos = Vec2::new(
                    FORMATION_LEFT + col as f32 * FORMATION_COL_SPACING,
                    FORMATION_TOP + row as f32 * FORMATION_ROW_SPACING,
                );
                enemies.push(Enemy::new(next_id(), kind, pos, enemy_size));
            }
        }
        Self::new(enemies)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    /// Remove a member by identity
    pub fn remove(&mut self, id: u32) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.remove(idx))
    }

    /// Advance one frame: edge check, turn and descend, move, recompute speed.
    pub fn update(&mut self, screen: Vec2) -> FormationStep {
        let edge_hit = self.enemies.iter().any(|e| e.touches_side(screen.x));

        if edge_hit {
            self.direction = self.direction.flipped();
            for enemy in &mut self.enemies {
                enemy.rect.pos.y += FORMATION_DESCENT;
            }
            log::debug!(
                "Formation hit a wall, now heading {:?} ({} left)",
                self.direction,
                self.enemies.len()
            );
        }

        let ctx = StepContext::new(screen, self.direction);
        for enemy in &mut self.enemies {
            enemy.step(&ctx);
        }

        let speed = formation_speed(self.enemies.len());
        for enemy in &mut self.enemies {
            enemy.speed = speed;
        }

        FormationStep { edge_hit }
    }

    /// Some member has reached the bottom of the screen
    pub fn reached_floor(&self, height: f32) -> bool {
        self.enemies.iter().any(|e| e.rect.bottom() >= height)
    }

    /// Roll for enemy fire. On success a uniformly chosen member fires.
    pub fn try_fire(&self, difficulty: f64, rng: &mut impl Rng, shot_id: u32) -> Option<Shot> {
        if self.enemies.is_empty() {
            return None;
        }
        if rng.random::<f64>() >= enemy_fire_chance(difficulty) {
            return None;
        }
        let shooter = &self.enemies[rng.random_range(0..self.enemies.len())];
        log::debug!("Enemy {} fires", shooter.id);
        Some(shooter.fire(shot_id))
    }

    /// Remove every member overlapping `rect`. Returns how many were removed.
    pub fn destroy_overlapping(&mut self, rect: &Rect) -> usize {
        let before = self.enemies.len();
        self.enemies.retain(|e| !e.rect.intersects(rect));
        before - self.enemies.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn screen() -> Vec2 {
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    fn enemy_size() -> Vec2 {
        Vec2::new(ENEMY_WIDTH, ENEMY_HEIGHT)
    }

    fn standard() -> Formation {
        let mut id = 0;
        Formation::grid(enemy_size(), |_| EnemyKind::Basic, || {
            id += 1;
            id
        })
    }

    fn single(x: f32, y: f32) -> Formation {
        Formation::new(vec![Enemy::new(1, EnemyKind::Basic, Vec2::new(x, y), enemy_size())])
    }

    #[test]
    fn test_speed_formula() {
        assert_eq!(formation_speed(24), 1.0);
        assert_eq!(formation_speed(16), 2.0);
        assert_eq!(formation_speed(8), 3.0);
        assert_eq!(formation_speed(1), 3.875);
    }

    #[test]
    fn test_grid_layout() {
        let f = standard();
        assert_eq!(f.len(), 24);
        assert_eq!(f.enemies()[0].rect.pos, Vec2::new(100.0, 50.0));
        assert_eq!(f.enemies()[23].rect.pos, Vec2::new(590.0, 150.0));
        assert_eq!(f.direction(), Direction::Right);
    }

    #[test]
    fn test_update_without_edge_keeps_rows() {
        let mut f = standard();
        let step = f.update(screen());
        assert!(!step.edge_hit);
        assert_eq!(f.direction(), Direction::Right);
        // first frame moves at the variant's own speed
        assert_eq!(f.enemies()[0].rect.pos, Vec2::new(101.0, 50.0));
        assert_eq!(f.enemies()[0].speed, formation_speed(24));
    }

    #[test]
    fn test_edge_hit_descends_once_for_many_contacts() {
        let size = enemy_size();
        let mut f = Formation::new(vec![
            Enemy::new(1, EnemyKind::Basic, Vec2::new(770.0, 100.0), size),
            Enemy::new(2, EnemyKind::Basic, Vec2::new(775.0, 200.0), size),
            Enemy::new(3, EnemyKind::Basic, Vec2::new(400.0, 300.0), size),
        ]);
        let step = f.update(screen());
        assert!(step.edge_hit);
        assert_eq!(f.direction(), Direction::Left);
        let ys: Vec<f32> = f.enemies().iter().map(|e| e.rect.top()).collect();
        assert_eq!(ys, vec![120.0, 220.0, 320.0]);
        // moved left after turning
        assert_eq!(f.enemies()[2].rect.left(), 399.0);
    }

    #[test]
    fn test_left_wall_turns_right() {
        let mut f = single(0.0, 100.0).with_direction(Direction::Left);
        assert!(f.update(screen()).edge_hit);
        assert_eq!(f.direction(), Direction::Right);
        assert_eq!(f.enemies()[0].rect.top(), 120.0);
    }

    #[test]
    fn test_no_double_turn_after_overshoot() {
        let mut f = single(768.0, 100.0);
        f.enemies[0].speed = 3.875;
        assert!(!f.update(screen()).edge_hit);
        assert!(f.enemies()[0].rect.right() >= SCREEN_WIDTH);
        assert!(f.update(screen()).edge_hit);
        assert!(!f.update(screen()).edge_hit);
        assert_eq!(f.enemies()[0].rect.top(), 120.0);
    }

    #[test]
    fn test_remove_by_identity() {
        let mut f = standard();
        let removed = f.remove(5).expect("enemy 5 exists");
        assert_eq!(removed.id, 5);
        assert!(f.get(5).is_none());
        assert!(f.remove(5).is_none());
        assert_eq!(f.len(), 23);
    }

    #[test]
    fn test_reached_floor() {
        assert!(!single(100.0, SCREEN_HEIGHT - 21.0).reached_floor(SCREEN_HEIGHT));
        assert!(single(100.0, SCREEN_HEIGHT - 20.0).reached_floor(SCREEN_HEIGHT));
    }

    #[test]
    fn test_empty_formation_never_fires() {
        let f = Formation::default();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..1000 {
            assert!(f.try_fire(1000.0, &mut rng, 1).is_none());
        }
    }

    #[test]
    fn test_certain_fire_comes_from_a_member() {
        let f = standard();
        let mut rng = Pcg32::seed_from_u64(7);
        // chance >= 1 always fires
        let shot = f.try_fire(100.0, &mut rng, 99).expect("fires");
        assert_eq!(shot.id, 99);
        assert!(f.enemies().iter().any(|e| e.rect.mid_bottom() == shot.rect.center()));
    }

    #[test]
    fn test_fire_rate_tracks_difficulty() {
        let f = standard();
        let mut rng = Pcg32::seed_from_u64(42);
        let fired = (0..10_000)
            .filter(|_| f.try_fire(1.0, &mut rng, 1).is_some())
            .count();
        // expected ~100
        assert!((50..200).contains(&fired), "fired {fired}");
    }

    #[test]
    fn test_destroy_overlapping_counts_all() {
        let mut f = standard();
        // spans the first two columns of row 0
        let wide = Rect::new(Vec2::new(110.0, 55.0), Vec2::new(80.0, 5.0));
        assert_eq!(f.destroy_overlapping(&wide), 2);
        assert_eq!(f.len(), 22);
    }
}
