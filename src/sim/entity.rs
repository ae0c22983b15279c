//! Entity model
//!
//! Player, shots and enemies are plain rectangles with a behavior tag. All of
//! them share one capability trait so the frame step can move and prune them
//! uniformly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::formation::Direction;
use super::rect::Rect;
use crate::consts::*;

/// Behavior tag for every entity in a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    PlayerShot,
    EnemyShot,
    EnemyBasic,
    EnemyFast,
    EnemySlow,
}

/// Read-only inputs an entity needs for its per-frame update
#[derive(Debug, Clone, Copy)]
pub struct StepContext {
    /// Screen size (width, height)
    pub screen: Vec2,
    /// Horizontal input: -1 left, 0 idle, +1 right
    pub axis: f32,
    /// Shared formation direction (written only by the formation controller)
    pub direction: Direction,
}

impl StepContext {
    pub fn new(screen: Vec2, direction: Direction) -> Self {
        Self {
            screen,
            axis: 0.0,
            direction,
        }
    }

    pub fn with_axis(mut self, axis: f32) -> Self {
        self.axis = axis;
        self
    }
}

/// Common capability of every simulated object
pub trait Entity {
    fn kind(&self) -> EntityKind;

    fn bounding_box(&self) -> Rect;

    /// Advance one frame. Returns `false` once the entity should be removed.
    fn step(&mut self, ctx: &StepContext) -> bool;
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
    pub lives: u8,
}

impl Player {
    /// Spawn centered horizontally, just above the bottom edge
    pub fn new(screen: Vec2, size: Vec2) -> Self {
        let center = Vec2::new(screen.x / 2.0, screen.y - PLAYER_FLOOR_OFFSET);
        Self {
            rect: Rect::from_center(center, size),
            speed: PLAYER_SPEED,
            lives: PLAYER_LIVES,
        }
    }

    /// Build a shot leaving the top-center of the ship
    pub fn fire(&self, id: u32) -> Shot {
        Shot::new(id, Heading::Up, self.rect.mid_top())
    }

    /// Take one hit. Returns true when no lives remain.
    pub fn hit(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn is_dead(&self) -> bool {
        self.lives == 0
    }
}

impl Entity for Player {
    fn kind(&self) -> EntityKind {
        EntityKind::Player
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn step(&mut self, ctx: &StepContext) -> bool {
        self.rect.pos.x += ctx.axis.clamp(-1.0, 1.0) * self.speed;
        self.rect.clamp_x(ctx.screen.x);
        true
    }
}

/// Vertical travel direction of a shot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    /// Fired by the player
    Up,
    /// Fired by an enemy
    Down,
}

/// A projectile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shot {
    pub id: u32,
    pub rect: Rect,
    pub heading: Heading,
    pub speed: f32,
}

impl Shot {
    /// Shot centered on `origin`
    pub fn new(id: u32, heading: Heading, origin: Vec2) -> Self {
        Self {
            id,
            rect: Rect::from_center(origin, Vec2::new(SHOT_WIDTH, SHOT_HEIGHT)),
            heading,
            speed: SHOT_SPEED,
        }
    }
}

impl Entity for Shot {
    fn kind(&self) -> EntityKind {
        match self.heading {
            Heading::Up => EntityKind::PlayerShot,
            Heading::Down => EntityKind::EnemyShot,
        }
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn step(&mut self, ctx: &StepContext) -> bool {
        match self.heading {
            Heading::Up => {
                self.rect.pos.y -= self.speed;
                self.rect.bottom() >= 0.0
            }
            Heading::Down => {
                self.rect.pos.y += self.speed;
                self.rect.top() <= ctx.screen.y
            }
        }
    }
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Basic,
    Fast,
    Slow,
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 3] = [EnemyKind::Basic, EnemyKind::Fast, EnemyKind::Slow];

    /// Speed before the first formation-wide recompute
    pub fn base_speed(&self) -> f32 {
        match self {
            EnemyKind::Basic => 1.0,
            EnemyKind::Fast => 1.5,
            EnemyKind::Slow => 0.7,
        }
    }

    pub fn entity_kind(&self) -> EntityKind {
        match self {
            EnemyKind::Basic => EntityKind::EnemyBasic,
            EnemyKind::Fast => EntityKind::EnemyFast,
            EnemyKind::Slow => EntityKind::EnemySlow,
        }
    }

    /// Image name used by sprite-style formations
    pub fn sprite_name(&self) -> &'static str {
        match self {
            EnemyKind::Basic => "enemy_basic.png",
            EnemyKind::Fast => "enemy_fast.png",
            EnemyKind::Slow => "enemy_slow.png",
        }
    }
}

/// A formation member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    pub kind: EnemyKind,
    pub rect: Rect,
    pub speed: f32,
}

impl Enemy {
    pub fn new(id: u32, kind: EnemyKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            id,
            kind,
            rect: Rect::new(pos, size),
            speed: kind.base_speed(),
        }
    }

    /// Build a shot leaving the bottom-center of the enemy
    pub fn fire(&self, id: u32) -> Shot {
        Shot::new(id, Heading::Down, self.rect.mid_bottom())
    }

    /// Touching or crossing either side of the screen
    pub fn touches_side(&self, width: f32) -> bool {
        self.rect.right() >= width || self.rect.left() <= 0.0
    }
}

impl Entity for Enemy {
    fn kind(&self) -> EntityKind {
        self.kind.entity_kind()
    }

    fn bounding_box(&self) -> Rect {
        self.rect
    }

    fn step(&mut self, ctx: &StepContext) -> bool {
        self.rect.pos.x += self.speed * ctx.direction.sign();
        true
    }
}
