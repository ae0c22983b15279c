//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Seeded RNG only, carried in `SimContext`
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod combat;
pub mod entity;
pub mod formation;
pub mod rect;
pub mod state;
pub mod tick;

pub use combat::{CombatReport, resolve};
pub use entity::{Enemy, EnemyKind, Entity, EntityKind, Heading, Player, Shot, StepContext};
pub use formation::{Direction, Formation, FormationStep, enemy_fire_chance, formation_speed};
pub use rect::Rect;
pub use state::{FormationStyle, GameState, SessionLayout, SimContext};
pub use tick::{SessionOutcome, TickInput, tick};
