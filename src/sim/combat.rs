//! Combat resolution
//!
//! Player shots against the formation, enemy shots against the player.
//! Score and lives are updated here; deciding the session outcome is left to
//! the tick.

use super::entity::{Player, Shot};
use super::formation::Formation;
use super::state::GameState;

/// Result of one frame of combat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CombatReport {
    /// Enemies destroyed by player shots this frame
    pub enemies_destroyed: usize,
    /// At least one enemy shot struck the player
    pub player_hit: bool,
}

/// Resolve every player shot against the formation.
///
/// A shot that overlaps anything is consumed and takes every enemy it
/// overlaps with it. Shots are processed in spawn order, so a later shot
/// cannot hit an enemy an earlier shot already destroyed.
pub fn resolve_player_shots(shots: &mut Vec<Shot>, formation: &mut Formation) -> usize {
    let mut destroyed = 0;
    shots.retain(|shot| {
        let hits = formation.destroy_overlapping(&shot.rect);
        destroyed += hits;
        hits == 0
    });
    destroyed
}

/// Remove every enemy shot overlapping the player. Returns whether any did.
pub fn resolve_enemy_shots(shots: &mut Vec<Shot>, player: &Player) -> bool {
    let before = shots.len();
    shots.retain(|shot| !shot.rect.intersects(&player.rect));
    shots.len() != before
}

/// Run both passes and apply score and life changes.
///
/// Several enemy shots landing in the same frame cost a single life.
pub fn resolve(state: &mut GameState) -> CombatReport {
    let enemies_destroyed = resolve_player_shots(&mut state.player_shots, &mut state.formation);
    state.score += enemies_destroyed as u64;

    let player_hit = resolve_enemy_shots(&mut state.enemy_shots, &state.player);
    if player_hit {
        state.player.hit();
        log::debug!("Player hit, {} lives left", state.player.lives);
    }

    CombatReport {
        enemies_destroyed,
        player_hit,
    }
}
