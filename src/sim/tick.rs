//! Fixed frame simulation step
//!
//! One call to `tick` runs a whole frame: input, movement, formation,
//! firing, combat, then terminal checks. Nothing is drawn here.

use super::combat;
use super::entity::{Entity, StepContext};
use super::state::{GameState, SimContext};
use crate::consts::*;

/// Input commands for a single frame (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Window close / quit signal
    pub quit: bool,
    /// Fire key-down events received this frame (one shot each)
    pub fire_presses: u32,
    /// Left movement key held
    pub left: bool,
    /// Right movement key held
    pub right: bool,
    /// Autopilot - a simple built-in controller plays the game
    pub autopilot: bool,
}

impl TickInput {
    /// Horizontal axis from the held keys (both held cancel out)
    pub fn axis(&self) -> f32 {
        let mut axis = 0.0;
        if self.left {
            axis -= 1.0;
        }
        if self.right {
            axis += 1.0;
        }
        axis
    }
}

/// Terminal result of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Quit signal received mid-session
    Quit,
    /// Formation destroyed
    Win(u64),
    /// Out of lives or the formation reached the floor
    Lose(u64),
}

/// Advance the session by one frame.
///
/// Returns `Some` when the session ended this frame; the state must not be
/// ticked again afterwards.
pub fn tick(state: &mut GameState, input: &TickInput, ctx: &mut SimContext) -> Option<SessionOutcome> {
    if input.quit {
        return Some(SessionOutcome::Quit);
    }

    let input = if input.autopilot {
        autopilot(state)
    } else {
        input.clone()
    };

    // Discrete fire events
    for _ in 0..input.fire_presses {
        let id = state.next_entity_id();
        let shot = state.player.fire(id);
        state.player_shots.push(shot);
    }

    state.frame += 1;
    state.difficulty += DIFFICULTY_STEP;

    let step_ctx = StepContext::new(ctx.screen, state.formation.direction());

    // Held-key movement (clamped to the screen)
    state.player.step(&step_ctx.with_axis(input.axis()));

    // Shots move and drop off their own edge
    state.player_shots.retain_mut(|shot| shot.step(&step_ctx));
    state.enemy_shots.retain_mut(|shot| shot.step(&step_ctx));

    state.formation.update(ctx.screen);

    let shot_id = state.next_entity_id();
    if let Some(shot) = state.formation.try_fire(state.difficulty, ctx.rng(), shot_id) {
        state.enemy_shots.push(shot);
    }

    combat::resolve(state);

    if state.player.is_dead() {
        log::info!("Out of lives at frame {} (score {})", state.frame, state.score);
        return Some(SessionOutcome::Lose(state.score));
    }

    if state.formation.reached_floor(ctx.screen.y) {
        log::info!("Formation reached the floor at frame {} (score {})", state.frame, state.score);
        return Some(SessionOutcome::Lose(state.score));
    }

    if state.formation.is_empty() {
        log::info!("Formation cleared at frame {} (score {})", state.frame, state.score);
        return Some(SessionOutcome::Win(state.score));
    }

    None
}

/// Built-in controller: chase the lowest enemy and fire when lined up with
/// no own shot in flight.
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput::default();

    let Some(target) = state
        .formation
        .enemies()
        .iter()
        .max_by(|a, b| a.rect.bottom().total_cmp(&b.rect.bottom()))
    else {
        return input;
    };

    // Lead the target by its drift over the shot's flight time
    let flight = (state.player.rect.top() - target.rect.bottom()).max(0.0) / SHOT_SPEED;
    let lead = target.speed * state.formation.direction().sign() * flight;
    let aim = target.rect.center().x + lead;
    let ship = state.player.rect.center().x;
    let tolerance = state.player.speed;

    if aim < ship - tolerance {
        input.left = true;
    } else if aim > ship + tolerance {
        input.right = true;
    }

    let half_width = target.rect.size.x / 2.0;
    if state.player_shots.is_empty() && (aim - ship).abs() < half_width {
        input.fire_presses = 1;
    }

    input
}
