//! Outer frame loop
//!
//! Owns the only blocking call: one frame is input -> step -> draw -> wait.

use super::clock::Clock;
use super::input::InputSource;
use super::render::Renderer;
use crate::error::Result;
use crate::screen::App;
use crate::view;

/// Run until the app reaches `Exit`. Returns the number of frames run.
///
/// An error while starting a session aborts the loop.
pub fn run(
    app: &mut App,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    clock: &mut impl Clock,
) -> Result<u64> {
    let mut frames = 0;
    while !app.screen().is_exit() {
        let frame = input.frame();
        app.step(&frame)?;
        frames += 1;
        if app.screen().is_exit() {
            break;
        }
        view::draw(app, renderer);
        clock.wait_for_next_frame(app.context().frame_rate);
    }
    log::info!("Exited after {} frames", frames);
    Ok(frames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{FrameInput, Key, ManualClock, RecordingRenderer, ScriptedInput, StaticAssets};
    use crate::sim::{FormationStyle, SimContext};
    use glam::Vec2;

    fn app(style: FormationStyle, assets: StaticAssets) -> App {
        App::with_context(SimContext::new(Vec2::new(800.0, 600.0), 60, 3), style, Box::new(assets))
    }

    #[test]
    fn test_run_until_quit() {
        let mut app = app(FormationStyle::Blocks, StaticAssets::new());
        let mut input = ScriptedInput::new([
            FrameInput::default(),
            FrameInput::key(Key::Confirm),
            FrameInput::default().holding(Key::Left),
            FrameInput::quit(),
        ]);
        let mut renderer = RecordingRenderer::new();
        let mut clock = ManualClock::default();

        let frames = run(&mut app, &mut input, &mut renderer, &mut clock).expect("runs");
        assert_eq!(frames, 4);
        // the quitting frame is neither drawn nor waited on
        assert_eq!(renderer.frames_presented, 3);
        assert_eq!(clock.frames, 3);
    }

    #[test]
    fn test_asset_failure_aborts() {
        let mut app = app(FormationStyle::Sprites, StaticAssets::new());
        let mut input = ScriptedInput::new([FrameInput::key(Key::Confirm)]);
        let result = run(&mut app, &mut input, &mut RecordingRenderer::new(), &mut ManualClock::default());
        assert!(result.is_err());
    }
}
