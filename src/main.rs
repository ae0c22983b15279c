//! Invaders entry point
//!
//! Natively this runs a headless demo: the autopilot plays through the menus
//! and sessions, nothing is drawn, and the run ends after `demo_frames`.
//! Settings come from the path in the first argument or `INVADERS_SETTINGS`.

use std::path::PathBuf;
use std::process::ExitCode;

use invaders::platform::{self, DemoInput, DirAssets, FixedRateClock, RecordingRenderer};
use invaders::settings::SETTINGS_ENV;
use invaders::{App, Settings};

fn settings_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .or_else(|| std::env::var_os(SETTINGS_ENV))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("invaders.json"))
}

fn run() -> invaders::Result<()> {
    let settings = Settings::load_or_default(&settings_path())?;
    log::info!(
        "Screen {}x{} at {} fps, {:?} formation",
        settings.screen_width,
        settings.screen_height,
        settings.frame_rate,
        settings.formation_style
    );

    let assets = DirAssets::new(settings.asset_dir.clone());
    let mut app = App::new(&settings, Box::new(assets));
    let mut input = DemoInput::new(settings.demo_frames);
    let mut renderer = RecordingRenderer::new();
    let mut clock = FixedRateClock::new();

    let frames = platform::run(&mut app, &mut input, &mut renderer, &mut clock)?;
    log::info!(
        "Demo finished: {} frames, {} sessions",
        frames,
        app.sessions_started()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Invaders (headless demo) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("invaders: {e}");
            ExitCode::FAILURE
        }
    }
}
