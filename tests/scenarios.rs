//! End-to-end scenarios through the public API

use glam::Vec2;

use invaders::platform::{self, DemoInput, FrameInput, Key, ManualClock, RecordingRenderer, StaticAssets};
use invaders::sim::{
    Enemy, EnemyKind, Formation, GameState, Heading, SessionLayout, SessionOutcome, Shot, SimContext, TickInput, tick,
};
use invaders::{App, FormationStyle, Screen};

const WIDTH: f32 = 800.0;
const HEIGHT: f32 = 600.0;

fn context(seed: u64) -> SimContext {
    SimContext::new(Vec2::new(WIDTH, HEIGHT), 60, seed)
}

fn blocks_app(seed: u64) -> App {
    App::with_context(context(seed), FormationStyle::Blocks, Box::new(StaticAssets::new()))
}

#[test]
fn clearing_the_formation_shot_by_shot_wins_with_full_score() {
    let mut ctx = context(2024);
    let mut state = GameState::new(ctx.screen, &SessionLayout::default());
    let fire = TickInput {
        fire_presses: 1,
        ..Default::default()
    };

    let mut outcome = None;
    for _ in 0..24 {
        // park the ship right under the first live enemy so the shot can't miss
        let target = state.formation.enemies()[0].rect;
        let width = state.player.rect.size.x;
        state.player.rect.pos = Vec2::new(target.center().x - width / 2.0, target.bottom() + 5.0);

        let score = state.score;
        outcome = tick(&mut state, &fire, &mut ctx);
        assert_eq!(state.score, score + 1);

        // no return fire reaches the player in this scenario
        state.enemy_shots.clear();
        state.player.lives = 3;

        if outcome.is_some() {
            break;
        }
    }

    assert_eq!(outcome, Some(SessionOutcome::Win(24)));
    assert!(state.formation.is_empty());
}

#[test]
fn last_life_lost_to_a_single_enemy_shot() {
    let mut ctx = context(8);
    let mut state = GameState::new(ctx.screen, &SessionLayout::default());
    state.player.lives = 1;
    state.score = 11;
    let above_ship = state.player.rect.center() - Vec2::new(0.0, 8.0);
    state.enemy_shots.push(Shot::new(1000, Heading::Down, above_ship));

    assert_eq!(tick(&mut state, &TickInput::default(), &mut ctx), Some(SessionOutcome::Lose(11)));
    assert_eq!(state.player.lives, 0);
}

#[test]
fn one_row_reaching_the_floor_loses_with_lives_left() {
    let mut ctx = context(9);
    let mut state = GameState::new(ctx.screen, &SessionLayout::default());
    let size = Vec2::new(30.0, 20.0);
    let y = HEIGHT - 40.0;
    let row = (0..5)
        .map(|i| Enemy::new(100 + i, EnemyKind::Basic, Vec2::new(490.0 + i as f32 * 70.0, y), size))
        .collect();
    state.formation = Formation::new(row);

    // the rightmost enemy sits on the wall, so this frame turns and descends
    let outcome = tick(&mut state, &TickInput::default(), &mut ctx);
    assert_eq!(outcome, Some(SessionOutcome::Lose(0)));
    assert_eq!(state.player.lives, 3);
    assert_eq!(state.formation.enemies()[0].rect.bottom(), HEIGHT);
}

#[test]
fn replay_after_losing_starts_a_fresh_session() {
    let mut app = blocks_app(31);
    app.step(&FrameInput::key(Key::Confirm)).expect("menu -> play");

    // score a little, then get shot on the last life
    {
        let session = app.session_mut().expect("playing");
        session.state.score = 6;
        session.state.player.lives = 1;
        session.state.formation = Formation::new(session.state.formation.enemies()[6..].to_vec());
        let above_ship = session.state.player.rect.center() - Vec2::new(0.0, 8.0);
        session.state.enemy_shots.push(Shot::new(1000, Heading::Down, above_ship));
    }
    app.step(&FrameInput::default()).expect("play");
    assert!(matches!(app.screen(), Screen::Lost { score: 6 }));

    app.step(&FrameInput::key(Key::Confirm)).expect("lost -> menu");
    assert!(matches!(app.screen(), Screen::Menu { .. }));

    app.step(&FrameInput::key(Key::Confirm)).expect("menu -> play");
    let session = app.session().expect("playing again");
    assert_eq!(session.state.score, 0);
    assert_eq!(session.state.player.lives, 3);
    assert_eq!(session.state.formation.len(), 24);
    assert_eq!(session.state.frame, 0);
}

#[test]
fn demo_runs_are_reproducible_from_the_seed() {
    let run = || {
        let mut app = blocks_app(4242);
        let mut input = DemoInput::new(5_000);
        let mut renderer = RecordingRenderer::new();
        let mut clock = ManualClock::default();
        let frames = platform::run(&mut app, &mut input, &mut renderer, &mut clock).expect("demo runs");
        (frames, app.sessions_started(), renderer.frames_presented)
    };

    let first = run();
    assert_eq!(first, run());
    assert_eq!(first.0, 5_001);
    assert!(first.1 >= 1);
}

#[test]
fn sprite_demo_plays_with_asset_sizes() {
    let assets = StaticAssets::sprite_set(Vec2::new(52.0, 32.0), Vec2::new(128.0, 128.0));
    let mut app = App::with_context(context(77), FormationStyle::Sprites, Box::new(assets));
    let mut input = DemoInput::new(600);
    let frames = platform::run(&mut app, &mut input, &mut RecordingRenderer::new(), &mut ManualClock::default())
        .expect("sprites load");
    assert_eq!(frames, 601);
    assert!(app.sessions_started() >= 1);
}
