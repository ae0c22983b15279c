//! Screen flow
//!
//! Menu -> Playing -> (Won | Lost) -> Menu / Exit. `App::step` is the only
//! way between screens; it takes one frame of input and moves the machine.

use glam::Vec2;

use crate::error::Result;
use crate::platform::{AssetProvider, FrameInput, InputEvent, Key, Sprites};
use crate::settings::Settings;
use crate::sim::{FormationStyle, GameState, Rect, SessionLayout, SessionOutcome, SimContext, tick};

/// Number of entries in every option list
pub const OPTION_COUNT: usize = 2;

/// Pointer hit box of one option
pub const OPTION_BOX: Vec2 = Vec2::new(220.0, 40.0);

/// A vertical list of two selectable options
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptionList {
    pub labels: [&'static str; OPTION_COUNT],
    /// Center y of the first option
    pub first_y: f32,
    /// Distance between option centers
    pub spacing: f32,
}

pub const MAIN_MENU: OptionList = OptionList {
    labels: ["New Game", "Quit"],
    first_y: 300.0,
    spacing: 60.0,
};

pub const WIN_MENU: OptionList = OptionList {
    labels: ["Play Again", "Quit"],
    first_y: 330.0,
    spacing: 60.0,
};

impl OptionList {
    pub fn center(&self, index: usize, screen_width: f32) -> Vec2 {
        Vec2::new(screen_width / 2.0, self.first_y + index as f32 * self.spacing)
    }

    /// Pointer hit box of an option
    pub fn rect(&self, index: usize, screen_width: f32) -> Rect {
        Rect::from_center(self.center(index, screen_width), OPTION_BOX)
    }

    /// Option under the pointer, if any
    pub fn hit(&self, pos: Vec2, screen_width: f32) -> Option<usize> {
        (0..OPTION_COUNT).find(|&i| self.rect(i, screen_width).contains(pos))
    }
}

/// Selected index of a two-option list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuCursor {
    selected: usize,
}

impl MenuCursor {
    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn up(&mut self) {
        self.selected = (self.selected + OPTION_COUNT - 1) % OPTION_COUNT;
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % OPTION_COUNT;
    }

    pub fn select(&mut self, index: usize) {
        if index < OPTION_COUNT {
            self.selected = index;
        }
    }
}

/// What an option list resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Play,
    Quit,
}

impl Choice {
    fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Choice::Play),
            1 => Some(Choice::Quit),
            _ => None,
        }
    }
}

/// A running play-through
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    /// Present for sprite-style sessions
    pub sprites: Option<Sprites>,
}

/// Current screen
#[derive(Debug, Clone)]
pub enum Screen {
    Menu { cursor: MenuCursor },
    Playing(Box<Session>),
    Won { score: u64, cursor: MenuCursor },
    Lost { score: u64 },
    Exit,
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu { .. } => "menu",
            Screen::Playing(_) => "playing",
            Screen::Won { .. } => "won",
            Screen::Lost { .. } => "lost",
            Screen::Exit => "exit",
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Screen::Exit)
    }
}

/// Where the machine goes after a frame
enum Next {
    Stay,
    Menu,
    Play,
    Won(u64),
    Lost(u64),
    Exit,
}

/// The whole game: screen machine, simulation context, asset source
pub struct App {
    screen: Screen,
    ctx: SimContext,
    style: FormationStyle,
    assets: Box<dyn AssetProvider>,
    sessions_started: u64,
}

impl App {
    pub fn new(settings: &Settings, assets: Box<dyn AssetProvider>) -> Self {
        Self::with_context(settings.sim_context(), settings.formation_style, assets)
    }

    pub fn with_context(ctx: SimContext, style: FormationStyle, assets: Box<dyn AssetProvider>) -> Self {
        log::info!("Starting at menu (seed {})", ctx.seed());
        Self {
            screen: Screen::Menu {
                cursor: MenuCursor::default(),
            },
            ctx,
            style,
            assets,
            sessions_started: 0,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn context(&self) -> &SimContext {
        &self.ctx
    }

    pub fn sessions_started(&self) -> u64 {
        self.sessions_started
    }

    /// Live session, when playing
    pub fn session(&self) -> Option<&Session> {
        match &self.screen {
            Screen::Playing(session) => Some(session.as_ref()),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        match &mut self.screen {
            Screen::Playing(session) => Some(session.as_mut()),
            _ => None,
        }
    }

    /// Run one frame of the current screen.
    ///
    /// Fails only when a new session cannot load its sprites.
    pub fn step(&mut self, input: &FrameInput) -> Result<()> {
        let width = self.ctx.screen.x;
        let next = match &mut self.screen {
            Screen::Menu { cursor } => match select_option(cursor, &MAIN_MENU, input, width) {
                Selection::Quit | Selection::Chosen(Choice::Quit) => Next::Exit,
                Selection::Chosen(Choice::Play) => Next::Play,
                Selection::None => Next::Stay,
            },
            Screen::Playing(session) => match tick(&mut session.state, &input.tick_input(), &mut self.ctx) {
                None => Next::Stay,
                Some(SessionOutcome::Quit) => Next::Exit,
                Some(SessionOutcome::Win(score)) => Next::Won(score),
                Some(SessionOutcome::Lose(score)) => Next::Lost(score),
            },
            Screen::Won { cursor, .. } => match select_option(cursor, &WIN_MENU, input, width) {
                Selection::Quit | Selection::Chosen(Choice::Quit) => Next::Exit,
                Selection::Chosen(Choice::Play) => Next::Play,
                Selection::None => Next::Stay,
            },
            Screen::Lost { .. } => {
                let mut next = Next::Stay;
                for event in &input.events {
                    match event {
                        InputEvent::Quit => {
                            next = Next::Exit;
                            break;
                        }
                        InputEvent::KeyDown(Key::Confirm) => {
                            next = Next::Menu;
                            break;
                        }
                        _ => {}
                    }
                }
                next
            }
            Screen::Exit => Next::Stay,
        };

        let screen = match next {
            Next::Stay => return Ok(()),
            Next::Menu => Screen::Menu {
                cursor: MenuCursor::default(),
            },
            Next::Play => Screen::Playing(Box::new(self.start_session()?)),
            Next::Won(score) => Screen::Won {
                score,
                cursor: MenuCursor::default(),
            },
            Next::Lost(score) => Screen::Lost { score },
            Next::Exit => Screen::Exit,
        };
        log::info!("Screen {} -> {}", self.screen.name(), screen.name());
        self.screen = screen;
        Ok(())
    }

    /// Build a fresh session, loading sprites when the style needs them
    fn start_session(&mut self) -> Result<Session> {
        let (layout, sprites) = match self.style {
            FormationStyle::Blocks => (SessionLayout::default(), None),
            FormationStyle::Sprites => {
                let sprites = Sprites::load(self.assets.as_mut())?;
                (SessionLayout::sprites(sprites.player.size), Some(sprites))
            }
        };
        self.sessions_started += 1;
        log::info!("Session {} started ({:?})", self.sessions_started, self.style);
        Ok(Session {
            state: GameState::new(self.ctx.screen, &layout),
            sprites,
        })
    }
}

/// Result of running an option list for one frame
enum Selection {
    None,
    Quit,
    Chosen(Choice),
}

/// Apply one frame of events and pointer hover to an option list.
///
/// Keyboard and pointer share the cursor: a click first selects the option
/// under it, then confirms the selected index.
fn select_option(cursor: &mut MenuCursor, options: &OptionList, input: &FrameInput, width: f32) -> Selection {
    for event in &input.events {
        let confirmed = match event {
            InputEvent::Quit => return Selection::Quit,
            InputEvent::KeyDown(Key::Up) => {
                cursor.up();
                None
            }
            InputEvent::KeyDown(Key::Down) => {
                cursor.down();
                None
            }
            InputEvent::KeyDown(Key::Confirm) => Some(cursor.selected()),
            InputEvent::PointerClick(pos) => options.hit(*pos, width).map(|index| {
                cursor.select(index);
                cursor.selected()
            }),
            InputEvent::KeyDown(_) => None,
        };

        if let Some(index) = confirmed {
            match Choice::from_index(index) {
                Some(choice) => return Selection::Chosen(choice),
                None => log::warn!("Ignoring confirm of unmapped option {}", index),
            }
        }
    }

    if let Some(index) = input.pointer.and_then(|pos| options.hit(pos, width)) {
        cursor.select(index);
    }

    Selection::None
}
