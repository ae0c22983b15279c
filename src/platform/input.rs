//! Input collaborators
//!
//! An `InputSource` is queried once per frame by the driver and the answers
//! are frozen into a `FrameInput`, which is all the core ever sees.

use std::collections::{HashSet, VecDeque};

use glam::Vec2;

use crate::sim::TickInput;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    /// Space
    Fire,
    /// Enter
    Confirm,
}

/// Discrete event delivered once
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    /// Primary button press at a screen position
    PointerClick(Vec2),
}

/// Everything the core needs to know about input for one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Discrete events in arrival order
    pub events: Vec<InputEvent>,
    /// Keys currently held down
    pub held: HashSet<Key>,
    /// Pointer position, if a pointer exists
    pub pointer: Option<Vec2>,
    /// Let the built-in controller play
    pub autopilot: bool,
}

impl FrameInput {
    pub fn with_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Single key press
    pub fn key(key: Key) -> Self {
        Self::with_events([InputEvent::KeyDown(key)])
    }

    pub fn quit() -> Self {
        Self::with_events([InputEvent::Quit])
    }

    pub fn holding(mut self, key: Key) -> Self {
        self.held.insert(key);
        self
    }

    pub fn pointing_at(mut self, pos: Vec2) -> Self {
        self.pointer = Some(pos);
        self
    }

    pub fn has_quit(&self) -> bool {
        self.events.iter().any(|e| matches!(e, InputEvent::Quit))
    }

    /// Simulation input for a play frame
    pub fn tick_input(&self) -> TickInput {
        let fire_presses = self
            .events
            .iter()
            .filter(|e| matches!(e, InputEvent::KeyDown(Key::Fire)))
            .count() as u32;
        TickInput {
            quit: self.has_quit(),
            fire_presses,
            left: self.held.contains(&Key::Left),
            right: self.held.contains(&Key::Right),
            autopilot: self.autopilot,
        }
    }
}

/// Source of player input.
///
/// Device failures stay inside the implementation: a source that cannot read
/// its device reports no events for that frame.
pub trait InputSource {
    /// Drain discrete events since the last call
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn held_keys(&self) -> HashSet<Key>;

    fn pointer_position(&self) -> Option<Vec2>;

    /// Whether the built-in controller should play
    fn autopilot(&self) -> bool {
        false
    }

    /// Query the source once and freeze the answers for this frame
    fn frame(&mut self) -> FrameInput {
        let events = self.poll_events();
        FrameInput {
            events,
            held: self.held_keys(),
            pointer: self.pointer_position(),
            autopilot: self.autopilot(),
        }
    }
}

/// Replays a fixed list of frames, then asks to quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
    current: FrameInput,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            current: FrameInput::default(),
        }
    }

    pub fn push(&mut self, frame: FrameInput) {
        self.frames.push_back(frame);
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.current = self.frames.pop_front().unwrap_or_else(FrameInput::quit);
        self.current.events.clone()
    }

    fn held_keys(&self) -> HashSet<Key> {
        self.current.held.clone()
    }

    fn pointer_position(&self) -> Option<Vec2> {
        self.current.pointer
    }

    fn autopilot(&self) -> bool {
        self.current.autopilot
    }
}

/// Headless demo input: presses Enter periodically to get through the
/// menus, lets the autopilot play, and quits after a fixed number of frames.
#[derive(Debug, Clone)]
pub struct DemoInput {
    frame: u64,
    max_frames: u64,
    confirm_every: u64,
}

impl DemoInput {
    pub fn new(max_frames: u64) -> Self {
        Self {
            frame: 0,
            max_frames,
            confirm_every: 30,
        }
    }

    pub fn frames_polled(&self) -> u64 {
        self.frame
    }
}

impl InputSource for DemoInput {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        if self.frame > self.max_frames {
            return vec![InputEvent::Quit];
        }
        if self.frame % self.confirm_every == 0 {
            vec![InputEvent::KeyDown(Key::Confirm)]
        } else {
            Vec::new()
        }
    }

    fn held_keys(&self) -> HashSet<Key> {
        HashSet::new()
    }

    fn pointer_position(&self) -> Option<Vec2> {
        None
    }

    fn autopilot(&self) -> bool {
        true
    }
}
