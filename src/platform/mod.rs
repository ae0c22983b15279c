//! Platform abstraction layer
//!
//! The simulation never talks to a device. Everything outside the core is
//! reached through four narrow traits:
//! - `InputSource`: discrete events, held keys, pointer position
//! - `Renderer`: rectangles, text, images, frame presentation
//! - `Clock`: the single blocking wait per frame
//! - `AssetProvider`: image lookup at session start
//!
//! Headless implementations of each live alongside the traits, and `driver`
//! owns the outer frame loop.

pub mod assets;
pub mod clock;
pub mod driver;
pub mod input;
pub mod render;

pub use assets::{AssetProvider, DirAssets, ImageHandle, Sprites, StaticAssets};
pub use clock::{Clock, FixedRateClock, ManualClock};
pub use driver::run;
pub use input::{DemoInput, FrameInput, InputEvent, InputSource, Key, ScriptedInput};
pub use render::{Color, DrawCommand, RecordingRenderer, Renderer, TextAlign};
