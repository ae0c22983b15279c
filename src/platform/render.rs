//! Renderer collaborator
//!
//! Pure output: a renderer never feeds anything back into the core.

use glam::Vec2;

use super::assets::ImageHandle;

/// RGB color
pub type Color = [u8; 3];

/// Horizontal anchoring of a text position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    /// Position is the top-left corner of the text
    Left,
    /// Position is the top-center of the text
    Center,
}

pub trait Renderer {
    /// Filled rectangle with its top-left corner at `pos`
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color);

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, color: Color);

    /// Image with its top-left corner at `pos`. Renderers without image
    /// support draw its bounds.
    fn draw_image(&mut self, image: &ImageHandle, pos: Vec2) {
        self.draw_rect(pos, image.size, [255, 255, 255]);
    }

    /// Show the finished frame
    fn present_frame(&mut self);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Rect { pos: Vec2, size: Vec2, color: Color },
    Text { text: String, pos: Vec2, align: TextAlign, color: Color },
    Image { name: String, pos: Vec2, size: Vec2 },
}

/// Records draw calls instead of drawing. The last presented frame is kept.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    pub frames_presented: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// Text strings of the last presented frame
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn draw_rect(&mut self, pos: Vec2, size: Vec2, color: Color) {
        self.pending.push(DrawCommand::Rect { pos, size, color });
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, align: TextAlign, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            pos,
            align,
            color,
        });
    }

    fn draw_image(&mut self, image: &ImageHandle, pos: Vec2) {
        self.pending.push(DrawCommand::Image {
            name: image.name.clone(),
            pos,
            size: image.size,
        });
    }

    fn present_frame(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
