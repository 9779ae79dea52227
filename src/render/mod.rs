//! Drawing-backend interface.
//!
//! Render code talks to a [`Canvas`]: a small immediate-mode API in logical
//! canvas coordinates with a fill/stroke pen and a transform stack. The
//! terminal backend lives in [`crate::display`]; tests plug in a recorder.

pub mod scene;

pub use scene::draw_frame;

use crate::entities::Rgb;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

pub trait Canvas {
    /// Clear everything to one colour.
    fn background(&mut self, color: Rgb);

    /// Save the current transform and pen.
    fn push(&mut self);
    /// Restore what the matching `push` saved.
    fn pop(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    /// Rotate subsequent drawing by `radians`, clockwise on screen.
    fn rotate(&mut self, radians: f32);

    /// Interior colour for shapes, and the colour of text.
    fn fill(&mut self, color: Rgb, alpha: u8);
    fn no_fill(&mut self);
    /// Outline colour for shapes.
    fn stroke(&mut self, color: Rgb);
    fn no_stroke(&mut self);

    fn triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32));
    /// Axis-aligned in local space; `radius` rounds the corners.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, radius: f32);
    /// Centred on (`cx`, `cy`).
    fn ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32);
    /// `size` is a nominal point size; backends may ignore it.
    fn text(&mut self, text: &str, x: f32, y: f32, size: f32, align: TextAlign);
}
