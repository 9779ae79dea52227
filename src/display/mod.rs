//! Terminal drawing backend. All terminal I/O lives here.
//!
//! [`TerminalCanvas`] implements [`Canvas`] by rasterising into a pixel
//! buffer two pixels tall per cell, then [`TerminalCanvas::present`] prints
//! every cell as an upper-half block (`▀`) with the top pixel as foreground
//! and the bottom pixel as background. Text is laid over the cells.

pub mod raster;

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    QueueableCommand,
};

use glam::{Affine2, Vec2};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::entities::Rgb;
use crate::render::{Canvas, TextAlign};
use raster::PixelBuffer;

/// Vertices used to approximate an ellipse.
const ELLIPSE_SEGMENTS: usize = 24;

#[derive(Clone, Copy, Debug, Default)]
struct Pen {
    fill: Option<(Rgb, u8)>,
    stroke: Option<Rgb>,
}

pub struct TerminalCanvas {
    cols: u16,
    rows: u16,
    pixels: PixelBuffer,
    glyphs: Vec<Option<(char, Rgb)>>,
    transform: Affine2,
    pen: Pen,
    stack: Vec<(Affine2, Pen)>,
}

impl TerminalCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            pixels: PixelBuffer::new(cols as usize, rows as usize * 2),
            glyphs: vec![None; cols as usize * rows as usize],
            transform: Affine2::IDENTITY,
            pen: Pen::default(),
            stack: Vec::new(),
        }
    }

    /// Follow the terminal size; a no-op when nothing changed.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.cols = cols;
        self.rows = rows;
        self.pixels.resize(cols as usize, rows as usize * 2);
        self.glyphs = vec![None; cols as usize * rows as usize];
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Character drawn at a cell, if any.
    pub fn glyph(&self, col: u16, row: u16) -> Option<char> {
        self.glyphs
            .get(row as usize * self.cols as usize + col as usize)
            .copied()
            .flatten()
            .map(|(ch, _)| ch)
    }

    /// Logical canvas coordinates → pixel coordinates, through the transform.
    fn to_pixel(&self, local: Vec2) -> Vec2 {
        let scale = Vec2::new(
            self.cols as f32 / CANVAS_WIDTH,
            self.rows as f32 * 2.0 / CANVAS_HEIGHT,
        );
        self.transform.transform_point2(local) * scale
    }

    fn shape(&mut self, local: &[Vec2]) {
        let points: Vec<Vec2> = local.iter().map(|&p| self.to_pixel(p)).collect();
        if let Some((color, alpha)) = self.pen.fill {
            self.pixels.fill_convex(&points, color, alpha);
        }
        if let Some(color) = self.pen.stroke {
            self.pixels.stroke_polygon(&points, color);
        }
    }

    /// Print the frame and flush.
    pub fn present<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let mut last: Option<(Rgb, Rgb)> = None;

        for row in 0..self.rows {
            out.queue(cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let top = self.pixels.get(col as usize, row as usize * 2);
                let bottom = self.pixels.get(col as usize, row as usize * 2 + 1);
                let glyph = self.glyphs[row as usize * self.cols as usize + col as usize];

                let (ch, fg, bg) = match glyph {
                    Some((ch, color)) => (ch, color, average(top, bottom)),
                    None => ('▀', top, bottom),
                };

                if last != Some((fg, bg)) {
                    out.queue(style::SetForegroundColor(to_color(fg)))?;
                    out.queue(style::SetBackgroundColor(to_color(bg)))?;
                    last = Some((fg, bg));
                }
                out.queue(Print(ch))?;
            }
        }

        out.queue(style::ResetColor)?;
        out.flush()
    }
}

impl Canvas for TerminalCanvas {
    fn background(&mut self, color: Rgb) {
        self.pixels.clear(color);
        self.glyphs.fill(None);
        self.transform = Affine2::IDENTITY;
        self.stack.clear();
    }

    fn push(&mut self) {
        self.stack.push((self.transform, self.pen));
    }

    fn pop(&mut self) {
        if let Some((transform, pen)) = self.stack.pop() {
            self.transform = transform;
            self.pen = pen;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.transform = self.transform * Affine2::from_translation(Vec2::new(x, y));
    }

    // Positive angles turn clockwise because y points down.
    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }

    fn fill(&mut self, color: Rgb, alpha: u8) {
        self.pen.fill = Some((color, alpha));
    }

    fn no_fill(&mut self) {
        self.pen.fill = None;
    }

    fn stroke(&mut self, color: Rgb) {
        self.pen.stroke = Some(color);
    }

    fn no_stroke(&mut self) {
        self.pen.stroke = None;
    }

    fn triangle(&mut self, a: (f32, f32), b: (f32, f32), c: (f32, f32)) {
        self.shape(&[a.into(), b.into(), c.into()]);
    }

    // Rounded corners are far below one cell at terminal resolution.
    fn rect(&mut self, x: f32, y: f32, w: f32, h: f32, _radius: f32) {
        self.shape(&[
            Vec2::new(x, y),
            Vec2::new(x + w, y),
            Vec2::new(x + w, y + h),
            Vec2::new(x, y + h),
        ]);
    }

    fn ellipse(&mut self, cx: f32, cy: f32, w: f32, h: f32) {
        let center = Vec2::new(cx, cy);
        let radii = Vec2::new(w, h) / 2.0;
        let points: Vec<Vec2> = (0..ELLIPSE_SEGMENTS)
            .map(|i| {
                let t = i as f32 / ELLIPSE_SEGMENTS as f32 * std::f32::consts::TAU;
                center + radii * Vec2::from_angle(t)
            })
            .collect();
        self.shape(&points);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, _size: f32, align: TextAlign) {
        let Some((color, _)) = self.pen.fill else {
            return;
        };

        let anchor_px = self.to_pixel(Vec2::new(x, y));
        let len = text.chars().count() as i32;
        let anchor = anchor_px.x.floor() as i32;
        let start = match align {
            TextAlign::Left => anchor,
            TextAlign::Center => anchor - len / 2,
            TextAlign::Right => anchor - len,
        };
        let row = (anchor_px.y / 2.0).floor() as i32;
        if row < 0 || row >= self.rows as i32 {
            return;
        }

        for (i, ch) in text.chars().enumerate() {
            let col = start + i as i32;
            if col >= 0 && col < self.cols as i32 {
                self.glyphs[row as usize * self.cols as usize + col as usize] = Some((ch, color));
            }
        }
    }
}

fn average(a: Rgb, b: Rgb) -> Rgb {
    let mid = |x: u8, y: u8| ((x as u16 + y as u16) / 2) as u8;
    Rgb::new(mid(a.r, b.r), mid(a.g, b.g), mid(a.b, b.b))
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
