//! Software rasteriser behind the terminal canvas.
//!
//! Works in pixel space, where every terminal cell holds two stacked pixels.

use glam::Vec2;

use crate::entities::Rgb;

#[derive(Clone, Debug)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::new(0, 0, 0); width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.pixels.resize(width * height, Rgb::new(0, 0, 0));
    }

    pub fn clear(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x]
        } else {
            Rgb::new(0, 0, 0)
        }
    }

    /// Alpha-blend one pixel; out-of-range coordinates are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb, alpha: u8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = y as usize * self.width + x as usize;
        let dst = self.pixels[idx];
        let a = alpha as u32;
        let mix = |src: u8, dst: u8| ((src as u32 * a + dst as u32 * (255 - a)) / 255) as u8;
        self.pixels[idx] = Rgb::new(mix(color.r, dst.r), mix(color.g, dst.g), mix(color.b, dst.b));
    }

    /// Fill a convex polygon (either winding), sampling pixel centres.
    ///
    /// Shapes too small to cover any pixel centre still light the pixel
    /// under their centroid, so bullets and stars never vanish.
    pub fn fill_convex(&mut self, points: &[Vec2], color: Rgb, alpha: u8) {
        if points.len() < 3 {
            return;
        }

        let area2: f32 = edges(points).map(|(p, q)| p.perp_dot(q)).sum();
        let sign = if area2 < 0.0 { -1.0 } else { 1.0 };

        let min = points.iter().copied().fold(Vec2::INFINITY, Vec2::min);
        let max = points.iter().copied().fold(Vec2::NEG_INFINITY, Vec2::max);

        let x0 = (min.x.floor() as i32).max(0);
        let x1 = (max.x.ceil() as i32).min(self.width as i32 - 1);
        let y0 = (min.y.floor() as i32).max(0);
        let y1 = (max.y.ceil() as i32).min(self.height as i32 - 1);

        let mut covered = false;
        for py in y0..=y1 {
            for px in x0..=x1 {
                let sample = Vec2::new(px as f32 + 0.5, py as f32 + 0.5);
                let inside = edges(points)
                    .all(|(p, q)| (q - p).perp_dot(sample - p) * sign >= 0.0);
                if inside {
                    self.blend(px, py, color, alpha);
                    covered = true;
                }
            }
        }

        if !covered {
            let centroid = points.iter().copied().sum::<Vec2>() / points.len() as f32;
            self.blend(centroid.x.floor() as i32, centroid.y.floor() as i32, color, alpha);
        }
    }

    pub fn draw_line(&mut self, from: Vec2, to: Vec2, color: Rgb) {
        let (mut x, mut y) = (from.x.floor() as i32, from.y.floor() as i32);
        let (x1, y1) = (to.x.floor() as i32, to.y.floor() as i32);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend(x, y, color, 255);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn stroke_polygon(&mut self, points: &[Vec2], color: Rgb) {
        for (p, q) in edges(points) {
            self.draw_line(p, q, color);
        }
    }
}

/// Consecutive vertex pairs, closing back to the first vertex.
fn edges(points: &[Vec2]) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(&p, &q)| (p, q))
}
