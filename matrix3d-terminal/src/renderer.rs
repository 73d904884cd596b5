/// ASCII rasterizer for projected cube faces
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::Write;

use crate::cube::ProjectedFace;

/// Character luminosity ramp for shading (darkest to lightest)
const LUMINOSITY_RAMP: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// ASCII renderer that fills projected quads with shaded characters
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    /// Horizontal cells per vertical cell of world space
    cell_aspect: f64,
    depth_buffer: Vec<f64>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize, cell_aspect: f64) -> Self {
        let size = width * height;
        Self {
            width,
            height,
            cell_aspect,
            depth_buffer: vec![f64::NEG_INFINITY; size],
            char_buffer: vec![' '; size],
        }
    }

    /// Width of the canvas in world units
    pub fn world_width(&self) -> f64 {
        self.width as f64 / self.cell_aspect
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f64::NEG_INFINITY);
        self.char_buffer.fill(' ');
    }

    pub fn render_faces(&mut self, faces: &[ProjectedFace]) {
        for face in faces {
            self.render_face(face);
        }
    }

    fn render_face(&mut self, face: &ProjectedFace) {
        // Back faces and edge-on faces
        if face.facing <= 1e-6 {
            return;
        }

        let char_index = (face.facing * (LUMINOSITY_RAMP.len() - 1) as f64) as usize;
        let char_index = char_index.clamp(1, LUMINOSITY_RAMP.len() - 1);
        let character = LUMINOSITY_RAMP[char_index];

        let screen = face
            .corners
            .map(|p| (p.x * self.cell_aspect, p.y, p.z));

        self.rasterize_triangle(&[screen[0], screen[1], screen[2]], character);
        self.rasterize_triangle(&[screen[0], screen[2], screen[3]], character);
    }

    fn rasterize_triangle(&mut self, coords: &[(f64, f64, f64); 3], character: char) {
        let [v0, v1, v2] = *coords;

        if !coords.iter().all(|v| v.0.is_finite() && v.1.is_finite()) {
            return;
        }

        // Bounding box
        let min_x = v0.0.min(v1.0).min(v2.0).floor() as i64;
        let max_x = v0.0.max(v1.0).max(v2.0).ceil() as i64;
        let min_y = v0.1.min(v1.1).min(v2.1).floor() as i64;
        let max_y = v0.1.max(v1.1).max(v2.1).ceil() as i64;

        // Clip to screen bounds
        let min_x = min_x.max(0);
        let max_x = max_x.min(self.width as i64 - 1);
        let min_y = min_y.max(0);
        let max_y = max_y.min(self.height as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let px = x as f64 + 0.5;
                let py = y as f64 + 0.5;

                if let Some((w0, w1, w2)) =
                    barycentric((v0.0, v0.1), (v1.0, v1.1), (v2.0, v2.1), (px, py))
                {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        let depth = w0 * v0.2 + w1 * v1.2 + w2 * v2.2;

                        let idx = y as usize * self.width + x as usize;
                        if depth > self.depth_buffer[idx] {
                            self.depth_buffer[idx] = depth;
                            self.char_buffer[idx] = character;
                        }
                    }
                }
            }
        }
    }

    /// Character at a cell, for inspection
    pub fn cell(&self, x: usize, y: usize) -> char {
        self.char_buffer[y * self.width + x]
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.cell(x, y);

                let color = match c {
                    ' ' | '.' | ':' => Color::DarkGrey,
                    '-' | '=' => Color::Grey,
                    '+' | '*' => Color::White,
                    '#' | '%' | '@' => Color::Magenta,
                    _ => Color::White,
                };

                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(c))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Calculate barycentric coordinates for a point in a triangle
fn barycentric(
    v0: (f64, f64),
    v1: (f64, f64),
    v2: (f64, f64),
    p: (f64, f64),
) -> Option<(f64, f64, f64)> {
    let denom = (v1.1 - v2.1) * (v0.0 - v2.0) + (v2.0 - v1.0) * (v0.1 - v2.1);

    if denom.abs() < 1e-9 {
        return None;
    }

    let w0 = ((v1.1 - v2.1) * (p.0 - v2.0) + (v2.0 - v1.0) * (p.1 - v2.1)) / denom;
    let w1 = ((v2.1 - v0.1) * (p.0 - v2.0) + (v0.0 - v2.0) * (p.1 - v2.1)) / denom;
    let w2 = 1.0 - w0 - w1;

    Some((w0, w1, w2))
}
