/// ASCII rasterizer for the tilted card
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::{Matrix4, Vector3, Vector4};
use std::io::Write;
use tilt3d_core::ShadowOffset;

/// Shading ramp from empty to brightest.
const SHADE_RAMP: &[char] = &[' ', '.', ':', '~', '=', 'o', '*', '#', '%', '@'];

/// Terminal cells are roughly twice as tall as wide.
const CELL_ASPECT: f32 = 0.5;

/// Renderer that projects the card quad through a perspective transform
/// and rasterizes it (and its drop shadow) into terminal characters.
///
/// The only shape this host ever draws is a single convex quad per
/// layer, so filling is a per-row scan over the quad's edge crossings
/// rather than a general mesh rasterizer.
pub struct AsciiRenderer {
    width: usize,
    height: usize,
    depth_buffer: Vec<f32>,
    char_buffer: Vec<char>,
}

impl AsciiRenderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            depth_buffer: vec![f32::INFINITY; width * height],
            char_buffer: vec![' '; width * height],
        }
    }

    pub fn clear(&mut self) {
        self.depth_buffer.fill(f32::INFINITY);
        self.char_buffer.fill(' ');
    }

    /// Rasterizes the card quad under `transform`. `half_width` and
    /// `half_height` are the card extents in points, `scale` converts
    /// points to terminal cells.
    pub fn render_card(
        &mut self,
        half_width: f32,
        half_height: f32,
        transform: &Matrix4<f32>,
        scale: f32,
    ) {
        let quad = match self.project_quad(half_width, half_height, transform, ShadowOffset::ZERO, scale)
        {
            Some(quad) => quad,
            None => return, // degenerate perspective, skip the frame
        };

        // Shade by how much the card still faces the viewer.
        let normal = transform.transform_vector(&Vector3::z());
        let facing = (normal.z / normal.norm().max(1e-6)).abs();
        let shade = (facing * (SHADE_RAMP.len() - 1) as f32) as usize;
        let character = SHADE_RAMP[shade.min(SHADE_RAMP.len() - 1)];

        self.fill_quad(&quad, character, true);
    }

    /// Rasterizes the card's drop shadow: the same quad translated by
    /// the shadow offset, drawn dim and without touching the depth
    /// buffer so the card painted afterwards claims its cells back.
    pub fn render_shadow(
        &mut self,
        half_width: f32,
        half_height: f32,
        transform: &Matrix4<f32>,
        offset: ShadowOffset,
        opacity: f32,
        scale: f32,
    ) {
        if opacity <= 0.0 {
            return;
        }
        let quad = match self.project_quad(half_width, half_height, transform, offset, scale) {
            Some(quad) => quad,
            None => return,
        };

        let shade = (opacity.clamp(0.0, 1.0) * 3.0) as usize;
        self.fill_quad(&quad, SHADE_RAMP[shade.min(3)], false);
    }

    /// Projects the four card corners through the transform with
    /// perspective divide, shifts by `offset`, and maps the result to
    /// screen cells around the terminal center. Returns `None` when a
    /// corner lands on the w = 0 plane.
    fn project_quad(
        &self,
        half_width: f32,
        half_height: f32,
        transform: &Matrix4<f32>,
        offset: ShadowOffset,
        scale: f32,
    ) -> Option<[(f32, f32, f32); 4]> {
        let corners = [
            (-half_width, -half_height),
            (half_width, -half_height),
            (half_width, half_height),
            (-half_width, half_height),
        ];

        let mut quad = [(0.0f32, 0.0f32, 0.0f32); 4];
        for (slot, (x, y)) in quad.iter_mut().zip(corners) {
            let clip = transform * Vector4::new(x, y, 0.0, 1.0);
            if clip.w.abs() < 1e-6 {
                return None;
            }
            let screen_x = self.width as f32 / 2.0 + (clip.x / clip.w + offset.dx) * scale;
            let screen_y =
                self.height as f32 / 2.0 + (clip.y / clip.w + offset.dy) * scale * CELL_ASPECT;
            // Larger z leans toward the viewer; negate so smaller depth wins.
            *slot = (screen_x, screen_y, -clip.z / clip.w);
        }
        Some(quad)
    }

    /// Fills the convex quad one row at a time: find where the scanline
    /// crosses the four edges, sort the crossings, then paint between
    /// each pair with depth interpolated along the span.
    fn fill_quad(&mut self, quad: &[(f32, f32, f32); 4], character: char, test_depth: bool) {
        let top = quad.iter().map(|p| p.1).fold(f32::INFINITY, f32::min);
        let bottom = quad.iter().map(|p| p.1).fold(f32::NEG_INFINITY, f32::max);
        let last_row = bottom.ceil().min(self.height as f32 - 1.0);
        if last_row < 0.0 {
            return;
        }
        let first_row = top.floor().max(0.0) as usize;

        for row in first_row..=last_row as usize {
            let scan_y = row as f32 + 0.5;

            let mut crossings = [(0.0f32, 0.0f32); 4];
            let mut found = 0;
            for edge in 0..4 {
                let a = quad[edge];
                let b = quad[(edge + 1) % 4];
                // Half-open test so a vertex on the scanline counts once.
                if (a.1 <= scan_y) != (b.1 <= scan_y) {
                    let t = (scan_y - a.1) / (b.1 - a.1);
                    crossings[found] = (a.0 + t * (b.0 - a.0), a.2 + t * (b.2 - a.2));
                    found += 1;
                }
            }
            crossings[..found].sort_by(|p, q| p.0.total_cmp(&q.0));

            let mut pair = 0;
            while pair + 1 < found {
                let (x0, z0) = crossings[pair];
                let (x1, z1) = crossings[pair + 1];
                pair += 2;

                let last_col = (x1 - 0.5).floor().min(self.width as f32 - 1.0);
                if last_col < 0.0 {
                    continue;
                }
                let first_col = (x0 - 0.5).ceil().max(0.0) as usize;
                let span = x1 - x0;

                for col in first_col..=last_col as usize {
                    let u = if span > f32::EPSILON {
                        (col as f32 + 0.5 - x0) / span
                    } else {
                        0.0
                    };
                    let depth = z0 + u * (z1 - z0);
                    let cell = row * self.width + col;
                    if test_depth {
                        if depth < self.depth_buffer[cell] {
                            self.depth_buffer[cell] = depth;
                            self.char_buffer[cell] = character;
                        }
                    } else {
                        self.char_buffer[cell] = character;
                    }
                }
            }
        }
    }

    /// Writes the frame out, batching runs of cells that share a color
    /// into one print each.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.height {
            let line = &self.char_buffer[row * self.width..(row + 1) * self.width];
            let mut start = 0;
            while start < line.len() {
                let color = shade_color(line[start]);
                let run = line[start..]
                    .iter()
                    .take_while(|&&c| shade_color(c) == color)
                    .count();
                writer.queue(SetForegroundColor(color))?;
                writer.queue(Print(line[start..start + run].iter().collect::<String>()))?;
                start += run;
            }
            writer.queue(Print('\n'))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

/// Terminal color for a ramp character, dim to bright.
fn shade_color(c: char) -> Color {
    match SHADE_RAMP.iter().position(|&r| r == c).unwrap_or(0) {
        0..=2 => Color::DarkGrey,
        3..=4 => Color::Grey,
        5..=6 => Color::White,
        _ => Color::Cyan,
    }
}
