//! Drawing contract between the compositor output and a concrete backend.

use crate::compositor::CompositeResult;
use crate::constants::DEFAULT_HALO_SCALE;
use glam::Vec2;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// CSS `rgba()` notation.
    pub fn to_css(&self) -> String {
        format!("rgba({},{},{},{:.3})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Blend {
    Normal,
    Additive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub dot: Rgba,
    pub red: Rgba,
    pub green: Rgba,
    pub blue: Rgba,
    pub background: Rgba,
    /// Halo diameter relative to the main dot.
    pub halo_scale: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            dot: Rgba::rgb(255, 255, 255),
            red: Rgba::rgb(255, 0, 0),
            green: Rgba::rgb(0, 255, 0),
            blue: Rgba::rgb(0, 0, 255),
            background: Rgba::rgb(0, 0, 0),
            halo_scale: DEFAULT_HALO_SCALE,
        }
    }
}

/// Immediate-mode circle drawing, implemented by each backend.
pub trait DotPainter {
    fn clear(&mut self, color: Rgba);
    fn set_blend(&mut self, blend: Blend);
    fn fill_circle(&mut self, center: Vec2, diameter: f32, color: Rgba);
}

/// Draw one composite: additive halos underneath, then the main dots.
/// Returns the number of main dots drawn.
pub fn paint_field(
    results: &[CompositeResult],
    palette: &Palette,
    painter: &mut impl DotPainter,
) -> usize {
    painter.clear(palette.background);

    painter.set_blend(Blend::Additive);
    for r in results.iter().filter(|r| r.is_visible()) {
        let Some(c) = r.chromatic else { continue };
        let d = r.size * palette.halo_scale;
        painter.fill_circle(r.position + c.red, d, palette.red.with_alpha(c.alpha));
        painter.fill_circle(r.position + c.blue, d, palette.blue.with_alpha(c.alpha));
        painter.fill_circle(r.position + c.green, d, palette.green.with_alpha(c.alpha));
    }

    painter.set_blend(Blend::Normal);
    let mut drawn = 0;
    for r in results.iter().filter(|r| r.is_visible()) {
        painter.fill_circle(r.position, r.size, palette.dot);
        drawn += 1;
    }
    drawn
}
