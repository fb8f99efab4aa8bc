//! Per-cell compositing of pulse rings, pointer proximity and baked frames.
//!
//! [`compute_cell`] is pure: the same cell, pulses, pointer, frame and config
//! always give the same [`CompositeResult`]. [`FieldCompositor`] runs it over
//! a whole grid into a reused buffer.

use crate::config::FieldConfig;
use crate::frames::Frame;
use crate::grid::{Grid, GridCell};
use crate::input::{InputState, PointerState};
use crate::pulse::Pulse;
use glam::Vec2;

/// Draw displacements of the three color halos relative to the cell center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromaticOffsets {
    pub red: Vec2,
    pub green: Vec2,
    pub blue: Vec2,
    pub alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompositeResult {
    pub row: usize,
    pub column: usize,
    pub position: Vec2,
    /// Diameter in `[0, max_dot_size]`.
    pub size: f32,
    pub chromatic: Option<ChromaticOffsets>,
}

impl CompositeResult {
    /// Cells whose size rounds to zero are skipped by the renderer.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.size.round() > 0.0
    }
}

/// Sum of ring contributions: triangular falloff across each pulse's annulus,
/// 1 on the ring and 0 at `radius ± wave_thickness`.
pub fn pulse_contribution(position: Vec2, pulses: &[Pulse], config: &FieldConfig) -> f32 {
    let thickness = config.wave_thickness;
    pulses
        .iter()
        .map(|p| {
            let d = position.distance(p.origin);
            let off_ring = (d - p.radius).abs();
            if off_ring <= thickness {
                let fade = 1.0 - off_ring / thickness;
                fade * p.intensity * config.pulse_weight
            } else {
                0.0
            }
        })
        .sum()
}

/// Linear falloff from the pointer, exactly 0 at the influence radius.
pub fn pointer_contribution(position: Vec2, pointer: PointerState, config: &FieldConfig) -> f32 {
    let Some(p) = pointer.position() else {
        return 0.0;
    };
    let d = position.distance(p);
    let radius = config.mouse_influence_radius;
    if d <= radius {
        (1.0 - d / radius) * config.pointer_weight
    } else {
        0.0
    }
}

#[inline]
pub fn frame_contribution(cell: &GridCell, frame: Option<Frame<'_>>, config: &FieldConfig) -> f32 {
    frame
        .and_then(|f| f.magnitude(cell.row, cell.column))
        .map_or(0.0, |m| m * config.frame_gain)
}

/// Halo displacements for a dot of `size`. Red is pulled toward the pointer,
/// blue pushed away, green mirrored vertically; all grow with distance.
pub fn chromatic_offsets(
    position: Vec2,
    size: f32,
    pointer: PointerState,
    config: &FieldConfig,
) -> Option<ChromaticOffsets> {
    let p = pointer.position()?;
    if size <= config.max_dot_size * config.chromatic_min_size_ratio {
        return None;
    }
    let delta = position - p;
    let d = delta.length();
    let radius = config.chromatic_influence_radius;
    if d >= radius {
        return None;
    }
    let dir = if d > 0.0 { delta / d } else { Vec2::ZERO };
    let reach = config.base_chromatic_offset * (d / radius);
    let w = config.channel_weights;
    Some(ChromaticOffsets {
        red: -dir * (reach * w.red),
        green: Vec2::new(dir.x, -dir.y) * (reach * w.green),
        blue: dir * (reach * w.blue),
        alpha: config.halo_alpha * (1.0 - d / radius),
    })
}

/// Size before sanitizing; `None` when an input made it non-finite.
fn cell_size(
    cell: &GridCell,
    pulses: &[Pulse],
    pointer: PointerState,
    frame: Option<Frame<'_>>,
    config: &FieldConfig,
) -> Option<f32> {
    let fx = config.effects;
    let mut acc = 0.0f32;
    if fx.pulses {
        acc += pulse_contribution(cell.position, pulses, config);
    }
    if fx.pointer {
        acc += pointer_contribution(cell.position, pointer, config);
    }
    if fx.frames {
        acc += frame_contribution(cell, frame, config);
    }
    let size = config.dot_size + acc;
    size.is_finite().then(|| size.clamp(0.0, config.max_dot_size))
}

fn evaluate(
    cell: &GridCell,
    pulses: &[Pulse],
    pointer: PointerState,
    frame: Option<Frame<'_>>,
    config: &FieldConfig,
) -> (CompositeResult, bool) {
    let size = cell_size(cell, pulses, pointer, frame, config);
    let valid = size.is_some();
    let size = size.unwrap_or(0.0);
    let chromatic = if config.effects.chromatic && valid {
        chromatic_offsets(cell.position, size, pointer, config)
    } else {
        None
    };
    (
        CompositeResult {
            row: cell.row,
            column: cell.column,
            position: cell.position,
            size,
            chromatic,
        },
        valid,
    )
}

/// Composite one cell. A non-finite intermediate yields size 0 and no halos
/// for this cell only.
pub fn compute_cell(
    cell: &GridCell,
    pulses: &[Pulse],
    pointer: PointerState,
    frame: Option<Frame<'_>>,
    config: &FieldConfig,
) -> CompositeResult {
    evaluate(cell, pulses, pointer, frame, config).0
}

#[derive(Clone, Debug, Default)]
pub struct FieldCompositor {
    results: Vec<CompositeResult>,
    invalid_cells: usize,
}

impl FieldCompositor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recompute every cell in (row, column) order. The buffer keeps one slot
    /// per cell so renderers can reuse primitives across ticks.
    pub fn composite(
        &mut self,
        grid: &Grid,
        input: &InputState,
        frame: Option<Frame<'_>>,
        config: &FieldConfig,
    ) -> &[CompositeResult] {
        let pulses = input.pulses();
        let pointer = input.pointer();
        let previous_invalid = self.invalid_cells;
        let mut invalid = 0usize;
        self.results.clear();
        self.results.reserve(grid.cells().len());
        for cell in grid.cells() {
            let (result, valid) = evaluate(cell, pulses, pointer, frame, config);
            if !valid {
                invalid += 1;
            }
            self.results.push(result);
        }
        self.invalid_cells = invalid;
        if invalid != previous_invalid && invalid > 0 {
            log::warn!("[compositor] {invalid} cells produced non-finite sizes, drawn empty");
        }
        &self.results
    }

    #[inline]
    pub fn results(&self) -> &[CompositeResult] {
        &self.results
    }

    /// Cells sanitized during the last composite.
    #[inline]
    pub fn invalid_cells(&self) -> usize {
        self.invalid_cells
    }
}
