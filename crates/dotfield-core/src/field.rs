use crate::compositor::{CompositeResult, FieldCompositor};
use crate::config::FieldConfig;
use crate::error::Result;
use crate::frames::{FrameField, FrameSource};
use crate::grid::Grid;
use crate::input::{InputState, PointerState};
use crate::pulse::Pulse;

/// Everything one visual surface owns: config, layout, input, baked frames
/// and the last composite. Created with the surface and dropped with it.
pub struct DotField {
    config: FieldConfig,
    grid: Grid,
    input: InputState,
    frames: FrameSource,
    compositor: FieldCompositor,
}

impl DotField {
    pub fn new(config: FieldConfig) -> Result<Self> {
        Self::with_frames(config, FrameField::empty())
    }

    pub fn with_frames(config: FieldConfig, field: FrameField) -> Result<Self> {
        config.validate()?;
        let grid = Grid::from_config(&config);
        let input = InputState::new(&config);
        let mut dot_field = Self {
            config,
            grid,
            input,
            frames: FrameSource::empty(),
            compositor: FieldCompositor::new(),
        };
        dot_field.set_frames(field);
        Ok(dot_field)
    }

    pub fn set_frames(&mut self, field: FrameField) {
        if !field.is_empty()
            && (field.rows() != self.grid.rows() || field.columns() != self.grid.columns())
        {
            log::warn!(
                "[field] baked frames are {}x{} but the grid is {}x{}; uncovered cells get no frame contribution",
                field.rows(),
                field.columns(),
                self.grid.rows(),
                self.grid.columns()
            );
        }
        self.frames.replace(field);
    }

    /// Throttled; returns whether the move was taken.
    pub fn pointer_moved(&mut self, x: f32, y: f32, now_ms: f64) -> bool {
        self.input.record_pointer_move(x, y, now_ms)
    }

    pub fn pointer_left(&mut self) {
        self.input.record_pointer_leave();
    }

    pub fn clicked(&mut self, x: f32, y: f32, now_ms: f64) {
        self.input.record_click(x, y, now_ms);
    }

    /// One animation tick: age pulses, step the flipbook by `frame_steps`,
    /// then composite the whole grid.
    pub fn tick(&mut self, now_ms: f64, frame_steps: usize) -> &[CompositeResult] {
        self.input.advance(now_ms);
        self.frames.advance_by(frame_steps);
        self.compositor.composite(
            &self.grid,
            &self.input,
            self.frames.current(),
            &self.config,
        )
    }

    #[inline]
    pub fn results(&self) -> &[CompositeResult] {
        self.compositor.results()
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn frames(&self) -> &FrameSource {
        &self.frames
    }

    #[inline]
    pub fn pointer(&self) -> PointerState {
        self.input.pointer()
    }

    #[inline]
    pub fn pulses(&self) -> &[Pulse] {
        self.input.pulses()
    }

    #[inline]
    pub fn invalid_cells(&self) -> usize {
        self.compositor.invalid_cells()
    }
}
