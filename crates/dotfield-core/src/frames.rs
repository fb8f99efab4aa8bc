//! Baked per-cell magnitude frames and the cyclic cursor that walks them.

use crate::error::{FieldError, Result};

/// A decoded flipbook: `frame_count` grids of `rows × columns` magnitudes,
/// stored row-major and concatenated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameField {
    rows: usize,
    columns: usize,
    data: Vec<f32>,
}

/// Borrowed view of one frame.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    rows: usize,
    columns: usize,
    values: &'a [f32],
}

impl<'a> Frame<'a> {
    /// Magnitude at (row, column), `None` when the frame does not cover it.
    #[inline]
    pub fn magnitude(&self, row: usize, column: usize) -> Option<f32> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.values.get(row * self.columns + column).copied()
    }

    #[inline]
    pub fn values(&self) -> &'a [f32] {
        self.values
    }
}

impl FrameField {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from concatenated row-major frames. `data.len()` must be a whole
    /// number of `rows × columns` frames.
    pub fn from_flat(rows: usize, columns: usize, data: Vec<f32>) -> Result<Self> {
        let frame_len = rows * columns;
        if frame_len == 0 {
            if data.is_empty() {
                return Ok(Self::empty());
            }
            return Err(FieldError::asset("frame dimensions must be non-zero"));
        }
        if data.len() % frame_len != 0 {
            return Err(FieldError::asset(format!(
                "{} values is not a whole number of {rows}x{columns} frames",
                data.len()
            )));
        }
        Ok(Self {
            rows,
            columns,
            data,
        })
    }

    /// Build from `[frame][row][column]` nested vectors; every frame must
    /// have the same rectangular shape.
    pub fn from_nested(frames: Vec<Vec<Vec<f32>>>) -> Result<Self> {
        let Some(first) = frames.first() else {
            return Ok(Self::empty());
        };
        let rows = first.len();
        let columns = first.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(frames.len() * rows * columns);
        for (fi, frame) in frames.into_iter().enumerate() {
            if frame.len() != rows {
                return Err(FieldError::asset(format!(
                    "frame {fi} has {} rows, expected {rows}",
                    frame.len()
                )));
            }
            for (ri, row) in frame.into_iter().enumerate() {
                if row.len() != columns {
                    return Err(FieldError::asset(format!(
                        "frame {fi} row {ri} has {} columns, expected {columns}",
                        row.len()
                    )));
                }
                data.extend(row);
            }
        }
        Self::from_flat(rows, columns, data)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn frame_len(&self) -> usize {
        self.rows * self.columns
    }

    pub fn frame_count(&self) -> usize {
        match self.frame_len() {
            0 => 0,
            n => self.data.len() / n,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Frame `index mod frame_count`.
    pub fn frame_at(&self, index: usize) -> Result<Frame<'_>> {
        let count = self.frame_count();
        if count == 0 {
            return Err(FieldError::EmptySource);
        }
        let n = self.frame_len();
        let start = (index % count) * n;
        Ok(Frame {
            rows: self.rows,
            columns: self.columns,
            values: &self.data[start..start + n],
        })
    }

    /// Centred moving average across frames to remove flicker. The window is
    /// clipped at both ends of the sequence.
    pub fn smoothed(&self, window: usize) -> Result<Self> {
        if window == 0 || window % 2 == 0 {
            return Err(FieldError::config(
                "smoothingWindow",
                format!("window must be odd, got {window}"),
            ));
        }
        let count = self.frame_count();
        let n = self.frame_len();
        let half = window / 2;
        let mut data = Vec::with_capacity(self.data.len());
        for fi in 0..count {
            let lo = fi.saturating_sub(half);
            let hi = (fi + half + 1).min(count);
            let span = (hi - lo) as f32;
            for ci in 0..n {
                let sum: f32 = (lo..hi).map(|f| self.data[f * n + ci]).sum();
                data.push(sum / span);
            }
        }
        Ok(Self {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }

    /// Insert `factor - 1` linearly blended frames between each consecutive
    /// pair, e.g. factor 2 turns 30 fps source material into 60 fps.
    pub fn interpolated(&self, factor: usize) -> Result<Self> {
        if factor == 0 {
            return Err(FieldError::config(
                "interpolationFactor",
                "factor must be at least 1",
            ));
        }
        let count = self.frame_count();
        if factor == 1 || count < 2 {
            return Ok(self.clone());
        }
        let n = self.frame_len();
        let mut data = Vec::with_capacity(((count - 1) * factor + 1) * n);
        for fi in 0..count - 1 {
            let a = &self.data[fi * n..(fi + 1) * n];
            let b = &self.data[(fi + 1) * n..(fi + 2) * n];
            data.extend_from_slice(a);
            for step in 1..factor {
                let t = step as f32 / factor as f32;
                data.extend(a.iter().zip(b).map(|(x, y)| (1.0 - t) * x + t * y));
            }
        }
        data.extend_from_slice(&self.data[(count - 1) * n..]);
        Ok(Self {
            rows: self.rows,
            columns: self.columns,
            data,
        })
    }
}

/// Cyclic cursor over a [`FrameField`], advanced by whole frames.
#[derive(Clone, Debug, Default)]
pub struct FrameSource {
    field: FrameField,
    cursor: usize,
}

impl FrameSource {
    pub fn new(field: FrameField) -> Self {
        Self { field, cursor: 0 }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn frame_at(&self, index: usize) -> Result<Frame<'_>> {
        self.field.frame_at(index)
    }

    /// Frame under the cursor, `None` for an empty source.
    pub fn current(&self) -> Option<Frame<'_>> {
        self.field.frame_at(self.cursor).ok()
    }

    pub fn advance_tick(&mut self) {
        self.advance_by(1);
    }

    pub fn advance_by(&mut self, steps: usize) {
        let count = self.field.frame_count();
        if count > 0 {
            self.cursor = (self.cursor + steps % count) % count;
        }
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[inline]
    pub fn frame_count(&self) -> usize {
        self.field.frame_count()
    }

    /// Swap in a new field and restart at its first frame.
    pub fn replace(&mut self, field: FrameField) {
        self.field = field;
        self.cursor = 0;
    }
}
