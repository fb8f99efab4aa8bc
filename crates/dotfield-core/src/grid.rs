use crate::config::FieldConfig;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridCell {
    pub row: usize,
    pub column: usize,
    pub position: Vec2,
}

/// Fixed cell layout for one grid configuration, ordered by (row, column).
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    spacing: f32,
    cells: Vec<GridCell>,
}

impl Grid {
    pub fn new(rows: usize, columns: usize, spacing: f32) -> Self {
        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for column in 0..columns {
                cells.push(GridCell {
                    row,
                    column,
                    position: Vec2::new(column as f32 * spacing, row as f32 * spacing),
                });
            }
        }
        Self {
            rows,
            columns,
            spacing,
            cells,
        }
    }

    pub fn from_config(config: &FieldConfig) -> Self {
        Self::new(config.grid_rows, config.grid_columns, config.dot_spacing)
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
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    #[inline]
    pub fn index_of(&self, row: usize, column: usize) -> Option<usize> {
        (row < self.rows && column < self.columns).then_some(row * self.columns + column)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&GridCell> {
        self.index_of(row, column).map(|i| &self.cells[i])
    }
}
