//! Grid geometry
//!
//! A `GridSpec` partitions a rectangular area into `columns * rows`
//! equally sized cells. Cell enumeration order is row-major (column
//! varies fastest) and is part of the public contract: chips are
//! created and inserted in this order, so changing it changes paint
//! order in the surface layer.

use std::time::Duration;

use thiserror::Error;

/// Errors surfaced while building a grid
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum GridError {
    /// The area or partition counts cannot produce a valid grid
    #[error(
        "invalid dimension: cannot partition {width}x{height} area into {columns}x{rows} cells"
    )]
    InvalidDimension {
        width: f32,
        height: f32,
        columns: u32,
        rows: u32,
    },
}

/// Immutable partition of a rectangular area into an m×n grid
///
/// Built once per widget activation. Invariants are established by
/// [`GridSpec::build`]: partition counts are at least 1 and both cell
/// dimensions are positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    columns: u32,
    rows: u32,
    area_width: f32,
    area_height: f32,
    cell_width: f32,
    cell_height: f32,
}

/// One grid unit, identified by its (column, row) coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Column index in `[0, columns)`
    pub column: u32,
    /// Row index in `[0, rows)`
    pub row: u32,
    /// Left pixel offset within the area (`column * cell_width`)
    pub left: f32,
    /// Top pixel offset within the area (`row * cell_height`)
    pub top: f32,
}

impl Cell {
    /// Anti-diagonal index of this cell, in `[0, columns + rows - 2]`
    ///
    /// Cells sharing a diagonal index animate in lockstep.
    pub fn diagonal_index(&self) -> u32 {
        self.column + self.row
    }
}

impl GridSpec {
    /// Build a grid over the given area
    ///
    /// Fails with [`GridError::InvalidDimension`] when either partition
    /// count is zero or either area dimension is not a positive finite
    /// number. A 1×1 grid is valid (single cell, zero stagger).
    pub fn build(
        area_width: f32,
        area_height: f32,
        columns: u32,
        rows: u32,
    ) -> Result<Self, GridError> {
        if columns < 1 || rows < 1 || !(area_width > 0.0) || !(area_height > 0.0) {
            return Err(GridError::InvalidDimension {
                width: area_width,
                height: area_height,
                columns,
                rows,
            });
        }

        Ok(Self {
            columns,
            rows,
            area_width,
            area_height,
            cell_width: area_width / columns as f32,
            cell_height: area_height / rows as f32,
        })
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn area_width(&self) -> f32 {
        self.area_width
    }

    pub fn area_height(&self) -> f32 {
        self.area_height
    }

    pub fn cell_width(&self) -> f32 {
        self.cell_width
    }

    pub fn cell_height(&self) -> f32 {
        self.cell_height
    }

    /// Total number of cells in the grid
    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Enumerate all cells in row-major order
    ///
    /// For linear index `c`: `column = c % columns`, `row = c / columns`.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.cell_count() as u32).map(|c| {
            let column = c % self.columns;
            let row = c / self.columns;
            Cell {
                column,
                row,
                left: column as f32 * self.cell_width,
                top: row as f32 * self.cell_height,
            }
        })
    }

    /// Start delay of a cell's flip within the staggered sweep
    ///
    /// `unit_duration * diagonal_index / (columns + rows)`. Zero for
    /// the origin cell; non-decreasing along diagonals.
    pub fn stagger_delay(&self, cell: &Cell, unit_duration: Duration) -> Duration {
        crate::stagger::stagger_delay(cell, unit_duration, self.columns, self.rows)
    }

    /// Inter-diagonal delay increment: `unit_duration / (columns + rows)`
    pub fn diff_duration(&self, unit_duration: Duration) -> Duration {
        crate::stagger::diff_duration(unit_duration, self.columns, self.rows)
    }

    /// Delay of the last diagonal, i.e. the largest stagger delay
    ///
    /// `unit_duration * (columns + rows - 2) / (columns + rows)`.
    pub fn max_stagger(&self, unit_duration: Duration) -> Duration {
        unit_duration * (self.columns + self.rows - 2) / (self.columns + self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_valid_grid() {
        let spec = GridSpec::build(800.0, 400.0, 4, 4).unwrap();

        assert_eq!(spec.columns(), 4);
        assert_eq!(spec.rows(), 4);
        assert_eq!(spec.cell_width(), 200.0);
        assert_eq!(spec.cell_height(), 100.0);
        assert_eq!(spec.cell_count(), 16);
    }

    #[test]
    fn test_build_rejects_zero_width() {
        let err = GridSpec::build(0.0, 400.0, 4, 4).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimension { .. }));
    }

    #[test]
    fn test_build_rejects_negative_height() {
        assert!(GridSpec::build(800.0, -1.0, 4, 4).is_err());
    }

    #[test]
    fn test_build_rejects_nan_dimension() {
        assert!(GridSpec::build(f32::NAN, 400.0, 4, 4).is_err());
    }

    #[test]
    fn test_build_rejects_zero_partitions() {
        assert!(GridSpec::build(800.0, 400.0, 0, 4).is_err());
        assert!(GridSpec::build(800.0, 400.0, 4, 0).is_err());
    }

    #[test]
    fn test_cells_complete_and_unique() {
        // Every (column, row) pair appears exactly once, for several shapes
        for (m, n) in [(1, 1), (4, 4), (8, 4), (3, 7), (1, 5)] {
            let spec = GridSpec::build(640.0, 480.0, m, n).unwrap();
            let cells: Vec<Cell> = spec.cells().collect();

            assert_eq!(cells.len(), (m * n) as usize);

            let mut seen = vec![false; (m * n) as usize];
            for cell in &cells {
                assert!(cell.column < m);
                assert!(cell.row < n);
                let idx = (cell.column + cell.row * m) as usize;
                assert!(!seen[idx], "duplicate cell ({}, {})", cell.column, cell.row);
                seen[idx] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn test_cells_row_major_order() {
        let spec = GridSpec::build(800.0, 400.0, 3, 2).unwrap();
        let coords: Vec<(u32, u32)> = spec.cells().map(|c| (c.column, c.row)).collect();

        assert_eq!(
            coords,
            vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
        );
    }

    #[test]
    fn test_cell_offsets() {
        let spec = GridSpec::build(800.0, 400.0, 4, 4).unwrap();
        let cells: Vec<Cell> = spec.cells().collect();

        assert_eq!(cells[0].left, 0.0);
        assert_eq!(cells[0].top, 0.0);
        // Cell (3, 3) is the last in row-major order
        let last = cells.last().unwrap();
        assert_eq!(last.left, 600.0);
        assert_eq!(last.top, 300.0);
    }

    #[test]
    fn test_single_cell_grid() {
        let spec = GridSpec::build(100.0, 100.0, 1, 1).unwrap();
        let cells: Vec<Cell> = spec.cells().collect();

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].diagonal_index(), 0);
        assert_eq!(
            spec.stagger_delay(&cells[0], Duration::from_millis(400)),
            Duration::ZERO
        );
    }

    #[test]
    fn test_max_stagger_matches_last_cell() {
        let unit = Duration::from_millis(400);
        let spec = GridSpec::build(800.0, 400.0, 4, 4).unwrap();
        let last = spec.cells().last().unwrap();

        assert_eq!(spec.max_stagger(unit), spec.stagger_delay(&last, unit));
        assert_eq!(spec.max_stagger(unit), Duration::from_millis(300));
    }
}
