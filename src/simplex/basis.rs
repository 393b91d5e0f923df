use super::cell::Cell;
use crate::Energy;
use crate::Mass;

/// Arena of basic cells, addressable both by slot and by (row, col).
///
/// A slot is a position in the arena; pivots overwrite the leaving cell's
/// slot with the entering cell, so slots stay dense and the arena never
/// grows past `rows + cols - 1`.
#[derive(Debug, Clone)]
pub struct Basis {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    slots: Vec<Option<usize>>,
}

impl Basis {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: Vec::with_capacity(rows + cols - 1),
            slots: vec![None; rows * cols],
        }
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    pub fn cell(&self, slot: usize) -> &Cell {
        &self.cells[slot]
    }
    pub fn cell_mut(&mut self, slot: usize) -> &mut Cell {
        &mut self.cells[slot]
    }
    /// Slot holding cell (i, j), if it is basic.
    pub fn slot(&self, i: usize, j: usize) -> Option<usize> {
        self.slots[i * self.cols + j]
    }
    pub fn contains(&self, i: usize, j: usize) -> bool {
        self.slot(i, j).is_some()
    }
    /// Flow on cell (i, j); zero when non-basic.
    pub fn flow(&self, i: usize, j: usize) -> Mass {
        self.slot(i, j).map(|s| self.cells[s].flow).unwrap_or(0.)
    }
    /// Adds a cell to the basis.
    pub fn push(&mut self, cell: Cell) {
        debug_assert!(!self.contains(cell.row, cell.col));
        self.slots[cell.row * self.cols + cell.col] = Some(self.cells.len());
        self.cells.push(cell);
    }
    /// Replaces the cell at `slot` with `cell`.
    pub fn replace(&mut self, slot: usize, cell: Cell) {
        debug_assert!(!self.contains(cell.row, cell.col));
        let Cell { row, col, .. } = self.cells[slot];
        self.slots[row * self.cols + col] = None;
        self.slots[cell.row * self.cols + cell.col] = Some(slot);
        self.cells[slot] = cell;
    }
    /// Total work over cells accepted by `real`.
    pub fn work(&self, real: impl Fn(&Cell) -> bool) -> Energy {
        self.cells.iter().filter(|c| real(c)).map(Cell::work).sum()
    }
    /// Total flow over cells accepted by `real`.
    pub fn mass(&self, real: impl Fn(&Cell) -> bool) -> Mass {
        self.cells.iter().filter(|c| real(c)).map(|c| c.flow).sum()
    }
}
