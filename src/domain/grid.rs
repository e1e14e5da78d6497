use super::Cell;

/// Grid manages the toroidal 2D cell matrix.
/// Uses functional, immutable updates: `evolve` builds a whole new grid,
/// so neighbor counts never observe a partially updated state.
///
/// The `rows` axis maps to the window's horizontal direction and
/// `columns` to the vertical one, matching the pixel-to-cell conversion
/// in the engine.
#[derive(Clone, PartialEq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Dead; rows * columns],
        }
    }

    /// Get grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    /// Convert 2D coordinates to 1D index
    const fn index(&self, x: usize, y: usize) -> usize {
        x * self.columns + y
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.rows && y < self.columns).then(|| self.cells[self.index(x, y)])
    }

    /// Set cell at position; positions outside the grid are ignored
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        if x < self.rows && y < self.columns {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    /// Count live cells in the Moore neighborhood of (x, y), wrapping
    /// at all four edges. The center cell itself is never counted, even
    /// when an offset wraps back onto it.
    fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let rows = self.rows as i32;
        let columns = self.columns as i32;

        (-1..=1)
            .flat_map(|i| (-1..=1).map(move |j| (i, j)))
            .map(|(i, j)| {
                let nx = ((x as i32 + i) % rows + rows) % rows;
                let ny = ((y as i32 + j) % columns + columns) % columns;
                (nx as usize, ny as usize)
            })
            .filter(|&(nx, ny)| (nx, ny) != (x, y))
            .filter(|&(nx, ny)| self.get(nx, ny).unwrap().is_alive())
            .count() as u8
    }

    /// Pure functional evolution - returns the next generation as a new grid
    pub fn evolve(&self) -> Self {
        let cells = (0..self.rows)
            .flat_map(|x| (0..self.columns).map(move |y| (x, y)))
            .map(|(x, y)| {
                let current = self.get(x, y).unwrap();
                current.evolve(self.count_live_neighbors(x, y))
            })
            .collect();

        Self {
            rows: self.rows,
            columns: self.columns,
            cells,
        }
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |x| (0..self.columns).map(move |y| (x, y)))
            .map(move |(x, y)| (x, y, self.get(x, y).unwrap()))
    }

    /// Count live cells on the whole grid
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
