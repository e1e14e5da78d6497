use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::{Cell, Grid};

/// Errors surfaced by [`GenerationEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Construction was attempted with zero rows or zero columns.
    InvalidArgument(&'static str),
    /// A manual edit mapped to a cell outside the grid. Expected near
    /// the window edge; callers should ignore it.
    OutOfRange { x: i32, y: i32 },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidArgument(what) => write!(f, "invalid argument: {what}"),
            EngineError::OutOfRange { x, y } => {
                write!(f, "cell ({x}, {y}) is outside the grid")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// GenerationEngine owns the grid state, the random initializer, the
/// step-rule evaluator and manual cell edits.
///
/// The engine is single-threaded: every operation is a bounded,
/// synchronous computation, and callers driving it from more than one
/// thread must provide their own locking.
pub struct GenerationEngine {
    grid: Grid,
    generation: u64,
    rng: SmallRng,
}

impl GenerationEngine {
    /// Create an engine with a randomly populated `rows` x `columns` grid.
    ///
    /// Each cell starts alive with probability `1 / density`, so higher
    /// densities give sparser populations. `density` must be at least 1;
    /// a zero density panics in the random draw. The random source is
    /// owned by this engine instance and seeded from OS entropy; use
    /// [`GenerationEngine::with_seed`] for reproducible grids.
    pub fn new(rows: usize, columns: usize, density: u32) -> Result<Self, EngineError> {
        Self::with_rng(rows, columns, density, SmallRng::from_os_rng())
    }

    /// Like [`GenerationEngine::new`], but the random source is seeded
    /// from `seed`, making the initial population reproducible.
    pub fn with_seed(
        rows: usize,
        columns: usize,
        density: u32,
        seed: u64,
    ) -> Result<Self, EngineError> {
        Self::with_rng(rows, columns, density, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(
        rows: usize,
        columns: usize,
        density: u32,
        rng: SmallRng,
    ) -> Result<Self, EngineError> {
        if rows == 0 {
            return Err(EngineError::InvalidArgument("grid needs at least one row"));
        }
        if columns == 0 {
            return Err(EngineError::InvalidArgument(
                "grid needs at least one column",
            ));
        }

        let mut engine = Self {
            grid: Grid::new(rows, columns),
            generation: 0,
            rng,
        };
        engine.seed_cells(density);
        Ok(engine)
    }

    /// Populate the grid from the engine's random source
    fn seed_cells(&mut self, density: u32) {
        let (rows, columns) = self.grid.dimensions();
        for x in 0..rows {
            for y in 0..columns {
                if self.rng.random_range(0..density) == 0 {
                    self.grid.set(x, y, Cell::Alive);
                }
            }
        }
    }

    /// Advance the simulation by exactly one generation.
    ///
    /// Neighbor counts are evaluated against the pre-step grid; the new
    /// grid replaces the old one wholesale once fully computed.
    pub fn step(&mut self) {
        self.grid = self.grid.evolve();
        self.generation += 1;
    }

    /// Deep copy of the current grid state. Mutating the returned grid
    /// has no effect on the engine.
    pub fn snapshot(&self) -> Grid {
        self.grid.clone()
    }

    /// Number of completed steps since construction
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Grid dimensions as (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Mark the cell under the given pixel coordinate alive.
    ///
    /// The pixel coordinate is converted to a grid coordinate by integer
    /// division with `resolution` (which must be non-zero). Re-marking a
    /// live cell is a no-op.
    pub fn set_alive(
        &mut self,
        pixel_x: i32,
        pixel_y: i32,
        resolution: u32,
    ) -> Result<(), EngineError> {
        let (x, y) = self.to_cell(pixel_x, pixel_y, resolution)?;
        self.grid.set(x, y, Cell::Alive);
        Ok(())
    }

    /// Mark the cell under the given pixel coordinate dead.
    ///
    /// Same conversion and error contract as [`GenerationEngine::set_alive`];
    /// clearing a dead cell is a no-op.
    pub fn set_dead(
        &mut self,
        pixel_x: i32,
        pixel_y: i32,
        resolution: u32,
    ) -> Result<(), EngineError> {
        let (x, y) = self.to_cell(pixel_x, pixel_y, resolution)?;
        self.grid.set(x, y, Cell::Dead);
        Ok(())
    }

    /// Translate a pixel coordinate to a grid coordinate, failing when it
    /// falls off the grid (common for mouse events near the window edge)
    fn to_cell(
        &self,
        pixel_x: i32,
        pixel_y: i32,
        resolution: u32,
    ) -> Result<(usize, usize), EngineError> {
        let (rows, columns) = self.grid.dimensions();
        let x = pixel_x / resolution as i32;
        let y = pixel_y / resolution as i32;

        if x < 0 || y < 0 || x as usize >= rows || y as usize >= columns {
            return Err(EngineError::OutOfRange { x, y });
        }
        Ok((x as usize, y as usize))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Kill every cell through the public edit interface
    fn clear(engine: &mut GenerationEngine) {
        let (rows, columns) = engine.dimensions();
        for x in 0..rows {
            for y in 0..columns {
                engine.set_dead(x as i32, y as i32, 1).unwrap();
            }
        }
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        assert!(matches!(
            GenerationEngine::new(0, 10, 2),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(matches!(
            GenerationEngine::new(10, 0, 2),
            Err(EngineError::InvalidArgument(_))
        ));
        assert!(GenerationEngine::new(1, 1, 2).is_ok());
    }

    #[test]
    fn test_density_one_fills_the_grid() {
        let engine = GenerationEngine::with_seed(4, 4, 1, 7).unwrap();
        assert_eq!(engine.snapshot().count_alive(), 16);
    }

    #[test]
    fn test_same_seed_same_population() {
        let a = GenerationEngine::with_seed(20, 30, 3, 42).unwrap();
        let b = GenerationEngine::with_seed(20, 30, 3, 42).unwrap();
        assert!(a.snapshot() == b.snapshot());
    }

    #[test]
    fn test_step_is_deterministic_given_state() {
        let mut a = GenerationEngine::with_seed(20, 30, 3, 42).unwrap();
        let mut b = GenerationEngine::with_seed(20, 30, 3, 42).unwrap();

        for _ in 0..10 {
            a.step();
            b.step();
            assert!(a.snapshot() == b.snapshot());
        }
    }

    #[test]
    fn test_generation_counts_up_from_zero() {
        let mut engine = GenerationEngine::with_seed(10, 10, 2, 1).unwrap();
        assert_eq!(engine.generation(), 0);

        for expected in 1..=5 {
            engine.step();
            assert_eq!(engine.generation(), expected);
        }
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let engine = GenerationEngine::with_seed(10, 10, 2, 1).unwrap();
        let before = engine.snapshot();

        let mut copy = engine.snapshot();
        for x in 0..10 {
            for y in 0..10 {
                copy.set(x, y, Cell::Alive);
            }
        }

        assert!(engine.snapshot() == before);
    }

    #[test]
    fn test_edit_bounds() {
        let mut engine = GenerationEngine::with_seed(10, 10, 2, 1).unwrap();

        assert_eq!(
            engine.set_alive(10, 0, 1),
            Err(EngineError::OutOfRange { x: 10, y: 0 })
        );
        assert_eq!(
            engine.set_alive(0, 10, 1),
            Err(EngineError::OutOfRange { x: 0, y: 10 })
        );
        assert_eq!(
            engine.set_dead(-1, 0, 1),
            Err(EngineError::OutOfRange { x: -1, y: 0 })
        );

        engine.set_alive(9, 9, 1).unwrap();
        assert_eq!(engine.snapshot().get(9, 9), Some(Cell::Alive));
    }

    #[test]
    fn test_edits_scale_by_resolution() {
        let mut engine = GenerationEngine::with_seed(10, 10, 2, 1).unwrap();
        clear(&mut engine);

        // Pixel (25, 7) at resolution 10 lands on cell (2, 0)
        engine.set_alive(25, 7, 10).unwrap();
        assert_eq!(engine.snapshot().get(2, 0), Some(Cell::Alive));

        // Pixel (100, 0) is one cell past the right edge
        assert_eq!(
            engine.set_alive(100, 0, 10),
            Err(EngineError::OutOfRange { x: 10, y: 0 })
        );
    }

    #[test]
    fn test_edits_are_idempotent() {
        let mut engine = GenerationEngine::with_seed(10, 10, 2, 1).unwrap();

        engine.set_alive(3, 3, 1).unwrap();
        engine.set_alive(3, 3, 1).unwrap();
        assert_eq!(engine.snapshot().get(3, 3), Some(Cell::Alive));

        engine.set_dead(3, 3, 1).unwrap();
        engine.set_dead(3, 3, 1).unwrap();
        assert_eq!(engine.snapshot().get(3, 3), Some(Cell::Dead));
    }

    #[test]
    fn test_edits_do_not_advance_the_generation() {
        let mut engine = GenerationEngine::with_seed(10, 10, 2, 1).unwrap();
        engine.set_alive(0, 0, 1).unwrap();
        engine.set_dead(1, 1, 1).unwrap();
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn test_hand_drawn_blinker_oscillates() {
        let mut engine = GenerationEngine::with_seed(5, 5, 2, 9).unwrap();
        clear(&mut engine);

        engine.set_alive(1, 2, 1).unwrap();
        engine.set_alive(2, 2, 1).unwrap();
        engine.set_alive(3, 2, 1).unwrap();
        let drawn = engine.snapshot();

        engine.step();
        let vertical = engine.snapshot();
        assert_eq!(vertical.get(2, 1), Some(Cell::Alive));
        assert_eq!(vertical.get(2, 2), Some(Cell::Alive));
        assert_eq!(vertical.get(2, 3), Some(Cell::Alive));
        assert_eq!(vertical.count_alive(), 3);

        engine.step();
        assert!(engine.snapshot() == drawn);
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn test_hand_drawn_block_is_stable() {
        let mut engine = GenerationEngine::with_seed(6, 6, 2, 9).unwrap();
        clear(&mut engine);

        for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
            engine.set_alive(x, y, 1).unwrap();
        }
        let block = engine.snapshot();

        for _ in 0..10 {
            engine.step();
        }
        assert!(engine.snapshot() == block);
    }
}
