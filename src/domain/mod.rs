mod cell;
mod engine;
mod grid;

pub use cell::Cell;
pub use engine::{EngineError, GenerationEngine};
pub use grid::Grid;
