// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Session lifecycle and coordination
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use application::Session;
pub use domain::{Cell, EngineError, GenerationEngine, Grid};
pub use ui::{Button, Stepper};
