// Domain layer - grid, colour and motion logic
pub mod domain;

// Application layer - frame pacing and the Game of Life state
pub mod application;

// Configuration and errors
pub mod config;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, CellGeometry, ColorCycle, Grid, Rgba};
pub use application::{FrameClock, GameState, InputEvent};
pub use config::EngineConfig;
pub use error::LessonError;
