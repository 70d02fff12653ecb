//! Hoot - solvers for the Hoot Owl Hoot cooperative race game

pub mod core;
pub mod engine;
pub mod error;
pub mod heuristics;
pub mod solver;
pub mod utils;

/// Win probabilities and search rewards are plain floats.
pub type Probability = f64;

// Re-export commonly used items
pub use crate::core::{Card, Color, GameConfig, Hand, State};
pub use crate::engine::{Engine, EngineOptions, StrategyKind};
pub use crate::error::{Error, Result};
pub use crate::solver::{Decision, Exact, Mcts};
