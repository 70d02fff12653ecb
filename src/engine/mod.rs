//! Engine: options, decision dispatch, and self-play evaluation.

mod engine;
mod options;
mod simulate;

pub use engine::Engine;
pub use options::{EngineOptions, StrategyKind};
pub use simulate::SimReport;
