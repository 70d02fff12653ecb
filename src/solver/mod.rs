//! Decision engines: the exact solver and Monte Carlo tree search.

pub mod exact;
pub mod mcts;

pub use exact::Exact;
pub use mcts::{Mcts, NodeStats};

use crate::core::{Action, State};

/// A recommended play: the action, the position it leads to, and the
/// strategy's own score for it. The score is a win probability for the
/// exact solver, a visit count for the tree search, and cells of forward
/// progress for the quick baselines.
#[derive(Debug, Clone)]
pub struct Decision {
    pub action: Action,
    pub state: State,
    pub score: f64,
}
