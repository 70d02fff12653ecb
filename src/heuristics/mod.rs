//! Quick baselines that play without search.

pub mod greedy;
pub mod rule;

pub use greedy::Greedy;
pub use rule::{Rule, RuleTarget};
