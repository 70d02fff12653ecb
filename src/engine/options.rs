/// Configuration options for the engine
use anyhow::bail;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Exact,
    Mcts,
    Greedy,
    RuleFront,
    RuleBack,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Exact => "exact",
            StrategyKind::Mcts => "mcts",
            StrategyKind::Greedy => "greedy",
            StrategyKind::RuleFront => "rule-front",
            StrategyKind::RuleBack => "rule-back",
        }
    }
}

impl FromStr for StrategyKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(StrategyKind::Exact),
            "mcts" => Ok(StrategyKind::Mcts),
            "greedy" => Ok(StrategyKind::Greedy),
            "rule-front" => Ok(StrategyKind::RuleFront),
            "rule-back" => Ok(StrategyKind::RuleBack),
            _ => bail!("Unknown strategy: {}", s),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    /// The strategy answering decision queries
    pub strategy: StrategyKind,
    /// Tree-search passes per decision (tree search only)
    pub iterations: u64,
    /// Fixed seed for reproducible searches and deals
    pub seed: Option<u64>,
}

impl EngineOptions {
    pub fn new(strategy: StrategyKind, iterations: u64, seed: Option<u64>) -> Self {
        Self {
            strategy,
            iterations,
            seed,
        }
    }
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Exact,
            iterations: 10_000,
            seed: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip() {
        for name in ["exact", "mcts", "greedy", "rule-front", "rule-back"] {
            let kind: StrategyKind = name.parse().unwrap();
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        assert!("alphazero".parse::<StrategyKind>().is_err());
    }
}
