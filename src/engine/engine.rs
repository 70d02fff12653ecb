use anyhow::Result;
use rand::rngs::StdRng;
use rand::Rng;

use super::options::{EngineOptions, StrategyKind};
use crate::core::{GameConfig, Hand, State};
use crate::heuristics::{Greedy, Rule, RuleTarget};
use crate::solver::{Decision, Exact, Mcts};
use crate::utils::{make_rng, seeded_rng};
use crate::Probability;

/// Engine owns the game configuration and answers analysis queries
/// according to its options.
pub struct Engine {
    pub config: GameConfig,
    pub options: EngineOptions,
}

impl Engine {
    pub fn new(config: GameConfig, options: EngineOptions) -> Self {
        Self { config, options }
    }

    pub(crate) fn rng(&self) -> StdRng {
        match self.options.seed {
            Some(seed) => seeded_rng(seed),
            None => make_rng(),
        }
    }

    /// Exact win probability of `state` under best play.
    pub fn value(&self, state: &State) -> Result<Probability> {
        let mut solver = Exact::new(&self.config);
        Ok(solver.value(state)?)
    }

    /// Recommended play for `state` holding `hand`.
    pub fn decide(&self, state: &State, hand: &Hand) -> Result<Decision> {
        let mut rng = self.rng();
        let mut exact = Exact::new(&self.config);
        self.decide_with(&mut exact, state, hand, &mut rng)
    }

    /// Decision with caller-owned exact solver and generator, so
    /// self-play keeps the memo and the card stream across moves.
    pub(crate) fn decide_with(
        &self,
        exact: &mut Exact<'_>,
        state: &State,
        hand: &Hand,
        rng: &mut StdRng,
    ) -> Result<Decision> {
        let decision = match self.options.strategy {
            StrategyKind::Exact => exact.best_action(state, hand)?,
            StrategyKind::Mcts => {
                let seed: u64 = rng.random();
                let mut mcts = Mcts::with_rng(&self.config, state.clone(), seeded_rng(seed))?;
                mcts.search(self.options.iterations);
                mcts.best_action(hand)?
            }
            StrategyKind::Greedy => Greedy::decide(&self.config, state, hand)?,
            StrategyKind::RuleFront => {
                Rule::new(RuleTarget::Front).decide(&self.config, state, hand, rng)?
            }
            StrategyKind::RuleBack => {
                Rule::new(RuleTarget::Back).decide(&self.config, state, hand, rng)?
            }
        };
        Ok(decision)
    }
}
