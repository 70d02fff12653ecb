//! Exact win-probability solver.
//!
//! A running position's value is the deck-weighted mean, over every card,
//! of the best successor value that card allows. Owl cells and the sun
//! only move forward, so the position graph is acyclic and one backward
//! pass settles every reachable position.

use std::collections::HashMap;

use crate::core::{card_actions, Action, Card, GameConfig, Hand, State, StateKey};
use crate::error::Result;
use crate::solver::Decision;
use crate::Probability;

/// Work items for the explicit post-order walk in [`Exact::value`]. The
/// reduce step of a position always sits below the expansions of its
/// successors, so every successor is settled first.
enum Task {
    Expand(State),
    Reduce(State),
}

/// Memoized exact solver for one game configuration.
pub struct Exact<'a> {
    config: &'a GameConfig,
    memo: HashMap<StateKey, Probability>,
}

impl<'a> Exact<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self {
            config,
            memo: HashMap::new(),
        }
    }

    /// Positions settled so far; the memo persists across queries.
    pub fn memo_size(&self) -> usize {
        self.memo.len()
    }

    /// Win probability of `state` under best play.
    pub fn value(&mut self, state: &State) -> Result<Probability> {
        state.validate(self.config)?;
        let value = self.solve(state);
        log::debug!("value {:.4} for {}, {} positions settled", value, state, self.memo.len());
        Ok(value)
    }

    /// Best play from `state` holding `hand`. A sun in hand must be
    /// played and short-circuits the choice; otherwise ties go to the
    /// first candidate in canonical card order, owls in index order.
    pub fn best_action(&mut self, state: &State, hand: &Hand) -> Result<Decision> {
        state.require_playable(self.config)?;

        if hand.has_sun() {
            let next = state.apply(self.config, &Action::Sun);
            let score = self.solve(&next);
            return Ok(Decision {
                action: Action::Sun,
                state: next,
                score,
            });
        }

        let mut best: Option<Decision> = None;
        for card in Card::all() {
            if !hand.contains(card) {
                continue;
            }
            for action in card_actions(self.config, state, card) {
                let next = state.apply(self.config, &action);
                let score = self.solve(&next);
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Decision {
                        action,
                        state: next,
                        score,
                    });
                }
            }
        }
        // The track ends in the nest, so color cards always have a move.
        Ok(best.expect("a sunless hand still has a move"))
    }

    /// Memoized lookup; walks the unsettled subgraph iteratively so deep
    /// positions cannot overflow the call stack.
    fn solve(&mut self, state: &State) -> Probability {
        if let Some(&value) = self.memo.get(&state.key()) {
            return value;
        }

        let mut tasks = vec![Task::Expand(state.clone())];
        while let Some(task) = tasks.pop() {
            match task {
                Task::Expand(state) => {
                    let key = state.key();
                    if self.memo.contains_key(&key) {
                        continue;
                    }
                    if state.is_terminal(self.config) {
                        let value = if state.is_win(self.config) { 1.0 } else { 0.0 };
                        self.memo.insert(key, value);
                        continue;
                    }
                    tasks.push(Task::Reduce(state.clone()));
                    for card in Card::all() {
                        for action in card_actions(self.config, &state, card) {
                            let next = state.apply(self.config, &action);
                            if !self.memo.contains_key(&next.key()) {
                                tasks.push(Task::Expand(next));
                            }
                        }
                    }
                }
                Task::Reduce(state) => {
                    let value = self.reduce(&state);
                    self.memo.insert(state.key(), value);
                }
            }
        }

        self.memo[&state.key()]
    }

    /// One backward-induction step over settled successors. Deck counts
    /// are summed as integers and divided once, which keeps the result in
    /// [0, 1]. A card with no move neither helps nor hurts, so its copies
    /// drop out of the denominator; the sun always has a move, so the
    /// denominator never reaches zero.
    fn reduce(&self, state: &State) -> Probability {
        let mut weighted = 0.0;
        let mut live_copies = 0u32;
        for card in Card::all() {
            let mut best: Option<Probability> = None;
            for action in card_actions(self.config, state, card) {
                let next = state.apply(self.config, &action);
                let value = self.memo[&next.key()];
                if best.map_or(true, |b| value > b) {
                    best = Some(value);
                }
            }
            if let Some(best) = best {
                weighted += card.deck_count() as Probability * best;
                live_copies += card.deck_count();
            }
        }
        weighted / live_copies as Probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Board, Color};

    #[test]
    fn test_terminal_values() {
        let config = GameConfig::default();
        let mut solver = Exact::new(&config);
        let lost = State::new(vec![5, 12, 20], 13);
        assert_eq!(solver.value(&lost).unwrap(), 0.0);
        let won = State::new(vec![39, 39, 39], 5);
        assert_eq!(solver.value(&won).unwrap(), 1.0);
    }

    #[test]
    fn test_invalid_states_are_rejected() {
        let config = GameConfig::default();
        let mut solver = Exact::new(&config);
        assert!(solver.value(&State::new(vec![10, 10, 5], 0)).is_err());
        assert!(solver.value(&State::new(vec![0, 1, 40], 0)).is_err());
    }

    #[test]
    fn test_memo_reuse() {
        let board = Board::new(&[Color::Red, Color::Green, Color::Blue]);
        let config = GameConfig::new(board, 4);
        let mut solver = Exact::new(&config);
        let state = State::new(vec![0, 1, 2], 0);
        let first = solver.value(&state).unwrap();
        let settled = solver.memo_size();
        let second = solver.value(&state).unwrap();
        assert_eq!(first, second);
        assert_eq!(solver.memo_size(), settled);
        assert!(settled > 0);
    }

    #[test]
    fn test_single_owl_race_values() {
        let config = GameConfig::default();
        let mut solver = Exact::new(&config);
        // One unnested owl: any color nests it, only suns can still lose.
        let last_step = State::new(vec![38, 39, 39], 12);
        assert_eq!(solver.value(&last_step).unwrap(), 36.0 / 50.0);
        let fresh = State::new(vec![38, 39, 39], 0);
        let value = solver.value(&fresh).unwrap();
        assert!(value > 0.9999 && value < 1.0, "value: {}", value);
    }
}
