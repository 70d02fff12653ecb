//! Monte Carlo tree search with UCB1 selection.
//!
//! The tree is a transposition table keyed by canonical position:
//! positions reached along different move orders share one node and one
//! statistic.

use std::collections::HashMap;

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::{card_actions, legal_actions, Action, Card, GameConfig, Hand, State, StateKey};
use crate::error::{Error, Result};
use crate::solver::Decision;
use crate::utils::make_rng;

/// Visit and reward tallies of one tree node.
#[derive(Debug, Clone, Copy, Default)]
pub struct NodeStats {
    pub visits: u32,
    /// Summed terminal rewards of every pass through this node.
    pub reward: f64,
}

impl NodeStats {
    pub fn mean(&self) -> f64 {
        if self.visits == 0 {
            0.0
        } else {
            self.reward / self.visits as f64
        }
    }

    /// Upper confidence bound steering selection. Every node reachable by
    /// selection has been visited at least once.
    fn uct(&self, ln_parent: f64) -> f64 {
        debug_assert!(self.visits > 0);
        self.mean() + (2.0 * ln_parent / self.visits as f64).sqrt()
    }

    fn update(&mut self, reward: f64) {
        self.visits += 1;
        self.reward += reward;
    }
}

/// UCT searcher rooted at a fixed position.
pub struct Mcts<'a> {
    config: &'a GameConfig,
    root: State,
    nodes: HashMap<StateKey, NodeStats>,
    rng: StdRng,
}

impl<'a> Mcts<'a> {
    pub fn new(config: &'a GameConfig, root: State) -> Result<Self> {
        Self::with_rng(config, root, make_rng())
    }

    /// Searcher with a caller-supplied generator, for reproducible runs.
    pub fn with_rng(config: &'a GameConfig, root: State, rng: StdRng) -> Result<Self> {
        root.validate(config)?;
        let mut nodes = HashMap::new();
        nodes.insert(root.key(), NodeStats::default());
        Ok(Self {
            config,
            root,
            nodes,
            rng,
        })
    }

    pub fn root(&self) -> &State {
        &self.root
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Tallies for a position, if the search has reached it.
    pub fn stats(&self, state: &State) -> Option<NodeStats> {
        self.nodes.get(&state.key()).copied()
    }

    /// Run `iterations` select/expand/play-out/backpropagate passes.
    pub fn search(&mut self, iterations: u64) {
        for _ in 0..iterations {
            self.run_iteration();
        }
        log::debug!(
            "tree holds {} nodes after {} iterations",
            self.nodes.len(),
            iterations
        );
    }

    /// One search pass. Selection descends by UCB while every successor
    /// of the current node is in the tree; the first node with an unseen
    /// successor adopts one at random and plays out from it. Reaching a
    /// terminal node scores it directly. Every node on the walked path
    /// absorbs the single shared reward.
    pub fn run_iteration(&mut self) {
        let mut path = vec![self.root.clone()];
        let mut state = self.root.clone();

        let reward = loop {
            if state.is_terminal(self.config) {
                break terminal_reward(self.config, &state);
            }

            let successors: Vec<State> = legal_actions(self.config, &state)
                .iter()
                .map(|action| state.apply(self.config, action))
                .collect();

            let unseen: Vec<&State> = successors
                .iter()
                .filter(|next| !self.nodes.contains_key(&next.key()))
                .collect();

            if let Some(&pick) = unseen.choose(&mut self.rng) {
                let child = pick.clone();
                self.nodes.insert(child.key(), NodeStats::default());
                path.push(child.clone());
                break self.play_out(child);
            }

            state = self.select(&state, successors);
            path.push(state.clone());
        };

        for state in &path {
            self.nodes
                .get_mut(&state.key())
                .expect("path nodes are in the tree")
                .update(reward);
        }
    }

    /// Highest-UCB successor; ties go to the first in action order.
    fn select(&self, parent: &State, successors: Vec<State>) -> State {
        let ln_parent = (self.nodes[&parent.key()].visits as f64).ln();
        let mut best: Option<(f64, State)> = None;
        for next in successors {
            let uct = self.nodes[&next.key()].uct(ln_parent);
            if best.as_ref().map_or(true, |(b, _)| uct > *b) {
                best = Some((uct, next));
            }
        }
        best.expect("a running game always has a successor").1
    }

    /// Uniform random play-out to the end of the game.
    fn play_out(&mut self, mut state: State) -> f64 {
        while !state.is_terminal(self.config) {
            let actions = legal_actions(self.config, &state);
            let action = actions
                .choose(&mut self.rng)
                .expect("a running game always has a move");
            state = state.apply(self.config, action);
        }
        terminal_reward(self.config, &state)
    }

    /// Final recommendation from the root, ranked by visit count among
    /// the hand's candidates. A sun in hand must be played and
    /// short-circuits the choice; otherwise candidates the search never
    /// reached are skipped, and if none remain the search needs more
    /// iterations. Ties go to the first candidate in canonical card
    /// order, owls in index order.
    pub fn best_action(&self, hand: &Hand) -> Result<Decision> {
        self.root.require_playable(self.config)?;

        if hand.has_sun() {
            let next = self.root.apply(self.config, &Action::Sun);
            let visits = self.stats(&next).map_or(0, |stats| stats.visits);
            return Ok(Decision {
                action: Action::Sun,
                state: next,
                score: visits as f64,
            });
        }

        let mut best: Option<Decision> = None;
        for card in Card::all() {
            if !hand.contains(card) {
                continue;
            }
            for action in card_actions(self.config, &self.root, card) {
                let next = self.root.apply(self.config, &action);
                let stats = match self.stats(&next) {
                    Some(stats) if stats.visits > 0 => stats,
                    _ => continue,
                };
                let score = stats.visits as f64;
                if best.as_ref().map_or(true, |b| score > b.score) {
                    best = Some(Decision {
                        action,
                        state: next,
                        score,
                    });
                }
            }
        }
        best.ok_or(Error::InsufficientData)
    }
}

fn terminal_reward(config: &GameConfig, state: &State) -> f64 {
    if state.is_win(config) {
        1.0
    } else {
        0.0
    }
}
