use crate::core::{color_actions, Action, Card, GameConfig, Hand, State};
use crate::error::Result;
use crate::solver::Decision;

/// Flies whichever owl travels the most cells.
pub struct Greedy;

impl Greedy {
    /// Ties go to the first candidate in canonical card order, owls in
    /// index order. A sun in hand must be played; it scores zero cells.
    pub fn decide(config: &GameConfig, state: &State, hand: &Hand) -> Result<Decision> {
        state.require_playable(config)?;

        if hand.has_sun() {
            let next = state.apply(config, &Action::Sun);
            return Ok(Decision {
                action: Action::Sun,
                state: next,
                score: 0.0,
            });
        }

        let mut best: Option<Decision> = None;
        for card in Card::all() {
            if !hand.contains(card) {
                continue;
            }
            let color = match card {
                Card::Color(color) => color,
                Card::Sun => continue,
            };
            for action in color_actions(config, state, color) {
                if let Action::Move { owl, to, .. } = action {
                    let progress = (to - state.owls()[owl]) as f64;
                    if best.as_ref().map_or(true, |b| progress > b.score) {
                        let next = state.apply(config, &action);
                        best = Some(Decision {
                            action,
                            state: next,
                            score: progress,
                        });
                    }
                }
            }
        }
        // The track ends in the nest, so color cards always have a move.
        Ok(best.expect("a sunless hand still has a move"))
    }
}
