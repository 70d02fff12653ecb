use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::{Action, Card, Color, GameConfig, Hand, State};
use crate::error::Result;
use crate::solver::Decision;

/// Which owl the rule moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleTarget {
    /// The unnested owl furthest along the track.
    Front,
    /// The unnested owl furthest behind.
    Back,
}

/// Moves one fixed owl, chosen by a positional rule, with a random color
/// card from the hand.
pub struct Rule {
    pub target: RuleTarget,
}

impl Rule {
    pub fn new(target: RuleTarget) -> Self {
        Self { target }
    }

    /// A sun in hand must be played and scores zero cells. Otherwise the
    /// card is drawn uniformly per held copy, so duplicates weigh more.
    pub fn decide(
        &self,
        config: &GameConfig,
        state: &State,
        hand: &Hand,
        rng: &mut StdRng,
    ) -> Result<Decision> {
        state.require_playable(config)?;

        if hand.has_sun() {
            let next = state.apply(config, &Action::Sun);
            return Ok(Decision {
                action: Action::Sun,
                state: next,
                score: 0.0,
            });
        }

        let nest = config.board.nest();
        let mut owl: Option<usize> = None;
        for (idx, &pos) in state.owls().iter().enumerate() {
            if pos == nest {
                continue;
            }
            let better = match (self.target, owl) {
                (_, None) => true,
                (RuleTarget::Front, Some(best)) => pos > state.owls()[best],
                (RuleTarget::Back, Some(best)) => pos < state.owls()[best],
            };
            if better {
                owl = Some(idx);
            }
        }
        let owl = owl.expect("a running game has an unnested owl");

        let colors: Vec<Color> = hand
            .cards()
            .filter_map(|card| match card {
                Card::Color(color) => Some(color),
                Card::Sun => None,
            })
            .collect();
        let color = *colors.choose(rng).expect("a sunless hand holds color cards");

        let from = state.owls()[owl];
        let to = config
            .board
            .destination(from, color, state.owls())
            .expect("the track always ends in the nest");
        let action = Action::Move { card: color, owl, to };
        let next = state.apply(config, &action);
        Ok(Decision {
            action,
            state: next,
            score: (to - from) as f64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::seeded_rng;

    #[test]
    fn test_front_moves_the_leader() {
        let config = GameConfig::default();
        let state = State::new(vec![5, 20, 12], 0);
        // A single-color hand makes the card choice deterministic.
        let hand: Hand = "red,red,red".parse().unwrap();
        let rule = Rule::new(RuleTarget::Front);
        let decision = rule
            .decide(&config, &state, &hand, &mut seeded_rng(3))
            .unwrap();
        assert_eq!(
            decision.action,
            Action::Move {
                card: Color::Red,
                owl: 1,
                to: 26
            }
        );
        assert_eq!(decision.score, 6.0);
    }

    #[test]
    fn test_back_moves_the_straggler() {
        let config = GameConfig::default();
        let state = State::new(vec![5, 20, 12], 0);
        let hand: Hand = "red,red,red".parse().unwrap();
        let rule = Rule::new(RuleTarget::Back);
        let decision = rule
            .decide(&config, &state, &hand, &mut seeded_rng(3))
            .unwrap();
        assert_eq!(
            decision.action,
            Action::Move {
                card: Color::Red,
                owl: 0,
                to: 8
            }
        );
        assert_eq!(decision.score, 3.0);
    }

    #[test]
    fn test_nested_owls_are_skipped() {
        let config = GameConfig::default();
        let state = State::new(vec![39, 20, 12], 0);
        let hand: Hand = "blue,blue,blue".parse().unwrap();
        let front = Rule::new(RuleTarget::Front)
            .decide(&config, &state, &hand, &mut seeded_rng(3))
            .unwrap();
        let back = Rule::new(RuleTarget::Back)
            .decide(&config, &state, &hand, &mut seeded_rng(3))
            .unwrap();
        match (front.action, back.action) {
            (Action::Move { owl: f, .. }, Action::Move { owl: b, .. }) => {
                assert_eq!(f, 1);
                assert_eq!(b, 2);
            }
            other => panic!("unexpected actions: {:?}", other),
        }
    }

    #[test]
    fn test_sun_is_forced() {
        let config = GameConfig::default();
        let state = State::new(vec![5, 20, 12], 3);
        let hand: Hand = "sun,sun,sun".parse().unwrap();
        let rule = Rule::new(RuleTarget::Front);
        let decision = rule
            .decide(&config, &state, &hand, &mut seeded_rng(3))
            .unwrap();
        assert_eq!(decision.action, Action::Sun);
        assert_eq!(decision.state.sun(), 4);
    }
}
