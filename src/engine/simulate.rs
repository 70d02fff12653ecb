use std::fmt;

use anyhow::Result;

use super::engine::Engine;
use crate::core::{Card, Hand, State};
use crate::solver::Exact;

/// Outcome tally of a self-play run.
#[derive(Debug, Clone, Copy)]
pub struct SimReport {
    pub games: u32,
    pub wins: u32,
}

impl SimReport {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} wins in {} games ({:.1}%)",
            self.wins,
            self.games,
            self.win_rate() * 100.0
        )
    }
}

impl Engine {
    /// Play `games` full games from `start`, deciding every move with the
    /// engine's strategy over freshly dealt hands, and tally the wins.
    /// The exact memo and the card stream persist across games.
    pub fn simulate(&self, start: &State, games: u32) -> Result<SimReport> {
        start.validate(&self.config)?;

        let mut rng = self.rng();
        let mut exact = Exact::new(&self.config);
        let mut wins = 0;

        for game in 0..games {
            let mut state = start.clone();
            let mut hand = Hand::draw(&mut rng);
            while !state.is_terminal(&self.config) {
                let decision = self.decide_with(&mut exact, &state, &hand, &mut rng)?;
                hand.replace(decision.action.card(), Card::sample(&mut rng))?;
                state = decision.state;
            }
            let won = state.is_win(&self.config);
            if won {
                wins += 1;
            }
            log::debug!("game {}: {}", game + 1, if won { "win" } else { "loss" });
        }

        Ok(SimReport { games, wins })
    }
}
