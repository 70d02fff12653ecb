use super::action::Action;
use super::game::{GameConfig, MAX_OWLS, MIN_OWLS};
use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// A game position: each owl's cell plus the sun step.
///
/// Owls are identified by their index. Two owls never share a cell before
/// the nest; the nest holds everyone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    owls: Vec<u8>,
    sun: u8,
}

/// Canonical packed form of a [`State`], the key type of the solver
/// tables. Six bits per owl cell, four for the sun step, three for the
/// owl count so positions with different rosters never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StateKey(u64);

impl State {
    pub fn new(owls: Vec<u8>, sun: u8) -> Self {
        Self { owls, sun }
    }

    pub fn owls(&self) -> &[u8] {
        &self.owls
    }

    pub fn sun(&self) -> u8 {
        self.sun
    }

    /// Check the position against the rules: owl count, cell and sun
    /// ranges, and the no-sharing rule for cells before the nest.
    pub fn validate(&self, config: &GameConfig) -> Result<()> {
        let count = self.owls.len();
        if !(MIN_OWLS..=MAX_OWLS).contains(&count) {
            return Err(Error::InvalidState(format!(
                "expected {} to {} owls, got {}",
                MIN_OWLS, MAX_OWLS, count
            )));
        }
        let nest = config.board.nest();
        for &pos in &self.owls {
            if pos > nest {
                return Err(Error::InvalidState(format!(
                    "owl cell {} is off the track (last cell is {})",
                    pos, nest
                )));
            }
        }
        for i in 0..count {
            for j in i + 1..count {
                if self.owls[i] == self.owls[j] && self.owls[i] != nest {
                    return Err(Error::InvalidState(format!(
                        "two owls share cell {}",
                        self.owls[i]
                    )));
                }
            }
        }
        if self.sun > config.sun_max() {
            return Err(Error::InvalidState(format!(
                "sun step {} is past the end of the track ({})",
                self.sun,
                config.sun_max()
            )));
        }
        Ok(())
    }

    /// Validate and additionally require the game to still be running.
    pub fn require_playable(&self, config: &GameConfig) -> Result<()> {
        self.validate(config)?;
        if self.is_terminal(config) {
            return Err(Error::InvalidState(
                "the game is already over, no action possible".into(),
            ));
        }
        Ok(())
    }

    /// The game ends when the sun reaches its final step or every owl is
    /// in the nest.
    pub fn is_terminal(&self, config: &GameConfig) -> bool {
        self.sun == config.sun_max() || self.all_nested(config)
    }

    /// Terminal and won: everyone nested before the sun ran out.
    pub fn is_win(&self, config: &GameConfig) -> bool {
        self.is_terminal(config) && self.sun < config.sun_max()
    }

    pub fn all_nested(&self, config: &GameConfig) -> bool {
        let nest = config.board.nest();
        self.owls.iter().all(|&pos| pos == nest)
    }

    /// Successor position after `action`. Only called on running games;
    /// move generation never offers an action in a finished one.
    pub fn apply(&self, config: &GameConfig, action: &Action) -> State {
        debug_assert!(!self.is_terminal(config));
        match *action {
            Action::Sun => State::new(self.owls.clone(), self.sun + 1),
            Action::Move { owl, to, .. } => {
                let mut owls = self.owls.clone();
                owls[owl] = to;
                State::new(owls, self.sun)
            }
        }
    }

    /// Canonical key; equal positions always produce equal keys.
    pub fn key(&self) -> StateKey {
        let mut packed = 0u64;
        for (idx, &pos) in self.owls.iter().enumerate() {
            debug_assert!(pos < 64);
            packed |= (pos as u64) << (6 * idx);
        }
        debug_assert!(self.sun < 16);
        packed |= (self.sun as u64) << 36;
        packed |= (self.owls.len() as u64) << 40;
        StateKey(packed)
    }
}

impl FromStr for State {
    type Err = Error;

    /// Parse `"p0,p1,...,sun"`: owl cells followed by the sun step.
    fn from_str(s: &str) -> Result<Self> {
        let mut fields = Vec::new();
        for tok in s.split(',') {
            let value: u8 = tok.trim().parse().map_err(|_| {
                Error::InvalidInput(format!("bad state field: {:?}", tok))
            })?;
            fields.push(value);
        }
        match fields.split_last() {
            Some((&sun, owls)) if !owls.is_empty() => Ok(State::new(owls.to_vec(), sun)),
            _ => Err(Error::InvalidInput(
                "a state needs owl cells followed by the sun step".into(),
            )),
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &pos in &self.owls {
            write!(f, "{},", pos)?;
        }
        write!(f, "{}", self.sun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;

    #[test]
    fn test_parse_and_display_round_trip() {
        let state: State = "5,12,39,3".parse().unwrap();
        assert_eq!(state.owls(), &[5, 12, 39]);
        assert_eq!(state.sun(), 3);
        assert_eq!(state.to_string(), "5,12,39,3");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("5,twelve,39,3".parse::<State>().is_err());
        assert!("7".parse::<State>().is_err());
        assert!("".parse::<State>().is_err());
    }

    #[test]
    fn test_validate_ranges() {
        let config = GameConfig::default();
        assert!(State::new(vec![0, 1, 2], 0).validate(&config).is_ok());
        assert!(State::new(vec![0, 1, 40], 0).validate(&config).is_err());
        assert!(State::new(vec![0, 1, 2], 14).validate(&config).is_err());
        assert!(State::new(vec![0, 1], 0).validate(&config).is_err());
        assert!(State::new(vec![0, 1, 2, 3, 4, 5, 6], 0)
            .validate(&config)
            .is_err());
    }

    #[test]
    fn test_validate_shared_cells() {
        let config = GameConfig::default();
        let shared = State::new(vec![10, 10, 5], 0);
        assert!(matches!(
            shared.validate(&config),
            Err(crate::Error::InvalidState(_))
        ));
        // Any number of owls may sit in the nest.
        assert!(State::new(vec![39, 39, 5], 0).validate(&config).is_ok());
    }

    #[test]
    fn test_terminal_and_win() {
        let config = GameConfig::default();
        let lost = State::new(vec![5, 12, 20], 13);
        assert!(lost.is_terminal(&config));
        assert!(!lost.is_win(&config));

        let won = State::new(vec![39, 39, 39], 5);
        assert!(won.is_terminal(&config));
        assert!(won.is_win(&config));

        let running = State::new(vec![5, 12, 20], 12);
        assert!(!running.is_terminal(&config));
    }

    #[test]
    fn test_keys_distinguish_rosters_and_sun() {
        let a = State::new(vec![5, 3, 0], 2).key();
        let b = State::new(vec![5, 3, 0], 3).key();
        let c = State::new(vec![5, 3, 0, 0], 2).key();
        let d = State::new(vec![3, 5, 0], 2).key();
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);
        assert_eq!(a, State::new(vec![5, 3, 0], 2).key());
    }
}
