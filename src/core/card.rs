use crate::error::{Error, Result};
use crate::Probability;
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::FromPrimitive;
use rand::Rng;
use std::str::FromStr;

/// Track colors, in canonical deck order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum Color {
    Blue,
    Purple,
    Red,
    Yellow,
    Green,
    Orange,
}

pub const NUM_COLORS: usize = 6;

/// Copies of each color card in the deck.
pub const COLOR_COPIES: u32 = 6;
/// Copies of the sun card in the deck.
pub const SUN_COPIES: u32 = 14;
/// Full deck size: six copies of six colors plus the suns.
pub const DECK_SIZE: u32 = NUM_COLORS as u32 * COLOR_COPIES + SUN_COPIES;

impl Color {
    pub fn all() -> [Color; NUM_COLORS] {
        [
            Color::Blue,
            Color::Purple,
            Color::Red,
            Color::Yellow,
            Color::Green,
            Color::Orange,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
            Color::Orange => "orange",
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "blue" => Ok(Color::Blue),
            "purple" => Ok(Color::Purple),
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            "orange" => Ok(Color::Orange),
            _ => Err(Error::InvalidInput(format!("unknown color: {}", s))),
        }
    }
}

/// One card from the draw deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Card {
    Color(Color),
    Sun,
}

pub const NUM_CARDS: usize = NUM_COLORS + 1;

impl Card {
    /// Canonical deck order: the six colors, then the sun.
    pub fn all() -> [Card; NUM_CARDS] {
        [
            Card::Color(Color::Blue),
            Card::Color(Color::Purple),
            Card::Color(Color::Red),
            Card::Color(Color::Yellow),
            Card::Color(Color::Green),
            Card::Color(Color::Orange),
            Card::Sun,
        ]
    }

    /// Copies of this card in the full deck.
    pub fn deck_count(&self) -> u32 {
        match self {
            Card::Color(_) => COLOR_COPIES,
            Card::Sun => SUN_COPIES,
        }
    }

    /// Chance of drawing this card from a full deck.
    pub fn probability(&self) -> Probability {
        self.deck_count() as Probability / DECK_SIZE as Probability
    }

    /// Draw one card with full-deck weights.
    pub fn sample(rng: &mut impl Rng) -> Card {
        let roll = rng.random_range(0..DECK_SIZE);
        if roll < NUM_COLORS as u32 * COLOR_COPIES {
            let color = Color::from_u32(roll / COLOR_COPIES).expect("color index in range");
            Card::Color(color)
        } else {
            Card::Sun
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Card::Color(color) => color.name(),
            Card::Sun => "sun",
        }
    }
}

impl FromStr for Card {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s == "sun" {
            return Ok(Card::Sun);
        }
        s.parse::<Color>()
            .map(Card::Color)
            .map_err(|_| Error::InvalidInput(format!("unknown card: {}", s)))
    }
}
