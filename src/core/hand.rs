use super::card::Card;
use crate::error::{Error, Result};
use hashbag::HashBag;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Cards a player holds at once.
pub const HAND_SIZE: usize = 3;

/// A hand: a multiset of exactly [`HAND_SIZE`] cards.
#[derive(Debug, Clone)]
pub struct Hand {
    cards: HashBag<Card>,
}

impl Hand {
    pub fn new(cards: impl IntoIterator<Item = Card>) -> Result<Self> {
        let cards: HashBag<Card> = cards.into_iter().collect();
        if cards.len() != HAND_SIZE {
            return Err(Error::InvalidInput(format!(
                "a hand holds exactly {} cards, got {}",
                HAND_SIZE,
                cards.len()
            )));
        }
        Ok(Self { cards })
    }

    /// Draw a fresh hand with full-deck weights.
    pub fn draw(rng: &mut impl Rng) -> Self {
        let cards = (0..HAND_SIZE).map(|_| Card::sample(rng)).collect();
        Self { cards }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card) > 0
    }

    pub fn has_sun(&self) -> bool {
        self.contains(Card::Sun)
    }

    /// Swap a played card for a newly drawn one, keeping the hand full.
    pub fn replace(&mut self, played: Card, drawn: Card) -> Result<()> {
        if self.cards.remove(&played) == 0 {
            return Err(Error::InvalidInput(format!(
                "cannot play {}: not in hand",
                played.name()
            )));
        }
        self.cards.insert(drawn);
        Ok(())
    }

    /// Cards in canonical deck order, one entry per copy held.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        Card::all()
            .into_iter()
            .flat_map(move |card| std::iter::repeat(card).take(self.cards.contains(&card)))
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parse `"red,blue,sun"`.
    fn from_str(s: &str) -> Result<Self> {
        let mut cards = Vec::new();
        for tok in s.split(',') {
            cards.push(tok.trim().parse::<Card>()?);
        }
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for card in self.cards() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{}", card.name())?;
            first = false;
        }
        Ok(())
    }
}
