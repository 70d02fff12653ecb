use super::card::{Card, Color};

/// One play: advance the sun, or fly an owl forward with a color card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Spend a sun card; the sun advances one step.
    Sun,
    /// Spend `card` to move owl `owl` to cell `to`.
    Move { card: Color, owl: usize, to: u8 },
}

impl Action {
    /// The card this action spends.
    pub fn card(&self) -> Card {
        match self {
            Action::Sun => Card::Sun,
            Action::Move { card, .. } => Card::Color(*card),
        }
    }
}
