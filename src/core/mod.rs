//! Core game model and rules.

pub mod action;
pub mod board;
pub mod card;
pub mod display;
pub mod game;
pub mod hand;
pub mod moves;
pub mod state;

pub use action::Action;
pub use board::{Board, Cell};
pub use card::{Card, Color};
pub use display::render;
pub use game::GameConfig;
pub use hand::{Hand, HAND_SIZE};
pub use moves::{card_actions, color_actions, legal_actions};
pub use state::{State, StateKey};
