//! Legal-move enumeration.

use super::action::Action;
use super::card::{Card, Color};
use super::game::GameConfig;
use super::state::State;

/// Moves a single color card allows: one candidate per owl not yet
/// nested. An owl whose forward scan finds no open cell contributes
/// nothing; on a nest-terminated track that never happens.
pub fn color_actions(config: &GameConfig, state: &State, color: Color) -> Vec<Action> {
    let nest = config.board.nest();
    let mut actions = Vec::new();
    for (owl, &pos) in state.owls().iter().enumerate() {
        if pos == nest {
            continue;
        }
        if let Some(to) = config.board.destination(pos, color, state.owls()) {
            actions.push(Action::Move { card: color, owl, to });
        }
    }
    actions
}

/// Actions a specific card allows. Empty means the card cannot be played,
/// which never happens for the sun.
pub fn card_actions(config: &GameConfig, state: &State, card: Card) -> Vec<Action> {
    match card {
        Card::Sun => vec![Action::Sun],
        Card::Color(color) => color_actions(config, state, color),
    }
}

/// Every action legal in a running game: each color's owl moves in
/// canonical card order, then the sun. The sun is always legal.
pub fn legal_actions(config: &GameConfig, state: &State) -> Vec<Action> {
    debug_assert!(!state.is_terminal(config));
    let mut actions = Vec::new();
    for color in Color::all() {
        actions.extend(color_actions(config, state, color));
    }
    actions.push(Action::Sun);
    actions
}
