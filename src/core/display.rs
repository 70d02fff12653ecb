use std::fmt;

use colored::{ColoredString, Colorize};

use super::{
    action::Action,
    board::Cell,
    card::{Card, Color},
    game::GameConfig,
    state::State,
};

fn paint(color: Color, text: &str) -> ColoredString {
    match color {
        Color::Blue => text.bright_blue(),
        Color::Purple => text.bright_magenta(),
        Color::Red => text.bright_red(),
        Color::Yellow => text.bright_yellow(),
        Color::Green => text.bright_green(),
        Color::Orange => text.truecolor(255, 140, 0),
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", paint(*self, self.name()))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Card::Color(color) => write!(f, "{}", color),
            Card::Sun => write!(f, "{}", "sun".bright_yellow().bold()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Color(color) => write!(f, "{}", paint(*color, "■")),
            Cell::Nest => write!(f, "{}", "N".bold()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Owls are numbered from one in messages.
        match self {
            Action::Sun => write!(f, "advance the sun"),
            Action::Move { card, owl, to } => {
                write!(f, "move owl {} using {} to cell {}", owl + 1, card, to)
            }
        }
    }
}

/// Multi-line rendering of the track with owls and the sun.
pub fn render(config: &GameConfig, state: &State) -> String {
    const ROW: usize = 20;
    let board = &config.board;
    let nest = board.nest();
    let mut out = String::new();

    for row_start in (0..board.len()).step_by(ROW) {
        let row_end = (row_start + ROW).min(board.len());
        out.push_str(&format!("{:3}  ", row_start));
        for idx in row_start..row_end {
            let idx = idx as u8;
            let owl_here = state
                .owls()
                .iter()
                .position(|&pos| pos == idx && pos != nest);
            let glyph = match (owl_here, board.cell(idx)) {
                (Some(owl), Cell::Color(color)) => {
                    paint(color, &(owl + 1).to_string()).bold().to_string()
                }
                (_, cell) => cell.to_string(),
            };
            out.push_str(&glyph);
        }
        out.push('\n');
    }

    let nested = state.owls().iter().filter(|&&pos| pos == nest).count();
    out.push_str(&format!("nest {} of {} owls\n", nested, state.owls().len()));
    out.push_str(&format!(
        "sun  {}{} {}/{}\n",
        "#".repeat(state.sun() as usize),
        ".".repeat((config.sun_max() - state.sun()) as usize),
        state.sun(),
        config.sun_max()
    ));
    out
}
