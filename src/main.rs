use anyhow::Result;
use clap::{Parser, Subcommand};

use hoot::core::{render, Action};
use hoot::{Engine, EngineOptions, GameConfig, Hand, State, StrategyKind};

#[derive(Parser)]
#[command(
    name = "hoot",
    version,
    about = "Solvers for the Hoot Owl Hoot cooperative race game"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Exact win probability of a position
    Value {
        /// Position as "p0,p1,...,sun", e.g. "5,12,39,3"
        state: String,
    },
    /// Recommended play for a position and a three-card hand
    Best {
        /// Position as "p0,p1,...,sun"
        state: String,
        /// Hand as "card,card,card", e.g. "red,blue,sun"
        #[arg(long)]
        hand: String,
        /// exact, mcts, greedy, rule-front or rule-back
        #[arg(long, default_value = "exact")]
        strategy: String,
        /// Search passes before answering (mcts only)
        #[arg(long, default_value_t = 10_000)]
        iterations: u64,
        /// Fixed seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Measure a strategy's win rate by self-play
    Simulate {
        /// Starting position as "p0,p1,...,sun"
        state: String,
        #[arg(long, default_value_t = 1000)]
        games: u32,
        /// exact, mcts, greedy, rule-front or rule-back
        #[arg(long, default_value = "exact")]
        strategy: String,
        /// Search passes per move (mcts only)
        #[arg(long, default_value_t = 10_000)]
        iterations: u64,
        /// Fixed seed for reproducible runs
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Render the track and a position
    Show {
        /// Position as "p0,p1,...,sun"
        state: String,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    let config = GameConfig::default();

    match cli.command {
        Command::Value { state } => {
            let state: State = state.parse()?;
            let engine = Engine::new(config, EngineOptions::default());
            let value = engine.value(&state)?;
            println!("win probability {:.4}", value);
        }
        Command::Best {
            state,
            hand,
            strategy,
            iterations,
            seed,
        } => {
            let state: State = state.parse()?;
            let hand: Hand = hand.parse()?;
            let strategy: StrategyKind = strategy.parse()?;
            let engine = Engine::new(config, EngineOptions::new(strategy, iterations, seed));
            let decision = engine.decide(&state, &hand)?;
            if decision.action == Action::Sun {
                println!("sun card in hand; it must be played");
            }
            let score = match strategy {
                StrategyKind::Exact => format!("win probability {:.4}", decision.score),
                StrategyKind::Mcts => format!("{} visits", decision.score as u64),
                _ => format!("{} cells of progress", decision.score as u64),
            };
            println!(
                "best play: {}, reaching {} ({})",
                decision.action, decision.state, score
            );
        }
        Command::Simulate {
            state,
            games,
            strategy,
            iterations,
            seed,
        } => {
            let state: State = state.parse()?;
            let strategy: StrategyKind = strategy.parse()?;
            let engine = Engine::new(config, EngineOptions::new(strategy, iterations, seed));
            let report = engine.simulate(&state, games)?;
            println!("strategy {}: {}", strategy, report);
        }
        Command::Show { state } => {
            let state: State = state.parse()?;
            state.validate(&config)?;
            print!("{}", render(&config, &state));
        }
    }

    Ok(())
}
