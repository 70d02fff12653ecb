use hoot::core::{card_actions, Action, Board, Card, Color, GameConfig, Hand, State};
use hoot::error::Error;
use hoot::solver::{Exact, Mcts};
use hoot::utils::seeded_rng;

#[test]
fn test_unsearched_tree_cannot_recommend() {
    let config = GameConfig::default();
    let root = State::new(vec![36, 37, 38], 12);
    let mcts = Mcts::with_rng(&config, root, seeded_rng(3)).unwrap();
    let hand: Hand = "blue,red,green".parse().unwrap();
    assert!(matches!(mcts.best_action(&hand), Err(Error::InsufficientData)));
}

#[test]
fn test_forced_sun_needs_no_search() {
    let config = GameConfig::default();
    let root = State::new(vec![36, 37, 38], 12);
    let mcts = Mcts::with_rng(&config, root, seeded_rng(3)).unwrap();
    let hand: Hand = "sun,blue,red".parse().unwrap();
    let decision = mcts.best_action(&hand).unwrap();
    assert_eq!(decision.action, Action::Sun);
    assert_eq!(decision.state.sun(), 13);
    assert_eq!(decision.score, 0.0);
}

#[test]
fn test_finds_the_winning_move_at_the_nest() {
    let config = GameConfig::default();
    // One owl a step from home: nesting wins outright, the sun loses.
    let root = State::new(vec![38, 39, 39], 12);
    let mut mcts = Mcts::with_rng(&config, root, seeded_rng(11)).unwrap();
    mcts.search(30);
    let hand: Hand = "red,red,blue".parse().unwrap();
    let decision = mcts.best_action(&hand).unwrap();
    assert_eq!(
        decision.action,
        Action::Move {
            card: Color::Blue,
            owl: 0,
            to: 39
        }
    );
    assert!(decision.state.is_win(&config));
    let mut exact = Exact::new(&config);
    assert_eq!(exact.value(&decision.state).unwrap(), 1.0);
}

#[test]
fn test_recommendation_carries_the_visit_count() {
    let config = GameConfig::default();
    let root = State::new(vec![36, 37, 38], 12);
    let mut mcts = Mcts::with_rng(&config, root.clone(), seeded_rng(21)).unwrap();
    mcts.search(500);
    let hand: Hand = "blue,red,purple".parse().unwrap();
    let decision = mcts.best_action(&hand).unwrap();
    // The score is the chosen successor's visit count, and no other
    // candidate in the hand was visited more often.
    let chosen = mcts.stats(&decision.state).unwrap();
    assert_eq!(decision.score, chosen.visits as f64);
    for card in Card::all() {
        if !hand.contains(card) {
            continue;
        }
        for action in card_actions(&config, &root, card) {
            let next = root.apply(&config, &action);
            if let Some(stats) = mcts.stats(&next) {
                assert!(stats.visits <= chosen.visits);
            }
        }
    }
}

#[test]
fn test_search_agrees_with_the_exact_value_when_converged() {
    // Ten-cell track, owls near home: the winning lines dominate the
    // tree, so the recommended successor's mean reward settles close to
    // its true win probability.
    let board = Board::new(&[
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Purple,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ]);
    let config = GameConfig::new(board, 14);
    let root = State::new(vec![7, 8, 9], 0);
    let mut mcts = Mcts::with_rng(&config, root, seeded_rng(29)).unwrap();
    mcts.search(50_000);

    let hand: Hand = "blue,red,green".parse().unwrap();
    let decision = mcts.best_action(&hand).unwrap();
    let mean = mcts.stats(&decision.state).unwrap().mean();
    let mut exact = Exact::new(&config);
    let value = exact.value(&decision.state).unwrap();
    assert!(
        (mean - value).abs() < 0.05,
        "mean {} strayed from exact value {}",
        mean,
        value
    );
}

#[test]
fn test_same_seed_same_answer() {
    let config = GameConfig::default();
    let root = State::new(vec![5, 12, 20], 3);
    let hand: Hand = "blue,yellow,orange".parse().unwrap();

    let mut first = Mcts::with_rng(&config, root.clone(), seeded_rng(42)).unwrap();
    first.search(300);
    let mut second = Mcts::with_rng(&config, root, seeded_rng(42)).unwrap();
    second.search(300);

    assert_eq!(first.node_count(), second.node_count());
    let a = first.best_action(&hand).unwrap();
    let b = second.best_action(&hand).unwrap();
    assert_eq!(a.action, b.action);
    assert_eq!(a.score, b.score);
}

#[test]
fn test_search_visits_match_iterations() {
    let config = GameConfig::default();
    let root = State::new(vec![0, 1, 2], 0);
    let mut mcts = Mcts::with_rng(&config, root.clone(), seeded_rng(8)).unwrap();
    mcts.search(200);
    assert_eq!(mcts.stats(&root).unwrap().visits, 200);
    assert!(mcts.node_count() > 1);
    assert!(mcts.node_count() <= 201);
}
