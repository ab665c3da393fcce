// tests/integration_game.rs
//! Round lifecycle: presentation, convergence, stale input, aborts, restarts.

use std::fs;
use twochoice_core::events::{EventLogger, GameEvent, TwoChoiceEvent};
use twochoice_core::game::{GameLoop, GameState, Side, Transition};
use twochoice_core::graph::{NodeId, PreferenceGraph};
use twochoice_core::item::Item;

// --- Helpers ---

fn items(names: &[&str]) -> Vec<Item> {
    names.iter().map(|n| Item::new(*n, "")).collect()
}

fn letters(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item{i:02}")).collect()
}

fn pool_of(names: &[String]) -> Vec<Item> {
    names.iter().map(|n| Item::new(n.as_str(), "")).collect()
}

/// Answers every pair according to `rank` (lower index = more preferred).
fn play_out(game: &mut GameLoop, rank: &dyn Fn(&str) -> usize) -> usize {
    let mut asked = 0;
    while let Some(pair) = game.current_pair() {
        let (left, right) = game.current_items().unwrap();
        let side = if rank(&left.name) < rank(&right.name) {
            Side::Left
        } else {
            Side::Right
        };
        asked += 1;
        assert_ne!(game.submit(pair, side), Transition::Ignored);
        assert!(asked < 1000, "loop did not converge");
    }
    asked
}

fn final_names(game: &GameLoop) -> Vec<String> {
    game.order()
        .unwrap()
        .into_iter()
        .map(|i| i.name.clone())
        .collect()
}

// --- Scenarios ---

#[test]
fn test_abc_converges_to_hidden_ranking() {
    let mut game = GameLoop::new(items(&["A", "B", "C"]), 10, Some(1)).unwrap();
    let graph = PreferenceGraph::new(items(&["A", "B", "C"]));
    assert!(matches!(game.start_with_graph(graph), Transition::Presented(_)));
    assert_eq!(game.state(), GameState::Active);

    let asked = play_out(&mut game, &|name| match name {
        "A" => 0,
        "B" => 1,
        _ => 2,
    });

    assert_eq!(game.state(), GameState::Resolved);
    assert!((2..=3).contains(&asked), "{asked}");
    assert_eq!(final_names(&game), vec!["A", "B", "C"]);
    assert_eq!(game.top_item().unwrap().name, "A");
}

#[test]
fn test_cyclic_graph_aborts() {
    let mut graph = PreferenceGraph::new(items(&["A", "B", "C"]));
    let (a, b, c) = (
        graph.find("A").unwrap(),
        graph.find("B").unwrap(),
        graph.find("C").unwrap(),
    );
    graph.add_edge(a, b);
    graph.add_edge(b, c);
    graph.add_edge(c, a);

    let mut game = GameLoop::new(items(&["A"]), 10, Some(1)).unwrap();
    assert_eq!(game.start_with_graph(graph), Transition::Aborted);
    assert_eq!(game.state(), GameState::Aborted);
    assert_eq!(game.cycle().unwrap(), &["A", "B", "C", "A"]);
    assert!(game.current_pair().is_none());
    assert!(game.order().is_none());
    assert!(game.top_item().is_none());
}

#[test]
fn test_comparisons_stay_within_bounds() {
    let names = letters(10);
    let max = 10 * 9 / 2;
    let mut hidden = names.clone();
    hidden.sort();
    hidden.reverse();
    let rank = |name: &str| hidden.iter().position(|n| n == name).unwrap();

    for seed in 0..25 {
        let mut game = GameLoop::new(pool_of(&names), 10, Some(seed)).unwrap();
        game.start();

        let asked = play_out(&mut game, &rank);
        assert_eq!(game.state(), GameState::Resolved);
        assert!(asked >= 9, "seed {seed}: {asked}");
        assert!(asked <= max, "seed {seed}: {asked}");
        assert_eq!(game.comparisons(), asked);
        assert_eq!(final_names(&game), hidden, "seed {seed}");
    }
}

#[test]
fn test_consistent_chain_needs_n_minus_one() {
    let names = letters(10);
    let mut game = GameLoop::new(pool_of(&names), 10, Some(9)).unwrap();
    game.start_with_graph(PreferenceGraph::new(pool_of(&names)));

    // Unrelated nodes start in reverse creation order; ranking them that way
    // confirms every pair without moving anything.
    let mut hidden = names.clone();
    hidden.reverse();
    let asked = play_out(&mut game, &|name| {
        hidden.iter().position(|n| n == name).unwrap()
    });
    assert_eq!(asked, 9);
    assert_eq!(final_names(&game), hidden);
}

#[test]
fn test_stale_and_out_of_state_input_is_ignored() {
    let mut game = GameLoop::new(items(&["A", "B", "C"]), 10, Some(3)).unwrap();
    let some_pair = (
        PreferenceGraph::new(items(&["x", "y"])).find("x").unwrap(),
        PreferenceGraph::new(items(&["x", "y"])).find("y").unwrap(),
    );
    assert_eq!(game.submit(some_pair, Side::Left), Transition::Ignored);
    assert_eq!(game.state(), GameState::Idle);

    let Transition::Presented(pair) = game.start() else {
        panic!("three items must present a pair");
    };
    assert_eq!(game.start(), Transition::Ignored);

    let reversed: (NodeId, NodeId) = (pair.1, pair.0);
    assert_eq!(game.submit(reversed, Side::Left), Transition::Ignored);
    assert_eq!(game.comparisons(), 0);
    assert_eq!(game.current_pair(), Some(pair));
    assert_eq!(game.graph().unwrap().edge_count(), 0);

    play_out(&mut game, &|name| name.len());
    assert_eq!(game.state(), GameState::Resolved);
    let done = game.comparisons();
    assert_eq!(game.submit(pair, Side::Right), Transition::Ignored);
    assert_eq!(game.comparisons(), done);
}

#[test]
fn test_restart_only_after_round_ends() {
    let mut game = GameLoop::new(pool_of(&letters(6)), 4, Some(8)).unwrap();
    assert_eq!(game.restart(), Transition::Ignored);

    game.start();
    assert_eq!(game.state(), GameState::Active);
    assert_eq!(game.restart(), Transition::Ignored);
    assert_eq!(game.graph().unwrap().len(), 4);

    play_out(&mut game, &|name| name.len());
    assert_eq!(game.state(), GameState::Resolved);

    assert!(matches!(game.restart(), Transition::Presented(_)));
    assert_eq!(game.state(), GameState::Active);
    assert_eq!(game.comparisons(), 0);
    assert_eq!(game.graph().unwrap().edge_count(), 0);
}

#[test]
fn test_reset_cancels_a_round() {
    let mut game = GameLoop::new(pool_of(&letters(5)), 5, Some(2)).unwrap();
    game.start();
    game.reset();
    assert_eq!(game.state(), GameState::Idle);
    assert!(game.graph().is_none());
    assert!(matches!(game.start(), Transition::Presented(_)));
}

#[test]
fn test_sample_size_is_clamped_to_pool() {
    let mut game = GameLoop::new(items(&["A", "B"]), 10, Some(4)).unwrap();
    game.start();
    assert_eq!(game.graph().unwrap().len(), 2);
}

#[test]
fn test_event_log_records_the_round() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("events.jsonl");

    let mut game = GameLoop::new(items(&["A", "B", "C"]), 10, Some(6)).unwrap();
    game.add_observer(Box::new(EventLogger::at(log_path.clone())));
    game.start();
    let asked = play_out(&mut game, &|name| name.len());

    let content = fs::read_to_string(&log_path).unwrap();
    let events: Vec<GameEvent> = content
        .lines()
        .map(|l| serde_json::from_str::<TwoChoiceEvent>(l).unwrap().kind)
        .collect();

    assert!(matches!(events.first(), Some(GameEvent::RoundStarted { items }) if items.len() == 3));
    let presented = events
        .iter()
        .filter(|e| matches!(e, GameEvent::PairPresented { .. }))
        .count();
    assert_eq!(presented, asked);

    let top = game.top_item().unwrap().clone();
    assert_eq!(events.last(), Some(&GameEvent::RoundFinished { top }));
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::OrderResolved { comparisons, .. } if *comparisons == asked)));
}
