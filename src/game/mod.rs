// src/game/mod.rs
//! The round driver.
//!
//! Each step recomputes the order from scratch, then either presents one
//! ambiguous pair or declares the order final. Transitions all live here;
//! callers only feed comparisons in and read [`GameLoop::state`].

pub mod state;

pub use state::{GameState, Side, Transition};

use crate::error::{Result, TwoChoiceError};
use crate::events::{GameEvent, GameObserver};
use crate::graph::{ambiguity, Pair, PreferenceGraph, TopologicalOrder};
use crate::item::{self, Item};
use rand::rngs::StdRng;
use rand::SeedableRng;

struct Round {
    graph: PreferenceGraph,
    /// Latest valid order; `None` until the first step or after an abort.
    topo: Option<TopologicalOrder>,
    pair: Option<Pair>,
    comparisons: usize,
    cycle: Vec<String>,
}

pub struct GameLoop {
    pool: Vec<Item>,
    sample_size: usize,
    rng: StdRng,
    state: GameState,
    round: Option<Round>,
    observers: Vec<Box<dyn GameObserver>>,
}

impl GameLoop {
    /// Creates an idle loop over `pool`.
    ///
    /// `seed` fixes item sampling and pair choice; `None` draws from entropy.
    ///
    /// # Errors
    /// Returns `EmptyPool` if `pool` is empty.
    pub fn new(pool: Vec<Item>, sample_size: usize, seed: Option<u64>) -> Result<Self> {
        if pool.is_empty() {
            return Err(TwoChoiceError::EmptyPool);
        }
        let rng = match seed {
            Some(value) => StdRng::seed_from_u64(value),
            None => StdRng::from_os_rng(),
        };
        Ok(Self {
            pool,
            sample_size: sample_size.max(1),
            rng,
            state: GameState::Idle,
            round: None,
            observers: Vec::new(),
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Pair awaiting a comparison, as `(left, right)`.
    #[must_use]
    pub fn current_pair(&self) -> Option<Pair> {
        match self.state {
            GameState::Active => self.round.as_ref().and_then(|r| r.pair),
            _ => None,
        }
    }

    /// Items of the pair awaiting a comparison.
    #[must_use]
    pub fn current_items(&self) -> Option<(&Item, &Item)> {
        let (left, right) = self.current_pair()?;
        let graph = self.graph()?;
        Some((graph.item(left)?, graph.item(right)?))
    }

    #[must_use]
    pub fn graph(&self) -> Option<&PreferenceGraph> {
        self.round.as_ref().map(|r| &r.graph)
    }

    /// Comparisons accepted this round.
    #[must_use]
    pub fn comparisons(&self) -> usize {
        self.round.as_ref().map_or(0, |r| r.comparisons)
    }

    /// Final ranking, most preferred first. Only available once resolved.
    #[must_use]
    pub fn order(&self) -> Option<Vec<&Item>> {
        match (self.state, &self.round) {
            (GameState::Resolved, Some(round)) => {
                round.topo.as_ref().map(|topo| topo.items(&round.graph))
            }
            _ => None,
        }
    }

    /// Winner of a resolved round.
    #[must_use]
    pub fn top_item(&self) -> Option<&Item> {
        match (self.state, &self.round) {
            (GameState::Resolved, Some(round)) => {
                round.topo.as_ref()?.top().and_then(|id| round.graph.item(id))
            }
            _ => None,
        }
    }

    /// Names along the cycle that aborted the round, closed at the end.
    #[must_use]
    pub fn cycle(&self) -> Option<&[String]> {
        match (self.state, &self.round) {
            (GameState::Aborted, Some(round)) => Some(&round.cycle),
            _ => None,
        }
    }

    /// Samples a fresh item set and begins a round. Ignored unless idle.
    pub fn start(&mut self) -> Transition {
        if self.state != GameState::Idle {
            return Transition::Ignored;
        }
        let items = item::sample(&self.pool, self.sample_size, &mut self.rng);
        self.begin(PreferenceGraph::new(items))
    }

    /// Begins a round on a prepared graph. Ignored unless idle.
    pub fn start_with_graph(&mut self, graph: PreferenceGraph) -> Transition {
        if self.state != GameState::Idle {
            return Transition::Ignored;
        }
        self.begin(graph)
    }

    /// Records a comparison on the pair the caller was shown.
    ///
    /// Anything other than the current pair while active is ignored.
    pub fn submit(&mut self, pair: Pair, side: Side) -> Transition {
        if self.current_pair() != Some(pair) {
            return Transition::Ignored;
        }
        let Some(round) = self.round.as_mut() else {
            return Transition::Ignored;
        };

        let (preferred, other) = side.split(pair);
        round.graph.add_edge(preferred, other);
        round.comparisons += 1;
        round.pair = None;

        let event = match (round.graph.item(preferred), round.graph.item(other)) {
            (Some(p), Some(o)) => Some(GameEvent::ChoiceRecorded {
                preferred: p.clone(),
                other: o.clone(),
            }),
            _ => None,
        };
        if let Some(event) = event {
            self.emit(&event);
        }
        self.step()
    }

    /// Discards a finished round and starts a new one. Ignored mid-round.
    pub fn restart(&mut self) -> Transition {
        if !self.state.is_terminal() {
            return Transition::Ignored;
        }
        self.reset();
        self.start()
    }

    /// Drops the current round, whatever its state.
    pub fn reset(&mut self) {
        if self.round.take().is_some() {
            self.emit(&GameEvent::RoundReset);
        }
        self.state = GameState::Idle;
    }

    fn begin(&mut self, graph: PreferenceGraph) -> Transition {
        let items: Vec<Item> = graph.nodes().iter().map(|n| n.item().clone()).collect();
        self.round = Some(Round {
            graph,
            topo: None,
            pair: None,
            comparisons: 0,
            cycle: Vec::new(),
        });
        self.state = GameState::Active;
        self.emit(&GameEvent::RoundStarted { items });
        self.step()
    }

    fn step(&mut self) -> Transition {
        let Some(round) = self.round.as_mut() else {
            self.state = GameState::Idle;
            return Transition::Ignored;
        };

        let topo = match TopologicalOrder::compute(&round.graph).into_result(&round.graph) {
            Ok(topo) => topo,
            Err(err) => {
                round.topo = None;
                round.cycle = match err {
                    TwoChoiceError::CyclicGraph { cycle } => cycle,
                    _ => Vec::new(),
                };
                let cycle = round.cycle.clone();
                self.state = GameState::Aborted;
                self.emit(&GameEvent::RoundAborted { cycle });
                return Transition::Aborted;
            }
        };
        let next = ambiguity::random_ambiguous_pair(&topo, &round.graph, &mut self.rng);
        round.topo = Some(topo);

        match next {
            Some(pair) => {
                round.pair = Some(pair);
                let event = match (round.graph.item(pair.0), round.graph.item(pair.1)) {
                    (Some(left), Some(right)) => Some(GameEvent::PairPresented {
                        left: left.clone(),
                        right: right.clone(),
                    }),
                    _ => None,
                };
                self.state = GameState::Active;
                if let Some(event) = event {
                    self.emit(&event);
                }
                Transition::Presented(pair)
            }
            None => {
                let order: Vec<Item> = round.topo.as_ref().map_or_else(Vec::new, |topo| {
                    topo.items(&round.graph).into_iter().cloned().collect()
                });
                let comparisons = round.comparisons;
                self.state = GameState::Resolved;
                let top = order.first().cloned();
                self.emit(&GameEvent::OrderResolved { order, comparisons });
                if let Some(top) = top {
                    self.emit(&GameEvent::RoundFinished { top });
                }
                Transition::Resolved
            }
        }
    }

    fn emit(&mut self, event: &GameEvent) {
        for observer in &mut self.observers {
            observer.on_event(event);
        }
    }
}
