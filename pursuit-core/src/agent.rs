//! Computer-controlled movement: attack and evade policies

use serde::{Deserialize, Serialize};

use crate::board::Position;
use crate::config::{EngineConfig, EvadeWeights, Mode};
use crate::error::{EngineError, Result};
use crate::graph::EdgeGraph;

// ============================================================================
// BEHAVIOR
// ============================================================================

/// Movement policy for a computer-controlled point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    /// Close in along the shortest path
    Attack,
    /// Keep as far from the pursuer as the lookahead allows
    Evade,
}

impl Behavior {
    /// Red's policy in `mode`; two-player red is human
    pub fn red_for_mode(mode: Mode) -> Option<Self> {
        match mode {
            Mode::Offense => Some(Behavior::Evade),
            Mode::Defense => Some(Behavior::Attack),
            Mode::TwoPlayer => None,
        }
    }
}

// ============================================================================
// AGENT
// ============================================================================

/// A point driven by one [`Behavior`]
#[derive(Clone, Debug, PartialEq)]
pub struct Agent {
    pub behavior: Behavior,
    pub weights: EvadeWeights,
    pub depth: u32,
}

impl Agent {
    pub fn new(behavior: Behavior, config: &EngineConfig) -> Self {
        Self {
            behavior,
            weights: config.evade_weights,
            depth: config.effective_lookahead(),
        }
    }

    /// Next cell for the point at `me` reacting to `other`
    ///
    /// Fails with [`EngineError::AgentTrapped`] when the policy has no
    /// usable move; the point then stays put.
    pub fn choose_move(&self, graph: &EdgeGraph, me: Position, other: Position) -> Result<Position> {
        match self.behavior {
            Behavior::Attack => attack_move(graph, me, other),
            Behavior::Evade => evade_move(graph, me, other, &self.weights, self.depth),
        }
    }
}

/// First step of the shortest path from `me` to `target`
pub fn attack_move(graph: &EdgeGraph, me: Position, target: Position) -> Result<Position> {
    match graph.shortest_path(me, target) {
        Some(path) if path.len() >= 2 => Ok(path[1]),
        _ => Err(EngineError::AgentTrapped { at: me }),
    }
}

/// Scored evade candidate
#[derive(Clone, Copy, Debug)]
struct Candidate {
    cell: Position,
    score: i32,
    immediate: usize,
    future: usize,
    branching: usize,
}

/// Pick the evade move that best preserves distance from `pursuer`
pub fn evade_move(
    graph: &EdgeGraph,
    me: Position,
    pursuer: Position,
    weights: &EvadeWeights,
    depth: u32,
) -> Result<Position> {
    let trapped = EngineError::AgentTrapped { at: me };

    let moves = graph.valid_moves(me);
    if moves.is_empty() {
        return Err(trapped);
    }
    let current = graph.distance(pursuer, me).ok_or(trapped.clone())?;

    let mut scored: Vec<Candidate> = moves
        .into_iter()
        .filter_map(|cell| {
            let immediate = graph.distance(pursuer, cell)?;
            let future = guaranteed_distance(graph, pursuer, cell, 0, depth);
            let branching = graph.valid_moves(cell).len();
            let score = weights.immediate * immediate as i32
                + weights.lookahead * future as i32
                + weights.branching * branching as i32;
            Some(Candidate { cell, score, immediate, future, branching })
        })
        .collect();

    // Stable: equal scores keep direction order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    // Every candidate can step back to `me`, so the branching check is only a guard
    let keeps_distance = scored
        .iter()
        .find(|c| c.branching > 0 && (c.immediate >= current || c.future >= current));
    if let Some(c) = keeps_distance {
        return Ok(c.cell);
    }

    // Nothing holds the gap: run as far as possible right now
    let mut best: Option<&Candidate> = None;
    for c in &scored {
        if best.map_or(true, |b| c.immediate > b.immediate) {
            best = Some(c);
        }
    }
    best.map(|c| c.cell).ok_or(trapped)
}

/// Distance from `pursuer` that the evader at `pos` can still guarantee
/// within `max_depth` further plies
///
/// Each ply takes the best onward move and caps by the distance already
/// held. Unreachable or dead-end cells score 0.
fn guaranteed_distance(graph: &EdgeGraph, pursuer: Position, pos: Position, depth: u32, max_depth: u32) -> usize {
    let Some(here) = graph.distance(pursuer, pos) else {
        return 0;
    };
    if depth >= max_depth {
        return here;
    }

    let best_future = graph
        .valid_moves(pos)
        .into_iter()
        .map(|next| guaranteed_distance(graph, pursuer, next, depth + 1, max_depth))
        .max()
        .unwrap_or(0);

    here.min(best_future)
}

// ============================================================================
// TESTS
// ============================================================================
