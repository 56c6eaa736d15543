//! Edge attrition: initial pruning and per-turn removal

use rand::Rng;

use crate::board::Position;
use crate::error::{EngineError, Result};
use crate::graph::{Edge, EdgeGraph};

/// Remove up to `count` distinct internal edges, uniformly at random
///
/// Returns the removed edges; fewer than `count` when the pool runs dry.
pub fn prune_initial<R: Rng>(graph: &mut EdgeGraph, count: usize, rng: &mut R) -> Vec<Edge> {
    let size = graph.size();
    let mut pool: Vec<Edge> = graph
        .active_edges()
        .filter(|e| e.is_internal(size))
        .copied()
        .collect();

    let mut removed = Vec::with_capacity(count);
    while removed.len() < count && !pool.is_empty() {
        let edge = pool.swap_remove(rng.gen_range(0..pool.len()));
        graph.deactivate(edge.a, edge.b);
        removed.push(edge);
    }

    if removed.len() < count {
        tracing::debug!("Initial pruning removed {} of {} edges", removed.len(), count);
    }
    removed
}

/// Deactivate one uniformly chosen active edge
///
/// `protect` names a cell pair whose joining edge must survive.
pub fn remove_random_edge<R: Rng>(
    graph: &mut EdgeGraph,
    protect: Option<(Position, Position)>,
    rng: &mut R,
) -> Result<Edge> {
    let candidates: Vec<Edge> = graph
        .active_edges()
        .filter(|e| protect.map_or(true, |(p, q)| !e.joins(p, q)))
        .copied()
        .collect();

    if candidates.is_empty() {
        return Err(EngineError::NoActiveEdges);
    }

    let edge = candidates[rng.gen_range(0..candidates.len())];
    graph.deactivate(edge.a, edge.b);
    tracing::trace!("Removed edge {} - {}", edge.a, edge.b);
    Ok(edge)
}

/// Per-turn attrition: up to `count` removals, skipping once none are left
pub fn remove_random_edges<R: Rng>(
    graph: &mut EdgeGraph,
    count: usize,
    protect: Option<(Position, Position)>,
    rng: &mut R,
) -> Vec<Edge> {
    let mut removed = Vec::with_capacity(count);
    for _ in 0..count {
        match remove_random_edge(graph, protect, rng) {
            Ok(edge) => removed.push(edge),
            Err(e) => {
                tracing::debug!("Skipping attrition: {}", e);
                break;
            }
        }
    }
    removed
}
