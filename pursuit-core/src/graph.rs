//! Lattice edge graph, move validation and shortest paths

use std::collections::VecDeque;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Direction, Position};

// ============================================================================
// EDGE
// ============================================================================

/// Connection between two adjacent cells
///
/// Endpoints are stored in canonical order (`a < b`) and never change;
/// only `active` does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub a: Position,
    pub b: Position,
    pub active: bool,
}

impl Edge {
    fn new(p: Position, q: Position) -> Self {
        let (a, b) = canonical(p, q);
        Self { a, b, active: true }
    }

    /// Both endpoints lie off the grid border
    pub fn is_internal(&self, size: i8) -> bool {
        !self.a.is_border(size) && !self.b.is_border(size)
    }

    /// True if the edge joins `p` and `q` in either order
    pub fn joins(&self, p: Position, q: Position) -> bool {
        (self.a, self.b) == canonical(p, q)
    }
}

fn canonical(p: Position, q: Position) -> (Position, Position) {
    if p <= q {
        (p, q)
    } else {
        (q, p)
    }
}

// ============================================================================
// EDGE GRAPH
// ============================================================================

/// Full lattice edge set with per-edge activity
#[derive(Clone, Debug)]
pub struct EdgeGraph {
    size: i8,
    edges: Vec<Edge>,
    /// Canonical endpoint pair -> index into `edges`
    index: FxHashMap<(Position, Position), usize>,
}

impl EdgeGraph {
    /// Build the complete `size`x`size` lattice with every edge active
    pub fn build_lattice(size: i8) -> Self {
        let size = size.max(1);
        let mut edges = Vec::with_capacity(2 * size as usize * (size as usize - 1));

        // Horizontal
        for y in 0..size {
            for x in 0..size - 1 {
                edges.push(Edge::new(Position::new(x, y), Position::new(x + 1, y)));
            }
        }
        // Vertical
        for x in 0..size {
            for y in 0..size - 1 {
                edges.push(Edge::new(Position::new(x, y), Position::new(x, y + 1)));
            }
        }

        let index = edges
            .iter()
            .enumerate()
            .map(|(i, e)| ((e.a, e.b), i))
            .collect();

        Self { size, edges, index }
    }

    pub fn size(&self) -> i8 {
        self.size
    }

    /// All edges, active or not, in construction order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Currently traversable edges
    pub fn active_edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().filter(|e| e.active)
    }

    pub fn active_count(&self) -> usize {
        self.active_edges().count()
    }

    /// Look up the edge joining two cells
    pub fn edge(&self, p: Position, q: Position) -> Option<&Edge> {
        self.index.get(&canonical(p, q)).map(|&i| &self.edges[i])
    }

    /// True if an active edge joins `p` and `q`
    pub fn is_active(&self, p: Position, q: Position) -> bool {
        self.edge(p, q).is_some_and(|e| e.active)
    }

    /// Deactivate the edge joining `p` and `q`
    ///
    /// Returns true only if the edge existed and was active. Unknown pairs
    /// and already inactive edges are a no-op.
    pub fn deactivate(&mut self, p: Position, q: Position) -> bool {
        match self.index.get(&canonical(p, q)) {
            Some(&i) if self.edges[i].active => {
                self.edges[i].active = false;
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // MOVE VALIDATION
    // ========================================================================

    /// Legal single steps from `pos`, in `Direction::ALL` order
    pub fn valid_moves(&self, pos: Position) -> Vec<Position> {
        Direction::ALL
            .into_iter()
            .map(|d| pos.step(d))
            .filter(|&next| next.is_valid(self.size) && self.is_active(pos, next))
            .collect()
    }

    pub fn can_move(&self, from: Position, to: Position) -> bool {
        self.valid_moves(from).contains(&to)
    }

    // ========================================================================
    // PATHFINDING
    // ========================================================================

    /// Breadth-first shortest path over active edges, endpoints inclusive
    ///
    /// Ties between equally short paths go to the first one discovered in
    /// `Direction::ALL` order.
    pub fn shortest_path(&self, start: Position, end: Position) -> Option<Vec<Position>> {
        if !start.is_valid(self.size) || !end.is_valid(self.size) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut parent: FxHashMap<Position, Position> = FxHashMap::default();
        let mut queue = VecDeque::new();
        parent.insert(start, start);
        queue.push_back(start);

        while let Some(cur) = queue.pop_front() {
            for next in self.valid_moves(cur) {
                if parent.contains_key(&next) {
                    continue;
                }
                parent.insert(next, cur);
                if next == end {
                    return Some(unwind(&parent, start, end));
                }
                queue.push_back(next);
            }
        }

        None
    }

    /// Hop count of the shortest path, if any
    pub fn distance(&self, start: Position, end: Position) -> Option<usize> {
        self.shortest_path(start, end).map(|p| p.len() - 1)
    }

    pub fn reachable(&self, a: Position, b: Position) -> bool {
        self.shortest_path(a, b).is_some()
    }
}

fn unwind(parent: &FxHashMap<Position, Position>, start: Position, end: Position) -> Vec<Position> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        cur = parent[&cur];
        path.push(cur);
    }
    path.reverse();
    path
}

// ============================================================================
// TESTS
// ============================================================================
