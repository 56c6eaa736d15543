//! Capture and terminal rules

use serde::{Deserialize, Serialize};

use crate::board::{Position, Side};
use crate::config::{JoinWinner, Mode};
use crate::graph::EdgeGraph;

/// How a finished game ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    /// Points met through sequential moves
    Joined,
    /// Points met or swapped cells in one simultaneous step
    Caught,
    /// No path connects the points any more
    Separated,
}

/// Terminal result of a game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub winner: Side,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let winner = match self.winner {
            Side::Blue => "Blue",
            Side::Red => "Red",
        };
        match self.kind {
            OutcomeKind::Joined => write!(f, "{} wins - points are joined", winner),
            OutcomeKind::Caught => write!(f, "{} wins - caught {}", winner, self.winner.opponent()),
            OutcomeKind::Separated => write!(f, "{} wins - points are separated", winner),
        }
    }
}

/// Side trying to reach the other point in `mode`
pub fn attacker(mode: Mode) -> Side {
    match mode {
        Mode::Offense | Mode::TwoPlayer => Side::Blue,
        Mode::Defense => Side::Red,
    }
}

/// Both agents' cells before and after one simultaneous step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub blue_before: Position,
    pub blue_after: Position,
    pub red_before: Position,
    pub red_after: Position,
}

impl Transition {
    pub fn is_direct_capture(&self) -> bool {
        self.blue_after == self.red_after
    }

    /// The agents traded cells along one edge
    pub fn is_cross_over(&self) -> bool {
        self.blue_before == self.red_after && self.red_before == self.blue_after
    }
}

/// Direct or cross-over capture after a simultaneous step
pub fn check_capture(step: &Transition, mode: Mode) -> Option<Outcome> {
    if step.is_direct_capture() || step.is_cross_over() {
        Some(Outcome {
            kind: OutcomeKind::Caught,
            winner: attacker(mode),
        })
    } else {
        None
    }
}

/// Same-cell coincidence outside a simultaneous step
///
/// `mover` is the side whose move just completed; it only matters in
/// two-player mode.
pub fn check_join(
    blue: Position,
    red: Position,
    mode: Mode,
    mover: Side,
    join_winner: JoinWinner,
) -> Option<Outcome> {
    if blue != red {
        return None;
    }
    let winner = match (mode, join_winner) {
        (Mode::TwoPlayer, JoinWinner::Mover) => mover,
        (Mode::TwoPlayer, JoinWinner::AlwaysBlue) => Side::Blue,
        _ => attacker(mode),
    };
    Some(Outcome {
        kind: OutcomeKind::Joined,
        winner,
    })
}

/// Disconnection check; the evading side wins
pub fn check_separation(graph: &EdgeGraph, blue: Position, red: Position, mode: Mode) -> Option<Outcome> {
    if graph.reachable(blue, red) {
        None
    } else {
        Some(Outcome {
            kind: OutcomeKind::Separated,
            winner: attacker(mode).opponent(),
        })
    }
}

/// Join, then separation
pub fn check_terminal(
    graph: &EdgeGraph,
    blue: Position,
    red: Position,
    mode: Mode,
    mover: Side,
    join_winner: JoinWinner,
) -> Option<Outcome> {
    check_join(blue, red, mode, mover, join_winner).or_else(|| check_separation(graph, blue, red, mode))
}
