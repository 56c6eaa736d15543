//! Match controller: turn order, move application, attrition and outcomes

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::agent::{Agent, Behavior};
use crate::attrition::{prune_initial, remove_random_edges};
use crate::board::{Direction, Position, Side};
use crate::config::{EngineConfig, Mode};
use crate::error::{EngineError, Result};
use crate::graph::{Edge, EdgeGraph};
use crate::rules::{check_capture, check_separation, check_terminal, Outcome, Transition};
use crate::setup::initialize_positions;

// ============================================================================
// PUBLIC TYPES
// ============================================================================

/// Lifecycle of one game
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "outcome", rename_all = "snake_case")]
pub enum Status {
    InProgress,
    Ended(Outcome),
}

/// A request to move one point one step
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub side: Side,
    pub direction: Direction,
}

impl Intent {
    pub fn blue(direction: Direction) -> Self {
        Self { side: Side::Blue, direction }
    }

    pub fn red(direction: Direction) -> Self {
        Self { side: Side::Red, direction }
    }
}

/// Read-only snapshot for rendering collaborators
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    pub mode: Mode,
    pub grid_size: i8,
    pub blue: Position,
    pub red: Position,
    /// Active edges only
    pub edges: Vec<Edge>,
    /// Side on turn (two-player mode only)
    pub turn: Option<Side>,
    pub status: Status,
    /// Completed turns since reset
    pub turn_number: u32,
    pub removed_edges: usize,
}

impl EngineState {
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Ended(outcome) => Some(outcome),
            Status::InProgress => None,
        }
    }
}

/// What one accepted intent did
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub mover: Side,
    pub blue: (Position, Position),
    pub red: (Position, Position),
    /// Red's agent had no usable move and stayed put
    pub red_trapped: bool,
    pub removed: Vec<Edge>,
    pub outcome: Option<Outcome>,
}

// ============================================================================
// GAME ENGINE
// ============================================================================

/// One independent game instance
///
/// State changes only through `reset`/`set_mode`, `handle_intent` (or
/// `try_intent`) and `check_terminal`.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    mode: Mode,
    graph: EdgeGraph,
    blue: Position,
    red: Position,
    /// Two-player turn; red moves first
    turn: Side,
    status: Status,
    turn_number: u32,
    red_agent: Option<Agent>,
    rng: ChaCha8Rng,
}

impl GameEngine {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create an engine and reset it into `mode`
    ///
    /// Fails with [`EngineError::InvalidGridSize`] before touching the grid.
    pub fn new(config: EngineConfig, mode: Mode) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        let size = config.grid_size;
        let mut engine = Self {
            graph: EdgeGraph::build_lattice(size),
            blue: Position::new(0, 0),
            red: Position::new(size - 1, 0),
            turn: Side::Red,
            status: Status::InProgress,
            turn_number: 0,
            red_agent: None,
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            mode,
        };
        engine.reset(mode);
        Ok(engine)
    }

    /// Start from a hand-built graph and positions, skipping setup randomness
    ///
    /// The graph must match `config.grid_size`, since later resets rebuild
    /// the lattice from the config.
    pub fn from_parts(
        config: EngineConfig,
        mode: Mode,
        graph: EdgeGraph,
        blue: Position,
        red: Position,
    ) -> Result<Self> {
        config.validate()?;
        if graph.size() != config.grid_size {
            return Err(EngineError::GridSizeMismatch { expected: config.grid_size, got: graph.size() });
        }
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self {
            red_agent: Behavior::red_for_mode(mode).map(|b| Agent::new(b, &config)),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            mode,
            graph,
            blue,
            red,
            turn: Side::Red,
            status: Status::InProgress,
            turn_number: 0,
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn graph(&self) -> &EdgeGraph {
        &self.graph
    }

    pub fn blue(&self) -> Position {
        self.blue
    }

    pub fn red(&self) -> Position {
        self.red
    }

    pub fn position(&self, side: Side) -> Position {
        match side {
            Side::Blue => self.blue,
            Side::Red => self.red,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            Status::Ended(outcome) => Some(outcome),
            Status::InProgress => None,
        }
    }

    /// Completed turns since reset
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::Ended(_))
    }

    /// Side allowed to move next
    pub fn side_to_move(&self) -> Side {
        if self.mode.is_single_player() {
            Side::Blue
        } else {
            self.turn
        }
    }

    /// Snapshot for rendering
    pub fn state(&self) -> EngineState {
        EngineState {
            mode: self.mode,
            grid_size: self.graph.size(),
            blue: self.blue,
            red: self.red,
            edges: self.graph.active_edges().copied().collect(),
            turn: (!self.mode.is_single_player()).then_some(self.turn),
            status: self.status,
            turn_number: self.turn_number,
            removed_edges: self.graph.edges().len() - self.graph.active_count(),
        }
    }

    // ========================================================================
    // LIFECYCLE
    // ========================================================================

    /// Rebuild the graph, place both points and start a new game in `mode`
    pub fn reset(&mut self, mode: Mode) -> EngineState {
        let size = self.config.grid_size;
        self.mode = mode;
        self.graph = EdgeGraph::build_lattice(size);
        prune_initial(&mut self.graph, self.config.initial_removals, &mut self.rng);

        let (blue, red) = initialize_positions(mode, size, &mut self.rng);
        self.blue = blue;
        self.red = red;
        self.turn = Side::Red;
        self.status = Status::InProgress;
        self.turn_number = 0;
        self.red_agent = Behavior::red_for_mode(mode).map(|b| Agent::new(b, &self.config));

        tracing::debug!("Reset {} game: blue={} red={}", mode, blue, red);
        self.state()
    }

    /// Reseed the random source, then reset
    pub fn reset_with_seed(&mut self, mode: Mode, seed: u64) -> EngineState {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.reset(mode)
    }

    pub fn set_mode(&mut self, mode: Mode) -> EngineState {
        self.reset(mode)
    }

    /// Advance to the next mode in the cycle
    pub fn toggle_mode(&mut self) -> EngineState {
        self.set_mode(self.mode.next())
    }

    // ========================================================================
    // TURN HANDLING
    // ========================================================================

    /// Apply an intent; rejected intents are logged and change nothing
    pub fn handle_intent(&mut self, intent: Intent) -> EngineState {
        if let Err(e) = self.try_intent(intent) {
            tracing::debug!("Ignored {:?}: {}", intent, e);
        }
        self.state()
    }

    /// Apply an intent, reporting what happened
    ///
    /// On `Err` the engine state is unchanged.
    pub fn try_intent(&mut self, intent: Intent) -> Result<TurnReport> {
        if self.is_over() {
            return Err(EngineError::InvalidIntentInTerminalState);
        }
        let expected = self.side_to_move();
        if intent.side != expected {
            return Err(EngineError::WrongSide { expected, got: intent.side });
        }

        let from = self.position(intent.side);
        let to = from.step(intent.direction);
        if !self.graph.can_move(from, to) {
            return Err(EngineError::IllegalMove { from, to });
        }

        let report = if self.mode.is_single_player() {
            self.play_simultaneous(to)
        } else {
            self.play_half_turn(intent.side, to)
        };
        Ok(report)
    }

    /// Run the terminal checks against the current state
    ///
    /// Ends the game if the points share a cell or are disconnected.
    pub fn check_terminal(&mut self) -> Option<Outcome> {
        if let Some(outcome) = self.outcome() {
            return Some(outcome);
        }
        let mover = self.turn.opponent();
        let outcome = check_terminal(&self.graph, self.blue, self.red, self.mode, mover, self.config.join_winner);
        if let Some(outcome) = outcome {
            self.finish(outcome);
        }
        outcome
    }

    /// Single-player turn: blue's legal step plus red's agent move, together
    fn play_simultaneous(&mut self, blue_to: Position) -> TurnReport {
        let blue_from = self.blue;
        let red_from = self.red;

        // Red reacts to where blue stands now, not where it is heading
        let (red_to, red_trapped) = match &self.red_agent {
            Some(agent) => match agent.choose_move(&self.graph, red_from, blue_from) {
                Ok(cell) => (cell, false),
                Err(e) => {
                    tracing::debug!("Red stays put: {}", e);
                    (red_from, true)
                }
            },
            None => (red_from, true),
        };

        self.blue = blue_to;
        self.red = red_to;

        let step = Transition {
            blue_before: blue_from,
            blue_after: blue_to,
            red_before: red_from,
            red_after: red_to,
        };
        let mut report = TurnReport {
            mover: Side::Blue,
            blue: (blue_from, blue_to),
            red: (red_from, red_to),
            red_trapped,
            removed: Vec::new(),
            outcome: None,
        };

        if let Some(outcome) = check_capture(&step, self.mode) {
            self.turn_number += 1;
            self.finish(outcome);
            report.outcome = Some(outcome);
            return report;
        }

        report.removed = self.attrition();
        self.turn_number += 1;

        if let Some(outcome) = check_separation(&self.graph, self.blue, self.red, self.mode) {
            self.finish(outcome);
            report.outcome = Some(outcome);
        }
        report
    }

    /// Two-player half turn; blue's move closes the pair and triggers attrition
    fn play_half_turn(&mut self, side: Side, to: Position) -> TurnReport {
        let blue_from = self.blue;
        let red_from = self.red;

        match side {
            Side::Blue => self.blue = to,
            Side::Red => self.red = to,
        }
        self.turn = side.opponent();

        let mut report = TurnReport {
            mover: side,
            blue: (blue_from, self.blue),
            red: (red_from, self.red),
            red_trapped: false,
            removed: Vec::new(),
            outcome: None,
        };

        if side == Side::Blue {
            report.removed = self.attrition();
            self.turn_number += 1;
        }

        let outcome = check_terminal(&self.graph, self.blue, self.red, self.mode, side, self.config.join_winner);
        if let Some(outcome) = outcome {
            self.finish(outcome);
            report.outcome = Some(outcome);
        }
        report
    }

    fn attrition(&mut self) -> Vec<Edge> {
        let protect = (self.config.protect_agent_edge && self.blue.is_adjacent(self.red))
            .then_some((self.blue, self.red));
        remove_random_edges(&mut self.graph, self.config.removals_per_turn, protect, &mut self.rng)
    }

    fn finish(&mut self, outcome: Outcome) {
        tracing::info!("Game over after {} turns: {}", self.turn_number, outcome);
        self.status = Status::Ended(outcome);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JoinWinner;
    use crate::rules::OutcomeKind;

    fn p(x: i8, y: i8) -> Position {
        Position::new(x, y)
    }

    fn seeded(seed: u64) -> EngineConfig {
        EngineConfig::default().with_seed(seed)
    }

    /// No random removals, so hand-built scenarios stay fixed
    fn static_config() -> EngineConfig {
        EngineConfig {
            initial_removals: 0,
            removals_per_turn: 0,
            ..seeded(1)
        }
    }

    #[test]
    fn test_reset_state() {
        let engine = GameEngine::new(seeded(42), Mode::Offense).unwrap();
        let state = engine.state();
        assert_eq!(state.status, Status::InProgress);
        assert_eq!(state.edges.len(), 56);
        assert_eq!(state.removed_edges, 4);
        assert_eq!(state.turn, None);
        assert_eq!(state.turn_number, 0);
        assert_eq!(state.blue.x, 0);
        assert_eq!(state.red.x, 5);
    }

    #[test]
    fn test_new_rejects_tiny_grid() {
        for grid_size in [1, 0, -3, i8::MIN] {
            let config = EngineConfig { grid_size, ..seeded(0) };
            assert_eq!(
                GameEngine::new(config, Mode::Offense).unwrap_err(),
                EngineError::InvalidGridSize { size: grid_size }
            );
        }

        // Smallest legal grid still starts the points on distinct valid cells
        for seed in 0..8 {
            let config = EngineConfig { grid_size: 2, initial_removals: 0, ..seeded(seed) };
            let engine = GameEngine::new(config, Mode::Offense).unwrap();
            assert_ne!(engine.blue(), engine.red());
            assert!(engine.blue().is_valid(2) && engine.red().is_valid(2));
        }
    }

    #[test]
    fn test_from_parts_rejects_tiny_grid() {
        let config = EngineConfig { grid_size: 1, ..static_config() };
        let single = EdgeGraph::build_lattice(1);
        let result = GameEngine::from_parts(config, Mode::Offense, single, p(0, 0), p(0, 0));
        assert_eq!(result.unwrap_err(), EngineError::InvalidGridSize { size: 1 });
    }

    #[test]
    fn test_from_parts_rejects_mismatched_graph() {
        let small = EdgeGraph::build_lattice(4);
        let result = GameEngine::from_parts(static_config(), Mode::Offense, small.clone(), p(0, 0), p(3, 0));
        assert_eq!(result.unwrap_err(), EngineError::GridSizeMismatch { expected: 6, got: 4 });

        let config = EngineConfig { grid_size: 4, ..static_config() };
        let mut engine = GameEngine::from_parts(config, Mode::Offense, small, p(0, 0), p(3, 0)).unwrap();
        assert_eq!(engine.reset(Mode::Offense).grid_size, 4);
    }

    #[test]
    fn test_same_seed_same_game() {
        let a = GameEngine::new(seeded(99), Mode::Defense).unwrap().state();
        let b = GameEngine::new(seeded(99), Mode::Defense).unwrap().state();
        assert_eq!(a, b);

        let mut engine = GameEngine::new(seeded(1), Mode::Offense).unwrap();
        let first = engine.reset_with_seed(Mode::Offense, 5);
        let second = engine.reset_with_seed(Mode::Offense, 5);
        assert_eq!(first, second);
    }

    #[test]
    fn test_illegal_move_is_noop() {
        let mut engine = GameEngine::new(seeded(3), Mode::Offense).unwrap();
        let before = engine.state();
        // Blue is in column 0: stepping left leaves the grid
        let err = engine.try_intent(Intent::blue(Direction::Left)).unwrap_err();
        assert!(matches!(err, EngineError::IllegalMove { .. }));
        assert_eq!(engine.state(), before);
        assert_eq!(engine.handle_intent(Intent::blue(Direction::Left)), before);
    }

    #[test]
    fn test_red_intent_rejected_in_single_player() {
        let mut engine = GameEngine::new(seeded(3), Mode::Offense).unwrap();
        let before = engine.state();
        assert_eq!(
            engine.try_intent(Intent::red(Direction::Left)),
            Err(EngineError::WrongSide { expected: Side::Blue, got: Side::Red })
        );
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_turn_removes_two_edges() {
        let mut engine = GameEngine::new(seeded(11), Mode::Offense).unwrap();
        let dir = if engine.blue().y == 0 { Direction::Down } else { Direction::Up };
        let report = engine.try_intent(Intent::blue(dir)).unwrap();
        // Red starts five columns away, so no capture is possible yet
        assert_eq!(report.removed.len(), 2);
        assert_eq!(engine.state().removed_edges, 6);
        assert_eq!(engine.state().turn_number, 1);
    }

    #[test]
    fn test_direct_capture_blue_steps_onto_red() {
        // Red is boxed in at (2,3) with only the edge to blue
        let mut g = EdgeGraph::build_lattice(6);
        for e in g.edges().to_vec() {
            if !e.joins(p(2, 2), p(2, 3)) {
                g.deactivate(e.a, e.b);
            }
        }
        let mut engine = GameEngine::from_parts(static_config(), Mode::Offense, g, p(2, 2), p(2, 3)).unwrap();
        let report = engine.try_intent(Intent::blue(Direction::Down)).unwrap();
        let outcome = report.outcome.unwrap();
        assert_eq!(outcome.winner, Side::Blue);
        assert!(matches!(outcome.kind, OutcomeKind::Caught | OutcomeKind::Joined));
        assert!(engine.is_over());
    }

    #[test]
    fn test_cross_over_capture_detected() {
        // Defense: red attacks along the single edge while blue steps toward it
        let mut g = EdgeGraph::build_lattice(6);
        for e in g.edges().to_vec() {
            if !e.joins(p(2, 2), p(3, 2)) {
                g.deactivate(e.a, e.b);
            }
        }
        let mut engine = GameEngine::from_parts(static_config(), Mode::Defense, g, p(2, 2), p(3, 2)).unwrap();
        let report = engine.try_intent(Intent::blue(Direction::Right)).unwrap();
        assert_eq!(engine.blue(), p(3, 2));
        assert_eq!(engine.red(), p(2, 2));
        assert_eq!(
            report.outcome,
            Some(Outcome { kind: OutcomeKind::Caught, winner: Side::Red })
        );
    }

    #[test]
    fn test_separation_detected_before_any_move() {
        let mut g = EdgeGraph::build_lattice(6);
        for next in g.valid_moves(p(5, 5)) {
            g.deactivate(p(5, 5), next);
        }
        let mut engine =
            GameEngine::from_parts(static_config(), Mode::Offense, g.clone(), p(0, 0), p(5, 5)).unwrap();
        assert_eq!(
            engine.check_terminal(),
            Some(Outcome { kind: OutcomeKind::Separated, winner: Side::Red })
        );

        let mut engine = GameEngine::from_parts(static_config(), Mode::Defense, g, p(0, 0), p(5, 5)).unwrap();
        assert_eq!(engine.check_terminal().map(|o| o.winner), Some(Side::Blue));
    }

    #[test]
    fn test_separated_on_first_turn_is_graceful() {
        let mut g = EdgeGraph::build_lattice(6);
        for next in g.valid_moves(p(5, 5)) {
            g.deactivate(p(5, 5), next);
        }
        let mut engine = GameEngine::from_parts(static_config(), Mode::Defense, g, p(0, 0), p(5, 5)).unwrap();
        let report = engine.try_intent(Intent::blue(Direction::Right)).unwrap();
        assert!(report.red_trapped);
        assert_eq!(report.outcome.map(|o| o.kind), Some(OutcomeKind::Separated));
        assert_eq!(
            engine.try_intent(Intent::blue(Direction::Right)),
            Err(EngineError::InvalidIntentInTerminalState)
        );
    }

    #[test]
    fn test_ended_game_ignores_intents() {
        let mut g = EdgeGraph::build_lattice(6);
        g.deactivate(p(0, 0), p(0, 1));
        g.deactivate(p(0, 0), p(1, 0));
        let mut engine = GameEngine::from_parts(static_config(), Mode::Offense, g, p(0, 0), p(3, 3)).unwrap();
        engine.check_terminal();
        let before = engine.state();
        assert_eq!(engine.handle_intent(Intent::blue(Direction::Right)), before);
    }

    #[test]
    fn test_two_player_turn_order() {
        let mut engine = GameEngine::from_parts(
            static_config(),
            Mode::TwoPlayer,
            EdgeGraph::build_lattice(6),
            p(0, 0),
            p(5, 0),
        )
        .unwrap();
        assert_eq!(engine.state().turn, Some(Side::Red));
        assert!(matches!(
            engine.try_intent(Intent::blue(Direction::Right)),
            Err(EngineError::WrongSide { expected: Side::Red, .. })
        ));

        // Illegal red move keeps red on turn
        assert!(engine.try_intent(Intent::red(Direction::Right)).is_err());
        assert_eq!(engine.state().turn, Some(Side::Red));

        engine.try_intent(Intent::red(Direction::Left)).unwrap();
        assert_eq!(engine.red(), p(4, 0));
        assert_eq!(engine.state().turn, Some(Side::Blue));
        assert_eq!(engine.state().turn_number, 0);

        engine.try_intent(Intent::blue(Direction::Right)).unwrap();
        assert_eq!(engine.blue(), p(1, 0));
        assert_eq!(engine.state().turn, Some(Side::Red));
        assert_eq!(engine.state().turn_number, 1);
    }

    #[test]
    fn test_two_player_attrition_after_blue_only() {
        let config = EngineConfig {
            initial_removals: 0,
            ..seeded(8)
        };
        let lattice = EdgeGraph::build_lattice(6);
        let mut engine = GameEngine::from_parts(config, Mode::TwoPlayer, lattice, p(0, 0), p(5, 5)).unwrap();
        let red = engine.try_intent(Intent::red(Direction::Up)).unwrap();
        assert!(red.removed.is_empty());
        let blue = engine.try_intent(Intent::blue(Direction::Down)).unwrap();
        assert_eq!(blue.removed.len(), 2);
        assert_eq!(engine.graph().active_count(), 58);
    }

    #[test]
    fn test_two_player_join_winner() {
        let build = |join_winner| {
            let config = EngineConfig { join_winner, ..static_config() };
            let lattice = EdgeGraph::build_lattice(6);
            GameEngine::from_parts(config, Mode::TwoPlayer, lattice, p(2, 2), p(3, 2)).unwrap()
        };

        let mut engine = build(JoinWinner::Mover);
        let report = engine.try_intent(Intent::red(Direction::Left)).unwrap();
        assert_eq!(report.outcome, Some(Outcome { kind: OutcomeKind::Joined, winner: Side::Red }));

        let mut engine = build(JoinWinner::AlwaysBlue);
        let report = engine.try_intent(Intent::red(Direction::Left)).unwrap();
        assert_eq!(report.outcome, Some(Outcome { kind: OutcomeKind::Joined, winner: Side::Blue }));

        let config = EngineConfig { join_winner: JoinWinner::Mover, ..static_config() };
        let lattice = EdgeGraph::build_lattice(6);
        let mut engine = GameEngine::from_parts(config, Mode::TwoPlayer, lattice, p(2, 2), p(4, 2)).unwrap();
        let report = engine.try_intent(Intent::red(Direction::Left)).unwrap();
        assert_eq!(report.outcome, None);
        let report = engine.try_intent(Intent::blue(Direction::Right)).unwrap();
        assert_eq!(report.outcome, Some(Outcome { kind: OutcomeKind::Joined, winner: Side::Blue }));
    }

    #[test]
    fn test_toggle_mode_resets() {
        let mut engine = GameEngine::new(seeded(4), Mode::Offense).unwrap();
        let state = engine.toggle_mode();
        assert_eq!(state.mode, Mode::Defense);
        assert_eq!(state.status, Status::InProgress);
        let state = engine.toggle_mode();
        assert_eq!(state.mode, Mode::TwoPlayer);
        assert_eq!(state.turn, Some(Side::Red));
        assert_eq!(engine.toggle_mode().mode, Mode::Offense);
    }

    #[test]
    fn test_protected_edge_between_adjacent_agents() {
        let build = |protect_agent_edge| {
            let config = EngineConfig {
                initial_removals: 0,
                removals_per_turn: 100,
                protect_agent_edge,
                ..seeded(6)
            };
            // Defense: red closes in and the two end up side by side
            let lattice = EdgeGraph::build_lattice(6);
            let mut engine = GameEngine::from_parts(config, Mode::Defense, lattice, p(2, 2), p(5, 2)).unwrap();
            let report = engine.try_intent(Intent::blue(Direction::Right)).unwrap();
            assert_eq!(engine.blue(), p(3, 2));
            assert_eq!(engine.red(), p(4, 2));
            (engine, report)
        };

        let (engine, report) = build(true);
        assert_eq!(engine.graph().active_count(), 1);
        assert!(engine.graph().is_active(p(3, 2), p(4, 2)));
        assert_eq!(report.outcome, None);

        let (engine, report) = build(false);
        assert_eq!(engine.graph().active_count(), 0);
        assert_eq!(report.outcome.map(|o| o.kind), Some(OutcomeKind::Separated));
    }

    #[test]
    fn test_state_serializes() {
        let engine = GameEngine::new(seeded(2), Mode::TwoPlayer).unwrap();
        let json = serde_json::to_string(&engine.state()).unwrap();
        let back: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, engine.state());
        assert!(json.contains("\"in_progress\""));
    }
}
