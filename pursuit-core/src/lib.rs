//! Pursuit Core - Graph pursuit engine
//!
//! This crate provides the game logic for the shrinking-grid pursuit game:
//! - Square lattice geometry and the mutable edge graph
//! - Move validation and breadth-first shortest paths
//! - Capture, cross-over and separation rules
//! - Edge attrition and corner-biased setup
//! - Attack/evade agents with bounded lookahead
//! - The match controller that ties a game together

pub mod board;
pub mod graph;
pub mod rules;
pub mod attrition;
pub mod setup;
pub mod agent;
pub mod engine;
pub mod config;
pub mod error;

// Re-exports for convenient access
pub use board::{Direction, Position, Side, GRID_SIZE};
pub use graph::{Edge, EdgeGraph};
pub use rules::{Outcome, OutcomeKind};
pub use agent::{Agent, Behavior};
pub use engine::{EngineState, GameEngine, Intent, Status, TurnReport};
pub use config::{EngineConfig, EvadeWeights, JoinWinner, Mode};
pub use error::EngineError;
