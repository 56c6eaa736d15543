//! Engine error types
//!
//! Gameplay variants describe expected conditions. The engine recovers from
//! them locally and leaves its state untouched. Configuration variants are
//! only returned while building an engine.

use thiserror::Error;

use crate::board::{Position, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("illegal move: no active edge from {from} to {to}")]
    IllegalMove { from: Position, to: Position },

    #[error("agent trapped at {at}: no usable move")]
    AgentTrapped { at: Position },

    #[error("no active edges left to remove")]
    NoActiveEdges,

    #[error("game already over")]
    InvalidIntentInTerminalState,

    #[error("not {got}'s move: {expected} is on turn")]
    WrongSide { expected: Side, got: Side },

    #[error("grid size must be at least 2, got {size}")]
    InvalidGridSize { size: i8 },

    #[error("graph is {got}x{got} but config expects {expected}x{expected}")]
    GridSizeMismatch { expected: i8, got: i8 },
}

pub type Result<T> = std::result::Result<T, EngineError>;
