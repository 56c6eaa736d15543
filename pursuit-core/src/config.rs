//! Engine configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::GRID_SIZE;
use crate::error::EngineError;

/// Hard cap on evade lookahead
pub const MAX_LOOKAHEAD_DEPTH: u32 = 3;

/// Which side, human or agent, each mode puts in control
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mode {
    /// Blue hunts, red evades
    Offense,
    /// Red hunts, blue evades
    Defense,
    /// Both sides human, moving alternately (red first)
    TwoPlayer,
}

impl Mode {
    /// Next mode in the toggle cycle
    pub fn next(self) -> Self {
        match self {
            Mode::Offense => Mode::Defense,
            Mode::Defense => Mode::TwoPlayer,
            Mode::TwoPlayer => Mode::Offense,
        }
    }

    pub fn is_single_player(self) -> bool {
        !matches!(self, Mode::TwoPlayer)
    }
}

impl Default for Mode {
    fn default() -> Self {
        Mode::Offense
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Offense => write!(f, "offense"),
            Mode::Defense => write!(f, "defense"),
            Mode::TwoPlayer => write!(f, "two-player"),
        }
    }
}

/// Who wins when two-player moves bring the points onto one cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JoinWinner {
    /// The side whose move completed the join
    Mover,
    /// Blue regardless of who moved
    AlwaysBlue,
}

/// Weights for scoring evade candidates
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvadeWeights {
    /// Distance from the pursuer right after the move
    pub immediate: i32,
    /// Guaranteed distance from the bounded lookahead
    pub lookahead: i32,
    /// Number of onward moves from the candidate
    pub branching: i32,
}

impl Default for EvadeWeights {
    fn default() -> Self {
        Self {
            immediate: 4,
            lookahead: 3,
            branching: 1,
        }
    }
}

/// Tunables for a [`crate::GameEngine`]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Cells per grid side
    pub grid_size: i8,
    /// Internal edges removed before the first move
    pub initial_removals: usize,
    /// Edges removed after each completed turn
    pub removals_per_turn: usize,
    /// Never remove the edge directly joining adjacent agents
    pub protect_agent_edge: bool,
    /// Evade lookahead plies (clamped to [`MAX_LOOKAHEAD_DEPTH`])
    pub lookahead_depth: u32,
    pub evade_weights: EvadeWeights,
    pub join_winner: JoinWinner,
    /// Random seed for reproducibility (None = from entropy)
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            initial_removals: 4,
            removals_per_turn: 2,
            protect_agent_edge: false,
            lookahead_depth: 2,
            evade_weights: EvadeWeights::default(),
            join_winner: JoinWinner::Mover,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Lookahead depth after applying the hard cap
    pub fn effective_lookahead(&self) -> u32 {
        self.lookahead_depth.min(MAX_LOOKAHEAD_DEPTH)
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject grids too small to hold two distinct points
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.grid_size < 2 {
            return Err(EngineError::InvalidGridSize { size: self.grid_size });
        }
        Ok(())
    }

    /// Load from JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
