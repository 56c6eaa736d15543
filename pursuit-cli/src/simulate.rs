//! Simulate command - play bot-driven games against the engine
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_config(), play_match(), report_results()
//! - Level 3: play_single_game(), choose_direction(), compute_match_statistics()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use pursuit_core::rules::attacker;
use pursuit_core::{
    Agent, Behavior, Direction, EngineConfig, GameEngine, Intent, Mode, Outcome, OutcomeKind, Side,
};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

/// Game mode as accepted on the command line
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Offense,
    Defense,
    TwoPlayer,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Offense => Mode::Offense,
            ModeArg::Defense => Mode::Defense,
            ModeArg::TwoPlayer => Mode::TwoPlayer,
        }
    }
}

/// How a bot picks its moves
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BotKind {
    /// Attack when hunting, evade when hunted
    Greedy,
    /// Uniform over legal moves
    Random,
}

#[derive(Args)]
pub struct SimulateArgs {
    /// Game mode
    #[arg(long, value_enum, default_value = "offense")]
    pub mode: ModeArg,

    /// Number of games to play
    #[arg(long, default_value = "10")]
    pub games: usize,

    /// Bot controlling blue
    #[arg(long, value_enum, default_value = "greedy")]
    pub blue: BotKind,

    /// Bot controlling red (two-player mode only)
    #[arg(long, value_enum, default_value = "greedy")]
    pub red: BotKind,

    /// Maximum completed turns per game
    #[arg(long, default_value = "200")]
    pub max_turns: u32,

    /// Engine configuration JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Result of a single game
#[derive(Clone, Debug)]
struct GameRecord {
    game_number: usize,
    /// None when the turn cap hit first
    outcome: Option<Outcome>,
    turns: u32,
}

/// Aggregated match results
#[derive(Clone, Debug)]
struct MatchResults {
    games: Vec<GameRecord>,
    blue_wins: usize,
    red_wins: usize,
    unfinished: usize,
    joined: usize,
    caught: usize,
    separated: usize,
    avg_turns: f32,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run simulate command
///
/// 1. Load the engine configuration
/// 2. Play the match (multiple games)
/// 3. Report results
pub fn run(args: SimulateArgs, seed: Option<u64>) -> Result<()> {
    let config = load_config(&args, seed)?;
    let mode: Mode = args.mode.into();

    tracing::info!(
        "Starting simulation: {} games, mode={}, blue={:?}, red={:?}",
        args.games,
        mode,
        args.blue,
        args.red
    );

    let results = play_match(config, &args, seed)?;

    report_results(&results, &args);

    Ok(())
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Load the engine configuration, applying the command-line seed
fn load_config(args: &SimulateArgs, seed: Option<u64>) -> Result<EngineConfig> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if seed.is_some() {
        config.seed = seed;
    }
    Ok(config)
}

/// Play all games in the match on one engine
fn play_match(config: EngineConfig, args: &SimulateArgs, seed: Option<u64>) -> Result<MatchResults> {
    let mode: Mode = args.mode.into();
    let mut rng = create_rng(seed);
    let mut engine = GameEngine::new(config, mode).context("Invalid engine configuration")?;
    let mut games = Vec::with_capacity(args.games);

    for game_num in 0..args.games {
        if game_num > 0 {
            engine.reset(mode);
        }

        let record = play_single_game(&mut engine, game_num + 1, args, &mut rng);

        match record.outcome {
            Some(outcome) => tracing::info!("Game {}: {} ({} turns)", record.game_number, outcome, record.turns),
            None => tracing::info!("Game {}: unfinished ({} turns)", record.game_number, record.turns),
        }

        games.push(record);
    }

    Ok(compute_match_statistics(games))
}

/// Report match results
fn report_results(results: &MatchResults, args: &SimulateArgs) {
    if args.json {
        print_json_results(results);
    } else {
        print_text_results(results);
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

/// Drive one game until it ends, stalls or hits the turn cap
fn play_single_game(
    engine: &mut GameEngine,
    game_number: usize,
    args: &SimulateArgs,
    rng: &mut ChaCha8Rng,
) -> GameRecord {
    while !engine.is_over() && engine.turn_number() < args.max_turns {
        let side = engine.side_to_move();
        let kind = match side {
            Side::Blue => args.blue,
            Side::Red => args.red,
        };

        let Some(direction) = choose_direction(engine, side, kind, rng) else {
            tracing::warn!("Game {}: {} has no legal move", game_number, side);
            break;
        };

        if let Err(e) = engine.try_intent(Intent { side, direction }) {
            tracing::warn!("Game {}: bot move rejected: {}", game_number, e);
            break;
        }
    }

    GameRecord {
        game_number,
        outcome: engine.outcome(),
        turns: engine.turn_number(),
    }
}

/// Pick a legal direction for `side`
fn choose_direction(engine: &GameEngine, side: Side, kind: BotKind, rng: &mut ChaCha8Rng) -> Option<Direction> {
    let graph = engine.graph();
    let me = engine.position(side);
    let other = engine.position(side.opponent());

    let moves = graph.valid_moves(me);
    if moves.is_empty() {
        return None;
    }

    let cell = match kind {
        BotKind::Greedy => {
            let behavior = if side == attacker(engine.mode()) {
                Behavior::Attack
            } else {
                Behavior::Evade
            };
            let agent = Agent::new(behavior, engine.config());
            match agent.choose_move(graph, me, other) {
                Ok(cell) => cell,
                Err(_) => *moves.choose(rng)?,
            }
        }
        BotKind::Random => *moves.choose(rng)?,
    };

    Direction::between(me, cell)
}

/// Compute aggregate statistics from game records
fn compute_match_statistics(games: Vec<GameRecord>) -> MatchResults {
    let wins = |side| games.iter().filter(|g| g.outcome.is_some_and(|o| o.winner == side)).count();
    let kinds = |kind| games.iter().filter(|g| g.outcome.is_some_and(|o| o.kind == kind)).count();

    let blue_wins = wins(Side::Blue);
    let red_wins = wins(Side::Red);
    let joined = kinds(OutcomeKind::Joined);
    let caught = kinds(OutcomeKind::Caught);
    let separated = kinds(OutcomeKind::Separated);
    let unfinished = games.iter().filter(|g| g.outcome.is_none()).count();

    let total_turns: u32 = games.iter().map(|g| g.turns).sum();
    let avg_turns = if games.is_empty() {
        0.0
    } else {
        total_turns as f32 / games.len() as f32
    };

    MatchResults {
        games,
        blue_wins,
        red_wins,
        unfinished,
        joined,
        caught,
        separated,
        avg_turns,
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}

fn percent(count: usize, total: usize) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(results: &MatchResults) {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        outcome: Option<Outcome>,
        turns: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput {
        total_games: usize,
        blue_wins: usize,
        red_wins: usize,
        unfinished: usize,
        joined: usize,
        caught: usize,
        separated: usize,
        avg_turns: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        total_games: results.games.len(),
        blue_wins: results.blue_wins,
        red_wins: results.red_wins,
        unfinished: results.unfinished,
        joined: results.joined,
        caught: results.caught,
        separated: results.separated,
        avg_turns: results.avg_turns,
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                outcome: g.outcome,
                turns: g.turns,
            })
            .collect(),
    };

    if let Ok(json) = serde_json::to_string_pretty(&output) {
        println!("{}", json);
    }
}

/// Print results as text
fn print_text_results(results: &MatchResults) {
    let total = results.games.len();

    println!("\n=== Simulation Results ===");
    println!("Total games: {}", total);
    println!("Blue wins:   {} ({:.1}%)", results.blue_wins, percent(results.blue_wins, total));
    println!("Red wins:    {} ({:.1}%)", results.red_wins, percent(results.red_wins, total));
    println!("Unfinished:  {} ({:.1}%)", results.unfinished, percent(results.unfinished, total));
    println!(
        "Endings:     {} joined, {} caught, {} separated",
        results.joined, results.caught, results.separated
    );
    println!("Avg turns:   {:.1}", results.avg_turns);

    println!("\nGame details:");
    for game in &results.games {
        match game.outcome {
            Some(outcome) => println!("  Game {}: {} in {} turns", game.game_number, outcome, game.turns),
            None => println!("  Game {}: unfinished after {} turns", game.game_number, game.turns),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
