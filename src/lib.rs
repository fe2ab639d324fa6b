//! Monte Carlo equity, outs, draws and board texture for Texas Hold'em.
//!
//! ## Modules
//!
//! - [`cards`]: Card codec, card sets, the live [`cards::Deck`]
//! - [`evaluation`]: Closed-form best-of-21 evaluator and [`evaluation::Strength`]
//! - [`simulation`]: Validated [`simulation::Scenario`], Monte Carlo equity, heatmaps
//! - [`analysis`]: Outs, board texture, draw grouping and the full [`analysis::Report`]
//!
//! All percentages are on a 0 to 100 scale.
pub mod analysis;
pub mod cards;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod simulation;

pub use config::Config;
pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Win, tie, loss and draw likelihoods, on a 0 to 100 scale.
pub type Percent = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MONTE CARLO SIMULATION
// ============================================================================
/// Iterations for a full equity simulation.
pub const SIMULATION_ITERATIONS: usize = 20_000;
/// Iterations per candidate card when building a heatmap.
pub const HEATMAP_ITERATIONS: usize = 150;
/// Iterations per candidate card against a crowded table.
pub const HEATMAP_ITERATIONS_CROWDED: usize = 80;
/// Largest opponent count that still gets the full heatmap budget.
pub const HEATMAP_CROWDED_TABLE: usize = 3;

// ============================================================================
// DRAW GROUPING
// Heuristic thresholds for naming draws ("any Five", "any Heart") from a heatmap.
// ============================================================================
/// Equity points a card must add over current win% to count as beneficial.
pub const BENEFICIAL_MARGIN: Percent = 5.0;
/// Share of a rank's or suit's tested cards that must be beneficial.
pub const GROUP_SHARE: f32 = 0.75;
/// Fewest beneficial cards of one rank that name a draw.
pub const RANK_GROUP_MIN: usize = 2;
/// Fewest beneficial cards of one suit that name a draw.
pub const SUIT_GROUP_MIN: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
