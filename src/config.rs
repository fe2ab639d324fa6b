use crate::Percent;
use serde::Deserialize;
use std::path::Path;

/// Tuning knobs for a full analysis.
///
/// Defaults come from the crate-level constants. Any subset of fields can be
/// overridden from a JSON file; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Monte Carlo iterations for the headline win/tie/loss numbers.
    pub iterations: usize,
    /// Iterations per heatmap card at small tables.
    pub heatmap_iterations: usize,
    /// Iterations per heatmap card once the table is crowded.
    pub heatmap_iterations_crowded: usize,
    /// Opponent count above which the table counts as crowded.
    pub crowded_table: usize,
    /// Equity points over current win% that make a card beneficial.
    pub beneficial_margin: Percent,
    /// Share of a rank's or suit's cards that must be beneficial.
    pub group_share: f32,
    /// Fewest beneficial cards of one rank that name a draw.
    pub rank_group_min: usize,
    /// Fewest beneficial cards of one suit that name a draw.
    pub suit_group_min: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            iterations: crate::SIMULATION_ITERATIONS,
            heatmap_iterations: crate::HEATMAP_ITERATIONS,
            heatmap_iterations_crowded: crate::HEATMAP_ITERATIONS_CROWDED,
            crowded_table: crate::HEATMAP_CROWDED_TABLE,
            beneficial_margin: crate::BENEFICIAL_MARGIN,
            group_share: crate::GROUP_SHARE,
            rank_group_min: crate::RANK_GROUP_MIN,
            suit_group_min: crate::SUIT_GROUP_MIN,
        }
    }
}

impl Config {
    /// Reads overrides from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("read config {}: {}", path.display(), e))?;
        let config = serde_json::from_str::<Self>(&text)
            .map_err(|e| anyhow::anyhow!("parse config {}: {}", path.display(), e))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Heatmap budget per candidate card, reduced as opponents multiply.
    pub fn heatmap_budget(&self, opponents: usize) -> usize {
        if opponents <= self.crowded_table {
            self.heatmap_iterations
        } else {
            self.heatmap_iterations_crowded
        }
    }
}
