pub mod equity;

pub mod heatmap;
pub use heatmap::*;

pub mod scenario;
pub use scenario::*;

pub mod tally;
pub use tally::*;
