//! Trailing daily trading statistics.

mod daily;
mod tracker;

pub use daily::DailyStats;
pub use tracker::StatsTracker;
pub(crate) use tracker::StatsCheckpoint;
