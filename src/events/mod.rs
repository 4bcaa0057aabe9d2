//! Append-only pool event log.
//!
//! Every committed pool operation appends one or more [`PoolEvent`]s. The
//! log is the pool's only output channel to the indexer, which polls it
//! with [`EventLog::events_since`].

mod event;
mod log;

pub use event::{LoggedEvent, PoolEvent};
pub use log::EventLog;
