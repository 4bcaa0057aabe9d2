//! Event records consumed by the off-chain indexer.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{Address, Amount};
use crate::stats::DailyStats;

/// Something a committed pool operation did.
///
/// Serialized with an `"event"` tag carrying the variant name, so a log can
/// be shipped as JSON lines:
///
/// ```
/// use simple_dex::domain::Amount;
/// use simple_dex::events::PoolEvent;
///
/// let e = PoolEvent::DailyStatsUpdated {
///     day: 20_000,
///     volume_a: Amount::new(5),
///     volume_b: Amount::ZERO,
///     fees: Amount::new(1),
///     transactions: 1,
/// };
/// let json = serde_json::to_string(&e).expect("serialize");
/// assert!(json.starts_with(r#"{"event":"DailyStatsUpdated","day":20000"#));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum PoolEvent {
    /// Assets deposited and shares minted.
    LiquidityAdded {
        /// Depositor, also the share recipient.
        provider: Address,
        /// Asset A deposited.
        amount_a: Amount,
        /// Asset B deposited.
        amount_b: Amount,
        /// Shares minted.
        shares_minted: Amount,
        /// Unix seconds.
        timestamp: u64,
    },
    /// Shares burned and assets paid out.
    LiquidityRemoved {
        /// Redeemer, also the payout recipient.
        provider: Address,
        /// Asset A paid out.
        amount_a: Amount,
        /// Asset B paid out.
        amount_b: Amount,
        /// Shares burned.
        shares_burned: Amount,
        /// Unix seconds.
        timestamp: u64,
    },
    /// One asset exchanged for the other.
    Swap {
        /// Trader.
        user: Address,
        /// Token contract sold.
        token_in: Address,
        /// Token contract bought.
        token_out: Address,
        /// Gross input including the fee.
        amount_in: Amount,
        /// Output paid to the trader.
        amount_out: Amount,
        /// Fee retained in the input reserve.
        fee: Amount,
        /// Unix seconds.
        timestamp: u64,
    },
    /// Cumulative counters of a day bucket after a swap.
    DailyStatsUpdated {
        /// Day index.
        day: u64,
        /// Asset A volume so far that day.
        volume_a: Amount,
        /// Asset B volume so far that day.
        volume_b: Amount,
        /// Fees so far that day.
        fees: Amount,
        /// Swaps so far that day.
        transactions: u64,
    },
}

impl PoolEvent {
    /// Variant name, the same string used as the serialized tag.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LiquidityAdded { .. } => "LiquidityAdded",
            Self::LiquidityRemoved { .. } => "LiquidityRemoved",
            Self::Swap { .. } => "Swap",
            Self::DailyStatsUpdated { .. } => "DailyStatsUpdated",
        }
    }
}

impl From<DailyStats> for PoolEvent {
    fn from(stats: DailyStats) -> Self {
        Self::DailyStatsUpdated {
            day: stats.day,
            volume_a: stats.volume_a,
            volume_b: stats.volume_b,
            fees: stats.fees_collected,
            transactions: stats.tx_count,
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LiquidityAdded {
                provider,
                shares_minted,
                ..
            } => write!(f, "LiquidityAdded({provider}, +{shares_minted} shares)"),
            Self::LiquidityRemoved {
                provider,
                shares_burned,
                ..
            } => write!(f, "LiquidityRemoved({provider}, -{shares_burned} shares)"),
            Self::Swap {
                user,
                amount_in,
                amount_out,
                ..
            } => write!(f, "Swap({user}, {amount_in} -> {amount_out})"),
            Self::DailyStatsUpdated {
                day, transactions, ..
            } => write!(f, "DailyStatsUpdated(day {day}, {transactions} txs)"),
        }
    }
}

/// A [`PoolEvent`] with its position in the log.
///
/// Sequence numbers start at zero and increase by one per event, so
/// `seq + 1` is the cursor for resuming after this entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedEvent {
    /// Position in the log.
    pub seq: u64,
    /// The event.
    #[serde(flatten)]
    pub event: PoolEvent,
}
