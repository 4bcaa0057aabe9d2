//! Unified error types for the simple-dex core.
//!
//! All fallible operations across the crate return [`AmmError`] as their
//! error type. Every error is reported synchronously by the operation that
//! failed, and a failed pool operation never leaves a partial effect behind.

use thiserror::Error;

/// Errors raised by ledgers, pricing math, statistics and pool operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    /// An amount that must be strictly positive was zero.
    #[error("amount must be greater than zero")]
    ZeroAmount,

    /// The debited owner holds less than the requested amount.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Balance currently held.
        have: u128,
        /// Amount requested.
        need: u128,
    },

    /// The spender's allowance is lower than the requested amount.
    #[error("insufficient allowance: approved {approved}, need {need}")]
    InsufficientAllowance {
        /// Allowance currently granted.
        approved: u128,
        /// Amount requested.
        need: u128,
    },

    /// The caller tried to redeem more shares than they own.
    #[error("insufficient shares: have {have}, need {need}")]
    InsufficientShares {
        /// Shares currently held.
        have: u128,
        /// Shares requested.
        need: u128,
    },

    /// The pool has no outstanding shares.
    #[error("pool has no liquidity")]
    EmptyPool,

    /// Reserves cannot satisfy the operation (zero output, reserve drain,
    /// or a deposit too small to mint a share).
    #[error("insufficient liquidity")]
    InsufficientLiquidity,

    /// The executed output fell below the caller's minimum.
    #[error("slippage exceeded: minimum {minimum}, actual {actual}")]
    SlippageExceeded {
        /// Minimum output the caller accepted.
        minimum: u128,
        /// Output the pool would have paid.
        actual: u128,
    },

    /// An addition, multiplication or narrowing step overflowed.
    #[error("arithmetic overflow: {0}")]
    ArithmeticOverflow(&'static str),

    /// The requested asset or account cannot be used for this operation.
    #[error("invalid asset: {0}")]
    InvalidAsset(&'static str),

    /// Pool configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// The time source could not produce a timestamp.
    #[error("clock error: {0}")]
    Clock(&'static str),
}

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;
