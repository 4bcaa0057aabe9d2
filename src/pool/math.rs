//! Pure constant-product formulas.
//!
//! Nothing here touches pool state: every function takes the reserves it
//! needs and returns a value or an error. All multiplications of two
//! amounts go through 256-bit intermediates.

use crate::domain::{Amount, Asset, BasisPoints, FeeTier, Rounding, SwapDirection, SwapResult};
use crate::error::AmmError;
use crate::math::{mul_div, sqrt_product, CheckedArithmetic};

/// Quotes a swap of `amount_in` against `(reserve_in, reserve_out)`.
///
/// The 30 bp fee is taken from the input first, then
/// `amount_out = floor(after_fee * reserve_out / (reserve_in + after_fee))`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
/// - [`AmmError::InsufficientLiquidity`] if either reserve is zero or the
///   output would be zero or would drain `reserve_out`.
/// - [`AmmError::ArithmeticOverflow`] on overflow.
pub fn quote_swap(
    direction: SwapDirection,
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
) -> Result<SwapResult, AmmError> {
    if amount_in.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    let (after_fee, fee) = FeeTier::SWAP_FEE.split(amount_in)?;
    let denominator = reserve_in.safe_add(&after_fee)?;
    let amount_out = mul_div(after_fee, reserve_out, denominator, Rounding::Down)?;
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientLiquidity);
    }
    SwapResult::new(direction, amount_in, amount_out, fee)
}

/// Shares minted for depositing `(amount_a, amount_b)`.
///
/// The first deposit mints `floor(sqrt(a * b))`. Later deposits mint the
/// smaller of the two proportional claims, so the over-supplied side of an
/// imbalanced deposit is donated to existing holders.
///
/// # Errors
///
/// - [`AmmError::InsufficientLiquidity`] if the deposit would mint zero
///   shares.
/// - [`AmmError::ArithmeticOverflow`] on overflow, or if shares exist
///   while a reserve is zero.
pub fn mint_shares(
    amount_a: Amount,
    amount_b: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    supply: Amount,
) -> Result<Amount, AmmError> {
    let shares = if supply.is_zero() {
        sqrt_product(amount_a, amount_b)?
    } else {
        let by_a = mul_div(amount_a, supply, reserve_a, Rounding::Down)?;
        let by_b = mul_div(amount_b, supply, reserve_b, Rounding::Down)?;
        by_a.min(by_b)
    };
    if shares.is_zero() {
        return Err(AmmError::InsufficientLiquidity);
    }
    Ok(shares)
}

/// Underlying `(a, b)` owed for `shares` out of `supply`, rounded down.
///
/// # Errors
///
/// - [`AmmError::EmptyPool`] if `supply` is zero.
/// - [`AmmError::ArithmeticOverflow`] on overflow.
pub fn redeem(
    shares: Amount,
    reserve_a: Amount,
    reserve_b: Amount,
    supply: Amount,
) -> Result<(Amount, Amount), AmmError> {
    if supply.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    let a = mul_div(shares, reserve_a, supply, Rounding::Down)?;
    let b = mul_div(shares, reserve_b, supply, Rounding::Down)?;
    Ok((a, b))
}

/// Counterpart amount for a balanced deposit of `amount` on `side`.
///
/// # Errors
///
/// - [`AmmError::ZeroAmount`] if `amount` is zero.
/// - [`AmmError::InvalidAsset`] if `side` is [`Asset::Share`].
/// - [`AmmError::EmptyPool`] if the pool has no reserves (any ratio is
///   accepted then).
/// - [`AmmError::ArithmeticOverflow`] on overflow.
pub fn quote_deposit(
    amount: Amount,
    side: Asset,
    reserve_a: Amount,
    reserve_b: Amount,
) -> Result<Amount, AmmError> {
    if amount.is_zero() {
        return Err(AmmError::ZeroAmount);
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(AmmError::EmptyPool);
    }
    match side {
        Asset::A => mul_div(amount, reserve_b, reserve_a, Rounding::Down),
        Asset::B => mul_div(amount, reserve_a, reserve_b, Rounding::Down),
        Asset::Share => Err(AmmError::InvalidAsset("deposits are quoted in asset A or B")),
    }
}

/// Fraction of `supply` held as `shares`, floored to whole basis points.
///
/// # Errors
///
/// Returns [`AmmError::ArithmeticOverflow`] if `shares > supply`.
pub fn share_of_pool(shares: Amount, supply: Amount) -> Result<BasisPoints, AmmError> {
    if supply.is_zero() {
        return Ok(BasisPoints::ZERO);
    }
    if shares > supply {
        return Err(AmmError::ArithmeticOverflow("shares exceed supply"));
    }
    let bps = mul_div(
        shares,
        Amount::new(u128::from(BasisPoints::MAX_PERCENT.get())),
        supply,
        Rounding::Down,
    )?;
    // bps <= 10_000 because shares <= supply
    u32::try_from(bps.get())
        .map(BasisPoints::new)
        .map_err(|_| AmmError::ArithmeticOverflow("share of pool exceeds u32"))
}

/// Lowest acceptable output for a quote under a slippage tolerance, e.g.
/// 50 bp (0.5%) keeps `floor(quote * 9_950 / 10_000)`.
///
/// # Errors
///
/// Returns [`AmmError::InvalidConfiguration`] if `slippage` exceeds 100%.
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, BasisPoints};
/// use simple_dex::pool::min_amount_out;
///
/// assert_eq!(min_amount_out(Amount::new(10_000), BasisPoints::new(50)), Ok(Amount::new(9_950)));
/// ```
pub fn min_amount_out(quote: Amount, slippage: BasisPoints) -> Result<Amount, AmmError> {
    let keep = slippage.complement()?;
    mul_div(
        quote,
        Amount::new(u128::from(keep.get())),
        Amount::new(u128::from(BasisPoints::MAX_PERCENT.get())),
        Rounding::Down,
    )
}
