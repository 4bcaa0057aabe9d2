//! Explicit rounding direction for integer division.

/// Rounding direction for every division in pool math.
///
/// Pool math always rounds against the caller: quotes, minted shares and
/// payouts round [`Down`](Rounding::Down); the retained swap fee rounds
/// [`Up`](Rounding::Up).
///
/// # Examples
///
/// ```
/// use simple_dex::domain::{Amount, Rounding};
///
/// let q = Amount::new(10).checked_div(&Amount::new(4), Rounding::Up);
/// assert_eq!(q, Some(Amount::new(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
