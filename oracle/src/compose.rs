//! Composition of leg conversions across a path.

use alloy_primitives::U256;
use tracing::debug;

use crate::conversion::{convert_sides, PricedLeg, TwoSidedAmount};
use crate::error::OracleResult;

/// Chain leg conversions from the path's base to its quote.
///
/// The bid output of each leg is the bid input of the next and likewise for
/// the ask. The two sides are never recombined mid-path, so the final pair
/// brackets the true cross price. An empty leg list is the identity.
pub fn compose_path(in_amount: U256, legs: &[PricedLeg]) -> OracleResult<TwoSidedAmount> {
    let mut amount = TwoSidedAmount::identity(in_amount);

    for priced in legs {
        amount = convert_sides(amount, priced)?;
        debug!(leg = %priced.leg, bid = %amount.bid, ask = %amount.ask, "Leg converted");
    }

    Ok(amount)
}
