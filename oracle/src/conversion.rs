//! Spread-aware conversion of an amount through a single leg.

use alloy_primitives::U256;
use crossquote_common::{FeedPrice, PriceError};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::config::{MidpointStrategy, SpreadPolicy};
use crate::error::{OracleError, OracleResult};
use crate::math::{self, Rounding};
use crate::path::{Direction, Leg};

const BPS_DENOMINATOR: u64 = 10_000;

/// An exact, strictly positive price `num / den`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    num: U256,
    den: U256,
}

impl Ratio {
    /// Exact rational form of a positive decimal.
    pub fn from_decimal(value: Decimal) -> Option<Self> {
        if value <= Decimal::ZERO {
            return None;
        }
        let num = U256::from(value.mantissa().unsigned_abs());
        let den = U256::from(10u64).pow(U256::from(value.scale()));
        Some(Self { num, den })
    }

    pub fn num(&self) -> U256 {
        self.num
    }

    pub fn den(&self) -> U256 {
        self.den
    }

    /// `1 / self`.
    pub fn reciprocal(self) -> Self {
        Self {
            num: self.den,
            den: self.num,
        }
    }

    // Operands stay far below 2^128 (96-bit mantissa, 10^28 scale, bps <= 2 * 10^4),
    // so the products cannot overflow 256 bits.
    fn scaled(self, num_factor: u64, den_factor: u64) -> Self {
        Self {
            num: self.num * U256::from(num_factor),
            den: self.den * U256::from(den_factor),
        }
    }
}

/// Bid and ask of a leg, oriented in the direction it is traversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegPrice {
    pub bid: Ratio,
    pub ask: Ratio,
}

impl LegPrice {
    /// Exact bid/ask from a feed price, as stored by the feed.
    pub fn from_feed(price: &FeedPrice) -> Result<Self, PriceError> {
        price.validate()?;
        match (Ratio::from_decimal(price.bid), Ratio::from_decimal(price.ask)) {
            (Some(bid), Some(ask)) => Ok(Self { bid, ask }),
            _ => Err(PriceError::NonPositive {
                pair: price.pair,
                bid: price.bid,
                ask: price.ask,
            }),
        }
    }

    /// Orient for traversal. Inversion reciprocates and swaps sides, so the
    /// inverted bid is `1 / ask` and the inverted ask is `1 / bid`.
    pub fn oriented(self, direction: Direction) -> Self {
        match direction {
            Direction::Forward => self,
            Direction::Inverted => Self {
                bid: self.ask.reciprocal(),
                ask: self.bid.reciprocal(),
            },
        }
    }

    /// Apply the spread policy: bid moves down and ask moves up.
    pub fn widened(self, policy: SpreadPolicy) -> Self {
        match policy {
            SpreadPolicy::Passthrough => self,
            SpreadPolicy::Widen { bps } => {
                let bps = u64::from(bps).min(BPS_DENOMINATOR - 1);
                Self {
                    bid: self.bid.scaled(BPS_DENOMINATOR - bps, BPS_DENOMINATOR),
                    ask: self.ask.scaled(BPS_DENOMINATOR + bps, BPS_DENOMINATOR),
                }
            }
        }
    }
}

/// A leg with its oriented price and the decimals of both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricedLeg {
    pub leg: Leg,
    pub price: LegPrice,
    /// Decimals of `leg.from()`.
    pub from_decimals: u8,
    /// Decimals of `leg.to()`.
    pub to_decimals: u8,
}

/// Bid and ask output amounts in quote-asset units; `bid <= ask`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TwoSidedAmount {
    pub bid: U256,
    pub ask: U256,
}

impl TwoSidedAmount {
    pub fn new(bid: U256, ask: U256) -> Self {
        debug_assert!(bid <= ask, "bid {} above ask {}", bid, ask);
        Self { bid, ask }
    }

    /// Zero-spread amount.
    pub fn identity(amount: U256) -> Self {
        Self {
            bid: amount,
            ask: amount,
        }
    }

    pub fn spread(&self) -> U256 {
        self.ask - self.bid
    }

    /// Single-sided value between bid and ask.
    pub fn midpoint(&self, strategy: MidpointStrategy) -> U256 {
        match strategy {
            MidpointStrategy::Geometric => math::geometric_mean(self.bid, self.ask),
            MidpointStrategy::Arithmetic => self.bid + (self.ask - self.bid) / U256::from(2u64),
        }
    }
}

/// Convert one side of an amount at `price`, rescaling between decimals.
pub fn convert_amount(
    amount: U256,
    price: Ratio,
    from_decimals: u8,
    to_decimals: u8,
    rounding: Rounding,
) -> OracleResult<U256> {
    let mut num = math::widen(price.num);
    let mut den = math::widen(price.den);

    if to_decimals >= from_decimals {
        let factor = math::pow10(u32::from(to_decimals - from_decimals)).ok_or(OracleError::Overflow)?;
        num = num.checked_mul(factor).ok_or(OracleError::Overflow)?;
    } else {
        let factor = math::pow10(u32::from(from_decimals - to_decimals)).ok_or(OracleError::Overflow)?;
        den = den.checked_mul(factor).ok_or(OracleError::Overflow)?;
    }

    math::mul_div(amount, num, den, rounding).ok_or(OracleError::Overflow)
}

/// Convert an amount through one leg: bid rounded down, ask rounded up.
pub fn convert_leg(amount: U256, leg: &PricedLeg) -> OracleResult<TwoSidedAmount> {
    convert_sides(TwoSidedAmount::identity(amount), leg)
}

/// Convert each side separately through one leg: the bid input at the leg's
/// bid (rounded down), the ask input at the leg's ask (rounded up).
pub fn convert_sides(amount: TwoSidedAmount, leg: &PricedLeg) -> OracleResult<TwoSidedAmount> {
    let bid = convert_amount(
        amount.bid,
        leg.price.bid,
        leg.from_decimals,
        leg.to_decimals,
        Rounding::Down,
    )?;
    let ask = convert_amount(
        amount.ask,
        leg.price.ask,
        leg.from_decimals,
        leg.to_decimals,
        Rounding::Up,
    )?;
    Ok(TwoSidedAmount::new(bid, ask))
}
