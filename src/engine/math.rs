// dexkit Engine — Trade Math
// Gas margin, basis points and slippage bounds. Every amount is a BigUint
// and every scaling is multiply-then-divide in integer arithmetic.

use num_bigint::{BigInt, BigUint};
use num_traits::{Signed, Zero};
use std::fmt;

use super::currency::CurrencyAmount;
use crate::atoms::constants::{BIPS_BASE, GAS_MARGIN_NUMERATOR};
use crate::atoms::error::{DexError, DexResult};

// ── Gas margin ─────────────────────────────────────────────────────────────

/// Add 10% to a gas estimate: `floor(value * 11000 / 10000)`.
pub fn apply_gas_margin(value: &BigUint) -> BigUint {
    value * BigUint::from(GAS_MARGIN_NUMERATOR) / BigUint::from(BIPS_BASE)
}

// ── Percent ────────────────────────────────────────────────────────────────

/// An exact ratio. Two percents are equal when their values are, so
/// `250/10000 == 1/40`.
#[derive(Debug, Clone)]
pub struct Percent {
    numerator: BigInt,
    denominator: BigInt,
}

impl Percent {
    /// `None` when the denominator is zero.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Option<Self> {
        let denominator = denominator.into();
        if denominator.is_zero() {
            return None;
        }
        Some(Self { numerator: numerator.into(), denominator })
    }

    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// The percentage with `decimals` fractional digits, rounded half up
    /// (away from zero for negative values).
    pub fn to_fixed(&self, decimals: u32) -> String {
        let scale = BigInt::from(100u32) * BigInt::from(10u32).pow(decimals);
        let scaled = &self.numerator * scale;
        let negative = scaled.is_negative() != self.denominator.is_negative() && !scaled.is_zero();

        let n = scaled.magnitude();
        let d = self.denominator.magnitude();
        let mut q = n / d;
        let r = n % d;
        if r * 2u32 >= *d {
            q += 1u32;
        }

        let digits = q.to_string();
        let body = if decimals == 0 {
            digits
        } else {
            let width = decimals as usize + 1;
            let padded = format!("{:0>width$}", digits, width = width);
            let (int_part, frac_part) = padded.split_at(padded.len() - decimals as usize);
            format!("{}.{}", int_part, frac_part)
        };
        if negative && !q.is_zero() {
            format!("-{}", body)
        } else {
            body
        }
    }
}

impl PartialEq for Percent {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator == &other.numerator * &self.denominator
    }
}

impl Eq for Percent {}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.to_fixed(2))
    }
}

/// Convert basis points to a `Percent` over 10000. Out-of-range values are
/// accepted; callers validate at their own boundary.
pub fn basis_points_to_percent(bps: i64) -> Percent {
    Percent { numerator: BigInt::from(bps), denominator: BigInt::from(BIPS_BASE) }
}

// ── Slippage ───────────────────────────────────────────────────────────────

/// Acceptable realized amounts after slippage, in the quoted currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlippageBounds {
    pub lower: CurrencyAmount,
    pub upper: CurrencyAmount,
}

/// Bracket `amount` by `slippage_bps` on each side:
/// `floor(raw * (10000 ∓ bps) / 10000)`.
pub fn calculate_slippage_bounds(amount: &CurrencyAmount, slippage_bps: i64) -> DexResult<SlippageBounds> {
    if slippage_bps < 0 || slippage_bps > i64::from(BIPS_BASE) {
        return Err(DexError::InvalidRange(slippage_bps));
    }
    let bps = slippage_bps as u32;
    let base = BigUint::from(BIPS_BASE);

    let lower = amount.raw() * BigUint::from(BIPS_BASE - bps) / &base;
    let upper = amount.raw() * BigUint::from(BIPS_BASE + bps) / &base;
    Ok(SlippageBounds {
        lower: CurrencyAmount::new(amount.currency().clone(), lower),
        upper: CurrencyAmount::new(amount.currency().clone(), upper),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::types::ChainId;
    use crate::engine::currency::Currency;

    fn avax(raw: u128) -> CurrencyAmount {
        CurrencyAmount::new(Currency::native(ChainId::Avalanche), raw)
    }

    // -- gas margin ---------------------------------------------------------

    #[test]
    fn gas_margin_thousand() {
        assert_eq!(apply_gas_margin(&BigUint::from(1000u32)), BigUint::from(1100u32));
    }

    #[test]
    fn gas_margin_floors() {
        assert_eq!(apply_gas_margin(&BigUint::from(1u32)), BigUint::from(1u32));
        assert_eq!(apply_gas_margin(&BigUint::from(9u32)), BigUint::from(9u32));
        assert_eq!(apply_gas_margin(&BigUint::from(10u32)), BigUint::from(11u32));
    }

    #[test]
    fn gas_margin_beyond_u128() {
        let big = BigUint::from(u128::MAX) * BigUint::from(1000u32);
        let expected = BigUint::from(u128::MAX) * BigUint::from(1100u32);
        assert_eq!(apply_gas_margin(&big), expected);
    }

    // -- percent ------------------------------------------------------------

    #[test]
    fn bps_250_is_two_and_a_half_percent() {
        let p = basis_points_to_percent(250);
        assert_eq!(p.numerator(), &BigInt::from(250));
        assert_eq!(p.denominator(), &BigInt::from(10_000));
        assert_eq!(p, Percent::new(5, 200).unwrap());
        assert_eq!(p.to_fixed(2), "2.50");
        assert_eq!(p.to_string(), "2.50%");
    }

    #[test]
    fn bps_out_of_range_accepted() {
        assert_eq!(basis_points_to_percent(20_000).to_fixed(0), "200");
        assert_eq!(basis_points_to_percent(-50).to_fixed(2), "-0.50");
    }

    #[test]
    fn percent_rounding_half_up() {
        // 1/3 = 33.333…%
        assert_eq!(Percent::new(1, 3).unwrap().to_fixed(2), "33.33");
        // 2/3 = 66.666…%
        assert_eq!(Percent::new(2, 3).unwrap().to_fixed(2), "66.67");
        // 1 bp = 0.01%, at 1 decimal rounds to 0.0
        assert_eq!(basis_points_to_percent(1).to_fixed(1), "0.0");
        assert_eq!(basis_points_to_percent(5).to_fixed(1), "0.1");
    }

    #[test]
    fn percent_zero_denominator() {
        assert!(Percent::new(1, 0).is_none());
    }

    #[test]
    fn percent_inequality() {
        assert_ne!(basis_points_to_percent(50), basis_points_to_percent(51));
    }

    // -- slippage -----------------------------------------------------------

    #[test]
    fn slippage_fifty_bps() {
        let bounds = calculate_slippage_bounds(&avax(10_000), 50).unwrap();
        assert_eq!(bounds.lower.raw(), &BigUint::from(9_950u32));
        assert_eq!(bounds.upper.raw(), &BigUint::from(10_050u32));
        assert_eq!(bounds.lower.currency(), &Currency::native(ChainId::Avalanche));
    }

    #[test]
    fn slippage_zero_is_identity() {
        let bounds = calculate_slippage_bounds(&avax(12_345), 0).unwrap();
        assert_eq!(bounds.lower, avax(12_345));
        assert_eq!(bounds.upper, avax(12_345));
    }

    #[test]
    fn slippage_full_range() {
        let bounds = calculate_slippage_bounds(&avax(777), 10_000).unwrap();
        assert!(bounds.lower.raw().is_zero());
        assert_eq!(bounds.upper.raw(), &BigUint::from(1_554u32));
    }

    #[test]
    fn slippage_floors() {
        // 3 * 9950 / 10000 = 2.985 → 2 ; 3 * 10050 / 10000 = 3.015 → 3
        let bounds = calculate_slippage_bounds(&avax(3), 50).unwrap();
        assert_eq!(bounds.lower.raw(), &BigUint::from(2u32));
        assert_eq!(bounds.upper.raw(), &BigUint::from(3u32));
    }

    #[test]
    fn slippage_out_of_range() {
        assert!(matches!(calculate_slippage_bounds(&avax(1), -1), Err(DexError::InvalidRange(-1))));
        assert!(matches!(
            calculate_slippage_bounds(&avax(1), 10_001),
            Err(DexError::InvalidRange(10_001))
        ));
    }
}
