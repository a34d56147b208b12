//! Constant-product swap math for a single hop.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, BigUint};
use num_traits::{One, Zero};

/// Basis-point denominator: 10_000 bps = 100%.
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Outcome of pushing one input amount through a single pool.
///
/// Fee amounts are denominated in the hop's input asset and were deducted
/// before the constant-product division ran.
#[derive(Debug, Clone)]
pub struct HopQuote {
    pub amount_out: BigUint,
    pub host_fee: BigUint,
    pub lp_fee: BigUint,
    /// Signed percentage; negative would mean the realized price beat spot.
    pub price_impact_pct: BigDecimal,
}

/// Quote a swap of `amount_in` against a live constant-product pool.
///
/// Both reserves and the input amount must be non-zero; the caller handles
/// drained pools and zero input before reaching the math.
pub fn quote_constant_product(
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    host_fee_bps: u32,
    lp_fee_bps: u32,
    amount_in: &BigUint,
) -> HopQuote {
    debug_assert!(!reserve_in.is_zero() && !reserve_out.is_zero());
    debug_assert!(!amount_in.is_zero());

    // Each fee component is floored independently; the AMM input is reduced
    // by the exact sum of the two floors so totals reconcile to the unit.
    let host_fee = fee_amount(amount_in, host_fee_bps);
    let lp_fee = fee_amount(amount_in, lp_fee_bps);
    let amount_in_after_fees = amount_in - &host_fee - &lp_fee;

    // Constant product x * y = k: out = y - k / (x + in), which reduces to
    // out = in * y / (x + in) under floor division.
    let new_reserve_in = reserve_in + &amount_in_after_fees;
    let amount_out = &amount_in_after_fees * reserve_out / &new_reserve_in;

    let price_impact_pct = price_impact_pct(reserve_in, reserve_out, amount_in, &amount_out);

    HopQuote {
        amount_out,
        host_fee,
        lp_fee,
        price_impact_pct,
    }
}

/// Floor of `amount * bps / 10_000`.
fn fee_amount(amount: &BigUint, bps: u32) -> BigUint {
    amount * BigUint::from(bps) / BigUint::from(BPS_DENOMINATOR)
}

/// Price impact of the hop as a signed percentage of the pre-trade spot
/// price: `(spot - execution) / spot * 100`, with `spot = reserve_out /
/// reserve_in` and `execution = amount_out / amount_in` (fee inclusive).
fn price_impact_pct(
    reserve_in: &BigUint,
    reserve_out: &BigUint,
    amount_in: &BigUint,
    amount_out: &BigUint,
) -> BigDecimal {
    // (spot - execution) / spot = 1 - (amount_out * reserve_in) /
    // (amount_in * reserve_out); one division boundary, everything before it
    // stays in integers.
    let numerator = BigDecimal::from(BigInt::from(amount_out * reserve_in));
    let denominator = BigDecimal::from(BigInt::from(amount_in * reserve_out));
    (BigDecimal::one() - numerator / denominator) * BigDecimal::from(100)
}
