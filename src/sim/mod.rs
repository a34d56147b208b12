//! Route-swap simulation engine.
//!
//! Folds an input amount through an ordered list of pool hops, threading
//! each hop's output into the next hop's input. Pure over its inputs: pool
//! records are read-only snapshots and nothing persists across calls.

use std::str::FromStr;

use bigdecimal::{BigDecimal, RoundingMode};
use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::errors::{Result, SimulationError};
use crate::models::{HopBreakdown, Pool, RouteHop, RouteSwapSimulateRequest, RouteSwapSimulateResponse};
use crate::registry::PoolLookup;

pub mod swap;

pub use swap::{BPS_DENOMINATOR, HopQuote, quote_constant_product};

/// Routes whose summed price impact exceeds this many percentage points get
/// the high-impact warning.
const HIGH_IMPACT_THRESHOLD_PCT: u32 = 5;

/// Routes longer than this many hops get the multi-hop slippage advisory.
const MULTI_HOP_WARNING_THRESHOLD: usize = 2;

/// Simulate a route swap against the given pool catalog.
///
/// Hops run strictly in request order. Fatal conditions (unknown pool,
/// input asset on neither side of a live pool, unparseable amount, empty
/// route) are detected before any hop executes, so an `Err` never carries a
/// partial breakdown. A drained pool is not fatal: the hop reports zero
/// output and 100% impact, and the rest of the route runs on zero input.
pub fn simulate_route_swap(
    catalog: &impl PoolLookup,
    request: &RouteSwapSimulateRequest,
) -> Result<RouteSwapSimulateResponse> {
    if request.hops.is_empty() {
        return Err(SimulationError::EmptyRoute);
    }
    let initial_amount = parse_amount(&request.amount_in)?;
    let pools = resolve_pools(catalog, &request.hops)?;

    let mut current_amount = initial_amount.clone();
    let mut total_host_fee = BigUint::zero();
    let mut total_lp_fee = BigUint::zero();
    let mut total_price_impact_pct = BigDecimal::zero();
    let mut hop_breakdown = Vec::with_capacity(request.hops.len());

    for (hop, pool) in request.hops.iter().zip(&pools) {
        let reserve_a = pool.reserve_a();
        let reserve_b = pool.reserve_b();

        // A drained pool produces nothing and zeroes the rest of the route;
        // a hop that is already running on zero input reports the same way.
        if reserve_a.is_zero() || reserve_b.is_zero() || current_amount.is_zero() {
            hop_breakdown.push(HopBreakdown {
                amount_in: current_amount.to_string(),
                amount_out: "0".to_string(),
                pool_id: hop.pool_id.clone(),
                price_impact_pct: "100%".to_string(),
            });
            current_amount = BigUint::zero();
            continue;
        }

        let swap_a_to_b = hop.asset_in_address == pool.asset_a_address;
        let (reserve_in, reserve_out) = if swap_a_to_b {
            (reserve_a, reserve_b)
        } else {
            (reserve_b, reserve_a)
        };

        let quote = swap::quote_constant_product(
            &reserve_in,
            &reserve_out,
            pool.host_fee_bps,
            pool.lp_fee_bps,
            &current_amount,
        );

        total_host_fee += &quote.host_fee;
        total_lp_fee += &quote.lp_fee;
        total_price_impact_pct += &quote.price_impact_pct;

        hop_breakdown.push(HopBreakdown {
            amount_in: current_amount.to_string(),
            amount_out: quote.amount_out.to_string(),
            pool_id: hop.pool_id.clone(),
            price_impact_pct: format_pct(&quote.price_impact_pct),
        });

        current_amount = quote.amount_out;
    }

    let warning_message = route_warning(&total_price_impact_pct, request.hops.len());

    Ok(RouteSwapSimulateResponse {
        execution_price: execution_price(&current_amount, &initial_amount),
        hop_breakdown,
        output_amount: current_amount.to_string(),
        total_host_fee: total_host_fee.to_string(),
        total_lp_fee: total_lp_fee.to_string(),
        total_price_impact_pct: format_pct(&total_price_impact_pct),
        warning_message,
    })
}

/// Resolve every hop's pool and validate direction before any hop runs.
///
/// Direction is derived from which side the input asset sits on; an asset
/// matching neither side of a live pool is a caller error. Drained pools
/// skip the check since they short-circuit before a direction is taken.
fn resolve_pools(catalog: &impl PoolLookup, hops: &[RouteHop]) -> Result<Vec<Pool>> {
    hops.iter()
        .map(|hop| {
            let pool = catalog
                .lookup(&hop.pool_id)
                .ok_or_else(|| SimulationError::PoolNotFound(hop.pool_id.clone()))?;
            if pool.has_liquidity() && !pool.contains_asset(&hop.asset_in_address) {
                return Err(SimulationError::InvalidHop {
                    pool_id: hop.pool_id.clone(),
                    asset_in: hop.asset_in_address.clone(),
                });
            }
            Ok(pool)
        })
        .collect()
}

/// Parse a positive, integer-valued decimal string into smallest units.
fn parse_amount(raw: &str) -> Result<BigUint> {
    let invalid = || SimulationError::InvalidAmount(raw.to_string());
    let value = BigDecimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if !value.is_integer() || value <= BigDecimal::zero() {
        return Err(invalid());
    }
    let (digits, _) = value.with_scale(0).into_bigint_and_exponent();
    digits.to_biguint().ok_or_else(invalid)
}

/// Two-decimal, half-up percentage rendering, e.g. `"3.64%"`.
fn format_pct(value: &BigDecimal) -> String {
    format!("{}%", value.with_scale_round(2, RoundingMode::HalfUp))
}

/// Realized average price of the whole route, output units per input unit.
fn execution_price(output_amount: &BigUint, amount_in: &BigUint) -> String {
    let ratio = BigDecimal::from(BigInt::from(output_amount.clone()))
        / BigDecimal::from(BigInt::from(amount_in.clone()));
    ratio
        .with_scale_round(18, RoundingMode::HalfUp)
        .normalized()
        .to_string()
}

/// First match wins: a high-impact route never also gets the multi-hop
/// advisory, and at most one warning is ever set.
fn route_warning(total_price_impact_pct: &BigDecimal, hop_count: usize) -> Option<String> {
    if *total_price_impact_pct > BigDecimal::from(HIGH_IMPACT_THRESHOLD_PCT) {
        Some(format!(
            "High price impact: {}%",
            total_price_impact_pct.with_scale_round(2, RoundingMode::HalfUp)
        ))
    } else if hop_count > MULTI_HOP_WARNING_THRESHOLD {
        Some("Multi-hop route may have higher slippage".to_string())
    } else {
        None
    }
}
