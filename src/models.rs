//! Shared data structures used throughout the application.
//!
//! All amount fields cross the wire as base-10 integer strings in the
//! asset's smallest unit; percentage fields carry a trailing `%`. Field
//! names are camelCase on the wire.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

/// Immutable catalog record for one AMM pool.
///
/// Reserves pair positionally with the asset addresses: `asset_a_reserve`
/// holds `asset_a_address` units. A missing or unparseable reserve counts
/// as zero, which marks the pool as drained.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    pub lp_public_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    /// Host fee rate in basis points, charged on top of the LP fee.
    pub host_fee_bps: u32,
    /// Liquidity-provider fee rate in basis points.
    pub lp_fee_bps: u32,
    pub asset_a_address: String,
    pub asset_b_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_a_reserve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_b_reserve: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price_a_in_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tvl_asset_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_24h_asset_b: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_percent_24h: Option<String>,
    pub created_at: String,
}

impl Pool {
    pub fn reserve_a(&self) -> BigUint {
        parse_reserve(self.asset_a_reserve.as_deref())
    }

    pub fn reserve_b(&self) -> BigUint {
        parse_reserve(self.asset_b_reserve.as_deref())
    }

    /// A pool with a zero reserve on either side cannot price a swap.
    pub fn has_liquidity(&self) -> bool {
        !self.reserve_a().is_zero() && !self.reserve_b().is_zero()
    }

    /// Whether `asset` sits on either side of this pool.
    pub fn contains_asset(&self, asset: &str) -> bool {
        self.asset_a_address == asset || self.asset_b_address == asset
    }

    /// TVL in smallest units of asset B, zero when absent.
    pub fn tvl(&self) -> u128 {
        self.tvl_asset_b
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(0)
    }
}

fn parse_reserve(raw: Option<&str>) -> BigUint {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

/// One leg of a swap route. Direction through the pool is derived by
/// comparing `asset_in_address` against the pool's A side, never assumed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteHop {
    pub asset_in_address: String,
    pub asset_out_address: String,
    pub pool_id: String,
}

/// Simulation request: an ordered hop list plus the amount fed into the
/// first hop.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSwapSimulateRequest {
    pub hops: Vec<RouteHop>,
    pub amount_in: String,
    /// Caller's slippage tolerance in basis points. Carried through for the
    /// execution layer; the simulator reports impact but does not enforce it.
    pub max_route_slippage_bps: String,
}

/// Per-hop slice of the simulation result, ordered to match the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HopBreakdown {
    pub amount_in: String,
    pub amount_out: String,
    pub pool_id: String,
    pub price_impact_pct: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSwapSimulateResponse {
    /// Realized output units per input unit over the whole route.
    pub execution_price: String,
    pub hop_breakdown: Vec<HopBreakdown>,
    pub output_amount: String,
    /// Fee totals are plain sums across hops, each hop's fee denominated in
    /// that hop's input asset.
    pub total_host_fee: String,
    pub total_lp_fee: String,
    /// Additive sum of per-hop impacts, not compounded.
    pub total_price_impact_pct: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning_message: Option<String>,
}

/// Query parameters accepted by the pool listing endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolQuery {
    pub asset_a_address: Option<String>,
    pub asset_b_address: Option<String>,
    pub sort: Option<String>,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_deserializes_camel_case() {
        let raw = r#"{
            "hops": [{
                "assetInAddress": "asset-a",
                "assetOutAddress": "asset-b",
                "poolId": "pool-1"
            }],
            "amountIn": "10000",
            "maxRouteSlippageBps": "50"
        }"#;
        let request: RouteSwapSimulateRequest = serde_json::from_str(raw).unwrap();
        assert_eq!(request.hops.len(), 1);
        assert_eq!(request.hops[0].pool_id, "pool-1");
        assert_eq!(request.amount_in, "10000");
        assert_eq!(request.max_route_slippage_bps, "50");
    }

    #[test]
    fn response_omits_absent_warning() {
        let response = RouteSwapSimulateResponse {
            execution_price: "1.9272".into(),
            hop_breakdown: vec![],
            output_amount: "19272".into(),
            total_host_fee: "20".into(),
            total_lp_fee: "250".into(),
            total_price_impact_pct: "3.64%".into(),
            warning_message: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("warningMessage").is_none());
        assert_eq!(json["executionPrice"], "1.9272");
        assert_eq!(json["totalPriceImpactPct"], "3.64%");
    }

    #[test]
    fn pool_reserves_default_to_zero() {
        let pool = Pool {
            lp_public_key: "pool-x".into(),
            host_name: None,
            host_fee_bps: 5,
            lp_fee_bps: 10,
            asset_a_address: "asset-a".into(),
            asset_b_address: "asset-b".into(),
            asset_a_reserve: None,
            asset_b_reserve: Some("not-a-number".into()),
            current_price_a_in_b: None,
            tvl_asset_b: None,
            volume_24h_asset_b: None,
            price_change_percent_24h: None,
            created_at: "2024-01-01T00:00:00Z".into(),
        };
        assert_eq!(pool.reserve_a(), BigUint::zero());
        assert_eq!(pool.reserve_b(), BigUint::zero());
        assert!(!pool.has_liquidity());
        assert_eq!(pool.tvl(), 0);
    }
}
