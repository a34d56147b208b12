//! Seed data for the pool catalog: six reference pools spanning deep
//! bridge liquidity down to a near-dead tail pair, with fee schedules that
//! rise as liquidity thins out.

use crate::models::Pool;

/// Asset identifiers used by the seeded catalog.
pub const BTC_ASSET: &str = "020202020202020202020202020202020202020202020202020202020202020202";
pub const USDB_ASSET: &str = "btkn1xgrvjwey5ngcagvap2dzzvsy4uk8ua9x69k82dwvt5e7ef9drm9qztux87";
pub const SNOW_ASSET: &str = "btkn1f0wpf28xhs6sswxkthx9fzrv2x9476yk95wlucp4sfuqmxnu8zesv2gsws";
pub const FLASHSPARK_ASSET: &str =
    "btkn1daywtenlww42njymqzyegvcwuy3p9f26zknme0srxa7tagewvuys86h553";
pub const XSPARK_ASSET: &str = "btkn1dywglzsxyaxx69u4dchyz9vnt4gpmp0w26f3n5st2rslusv4kv7szrrwzm";
pub const BRUH_ASSET: &str = "btkn18tq8zfgtvnmg0wct0hvwzpkfs0scse8edef4ten39schhfhrksus7hlm8a";

const SEED_CREATED_AT: &str = "2024-01-01T00:00:00Z";

/// The default catalog. Reserves are smallest-unit integer strings.
pub fn default_pools() -> Vec<Pool> {
    vec![
        // BTC/USDB bridge: 100 BTC against 10M USDB, 0.15% total fee.
        Pool {
            lp_public_key: "bridge_btc_usdb".to_string(),
            host_name: None,
            host_fee_bps: 5,
            lp_fee_bps: 10,
            asset_a_address: BTC_ASSET.to_string(),
            asset_b_address: USDB_ASSET.to_string(),
            asset_a_reserve: Some("10000000000".to_string()),
            asset_b_reserve: Some("1000000000000000".to_string()),
            current_price_a_in_b: Some("100000".to_string()),
            tvl_asset_b: Some("1000000000000000".to_string()),
            volume_24h_asset_b: Some("50000000000000".to_string()),
            price_change_percent_24h: Some("0.1".to_string()),
            created_at: SEED_CREATED_AT.to_string(),
        },
        // SNOW/BTC: 5M SNOW against 5 BTC, 2.7% total fee.
        Pool {
            lp_public_key: "pool_snow_btc".to_string(),
            host_name: None,
            host_fee_bps: 20,
            lp_fee_bps: 250,
            asset_a_address: SNOW_ASSET.to_string(),
            asset_b_address: BTC_ASSET.to_string(),
            asset_a_reserve: Some("500000000000000".to_string()),
            asset_b_reserve: Some("500000000".to_string()),
            current_price_a_in_b: Some("0.000001".to_string()),
            tvl_asset_b: Some("500000000".to_string()),
            volume_24h_asset_b: Some("50000000".to_string()),
            price_change_percent_24h: Some("1.5".to_string()),
            created_at: SEED_CREATED_AT.to_string(),
        },
        // SNOW/USDB: the alternative route for SNOW, same fee schedule.
        Pool {
            lp_public_key: "pool_snow_usdb".to_string(),
            host_name: None,
            host_fee_bps: 20,
            lp_fee_bps: 250,
            asset_a_address: SNOW_ASSET.to_string(),
            asset_b_address: USDB_ASSET.to_string(),
            asset_a_reserve: Some("500000000000000".to_string()),
            asset_b_reserve: Some("50000000000000".to_string()),
            current_price_a_in_b: Some("0.1".to_string()),
            tvl_asset_b: Some("50000000000000".to_string()),
            volume_24h_asset_b: Some("5000000000000".to_string()),
            price_change_percent_24h: Some("1.2".to_string()),
            created_at: SEED_CREATED_AT.to_string(),
        },
        // BRUH/BTC: thin liquidity, only paired with BTC, 5.5% total fee.
        Pool {
            lp_public_key: "pool_bruh_btc".to_string(),
            host_name: None,
            host_fee_bps: 50,
            lp_fee_bps: 500,
            asset_a_address: BRUH_ASSET.to_string(),
            asset_b_address: BTC_ASSET.to_string(),
            asset_a_reserve: Some("100000000000000".to_string()),
            asset_b_reserve: Some("50000000".to_string()),
            current_price_a_in_b: Some("0.0000005".to_string()),
            tvl_asset_b: Some("50000000".to_string()),
            volume_24h_asset_b: Some("5000000".to_string()),
            price_change_percent_24h: Some("-2.3".to_string()),
            created_at: SEED_CREATED_AT.to_string(),
        },
        // FLASHSPARK/USDB: thin liquidity, only paired with USDB.
        Pool {
            lp_public_key: "pool_flashspark_usdb".to_string(),
            host_name: None,
            host_fee_bps: 50,
            lp_fee_bps: 500,
            asset_a_address: FLASHSPARK_ASSET.to_string(),
            asset_b_address: USDB_ASSET.to_string(),
            asset_a_reserve: Some("100000000000000".to_string()),
            asset_b_reserve: Some("3000000000000".to_string()),
            current_price_a_in_b: Some("0.03".to_string()),
            tvl_asset_b: Some("3000000000000".to_string()),
            volume_24h_asset_b: Some("300000000000".to_string()),
            price_change_percent_24h: Some("0.8".to_string()),
            created_at: SEED_CREATED_AT.to_string(),
        },
        // XSPARK/USDB: near-dead tail pair, 12% total fee.
        Pool {
            lp_public_key: "pool_xspark_usdb".to_string(),
            host_name: None,
            host_fee_bps: 200,
            lp_fee_bps: 1000,
            asset_a_address: XSPARK_ASSET.to_string(),
            asset_b_address: USDB_ASSET.to_string(),
            asset_a_reserve: Some("50000000000000".to_string()),
            asset_b_reserve: Some("500000000000".to_string()),
            current_price_a_in_b: Some("0.01".to_string()),
            tvl_asset_b: Some("500000000000".to_string()),
            volume_24h_asset_b: Some("50000000000".to_string()),
            price_change_percent_24h: Some("-5.7".to_string()),
            created_at: SEED_CREATED_AT.to_string(),
        },
    ]
}
