//! Pool catalog: read-only lookup from a pool identifier to its record.
//!
//! The simulation core only depends on the [`PoolLookup`] capability; the
//! in-memory registry behind it also backs the catalog listing endpoint.
//! Nothing in the service ever writes to a pool record after seeding.

use std::collections::HashMap;

use crate::models::{Pool, PoolQuery};

pub mod seed;

pub use seed::default_pools;

/// Capability to fetch a pool record by identifier.
///
/// Implementations must return a self-consistent snapshot; callers never
/// observe a record mid-update.
pub trait PoolLookup {
    fn lookup(&self, pool_id: &str) -> Option<Pool>;
}

/// In-memory pool catalog, seeded once at startup.
#[derive(Debug, Clone)]
pub struct InMemoryRegistry {
    pools: Vec<Pool>,
    by_id: HashMap<String, usize>,
}

impl InMemoryRegistry {
    /// Build a registry from the given pools, preserving their order for
    /// catalog listings. A duplicated id keeps the later record.
    pub fn new(pools: Vec<Pool>) -> Self {
        let by_id = pools
            .iter()
            .enumerate()
            .map(|(index, pool)| (pool.lp_public_key.clone(), index))
            .collect();
        Self { pools, by_id }
    }

    pub fn with_default_pools() -> Self {
        Self::new(seed::default_pools())
    }

    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Catalog listing: optional asset filter (a pool matches when either of
    /// its sides equals any provided address), optional `TVL_DESC` sort, and
    /// an optional positive limit.
    pub fn query(&self, query: &PoolQuery) -> Vec<Pool> {
        let mut pools: Vec<Pool> = self.pools.clone();

        let filters: Vec<&str> = [
            query.asset_a_address.as_deref(),
            query.asset_b_address.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !filters.is_empty() {
            pools.retain(|pool| filters.iter().any(|asset| pool.contains_asset(asset)));
        }

        if query.sort.as_deref() == Some("TVL_DESC") {
            pools.sort_by(|a, b| b.tvl().cmp(&a.tvl()));
        }

        if let Some(limit) = query.limit {
            if limit > 0 {
                pools.truncate(limit);
            }
        }

        pools
    }
}

impl PoolLookup for InMemoryRegistry {
    fn lookup(&self, pool_id: &str) -> Option<Pool> {
        self.by_id
            .get(pool_id)
            .map(|&index| self.pools[index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::seed::{BTC_ASSET, SNOW_ASSET, USDB_ASSET};

    fn registry() -> InMemoryRegistry {
        InMemoryRegistry::with_default_pools()
    }

    #[test]
    fn lookup_returns_seeded_pool() {
        let pool = registry().lookup("bridge_btc_usdb").unwrap();
        assert_eq!(pool.asset_a_address, BTC_ASSET);
        assert_eq!(pool.asset_b_address, USDB_ASSET);
        assert_eq!(pool.host_fee_bps, 5);
        assert_eq!(pool.lp_fee_bps, 10);
    }

    #[test]
    fn lookup_miss_is_none() {
        assert!(registry().lookup("no_such_pool").is_none());
    }

    #[test]
    fn unfiltered_query_lists_all_in_seed_order() {
        let pools = registry().query(&PoolQuery::default());
        assert_eq!(pools.len(), 6);
        assert_eq!(pools[0].lp_public_key, "bridge_btc_usdb");
    }

    #[test]
    fn asset_filter_matches_either_side() {
        let query = PoolQuery {
            asset_a_address: Some(SNOW_ASSET.to_string()),
            ..PoolQuery::default()
        };
        let pools = registry().query(&query);
        assert_eq!(pools.len(), 2);
        assert!(pools.iter().all(|pool| pool.contains_asset(SNOW_ASSET)));
    }

    #[test]
    fn both_filter_params_widen_the_match() {
        let query = PoolQuery {
            asset_a_address: Some(SNOW_ASSET.to_string()),
            asset_b_address: Some(BTC_ASSET.to_string()),
            ..PoolQuery::default()
        };
        let pools = registry().query(&query);
        // Every pool touching SNOW or BTC.
        assert_eq!(pools.len(), 4);
    }

    #[test]
    fn tvl_sort_is_descending() {
        let query = PoolQuery {
            sort: Some("TVL_DESC".to_string()),
            ..PoolQuery::default()
        };
        let pools = registry().query(&query);
        for pair in pools.windows(2) {
            assert!(pair[0].tvl() >= pair[1].tvl());
        }
        assert_eq!(pools[0].lp_public_key, "bridge_btc_usdb");
    }

    #[test]
    fn limit_truncates_but_zero_is_ignored() {
        let limited = registry().query(&PoolQuery {
            limit: Some(2),
            ..PoolQuery::default()
        });
        assert_eq!(limited.len(), 2);

        let unlimited = registry().query(&PoolQuery {
            limit: Some(0),
            ..PoolQuery::default()
        });
        assert_eq!(unlimited.len(), 6);
    }
}
