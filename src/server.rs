//! HTTP API for the route simulator.
//!
//! Three endpoints: a liveness root, the pool catalog listing, and the
//! route-swap simulation. All error paths return `{status, code, msg}`
//! JSON bodies with a matching HTTP status.

use std::convert::Infallible;
use std::sync::Arc;

use tracing::{info, warn};
use warp::Filter;
use warp::http::StatusCode;

use crate::errors::SimulationError;
use crate::models::{PoolQuery, RouteSwapSimulateRequest};
use crate::registry::InMemoryRegistry;
use crate::sim;

/// Build the full route tree for the service.
pub fn routes(
    registry: Arc<InMemoryRegistry>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    let health = warp::path::end()
        .and(warp::get())
        .map(|| "route-simulator is running");

    let pools = warp::path("pools")
        .and(warp::path::end())
        .and(warp::get())
        .and(warp::query::<PoolQuery>())
        .and(with_state(registry.clone()))
        .map(|query: PoolQuery, registry: Arc<InMemoryRegistry>| {
            let pools = registry.query(&query);
            info!(matched = pools.len(), "[POOLS] catalog queried");
            warp::reply::json(&serde_json::json!({ "pools": pools }))
        });

    let simulate = warp::path!("v1" / "route-swap" / "simulate")
        .and(warp::post())
        .and(warp::body::json())
        .and(with_state(registry))
        .map(
            |request: RouteSwapSimulateRequest, registry: Arc<InMemoryRegistry>| {
                match sim::simulate_route_swap(registry.as_ref(), &request) {
                    Ok(response) => {
                        info!(
                            hops = request.hops.len(),
                            amount_in = %request.amount_in,
                            output_amount = %response.output_amount,
                            "[SIM] route swap simulated"
                        );
                        warp::reply::with_status(warp::reply::json(&response), StatusCode::OK)
                    }
                    Err(err) => {
                        warn!(error = %err, "[SIM] simulation rejected");
                        let status = status_for(&err);
                        warp::reply::with_status(
                            warp::reply::json(&serde_json::json!({
                                "status": "error",
                                "code": status.as_u16(),
                                "msg": err.to_string(),
                            })),
                            status,
                        )
                    }
                }
            },
        );

    health
        .or(pools)
        .or(simulate)
        .recover(handle_rejection)
}

fn with_state<T: Clone + Send>(
    state: T,
) -> impl Filter<Extract = (T,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn status_for(err: &SimulationError) -> StatusCode {
    match err {
        SimulationError::PoolNotFound(_) => StatusCode::NOT_FOUND,
        SimulationError::InvalidHop { .. }
        | SimulationError::InvalidAmount(_)
        | SimulationError::EmptyRoute => StatusCode::BAD_REQUEST,
    }
}

async fn handle_rejection(err: warp::Rejection) -> Result<impl warp::Reply, Infallible> {
    let (status, msg) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Endpoint not found".to_string())
    } else if let Some(e) = err.find::<warp::filters::body::BodyDeserializeError>() {
        (
            StatusCode::BAD_REQUEST,
            format!("Invalid request body: {}", e),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed".to_string())
    } else {
        warn!(?err, "[HTTP] unhandled rejection");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    };

    let json = warp::reply::json(&serde_json::json!({
        "status": "error",
        "code": status.as_u16(),
        "msg": msg,
    }));
    Ok(warp::reply::with_status(json, status))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn test_routes() -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
        routes(Arc::new(InMemoryRegistry::with_default_pools()))
    }

    #[tokio::test]
    async fn root_reports_liveness() {
        let response = warp::test::request().path("/").reply(&test_routes()).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn pools_listing_honors_limit() {
        let response = warp::test::request()
            .path("/pools?limit=2")
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["pools"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn simulate_roundtrip() {
        let request = serde_json::json!({
            "hops": [{
                "assetInAddress": crate::registry::seed::BTC_ASSET,
                "assetOutAddress": crate::registry::seed::USDB_ASSET,
                "poolId": "bridge_btc_usdb"
            }],
            "amountIn": "100000",
            "maxRouteSlippageBps": "50"
        });
        let response = warp::test::request()
            .method("POST")
            .path("/v1/route-swap/simulate")
            .json(&request)
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["hopBreakdown"].as_array().unwrap().len(), 1);
        assert!(body["outputAmount"].as_str().unwrap().parse::<u128>().unwrap() > 0);
    }

    #[tokio::test]
    async fn unknown_pool_maps_to_404() {
        let request = serde_json::json!({
            "hops": [{
                "assetInAddress": "a",
                "assetOutAddress": "b",
                "poolId": "no_such_pool"
            }],
            "amountIn": "100",
            "maxRouteSlippageBps": "50"
        });
        let response = warp::test::request()
            .method("POST")
            .path("/v1/route-swap/simulate")
            .json(&request)
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["code"], 404);
    }

    #[tokio::test]
    async fn malformed_body_maps_to_400() {
        let response = warp::test::request()
            .method("POST")
            .path("/v1/route-swap/simulate")
            .body("{not json")
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn invalid_amount_maps_to_400() {
        let request = serde_json::json!({
            "hops": [{
                "assetInAddress": crate::registry::seed::BTC_ASSET,
                "assetOutAddress": crate::registry::seed::USDB_ASSET,
                "poolId": "bridge_btc_usdb"
            }],
            "amountIn": "0",
            "maxRouteSlippageBps": "50"
        });
        let response = warp::test::request()
            .method("POST")
            .path("/v1/route-swap/simulate")
            .json(&request)
            .reply(&test_routes())
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
