use crate::bridge::model::LatestCalculation;
use crate::generator::order::{build_sample_order, OrderConfig};
use crate::workflow::runner::{RunOutcome, Runner};
use glazecore::prelude::ValidationError;
use glazecore::GlassPanelSpec;
use log::{error, info};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{
    http::StatusCode,
    reply::{Json, WithStatus},
    Filter,
};

type SharedState = Arc<RwLock<LatestCalculation>>;

fn store(state: &SharedState, latest: LatestCalculation) {
    match state.write() {
        Ok(mut guard) => *guard = latest,
        Err(poisoned) => *poisoned.into_inner() = latest,
    }
}

fn read(state: &SharedState) -> LatestCalculation {
    match state.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

fn invalid_reply(err: &ValidationError) -> WithStatus<Json> {
    let errors: Vec<_> = err
        .field_errors()
        .iter()
        .map(|field_error| {
            json!({
                "index": field_error.index,
                "panel": field_error.panel,
                "field": field_error.field,
                "reason": field_error.reason,
                "message": field_error.to_string(),
            })
        })
        .collect();

    warp::reply::with_status(
        warp::reply::json(&json!({
            "status": "invalid",
            "message": err.to_string(),
            "errors": errors,
        })),
        StatusCode::UNPROCESSABLE_ENTITY,
    )
}

fn ok_reply(outcome: &RunOutcome) -> WithStatus<Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({
            "status": "ok",
            "result": outcome.result,
            "rejected": outcome.rejected,
        })),
        StatusCode::OK,
    )
}

fn run_and_store(
    runner: &Runner,
    state: &SharedState,
    source: &str,
    panels: &[GlassPanelSpec],
) -> WithStatus<Json> {
    match runner.execute(source, panels) {
        Ok(outcome) => {
            let reply = ok_reply(&outcome);
            store(state, LatestCalculation::new(source, outcome));
            reply
        }
        Err(err) => invalid_reply(&err),
    }
}

/// HTTP front end over the runner, keeping the latest result for polling.
pub struct HttpBridge {
    state: SharedState,
    runner: Arc<Runner>,
}

impl HttpBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            state: Arc::new(RwLock::new(LatestCalculation::default())),
            runner,
        }
    }

    pub fn routes(
        &self,
    ) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
        let state = self.state.clone();
        let runner = self.runner.clone();
        let state_filter = warp::any().map(move || state.clone());
        let runner_filter = warp::any().map(move || runner.clone());

        let latest_route = warp::path("latest")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedState| warp::reply::json(&read(&state)));

        let metrics_route = warp::path("metrics")
            .and(warp::get())
            .and(runner_filter.clone())
            .map(|runner: Arc<Runner>| warp::reply::json(&runner.metrics()));

        let calculate_route = warp::path("calculate")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter.clone())
            .and(runner_filter.clone())
            .map(
                |panels: Vec<GlassPanelSpec>, state: SharedState, runner: Arc<Runner>| {
                    run_and_store(&runner, &state, "http", &panels)
                },
            );

        let sample_route = warp::path("calculate-sample")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .map(
                |config: OrderConfig, state: SharedState, runner: Arc<Runner>| {
                    match build_sample_order(&config) {
                        Ok(panels) => {
                            let source = config
                                .description
                                .clone()
                                .unwrap_or_else(|| format!("sample seed {}", config.seed));
                            run_and_store(&runner, &state, &source, &panels)
                        }
                        Err(err) => {
                            error!("calculate-sample error: {}", err);
                            warp::reply::with_status(
                                warp::reply::json(&json!({
                                    "status": "error",
                                    "message": err.to_string(),
                                })),
                                StatusCode::BAD_REQUEST,
                            )
                        }
                    }
                },
            );

        latest_route
            .or(metrics_route)
            .or(calculate_route)
            .or(sample_route)
    }

    /// Starts serving on a background thread with its own runtime.
    pub fn serve(&self, address: SocketAddr) {
        let routes = self.routes();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build HTTP runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                match warp::serve(routes).try_bind_ephemeral(address) {
                    Ok((bound, server)) => {
                        info!("HTTP bridge listening on {}", bound);
                        server.await;
                    }
                    Err(err) => error!("failed to bind {}: {}", address, err),
                }
            });
        });
    }

    pub fn publish(&self, source: &str, outcome: RunOutcome) {
        info!(
            "{}: published {} panel result(s), total {:.1}kg",
            source,
            outcome.result.panels.len(),
            outcome.result.summary.total_weight
        );
        store(&self.state, LatestCalculation::new(source, outcome));
    }

    pub fn publish_status(&self, message: &str) {
        eprintln!("[bridge] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> LatestCalculation {
        read(&self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::config::{CalculatorConfig, ValidationPolicy};
    use glazecore::GlassType;
    use serde_json::Value;

    fn bridge(policy: ValidationPolicy) -> HttpBridge {
        let runner = Arc::new(Runner::new(CalculatorConfig::from_args(policy, 0)));
        HttpBridge::new(runner)
    }

    #[test]
    fn publish_updates_latest() {
        let bridge = bridge(ValidationPolicy::RejectBatch);
        let panels = [GlassPanelSpec::new("Door", 2.0, 0.9, 6.0, GlassType::Toughened, 1)];
        let outcome = bridge.runner.execute("test", &panels).unwrap();
        bridge.publish("test", outcome);

        let latest = bridge.snapshot();
        assert_eq!(latest.source.as_deref(), Some("test"));
        assert_eq!(latest.outcome.unwrap().result.panels[0].name, "Door");
    }

    #[tokio::test]
    async fn calculate_route_returns_result() {
        let bridge = bridge(ValidationPolicy::RejectBatch);
        let response = warp::test::request()
            .method("POST")
            .path("/calculate")
            .json(&json!([{
                "name": "Panel 1",
                "length": 2,
                "width": 1.5,
                "thickness": 4,
                "glassType": "DOUBLE_GLAZED",
                "quantity": 1
            }]))
            .reply(&bridge.routes())
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["result"]["panels"][0]["staffRequired"], 2);
        assert_eq!(
            body["result"]["panels"][0]["liftingMethod"],
            "Suction/manual lift"
        );
        assert!(bridge.snapshot().outcome.is_some());
    }

    #[tokio::test]
    async fn calculate_route_reports_field_errors() {
        let bridge = bridge(ValidationPolicy::RejectBatch);
        let response = warp::test::request()
            .method("POST")
            .path("/calculate")
            .json(&json!([{
                "name": "Panel 2",
                "length": 1,
                "width": 1,
                "thickness": -1,
                "glassType": "SINGLE_GLAZED",
                "quantity": 1
            }]))
            .reply(&bridge.routes())
            .await;

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "invalid");
        assert_eq!(body["errors"][0]["field"], "thickness");
        assert_eq!(
            body["errors"][0]["message"],
            "Panel 'Panel 2': thickness must be positive"
        );
        assert!(bridge.snapshot().outcome.is_none());
    }

    #[tokio::test]
    async fn sample_route_rejects_oversized_orders() {
        let bridge = bridge(ValidationPolicy::RejectBatch);
        let response = warp::test::request()
            .method("POST")
            .path("/calculate-sample")
            .json(&json!({ "panels": 1u64 << 40 }))
            .reply(&bridge.routes())
            .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["status"], "error");
        assert!(bridge.snapshot().outcome.is_none());
    }

    #[tokio::test]
    async fn sample_route_and_metrics() {
        let bridge = bridge(ValidationPolicy::RejectBatch);
        let routes = bridge.routes();

        let response = warp::test::request()
            .method("POST")
            .path("/calculate-sample")
            .json(&json!({ "panels": 3, "seed": 11 }))
            .reply(&routes)
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = warp::test::request()
            .method("GET")
            .path("/metrics")
            .reply(&routes)
            .await;
        let body: Value = serde_json::from_slice(response.body()).unwrap();
        assert_eq!(body["calculations"], 1);
        assert_eq!(body["rejections"], 0);
    }
}
