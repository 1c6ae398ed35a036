//! HTTP server for the web dashboard
//!
//! `/` renders the full page, `/api/charts` returns the chart specs for a
//! selection as JSON and `/api/dataset` summarizes the loaded records.

use axum::Router;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::get;
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::page::dashboard_page;
use super::query::{SelectionQuery, selection_from_form, selection_from_query};
use crate::callbacks::{CallbackRegistry, OutputId};
use crate::charts::ChartSpec;
use crate::config::DashboardConfig;
use crate::data::{LaunchDataset, PayloadBounds};
use crate::error::{DashError, Result};
use crate::state::FilterSelection;

/// Shared, read-only state behind every handler
#[derive(Clone)]
pub struct WebState {
    dataset: Arc<LaunchDataset>,
    registry: Arc<CallbackRegistry>,
    slider_step: f64,
}

impl WebState {
    pub fn new(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Self {
        Self {
            dataset,
            registry: Arc::new(CallbackRegistry::standard()),
            slider_step: config.slider_step,
        }
    }
}

#[derive(Serialize)]
struct DatasetSummary {
    rows: usize,
    successes: u64,
    payload_bounds: PayloadBounds,
    sites: Vec<String>,
    source: Option<PathBuf>,
}

#[derive(Serialize)]
struct ChartsPayload {
    selection: FilterSelection,
    charts: HashMap<OutputId, ChartSpec>,
}

impl IntoResponse for DashError {
    fn into_response(self) -> Response {
        match self {
            DashError::Selection(e) => {
                tracing::warn!(error = %e, "rejected query");
                (StatusCode::BAD_REQUEST, e.to_string()).into_response()
            }
            e => {
                tracing::error!(error = %e, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.user_message()).into_response()
            }
        }
    }
}

async fn index_handler(
    State(state): State<WebState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Html<String>> {
    let selection = selection_from_form(&query, &state.dataset)?;
    let charts = state.registry.render_all(&state.dataset, &selection)?;
    let page = dashboard_page(&state.dataset, &selection, &charts, state.slider_step)?;
    Ok(Html(page))
}

async fn charts_handler(
    State(state): State<WebState>,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<ChartsPayload>> {
    let selection = selection_from_query(&query, &state.dataset)?;
    let charts = state
        .registry
        .render_all(&state.dataset, &selection)?
        .into_iter()
        .collect();
    Ok(Json(ChartsPayload { selection, charts }))
}

async fn dataset_handler(State(state): State<WebState>) -> Json<DatasetSummary> {
    let dataset = &state.dataset;
    Json(DatasetSummary {
        rows: dataset.height(),
        successes: dataset.class_sum(),
        payload_bounds: dataset.payload_bounds(),
        sites: dataset.sites().to_vec(),
        source: dataset.source_path().map(Path::to_path_buf),
    })
}

/// Routes of the dashboard; unknown paths get 404 and non-GET methods 405
pub fn router(state: WebState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/index.html", get(index_handler))
        .route("/api/charts", get(charts_handler))
        .route("/api/dataset", get(dataset_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serve the dashboard on an already bound listener until the process is killed
pub async fn serve_on(listener: TcpListener, state: WebState) -> std::io::Result<()> {
    axum::serve(listener, router(state)).await
}

/// Bind `config.bind_addr` and serve the dashboard on a multi-threaded runtime
pub fn serve(dataset: Arc<LaunchDataset>, config: &DashboardConfig) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
    runtime.block_on(async {
        let listener = TcpListener::bind(config.bind_addr.as_str()).await?;
        tracing::info!(addr = %config.bind_addr, "dashboard available at http://{}/", config.bind_addr);
        serve_on(listener, WebState::new(dataset, config)).await?;
        Ok::<(), DashError>(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::columns::{
        SRC_BOOSTER_CATEGORY, SRC_CLASS, SRC_LAUNCH_SITE, SRC_PAYLOAD_MASS,
    };
    use axum::body::Body;
    use axum::http::{Method, Request};
    use polars::prelude::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpStream;
    use tower::ServiceExt;

    fn state() -> WebState {
        let df = df!(
            SRC_LAUNCH_SITE => ["A", "A", "B"],
            SRC_PAYLOAD_MASS => [500.0, 1500.0, 800.0],
            SRC_CLASS => [1i32, 0, 1],
            SRC_BOOSTER_CATEGORY => ["v1.0", "FT", "FT"]
        )
        .unwrap();
        let dataset = Arc::new(LaunchDataset::from_dataframe(df, None).unwrap());
        WebState::new(dataset, &DashboardConfig::default())
    }

    async fn send(method: Method, uri: &str) -> (StatusCode, String) {
        let request = Request::builder().method(method).uri(uri).body(Body::empty()).unwrap();
        let response = router(state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        send(Method::GET, uri).await
    }

    #[tokio::test]
    async fn test_index_page() {
        let (status, body) = get("/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<select"));
        assert!(body.contains("Total Successful Launches by Site"));
        assert_eq!(body.matches("<svg").count(), 2);
    }

    #[tokio::test]
    async fn test_index_links_crossed_form_range() {
        let (status, body) = get("/?min=1200&max=700").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"name="min" value="1200""#));
        assert!(body.contains(r#"name="max" value="1200""#));

        // Both ends past the upper bound collapse onto it
        let (status, body) = get("/?min=5000&max=1000").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"name="min" value="1500""#));
        assert!(body.contains(r#"name="max" value="1500""#));
    }

    #[tokio::test]
    async fn test_charts_endpoint() {
        let (status, body) = get("/api/charts?site=A&min=0&max=1000").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        let pie = &json["charts"]["success-pie-chart"];
        assert_eq!(pie["type"], "pie");
        assert_eq!(pie["slices"][0]["label"], "Success");
        assert_eq!(pie["slices"][0]["value"], 1);
        assert_eq!(pie["slices"][1]["value"], 1);

        let scatter = &json["charts"]["success-payload-scatter-chart"];
        assert_eq!(scatter["series"].as_array().unwrap().len(), 1);
        assert_eq!(scatter["series"][0]["points"][0][0], 500.0);
        assert_eq!(json["selection"]["site"], "A");
    }

    #[tokio::test]
    async fn test_charts_endpoint_decodes_site() {
        let (status, body) = get("/api/charts?site=B&min=&max=").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["selection"]["site"], "B");
    }

    #[tokio::test]
    async fn test_dataset_endpoint() {
        let (status, body) = get("/api/dataset").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["rows"], 3);
        assert_eq!(json["successes"], 2);
        assert_eq!(json["sites"], serde_json::json!(["A", "B"]));
        assert_eq!(json["payload_bounds"]["min"], 500.0);
        assert_eq!(json["payload_bounds"]["max"], 1500.0);
    }

    #[tokio::test]
    async fn test_bad_requests() {
        assert_eq!(get("/missing").await.0, StatusCode::NOT_FOUND);

        let (status, body) = get("/api/charts?min=900&max=100").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("inverted"));

        assert_eq!(get("/api/charts?site=Z").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(get("/api/charts?max=heavy").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(get("/?max=heavy").await.0, StatusCode::BAD_REQUEST);
        assert_eq!(send(Method::POST, "/").await.0, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_idle_client_does_not_block_others() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(serve_on(listener, state()));

        // Connected but never sends a request, like a browser preconnect
        let _idle = TcpStream::connect(addr).await.unwrap();

        let mut client = TcpStream::connect(addr).await.unwrap();
        client
            .write_all(b"GET /api/dataset HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut response = String::new();
        tokio::time::timeout(Duration::from_secs(5), client.read_to_string(&mut response))
            .await
            .expect("second client was blocked")
            .unwrap();
        assert!(response.starts_with("HTTP/1.1 200 OK"));
        assert!(response.contains("\"rows\":3"));
    }
}
