#![allow(dead_code)]

//! In-process stand-in for the dashboard API. Records every request it
//! receives so tests can assert on exactly what went over the wire.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Json, Path, RawQuery, State};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::Router;
use http::{Method, StatusCode};
use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::oneshot;
use url::Url;

use client::{ClientConfig, Resources};

/// Sync id the backend answers with 404
pub const MISSING_SYNC_ID: u64 = 42;
/// Sync id whose deletion fails with 500
pub const UNDELETABLE_SYNC_ID: u64 = 500;
/// Sync id the backend takes `SLOW_RESPONSE` to answer
pub const SLOW_SYNC_ID: u64 = 503;
pub const SLOW_RESPONSE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct MockState {
    calls: Arc<Mutex<Vec<Call>>>,
    failures: Arc<AtomicUsize>,
}

impl MockState {
    fn record(&self, method: Method, path: String, query: Option<String>, body: Option<Value>) {
        self.calls.lock().push(Call {
            method,
            path,
            query,
            body,
        });
    }

    fn take_failure(&self) -> bool {
        self.failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }
}

pub struct MockBackend {
    url: Url,
    state: MockState,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockBackend {
    pub async fn start() -> anyhow::Result<Self> {
        let state = MockState::default();
        let router = Router::new()
            .route("/syncs", get(list_syncs).post(create_sync))
            .route("/syncs/:sync_id", get(get_sync).delete(delete_sync))
            .route("/syncs/manual/:project_id", post(trigger_manual))
            .route("/projects", get(list_projects))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        tokio::spawn(async move {
            let _ = axum::serve(listener, router)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await;
        });

        Ok(Self {
            url: Url::parse(&format!("http://{}/", addr))?,
            state,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Resources wired to this backend with default cache settings
    pub fn resources(&self) -> anyhow::Result<Resources> {
        Ok(Resources::from_config(&ClientConfig::new(self.url.clone()))?)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.calls.lock().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.calls()
            .iter()
            .filter(|call| call.method == method && call.path == path)
            .count()
    }

    /// Make the next `n` list reads answer 500
    pub fn fail_next_lists(&self, n: usize) {
        self.state.failures.store(n, Ordering::SeqCst);
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub fn sync_json(id: u64, project_id: u64) -> Value {
    json!({
        "id": id,
        "project_id": project_id,
        "integration": "acc",
        "status": "success",
        "synced": true,
        "duration_ms": 1500,
        "s3_file_key": "exports/model.ifc",
        "acc_file_id": "urn:adsk:1",
        "created_at": "2024-03-05T14:07:00",
        "updated_at": "2024-03-05T14:09:30"
    })
}

async fn list_syncs(State(state): State<MockState>, RawQuery(query): RawQuery) -> Response {
    state.record(Method::GET, "/syncs".to_string(), query, None);
    if state.take_failure() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": "backend unavailable" })),
        )
            .into_response();
    }
    Json(json!({
        "data": [sync_json(1, 3), sync_json(2, 7)],
        "total": 2,
        "page": 1,
        "size": 20
    }))
    .into_response()
}

async fn get_sync(State(state): State<MockState>, Path(sync_id): Path<String>) -> Response {
    state.record(Method::GET, format!("/syncs/{}", sync_id), None, None);
    match sync_id.parse::<u64>() {
        Ok(SLOW_SYNC_ID) => {
            tokio::time::sleep(SLOW_RESPONSE).await;
            Json(json!({ "msg": "ok", "data": sync_json(SLOW_SYNC_ID, 3) })).into_response()
        }
        Ok(MISSING_SYNC_ID) => {
            (StatusCode::NOT_FOUND, Json(json!({ "detail": "Sync not found" }))).into_response()
        }
        Ok(id) => Json(json!({ "msg": "ok", "data": sync_json(id, 3) })).into_response(),
        Err(_) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "detail": [{ "loc": ["path", "sync_id"], "msg": "value is not a valid integer" }] })),
        )
            .into_response(),
    }
}

async fn create_sync(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
    state.record(Method::POST, "/syncs".to_string(), None, Some(body.clone()));

    let mut created = body;
    if let Some(object) = created.as_object_mut() {
        object.insert("id".to_string(), json!(100));
        object.insert("created_at".to_string(), json!("2024-03-05T14:07:00"));
        object.insert("updated_at".to_string(), json!("2024-03-05T14:07:00"));
    }
    (
        StatusCode::CREATED,
        Json(json!({ "msg": "Sync created", "data": created })),
    )
        .into_response()
}

async fn delete_sync(State(state): State<MockState>, Path(sync_id): Path<String>) -> Response {
    state.record(Method::DELETE, format!("/syncs/{}", sync_id), None, None);
    if sync_id == UNDELETABLE_SYNC_ID.to_string() {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "message": "Sync is still running" })),
        )
            .into_response();
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn trigger_manual(
    State(state): State<MockState>,
    Path(project_id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    state.record(
        Method::POST,
        format!("/syncs/manual/{}", project_id),
        None,
        Some(body),
    );
    Json(json!({
        "msg": "ok",
        "data": format!("Manual sync started for project {}", project_id)
    }))
    .into_response()
}

async fn list_projects(State(state): State<MockState>, RawQuery(query): RawQuery) -> Response {
    state.record(Method::GET, "/projects".to_string(), query, None);
    Json(json!({
        "data": [
            { "id": 7, "name": "Harbour Bridge", "status": "active" },
            { "id": 9, "name": "Opera House" }
        ],
        "total": 2,
        "page": 1,
        "size": 50
    }))
    .into_response()
}
