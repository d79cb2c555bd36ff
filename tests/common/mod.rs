#![allow(dead_code)]

use axum::{
    extract::{RawQuery, State},
    http::{header::CONTENT_TYPE, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, Notify};
use tokio::time::sleep;

/// Canned answer of one backend route.
#[derive(Clone, Debug)]
pub struct Reply {
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    pub fn json(value: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body: value.to_string(),
        }
    }

    pub fn status(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Behaviour {
    pub coach: Reply,
    pub profile: Reply,
    pub logs: Reply,
    /// Answer `/coach` with the posted weight as the recommendation.
    pub echo_weight: bool,
}

impl Default for Behaviour {
    fn default() -> Self {
        Self {
            coach: Reply::json(json!({
                "log_id": 1,
                "recommendation": "Eat more protein",
                "reasoning": "Training day",
                "calorie_estimate": "2200",
                "next_steps": "Walk after dinner"
            })),
            profile: Reply::json(json!({"sex": "F", "height": "170cm"})),
            logs: Reply::json(json!([{"log_id": 7, "recommendation": "Keep pace"}])),
            echo_weight: false,
        }
    }
}

/// Received `/coach` request.
#[derive(Clone, Debug)]
pub struct Recorded {
    pub body: Value,
    pub content_type: Option<String>,
}

#[derive(Clone)]
pub struct MockBackend {
    pub base_url: String,
    pub behaviour: Arc<Mutex<Behaviour>>,
    pub coach_requests: Arc<Mutex<Vec<Recorded>>>,
    pub logs_queries: Arc<Mutex<Vec<Option<String>>>>,
    /// While set, `/coach` waits for `release` before answering.
    pub hold: Arc<AtomicBool>,
    pub arrived: Arc<Notify>,
    pub release: Arc<Notify>,
}

impl MockBackend {
    pub async fn spawn(behaviour: Behaviour) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().unwrap();
        let backend = MockBackend {
            base_url: format!("http://{addr}"),
            behaviour: Arc::new(Mutex::new(behaviour)),
            coach_requests: Arc::new(Mutex::new(Vec::new())),
            logs_queries: Arc::new(Mutex::new(Vec::new())),
            hold: Arc::new(AtomicBool::new(false)),
            arrived: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        };

        let app = Router::new()
            .route("/coach", post(coach))
            .route("/profile", get(profile))
            .route("/logs", get(logs))
            .route("/health", get(|| async { Json(json!({"status": "ok"})) }))
            .with_state(backend.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("mock backend crashed");
        });

        backend
    }

    pub async fn set_coach(&self, reply: Reply) {
        self.behaviour.lock().await.coach = reply;
    }

    pub async fn set_logs(&self, reply: Reply) {
        self.behaviour.lock().await.logs = reply;
    }

    pub async fn set_profile(&self, reply: Reply) {
        self.behaviour.lock().await.profile = reply;
    }
}

async fn coach(State(mock): State<MockBackend>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    mock.coach_requests.lock().await.push(Recorded {
        body: body.clone(),
        content_type,
    });
    mock.arrived.notify_one();

    if body["activity"] == "slow" {
        sleep(Duration::from_millis(300)).await;
    }
    if mock.hold.load(Ordering::SeqCst) {
        mock.release.notified().await;
    }

    let behaviour = mock.behaviour.lock().await.clone();
    if behaviour.echo_weight {
        let reply = json!({ "recommendation": body["weight"], "reasoning": "echo" });
        return reply_with(Reply::json(reply));
    }
    reply_with(behaviour.coach)
}

async fn profile(State(mock): State<MockBackend>) -> Response {
    let reply = mock.behaviour.lock().await.profile.clone();
    reply_with(reply)
}

async fn logs(State(mock): State<MockBackend>, RawQuery(query): RawQuery) -> Response {
    mock.logs_queries.lock().await.push(query);
    let reply = mock.behaviour.lock().await.logs.clone();
    reply_with(reply)
}

fn reply_with(reply: Reply) -> Response {
    (reply.status, [(CONTENT_TYPE, "application/json")], reply.body).into_response()
}

/// Base URL nobody listens on.
pub fn closed_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// Backend that accepts connections and never answers.
pub async fn spawn_silent_backend() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind silent backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut open = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            open.push(stream);
        }
    });
    format!("http://{addr}")
}

/// Backend that answers every request with `head`, then closes before the
/// announced body length has been sent.
pub async fn spawn_truncating_backend(head: &'static str) -> String {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind truncating backend");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            tokio::spawn(async move {
                let mut buf = [0u8; 4096];
                let _ = stream.read(&mut buf).await;
                let _ = stream.write_all(head.as_bytes()).await;
                let _ = stream.shutdown().await;
            });
        }
    });
    format!("http://{addr}")
}
