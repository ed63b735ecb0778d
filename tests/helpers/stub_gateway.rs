// ABOUTME: In-process model gateways for pipeline and route tests
// ABOUTME: Counts forwarded requests and can hold a request open until released

use async_trait::async_trait;
use attempt_predictor::gateway::{ModelGateway, ProxyReply};
use axum::http::StatusCode;
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

/// Attempt values for one lift
pub fn attempts(first: f64, second: f64, third: f64) -> Value {
    json!({ "1st Attempt": first, "2nd Attempt": second, "3rd Attempt": third })
}

/// Successful backend body whose third attempts total 570.0 kg
pub fn prediction_body() -> Value {
    json!({
        "recommendations": {
            "Squat": attempts(180.0, 190.0, 200.0),
            "Bench": attempts(135.0, 142.5, 150.0),
            "Deadlift": attempts(200.0, 210.0, 220.0)
        },
        "visualizations": {
            "box_plot": "Qk9Y",
            "heatmap_plot": "SEVBVA==",
            "bar_plot": "QkFS"
        }
    })
}

/// Gateway answering every request with a fixed reply
pub struct StubGateway {
    reply: ProxyReply,
    calls: AtomicUsize,
    bodies: Mutex<Vec<Value>>,
}

impl StubGateway {
    /// Always answer with `reply`
    pub fn replying(reply: ProxyReply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
            bodies: Mutex::new(Vec::new()),
        }
    }

    /// Always answer 200 with [`prediction_body`]
    pub fn success() -> Self {
        Self::replying(ProxyReply::relay(StatusCode::OK, prediction_body()))
    }

    /// Number of forwarded requests
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Bodies received, in order
    pub fn bodies(&self) -> Vec<Value> {
        self.bodies.lock().unwrap().clone()
    }
}

#[async_trait]
impl ModelGateway for StubGateway {
    async fn forward(&self, body: Value) -> ProxyReply {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().unwrap().push(body);
        self.reply.clone()
    }
}

/// Gateway that holds each request open until [`BlockingGateway::release`]
pub struct BlockingGateway {
    inner: StubGateway,
    started: Notify,
    release: Notify,
}

impl BlockingGateway {
    /// Answer with [`prediction_body`] once released
    pub fn new() -> Self {
        Self {
            inner: StubGateway::success(),
            started: Notify::new(),
            release: Notify::new(),
        }
    }

    /// Wait until a request has reached the gateway
    pub async fn wait_started(&self) {
        self.started.notified().await;
    }

    /// Let the held request complete
    pub fn release(&self) {
        self.release.notify_one();
    }

    /// Number of forwarded requests
    pub fn calls(&self) -> usize {
        self.inner.calls()
    }
}

#[async_trait]
impl ModelGateway for BlockingGateway {
    async fn forward(&self, body: Value) -> ProxyReply {
        self.started.notify_one();
        self.release.notified().await;
        self.inner.forward(body).await
    }
}
