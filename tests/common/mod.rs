// ABOUTME: Shared test helpers - an in-process axum server standing in for
// ABOUTME: the Graph and SerpApi endpoints.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::Json;
use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use serde_json::Value;

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock server error");
    });
    format!("http://{}", addr)
}

/// A request captured by the mock mail endpoint.
#[derive(Debug, Clone)]
pub struct MailRequest {
    pub user: String,
    pub authorization: Option<String>,
    pub body: Value,
}

#[derive(Clone)]
pub struct MockMail {
    status: StatusCode,
    response: Value,
    pub received: Arc<Mutex<Vec<MailRequest>>>,
}

impl MockMail {
    pub fn new(status: StatusCode, response: Value) -> Self {
        Self {
            status,
            response,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/users/{user}/sendMail", post(send_mail))
            .with_state(self.clone())
    }
}

async fn send_mail(
    State(mock): State<MockMail>,
    Path(user): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    mock.received.lock().unwrap().push(MailRequest {
        user,
        authorization,
        body,
    });
    (mock.status, Json(mock.response.clone()))
}

#[derive(Clone)]
pub struct MockSearch {
    status: StatusCode,
    response: Value,
    pub received: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl MockSearch {
    pub fn new(status: StatusCode, response: Value) -> Self {
        Self {
            status,
            response,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route("/search.json", get(search))
            .with_state(self.clone())
    }
}

async fn search(
    State(mock): State<MockSearch>,
    Query(params): Query<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    mock.received.lock().unwrap().push(params);
    (mock.status, Json(mock.response.clone()))
}
