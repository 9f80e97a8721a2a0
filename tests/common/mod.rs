//! Mock of the tenant configuration API, served by axum on a random port.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "test-token";

#[derive(Default)]
pub struct Fixtures {
    pub namespaces: Vec<String>,
    /// namespace -> load balancer detail bodies, in listing order
    pub load_balancers: HashMap<String, Vec<Value>>,
    /// (namespace, name) -> app firewall body
    pub firewalls: HashMap<(String, String), Value>,
    /// path -> (status, raw body) served instead of the fixture
    pub overrides: HashMap<String, (u16, String)>,
}

impl Fixtures {
    pub fn namespaces(mut self, names: &[&str]) -> Self {
        self.namespaces = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn load_balancer(mut self, namespace: &str, body: Value) -> Self {
        self.load_balancers
            .entry(namespace.to_string())
            .or_default()
            .push(body);
        self
    }

    pub fn firewall(mut self, namespace: &str, name: &str, mode: &str) -> Self {
        let body = json!({
            "metadata": {"name": name, "namespace": namespace},
            "spec": { mode: {}, "default_detection_settings": {} }
        });
        self.firewalls
            .insert((namespace.to_string(), name.to_string()), body);
        self
    }

    pub fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
        self.overrides
            .insert(path.to_string(), (status, body.to_string()));
        self
    }
}

struct MockState {
    fixtures: Fixtures,
    requests: Mutex<Vec<String>>,
}

type Shared = Arc<MockState>;

/// A running mock server; dropped with the test runtime
pub struct MockServer {
    pub addr: SocketAddr,
    state: Shared,
}

impl MockServer {
    pub async fn start(fixtures: Fixtures) -> Self {
        let state = Arc::new(MockState {
            fixtures,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/web/namespaces", get(list_namespaces))
            .route(
                "/api/config/namespaces/{ns}/http_loadbalancers",
                get(list_load_balancers),
            )
            .route(
                "/api/config/namespaces/{ns}/http_loadbalancers/{name}",
                get(get_load_balancer),
            )
            .route(
                "/api/config/namespaces/{ns}/app_firewalls/{name}",
                get(get_firewall),
            )
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn api_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Paths requested so far (without the `/api` prefix), in order
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().unwrap().clone()
    }
}

/// Records the request and enforces the API token; returns a canned
/// response when one is registered for `path`
fn intercept(state: &MockState, headers: &HeaderMap, path: String) -> Option<Response> {
    state.requests.lock().unwrap().push(path.clone());

    let expected = format!("APIToken {}", TEST_TOKEN);
    let authorized = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == expected);
    if !authorized {
        return Some(
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({"code": 16, "message": "unauthenticated"})),
            )
                .into_response(),
        );
    }

    state.fixtures.overrides.get(&path).map(|(status, body)| {
        (
            StatusCode::from_u16(*status).unwrap(),
            body.clone(),
        )
            .into_response()
    })
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"code": 5, "message": "object not found"})),
    )
        .into_response()
}

fn lb_name(body: &Value) -> &str {
    body["metadata"]["name"].as_str().unwrap_or_default()
}

async fn list_namespaces(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Some(resp) = intercept(&state, &headers, "/web/namespaces".into()) {
        return resp;
    }
    let items: Vec<Value> = state
        .fixtures
        .namespaces
        .iter()
        .map(|n| json!({"name": n, "tenant": "acme"}))
        .collect();
    Json(json!({ "items": items })).into_response()
}

async fn list_load_balancers(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(ns): Path<String>,
) -> Response {
    let path = format!("/config/namespaces/{}/http_loadbalancers", ns);
    if let Some(resp) = intercept(&state, &headers, path) {
        return resp;
    }
    let items: Vec<Value> = state
        .fixtures
        .load_balancers
        .get(&ns)
        .map(|lbs| {
            lbs.iter()
                .map(|lb| json!({"name": lb_name(lb), "namespace": ns}))
                .collect()
        })
        .unwrap_or_default();
    Json(json!({ "items": items })).into_response()
}

async fn get_load_balancer(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((ns, name)): Path<(String, String)>,
) -> Response {
    let path = format!("/config/namespaces/{}/http_loadbalancers/{}", ns, name);
    if let Some(resp) = intercept(&state, &headers, path) {
        return resp;
    }
    state
        .fixtures
        .load_balancers
        .get(&ns)
        .and_then(|lbs| lbs.iter().find(|lb| lb_name(lb) == name))
        .map(|lb| Json(lb.clone()).into_response())
        .unwrap_or_else(not_found)
}

async fn get_firewall(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path((ns, name)): Path<(String, String)>,
) -> Response {
    let path = format!("/config/namespaces/{}/app_firewalls/{}", ns, name);
    if let Some(resp) = intercept(&state, &headers, path) {
        return resp;
    }
    state
        .fixtures
        .firewalls
        .get(&(ns, name))
        .map(|fw| Json(fw.clone()).into_response())
        .unwrap_or_else(not_found)
}

/// LB `demo` with WAF disabled and one plain route
pub fn disabled_lb(namespace: &str) -> Value {
    json!({
        "metadata": {"name": "demo", "namespace": namespace},
        "spec": {
            "domains": ["demo.example.com"],
            "disable_waf": {},
            "routes": [{"simple_route": {"path": {"prefix": "/"}}}]
        }
    })
}

/// LB `demo2` with default WAF `waf-a` and a route overriding to `waf-b`
pub fn override_lb(namespace: &str) -> Value {
    json!({
        "metadata": {"name": "demo2", "namespace": namespace},
        "spec": {
            "app_firewall": {"name": "waf-a", "namespace": namespace, "tenant": "acme"},
            "routes": [{"simple_route": {
                "http_method": "ANY",
                "path": {"prefix": "/x"},
                "advanced_options": {"app_firewall": {"name": "waf-b"}}
            }}]
        }
    })
}
