//! Shared test fixtures: a scripted stub backend served on an ephemeral
//! port, and an in-process portal app driven through `tower::ServiceExt`.

use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{
    Router,
    body::Body,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::util::ServiceExt;

use portal::{AppState, config::PortalConfig, routes};

pub const ADMIN_COOKIES: &str = "token=tok-123; role=admin";

/// What the stub backend saw on its most recent request.
#[derive(Debug, Clone, Default)]
pub struct SeenRequest {
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub cookie: Option<String>,
    pub body: String,
}

#[derive(Clone)]
struct StubState {
    hits: Arc<AtomicUsize>,
    replies: Arc<HashMap<String, (u16, String)>>,
    last: Arc<Mutex<Option<SeenRequest>>>,
}

/// A backend double that serves canned replies keyed by path, counts how
/// often it was called, and records the last request it saw.
pub struct StubBackend {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    last: Arc<Mutex<Option<SeenRequest>>>,
}

impl StubBackend {
    pub async fn start(replies: &[(&str, u16, &str)]) -> Self {
        let replies: HashMap<String, (u16, String)> = replies
            .iter()
            .map(|(path, status, body)| (path.to_string(), (*status, body.to_string())))
            .collect();
        let state = StubState {
            hits: Arc::new(AtomicUsize::new(0)),
            replies: Arc::new(replies),
            last: Arc::new(Mutex::new(None)),
        };
        let hits = state.hits.clone();
        let last = state.last.clone();

        let app = Router::new().fallback(respond).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            hits,
            last,
        }
    }

    /// A base URL nothing listens on, for transport-failure scenarios.
    pub async fn unreachable() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.last.lock().unwrap().clone()
    }
}

async fn respond(State(state): State<StubState>, request: Request) -> Response {
    state.hits.fetch_add(1, Ordering::SeqCst);

    let path = request.uri().path().to_string();
    let query = request.uri().query().map(str::to_owned);
    let authorization = header_value(&request, header::AUTHORIZATION);
    let cookie = header_value(&request, header::COOKIE);
    let bytes = axum::body::to_bytes(request.into_body(), usize::MAX)
        .await
        .unwrap_or_default();

    *state.last.lock().unwrap() = Some(SeenRequest {
        path: path.clone(),
        query,
        authorization,
        cookie,
        body: String::from_utf8_lossy(&bytes).to_string(),
    });

    match state.replies.get(&path) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap(),
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"status":"error","message":"Unknown backend path"}"#.to_string(),
        )
            .into_response(),
    }
}

fn header_value(request: &Request, name: header::HeaderName) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
}

/// Build the portal app against the given backend base URL.
pub fn portal_app(backend_url: &str) -> Router {
    let config = PortalConfig {
        backend_domain: backend_url.to_string(),
        asset_domain: backend_url.to_string(),
        bind_addr: "127.0.0.1:0".to_string(),
    };
    routes::create_router(AppState::new(config))
}

/// Drive one request through the app.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookies: Option<&str>,
    authorization: Option<&str>,
    body: Option<Value>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookies) = cookies {
        builder = builder.header(header::COOKIE, cookies);
    }
    if let Some(authorization) = authorization {
        builder = builder.header(header::AUTHORIZATION, authorization);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
