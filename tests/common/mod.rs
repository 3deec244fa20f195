#![allow(dead_code)]

use axum::Router;
use axum::extract::ConnectInfo;
use axum_test::TestServer;
use linktrack::routes::base_router;
use linktrack::state::AppState;
use serde_json::{Value, json};
use std::net::SocketAddr;
use tower::Layer;

/// Peer address injected by [`MockConnectInfoLayer`].
pub const PEER_IP: &str = "127.0.0.1";

/// Inserts a fixed `ConnectInfo` into every request, as the real server
/// does through `into_make_service_with_connect_info`.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = format!("{PEER_IP}:12345").parse().unwrap();
        req.extensions_mut().insert(ConnectInfo(addr));
        self.inner.call(req)
    }
}

pub fn create_test_state() -> AppState {
    AppState::in_memory()
}

pub fn create_test_app(state: AppState) -> Router {
    base_router(state).layer(MockConnectInfoLayer)
}

pub fn make_server() -> TestServer {
    TestServer::new(create_test_app(create_test_state())).unwrap()
}

pub async fn register_user(server: &TestServer, email: &str, name: &str) -> Value {
    let response = server
        .post("/api/users")
        .json(&json!({ "email": email, "name": name }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn create_url(server: &TestServer, long_url: &str, email: &str) -> Value {
    let response = server
        .post("/api/url")
        .json(&json!({ "long_url": long_url, "email": email }))
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

pub async fn click(server: &TestServer, code: &str, times: usize) {
    for _ in 0..times {
        server
            .post(&format!("/api/url/{code}/click"))
            .await
            .assert_status_ok();
    }
}
