//! In-memory [`RemoteClient`] for tests.

#![allow(clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{Endpoint, RemoteClient, RemoteError, RemoteResponse};

type Route = (&'static str, Endpoint, String);
type Reply = Result<serde_json::Value, (u16, serde_json::Value)>;

/// Scripted remote keyed by method, endpoint and path (query string ignored).
///
/// Unscripted requests answer `404`.
#[derive(Default)]
pub struct FakeRemote {
    routes: Mutex<HashMap<Route, Reply>>,
    calls: Mutex<Vec<String>>,
    bodies: Mutex<Vec<serde_json::Value>>,
}

impl FakeRemote {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful JSON reply.
    pub fn respond(
        self,
        method: &'static str,
        endpoint: Endpoint,
        path: &str,
        data: serde_json::Value,
    ) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, endpoint, path.to_string()), Ok(data));
        self
    }

    /// Script a non-success reply.
    pub fn fail(
        self,
        method: &'static str,
        endpoint: Endpoint,
        path: &str,
        status: u16,
        data: serde_json::Value,
    ) -> Self {
        self.routes
            .lock()
            .unwrap()
            .insert((method, endpoint, path.to_string()), Err((status, data)));
        self
    }

    /// Every request made, as `METHOD path?query`.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of requests whose path starts with `prefix`.
    pub fn count(&self, method: &str, prefix: &str) -> usize {
        let needle = format!("{method} {prefix}");
        self.calls()
            .iter()
            .filter(|call| call.starts_with(&needle))
            .count()
    }

    /// Request bodies sent with `POST`/`PUT`, in order.
    pub fn bodies(&self) -> Vec<serde_json::Value> {
        self.bodies.lock().unwrap().clone()
    }

    fn reply(
        &self,
        method: &'static str,
        endpoint: Endpoint,
        path: &str,
    ) -> Result<RemoteResponse, RemoteError> {
        self.calls.lock().unwrap().push(format!("{method} {path}"));

        let route_path = path.split('?').next().unwrap_or(path).to_string();
        let reply = self
            .routes
            .lock()
            .unwrap()
            .get(&(method, endpoint, route_path))
            .cloned()
            .unwrap_or_else(|| Err((404, serde_json::json!({"errors": [{"type": "NotFound"}]}))));

        match reply {
            Ok(data) => Ok(RemoteResponse { data, status: 200 }),
            Err((status, data)) => Err(RemoteError::Status { status, data }),
        }
    }
}

#[async_trait]
impl RemoteClient for FakeRemote {
    async fn get(&self, endpoint: Endpoint, path: &str) -> Result<RemoteResponse, RemoteError> {
        tokio::task::yield_now().await;
        self.reply("GET", endpoint, path)
    }

    async fn post(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RemoteResponse, RemoteError> {
        self.bodies.lock().unwrap().push(body.clone());
        self.reply("POST", endpoint, path)
    }

    async fn put(
        &self,
        endpoint: Endpoint,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<RemoteResponse, RemoteError> {
        self.bodies.lock().unwrap().push(body.clone());
        self.reply("PUT", endpoint, path)
    }

    async fn delete(&self, endpoint: Endpoint, path: &str) -> Result<u16, RemoteError> {
        self.reply("DELETE", endpoint, path).map(|_| 204)
    }
}
