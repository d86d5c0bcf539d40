//! In-process stand-ins for the RPC runtime.
//!
//! `FakeTransport` round-trips every message through its protobuf encoding so
//! that requests and responses cross the same boundary they would on the wire.

#![allow(dead_code)]

use landmark_rpc::{Dialer, GatewayError, Result, ServiceKind, Transport};
use prost::Message;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tonic::Status;

type Handler = Arc<dyn Fn(&[u8]) -> std::result::Result<Vec<u8>, Status> + Send + Sync>;

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub path: &'static str,
    pub grpc_timeout: Option<String>,
}

#[derive(Default)]
struct FakeState {
    handlers: Mutex<HashMap<&'static str, Handler>>,
    calls: Mutex<Vec<RecordedCall>>,
    closes: AtomicUsize,
    close_error: Mutex<Option<(ServiceKind, String)>>,
    stalled: AtomicBool,
}

#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<FakeState>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the handler for one method path, replacing any previous one.
    pub fn respond<Req, Res, F>(&self, path: &'static str, handler: F) -> &Self
    where
        Req: Message + Default + 'static,
        Res: Message + 'static,
        F: Fn(Req) -> std::result::Result<Res, Status> + Send + Sync + 'static,
    {
        let handler: Handler = Arc::new(move |bytes: &[u8]| {
            let request = Req::decode(bytes).map_err(|e| Status::internal(e.to_string()))?;
            handler(request).map(|response| response.encode_to_vec())
        });
        self.state.handlers.lock().unwrap().insert(path, handler);
        self
    }

    /// Answers `path` with `response` and keeps every decoded request.
    pub fn record<Req, Res>(&self, path: &'static str, response: Res) -> Arc<Mutex<Vec<Req>>>
    where
        Req: Message + Default + Send + 'static,
        Res: Message + Clone + Send + Sync + 'static,
    {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        self.respond(path, move |req: Req| {
            sink.lock().unwrap().push(req);
            Ok(response.clone())
        });
        seen
    }

    /// Every subsequent call hangs until its deadline fires.
    pub fn stall(&self) {
        self.state.stalled.store(true, Ordering::SeqCst);
    }

    pub fn fail_close(&self, service: ServiceKind, message: &str) {
        *self.state.close_error.lock().unwrap() = Some((service, message.to_string()));
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.state.calls.lock().unwrap().clone()
    }

    pub fn paths(&self) -> Vec<&'static str> {
        self.calls().into_iter().map(|call| call.path).collect()
    }

    pub fn close_count(&self) -> usize {
        self.state.closes.load(Ordering::SeqCst)
    }
}

impl Transport for FakeTransport {
    async fn unary<Req, Res>(
        &self,
        path: &'static str,
        request: tonic::Request<Req>,
    ) -> std::result::Result<Res, Status>
    where
        Req: Message + Send + Sync + 'static,
        Res: Message + Default + Send + Sync + 'static,
    {
        let grpc_timeout = request
            .metadata()
            .get("grpc-timeout")
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.state
            .calls
            .lock()
            .unwrap()
            .push(RecordedCall { path, grpc_timeout });

        if self.state.stalled.load(Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }

        let handler = self.state.handlers.lock().unwrap().get(path).cloned();
        let handler =
            handler.ok_or_else(|| Status::unimplemented(format!("no handler for {}", path)))?;
        let bytes = handler(&request.into_inner().encode_to_vec())?;
        Res::decode(bytes.as_slice()).map_err(|e| Status::internal(e.to_string()))
    }

    async fn close(self) -> Result<()> {
        self.state.closes.fetch_add(1, Ordering::SeqCst);
        match self.state.close_error.lock().unwrap().clone() {
            Some((service, message)) => Err(GatewayError::CloseError { service, message }),
            None => Ok(()),
        }
    }
}

/// Hands out one shared `FakeTransport` per backend and records dial attempts.
#[derive(Default)]
pub struct FakeDialer {
    storage: FakeTransport,
    feed: FakeTransport,
    failing: Mutex<HashSet<ServiceKind>>,
    dialed: Mutex<Vec<ServiceKind>>,
}

impl FakeDialer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn storage(&self) -> &FakeTransport {
        &self.storage
    }

    pub fn feed(&self) -> &FakeTransport {
        &self.feed
    }

    pub fn refuse(&self, service: ServiceKind) {
        self.failing.lock().unwrap().insert(service);
    }

    pub fn dialed(&self) -> Vec<ServiceKind> {
        self.dialed.lock().unwrap().clone()
    }
}

impl Dialer for FakeDialer {
    type Transport = FakeTransport;

    async fn dial(
        &self,
        service: ServiceKind,
        address: &str,
        _timeout: Duration,
    ) -> Result<FakeTransport> {
        self.dialed.lock().unwrap().push(service);
        if self.failing.lock().unwrap().contains(&service) {
            return Err(GatewayError::ConnectError {
                service,
                address: address.to_string(),
                reason: "connection refused".to_string(),
            });
        }
        Ok(match service {
            ServiceKind::Storage => self.storage.clone(),
            ServiceKind::Feed => self.feed.clone(),
        })
    }
}
