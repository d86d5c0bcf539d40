//! Wire contract mirror and the transport seam.
//!
//! `storage` and `feed` mirror the message shapes owned by the two backend
//! services. [`Transport`] is the boundary to the RPC runtime: everything above
//! it speaks typed prost messages, everything below it is framing.

pub mod feed;
pub mod storage;

use crate::utils::error::Result;
use std::fmt;
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceKind {
    Storage,
    Feed,
}

impl fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceKind::Storage => f.write_str("storage"),
            ServiceKind::Feed => f.write_str("feed"),
        }
    }
}

/// A live, multiplexed connection to one backend.
///
/// Handles are cloned per call, so implementations must be cheap to clone and
/// safe to use from many tasks at once.
pub trait Transport: Clone + Send + Sync + 'static {
    fn unary<Req, Res>(
        &self,
        path: &'static str,
        request: tonic::Request<Req>,
    ) -> impl Future<Output = std::result::Result<Res, tonic::Status>> + Send
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static;

    /// Releases the connection. Consumes the handle.
    fn close(self) -> impl Future<Output = Result<()>> + Send;
}

pub trait Dialer: Send + Sync {
    type Transport: Transport;

    /// Connects eagerly, resolving only once the backend is reachable or
    /// `timeout` has elapsed.
    fn dial(
        &self,
        service: ServiceKind,
        address: &str,
        timeout: Duration,
    ) -> impl Future<Output = Result<Self::Transport>> + Send;
}
