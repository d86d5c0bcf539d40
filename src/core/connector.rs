use crate::domain::context::{Budget, CallContext};
use crate::rpc::{Dialer, ServiceKind, Transport};
use crate::utils::error::{GatewayError, Result};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Owns the connection to one backend service.
///
/// The slot is only locked to clone the transport handle or to take it out on
/// close, never across an await. Calls already in flight when `close` runs keep
/// their own handle and finish normally.
pub struct Connector<T> {
    service: ServiceKind,
    address: String,
    transport: Mutex<Option<T>>,
}

impl<T: Transport> Connector<T> {
    pub async fn dial<D>(
        dialer: &D,
        service: ServiceKind,
        address: &str,
        timeout: Duration,
    ) -> Result<Self>
    where
        D: Dialer<Transport = T>,
    {
        tracing::debug!("Dialing {} service at {} (timeout {:?})", service, address, timeout);
        let transport = dialer.dial(service, address, timeout).await?;
        tracing::info!("Connected to {} service at {}", service, address);

        Ok(Self {
            service,
            address: address.to_string(),
            transport: Mutex::new(Some(transport)),
        })
    }

    pub fn service(&self) -> ServiceKind {
        self.service
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn is_closed(&self) -> bool {
        self.transport
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }

    fn handle(&self) -> Result<T> {
        self.transport
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(GatewayError::ConnectionClosedError {
                service: self.service,
            })
    }

    /// One request, one response. The caller's remaining budget bounds the
    /// call locally and travels to the backend as `grpc-timeout`.
    pub async fn unary<Req, Res>(
        &self,
        ctx: &CallContext,
        path: &'static str,
        message: Req,
    ) -> Result<Res>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let transport = self.handle()?;
        let mut request = tonic::Request::new(message);

        tracing::debug!(service = %self.service, method = path, "dispatching rpc");
        let result = match ctx.budget() {
            Budget::Expired => Err(tonic::Status::deadline_exceeded(
                "deadline expired before dispatch",
            )),
            Budget::Unbounded => transport.unary(path, request).await,
            Budget::Remaining(remaining) => {
                request.set_timeout(remaining);
                match tokio::time::timeout(remaining, transport.unary(path, request)).await {
                    Ok(result) => result,
                    Err(_) => Err(tonic::Status::deadline_exceeded(format!(
                        "no response within {:?}",
                        remaining
                    ))),
                }
            }
        };

        result.map_err(|status| {
            tracing::debug!(
                service = %self.service,
                method = path,
                code = ?status.code(),
                "rpc failed: {}",
                status.message()
            );
            GatewayError::RpcError(status)
        })
    }

    /// Releases the transport. Only the first call does any work; later calls
    /// return `Ok(())`.
    pub async fn close(&self) -> Result<()> {
        let transport = self
            .transport
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        match transport {
            Some(transport) => {
                tracing::info!("Closing {} connection to {}", self.service, self.address);
                transport.close().await
            }
            None => Ok(()),
        }
    }
}
