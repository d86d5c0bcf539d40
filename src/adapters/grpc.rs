use crate::rpc::{Dialer, ServiceKind, Transport};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::{endpoint_uri, validate_address};
use std::error::Error as _;
use std::time::Duration;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::transport::{Channel, Endpoint};

// Servers answer pings more often than every five minutes with GOAWAY too_many_pings.
const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(300);

/// Dials plaintext HTTP/2 channels with keep-alive on busy connections.
#[derive(Debug, Clone, Copy, Default)]
pub struct GrpcDialer;

impl Dialer for GrpcDialer {
    type Transport = GrpcTransport;

    async fn dial(
        &self,
        service: ServiceKind,
        address: &str,
        timeout: Duration,
    ) -> Result<GrpcTransport> {
        let endpoint = endpoint(service, address, timeout)?;
        let channel = tokio::time::timeout(timeout, endpoint.connect())
            .await
            .map_err(|_| GatewayError::DialTimeoutError {
                service,
                address: address.to_string(),
                timeout,
            })?
            .map_err(|e| GatewayError::ConnectError {
                service,
                address: address.to_string(),
                reason: describe(&e),
            })?;

        Ok(GrpcTransport {
            grpc: Grpc::new(channel),
        })
    }
}

fn endpoint(service: ServiceKind, address: &str, timeout: Duration) -> Result<Endpoint> {
    let field = format!("{}.address", service);
    validate_address(&field, address)?;
    let endpoint = Endpoint::from_shared(endpoint_uri(address)).map_err(|e| {
        GatewayError::InvalidConfigValueError {
            field,
            value: address.to_string(),
            reason: describe(&e),
        }
    })?;
    Ok(endpoint
        .connect_timeout(timeout)
        .tcp_keepalive(Some(KEEPALIVE_INTERVAL))
        .http2_keep_alive_interval(KEEPALIVE_INTERVAL)
        .keep_alive_while_idle(false))
}

// tonic's transport error only says "transport error"; the cause is one level down.
fn describe(err: &tonic::transport::Error) -> String {
    match err.source() {
        Some(source) => format!("{}: {}", err, source),
        None => err.to_string(),
    }
}

/// A multiplexed channel; clones share the underlying connection.
#[derive(Debug, Clone)]
pub struct GrpcTransport {
    grpc: Grpc<Channel>,
}

impl Transport for GrpcTransport {
    async fn unary<Req, Res>(
        &self,
        path: &'static str,
        request: tonic::Request<Req>,
    ) -> std::result::Result<Res, tonic::Status>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        let mut grpc = self.grpc.clone();
        grpc.ready()
            .await
            .map_err(|e| tonic::Status::unavailable(format!("Service was not ready: {}", e)))?;

        let codec = ProstCodec::<Req, Res>::default();
        let response = grpc
            .unary(request, PathAndQuery::from_static(path), codec)
            .await?;
        Ok(response.into_inner())
    }

    async fn close(self) -> Result<()> {
        // The connection shuts down once the last clone of the channel is gone.
        drop(self.grpc);
        Ok(())
    }
}
