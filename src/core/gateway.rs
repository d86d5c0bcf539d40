use crate::adapters::grpc::{GrpcDialer, GrpcTransport};
use crate::config::Settings;
use crate::core::connector::Connector;
use crate::domain::context::CallContext;
use crate::rpc::{feed, storage, Dialer, ServiceKind, Transport};
use crate::utils::error::{GatewayError, Result};
use crate::utils::validation::Validate;

/// A backend is either dialed and owned, or switched off by configuration.
pub enum Backend<T> {
    Enabled(Connector<T>),
    Disabled,
}

impl<T: Transport> Backend<T> {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Backend::Enabled(_))
    }

    pub fn connector(&self) -> Option<&Connector<T>> {
        match self {
            Backend::Enabled(connector) => Some(connector),
            Backend::Disabled => None,
        }
    }

    async fn close(&self) -> Result<()> {
        match self {
            Backend::Enabled(connector) => connector.close().await,
            Backend::Disabled => Ok(()),
        }
    }
}

/// Client facade over the storage and feed services.
///
/// Holds no mutable state between construction and [`Gateway::close`], so a
/// shared reference can serve any number of concurrent calls.
pub struct Gateway<T = GrpcTransport> {
    storage: Backend<T>,
    feed: Backend<T>,
}

impl Gateway<GrpcTransport> {
    /// Dials every configured backend over gRPC.
    pub async fn connect(settings: &Settings) -> Result<Self> {
        Self::connect_with(&GrpcDialer, settings).await
    }
}

impl<T: Transport> Gateway<T> {
    /// Dials storage, then feed. If the feed dial fails the storage connector
    /// is closed before the error is returned.
    pub async fn connect_with<D>(dialer: &D, settings: &Settings) -> Result<Self>
    where
        D: Dialer<Transport = T>,
    {
        settings.validate()?;

        let storage = match &settings.storage {
            Some(options) => Backend::Enabled(
                Connector::dial(
                    dialer,
                    ServiceKind::Storage,
                    &options.address,
                    settings.rpc_timeout,
                )
                .await?,
            ),
            None => Backend::Disabled,
        };

        let feed = match &settings.feed {
            Some(options) => {
                match Connector::dial(dialer, ServiceKind::Feed, &options.address, settings.rpc_timeout)
                    .await
                {
                    Ok(connector) => Backend::Enabled(connector),
                    Err(err) => {
                        if let Err(close_err) = storage.close().await {
                            tracing::warn!(
                                "Failed to release storage connection after feed dial error: {}",
                                close_err
                            );
                        }
                        return Err(err);
                    }
                }
            }
            None => Backend::Disabled,
        };

        if !storage.is_enabled() && !feed.is_enabled() {
            tracing::warn!("Gateway constructed with no backends configured");
        }
        tracing::info!(
            "Gateway ready ({}: {}, {}: {})",
            storage::SERVICE,
            if storage.is_enabled() { "enabled" } else { "disabled" },
            feed::SERVICE,
            if feed.is_enabled() { "enabled" } else { "disabled" },
        );

        Ok(Self { storage, feed })
    }

    pub fn storage(&self) -> &Backend<T> {
        &self.storage
    }

    pub fn feed(&self) -> &Backend<T> {
        &self.feed
    }

    /// Closes storage, then feed. Both get an attempt even if the first fails;
    /// the storage error wins when both fail. Closing twice is a no-op.
    pub async fn close(&self) -> Result<()> {
        let storage = self.storage.close().await;
        let feed = self.feed.close().await;
        if let Err(err) = &feed {
            if storage.is_err() {
                tracing::warn!("Feed connection also failed to close: {}", err);
            }
        }
        storage.and(feed)
    }

    pub(crate) async fn call_storage<Req, Res>(
        &self,
        ctx: &CallContext,
        path: &'static str,
        request: Req,
    ) -> Result<Res>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        match &self.storage {
            Backend::Enabled(connector) => connector.unary(ctx, path, request).await,
            Backend::Disabled => Err(GatewayError::BackendNotConfiguredError {
                service: ServiceKind::Storage,
            }),
        }
    }

    pub(crate) async fn call_feed<Req, Res>(
        &self,
        ctx: &CallContext,
        path: &'static str,
        request: Req,
    ) -> Result<Res>
    where
        Req: prost::Message + Send + Sync + 'static,
        Res: prost::Message + Default + Send + Sync + 'static,
    {
        match &self.feed {
            Backend::Enabled(connector) => connector.unary(ctx, path, request).await,
            Backend::Disabled => Err(GatewayError::BackendNotConfiguredError {
                service: ServiceKind::Feed,
            }),
        }
    }
}
