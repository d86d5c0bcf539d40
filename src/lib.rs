//! Typed client gateway over the landmark storage and feed services.
//!
//! ```no_run
//! use landmark_rpc::{CallContext, Gateway, Settings, StorageOperations};
//! use std::time::Duration;
//!
//! # async fn run() -> landmark_rpc::Result<()> {
//! let settings = Settings::new(Duration::from_secs(3)).with_storage("localhost:8080");
//! let gateway = Gateway::connect(&settings).await?;
//!
//! let ctx = CallContext::with_timeout(Duration::from_secs(1));
//! let preview = gateway.get_landmark(&ctx, "landmark-id", "user-id").await?;
//! println!("{} liked={}", preview.id, preview.liked);
//!
//! gateway.close().await
//! # }
//! ```

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod rpc;
pub mod utils;

pub use adapters::{GrpcDialer, GrpcTransport};
pub use config::{FeedOptions, Settings, StorageOptions};
pub use crate::core::{Backend, Gateway};
pub use domain::context::CallContext;
pub use domain::model::{
    Comment, Coordinates, Entity, GeoBounds, LandmarkItem, LandmarkPreview, Page, TagWithScore,
};
pub use domain::ports::{FeedOperations, StorageOperations};
pub use rpc::{Dialer, ServiceKind, Transport};
pub use utils::error::{GatewayError, Result};
pub use utils::logger::{init_logger, LogFormat};
