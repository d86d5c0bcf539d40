pub mod connector;
pub mod feed_ops;
pub mod gateway;
pub mod mapping;
pub mod storage_ops;

pub use crate::domain::context::CallContext;
pub use crate::domain::ports::{FeedOperations, StorageOperations};
pub use crate::utils::error::Result;
pub use gateway::{Backend, Gateway};
