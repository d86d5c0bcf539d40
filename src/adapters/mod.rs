// Adapters layer: concrete implementations of the transport seam.

pub mod grpc;

pub use grpc::{GrpcDialer, GrpcTransport};
