use crate::rpc::ServiceKind;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Failed to connect to {service} service at {address}: {reason}")]
    ConnectError {
        service: ServiceKind,
        address: String,
        reason: String,
    },

    #[error("Dial to {service} service at {address} timed out after {timeout:?}")]
    DialTimeoutError {
        service: ServiceKind,
        address: String,
        timeout: Duration,
    },

    #[error("RPC failed: {0}")]
    RpcError(#[from] tonic::Status),

    #[error("{service} service is not configured")]
    BackendNotConfiguredError { service: ServiceKind },

    #[error("Connection to {service} service is closed")]
    ConnectionClosedError { service: ServiceKind },

    #[error("Failed to close {service} connection: {message}")]
    CloseError {
        service: ServiceKind,
        message: String,
    },

    #[error("Invalid identifier '{value}': {source}")]
    InvalidIdentifierError {
        value: String,
        #[source]
        source: uuid::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GatewayError {
    /// The backend status when this error is a failed call.
    pub fn status(&self) -> Option<&tonic::Status> {
        match self {
            GatewayError::RpcError(status) => Some(status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<tonic::Code> {
        self.status().map(tonic::Status::code)
    }

    pub fn is_deadline_exceeded(&self) -> bool {
        self.code() == Some(tonic::Code::DeadlineExceeded)
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
