use crate::utils::error::{GatewayError, Result};
use std::time::Duration;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Prefixes `http://` when the address carries no scheme, so that
/// `localhost:8080` and `http://localhost:8080` dial the same endpoint.
pub fn endpoint_uri(address: &str) -> String {
    if address.contains("://") {
        address.to_string()
    } else {
        format!("http://{}", address)
    }
}

pub fn validate_address(field_name: &str, address: &str) -> Result<()> {
    if address.trim().is_empty() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    match Url::parse(&endpoint_uri(address)) {
        Ok(url) => {
            match url.scheme() {
                "http" => {}
                "https" => {
                    return Err(GatewayError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: address.to_string(),
                        reason: "TLS is not supported; use a plaintext address".to_string(),
                    })
                }
                scheme => {
                    return Err(GatewayError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: address.to_string(),
                        reason: format!("Unsupported scheme: {}", scheme),
                    })
                }
            }
            if url.host_str().map_or(true, str::is_empty) {
                return Err(GatewayError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: address.to_string(),
                    reason: "Address has no host".to_string(),
                });
            }
            Ok(())
        }
        Err(e) => Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: address.to_string(),
            reason: format!("Invalid address format: {}", e),
        }),
    }
}

pub fn validate_positive_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(GatewayError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_address() {
        assert!(validate_address("storage.address", "localhost:8080").is_ok());
        assert!(validate_address("storage.address", "http://10.0.0.5:50051").is_ok());
        assert!(validate_address("storage.address", "").is_err());
        assert!(validate_address("storage.address", "   ").is_err());
        assert!(validate_address("storage.address", "ftp://storage.internal").is_err());
        assert!(validate_address("storage.address", "localhost:notaport").is_err());
    }

    #[test]
    fn test_endpoint_uri() {
        assert_eq!(endpoint_uri("localhost:8080"), "http://localhost:8080");
        assert_eq!(endpoint_uri("http://feed:50051"), "http://feed:50051");
    }

    #[test]
    fn test_validate_address_rejects_tls() {
        match validate_address("feed.address", "https://feed.internal:443") {
            Err(GatewayError::InvalidConfigValueError { field, reason, .. }) => {
                assert_eq!(field, "feed.address");
                assert!(reason.contains("TLS"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_positive_duration() {
        assert!(validate_positive_duration("rpc_timeout", Duration::from_millis(1)).is_ok());
        assert!(validate_positive_duration("rpc_timeout", Duration::ZERO).is_err());
    }
}
