use landmark_rpc::{Dialer, Gateway, GatewayError, GrpcDialer, ServiceKind, Settings};
use std::time::Duration;
use tokio::net::TcpListener;

/// An address on which nothing is listening.
async fn closed_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);
    address.to_string()
}

#[tokio::test]
async fn test_connect_to_closed_port_fails() {
    let settings = Settings::new(Duration::from_millis(500)).with_storage(closed_address().await);

    let result = Gateway::connect(&settings).await;

    match result {
        Err(GatewayError::ConnectError { service, .. })
        | Err(GatewayError::DialTimeoutError { service, .. }) => {
            assert_eq!(service, ServiceKind::Storage)
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("nothing is listening, construction should fail"),
    }
}

#[tokio::test]
async fn test_feed_failure_reported_for_feed() {
    let settings = Settings::new(Duration::from_millis(500)).with_feed(closed_address().await);

    let err = match Gateway::connect(&settings).await {
        Err(err) => err,
        Ok(_) => panic!("nothing is listening, construction should fail"),
    };

    assert!(err.to_string().contains("feed service"));
}

#[tokio::test]
async fn test_unparseable_address_is_rejected_before_dialing() {
    let settings = Settings::new(Duration::from_millis(500)).with_storage("ftp://storage.internal");

    let result = Gateway::connect(&settings).await;

    assert!(matches!(
        result,
        Err(GatewayError::InvalidConfigValueError { .. })
    ));
}

#[tokio::test]
async fn test_dialer_reports_address_on_refusal() {
    let address = closed_address().await;

    let result = GrpcDialer
        .dial(ServiceKind::Feed, &address, Duration::from_millis(500))
        .await;

    match result {
        Err(GatewayError::ConnectError {
            service,
            address: reported,
            reason,
        }) => {
            assert_eq!(service, ServiceKind::Feed);
            assert_eq!(reported, address);
            assert!(!reason.is_empty());
        }
        Err(GatewayError::DialTimeoutError { timeout, .. }) => {
            assert_eq!(timeout, Duration::from_millis(500))
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("nothing is listening, dial should fail"),
    }
}

#[tokio::test]
async fn test_tls_address_is_rejected_even_with_a_listener() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let tls_address = format!("https://{}", listener.local_addr().unwrap());
    let settings = Settings::new(Duration::from_millis(500)).with_storage(tls_address.clone());

    match Gateway::connect(&settings).await {
        Err(GatewayError::InvalidConfigValueError { field, reason, .. }) => {
            assert_eq!(field, "storage.address");
            assert!(reason.contains("TLS"));
        }
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("a TLS address must not be dialed in plaintext"),
    }

    let result = GrpcDialer
        .dial(ServiceKind::Feed, &tls_address, Duration::from_millis(500))
        .await;
    assert!(matches!(
        result,
        Err(GatewayError::InvalidConfigValueError { .. })
    ));
}
