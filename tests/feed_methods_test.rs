mod common;

use common::{FakeDialer, FakeTransport};
use landmark_rpc::rpc::feed::{self, path};
use landmark_rpc::{CallContext, Coordinates, FeedOperations, Gateway, Settings};
use std::time::{Duration, Instant};
use tokio_test::assert_ok;

async fn feed_gateway(dialer: &FakeDialer) -> Gateway<FakeTransport> {
    let settings = Settings::new(Duration::from_secs(1)).with_feed("localhost:8081");
    Gateway::connect_with(dialer, &settings).await.unwrap()
}

#[tokio::test]
async fn test_get_feed_returns_ids_in_order() {
    let dialer = FakeDialer::new();
    dialer
        .feed()
        .respond(path::GET_FEED, |req: feed::GetFeedRequest| {
            assert_eq!(req.user_id, "user-1");
            assert_eq!(req.amount, 3);
            assert_eq!(
                req.location,
                Some(feed::Point {
                    latitude: 48.5,
                    longitude: 2.25,
                })
            );
            Ok(feed::GetFeedResponse {
                landmark_ids: vec!["c".to_string(), "a".to_string(), "b".to_string()],
            })
        });
    let gateway = feed_gateway(&dialer).await;

    let ids = gateway
        .get_feed(
            &CallContext::background(),
            "user-1",
            Some(Coordinates::new(48.5, 2.25)),
            3,
        )
        .await
        .unwrap();

    assert_eq!(ids, vec!["c", "a", "b"]);
}

#[tokio::test]
async fn test_empty_feed_is_empty_list() {
    let dialer = FakeDialer::new();
    dialer
        .feed()
        .respond(path::GET_FEED, |req: feed::GetFeedRequest| {
            assert_eq!(req.location, None);
            Ok(feed::GetFeedResponse::default())
        });
    let gateway = feed_gateway(&dialer).await;

    let ids = gateway
        .get_feed(&CallContext::background(), "user-1", None, 10)
        .await
        .unwrap();

    assert!(ids.is_empty());
}

#[tokio::test]
async fn test_reset_feed() {
    let dialer = FakeDialer::new();
    dialer
        .feed()
        .respond(path::RESET_FEED, |req: feed::ResetFeedRequest| {
            assert_eq!(req.user_id, "user-1");
            Ok(feed::ResetFeedResponse {})
        });
    let gateway = feed_gateway(&dialer).await;

    assert_ok!(
        gateway
            .reset_feed(&CallContext::background(), "user-1")
            .await
    );
    assert_eq!(dialer.feed().paths(), vec![path::RESET_FEED]);
}

#[tokio::test]
async fn test_expired_deadline_is_not_dispatched() {
    let dialer = FakeDialer::new();
    dialer
        .feed()
        .respond(path::GET_FEED, |_: feed::GetFeedRequest| {
            Ok(feed::GetFeedResponse::default())
        });
    let gateway = feed_gateway(&dialer).await;
    let ctx = CallContext::with_deadline(Instant::now() - Duration::from_millis(5));

    let err = gateway.get_feed(&ctx, "user-1", None, 10).await.unwrap_err();

    assert!(err.is_deadline_exceeded());
    assert!(dialer.feed().calls().is_empty());
}

#[tokio::test]
async fn test_stalled_backend_hits_caller_deadline() {
    let dialer = FakeDialer::new();
    dialer.feed().stall();
    let gateway = feed_gateway(&dialer).await;
    let ctx = CallContext::with_timeout(Duration::from_millis(50));

    let started = Instant::now();
    let err = gateway.get_feed(&ctx, "user-1", None, 10).await.unwrap_err();

    assert!(err.is_deadline_exceeded());
    assert!(started.elapsed() < Duration::from_secs(1));

    let calls = dialer.feed().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].path, path::GET_FEED);
    assert!(calls[0].grpc_timeout.is_some());
}

#[tokio::test]
async fn test_background_context_sends_no_timeout() {
    let dialer = FakeDialer::new();
    dialer
        .feed()
        .respond(path::RESET_FEED, |_: feed::ResetFeedRequest| {
            Ok(feed::ResetFeedResponse {})
        });
    let gateway = feed_gateway(&dialer).await;

    gateway
        .reset_feed(&CallContext::background(), "user-1")
        .await
        .unwrap();

    assert_eq!(dialer.feed().calls()[0].grpc_timeout, None);
}

#[tokio::test]
async fn test_unavailable_backend_surfaces_status() {
    let dialer = FakeDialer::new();
    dialer
        .feed()
        .respond(path::GET_FEED, |_: feed::GetFeedRequest| {
            Err::<feed::GetFeedResponse, _>(tonic::Status::unavailable("feed restarting"))
        });
    let gateway = feed_gateway(&dialer).await;

    let err = gateway
        .get_feed(&CallContext::background(), "user-1", None, 10)
        .await
        .unwrap_err();

    assert_eq!(err.code(), Some(tonic::Code::Unavailable));
    assert_eq!(err.status().unwrap().message(), "feed restarting");
}
