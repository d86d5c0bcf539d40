//! Messages and method paths of `feed.LandmarkFeed`.
//!
//! Field numbers follow the service's message declarations.

pub const SERVICE: &str = "feed.LandmarkFeed";

pub mod path {
    pub const GET_FEED: &str = "/feed.LandmarkFeed/GetFeed";
    pub const RESET_FEED: &str = "/feed.LandmarkFeed/ResetFeed";
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(float, tag = "1")]
    pub latitude: f32,
    #[prost(float, tag = "2")]
    pub longitude: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFeedRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(int32, tag = "2")]
    pub amount: i32,
    #[prost(message, optional, tag = "3")]
    pub location: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFeedResponse {
    #[prost(string, repeated, tag = "1")]
    pub landmark_ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ResetFeedRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct ResetFeedResponse {}
