//! Messages and method paths of `storage.StorageService`.
//!
//! One request and one response message per method, with field numbers in
//! the order the service declares them. Methods that answer with nothing
//! share [`Empty`].

pub const SERVICE: &str = "storage.StorageService";

pub mod path {
    pub const GET_LANDMARK: &str = "/storage.StorageService/GetLandmark";
    pub const ADD_LANDMARK: &str = "/storage.StorageService/AddLandmark";
    pub const DELETE_LANDMARK: &str = "/storage.StorageService/DeleteLandmark";
    pub const SET_LANDMARK_SCORE: &str = "/storage.StorageService/SetLandmarkScore";
    pub const SET_LANDMARK_COORDINATES: &str = "/storage.StorageService/SetLandmarkCoordinates";
    pub const SET_LANDMARK_NAME: &str = "/storage.StorageService/SetLandmarkName";

    pub const LIKE_LANDMARK: &str = "/storage.StorageService/LikeLandmark";
    pub const DISLIKE_LANDMARK: &str = "/storage.StorageService/DislikeLandmark";
    pub const VIEW_LANDMARK: &str = "/storage.StorageService/ViewLandmark";
    pub const NOT_INTERESTED: &str = "/storage.StorageService/NotInterested";
    pub const GET_LIKES: &str = "/storage.StorageService/GetLikes";
    pub const GET_LIKES_AMOUNT: &str = "/storage.StorageService/GetLikesAmount";
    pub const GET_FAVOURITE_LANDMARKS: &str = "/storage.StorageService/GetFavouriteLandmarks";

    pub const RECOMMEND_LANDMARKS: &str = "/storage.StorageService/RecommendLandmarks";
    pub const GET_RANDOM_FEED: &str = "/storage.StorageService/GetRandomFeed";
    pub const GET_LANDMARKS_FILTERED: &str = "/storage.StorageService/GetLandmarksFiltered";
    pub const GET_LANDMARKS_BY_TAG: &str = "/storage.StorageService/GetLandmarksByTag";
    pub const GET_SIMILAR_LANDMARKS: &str = "/storage.StorageService/GetSimilarLandmarks";
    pub const GET_ACTIVITY: &str = "/storage.StorageService/GetActivity";

    pub const ADD_USER: &str = "/storage.StorageService/AddUser";
    pub const ADD_FRIEND: &str = "/storage.StorageService/AddFriend";
    pub const DELETE_FRIEND: &str = "/storage.StorageService/DeleteFriend";
    pub const IS_FRIEND: &str = "/storage.StorageService/IsFriend";
    pub const GET_FRIENDS: &str = "/storage.StorageService/GetFriends";
    pub const COUNT_FRIENDS: &str = "/storage.StorageService/CountFriends";

    pub const CREATE_TAG: &str = "/storage.StorageService/CreateTag";
    pub const DELETE_TAG: &str = "/storage.StorageService/DeleteTag";
    pub const CONNECT_TAGS: &str = "/storage.StorageService/ConnectTags";
    pub const DISCONNECT_TAGS: &str = "/storage.StorageService/DisconnectTags";
    pub const GET_CONNECTED_TAGS: &str = "/storage.StorageService/GetConnectedTags";
    pub const SET_USER_TAG: &str = "/storage.StorageService/SetUserTag";
    pub const DELETE_USER_TAG: &str = "/storage.StorageService/DeleteUserTag";
    pub const CHANGE_USER_TAGS: &str = "/storage.StorageService/ChangeUserTags";
    pub const ADD_LANDMARK_TAG: &str = "/storage.StorageService/AddLandmarkTag";
    pub const REMOVE_LANDMARK_TAG: &str = "/storage.StorageService/RemoveLandmarkTag";
    pub const GET_LANDMARK_TAGS: &str = "/storage.StorageService/GetLandmarkTags";
    pub const GET_LANDMARK_TAGS_WITH_SCORE: &str =
        "/storage.StorageService/GetLandmarkTagsWithScore";
    pub const GET_USER_TAGS: &str = "/storage.StorageService/GetUserTags";
    pub const COUNT_REVIEWS: &str = "/storage.StorageService/CountReviews";

    pub const CREATE_COMMENT: &str = "/storage.StorageService/CreateComment";
    pub const EDIT_COMMENT: &str = "/storage.StorageService/EditComment";
    pub const DELETE_COMMENT: &str = "/storage.StorageService/DeleteComment";
    pub const GET_COMMENTS: &str = "/storage.StorageService/GetComments";
    pub const GET_PROFILE_COMMENTS: &str = "/storage.StorageService/GetProfileComments";
    pub const GET_REVIEW: &str = "/storage.StorageService/GetReview";
    pub const HAS_REVIEWED: &str = "/storage.StorageService/HasReviewed";
}

/// Response of every method that returns nothing.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Empty {}

#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct Point {
    #[prost(float, tag = "1")]
    pub latitude: f32,
    #[prost(float, tag = "2")]
    pub longitude: f32,
}

/// Geographic box; both corners are always set by the gateway.
#[derive(Clone, Copy, PartialEq, ::prost::Message)]
pub struct BoundingBox {
    #[prost(message, optional, tag = "1")]
    pub northeast: Option<Point>,
    #[prost(message, optional, tag = "2")]
    pub southwest: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LandmarkItem {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(float, tag = "2")]
    pub score: f32,
    #[prost(float, tag = "3")]
    pub latitude: f32,
    #[prost(float, tag = "4")]
    pub longitude: f32,
    #[prost(string, repeated, tag = "5")]
    pub tags: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TagScore {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(float, tag = "2")]
    pub score: f32,
}

/// A review (parent is a landmark) or a reply (parent is a comment).
/// `GetReview` answers with this message directly.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Comment {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub parent_id: String,
    #[prost(string, tag = "3")]
    pub user_id: String,
    #[prost(int32, tag = "4")]
    pub grade: i32,
    #[prost(string, repeated, tag = "5")]
    pub attachments: Vec<String>,
    #[prost(string, tag = "6")]
    pub text: String,
    #[prost(string, tag = "7")]
    pub reply_id: String,
    #[prost(int64, tag = "8")]
    pub timestamp: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarkRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarkResponse {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(bool, tag = "2")]
    pub liked: bool,
    #[prost(float, tag = "3")]
    pub rating: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddLandmarkRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(float, optional, tag = "2")]
    pub score: Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteLandmarkRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetLandmarkScoreRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(float, tag = "2")]
    pub score: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetLandmarkCoordinatesRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(message, optional, tag = "2")]
    pub coordinates: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetLandmarkNameRequest {
    #[prost(string, tag = "1")]
    pub id: String,
    #[prost(string, tag = "2")]
    pub name: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LikeLandmarkRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DislikeLandmarkRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ViewLandmarkRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NotInterestedRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLikesRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLikesResponse {
    #[prost(int64, tag = "1")]
    pub likes: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLikesAmountRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLikesAmountResponse {
    #[prost(int64, tag = "1")]
    pub count: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFavouriteLandmarksRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(int32, tag = "3")]
    pub offset: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFavouriteLandmarksResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecommendLandmarksRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(int64, tag = "2")]
    pub amount: i64,
    #[prost(message, optional, tag = "3")]
    pub location: Option<Point>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RecommendLandmarksResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRandomFeedRequest {
    #[prost(int64, tag = "1")]
    pub count: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetRandomFeedResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarksFilteredRequest {
    #[prost(string, repeated, tag = "1")]
    pub include: Vec<String>,
    #[prost(string, repeated, tag = "2")]
    pub exclude: Vec<String>,
    #[prost(int32, tag = "3")]
    pub offset: i32,
    #[prost(int32, tag = "4")]
    pub limit: i32,
    #[prost(message, optional, tag = "5")]
    pub bounds: Option<BoundingBox>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarksFilteredResponse {
    #[prost(message, repeated, tag = "1")]
    pub landmarks: Vec<LandmarkItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarksByTagRequest {
    #[prost(string, tag = "1")]
    pub tag_id: String,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(int32, tag = "3")]
    pub offset: i32,
    #[prost(message, optional, tag = "4")]
    pub bounds: Option<BoundingBox>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarksByTagResponse {
    #[prost(message, repeated, tag = "1")]
    pub landmarks: Vec<LandmarkItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSimilarLandmarksRequest {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(int32, tag = "3")]
    pub offset: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetSimilarLandmarksResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActivityRequest {
    #[prost(string, tag = "1")]
    pub activity: String,
    #[prost(string, repeated, tag = "2")]
    pub include: Vec<String>,
    #[prost(string, repeated, tag = "3")]
    pub exclude: Vec<String>,
    #[prost(int32, tag = "4")]
    pub offset: i32,
    #[prost(int32, tag = "5")]
    pub limit: i32,
    #[prost(message, optional, tag = "6")]
    pub bounds: Option<BoundingBox>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetActivityResponse {
    #[prost(message, repeated, tag = "1")]
    pub landmarks: Vec<LandmarkItem>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddUserRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddFriendRequest {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub receiver: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteFriendRequest {
    #[prost(string, tag = "1")]
    pub sender: String,
    #[prost(string, tag = "2")]
    pub receiver: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IsFriendRequest {
    #[prost(string, tag = "1")]
    pub user1: String,
    #[prost(string, tag = "2")]
    pub user2: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct IsFriendResponse {
    #[prost(bool, tag = "1")]
    pub is_friend: bool,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFriendsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetFriendsResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountFriendsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountFriendsResponse {
    #[prost(int64, tag = "1")]
    pub count: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTagRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteTagRequest {
    #[prost(string, tag = "1")]
    pub id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConnectTagsRequest {
    #[prost(string, tag = "1")]
    pub id1: String,
    #[prost(string, tag = "2")]
    pub id2: String,
    #[prost(float, tag = "3")]
    pub score: f32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DisconnectTagsRequest {
    #[prost(string, tag = "1")]
    pub id1: String,
    #[prost(string, tag = "2")]
    pub id2: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetConnectedTagsRequest {
    #[prost(string, tag = "1")]
    pub tag_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetConnectedTagsResponse {
    #[prost(message, repeated, tag = "1")]
    pub tags: Vec<TagScore>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SetUserTagRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub tag_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteUserTagRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub tag_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangeUserTagsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, repeated, tag = "2")]
    pub tag_ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddLandmarkTagRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
    #[prost(string, tag = "2")]
    pub tag_id: String,
    #[prost(float, optional, tag = "3")]
    pub score: Option<f32>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RemoveLandmarkTagRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
    #[prost(string, tag = "2")]
    pub tag_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarkTagsRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarkTagsResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarkTagsWithScoreRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetLandmarkTagsWithScoreResponse {
    #[prost(message, repeated, tag = "1")]
    pub tags: Vec<TagScore>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserTagsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetUserTagsResponse {
    #[prost(string, repeated, tag = "1")]
    pub ids: Vec<String>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountReviewsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CountReviewsResponse {
    #[prost(int64, tag = "1")]
    pub count: i64,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateCommentRequest {
    #[prost(string, tag = "1")]
    pub parent_id: String,
    #[prost(string, tag = "2")]
    pub author_id: String,
    #[prost(string, tag = "3")]
    pub text: String,
    #[prost(string, repeated, tag = "4")]
    pub attachments: Vec<String>,
    #[prost(int32, tag = "5")]
    pub rating: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EditCommentRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub comment_id: String,
    #[prost(string, tag = "3")]
    pub text: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteCommentRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(string, tag = "2")]
    pub comment_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCommentsRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(int32, tag = "3")]
    pub offset: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetCommentsResponse {
    #[prost(message, repeated, tag = "1")]
    pub comments: Vec<Comment>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProfileCommentsRequest {
    #[prost(string, tag = "1")]
    pub user_id: String,
    #[prost(int32, tag = "2")]
    pub limit: i32,
    #[prost(int32, tag = "3")]
    pub offset: i32,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetProfileCommentsResponse {
    #[prost(message, repeated, tag = "1")]
    pub comments: Vec<Comment>,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GetReviewRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasReviewedRequest {
    #[prost(string, tag = "1")]
    pub landmark_id: String,
    #[prost(string, tag = "2")]
    pub user_id: String,
}

#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HasReviewedResponse {
    #[prost(bool, tag = "1")]
    pub reviewed: bool,
}
