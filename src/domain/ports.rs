use crate::domain::context::CallContext;
use crate::domain::model::{
    Comment, Coordinates, GeoBounds, LandmarkItem, LandmarkPreview, Page, TagWithScore,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Operations served by the storage/recommendation backend.
///
/// Every method issues exactly one RPC and returns the backend's error
/// unchanged. List results are empty vectors when the backend has nothing.
#[async_trait]
pub trait StorageOperations: Send + Sync {
    // landmarks

    /// Preview of a landmark as seen by `user_id`.
    async fn get_landmark(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        user_id: &str,
    ) -> Result<LandmarkPreview>;
    async fn add_landmark(&self, ctx: &CallContext, id: &str, score: Option<f64>) -> Result<()>;
    async fn delete_landmark(&self, ctx: &CallContext, id: &str) -> Result<()>;
    async fn set_landmark_score(&self, ctx: &CallContext, id: &str, score: f64) -> Result<()>;
    async fn set_landmark_coordinates(
        &self,
        ctx: &CallContext,
        id: &str,
        coordinates: Coordinates,
    ) -> Result<()>;
    async fn set_landmark_name(&self, ctx: &CallContext, id: &str, name: &str) -> Result<()>;

    // engagement

    async fn like_landmark(&self, ctx: &CallContext, user_id: &str, landmark_id: &str)
        -> Result<()>;
    async fn dislike_landmark(
        &self,
        ctx: &CallContext,
        user_id: &str,
        landmark_id: &str,
    ) -> Result<()>;
    /// Records an impression.
    async fn view_landmark(&self, ctx: &CallContext, user_id: &str, landmark_id: &str)
        -> Result<()>;
    async fn not_interested(
        &self,
        ctx: &CallContext,
        user_id: &str,
        landmark_id: &str,
    ) -> Result<()>;
    async fn get_likes(&self, ctx: &CallContext, landmark_id: &str) -> Result<i64>;
    /// Number of likes `user_id` has given.
    async fn get_likes_amount(&self, ctx: &CallContext, user_id: &str) -> Result<i64>;
    async fn is_liked(&self, ctx: &CallContext, landmark_id: &str, user_id: &str) -> Result<bool>;
    /// Fails as a whole if any returned id is not a UUID.
    async fn get_favourite_landmarks(
        &self,
        ctx: &CallContext,
        user_id: &str,
        page: Page,
    ) -> Result<Vec<Uuid>>;

    // discovery

    async fn recommend_landmarks(
        &self,
        ctx: &CallContext,
        user_id: &str,
        near: Option<Coordinates>,
        amount: i32,
    ) -> Result<Vec<String>>;
    async fn get_random_feed(&self, ctx: &CallContext, amount: i32) -> Result<Vec<String>>;
    async fn get_landmarks_filtered(
        &self,
        ctx: &CallContext,
        include: &[String],
        exclude: &[String],
        bounds: Option<GeoBounds>,
        page: Page,
    ) -> Result<Vec<LandmarkItem>>;
    async fn get_landmarks_by_tag(
        &self,
        ctx: &CallContext,
        tag_id: &str,
        bounds: Option<GeoBounds>,
        page: Page,
    ) -> Result<Vec<LandmarkItem>>;
    async fn get_similar_landmarks(
        &self,
        ctx: &CallContext,
        ids: &[String],
        page: Page,
    ) -> Result<Vec<String>>;
    async fn get_activity(
        &self,
        ctx: &CallContext,
        activity: &str,
        include: &[String],
        exclude: &[String],
        bounds: Option<GeoBounds>,
        page: Page,
    ) -> Result<Vec<LandmarkItem>>;

    // users and friends

    async fn add_user(&self, ctx: &CallContext, user_id: &str) -> Result<()>;
    async fn add_friend(&self, ctx: &CallContext, sender: &str, receiver: &str) -> Result<()>;
    async fn delete_friend(&self, ctx: &CallContext, sender: &str, receiver: &str) -> Result<()>;
    async fn is_friend(&self, ctx: &CallContext, user1: &str, user2: &str) -> Result<bool>;
    async fn get_friends(&self, ctx: &CallContext, user_id: &str) -> Result<Vec<String>>;
    async fn count_friends(&self, ctx: &CallContext, user_id: &str) -> Result<i64>;

    // tags

    async fn create_tag(&self, ctx: &CallContext, id: &str) -> Result<()>;
    async fn delete_tag(&self, ctx: &CallContext, id: &str) -> Result<()>;
    async fn connect_tags(&self, ctx: &CallContext, id1: &str, id2: &str, score: f64)
        -> Result<()>;
    async fn disconnect_tags(&self, ctx: &CallContext, id1: &str, id2: &str) -> Result<()>;
    async fn get_connected_tags(
        &self,
        ctx: &CallContext,
        tag_id: &str,
    ) -> Result<Vec<TagWithScore>>;
    async fn set_user_tag(&self, ctx: &CallContext, user_id: &str, tag_id: &str) -> Result<()>;
    async fn delete_user_tag(&self, ctx: &CallContext, user_id: &str, tag_id: &str)
        -> Result<()>;
    /// Replaces the user's whole tag set.
    async fn change_user_tags(
        &self,
        ctx: &CallContext,
        user_id: &str,
        tag_ids: &[String],
    ) -> Result<()>;
    async fn add_landmark_tag(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        tag_id: &str,
        score: Option<f64>,
    ) -> Result<()>;
    async fn remove_landmark_tag(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        tag_id: &str,
    ) -> Result<()>;
    async fn get_landmark_tags(&self, ctx: &CallContext, landmark_id: &str)
        -> Result<Vec<String>>;
    async fn get_landmark_tags_with_score(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
    ) -> Result<Vec<TagWithScore>>;
    async fn get_user_tags(&self, ctx: &CallContext, user_id: &str) -> Result<Vec<String>>;
    async fn count_reviews(&self, ctx: &CallContext, user_id: &str) -> Result<i64>;

    // comments and reviews

    async fn create_comment(
        &self,
        ctx: &CallContext,
        parent_id: &str,
        author_id: &str,
        text: &str,
        attachments: &[String],
        rating: i32,
    ) -> Result<()>;
    async fn edit_comment(
        &self,
        ctx: &CallContext,
        user_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<()>;
    /// `user_id` is the acting user; the backend decides whether it may delete.
    async fn delete_comment(&self, ctx: &CallContext, user_id: &str, comment_id: &str)
        -> Result<()>;
    async fn get_comments(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        page: Page,
    ) -> Result<Vec<Comment>>;
    async fn get_profile_comments(
        &self,
        ctx: &CallContext,
        user_id: &str,
        page: Page,
    ) -> Result<Vec<Comment>>;
    async fn get_review(&self, ctx: &CallContext, landmark_id: &str, user_id: &str)
        -> Result<Comment>;
    async fn has_reviewed(&self, ctx: &CallContext, landmark_id: &str, user_id: &str)
        -> Result<bool>;
}

/// Operations served by the feed backend.
#[async_trait]
pub trait FeedOperations: Send + Sync {
    /// Next page of landmark ids personalised for `user_id`.
    async fn get_feed(
        &self,
        ctx: &CallContext,
        user_id: &str,
        near: Option<Coordinates>,
        amount: i32,
    ) -> Result<Vec<String>>;
    async fn reset_feed(&self, ctx: &CallContext, user_id: &str) -> Result<()>;
}
