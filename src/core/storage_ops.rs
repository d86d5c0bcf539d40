use crate::core::gateway::Gateway;
use crate::core::mapping::{map_all, narrow, parse_identifiers};
use crate::domain::context::CallContext;
use crate::domain::model::{
    Comment, Coordinates, GeoBounds, LandmarkItem, LandmarkPreview, Page, TagWithScore,
};
use crate::domain::ports::StorageOperations;
use crate::rpc::storage::{self, path};
use crate::rpc::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
impl<T: Transport> StorageOperations for Gateway<T> {
    async fn get_landmark(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        user_id: &str,
    ) -> Result<LandmarkPreview> {
        let req = storage::GetLandmarkRequest {
            landmark_id: landmark_id.to_string(),
            user_id: user_id.to_string(),
        };
        let res: storage::GetLandmarkResponse =
            self.call_storage(ctx, path::GET_LANDMARK, req).await?;
        Ok(res.into())
    }

    async fn add_landmark(&self, ctx: &CallContext, id: &str, score: Option<f64>) -> Result<()> {
        let req = storage::AddLandmarkRequest {
            id: id.to_string(),
            score: score.map(narrow),
        };
        let _: storage::Empty = self.call_storage(ctx, path::ADD_LANDMARK, req).await?;
        Ok(())
    }

    async fn delete_landmark(&self, ctx: &CallContext, id: &str) -> Result<()> {
        let req = storage::DeleteLandmarkRequest { id: id.to_string() };
        let _: storage::Empty = self.call_storage(ctx, path::DELETE_LANDMARK, req).await?;
        Ok(())
    }

    async fn set_landmark_score(&self, ctx: &CallContext, id: &str, score: f64) -> Result<()> {
        let req = storage::SetLandmarkScoreRequest {
            id: id.to_string(),
            score: narrow(score),
        };
        let _: storage::Empty = self.call_storage(ctx, path::SET_LANDMARK_SCORE, req).await?;
        Ok(())
    }

    async fn set_landmark_coordinates(
        &self,
        ctx: &CallContext,
        id: &str,
        coordinates: Coordinates,
    ) -> Result<()> {
        let req = storage::SetLandmarkCoordinatesRequest {
            id: id.to_string(),
            coordinates: Some(coordinates.into()),
        };
        let _: storage::Empty = self
            .call_storage(ctx, path::SET_LANDMARK_COORDINATES, req)
            .await?;
        Ok(())
    }

    async fn set_landmark_name(&self, ctx: &CallContext, id: &str, name: &str) -> Result<()> {
        let req = storage::SetLandmarkNameRequest {
            id: id.to_string(),
            name: name.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::SET_LANDMARK_NAME, req).await?;
        Ok(())
    }

    async fn like_landmark(
        &self,
        ctx: &CallContext,
        user_id: &str,
        landmark_id: &str,
    ) -> Result<()> {
        let req = storage::LikeLandmarkRequest {
            user_id: user_id.to_string(),
            landmark_id: landmark_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::LIKE_LANDMARK, req).await?;
        Ok(())
    }

    async fn dislike_landmark(
        &self,
        ctx: &CallContext,
        user_id: &str,
        landmark_id: &str,
    ) -> Result<()> {
        let req = storage::DislikeLandmarkRequest {
            user_id: user_id.to_string(),
            landmark_id: landmark_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::DISLIKE_LANDMARK, req).await?;
        Ok(())
    }

    async fn view_landmark(
        &self,
        ctx: &CallContext,
        user_id: &str,
        landmark_id: &str,
    ) -> Result<()> {
        let req = storage::ViewLandmarkRequest {
            user_id: user_id.to_string(),
            landmark_id: landmark_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::VIEW_LANDMARK, req).await?;
        Ok(())
    }

    async fn not_interested(
        &self,
        ctx: &CallContext,
        user_id: &str,
        landmark_id: &str,
    ) -> Result<()> {
        let req = storage::NotInterestedRequest {
            user_id: user_id.to_string(),
            landmark_id: landmark_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::NOT_INTERESTED, req).await?;
        Ok(())
    }

    async fn get_likes(&self, ctx: &CallContext, landmark_id: &str) -> Result<i64> {
        let req = storage::GetLikesRequest {
            landmark_id: landmark_id.to_string(),
        };
        let res: storage::GetLikesResponse = self.call_storage(ctx, path::GET_LIKES, req).await?;
        Ok(res.likes)
    }

    async fn get_likes_amount(&self, ctx: &CallContext, user_id: &str) -> Result<i64> {
        let req = storage::GetLikesAmountRequest {
            user_id: user_id.to_string(),
        };
        let res: storage::GetLikesAmountResponse =
            self.call_storage(ctx, path::GET_LIKES_AMOUNT, req).await?;
        Ok(res.count)
    }

    async fn is_liked(&self, ctx: &CallContext, landmark_id: &str, user_id: &str) -> Result<bool> {
        let preview = self.get_landmark(ctx, landmark_id, user_id).await?;
        Ok(preview.liked)
    }

    async fn get_favourite_landmarks(
        &self,
        ctx: &CallContext,
        user_id: &str,
        page: Page,
    ) -> Result<Vec<Uuid>> {
        let req = storage::GetFavouriteLandmarksRequest {
            user_id: user_id.to_string(),
            limit: page.limit,
            offset: page.offset,
        };
        let res: storage::GetFavouriteLandmarksResponse = self
            .call_storage(ctx, path::GET_FAVOURITE_LANDMARKS, req)
            .await?;
        parse_identifiers(res.ids)
    }

    async fn recommend_landmarks(
        &self,
        ctx: &CallContext,
        user_id: &str,
        near: Option<Coordinates>,
        amount: i32,
    ) -> Result<Vec<String>> {
        let req = storage::RecommendLandmarksRequest {
            user_id: user_id.to_string(),
            amount: i64::from(amount),
            location: near.map(Into::into),
        };
        let res: storage::RecommendLandmarksResponse = self
            .call_storage(ctx, path::RECOMMEND_LANDMARKS, req)
            .await?;
        Ok(res.ids)
    }

    async fn get_random_feed(&self, ctx: &CallContext, amount: i32) -> Result<Vec<String>> {
        let req = storage::GetRandomFeedRequest {
            count: i64::from(amount),
        };
        let res: storage::GetRandomFeedResponse =
            self.call_storage(ctx, path::GET_RANDOM_FEED, req).await?;
        Ok(res.ids)
    }

    async fn get_landmarks_filtered(
        &self,
        ctx: &CallContext,
        include: &[String],
        exclude: &[String],
        bounds: Option<GeoBounds>,
        page: Page,
    ) -> Result<Vec<LandmarkItem>> {
        let req = storage::GetLandmarksFilteredRequest {
            include: include.to_vec(),
            exclude: exclude.to_vec(),
            offset: page.offset,
            limit: page.limit,
            bounds: bounds.map(Into::into),
        };
        let res: storage::GetLandmarksFilteredResponse = self
            .call_storage(ctx, path::GET_LANDMARKS_FILTERED, req)
            .await?;
        Ok(map_all(res.landmarks))
    }

    async fn get_landmarks_by_tag(
        &self,
        ctx: &CallContext,
        tag_id: &str,
        bounds: Option<GeoBounds>,
        page: Page,
    ) -> Result<Vec<LandmarkItem>> {
        let req = storage::GetLandmarksByTagRequest {
            tag_id: tag_id.to_string(),
            limit: page.limit,
            offset: page.offset,
            bounds: bounds.map(Into::into),
        };
        let res: storage::GetLandmarksByTagResponse = self
            .call_storage(ctx, path::GET_LANDMARKS_BY_TAG, req)
            .await?;
        Ok(map_all(res.landmarks))
    }

    async fn get_similar_landmarks(
        &self,
        ctx: &CallContext,
        ids: &[String],
        page: Page,
    ) -> Result<Vec<String>> {
        let req = storage::GetSimilarLandmarksRequest {
            ids: ids.to_vec(),
            limit: page.limit,
            offset: page.offset,
        };
        let res: storage::GetSimilarLandmarksResponse = self
            .call_storage(ctx, path::GET_SIMILAR_LANDMARKS, req)
            .await?;
        Ok(res.ids)
    }

    async fn get_activity(
        &self,
        ctx: &CallContext,
        activity: &str,
        include: &[String],
        exclude: &[String],
        bounds: Option<GeoBounds>,
        page: Page,
    ) -> Result<Vec<LandmarkItem>> {
        let req = storage::GetActivityRequest {
            activity: activity.to_string(),
            include: include.to_vec(),
            exclude: exclude.to_vec(),
            offset: page.offset,
            limit: page.limit,
            bounds: bounds.map(Into::into),
        };
        let res: storage::GetActivityResponse =
            self.call_storage(ctx, path::GET_ACTIVITY, req).await?;
        Ok(map_all(res.landmarks))
    }

    async fn add_user(&self, ctx: &CallContext, user_id: &str) -> Result<()> {
        let req = storage::AddUserRequest {
            user_id: user_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::ADD_USER, req).await?;
        Ok(())
    }

    async fn add_friend(&self, ctx: &CallContext, sender: &str, receiver: &str) -> Result<()> {
        let req = storage::AddFriendRequest {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::ADD_FRIEND, req).await?;
        Ok(())
    }

    async fn delete_friend(&self, ctx: &CallContext, sender: &str, receiver: &str) -> Result<()> {
        let req = storage::DeleteFriendRequest {
            sender: sender.to_string(),
            receiver: receiver.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::DELETE_FRIEND, req).await?;
        Ok(())
    }

    async fn is_friend(&self, ctx: &CallContext, user1: &str, user2: &str) -> Result<bool> {
        let req = storage::IsFriendRequest {
            user1: user1.to_string(),
            user2: user2.to_string(),
        };
        let res: storage::IsFriendResponse = self.call_storage(ctx, path::IS_FRIEND, req).await?;
        Ok(res.is_friend)
    }

    async fn get_friends(&self, ctx: &CallContext, user_id: &str) -> Result<Vec<String>> {
        let req = storage::GetFriendsRequest {
            user_id: user_id.to_string(),
        };
        let res: storage::GetFriendsResponse =
            self.call_storage(ctx, path::GET_FRIENDS, req).await?;
        Ok(res.ids)
    }

    async fn count_friends(&self, ctx: &CallContext, user_id: &str) -> Result<i64> {
        let req = storage::CountFriendsRequest {
            user_id: user_id.to_string(),
        };
        let res: storage::CountFriendsResponse =
            self.call_storage(ctx, path::COUNT_FRIENDS, req).await?;
        Ok(res.count)
    }

    async fn create_tag(&self, ctx: &CallContext, id: &str) -> Result<()> {
        let req = storage::CreateTagRequest { id: id.to_string() };
        let _: storage::Empty = self.call_storage(ctx, path::CREATE_TAG, req).await?;
        Ok(())
    }

    async fn delete_tag(&self, ctx: &CallContext, id: &str) -> Result<()> {
        let req = storage::DeleteTagRequest { id: id.to_string() };
        let _: storage::Empty = self.call_storage(ctx, path::DELETE_TAG, req).await?;
        Ok(())
    }

    async fn connect_tags(
        &self,
        ctx: &CallContext,
        id1: &str,
        id2: &str,
        score: f64,
    ) -> Result<()> {
        let req = storage::ConnectTagsRequest {
            id1: id1.to_string(),
            id2: id2.to_string(),
            score: narrow(score),
        };
        let _: storage::Empty = self.call_storage(ctx, path::CONNECT_TAGS, req).await?;
        Ok(())
    }

    async fn disconnect_tags(&self, ctx: &CallContext, id1: &str, id2: &str) -> Result<()> {
        let req = storage::DisconnectTagsRequest {
            id1: id1.to_string(),
            id2: id2.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::DISCONNECT_TAGS, req).await?;
        Ok(())
    }

    async fn get_connected_tags(
        &self,
        ctx: &CallContext,
        tag_id: &str,
    ) -> Result<Vec<TagWithScore>> {
        let req = storage::GetConnectedTagsRequest {
            tag_id: tag_id.to_string(),
        };
        let res: storage::GetConnectedTagsResponse = self
            .call_storage(ctx, path::GET_CONNECTED_TAGS, req)
            .await?;
        Ok(map_all(res.tags))
    }

    async fn set_user_tag(&self, ctx: &CallContext, user_id: &str, tag_id: &str) -> Result<()> {
        let req = storage::SetUserTagRequest {
            user_id: user_id.to_string(),
            tag_id: tag_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::SET_USER_TAG, req).await?;
        Ok(())
    }

    async fn delete_user_tag(
        &self,
        ctx: &CallContext,
        user_id: &str,
        tag_id: &str,
    ) -> Result<()> {
        let req = storage::DeleteUserTagRequest {
            user_id: user_id.to_string(),
            tag_id: tag_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::DELETE_USER_TAG, req).await?;
        Ok(())
    }

    async fn change_user_tags(
        &self,
        ctx: &CallContext,
        user_id: &str,
        tag_ids: &[String],
    ) -> Result<()> {
        let req = storage::ChangeUserTagsRequest {
            user_id: user_id.to_string(),
            tag_ids: tag_ids.to_vec(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::CHANGE_USER_TAGS, req).await?;
        Ok(())
    }

    async fn add_landmark_tag(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        tag_id: &str,
        score: Option<f64>,
    ) -> Result<()> {
        let req = storage::AddLandmarkTagRequest {
            landmark_id: landmark_id.to_string(),
            tag_id: tag_id.to_string(),
            score: score.map(narrow),
        };
        let _: storage::Empty = self.call_storage(ctx, path::ADD_LANDMARK_TAG, req).await?;
        Ok(())
    }

    async fn remove_landmark_tag(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        tag_id: &str,
    ) -> Result<()> {
        let req = storage::RemoveLandmarkTagRequest {
            landmark_id: landmark_id.to_string(),
            tag_id: tag_id.to_string(),
        };
        let _: storage::Empty = self
            .call_storage(ctx, path::REMOVE_LANDMARK_TAG, req)
            .await?;
        Ok(())
    }

    async fn get_landmark_tags(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
    ) -> Result<Vec<String>> {
        let req = storage::GetLandmarkTagsRequest {
            landmark_id: landmark_id.to_string(),
        };
        let res: storage::GetLandmarkTagsResponse =
            self.call_storage(ctx, path::GET_LANDMARK_TAGS, req).await?;
        Ok(res.ids)
    }

    async fn get_landmark_tags_with_score(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
    ) -> Result<Vec<TagWithScore>> {
        let req = storage::GetLandmarkTagsWithScoreRequest {
            landmark_id: landmark_id.to_string(),
        };
        let res: storage::GetLandmarkTagsWithScoreResponse = self
            .call_storage(ctx, path::GET_LANDMARK_TAGS_WITH_SCORE, req)
            .await?;
        Ok(map_all(res.tags))
    }

    async fn get_user_tags(&self, ctx: &CallContext, user_id: &str) -> Result<Vec<String>> {
        let req = storage::GetUserTagsRequest {
            user_id: user_id.to_string(),
        };
        let res: storage::GetUserTagsResponse =
            self.call_storage(ctx, path::GET_USER_TAGS, req).await?;
        Ok(res.ids)
    }

    async fn count_reviews(&self, ctx: &CallContext, user_id: &str) -> Result<i64> {
        let req = storage::CountReviewsRequest {
            user_id: user_id.to_string(),
        };
        let res: storage::CountReviewsResponse =
            self.call_storage(ctx, path::COUNT_REVIEWS, req).await?;
        Ok(res.count)
    }

    async fn create_comment(
        &self,
        ctx: &CallContext,
        parent_id: &str,
        author_id: &str,
        text: &str,
        attachments: &[String],
        rating: i32,
    ) -> Result<()> {
        let req = storage::CreateCommentRequest {
            parent_id: parent_id.to_string(),
            author_id: author_id.to_string(),
            text: text.to_string(),
            attachments: attachments.to_vec(),
            rating,
        };
        let _: storage::Empty = self.call_storage(ctx, path::CREATE_COMMENT, req).await?;
        Ok(())
    }

    async fn edit_comment(
        &self,
        ctx: &CallContext,
        user_id: &str,
        comment_id: &str,
        text: &str,
    ) -> Result<()> {
        let req = storage::EditCommentRequest {
            user_id: user_id.to_string(),
            comment_id: comment_id.to_string(),
            text: text.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::EDIT_COMMENT, req).await?;
        Ok(())
    }

    async fn delete_comment(
        &self,
        ctx: &CallContext,
        user_id: &str,
        comment_id: &str,
    ) -> Result<()> {
        let req = storage::DeleteCommentRequest {
            user_id: user_id.to_string(),
            comment_id: comment_id.to_string(),
        };
        let _: storage::Empty = self.call_storage(ctx, path::DELETE_COMMENT, req).await?;
        Ok(())
    }

    async fn get_comments(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        page: Page,
    ) -> Result<Vec<Comment>> {
        let req = storage::GetCommentsRequest {
            landmark_id: landmark_id.to_string(),
            limit: page.limit,
            offset: page.offset,
        };
        let res: storage::GetCommentsResponse =
            self.call_storage(ctx, path::GET_COMMENTS, req).await?;
        Ok(map_all(res.comments))
    }

    async fn get_profile_comments(
        &self,
        ctx: &CallContext,
        user_id: &str,
        page: Page,
    ) -> Result<Vec<Comment>> {
        let req = storage::GetProfileCommentsRequest {
            user_id: user_id.to_string(),
            limit: page.limit,
            offset: page.offset,
        };
        let res: storage::GetProfileCommentsResponse = self
            .call_storage(ctx, path::GET_PROFILE_COMMENTS, req)
            .await?;
        Ok(map_all(res.comments))
    }

    async fn get_review(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        user_id: &str,
    ) -> Result<Comment> {
        let req = storage::GetReviewRequest {
            landmark_id: landmark_id.to_string(),
            user_id: user_id.to_string(),
        };
        let res: storage::Comment = self.call_storage(ctx, path::GET_REVIEW, req).await?;
        Ok(res.into())
    }

    async fn has_reviewed(
        &self,
        ctx: &CallContext,
        landmark_id: &str,
        user_id: &str,
    ) -> Result<bool> {
        let req = storage::HasReviewedRequest {
            landmark_id: landmark_id.to_string(),
            user_id: user_id.to_string(),
        };
        let res: storage::HasReviewedResponse =
            self.call_storage(ctx, path::HAS_REVIEWED, req).await?;
        Ok(res.reviewed)
    }
}
