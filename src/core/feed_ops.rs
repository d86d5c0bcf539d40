use crate::core::gateway::Gateway;
use crate::domain::context::CallContext;
use crate::domain::model::Coordinates;
use crate::domain::ports::FeedOperations;
use crate::rpc::feed::{self, path};
use crate::rpc::Transport;
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
impl<T: Transport> FeedOperations for Gateway<T> {
    async fn get_feed(
        &self,
        ctx: &CallContext,
        user_id: &str,
        near: Option<Coordinates>,
        amount: i32,
    ) -> Result<Vec<String>> {
        let req = feed::GetFeedRequest {
            user_id: user_id.to_string(),
            location: near.map(Into::into),
            amount,
        };
        let res: feed::GetFeedResponse = self.call_feed(ctx, path::GET_FEED, req).await?;
        Ok(res.landmark_ids)
    }

    async fn reset_feed(&self, ctx: &CallContext, user_id: &str) -> Result<()> {
        let req = feed::ResetFeedRequest {
            user_id: user_id.to_string(),
        };
        let _: feed::ResetFeedResponse = self.call_feed(ctx, path::RESET_FEED, req).await?;
        Ok(())
    }
}
