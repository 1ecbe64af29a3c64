use crate::common::context::Context;
use crate::common::error::ServiceResult;
use crate::models::friends::FriendProfile;
use crate::repositories::{friendships, users};

/// Fetches the target's profile plus their total friend count and the
/// mutual friend count with the caller. The three reads are
/// independent and run concurrently; the first error aborts the join.
pub async fn fetch_profile<C: Context>(
    ctx: &C,
    session_user_id: i64,
    friend_user_id: i64,
) -> ServiceResult<FriendProfile> {
    let (friend, total_friend_count, mutual_friend_count) = tokio::try_join!(
        users::fetch_friend_profile(ctx, session_user_id, friend_user_id),
        friendships::count_accepted(ctx, friend_user_id),
        friendships::count_mutual(ctx, session_user_id, friend_user_id),
    )?;
    FriendProfile::from_query_results(friend, total_friend_count, mutual_friend_count)
}
