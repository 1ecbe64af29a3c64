use crate::common::context::Context;
use crate::entities::friendships::FriendshipStatus;

const TABLE_NAME: &str = "friendships";

const ACCEPTED_COUNT_QUERY: &str = const_str::concat!(
    "SELECT COUNT(friend_user_id) FROM ",
    TABLE_NAME,
    " WHERE user_id = ? AND status = ?"
);

const MUTUAL_COUNT_QUERY: &str = const_str::concat!(
    "SELECT COUNT(DISTINCT f1.friend_user_id) ",
    "FROM ",
    TABLE_NAME,
    " f1 INNER JOIN ",
    TABLE_NAME,
    " f2 ON f1.friend_user_id = f2.friend_user_id ",
    "AND f1.user_id = ? AND f2.user_id = ? ",
    "WHERE f1.status = ? AND f2.status = ?"
);

/// Number of accepted outgoing edges from `user_id`.
pub async fn count_accepted<C: Context>(ctx: &C, user_id: i64) -> sqlx::Result<Option<i64>> {
    sqlx::query_scalar(ACCEPTED_COUNT_QUERY)
        .bind(user_id)
        .bind(FriendshipStatus::Accepted.as_str())
        .fetch_optional(ctx.db())
        .await
}

/// Number of distinct users with an accepted edge from both `user_id`
/// and `friend_user_id`, computed with a self-join on the shared
/// friend id.
pub async fn count_mutual<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_user_id: i64,
) -> sqlx::Result<Option<i64>> {
    sqlx::query_scalar(MUTUAL_COUNT_QUERY)
        .bind(user_id)
        .bind(friend_user_id)
        .bind(FriendshipStatus::Accepted.as_str())
        .bind(FriendshipStatus::Accepted.as_str())
        .fetch_optional(ctx.db())
        .await
}
