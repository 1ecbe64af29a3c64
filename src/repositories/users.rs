use crate::common::context::Context;
use crate::entities::friendships::FriendshipStatus;
use crate::entities::users::User;

const TABLE_NAME: &str = "users";
const READ_FIELDS: &str = "friends.id, friends.full_name, friends.phone_number";

const FRIEND_PROFILE_QUERY: &str = const_str::concat!(
    "SELECT ",
    READ_FIELDS,
    " FROM ",
    TABLE_NAME,
    " friends INNER JOIN friendships ON friendships.friend_user_id = friends.id ",
    "WHERE friendships.user_id = ? AND friendships.friend_user_id = ? ",
    "AND friendships.status = ?"
);

/// Fetches the target's profile, scoped to an accepted friendship edge
/// from the caller. Absence of the edge and absence of the user are
/// indistinguishable here: both return `None`.
pub async fn fetch_friend_profile<C: Context>(
    ctx: &C,
    user_id: i64,
    friend_user_id: i64,
) -> sqlx::Result<Option<User>> {
    sqlx::query_as(FRIEND_PROFILE_QUERY)
        .bind(user_id)
        .bind(friend_user_id)
        .bind(FriendshipStatus::Accepted.as_str())
        .fetch_optional(ctx.db())
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_lookup_is_scoped_to_the_caller_target_edge() {
        assert!(FRIEND_PROFILE_QUERY
            .contains("WHERE friendships.user_id = ? AND friendships.friend_user_id = ?"));
        assert!(FRIEND_PROFILE_QUERY.contains("INNER JOIN friendships"));
    }

    #[test]
    fn profile_lookup_requires_the_edge_status_predicate() {
        // A pending or declined edge must not match, so the lookup
        // filters on status and the only status ever bound is accepted.
        assert!(FRIEND_PROFILE_QUERY.ends_with("AND friendships.status = ?"));
    }
}
