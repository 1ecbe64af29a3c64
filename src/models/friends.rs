use crate::common::error::AppError;
use crate::entities::users::User as UserEntity;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetFriendArgs {
    pub friend_user_id: i64,
}

#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendProfile {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
    pub total_friend_count: i64,
    pub mutual_friend_count: i64,
}

impl FriendProfile {
    /// Fan-in of the three profile queries. No profile row means the
    /// caller has no accepted edge to the target (or the target does
    /// not exist); the counts are discarded in that case. A missing
    /// aggregate defaults to 0.
    pub fn from_query_results(
        friend: Option<UserEntity>,
        total_friend_count: Option<i64>,
        mutual_friend_count: Option<i64>,
    ) -> Result<Self, AppError> {
        let friend = friend.ok_or(AppError::FriendsNotFound)?;
        Ok(Self {
            id: friend.id,
            full_name: friend.full_name,
            phone_number: friend.phone_number,
            total_friend_count: total_friend_count.unwrap_or(0),
            mutual_friend_count: mutual_friend_count.unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend_row() -> UserEntity {
        UserEntity {
            id: 2,
            full_name: "Jane Roe".to_owned(),
            phone_number: "+15550002".to_owned(),
        }
    }

    #[test]
    fn missing_profile_row_is_not_found_and_counts_are_discarded() {
        // The profile lookup only matches accepted edges, so an edge
        // that is still pending produces no row here even when the
        // count queries come back nonzero.
        let result = FriendProfile::from_query_results(None, Some(3), Some(1));
        assert_eq!(result.unwrap_err(), AppError::FriendsNotFound);

        let no_data = FriendProfile::from_query_results(None, None, None);
        assert_eq!(no_data.unwrap_err(), AppError::FriendsNotFound);
    }

    #[test]
    fn counts_are_attached_to_the_profile() {
        let profile = FriendProfile::from_query_results(Some(friend_row()), Some(3), Some(0))
            .expect("profile row present");
        assert_eq!(profile.id, 2);
        assert_eq!(profile.total_friend_count, 3);
        assert_eq!(profile.mutual_friend_count, 0);
    }

    #[test]
    fn missing_aggregates_default_to_zero() {
        let profile = FriendProfile::from_query_results(Some(friend_row()), None, None)
            .expect("profile row present");
        assert_eq!(profile.total_friend_count, 0);
        assert_eq!(profile.mutual_friend_count, 0);
    }

    #[test]
    fn response_uses_camel_case_field_names() {
        let profile = FriendProfile {
            id: 2,
            full_name: "Jane Roe".to_owned(),
            phone_number: "+15550002".to_owned(),
            total_friend_count: 3,
            mutual_friend_count: 1,
        };
        let value = serde_json::to_value(&profile).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": 2,
                "fullName": "Jane Roe",
                "phoneNumber": "+15550002",
                "totalFriendCount": 3,
                "mutualFriendCount": 1,
            })
        );
    }

    #[test]
    fn request_uses_camel_case_field_names() {
        let args: GetFriendArgs = serde_json::from_str(r#"{"friendUserId": 2}"#).unwrap();
        assert_eq!(args.friend_user_id, 2);
    }
}
