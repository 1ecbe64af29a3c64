use crate::api::RequestContext;
use crate::common::error::ServiceResponse;
use crate::models::friends::{FriendProfile, GetFriendArgs};
use crate::usecases::friends;
use axum::Json;

pub async fn get_by_id(
    ctx: RequestContext,
    Json(args): Json<GetFriendArgs>,
) -> ServiceResponse<FriendProfile> {
    let session_user_id = ctx.session.user_id;
    let profile = friends::fetch_profile(&ctx, session_user_id, args.friend_user_id).await?;
    Ok(Json(profile))
}
