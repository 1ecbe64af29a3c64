use crate::common::context::Context;
use crate::common::error::{AppError, ServiceResult, unexpected};
use crate::models::sessions::SessionIdentity;
use crate::repositories::sessions;
use uuid::Uuid;

pub async fn authenticate<C: Context>(ctx: &C, token: &str) -> ServiceResult<SessionIdentity> {
    // Tokens are uuids; reject malformed ones without a round trip.
    if Uuid::parse_str(token).is_err() {
        return Err(AppError::Unauthorized);
    }
    match sessions::fetch_one(ctx, token).await {
        Ok(session) => Ok(SessionIdentity::from(session)),
        Err(sqlx::Error::RowNotFound) => Err(AppError::Unauthorized),
        Err(e) => unexpected(e),
    }
}
