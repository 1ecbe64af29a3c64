use crate::common::context::Context;
use crate::entities::sessions::Session;

const TABLE_NAME: &str = "user_sessions";
const READ_FIELDS: &str = "token, user_id, expires_at";

pub async fn fetch_one<C: Context>(ctx: &C, token: &str) -> sqlx::Result<Session> {
    const QUERY: &str = const_str::concat!(
        "SELECT ",
        READ_FIELDS,
        " FROM ",
        TABLE_NAME,
        " WHERE token = ? AND expires_at > CURRENT_TIMESTAMP"
    );
    sqlx::query_as(QUERY).bind(token).fetch_one(ctx.db()).await
}
