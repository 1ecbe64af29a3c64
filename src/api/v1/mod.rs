pub mod friends;

use crate::common::state::AppState;
use axum::Router;
use axum::routing::post;

pub fn router() -> Router<AppState> {
    Router::new().route("/friends/profile", post(friends::get_by_id))
}
