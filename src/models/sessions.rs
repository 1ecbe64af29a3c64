use crate::entities::sessions::Session as SessionEntity;

#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_id: i64,
    pub token: String,
}

impl From<SessionEntity> for SessionIdentity {
    fn from(value: SessionEntity) -> Self {
        Self {
            user_id: value.user_id,
            token: value.token,
        }
    }
}
