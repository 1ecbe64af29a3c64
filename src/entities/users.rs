use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub struct User {
    pub id: i64,
    pub full_name: String,
    pub phone_number: String,
}
