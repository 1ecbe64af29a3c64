pub mod friendships;
pub mod sessions;
pub mod users;
