pub mod friends;
pub mod sessions;
