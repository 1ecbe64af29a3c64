#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FriendshipStatus {
    Pending,
    Accepted,
    Declined,
}

impl FriendshipStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FriendshipStatus::Pending => "pending",
            FriendshipStatus::Accepted => "accepted",
            FriendshipStatus::Declined => "declined",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_string_mapping() {
        assert_eq!(FriendshipStatus::Pending.as_str(), "pending");
        assert_eq!(FriendshipStatus::Accepted.as_str(), "accepted");
        assert_eq!(FriendshipStatus::Declined.as_str(), "declined");
    }
}
