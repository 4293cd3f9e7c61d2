//! Signed-in user profile.

use serde::{Deserialize, Serialize};

/// Profile of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique user identifier.
    pub id: u64,
    /// Display nickname.
    pub nickname: String,
    /// Account email address.
    pub email: String,
    /// Avatar image URL, once one has been uploaded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl UserProfile {
    /// Creates a new profile without an avatar.
    pub fn new(id: u64, nickname: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            nickname: nickname.into(),
            email: email.into(),
            image_url: None,
        }
    }

    /// Sets the avatar image URL.
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_builder() {
        let profile = UserProfile::new(7, "dana", "dana@example.com")
            .with_image_url("https://cdn.example.com/avatars/7.png");

        assert_eq!(profile.nickname, "dana");
        assert_eq!(
            profile.image_url.as_deref(),
            Some("https://cdn.example.com/avatars/7.png")
        );
    }

    #[test]
    fn test_profile_omits_absent_image() {
        let json = serde_json::to_value(UserProfile::new(1, "a", "a@example.com")).unwrap();
        assert!(json.get("image_url").is_none());
    }
}
