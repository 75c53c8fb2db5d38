use connect_core::UserId;

/// Full profile as returned by `GET /users/{username}`.
///
/// The backend omits fields it has no value for, so everything defaults.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    pub username: String,
    pub bio: Option<String>,
    pub tags: Option<String>,
    pub profile_image: Option<String>,
    pub posts_count: u64,
    pub followers_count: u64,
    pub following_count: u64,
    /// Ids of the users this profile follows.
    pub following: Vec<UserId>,
}

/// A user row from `GET /all-users` or `GET /users/searchtag/{tag}`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DirectoryUser {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub username: String,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub tags: Option<String>,
    pub followers_count: u64,
}

/// Response of the follow/unfollow endpoints.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FollowOutcome {
    pub updated_followers_count: u64,
}

/// Response of the avatar upload endpoint. `profile_image` missing from the
/// response is treated as a failed upload by the profile screen.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UploadedAvatar {
    pub profile_image: Option<String>,
}

/// Body of `PUT /users/{username}/update-biotag`.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct BioTagUpdate {
    pub bio: String,
    pub tags: String,
}

/// A file selected for avatar upload.
#[derive(Clone, Debug)]
pub struct AvatarUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}
