//! Connect backend API surface and the client-side stores.
//!
//! The backend is the sole source of truth; everything here is either the
//! typed REST contract ([`ConnectApi`]) or local persisted state the screens
//! consult around it ([`session::SessionStore`], [`avatar::AvatarCache`]).
//! Screens depend on the traits only, so tests run against mocks (enable the
//! `mock` feature from a dev-dependency).

pub mod avatar;
pub mod http;
pub mod session;
pub mod user;

use async_trait::async_trait;

use connect_core::error::ClientResult;
use connect_core::UserId;

use user::{AvatarUpload, BioTagUpdate, DirectoryUser, FollowOutcome, UploadedAvatar, UserProfile};

/// The backend REST contract, one method per endpoint.
///
/// All requests are bearer-token authenticated with whatever the session
/// store currently holds.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait ConnectApi: Send + Sync {
    /// `GET /users/{username}`
    async fn fetch_profile(&self, username: &str) -> ClientResult<UserProfile>;

    /// `GET /all-users`
    async fn all_users(&self) -> ClientResult<Vec<DirectoryUser>>;

    /// `POST /users/follow`
    async fn follow(&self, user_id: UserId) -> ClientResult<FollowOutcome>;

    /// `POST /users/unfollow`
    async fn unfollow(&self, user_id: UserId) -> ClientResult<FollowOutcome>;

    /// `POST /users/uploadProfilePicture` (multipart)
    async fn upload_avatar(&self, upload: AvatarUpload) -> ClientResult<UploadedAvatar>;

    /// `PUT /users/{username}/update-biotag`
    async fn update_bio_tags(&self, username: &str, update: BioTagUpdate) -> ClientResult<()>;

    /// `GET /users/searchtag/{tag}`
    async fn search_by_tag(&self, tag: &str) -> ClientResult<Vec<DirectoryUser>>;
}
