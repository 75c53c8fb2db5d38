use connect_api::session::SessionStore;
use connect_api::user::{AvatarUpload, BioTagUpdate, UploadedAvatar, UserProfile};
use connect_api::ConnectApi;
use connect_core::error::{ClientError, ClientResult};
use connect_core::tags;

use crate::notify::{Notice, Notify};

/// Fallback bio shown when the profile has none.
pub const DEFAULT_BIO: &str = "Adventurer and foodie with a passion for fitness. \
    Exploring the world one city at a time, sharing experiences through travel, \
    culinary delights, and workouts.";

/// Transient edit buffer, alive only while edit mode is active. Discarded
/// on cancel, committed to the profile and the backend on save.
#[derive(Clone, Debug, Default)]
pub struct ProfileDraft {
    pub bio: String,
    pub tags: String,
}

/// The logged-in user's own profile screen: bio/tag editing and avatar
/// upload.
pub struct ProfileScreen<A, S, N> {
    api: A,
    session: S,
    notifier: N,
    profile: Option<UserProfile>,
    draft: Option<ProfileDraft>,
    selected_file: Option<AvatarUpload>,
    loading: bool,
    error: Option<String>,
    edit_saved: bool,
}

impl<A, S, N> ProfileScreen<A, S, N>
where
    A: ConnectApi,
    S: SessionStore,
    N: Notify,
{
    pub fn new(api: A, session: S, notifier: N) -> Self {
        Self {
            api,
            session,
            notifier,
            profile: None,
            draft: None,
            selected_file: None,
            loading: true,
            error: None,
            edit_saved: false,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn draft_mut(&mut self) -> Option<&mut ProfileDraft> {
        self.draft.as_mut()
    }

    pub fn has_selected_file(&self) -> bool {
        self.selected_file.is_some()
    }

    /// True once an edit has been confirmed; callers reload and the flag
    /// resets.
    pub fn take_edit_saved(&mut self) -> bool {
        std::mem::take(&mut self.edit_saved)
    }

    /// Bio for display, falling back to the canned blurb.
    pub fn display_bio(&self) -> &str {
        self.profile
            .as_ref()
            .and_then(|profile| profile.bio.as_deref())
            .filter(|bio| !bio.is_empty())
            .unwrap_or(DEFAULT_BIO)
    }

    /// Fetch the profile for the stored identity. A missing identity or
    /// token is a local error; the backend is not contacted.
    pub async fn load(&mut self) {
        self.error = None;
        let result = self.try_load().await;
        if let Err(error) = result {
            tracing::warn!(%error, "failed to load profile");
            self.error = Some(match error {
                ClientError::NotLoggedIn | ClientError::NoToken => error.to_string(),
                _ => "Error fetching profile".to_string(),
            });
        }
        self.loading = false;
    }

    pub fn select_file(&mut self, file_name: impl Into<String>, bytes: Vec<u8>) {
        self.selected_file = Some(AvatarUpload {
            file_name: file_name.into(),
            bytes,
        });
    }

    /// Upload the selected avatar as multipart form data. On success the
    /// avatar reference is replaced and the selection cleared; on failure
    /// the previous avatar stays.
    pub async fn upload_avatar(&mut self) {
        let Some(upload) = self.selected_file.clone() else {
            self.notifier
                .notify(Notice::Error, &ClientError::NoFileSelected.to_string());
            return;
        };

        let result = self.api.upload_avatar(upload).await;
        match result {
            Ok(UploadedAvatar {
                profile_image: Some(image),
            }) => {
                if let Some(profile) = self.profile.as_mut() {
                    profile.profile_image = Some(image);
                }
                self.selected_file = None;
            }
            Ok(UploadedAvatar {
                profile_image: None,
            }) => {
                tracing::warn!("upload response missing the profile image path");
                self.error = Some("Error uploading profile picture".to_string());
            }
            Err(error) => {
                tracing::warn!(%error, "failed to upload avatar");
                self.error = Some("Error uploading profile picture".to_string());
            }
        }
    }

    /// Enter edit mode, seeding the draft from the loaded profile.
    pub fn begin_edit(&mut self) {
        let profile = self.profile.as_ref();
        self.draft = Some(ProfileDraft {
            bio: profile
                .and_then(|profile| profile.bio.clone())
                .unwrap_or_default(),
            tags: profile
                .and_then(|profile| profile.tags.clone())
                .unwrap_or_default(),
        });
    }

    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    /// Submit the draft: tags are normalized, both fields sent to the
    /// backend. On success edit mode ends and the normalized values apply
    /// locally; on failure edit mode is retained and local state untouched.
    pub async fn submit_edit(&mut self) {
        let Some(draft) = self.draft.clone() else {
            return;
        };

        let normalized = tags::normalize(&draft.tags);
        let result = self.try_submit(&draft.bio, &normalized).await;
        match result {
            Ok(()) => {
                self.draft = None;
                if let Some(profile) = self.profile.as_mut() {
                    profile.bio = Some(draft.bio);
                    profile.tags = Some(normalized);
                }
                self.edit_saved = true;
                self.notifier
                    .notify(Notice::Success, "Profile updated successfully!");
            }
            Err(error) => {
                tracing::warn!(%error, "failed to update profile");
                self.error = Some("Error updating profile".to_string());
            }
        }
    }

    async fn try_load(&mut self) -> ClientResult<()> {
        let username = self
            .session
            .current_username()
            .ok_or(ClientError::NotLoggedIn)?;
        if self.session.token().is_none() {
            return Err(ClientError::NoToken);
        }

        let profile = self.api.fetch_profile(&username).await?;
        self.profile = Some(profile);
        Ok(())
    }

    async fn try_submit(&self, bio: &str, tags: &str) -> ClientResult<()> {
        let username = self
            .session
            .current_username()
            .ok_or(ClientError::NotLoggedIn)?;
        self.api
            .update_bio_tags(
                &username,
                BioTagUpdate {
                    bio: bio.to_string(),
                    tags: tags.to_string(),
                },
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockNotify;

    use assert_matches::assert_matches;
    use connect_api::session::MockSessionStore;
    use connect_api::MockConnectApi;

    type TestProfile = ProfileScreen<MockConnectApi, MockSessionStore, MockNotify>;

    fn logged_in_session() -> MockSessionStore {
        let mut session = MockSessionStore::new();
        session
            .expect_current_username()
            .returning(|| Some("me".to_string()));
        session
            .expect_token()
            .returning(|| Some("t0k3n".to_string()));
        session
    }

    fn quiet_notifier() -> MockNotify {
        let mut notifier = MockNotify::new();
        notifier.expect_notify().returning(|_, _| ());
        notifier
    }

    fn my_profile() -> UserProfile {
        UserProfile {
            username: "me".to_string(),
            bio: Some("old bio".to_string()),
            tags: Some("travel".to_string()),
            profile_image: Some("https://cdn.example/me.jpg".to_string()),
            ..UserProfile::default()
        }
    }

    fn api_with_profile() -> MockConnectApi {
        let mut api = MockConnectApi::new();
        api.expect_fetch_profile()
            .returning(|_| Ok(my_profile()));
        api
    }

    #[tokio::test]
    async fn load_without_identity_is_a_local_error() {
        let mut session = MockSessionStore::new();
        session.expect_current_username().returning(|| None);

        let mut screen: TestProfile =
            ProfileScreen::new(MockConnectApi::new(), session, quiet_notifier());
        screen.load().await;

        assert_eq!(Some("User not logged in"), screen.error());
        assert!(!screen.is_loading());
        assert!(screen.profile().is_none());
    }

    #[tokio::test]
    async fn load_without_token_is_a_local_error() {
        let mut session = MockSessionStore::new();
        session
            .expect_current_username()
            .returning(|| Some("me".to_string()));
        session.expect_token().returning(|| None);

        let mut screen: TestProfile =
            ProfileScreen::new(MockConnectApi::new(), session, quiet_notifier());
        screen.load().await;

        assert_eq!(Some("No token found"), screen.error());
        assert!(screen.profile().is_none());
    }

    #[tokio::test]
    async fn load_fetches_the_stored_identity() {
        let mut screen =
            ProfileScreen::new(api_with_profile(), logged_in_session(), quiet_notifier());
        screen.load().await;

        assert_matches!(screen.profile(), Some(profile) if profile.username == "me");
        assert_eq!(None, screen.error());
        assert!(!screen.is_loading());
    }

    #[tokio::test]
    async fn load_failure_sets_the_inline_error() {
        let mut api = MockConnectApi::new();
        api.expect_fetch_profile().returning(|_| {
            Err(ClientError::Api {
                status: 500,
                message: "boom".to_string(),
            })
        });

        let mut screen = ProfileScreen::new(api, logged_in_session(), quiet_notifier());
        screen.load().await;

        assert_eq!(Some("Error fetching profile"), screen.error());
    }

    #[tokio::test]
    async fn upload_without_a_selection_never_calls_the_api() {
        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|notice, message| *notice == Notice::Error && message == "No file selected")
            .times(1)
            .returning(|_, _| ());

        let mut screen: TestProfile =
            ProfileScreen::new(MockConnectApi::new(), logged_in_session(), notifier);
        screen.upload_avatar().await;
    }

    #[tokio::test]
    async fn upload_success_replaces_the_avatar_and_clears_the_selection() {
        let mut api = api_with_profile();
        api.expect_upload_avatar()
            .withf(|upload| upload.file_name == "me.png")
            .times(1)
            .returning(|_| {
                Ok(UploadedAvatar {
                    profile_image: Some("https://cdn.example/new.png".to_string()),
                })
            });

        let mut screen = ProfileScreen::new(api, logged_in_session(), quiet_notifier());
        screen.load().await;
        screen.select_file("me.png", vec![0xff, 0xd8]);
        screen.upload_avatar().await;

        assert_eq!(
            Some("https://cdn.example/new.png".to_string()),
            screen.profile().unwrap().profile_image
        );
        assert!(!screen.has_selected_file());
    }

    #[tokio::test]
    async fn upload_response_without_a_path_is_an_error() {
        let mut api = api_with_profile();
        api.expect_upload_avatar().times(1).returning(|_| {
            Ok(UploadedAvatar {
                profile_image: None,
            })
        });

        let mut screen = ProfileScreen::new(api, logged_in_session(), quiet_notifier());
        screen.load().await;
        screen.select_file("me.png", vec![0xff]);
        screen.upload_avatar().await;

        assert_eq!(Some("Error uploading profile picture"), screen.error());
        assert_eq!(
            Some("https://cdn.example/me.jpg".to_string()),
            screen.profile().unwrap().profile_image
        );
        assert!(screen.has_selected_file());
    }

    #[tokio::test]
    async fn submit_edit_normalizes_tags_and_exits_edit_mode() {
        let mut api = api_with_profile();
        api.expect_update_bio_tags()
            .withf(|username, update| {
                username == "me" && update.bio == "new bio" && update.tags == "travel, running"
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|notice, message| {
                *notice == Notice::Success && message == "Profile updated successfully!"
            })
            .times(1)
            .returning(|_, _| ());

        let mut screen = ProfileScreen::new(api, logged_in_session(), notifier);
        screen.load().await;
        screen.begin_edit();
        {
            let draft = screen.draft_mut().unwrap();
            draft.bio = "new bio".to_string();
            draft.tags = " travel ,running".to_string();
        }
        screen.submit_edit().await;

        assert!(!screen.is_editing());
        assert!(screen.take_edit_saved());
        let profile = screen.profile().unwrap();
        assert_eq!(Some("new bio".to_string()), profile.bio);
        assert_eq!(Some("travel, running".to_string()), profile.tags);
    }

    #[tokio::test]
    async fn failed_edit_keeps_edit_mode_and_local_state() {
        let mut api = api_with_profile();
        api.expect_update_bio_tags().times(1).returning(|_, _| {
            Err(ClientError::Network("reset".to_string()))
        });

        let mut screen = ProfileScreen::new(api, logged_in_session(), quiet_notifier());
        screen.load().await;
        screen.begin_edit();
        screen.draft_mut().unwrap().bio = "new bio".to_string();
        screen.submit_edit().await;

        assert!(screen.is_editing());
        assert!(!screen.take_edit_saved());
        assert_eq!(Some("Error updating profile"), screen.error());
        assert_eq!(Some("old bio".to_string()), screen.profile().unwrap().bio);
    }

    #[tokio::test]
    async fn cancel_edit_discards_the_draft() {
        let mut screen =
            ProfileScreen::new(api_with_profile(), logged_in_session(), quiet_notifier());
        screen.load().await;
        screen.begin_edit();
        screen.draft_mut().unwrap().bio = "scratch".to_string();
        screen.cancel_edit();

        assert!(!screen.is_editing());
        assert_eq!(Some("old bio".to_string()), screen.profile().unwrap().bio);
    }

    #[test]
    fn display_bio_falls_back_to_the_default_blurb() {
        let screen: TestProfile = ProfileScreen::new(
            MockConnectApi::new(),
            MockSessionStore::new(),
            MockNotify::new(),
        );
        assert_eq!(DEFAULT_BIO, screen.display_bio());
    }
}
