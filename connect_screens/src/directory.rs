use std::collections::HashMap;

use connect_api::avatar::AvatarCache;
use connect_api::session::SessionStore;
use connect_api::user::{DirectoryUser, UserProfile};
use connect_api::ConnectApi;
use connect_core::error::{ClientError, ClientResult};
use connect_core::optimistic::Optimistic;
use connect_core::UserId;

use crate::notify::{Notice, Notify};
use crate::DEFAULT_AVATAR;

/// Follow relationship of one directory entry.
///
/// The initial state is derived from `CurrentUser.following` membership at
/// load time; the pending states exist while a mutation is in flight and
/// resolve back to a rest state on confirmation or rollback.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FollowState {
    Unfollowed,
    FollowPending,
    Followed,
    UnfollowPending,
}

/// The projection the two buttons render from. At rest exactly one flag is
/// set; the invalid both-set / both-clear combinations are unrepresentable.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonState {
    pub follow_disabled: bool,
    pub unfollow_disabled: bool,
}

impl FollowState {
    /// Pending states render like their assumed outcome, so the control for
    /// the in-flight action is disabled the moment it is staged.
    pub fn button_state(self) -> ButtonState {
        match self {
            FollowState::Unfollowed | FollowState::UnfollowPending => ButtonState {
                follow_disabled: false,
                unfollow_disabled: true,
            },
            FollowState::Followed | FollowState::FollowPending => ButtonState {
                follow_disabled: true,
                unfollow_disabled: false,
            },
        }
    }
}

/// A non-self user rendered in the directory.
#[derive(Clone, Debug)]
pub struct DirectoryEntry {
    pub id: UserId,
    pub username: String,
    pub avatar: String,
    pub bio: Option<String>,
    pub tags: Option<String>,
    pub followers_count: u64,
}

/// The all-users screen: the full directory with a follow/unfollow toggle
/// per entry.
pub struct UserDirectory<A, S, C, N> {
    api: A,
    session: S,
    avatars: C,
    notifier: N,
    current_user: Option<UserProfile>,
    entries: Vec<DirectoryEntry>,
    button_state: HashMap<UserId, Optimistic<FollowState>>,
    loading: bool,
}

impl<A, S, C, N> UserDirectory<A, S, C, N>
where
    A: ConnectApi,
    S: SessionStore,
    C: AvatarCache,
    N: Notify,
{
    pub fn new(api: A, session: S, avatars: C, notifier: N) -> Self {
        Self {
            api,
            session,
            avatars,
            notifier,
            current_user: None,
            entries: Vec::new(),
            button_state: HashMap::new(),
            loading: true,
        }
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.current_user.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn follow_state(&self, user_id: &UserId) -> Option<FollowState> {
        self.button_state.get(user_id).map(Optimistic::get)
    }

    pub fn button_state(&self, user_id: &UserId) -> Option<ButtonState> {
        self.follow_state(user_id).map(FollowState::button_state)
    }

    /// Load the current user and the full directory. Failures surface as a
    /// notification and leave the list empty; nothing is returned to the
    /// caller.
    pub async fn load(&mut self) {
        let fetched = self.fetch_current_user().await;
        let current = match fetched {
            Ok(current) => current,
            Err(error) => {
                tracing::warn!(%error, "failed to load current user");
                self.notifier
                    .notify(Notice::Error, "Failed to load current user.");
                self.loading = false;
                return;
            }
        };

        self.loading = true;
        let result = self.fetch_users(&current).await;
        self.current_user = Some(current);
        self.loading = false;

        if let Err(error) = result {
            tracing::warn!(%error, "failed to load users");
            self.notifier.notify(Notice::Error, "Failed to load users.");
        }
    }

    /// Follow `user_id`. The follow control is disabled by the staged
    /// `FollowPending` state before the request goes out, so a second click
    /// cannot submit a duplicate.
    pub async fn follow(&mut self, user_id: &UserId) {
        self.stage(user_id, FollowState::FollowPending);

        let result = self.api.follow(user_id.clone()).await;
        match result {
            Ok(outcome) => {
                self.resolve(user_id, FollowState::Followed);
                self.set_followers_count(user_id, outcome.updated_followers_count);
                if let Some(current) = self.current_user.as_mut() {
                    if !current.following.contains(user_id) {
                        current.following.push(user_id.clone());
                    }
                }
                self.notifier.notify(Notice::Success, "Followed successfully!");
            }
            Err(error) => {
                tracing::warn!(%error, user_id = %user_id.0, "follow failed");
                self.abort(user_id);
                self.notifier.notify(Notice::Error, "Failed to follow user.");
            }
        }
    }

    /// Unfollow `user_id`, symmetric to [`Self::follow`]. Removing an id
    /// the current user no longer follows is a harmless no-op.
    pub async fn unfollow(&mut self, user_id: &UserId) {
        self.stage(user_id, FollowState::UnfollowPending);

        let result = self.api.unfollow(user_id.clone()).await;
        match result {
            Ok(outcome) => {
                self.resolve(user_id, FollowState::Unfollowed);
                self.set_followers_count(user_id, outcome.updated_followers_count);
                if let Some(current) = self.current_user.as_mut() {
                    current.following.retain(|id| id != user_id);
                }
                self.notifier
                    .notify(Notice::Success, "Unfollowed successfully!");
            }
            Err(error) => {
                tracing::warn!(%error, user_id = %user_id.0, "unfollow failed");
                self.abort(user_id);
                self.notifier.notify(Notice::Error, "Failed to unfollow user.");
            }
        }
    }

    async fn fetch_current_user(&self) -> ClientResult<UserProfile> {
        let username = self
            .session
            .current_username()
            .ok_or(ClientError::NotLoggedIn)?;
        self.api.fetch_profile(&username).await
    }

    async fn fetch_users(&mut self, current: &UserProfile) -> ClientResult<()> {
        let users = self.api.all_users().await?;

        let entries: Vec<_> = users
            .into_iter()
            .filter(|user| user.username != current.username)
            .map(|user| self.entry_with_avatar(user))
            .collect();

        self.button_state = entries
            .iter()
            .map(|entry| {
                let state = if current.following.contains(&entry.id) {
                    FollowState::Followed
                } else {
                    FollowState::Unfollowed
                };
                (entry.id.clone(), Optimistic::new(state))
            })
            .collect();
        self.entries = entries;

        Ok(())
    }

    /// Local override wins over the server image, which wins over the
    /// placeholder.
    fn entry_with_avatar(&self, user: DirectoryUser) -> DirectoryEntry {
        let DirectoryUser {
            id,
            username,
            profile_image,
            bio,
            tags,
            followers_count,
        } = user;

        let avatar = self
            .avatars
            .cached_avatar(&username)
            .or(profile_image)
            .unwrap_or_else(|| DEFAULT_AVATAR.to_string());

        DirectoryEntry {
            id,
            username,
            avatar,
            bio,
            tags,
            followers_count,
        }
    }

    fn stage(&mut self, user_id: &UserId, state: FollowState) {
        self.button_state
            .entry(user_id.clone())
            .or_insert_with(|| Optimistic::new(FollowState::Unfollowed))
            .stage(state);
    }

    fn resolve(&mut self, user_id: &UserId, state: FollowState) {
        if let Some(cell) = self.button_state.get_mut(user_id) {
            cell.resolve(state);
        }
    }

    fn abort(&mut self, user_id: &UserId) {
        if let Some(cell) = self.button_state.get_mut(user_id) {
            cell.abort();
        }
    }

    fn set_followers_count(&mut self, user_id: &UserId, count: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| &entry.id == user_id) {
            entry.followers_count = count;
        }
    }
}
