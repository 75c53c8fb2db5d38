use connect_api::user::DirectoryUser;
use connect_api::ConnectApi;
use connect_core::error::ClientError;

use crate::notify::{Notice, Notify};
use crate::DEFAULT_AVATAR;

/// The tag search screen: a query box and a result list.
pub struct TagSearch<A, N> {
    api: A,
    notifier: N,
    results: Vec<DirectoryUser>,
    loading: bool,
    error: Option<String>,
}

impl<A, N> TagSearch<A, N>
where
    A: ConnectApi,
    N: Notify,
{
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            results: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn results(&self) -> &[DirectoryUser] {
        &self.results
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Query the backend for users carrying `tag`. Blank input is a local
    /// validation error and never issues a request. An empty result set is
    /// informational, not an error.
    pub async fn search(&mut self, tag: &str) {
        let tag = tag.trim();
        if tag.is_empty() {
            self.error = Some(ClientError::EmptyTag.to_string());
            return;
        }

        self.loading = true;
        self.error = None;
        self.results.clear();

        let result = self.api.search_by_tag(tag).await;
        match result {
            Ok(users) => {
                if users.is_empty() {
                    self.notifier
                        .notify(Notice::Info, "No users found with this tag");
                }
                self.results = users
                    .into_iter()
                    .map(|mut user| {
                        if user.profile_image.is_none() {
                            user.profile_image = Some(DEFAULT_AVATAR.to_string());
                        }
                        user
                    })
                    .collect();
            }
            Err(error) => {
                tracing::warn!(%error, tag, "tag search failed");
                self.error = Some("No user found".to_string());
                self.notifier.notify(Notice::Error, "No user found");
            }
        }
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockNotify;

    use connect_api::MockConnectApi;
    use connect_core::UserId;

    type TestSearch = TagSearch<MockConnectApi, MockNotify>;

    fn tagged_user(id: &str, username: &str, image: Option<&str>) -> DirectoryUser {
        DirectoryUser {
            id: UserId::from(id),
            username: username.to_string(),
            profile_image: image.map(str::to_string),
            tags: Some("running".to_string()),
            ..DirectoryUser::default()
        }
    }

    fn quiet_notifier() -> MockNotify {
        let mut notifier = MockNotify::new();
        notifier.expect_notify().returning(|_, _| ());
        notifier
    }

    #[tokio::test]
    async fn blank_input_is_a_validation_error_without_a_request() {
        let mut search: TestSearch = TagSearch::new(MockConnectApi::new(), quiet_notifier());

        search.search("").await;
        assert_eq!(Some("Please enter a tag"), search.error());

        search.search("   ").await;
        assert_eq!(Some("Please enter a tag"), search.error());
        assert!(search.results().is_empty());
    }

    #[tokio::test]
    async fn empty_result_set_is_informational_not_an_error() {
        let mut api = MockConnectApi::new();
        api.expect_search_by_tag()
            .withf(|tag| tag == "running")
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|notice, message| {
                *notice == Notice::Info && message == "No users found with this tag"
            })
            .times(1)
            .returning(|_, _| ());

        let mut search = TagSearch::new(api, notifier);
        search.search("running").await;

        assert!(search.results().is_empty());
        assert_eq!(None, search.error());
        assert!(!search.is_loading());
    }

    #[tokio::test]
    async fn input_is_trimmed_before_the_request() {
        let mut api = MockConnectApi::new();
        api.expect_search_by_tag()
            .withf(|tag| tag == "running")
            .times(1)
            .returning(|_| Ok(vec![tagged_user("u1", "alice", None)]));

        let mut search = TagSearch::new(api, quiet_notifier());
        search.search("  running ").await;

        assert_eq!(1, search.results().len());
    }

    #[tokio::test]
    async fn results_without_a_server_image_get_the_placeholder() {
        let mut api = MockConnectApi::new();
        api.expect_search_by_tag().returning(|_| {
            Ok(vec![
                tagged_user("u1", "alice", Some("https://cdn.example/alice.jpg")),
                tagged_user("u2", "bob", None),
            ])
        });

        let mut search = TagSearch::new(api, quiet_notifier());
        search.search("running").await;

        assert_eq!(
            Some("https://cdn.example/alice.jpg".to_string()),
            search.results()[0].profile_image
        );
        assert_eq!(
            Some(DEFAULT_AVATAR.to_string()),
            search.results()[1].profile_image
        );
    }

    #[tokio::test]
    async fn lookup_failure_sets_the_error_and_clears_prior_results() {
        let mut api = MockConnectApi::new();
        api.expect_search_by_tag()
            .withf(|tag| tag == "running")
            .times(1)
            .returning(|_| Ok(vec![tagged_user("u1", "alice", None)]));
        api.expect_search_by_tag()
            .withf(|tag| tag == "hiking")
            .times(1)
            .returning(|_| Err(ClientError::Network("down".to_string())));

        let mut notifier = MockNotify::new();
        notifier.expect_notify().returning(|_, _| ());

        let mut search = TagSearch::new(api, notifier);
        search.search("running").await;
        assert_eq!(1, search.results().len());

        search.search("hiking").await;
        assert!(search.results().is_empty());
        assert_eq!(Some("No user found"), search.error());
    }

    #[tokio::test]
    async fn lookup_failure_raises_an_error_notice() {
        let mut api = MockConnectApi::new();
        api.expect_search_by_tag()
            .returning(|_| Err(ClientError::Network("down".to_string())));

        let mut notifier = MockNotify::new();
        notifier
            .expect_notify()
            .withf(|notice, message| *notice == Notice::Error && message == "No user found")
            .times(1)
            .returning(|_, _| ());

        let mut search = TagSearch::new(api, notifier);
        search.search("running").await;
    }
}
