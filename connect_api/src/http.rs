//! reqwest implementation of [`ConnectApi`].

use std::sync::Arc;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use connect_core::error::{ClientError, ClientResult};
use connect_core::UserId;

use crate::session::SessionStore;
use crate::user::{
    AvatarUpload, BioTagUpdate, DirectoryUser, FollowOutcome, UploadedAvatar, UserProfile,
};
use crate::ConnectApi;

pub struct HttpConnectApi {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct FollowBody<'a> {
    user_id: &'a UserId,
}

impl HttpConnectApi {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// URL with `tag` percent-encoded as a path segment.
    fn search_url(&self, tag: &str) -> ClientResult<String> {
        let mut url = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("invalid base url {:?}: {e}", self.base_url))?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("base url {:?} cannot be a base", self.base_url))?
            .extend(["users", "searchtag", tag]);
        Ok(url.to_string())
    }

    /// Attach the bearer token, if the session has one, and send.
    async fn send(&self, builder: reqwest::RequestBuilder) -> ClientResult<reqwest::Response> {
        let builder = match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        };
        builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))
    }

    /// Map non-2xx responses to [`ClientError::Api`], decode the rest.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> ClientResult<R> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        resp.json::<R>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn expect_ok(resp: reqwest::Response) -> ClientResult<()> {
        let status = resp.status();
        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ConnectApi for HttpConnectApi {
    async fn fetch_profile(&self, username: &str) -> ClientResult<UserProfile> {
        let resp = self
            .send(self.http.get(self.url(&format!("/users/{username}"))))
            .await?;
        Self::parse(resp).await
    }

    async fn all_users(&self) -> ClientResult<Vec<DirectoryUser>> {
        let resp = self.send(self.http.get(self.url("/all-users"))).await?;
        Self::parse(resp).await
    }

    async fn follow(&self, user_id: UserId) -> ClientResult<FollowOutcome> {
        tracing::debug!(user_id = %user_id.0, "follow");
        let resp = self
            .send(
                self.http
                    .post(self.url("/users/follow"))
                    .json(&FollowBody { user_id: &user_id }),
            )
            .await?;
        Self::parse(resp).await
    }

    async fn unfollow(&self, user_id: UserId) -> ClientResult<FollowOutcome> {
        tracing::debug!(user_id = %user_id.0, "unfollow");
        let resp = self
            .send(
                self.http
                    .post(self.url("/users/unfollow"))
                    .json(&FollowBody { user_id: &user_id }),
            )
            .await?;
        Self::parse(resp).await
    }

    async fn upload_avatar(&self, upload: AvatarUpload) -> ClientResult<UploadedAvatar> {
        tracing::debug!(file_name = %upload.file_name, bytes = upload.bytes.len(), "upload avatar");
        let part = reqwest::multipart::Part::bytes(upload.bytes).file_name(upload.file_name);
        let form = reqwest::multipart::Form::new().part("profileImage", part);
        let resp = self
            .send(
                self.http
                    .post(self.url("/users/uploadProfilePicture"))
                    .multipart(form),
            )
            .await?;
        Self::parse(resp).await
    }

    async fn update_bio_tags(&self, username: &str, update: BioTagUpdate) -> ClientResult<()> {
        tracing::debug!(username, "update bio/tags");
        let resp = self
            .send(
                self.http
                    .put(self.url(&format!("/users/{username}/update-biotag")))
                    .json(&update),
            )
            .await?;
        Self::expect_ok(resp).await
    }

    async fn search_by_tag(&self, tag: &str) -> ClientResult<Vec<DirectoryUser>> {
        let resp = self.send(self.http.get(self.search_url(tag)?)).await?;
        Self::parse(resp).await
    }
}
