use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use shared::domain::{Post, User, UserId};
use tracing::{debug, info};
use url::Url;

pub mod error;

pub use error::DirectoryError;

/// Public JSON test API the desktop app talks to by default.
pub const DEFAULT_API_URL: &str = "https://jsonplaceholder.typicode.com";

/// Read-only view of the remote user directory. The desktop app's backend
/// worker holds this behind a trait so tests can substitute a stub.
#[async_trait]
pub trait DirectoryApi: Send + Sync {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError>;
    async fn list_posts(&self, user_id: UserId) -> Result<Vec<Post>, DirectoryError>;
}

pub struct DirectoryClient {
    http: Client,
    base_url: Url,
}

#[derive(Serialize)]
struct ListPostsQuery {
    #[serde(rename = "userId")]
    user_id: i64,
}

impl DirectoryClient {
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, DirectoryError> {
        let base_url = Url::parse(base_url.as_ref())?;
        Ok(Self {
            http: Client::new(),
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, DirectoryError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.http.get(self.endpoint(path));
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await.map_err(DirectoryError::Transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DirectoryError::Status(status));
        }

        response.json::<T>().await.map_err(DirectoryError::Payload)
    }
}

#[async_trait]
impl DirectoryApi for DirectoryClient {
    async fn list_users(&self) -> Result<Vec<User>, DirectoryError> {
        info!("fetching user directory");
        let users: Vec<User> = self.get_json("users", None::<&()>).await?;
        debug!(count = users.len(), "user directory fetched");
        Ok(users)
    }

    async fn list_posts(&self, user_id: UserId) -> Result<Vec<Post>, DirectoryError> {
        info!(user_id = user_id.0, "fetching posts for user");
        let query = ListPostsQuery { user_id: user_id.0 };
        let posts: Vec<Post> = self.get_json("posts", Some(&query)).await?;
        debug!(user_id = user_id.0, count = posts.len(), "posts fetched");
        Ok(posts)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
