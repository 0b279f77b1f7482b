use store::{ApiError, User, UserDraft, UsersApi};

/// Fallback collaborator address when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const BASE_URL_ENV: &str = "TEAMDEX_API_URL";

/// HTTP implementation of [`UsersApi`].
#[derive(Clone, Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Client against an explicit base URL. Trailing slashes are stripped so
    /// path joining stays predictable.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    /// Resolve the collaborator address: `TEAMDEX_API_URL` from the process
    /// environment on native targets, the same variable baked in at compile
    /// time otherwise, falling back to [`DEFAULT_BASE_URL`].
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.is_empty() {
                return Self::new(url);
            }
        }
        match option_env!("TEAMDEX_API_URL") {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::new(DEFAULT_BASE_URL),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self) -> String {
        format!("{}/api/users", self.base_url)
    }

    fn user_url(&self, id: &str) -> String {
        format!("{}/api/users/{}", self.base_url, id)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::from_env()
    }
}

fn transport_error(err: reqwest::Error) -> ApiError {
    tracing::warn!("request failed: {err}");
    if err.is_timeout() {
        ApiError::Timeout
    } else {
        ApiError::Network(err.to_string())
    }
}

fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        tracing::warn!("collaborator rejected request: {status}");
        Err(ApiError::ServerRejected(status.as_u16()))
    }
}

impl UsersApi for Client {
    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let url = self.users_url();
        tracing::debug!("GET {url}");
        let resp = self.http.get(&url).send().await.map_err(transport_error)?;
        check_status(resp)?.json().await.map_err(transport_error)
    }

    async fn create_user(&self, draft: &UserDraft) -> Result<User, ApiError> {
        let url = self.users_url();
        tracing::debug!("POST {url}");
        let resp = self
            .http
            .post(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp)?.json().await.map_err(transport_error)
    }

    async fn update_user(&self, id: &str, draft: &UserDraft) -> Result<User, ApiError> {
        let url = self.user_url(id);
        tracing::debug!("PATCH {url}");
        let resp = self
            .http
            .patch(&url)
            .json(draft)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp)?.json().await.map_err(transport_error)
    }

    async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let url = self.user_url(id);
        tracing::debug!("DELETE {url}");
        let resp = self
            .http
            .delete(&url)
            .send()
            .await
            .map_err(transport_error)?;
        check_status(resp)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_join_against_the_base() {
        let client = Client::new("http://localhost:8000");
        assert_eq!(client.users_url(), "http://localhost:8000/api/users");
        assert_eq!(client.user_url("u1"), "http://localhost:8000/api/users/u1");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        let client = Client::new("http://example.com/");
        assert_eq!(client.base_url(), "http://example.com");
        assert_eq!(client.users_url(), "http://example.com/api/users");
    }
}
