pub mod endpoints;
mod error;
pub mod repositories;

pub use crate::error::PostsApiError;
use repositories::*;
use tower_api_client::{Client as ApiClient, Request as ApiRequest};

pub const DEFAULT_BASE_URL: &str = "https://dummyjson.com";

pub struct Client {
    inner: ApiClient,
}

impl Client {
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: ApiClient::new(base_url.trim_end_matches('/')),
        }
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, PostsApiError>
    where
        R: ApiRequest,
    {
        self.inner.send(request).await.map_err(From::from)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

pub struct Request;

impl Request {
    pub fn posts() -> PostRepository {
        PostRepository::new()
    }

    pub fn tags() -> TagRepository {
        TagRepository::new()
    }
}
