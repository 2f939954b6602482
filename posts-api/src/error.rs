use serde::{Deserialize, Serialize};
use tower_api_client::{Error as ApiError, StatusCode};

#[derive(Debug)]
pub enum PostsApiError {
    Api(StatusCode, String),
    Internal(ApiError),
}

impl PostsApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            PostsApiError::Api(status, _) => Some(*status),
            PostsApiError::Internal(_) => None,
        }
    }
}

impl From<ApiError> for PostsApiError {
    fn from(value: ApiError) -> Self {
        match value {
            ApiError::ClientError(status, detail) | ApiError::ServerError(status, detail) => {
                // Error bodies are usually `{"message": "..."}`, but proxies may send HTML.
                let message = serde_json::from_str::<ErrorResponse>(&detail)
                    .map(|response| response.message)
                    .unwrap_or(detail);
                PostsApiError::Api(status, message)
            }
            e => PostsApiError::Internal(e),
        }
    }
}

impl std::fmt::Display for PostsApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostsApiError::Internal(e) => write!(f, "Internal error: {}", e),
            PostsApiError::Api(status, message) => write!(f, "({}) {}", status, message),
        }
    }
}

impl std::error::Error for PostsApiError {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
