use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

/// A label that can be attached to a post.
///
/// `slug` is both the display text and the value used for filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub url: String,
    pub slug: String,
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListTags;

impl ListTags {
    pub fn new() -> Self {
        Self
    }
}

impl Request for ListTags {
    type Data = ();
    type Response = Vec<Tag>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/posts/tags".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Empty
    }
}
