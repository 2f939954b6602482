use super::PostsQuery;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tower_api_client::{Request, RequestData};

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub reactions: Reactions,
    #[serde(default)]
    pub views: Option<u64>,
    #[serde(default)]
    pub user_id: Option<u64>,
}

/// Older API revisions return a single reaction count, newer ones split it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reactions {
    Count(u64),
    Split { likes: u64, dislikes: u64 },
}

impl Reactions {
    pub fn likes(&self) -> u64 {
        match self {
            Self::Count(count) => *count,
            Self::Split { likes, .. } => *likes,
        }
    }

    pub fn dislikes(&self) -> u64 {
        match self {
            Self::Count(_) => 0,
            Self::Split { dislikes, .. } => *dislikes,
        }
    }
}

impl Default for Reactions {
    fn default() -> Self {
        Self::Count(0)
    }
}

// Requests

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListPosts {
    query: PostsQuery,
}

impl ListPosts {
    pub(crate) fn with_query(query: PostsQuery) -> Self {
        Self {
            query: PostsQuery { q: None, ..query },
        }
    }
}

impl Request for ListPosts {
    type Data = PostsQuery;
    type Response = PostsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/posts".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(&self.query)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct SearchPosts {
    query: PostsQuery,
}

impl SearchPosts {
    pub(crate) fn with_query(q: impl Into<String>, query: PostsQuery) -> Self {
        Self {
            query: PostsQuery {
                q: Some(q.into()),
                ..query
            },
        }
    }
}

impl Request for SearchPosts {
    type Data = PostsQuery;
    type Response = PostsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/posts/search".into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(&self.query)
    }
}

#[derive(Default, Debug, Clone, Serialize)]
pub struct ListPostsByTag {
    #[serde(skip)]
    tag: String,
    query: PostsQuery,
}

impl ListPostsByTag {
    pub(crate) fn with_query(tag: impl Into<String>, query: PostsQuery) -> Self {
        Self {
            tag: tag.into(),
            query: PostsQuery { q: None, ..query },
        }
    }
}

impl Request for ListPostsByTag {
    type Data = PostsQuery;
    type Response = PostsResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/posts/tag/{}", urlencoding::encode(&self.tag)).into()
    }

    fn data(&self) -> RequestData<&Self::Data> {
        RequestData::Query(&self.query)
    }
}

// Responses

/// One page of posts plus the paging window the server applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostsResponse {
    pub posts: Vec<Post>,
    pub total: u64,
    pub skip: u64,
    pub limit: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reactions_accepts_plain_count() {
        let post: Post =
            serde_json::from_str(r#"{"id": 1, "title": "Hello", "reactions": 7}"#).unwrap();
        assert_eq!(post.reactions.likes(), 7);
        assert_eq!(post.reactions.dislikes(), 0);
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_reactions_accepts_likes_and_dislikes() {
        let post: Post = serde_json::from_str(
            r#"{"id": 2, "title": "Hi", "body": "b", "tags": ["news"], "userId": 5,
                "reactions": {"likes": 3, "dislikes": 1}, "views": 40}"#,
        )
        .unwrap();
        assert_eq!(post.reactions, Reactions::Split { likes: 3, dislikes: 1 });
        assert_eq!(post.user_id, Some(5));
        assert_eq!(post.views, Some(40));
    }

    #[test]
    fn test_tag_endpoint_encodes_slug() {
        let req = ListPostsByTag::with_query("science fiction", PostsQuery::default());
        assert_eq!(req.endpoint(), "/posts/tag/science%20fiction");
    }
}
