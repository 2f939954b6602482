use crate::endpoints::{
    PostsQuery,
    posts::{ListPosts, ListPostsByTag, SearchPosts},
    tags::ListTags,
};

/// Builds post listing requests that all share one paging/sorting window.
#[derive(Default)]
pub struct PostRepository {
    query: PostsQuery,
}

impl PostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: PostsQuery) -> Self {
        self.query = query;
        self
    }

    pub fn list(&self) -> ListPosts {
        ListPosts::with_query(self.query.clone())
    }

    pub fn search(&self, q: impl Into<String>) -> SearchPosts {
        SearchPosts::with_query(q, self.query.clone())
    }

    pub fn by_tag(&self, tag: impl Into<String>) -> ListPostsByTag {
        ListPostsByTag::with_query(tag, self.query.clone())
    }
}

pub struct TagRepository;

impl TagRepository {
    pub fn new() -> Self {
        Self {}
    }

    pub fn list(&self) -> ListTags {
        ListTags::new()
    }
}
