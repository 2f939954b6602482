use crate::events::DataEvent;
use crate::state::posts::{PostQuery, PostSource};
use posts_api::{Client, Request};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Fetches tags and post pages and reports results as [`DataEvent`]s
#[derive(Clone)]
pub struct DataLoader {
    pub api_client: Arc<Client>,
    pub data_tx: mpsc::UnboundedSender<DataEvent>,
}

impl DataLoader {
    pub fn new(api_client: Arc<Client>, data_tx: mpsc::UnboundedSender<DataEvent>) -> Self {
        Self {
            api_client,
            data_tx,
        }
    }

    /// Load the tag list once. Failures are logged and otherwise ignored;
    /// there is no retry.
    pub async fn load_tags(&self) {
        tracing::info!("Loading tags");

        match self.api_client.send(Request::tags().list()).await {
            Ok(tags) => {
                tracing::info!("Loaded {} tags from API", tags.len());
                let _ = self.data_tx.send(DataEvent::TagsLoaded { tags });
            }
            Err(e) => {
                tracing::error!("Failed to load tags: {}", e);
                let _ = self.data_tx.send(DataEvent::TagsLoadFailed);
            }
        }
    }

    /// Load one page of posts for the given query
    pub async fn load_posts(&self, query: PostQuery) {
        tracing::info!(
            "Loading posts (source={:?}, skip={}, limit={})",
            query.source(),
            query.skip,
            query.limit
        );

        let posts = Request::posts().with_query(query.to_api_query());
        let result = match query.source() {
            PostSource::All => self.api_client.send(posts.list()).await,
            PostSource::Search(q) => self.api_client.send(posts.search(q)).await,
            PostSource::Tag(tag) => self.api_client.send(posts.by_tag(tag)).await,
        };

        match result {
            Ok(response) => {
                tracing::info!(
                    "Loaded {} of {} posts from API",
                    response.posts.len(),
                    response.total
                );
                let _ = self.data_tx.send(DataEvent::PostsLoaded {
                    query,
                    posts: response.posts,
                    total: response.total,
                    skip: response.skip,
                    limit: response.limit,
                });
            }
            Err(e) => {
                tracing::error!("Failed to load posts from API: {}", e);
                let _ = self.data_tx.send(DataEvent::PostsLoadFailed {
                    query,
                    error: e.to_string(),
                });
            }
        }
    }
}
