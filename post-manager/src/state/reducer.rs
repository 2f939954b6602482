use super::{AppState, LoadingState};
use crate::events::DataEvent;

/// Pure state transition function for data events
pub fn reduce_data_event(state: &mut AppState, event: DataEvent) {
    match event {
        DataEvent::TagsLoaded { tags } => {
            tracing::debug!("Applying {} tags", tags.len());
            state.filter_bar.set_tags(tags);
        }

        // Already logged by the loader; the selector just keeps "all".
        DataEvent::TagsLoadFailed => {
            state.filter_bar.tags_loading = LoadingState::NotStarted;
        }

        DataEvent::PostsLoaded {
            query,
            posts,
            total,
            skip,
            limit,
        } => {
            let posts_state = &mut state.posts;
            if query != posts_state.query {
                tracing::debug!("Dropping {} posts for superseded query {:?}", posts.len(), query);
                return;
            }
            if skip != query.skip || limit != query.limit {
                // The server may clamp the window; the query stays what the user asked for.
                tracing::debug!(
                    "Server returned window skip={} limit={} for requested skip={} limit={}",
                    skip,
                    limit,
                    query.skip,
                    query.limit
                );
            }
            posts_state.total = total;
            posts_state.table_state.borrow_mut().select(if posts.is_empty() {
                None
            } else {
                Some(0)
            });
            posts_state.posts = posts;
            posts_state.posts_loading = LoadingState::Loaded;
        }

        DataEvent::PostsLoadFailed { query, error } => {
            if query != state.posts.query {
                tracing::debug!("Ignoring failure for superseded query {:?}", query);
                return;
            }
            state.posts.posts_loading = LoadingState::Error(error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use posts_api::endpoints::{posts::Post, tags::Tag};

    fn post(id: u64) -> Post {
        serde_json::from_value(serde_json::json!({"id": id, "title": format!("Post {}", id)}))
            .unwrap()
    }

    #[test]
    fn test_tags_loaded_replaces_list() {
        let mut state = AppState::default();
        state.filter_bar.tags_loading = LoadingState::loading();

        reduce_data_event(
            &mut state,
            DataEvent::TagsLoaded {
                tags: vec![Tag {
                    url: "u".to_string(),
                    slug: "news".to_string(),
                }],
            },
        );

        assert_eq!(state.filter_bar.tag_options(), vec!["all", "news"]);
        assert_eq!(state.filter_bar.tags_loading, LoadingState::Loaded);
    }

    #[test]
    fn test_tags_load_failure_leaves_list_empty() {
        let mut state = AppState::default();
        state.filter_bar.tags_loading = LoadingState::loading();

        reduce_data_event(&mut state, DataEvent::TagsLoadFailed);

        assert!(state.filter_bar.tags.is_empty());
        assert_eq!(state.filter_bar.tag_options(), vec!["all"]);
        assert_eq!(state.filter_bar.tags_loading, LoadingState::NotStarted);
    }

    #[test]
    fn test_posts_loaded_sets_total_and_selection() {
        let mut state = AppState::default();
        state.posts.posts_loading = LoadingState::loading();

        let query = state.posts.query.clone();
        reduce_data_event(
            &mut state,
            DataEvent::PostsLoaded {
                query,
                posts: vec![post(1), post(2)],
                total: 42,
                skip: 0,
                limit: 10,
            },
        );

        assert_eq!(state.posts.posts.len(), 2);
        assert_eq!(state.posts.total, 42);
        assert_eq!(state.posts.posts_loading, LoadingState::Loaded);
        assert_eq!(state.posts.selected_post().map(|p| p.id), Some(1));
        assert!(state.posts.pagination().previous_disabled());
        assert!(!state.posts.pagination().next_disabled());
    }

    #[test]
    fn test_empty_page_clears_selection() {
        let mut state = AppState::default();
        state.posts.table_state.borrow_mut().select(Some(3));

        let query = state.posts.query.clone();
        reduce_data_event(
            &mut state,
            DataEvent::PostsLoaded {
                query,
                posts: vec![],
                total: 0,
                skip: 0,
                limit: 10,
            },
        );

        assert_eq!(state.posts.table_state.borrow().selected(), None);
        assert!(state.posts.pagination().next_disabled());
    }

    #[test]
    fn test_posts_load_failure_keeps_previous_posts() {
        let mut state = AppState::default();
        state.posts.posts = vec![post(7)];

        let query = state.posts.query.clone();
        reduce_data_event(
            &mut state,
            DataEvent::PostsLoadFailed {
                query,
                error: "(500) boom".to_string(),
            },
        );

        assert_eq!(state.posts.posts.len(), 1);
        assert_eq!(
            state.posts.posts_loading,
            LoadingState::Error("(500) boom".to_string())
        );
    }

    #[test]
    fn test_response_for_superseded_query_is_dropped() {
        let mut state = AppState::default();
        let first_page = state.posts.query.clone();
        state.posts.query.skip = 10;
        state.posts.posts_loading = LoadingState::loading();

        reduce_data_event(
            &mut state,
            DataEvent::PostsLoaded {
                query: first_page.clone(),
                posts: vec![post(1)],
                total: 42,
                skip: 0,
                limit: 10,
            },
        );

        assert!(state.posts.posts.is_empty());
        assert_eq!(state.posts.total, 0);
        assert!(state.posts.posts_loading.is_loading());

        reduce_data_event(
            &mut state,
            DataEvent::PostsLoadFailed {
                query: first_page,
                error: "timeout".to_string(),
            },
        );
        assert!(state.posts.posts_loading.is_loading());
    }

    #[test]
    fn test_clamped_window_for_current_query_is_applied() {
        let mut state = AppState::default();
        state.posts.query.skip = 20;

        let query = state.posts.query.clone();
        reduce_data_event(
            &mut state,
            DataEvent::PostsLoaded {
                query,
                posts: vec![post(21), post(22)],
                total: 22,
                skip: 20,
                limit: 2,
            },
        );

        assert_eq!(state.posts.posts.len(), 2);
        assert_eq!(state.posts.query.limit, 10);
        assert_eq!(state.posts.posts_loading, LoadingState::Loaded);
    }
}
