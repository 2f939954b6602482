use post_manager::commands::executor::Effect;
use post_manager::events::DataEvent;
use post_manager::input::{Key, KeyEvent};
use post_manager::state::InputMode;
use post_manager::testing::TestApp;
use posts_api::endpoints::{posts::Post, tags::Tag, SortOrder};

fn tag(slug: &str) -> Tag {
    Tag {
        url: format!("https://dummyjson.com/posts/tag/{}", slug),
        slug: slug.to_string(),
    }
}

fn posts(ids: std::ops::Range<u64>) -> Vec<Post> {
    ids.map(|id| {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Post {}", id),
            "tags": ["history"],
            "reactions": {"likes": id, "dislikes": 0}
        }))
        .unwrap()
    })
    .collect()
}

fn page_loaded(app: &mut TestApp, total: u64) {
    let query = app.state().posts.query.clone();
    let (skip, limit) = (query.skip, query.limit);
    app.send_data_event(DataEvent::PostsLoaded {
        query,
        posts: posts(skip + 1..(skip + limit).min(total) + 1),
        total,
        skip,
        limit,
    });
}

fn last_query(app: &TestApp) -> post_manager::state::posts::PostQuery {
    match app.effects().last() {
        Some(Effect::LoadPosts(query)) => query.clone(),
        other => panic!("expected a posts load, got {:?}", other),
    }
}

#[test]
fn test_quit_flow() {
    let mut app = TestApp::new();

    app.assert_not_quit();
    app.send_key(Key::Char('q'));
    app.assert_should_quit();
}

#[test]
fn test_help_toggle() {
    let mut app = TestApp::new();

    assert!(!app.state().help_visible);

    app.send_key(Key::Char('?'));
    assert!(app.state().help_visible);

    // Other keys are ignored while help is open
    app.send_key(Key::Char('t'));
    assert!(app.effects().is_empty());

    app.send_key(Key::Esc);
    assert!(!app.state().help_visible);
}

#[test]
fn test_mount_reads_filter_from_location() {
    let app = TestApp::with_location("/posts?search=love&sortBy=title&sortOrder=desc&tag=news");
    let state = app.state();

    assert_eq!(state.filter_bar.filter.search_query, "love");
    assert_eq!(state.filter_bar.filter.selected_tag, "news");
    assert_eq!(state.posts.query.sort_by, "title");
    assert_eq!(state.posts.query.sort_order, SortOrder::Desc);
    assert!(state.location.history().is_empty());
}

#[test]
fn test_search_flow() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('/'));
    assert_eq!(app.state().input_mode, InputMode::Search);

    app.type_text("lovx");
    app.send_key(Key::Backspace);
    app.send_key(Key::Char('e'));

    // Typing alone neither reloads nor touches the URL
    assert_eq!(app.state().filter_bar.filter.search_query, "love");
    assert!(app.effects().is_empty());
    assert!(app.state().location.history().is_empty());

    app.send_key(Key::Enter);

    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert_eq!(app.state().location.search(), "search=love&sortOrder=asc");
    let query = last_query(&app);
    assert_eq!(query.search, "love");
    assert_eq!(query.skip, 0);
}

#[test]
fn test_escape_leaves_search_without_submitting() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('/'));
    app.type_text("abc");
    app.send_key(Key::Esc);

    assert_eq!(app.state().input_mode, InputMode::Normal);
    assert_eq!(app.state().filter_bar.filter.search_query, "abc");
    assert_eq!(app.state().posts.query.search, "");
    assert!(app.effects().is_empty());
}

#[test]
fn test_ctrl_c_quits_while_typing() {
    let mut app = TestApp::new();

    app.send_key(Key::Char('/'));
    app.type_text("q");
    app.assert_not_quit();

    app.send_key_event(KeyEvent::with_ctrl(Key::Char('c')));
    app.assert_should_quit();
}

#[test]
fn test_tag_cycling_after_tags_load() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::TagsLoaded {
        tags: vec![tag("history"), tag("news")],
    });

    app.send_key(Key::Char('t'));
    assert_eq!(app.state().filter_bar.filter.selected_tag, "all");
    assert_eq!(app.state().location.search(), "sortOrder=asc&tag=all");

    app.send_key(Key::Char('t'));
    assert_eq!(app.state().location.search(), "sortOrder=asc&tag=history");
    assert_eq!(last_query(&app).tag, "history");

    app.send_key(Key::Char('T'));
    app.send_key(Key::Char('T'));
    assert_eq!(app.state().filter_bar.filter.selected_tag, "news");
    assert_eq!(app.effects().len(), 4);
}

#[test]
fn test_tag_fetch_failure_leaves_only_all() {
    let mut app = TestApp::new();
    app.send_data_event(DataEvent::TagsLoadFailed);

    assert!(app.state().filter_bar.tags.is_empty());

    app.send_key(Key::Char('t'));
    assert_eq!(app.state().filter_bar.filter.selected_tag, "all");
    app.send_key(Key::Char('t'));
    assert_eq!(app.state().filter_bar.filter.selected_tag, "all");
}

#[test]
fn test_sort_keys_update_url_and_keep_page() {
    let mut app = TestApp::new();
    page_loaded(&mut app, 100);
    app.send_key(Key::Char('n'));
    assert_eq!(app.state().posts.query.skip, 10);

    app.send_key(Key::Char('s'));
    app.send_key(Key::Char('s'));
    app.send_key(Key::Char('o'));

    assert_eq!(app.state().location.search(), "sortBy=id&sortOrder=desc");
    let query = last_query(&app);
    assert_eq!(query.sort_by, "id");
    assert_eq!(query.sort_order, SortOrder::Desc);
    assert_eq!(query.skip, 10);
}

#[test]
fn test_tag_change_resets_page() {
    let mut app = TestApp::new();
    page_loaded(&mut app, 100);
    app.send_keys(&[Key::Char('n'), Key::Char('n')]);
    assert_eq!(app.state().posts.query.skip, 20);

    app.send_key(Key::Char('t'));

    assert_eq!(app.state().posts.query.skip, 0);
}

#[test]
fn test_paging_flow() {
    let mut app = TestApp::new();

    // Nothing loaded yet: both buttons disabled
    app.send_keys(&[Key::Char('n'), Key::Char('p')]);
    assert!(app.effects().is_empty());

    page_loaded(&mut app, 25);
    assert_eq!(app.state().posts.posts.len(), 10);

    app.send_key(Key::Right);
    page_loaded(&mut app, 25);
    app.send_key(Key::Char('n'));
    page_loaded(&mut app, 25);
    assert_eq!(app.state().posts.query.skip, 20);
    assert_eq!(app.state().posts.posts.len(), 5);

    // Last page
    app.send_key(Key::Char('n'));
    assert_eq!(app.state().posts.query.skip, 20);
    assert_eq!(app.effects().len(), 2);

    app.send_key(Key::Left);
    assert_eq!(app.state().posts.query.skip, 10);

    app.send_key(Key::Char('l'));
    assert_eq!(app.state().posts.query.limit, 20);
    assert_eq!(app.state().posts.query.skip, 10);

    // Paging never touches the URL
    assert!(app.state().location.history().is_empty());
}

#[test]
fn test_posts_load_failure_is_reported() {
    let mut app = TestApp::new();
    app.send_key(Key::Char('r'));
    assert!(app.state().posts.posts_loading.is_loading());

    let query = app.state().posts.query.clone();
    app.send_data_event(DataEvent::PostsLoadFailed {
        query,
        error: "API error (500): boom".to_string(),
    });

    assert!(!app.state().posts.posts_loading.is_loading());
    app.assert_not_quit();
}

#[test]
fn test_selection_moves_within_page() {
    let mut app = TestApp::new();
    page_loaded(&mut app, 3);

    app.send_keys(&[Key::Char('j'), Key::Char('j'), Key::Char('j')]);
    assert_eq!(app.state().posts.selected_post().map(|p| p.id), Some(3));

    app.send_key(Key::Up);
    assert_eq!(app.state().posts.selected_post().map(|p| p.id), Some(2));
}

#[test]
fn test_late_response_for_previous_page_is_ignored() {
    let mut app = TestApp::new();
    page_loaded(&mut app, 50);

    app.send_key(Key::Char('n'));
    let stale = match app.effects().last() {
        Some(Effect::LoadPosts(query)) => query.clone(),
        other => panic!("expected a posts load, got {:?}", other),
    };
    app.send_key(Key::Char('n'));
    assert_eq!(app.state().posts.query.skip, 20);

    // The second page arrives after the third page was requested
    app.send_data_event(DataEvent::PostsLoaded {
        query: stale,
        posts: posts(11..21),
        total: 50,
        skip: 10,
        limit: 10,
    });

    assert_eq!(app.state().posts.posts[0].id, 1);
    assert!(app.state().posts.posts_loading.is_loading());

    page_loaded(&mut app, 50);
    assert_eq!(app.state().posts.posts[0].id, 21);
}
