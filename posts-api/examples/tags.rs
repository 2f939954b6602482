use posts_api::endpoints::{PostsQuery, SortOrder};
use posts_api::{Client, PostsApiError, Request};

#[tokio::main]
pub async fn main() -> Result<(), PostsApiError> {
    let client = Client::default();

    let tags = client.send(Request::tags().list()).await?;
    for tag in tags.iter().take(5) {
        println!("{} -> {}", tag.slug, tag.url);
    }

    let query = PostsQuery {
        limit: 5,
        sort_by: Some("title".to_string()),
        order: Some(SortOrder::Asc),
        ..Default::default()
    };
    let page = client.send(Request::posts().with_query(query).list()).await?;
    println!("{} of {} posts", page.posts.len(), page.total);
    Ok(())
}
