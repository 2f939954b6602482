//! In-process stand-in for the browser address bar.
//!
//! Widgets read their initial values from the current query string and
//! write a freshly built query string back through [`Navigator`].

use url::form_urlencoded;

/// Something that can move the application to a new location.
pub trait Navigator {
    /// Navigate to `target`, either a relative query (`?a=b`) or a full
    /// path with optional query (`/posts?a=b`).
    fn navigate(&mut self, target: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pathname: String,
    search: String,
    history: Vec<String>,
}

impl Location {
    pub fn new(pathname: &str) -> Self {
        Self {
            pathname: normalize_path(pathname),
            search: String::new(),
            history: Vec::new(),
        }
    }

    /// Parse an href such as `/posts?search=foo`, `?tag=news` or `tag=news`.
    pub fn parse(href: &str) -> Self {
        let (path, search) = split_href(href);
        Self {
            pathname: normalize_path(path.unwrap_or("/")),
            search: search.to_string(),
            history: Vec::new(),
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    /// Query string without the leading `?`.
    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn href(&self) -> String {
        if self.search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.search)
        }
    }

    /// First value of a query parameter, percent-decoded.
    pub fn param(&self, name: &str) -> Option<String> {
        form_urlencoded::parse(self.search.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }

    /// Previously visited hrefs, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new("/")
    }
}

impl Navigator for Location {
    fn navigate(&mut self, target: &str) {
        let previous = self.href();
        let (path, search) = split_href(target);
        if let Some(path) = path {
            self.pathname = normalize_path(path);
        }
        self.search = search.to_string();
        self.history.push(previous);

        tracing::debug!("Navigated to {}", self.href());
    }
}

/// Build a query string from ordered pairs, skipping empty values.
pub fn build_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in pairs {
        if !value.is_empty() {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

fn split_href(href: &str) -> (Option<&str>, &str) {
    let href = href.split('#').next().unwrap_or_default();
    match href.split_once('?') {
        Some(("", search)) => (None, search),
        Some((path, search)) => (Some(path), search),
        None if href.starts_with('/') => (Some(href), ""),
        None => (None, href),
    }
}

fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_relative_query() {
        let location = Location::parse("?search=foo&tag=news");
        assert_eq!(location.pathname(), "/");
        assert_eq!(location.search(), "search=foo&tag=news");
        assert_eq!(location.param("tag").as_deref(), Some("news"));
        assert_eq!(location.param("sortBy"), None);
    }

    #[test]
    fn test_parse_path_with_query() {
        let location = Location::parse("/posts?search=hello+world#top");
        assert_eq!(location.pathname(), "/posts");
        assert_eq!(location.param("search").as_deref(), Some("hello world"));
        assert_eq!(location.href(), "/posts?search=hello+world");
    }

    #[test]
    fn test_param_returns_first_value() {
        let location = Location::parse("tag=a&tag=b");
        assert_eq!(location.param("tag").as_deref(), Some("a"));
    }

    #[test]
    fn test_navigate_relative_keeps_pathname() {
        let mut location = Location::parse("/posts?search=old");
        location.navigate("?search=new");

        assert_eq!(location.href(), "/posts?search=new");
        assert_eq!(location.history(), ["/posts?search=old".to_string()]);
    }

    #[test]
    fn test_navigate_to_empty_query() {
        let mut location = Location::parse("/posts?tag=news");
        location.navigate("?");

        assert_eq!(location.search(), "");
        assert_eq!(location.href(), "/posts");
    }

    #[test]
    fn test_navigate_absolute_replaces_path() {
        let mut location = Location::default();
        location.navigate("/archive?tag=old");
        assert_eq!(location.pathname(), "/archive");
        assert_eq!(location.search(), "tag=old");
    }

    #[test]
    fn test_build_query_skips_empty_values_and_keeps_order() {
        let query = build_query([("b", "2"), ("a", ""), ("c", "x y")]);
        assert_eq!(query, "b=2&c=x+y");
    }

    #[test]
    fn test_build_query_all_empty() {
        assert_eq!(build_query([("a", ""), ("b", "")]), "");
    }
}
