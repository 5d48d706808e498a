pub const SEARCH_PATH: &str = "/api/search";

/// Engines the backend knows about. An empty selection means "all of these".
pub const AVAILABLE_ENGINES: &[&str] = &["google", "bing", "duckduckgo", "yahoo", "brave"];

/// Builds `<base>/api/search?q=..&page=..[&engines=..]*` with every value
/// percent-encoded. An empty `base` yields a path-only URL.
pub fn build_search_url(base: &str, query: &str, page: u32, engines: &[String]) -> String {
    let mut url = format!(
        "{}{SEARCH_PATH}?q={}&page={page}",
        base.trim_end_matches('/'),
        urlencoding::encode(query)
    );
    for engine in engines {
        url.push_str("&engines=");
        url.push_str(&urlencoding::encode(engine));
    }
    url
}
