use crate::SearchResult;

/// Hostnames that mark a result as news. Matched as substrings of the
/// lowercased link, so e.g. `notcnn.com` also counts.
pub const NEWS_DOMAINS: &[&str] = &[
    "cnn.com",
    "bbc.com",
    "nytimes.com",
    "reuters.com",
    "washingtonpost.com",
    "apnews.com",
    "foxnews.com",
    "nbcnews.com",
    "theguardian.com",
    "time.com",
    "bloomberg.com",
    "wsj.com",
    "cnbc.com",
    "aljazeera.com",
    "huffpost.com",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Categorized {
    pub web: Vec<SearchResult>,
    pub news: Vec<SearchResult>,
}

pub fn is_news(result: &SearchResult) -> bool {
    let link = result.link.to_lowercase();
    NEWS_DOMAINS.iter().any(|domain| link.contains(domain))
}

/// Splits results into web and news, keeping the input order in each.
pub fn categorize(results: &[SearchResult]) -> Categorized {
    let (news, web): (Vec<_>, Vec<_>) = results.iter().cloned().partition(is_news);
    Categorized { web, news }
}
