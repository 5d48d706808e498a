use pretty_assertions::assert_eq;
use results_core::{
    categorize, is_news, render, CardList, RenderTarget, RenderedItem, ResultCard, SearchResponse,
    SearchResult, EMPTY_CATEGORY_MESSAGE, NEWS_DOMAINS,
};

fn hit(link: &str) -> SearchResult {
    SearchResult {
        title: format!("title for {link}"),
        link: link.to_string(),
        snippet: "snippet".to_string(),
        source: "google".to_string(),
    }
}

#[test]
fn every_result_lands_in_exactly_one_partition() {
    let results: Vec<SearchResult> = [
        "https://www.bbc.com/news/world",
        "https://example.org/",
        "https://WWW.REUTERS.COM/markets",
        "not a url at all",
        "https://docs.rs/url",
        "https://www.theguardian.com/uk",
    ]
    .into_iter()
    .map(hit)
    .collect();

    let split = categorize(&results);
    assert_eq!(split.web.len() + split.news.len(), results.len());
    for result in &results {
        let in_web = split.web.contains(result);
        let in_news = split.news.contains(result);
        assert!(in_web ^ in_news, "{} in both or neither", result.link);
        assert_eq!(in_news, is_news(result));
    }
    let news_links: Vec<&str> = split.news.iter().map(|r| r.link.as_str()).collect();
    assert_eq!(
        news_links,
        vec![
            "https://www.bbc.com/news/world",
            "https://WWW.REUTERS.COM/markets",
            "https://www.theguardian.com/uk",
        ]
    );
}

#[test]
fn substring_rule_matches_anywhere_in_link() {
    // Known imprecision: the rule is a plain substring check.
    assert!(is_news(&hit("https://example.com/mirror/cnn.com/story")));
    assert!(is_news(&hit("https://notime.com/")));
    assert!(!is_news(&hit("https://rust-lang.org/")));
}

#[test]
fn every_listed_domain_is_news() {
    for domain in NEWS_DOMAINS {
        assert!(is_news(&hit(&format!("https://{domain}/x"))), "{domain}");
    }
}

#[test]
fn empty_input_gives_empty_partitions() {
    let split = categorize(&[]);
    assert!(split.web.is_empty());
    assert!(split.news.is_empty());
}

#[test]
fn render_emits_one_card_per_result() {
    let results = vec![
        hit("https://example.com/a/b"),
        hit("https://www.nytimes.com/"),
    ];
    let mut list = CardList::new();
    render(&mut list, &results);

    let cards: Vec<&ResultCard> = list.cards().collect();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].display_url, "example.com/a/b");
    assert_eq!(cards[1].display_url, "www.nytimes.com");
    assert_eq!(cards[0].title, results[0].title);
    assert_eq!(cards[0].source, "google");
}

#[test]
fn render_clears_previous_content() {
    let mut list = CardList::new();
    render(&mut list, &[hit("https://example.com/old")]);
    render(&mut list, &[hit("https://example.com/new")]);

    assert_eq!(list.items.len(), 1);
    assert_eq!(list.cards().next().unwrap().link, "https://example.com/new");
}

#[test]
fn empty_render_shows_placeholder() {
    let mut list = CardList::new();
    list.push_placeholder("stale");
    render(&mut list, &[]);

    assert_eq!(
        list.items,
        vec![RenderedItem::Placeholder(EMPTY_CATEGORY_MESSAGE.to_string())]
    );
}

#[test]
fn malformed_link_renders_raw() {
    let mut list = CardList::new();
    render(&mut list, &[hit("::broken::")]);
    assert_eq!(list.cards().next().unwrap().display_url, "::broken::");
}

#[test]
fn response_decodes_with_missing_optional_fields() {
    let body = r#"{"all_results":[{"title":"t","link":"https://a.com","snippet":"s","source":"bing"}],"count":1,"time":0.5}"#;
    let response: SearchResponse = serde_json::from_str(body).unwrap();
    assert_eq!(response.all_results.len(), 1);
    assert_eq!(response.ai_summary, None);
    assert!(response.failed_engines().is_empty());

    let sparse: SearchResponse = serde_json::from_str(r#"{"all_results":[{"link":"x"}]}"#).unwrap();
    assert_eq!(sparse.count, 0);
    assert_eq!(sparse.all_results[0].title, "");
}
