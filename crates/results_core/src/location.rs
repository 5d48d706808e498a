use url::Url;

/// Returns `location` with its `page` query parameter set to `page`,
/// keeping every other parameter and its order.
pub fn with_page_param(location: &Url, page: u32) -> Url {
    let page = page.to_string();
    let mut placed = false;
    let mut pairs: Vec<(String, String)> = Vec::new();
    for (key, value) in location.query_pairs() {
        if key == "page" {
            if !placed {
                pairs.push(("page".to_string(), page.clone()));
                placed = true;
            }
        } else {
            pairs.push((key.into_owned(), value.into_owned()));
        }
    }
    if !placed {
        pairs.push(("page".to_string(), page));
    }

    let mut next = location.clone();
    next.query_pairs_mut().clear().extend_pairs(pairs);
    next
}

/// Reads the `page` parameter, if present and a valid page number.
pub fn page_param(location: &Url) -> Option<u32> {
    location
        .query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|page| *page >= 1)
}

#[cfg(test)]
mod tests {
    use super::{page_param, with_page_param};
    use url::Url;

    #[test]
    fn replaces_existing_page_in_place() {
        let url = Url::parse("http://host/search?q=rust&page=1&engines=bing").unwrap();
        let next = with_page_param(&url, 4);
        assert_eq!(next.as_str(), "http://host/search?q=rust&page=4&engines=bing");
    }

    #[test]
    fn appends_page_when_missing() {
        let url = Url::parse("http://host/search?q=rust").unwrap();
        let next = with_page_param(&url, 2);
        assert_eq!(next.as_str(), "http://host/search?q=rust&page=2");
        assert_eq!(page_param(&next), Some(2));
    }

    #[test]
    fn invalid_page_param_is_ignored() {
        let url = Url::parse("http://host/search?q=rust&page=zero").unwrap();
        assert_eq!(page_param(&url), None);
        let url = Url::parse("http://host/search?page=0").unwrap();
        assert_eq!(page_param(&url), None);
    }
}
