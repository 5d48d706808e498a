use results_logging::results_warn;
use url::Url;

pub const MAX_DISPLAY_URL_CHARS: usize = 60;
const ELLIPSIS: &str = "...";

/// Short form of a result link: host plus path, cut at
/// [`MAX_DISPLAY_URL_CHARS`] characters. Unparseable links come back verbatim.
pub fn display_url(link: &str) -> String {
    let parsed = match Url::parse(link) {
        Ok(url) => url,
        Err(err) => {
            results_warn!("Could not parse result link {:?}: {}", link, err);
            return link.to_string();
        }
    };

    let host = parsed.host_str().unwrap_or_default();
    let path = parsed.path();
    let short = if path.len() > 1 {
        format!("{host}{path}")
    } else {
        host.to_string()
    };

    truncate_chars(&short, MAX_DISPLAY_URL_CHARS)
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
