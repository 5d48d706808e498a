//! HTML rendering of the results view.
//!
//! Every piece of text coming from the search API passes through
//! [`escape`] before it is placed in markup or in an attribute.

use std::fmt::Write;

use results_core::{render, RenderTarget, ResultCard, ResultsViewModel, Section};
use url::Url;

/// Escapes text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Only http(s) links become clickable; anything else points nowhere.
pub fn safe_href(link: &str) -> String {
    match Url::parse(link) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => escape(url.as_str()),
        _ => "#".to_string(),
    }
}

/// A result container rendered to an HTML fragment.
#[derive(Debug, Default, Clone)]
pub struct HtmlContainer {
    html: String,
}

impl HtmlContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl RenderTarget for HtmlContainer {
    fn clear(&mut self) {
        self.html.clear();
    }

    fn push_card(&mut self, card: &ResultCard) {
        let _ = write!(
            self.html,
            concat!(
                "<div class=\"card mb-3 search-result\">",
                "<div class=\"card-body\">",
                "<h3 class=\"h5 card-title mb-1\">",
                "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{title}</a>",
                "</h3>",
                "<p class=\"small text-muted mb-2\">{display_url}</p>",
                "<p class=\"card-text\">{snippet}</p>",
                "<div class=\"mt-2\"><span class=\"badge\">{source}</span></div>",
                "</div></div>\n"
            ),
            href = safe_href(&card.link),
            title = escape(&card.title),
            display_url = escape(&card.display_url),
            snippet = escape(&card.snippet),
            source = escape(&card.source),
        );
    }

    fn push_placeholder(&mut self, message: &str) {
        let _ = writeln!(
            self.html,
            "<div class=\"text-center my-5\"><p class=\"text-muted\">{}</p></div>",
            escape(message)
        );
    }
}

/// Everything the page needs besides the view model.
#[derive(Debug, Clone, Default)]
pub struct PageContext<'a> {
    pub location: Option<&'a Url>,
    pub rendered_at: String,
}

fn hidden(visible: bool) -> &'static str {
    if visible {
        ""
    } else {
        " d-none"
    }
}

/// Renders the complete results page for `view`.
pub fn render_page(view: &ResultsViewModel, ctx: &PageContext<'_>) -> String {
    let mut page = String::new();
    let title = escape(&view.query);

    let _ = writeln!(page, "<!DOCTYPE html>");
    let _ = writeln!(page, "<html lang=\"en\">");
    let _ = writeln!(page, "<head>");
    let _ = writeln!(page, "<meta charset=\"utf-8\">");
    let _ = writeln!(page, "<title>{title} - Search results</title>");
    if let Some(location) = ctx.location {
        let _ = writeln!(
            page,
            "<link rel=\"canonical\" href=\"{}\">",
            escape(location.as_str())
        );
    }
    let _ = writeln!(page, "</head>");
    let _ = writeln!(page, "<body>");
    let _ = writeln!(page, "<h1 class=\"h4\">Results for &quot;{title}&quot;</h1>");

    let _ = writeln!(
        page,
        "<div id=\"loading-indicator\" class=\"loading{}\">Loading...</div>",
        hidden(view.loading_visible)
    );
    let _ = writeln!(
        page,
        "<div id=\"error-message\" class=\"alert alert-danger{}\">{}</div>",
        hidden(view.error_message.is_some()),
        escape(view.error_message.as_deref().unwrap_or_default())
    );

    let _ = write!(
        page,
        "<div id=\"stats-container\" class=\"text-muted\">{}",
        escape(view.stats_text.as_deref().unwrap_or_default())
    );
    if !view.failed_engines.is_empty() {
        let _ = write!(
            page,
            " <span class=\"failed-engines\">(no answer from: {})</span>",
            escape(&view.failed_engines.join(", "))
        );
    }
    let _ = writeln!(page, "</div>");

    let _ = writeln!(
        page,
        "<div id=\"ai-summary-container\" class=\"card{}\"><div id=\"ai-summary-content\"><p>{}</p></div></div>",
        hidden(view.ai_summary.is_some()),
        escape(view.ai_summary.as_deref().unwrap_or_default())
    );
    let _ = writeln!(
        page,
        "<div id=\"no-results-message\" class=\"text-center{}\"><p>No results found for your search.</p></div>",
        hidden(view.no_results_visible)
    );

    // Containers stay empty until a response with results arrives.
    let has_results = view.card_count() > 0;
    for section in Section::ALL {
        let mut container = HtmlContainer::new();
        if has_results {
            render(&mut container, view.section(section));
        }
        let _ = writeln!(
            page,
            "<section id=\"{}\" aria-label=\"{}\">\n{}</section>",
            section.id(),
            section.label(),
            container.as_str()
        );
    }

    render_pagination(&mut page, view);

    let _ = writeln!(
        page,
        "<footer class=\"small text-muted\">Rendered {}</footer>",
        escape(&ctx.rendered_at)
    );
    let _ = writeln!(page, "</body>");
    let _ = writeln!(page, "</html>");
    page
}

fn render_pagination(page: &mut String, view: &ResultsViewModel) {
    let Some(pagination) = view.pagination else {
        let _ = writeln!(page, "<nav id=\"pagination-container\" class=\"d-none\"></nav>");
        return;
    };
    let prev_class = if pagination.prev_enabled {
        "page-item"
    } else {
        "page-item disabled"
    };
    let _ = writeln!(
        page,
        concat!(
            "<nav id=\"pagination-container\"><ul class=\"pagination\">",
            "<li id=\"prev-page\" class=\"{prev}\"><a class=\"page-link\" href=\"#\">Previous</a></li>",
            "<li class=\"page-item active\"><span id=\"current-page\" class=\"page-link\">{current}</span></li>",
            "<li id=\"next-page\" class=\"page-item\"><a class=\"page-link\" href=\"#\">Next</a></li>",
            "</ul></nav>"
        ),
        prev = prev_class,
        current = pagination.current_page,
    );
}
