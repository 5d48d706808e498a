use crate::display::display_url;
use crate::SearchResult;

pub const EMPTY_CATEGORY_MESSAGE: &str = "No results found in this category";

/// Display-ready form of one search hit. Text is raw; escaping belongs to the
/// target that turns it into markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultCard {
    pub title: String,
    pub link: String,
    pub display_url: String,
    pub snippet: String,
    pub source: String,
}

impl ResultCard {
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            title: result.title.clone(),
            link: result.link.clone(),
            display_url: display_url(&result.link),
            snippet: result.snippet.clone(),
            source: result.source.clone(),
        }
    }
}

/// A container that result cards can be rendered into.
pub trait RenderTarget {
    /// Drops whatever the container currently shows.
    fn clear(&mut self);
    fn push_card(&mut self, card: &ResultCard);
    fn push_placeholder(&mut self, message: &str);
}

/// Replaces the container's content with one card per result, or with the
/// empty-category placeholder.
pub fn render(container: &mut dyn RenderTarget, results: &[SearchResult]) {
    container.clear();
    if results.is_empty() {
        container.push_placeholder(EMPTY_CATEGORY_MESSAGE);
        return;
    }
    for result in results {
        container.push_card(&ResultCard::from_result(result));
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderedItem {
    Card(ResultCard),
    Placeholder(String),
}

/// In-memory render target; keeps the structured items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardList {
    pub items: Vec<RenderedItem>,
}

impl CardList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cards(&self) -> impl Iterator<Item = &ResultCard> {
        self.items.iter().filter_map(|item| match item {
            RenderedItem::Card(card) => Some(card),
            RenderedItem::Placeholder(_) => None,
        })
    }
}

impl RenderTarget for CardList {
    fn clear(&mut self) {
        self.items.clear();
    }

    fn push_card(&mut self, card: &ResultCard) {
        self.items.push(RenderedItem::Card(card.clone()));
    }

    fn push_placeholder(&mut self, message: &str) {
        self.items.push(RenderedItem::Placeholder(message.to_string()));
    }
}
