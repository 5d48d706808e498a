use crate::SearchResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationView {
    pub current_page: u32,
    pub prev_enabled: bool,
    /// There is no known last page, so this is always true.
    pub next_enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    All,
    Web,
    News,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::All, Section::Web, Section::News];

    pub fn id(self) -> &'static str {
        match self {
            Section::All => "all-results",
            Section::Web => "web-results",
            Section::News => "news-results",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::All => "All",
            Section::Web => "Web",
            Section::News => "News",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultsViewModel {
    pub query: String,
    pub loading_visible: bool,
    pub error_message: Option<String>,
    pub no_results_visible: bool,
    pub stats_text: Option<String>,
    pub failed_engines: Vec<String>,
    pub ai_summary: Option<String>,
    /// `None` hides the pagination controls.
    pub pagination: Option<PaginationView>,
    pub all: Vec<SearchResult>,
    pub web: Vec<SearchResult>,
    pub news: Vec<SearchResult>,
    pub dirty: bool,
}

impl ResultsViewModel {
    pub fn section(&self, section: Section) -> &[SearchResult] {
        match section {
            Section::All => &self.all,
            Section::Web => &self.web,
            Section::News => &self.news,
        }
    }

    pub fn card_count(&self) -> usize {
        self.all.len()
    }
}
