use url::Url;

use crate::location::with_page_param;
use crate::request::build_search_url;
use crate::view_model::{PaginationView, ResultsViewModel};
use crate::{categorize, RequestId, SearchResponse};

pub const FETCH_ERROR_MESSAGE: &str =
    "An error occurred while fetching search results. Please try again.";

/// Values the hosting page supplies at load time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewParams {
    pub query: String,
    pub page: u32,
    pub engines: Vec<String>,
    /// Prefix for the search endpoint; empty for a same-origin path.
    pub api_base: String,
    /// Address bar of the hosting page, when there is one.
    pub location: Option<Url>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    query: String,
    current_page: u32,
    selected_engines: Vec<String>,
    api_base: String,
    location: Option<Url>,
    status: LoadStatus,
    response: Option<SearchResponse>,
    last_request: RequestId,
    in_flight: Option<RequestId>,
    dirty: bool,
}

impl ViewState {
    pub fn new(params: ViewParams) -> Self {
        Self {
            query: params.query,
            current_page: params.page.max(1),
            selected_engines: params.engines,
            api_base: params.api_base,
            location: params.location,
            ..Self::default()
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn selected_engines(&self) -> &[String] {
        &self.selected_engines
    }

    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    pub fn view(&self) -> ResultsViewModel {
        let mut view = ResultsViewModel {
            query: self.query.clone(),
            loading_visible: self.status == LoadStatus::Loading,
            dirty: self.dirty,
            ..ResultsViewModel::default()
        };

        match self.status {
            LoadStatus::Idle | LoadStatus::Loading => {}
            LoadStatus::Failed => {
                view.error_message = Some(FETCH_ERROR_MESSAGE.to_string());
            }
            LoadStatus::Loaded => {
                if let Some(response) = &self.response {
                    view.stats_text = Some(format!(
                        "{} results found in {} seconds",
                        response.count, response.time
                    ));
                    view.failed_engines = response.failed_engines().to_vec();
                    view.ai_summary = response.summary().map(str::to_string);

                    if response.is_empty() {
                        view.no_results_visible = true;
                    } else {
                        let split = categorize(&response.all_results);
                        view.all = response.all_results.clone();
                        view.web = split.web;
                        view.news = split.news;
                        view.pagination = Some(PaginationView {
                            current_page: self.current_page,
                            prev_enabled: self.current_page > 1,
                            next_enabled: true,
                        });
                    }
                }
            }
        }

        view
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Starts a fetch for the current page: hides error/empty states, clears
    /// previous results and returns the request id plus URL to fetch.
    pub(crate) fn begin_request(&mut self) -> (RequestId, String) {
        self.last_request += 1;
        let request_id = self.last_request;
        self.in_flight = Some(request_id);
        self.status = LoadStatus::Loading;
        self.response = None;
        self.mark_dirty();

        let url = build_search_url(
            &self.api_base,
            &self.query,
            self.current_page,
            &self.selected_engines,
        );
        (request_id, url)
    }

    /// Moves to `page` and rewrites the address bar, if any.
    pub(crate) fn set_page(&mut self, page: u32) -> Option<Url> {
        self.current_page = page;
        self.mark_dirty();
        let location = self.location.as_ref()?;
        let next = with_page_param(location, page);
        self.location = Some(next.clone());
        Some(next)
    }

    /// True when `request_id` is the latest issued request and still pending.
    pub(crate) fn is_current(&self, request_id: RequestId) -> bool {
        self.in_flight == Some(request_id)
    }

    pub(crate) fn apply_response(&mut self, response: SearchResponse) {
        self.in_flight = None;
        self.status = LoadStatus::Loaded;
        self.response = Some(response);
        self.mark_dirty();
    }

    pub(crate) fn apply_failure(&mut self) {
        self.in_flight = None;
        self.status = LoadStatus::Failed;
        self.response = None;
        self.mark_dirty();
    }
}
