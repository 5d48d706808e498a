//! Results view core: pure state machine, categorization and view-model helpers.
mod categorize;
mod display;
mod effect;
mod location;
mod msg;
mod render;
mod request;
mod state;
mod types;
mod update;
mod view_model;

pub use categorize::{categorize, is_news, Categorized, NEWS_DOMAINS};
pub use display::{display_url, MAX_DISPLAY_URL_CHARS};
pub use effect::Effect;
pub use location::{page_param, with_page_param};
pub use msg::Msg;
pub use render::{
    render, CardList, RenderTarget, RenderedItem, ResultCard, EMPTY_CATEGORY_MESSAGE,
};
pub use request::{build_search_url, AVAILABLE_ENGINES, SEARCH_PATH};
pub use state::{LoadStatus, ViewParams, ViewState, FETCH_ERROR_MESSAGE};
pub use types::{EngineReport, RequestId, SearchResponse, SearchResult};
pub use update::update;
pub use view_model::{PaginationView, ResultsViewModel, Section};
