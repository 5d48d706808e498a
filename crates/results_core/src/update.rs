use results_logging::{results_debug, results_warn};

use crate::{Effect, Msg, ViewState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::Load => {
            let (request_id, url) = state.begin_request();
            vec![Effect::FetchResults { request_id, url }]
        }
        Msg::PrevPageClicked => {
            if state.current_page() > 1 {
                let page = state.current_page() - 1;
                navigate(&mut state, page)
            } else {
                Vec::new()
            }
        }
        Msg::NextPageClicked => {
            let page = state.current_page().saturating_add(1);
            navigate(&mut state, page)
        }
        Msg::NavigateTo(page) => {
            if page >= 1 {
                navigate(&mut state, page)
            } else {
                Vec::new()
            }
        }
        Msg::ResultsLoaded {
            request_id,
            response,
        } => {
            if state.is_current(request_id) {
                state.apply_response(response);
            } else {
                results_debug!("Dropping stale response for request {}", request_id);
            }
            Vec::new()
        }
        Msg::LoadFailed { request_id, cause } => {
            if state.is_current(request_id) {
                results_warn!("Error fetching search results: {}", cause);
                state.apply_failure();
            } else {
                results_debug!("Dropping stale failure for request {}: {}", request_id, cause);
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Address bar first, then the fetch, then scroll, as the page would do it.
fn navigate(state: &mut ViewState, page: u32) -> Vec<Effect> {
    let mut effects = Vec::with_capacity(3);
    if let Some(url) = state.set_page(page) {
        effects.push(Effect::PushLocation { url });
    }
    let (request_id, url) = state.begin_request();
    effects.push(Effect::FetchResults { request_id, url });
    effects.push(Effect::ScrollToTop);
    effects
}
