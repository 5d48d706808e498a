use std::time::{Duration, Instant};

use results_core::{update, Effect, Msg, ResultsViewModel, ViewParams, ViewState};
use results_engine::{EngineEvent, EngineHandle};
use results_logging::{results_debug, results_error, results_info};
use url::Url;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Where the controller's view ends up.
pub trait PageHost {
    fn show(&mut self, view: &ResultsViewModel, location: Option<&Url>) -> anyhow::Result<()>;
    /// Rewrite the address bar without reloading.
    fn push_location(&mut self, url: &Url);
    fn scroll_to_top(&mut self);
}

/// Drives the pure state machine: runs effects against the engine and host,
/// and feeds engine events back in as messages.
pub struct Controller<H: PageHost> {
    state: ViewState,
    engine: EngineHandle,
    host: H,
}

impl<H: PageHost> Controller<H> {
    pub fn new(params: ViewParams, engine: EngineHandle, host: H) -> Self {
        Self {
            state: ViewState::new(params),
            engine,
            host,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;

        let failures = self.run_effects(effects);

        if self.state.consume_dirty() {
            let view = self.state.view();
            if let Err(err) = self.host.show(&view, self.state.location()) {
                results_error!("Failed to show results page: {:#}", err);
            }
        }

        for msg in failures {
            self.dispatch(msg);
        }
    }

    /// Feeds engine events in until no request is pending. Returns `false`
    /// if `timeout` ran out first; `None` waits as long as it takes.
    pub fn settle(&mut self, timeout: Option<Duration>) -> bool {
        let started = Instant::now();
        while self.state.in_flight().is_some() {
            if let Some(limit) = timeout {
                if started.elapsed() >= limit {
                    return false;
                }
            }
            match self.engine.recv_timeout(POLL_INTERVAL) {
                Ok(Some(event)) => self.dispatch(event_to_msg(event)),
                Ok(None) => {}
                Err(err) => {
                    results_error!("No more results can arrive: {}", err);
                    if let Some(request_id) = self.state.in_flight() {
                        self.dispatch(Msg::LoadFailed {
                            request_id,
                            cause: err.to_string(),
                        });
                    }
                    break;
                }
            }
        }
        true
    }

    /// Runs effects in order. Fetches the engine refused come back as
    /// `LoadFailed` messages for the caller to dispatch.
    fn run_effects(&mut self, effects: Vec<Effect>) -> Vec<Msg> {
        let mut failures = Vec::new();
        for effect in effects {
            match effect {
                Effect::FetchResults { request_id, url } => {
                    results_info!("Fetch request_id={} url={}", request_id, url);
                    if let Err(err) = self.engine.fetch(request_id, url) {
                        failures.push(Msg::LoadFailed {
                            request_id,
                            cause: err.to_string(),
                        });
                    }
                }
                Effect::PushLocation { url } => {
                    results_debug!("Location -> {}", url);
                    self.host.push_location(&url);
                }
                Effect::ScrollToTop => self.host.scroll_to_top(),
            }
        }
        failures
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::FetchCompleted {
            request_id,
            result: Ok(response),
        } => Msg::ResultsLoaded {
            request_id,
            response,
        },
        EngineEvent::FetchCompleted {
            request_id,
            result: Err(err),
        } => Msg::LoadFailed {
            request_id,
            cause: err.to_string(),
        },
    }
}
