use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use results_core::{ViewParams, AVAILABLE_ENGINES};
use results_engine::ClientSettings;
use results_logging::results_warn;
use url::Url;

/// Fetch, categorize and render search results from a `/api/search` backend.
#[derive(Debug, Clone, Parser)]
#[command(name = "results_view", version)]
pub struct Cli {
    /// Search query.
    pub query: String,

    /// Page to open first.
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Engine to query; repeat for several. None means every engine.
    #[arg(short = 'e', long = "engine")]
    pub engines: Vec<String>,

    /// Origin serving `/api/search`.
    #[arg(long, env = "RESULTS_API_BASE", default_value = "http://127.0.0.1:5000")]
    pub api_base: String,

    /// Address of the results page; defaults to `<api-base>/search?...`.
    #[arg(long)]
    pub location: Option<Url>,

    /// Where the rendered HTML page is written.
    #[arg(short, long, default_value = "results.html")]
    pub output: PathBuf,

    /// Give up on a request after this many seconds. No limit by default.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long, env = "RESULTS_LOG", default_value = "info")]
    pub log_level: String,

    /// Also write logs to this file.
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Load one page, render it and exit instead of waiting for commands.
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.query.trim().is_empty() {
            bail!("query cannot be empty");
        }
        Url::parse(&self.api_base)
            .with_context(|| format!("invalid api base {:?}", self.api_base))?;
        if self.timeout_secs == Some(0) {
            bail!("timeout must be at least one second");
        }
        Ok(())
    }

    /// Engine ids as the backend expects them: trimmed, lowercase, no blanks.
    pub fn engines(&self) -> Vec<String> {
        let engines: Vec<String> = self
            .engines
            .iter()
            .map(|engine| engine.trim().to_lowercase())
            .filter(|engine| !engine.is_empty())
            .collect();
        for engine in &engines {
            if !AVAILABLE_ENGINES.contains(&engine.as_str()) {
                results_warn!("Unknown engine {:?}; passing it through", engine);
            }
        }
        engines
    }

    pub fn view_params(&self) -> ViewParams {
        let engines = self.engines();
        let location = self
            .location
            .clone()
            .or_else(|| default_location(&self.api_base, &self.query, self.page, &engines));
        ViewParams {
            query: self.query.trim().to_string(),
            page: self.page,
            engines,
            api_base: self.api_base.clone(),
            location,
        }
    }

    pub fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: self.timeout_secs.map(Duration::from_secs),
            ..ClientSettings::default()
        }
    }
}

fn default_location(api_base: &str, query: &str, page: u32, engines: &[String]) -> Option<Url> {
    let mut url = Url::parse(api_base).ok()?.join("/search").ok()?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs.append_pair("q", query.trim());
        pairs.append_pair("page", &page.to_string());
        for engine in engines {
            pairs.append_pair("engines", engine);
        }
    }
    Some(url)
}
