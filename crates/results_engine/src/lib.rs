//! Results engine: search API client and effect execution.
mod engine;
mod fetch;
mod types;

pub use engine::EngineHandle;
pub use fetch::{ClientSettings, ReqwestSearchApi, SearchApi};
pub use types::{EngineEvent, FailureKind, FetchError};
