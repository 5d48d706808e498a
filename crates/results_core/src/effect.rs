use url::Url;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchResults {
        request_id: crate::RequestId,
        url: String,
    },
    /// Rewrite the address bar in place, without reloading.
    PushLocation { url: Url },
    ScrollToTop,
}
