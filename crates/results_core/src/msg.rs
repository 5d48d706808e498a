#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Page finished loading; fetch the initial page.
    Load,
    /// User clicked the previous-page control.
    PrevPageClicked,
    /// User clicked the next-page control.
    NextPageClicked,
    /// Jump to a specific page.
    NavigateTo(u32),
    /// Engine delivered a decoded response.
    ResultsLoaded {
        request_id: crate::RequestId,
        response: crate::SearchResponse,
    },
    /// Engine reported a failed fetch. The cause is for logs only.
    LoadFailed {
        request_id: crate::RequestId,
        cause: String,
    },
    /// Leaves the state untouched and requests no effects.
    NoOp,
}
