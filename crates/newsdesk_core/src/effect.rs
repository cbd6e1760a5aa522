use crate::{RequestId, SummaryInput};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchTrending {
        request: RequestId,
    },
    FetchArticles {
        request: RequestId,
        query: String,
    },
    /// A newer request superseded this one; its answer will be ignored anyway.
    CancelRequest {
        request: RequestId,
    },
    Summarize {
        key: String,
        request: RequestId,
        input: SummaryInput,
    },
}
