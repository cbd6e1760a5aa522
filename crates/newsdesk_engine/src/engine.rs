use std::collections::HashMap;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use newsdesk_core::{RequestId, SummaryInput};
use newsdesk_logging::{newsdesk_debug, newsdesk_error};
use tokio_util::sync::CancellationToken;

use crate::{ArticleRepository, EngineEvent, Summarizer};

enum EngineCommand {
    FetchTrending {
        request: RequestId,
    },
    FetchArticles {
        request: RequestId,
        query: String,
    },
    Summarize {
        key: String,
        request: RequestId,
        input: SummaryInput,
    },
    Cancel {
        request: RequestId,
    },
}

type InFlight = Arc<Mutex<HashMap<RequestId, CancellationToken>>>;

/// Runs repository and summarizer calls on a background tokio runtime.
///
/// Every call is an independent task. Cancelled tasks are dropped at their
/// next await point and report nothing.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(repository: Arc<dyn ArticleRepository>, summarizer: Arc<dyn Summarizer>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    newsdesk_error!("failed to start engine runtime: {}", err);
                    return;
                }
            };
            let in_flight: InFlight = Arc::new(Mutex::new(HashMap::new()));
            while let Ok(command) = cmd_rx.recv() {
                dispatch(
                    &runtime,
                    &in_flight,
                    repository.clone(),
                    summarizer.clone(),
                    command,
                    event_tx.clone(),
                );
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_trending(&self, request: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::FetchTrending { request });
    }

    pub fn fetch_articles(&self, request: RequestId, query: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FetchArticles {
            request,
            query: query.into(),
        });
    }

    pub fn summarize(&self, key: impl Into<String>, request: RequestId, input: SummaryInput) {
        let _ = self.cmd_tx.send(EngineCommand::Summarize {
            key: key.into(),
            request,
            input,
        });
    }

    pub fn cancel(&self, request: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}

fn dispatch(
    runtime: &tokio::runtime::Runtime,
    in_flight: &InFlight,
    repository: Arc<dyn ArticleRepository>,
    summarizer: Arc<dyn Summarizer>,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let request = match &command {
        EngineCommand::Cancel { request } => {
            if let Some(token) = lock(in_flight).remove(request) {
                newsdesk_debug!("cancelling request {}", request);
                token.cancel();
            }
            return;
        }
        EngineCommand::FetchTrending { request }
        | EngineCommand::FetchArticles { request, .. }
        | EngineCommand::Summarize { request, .. } => *request,
    };

    let token = CancellationToken::new();
    lock(in_flight).insert(request, token.clone());
    let in_flight = in_flight.clone();

    runtime.spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {
                newsdesk_debug!("request {} dropped after cancellation", request);
            }
            event = run_command(repository.as_ref(), summarizer.as_ref(), command) => {
                lock(&in_flight).remove(&request);
                if let Some(event) = event {
                    let _ = event_tx.send(event);
                }
            }
        }
    });
}

async fn run_command(
    repository: &dyn ArticleRepository,
    summarizer: &dyn Summarizer,
    command: EngineCommand,
) -> Option<EngineEvent> {
    match command {
        EngineCommand::FetchTrending { request } => Some(EngineEvent::TrendingFetched {
            request,
            result: repository.fetch_trending().await,
        }),
        EngineCommand::FetchArticles { request, query } => Some(EngineEvent::ArticlesFetched {
            request,
            result: repository.fetch_articles(&query).await,
        }),
        EngineCommand::Summarize {
            key,
            request,
            input,
        } => Some(EngineEvent::SummaryFinished {
            key,
            request,
            result: summarizer.summarize(&input).await,
        }),
        EngineCommand::Cancel { .. } => None,
    }
}

fn lock(
    in_flight: &InFlight,
) -> std::sync::MutexGuard<'_, HashMap<RequestId, CancellationToken>> {
    // A panicking task cannot leave the map half-updated, so poison is ignored.
    in_flight
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
