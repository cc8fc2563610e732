//! Content loader: per-pane async document fetches
//!
//! Fetches run on the shared tokio runtime; completions cross back to the
//! UI thread over an mpsc channel drained at the top of every frame. There
//! is no cancellation: a fetch that was outrun by a navigation or a close
//! is discarded on arrival by the registry's generation check, at the cost
//! of one wasted round trip.

use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender, channel};

use tokio::runtime::Runtime;

use filedeck_protocol::ApiClient;

use crate::registry::{FetchRequest, LoadOutcome};

pub struct ContentLoader {
    runtime: Arc<Runtime>,
    client: Arc<ApiClient>,
    tx: Sender<LoadOutcome>,
    rx: Receiver<LoadOutcome>,
    ctx: egui::Context,
}

impl ContentLoader {
    pub fn new(runtime: Arc<Runtime>, client: ApiClient, ctx: egui::Context) -> Self {
        let (tx, rx) = channel();
        Self {
            runtime,
            client: Arc::new(client),
            tx,
            rx,
            ctx,
        }
    }

    /// The API client (for building raw/absolute URLs in views)
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Spawn one fetch for a pane; the result comes back via `drain`
    pub fn request(&self, request: FetchRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        let ctx = self.ctx.clone();
        self.runtime.spawn(async move {
            let result = client
                .fetch_document(&request.path, request.projection.as_deref())
                .await;
            if let Err(ref error) = result {
                log::warn!(
                    "fetch for pane {} path {:?} failed: {error}",
                    request.pane_id,
                    request.path
                );
            }
            // The UI may be idle; a send failure just means shutdown.
            let _ = tx.send(LoadOutcome {
                pane_id: request.pane_id,
                generation: request.generation,
                result,
            });
            ctx.request_repaint();
        });
    }

    /// Spawn fetches for a batch of requests (after a structural sync)
    pub fn request_all(&self, requests: Vec<FetchRequest>) {
        for request in requests {
            self.request(request);
        }
    }

    /// Take every completed fetch that has arrived since the last frame
    pub fn drain(&self) -> Vec<LoadOutcome> {
        self.rx.try_iter().collect()
    }
}
