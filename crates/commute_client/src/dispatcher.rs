use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::debug;

use crate::{commute_client::CommuteClient, display_text::DisplayText, time_window::TimeWindow};

pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUpdate {
    /// Order in which the request was dispatched. Informational only,
    /// updates are never reordered or discarded based on it.
    pub request_id: RequestId,
    pub text: DisplayText,
}

/// Runs recommendation requests in the background and hands every result
/// back to the context owning the display.
///
/// Each dispatch is independent: nothing is de-duplicated and an in-flight
/// request cannot be cancelled.
pub struct RecommendationDispatcher {
    client: Arc<CommuteClient>,
    sender: mpsc::UnboundedSender<DisplayUpdate>,
    next_request_id: AtomicU64,
}

/// Receiving end of a [`RecommendationDispatcher`].
///
/// `next` yields `None` once the dispatcher is dropped and every spawned
/// request has reported back.
pub struct DisplayUpdates {
    receiver: mpsc::UnboundedReceiver<DisplayUpdate>,
}

impl RecommendationDispatcher {
    pub fn new(client: Arc<CommuteClient>) -> (Self, DisplayUpdates) {
        let (sender, receiver) = mpsc::unbounded_channel();

        (
            Self {
                client,
                sender,
                next_request_id: AtomicU64::new(0),
            },
            DisplayUpdates { receiver },
        )
    }

    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, window: TimeWindow) -> JoinHandle<()> {
        let request_id = self.next_request_id.fetch_add(1, Ordering::Relaxed);
        let client = Arc::clone(&self.client);
        let sender = self.sender.clone();

        debug!("Dispatcher: Dispatching request {request_id}");

        tokio::spawn(async move {
            let text = DisplayText::from(client.fetch_best_departure_time(&window).await);
            debug!("Dispatcher: Request {request_id} completed");

            if sender.send(DisplayUpdate { request_id, text }).is_err() {
                debug!("Dispatcher: Display is gone, dropping result of request {request_id}");
            }
        })
    }
}

impl DisplayUpdates {
    pub async fn next(&mut self) -> Option<DisplayUpdate> {
        self.receiver.recv().await
    }
}

/// The single displayed value. Only the display context writes to it.
#[derive(Debug, Default)]
pub struct DisplayField {
    text: DisplayText,
    last_request_id: Option<RequestId>,
}

impl DisplayField {
    /// Last write wins, whatever order the requests were dispatched in.
    pub fn apply(&mut self, update: DisplayUpdate) {
        self.last_request_id = Some(update.request_id);
        self.text = update.text;
    }

    pub fn text(&self) -> &DisplayText {
        &self.text
    }

    pub fn last_request_id(&self) -> Option<RequestId> {
        self.last_request_id
    }
}
