//! Real-time ingestion of newly created reviews. One WebSocket subscription
//! per application session; every client connected to the backend receives a
//! full `Review` payload whenever any client creates one.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::StreamExt;
use gloo_net::websocket::{futures::WebSocket, Message};
use gloo_timers::future::sleep;
use leptos::logging::{log, warn};
use wasm_bindgen_futures::spawn_local;

use crate::models::review::Review;
use crate::store::ReviewStore;

const INITIAL_BACKOFF: Duration = Duration::from_secs(1);
const MAX_BACKOFF: Duration = Duration::from_secs(30);

/// Keeps the subscription task alive; closing it stops reconnecting and lets
/// the task wind down. Held by `App` and closed on unmount.
pub struct PushHandle {
    alive: Rc<Cell<bool>>,
}

impl PushHandle {
    pub fn close(&self) {
        self.alive.set(false);
    }
}

/// Opens the new-review stream and feeds every decoded payload into the
/// store. Reconnects with exponential backoff after a drop; re-ingestion is
/// harmless because the store ignores ids it has already seen.
pub fn subscribe(url: String, store: ReviewStore) -> PushHandle {
    let alive = Rc::new(Cell::new(true));
    let handle = PushHandle {
        alive: Rc::clone(&alive),
    };

    spawn_local(async move {
        let mut backoff = INITIAL_BACKOFF;
        while alive.get() {
            match WebSocket::open(&url) {
                Ok(mut socket) => {
                    log!("[PUSH] Connected to {url}");
                    backoff = INITIAL_BACKOFF;
                    while let Some(frame) = socket.next().await {
                        if !alive.get() {
                            return;
                        }
                        match frame {
                            Ok(Message::Text(payload)) => {
                                match serde_json::from_str::<Review>(&payload) {
                                    Ok(review) => {
                                        log!("[PUSH] New review {}", review.id);
                                        store.add_new_review(review);
                                    }
                                    Err(err) => {
                                        warn!("[PUSH] Dropping malformed payload: {err}")
                                    }
                                }
                            }
                            Ok(Message::Bytes(_)) => {}
                            Err(err) => {
                                warn!("[PUSH] Socket error: {err:?}");
                                break;
                            }
                        }
                    }
                }
                Err(err) => warn!("[PUSH] Could not open {url}: {err:?}"),
            }
            if !alive.get() {
                return;
            }
            warn!("[PUSH] Disconnected, retrying in {}s", backoff.as_secs());
            sleep(backoff).await;
            backoff = next_backoff(backoff);
        }
    });

    handle
}

fn next_backoff(current: Duration) -> Duration {
    (current * 2).min(MAX_BACKOFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        let mut backoff = INITIAL_BACKOFF;
        let mut seen = Vec::new();
        for _ in 0..7 {
            seen.push(backoff.as_secs());
            backoff = next_backoff(backoff);
        }
        assert_eq!(seen, [1, 2, 4, 8, 16, 30, 30]);
    }
}
