//! Live order-event channel.
//!
//! Each WebSocket connection gets its own broadcast subscription created at
//! upgrade time; events published earlier are never replayed. Frames are
//! the JSON form of [`OrderEvent`]. Inbound frames are drained and ignored
//! except for close.

use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::Response;
use tokio::sync::broadcast::error::RecvError;

use crate::realtime::OrderEvent;
use crate::state::AppState;

/// `GET /events` — upgrade to a live order-event stream.
pub async fn subscribe(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_events(socket, state))
}

async fn stream_events(mut socket: WebSocket, state: AppState) {
    let mut events = state.notifier().subscribe();
    tracing::debug!("live listener connected");

    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(event) => {
                    if forward(&mut socket, &event).await.is_err() {
                        break;
                    }
                }
                // Fell behind the channel capacity: skip ahead. Missed
                // events are gone, per the no-delivery-guarantee contract.
                Err(RecvError::Lagged(missed)) => {
                    tracing::warn!(missed, "live listener lagged");
                }
                Err(RecvError::Closed) => break,
            },
            inbound = socket.recv() => match inbound {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {} // nothing meaningful arrives client->server
            },
        }
    }

    tracing::debug!("live listener disconnected");
}

async fn forward(socket: &mut WebSocket, event: &OrderEvent) -> Result<(), axum::Error> {
    let frame = match serde_json::to_string(event) {
        Ok(frame) => frame,
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize order event");
            return Ok(());
        }
    };

    socket.send(Message::Text(frame.into())).await
}
