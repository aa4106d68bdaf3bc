//! services/api/src/web/ws_handler.rs
//!
//! This is the main entry point and control loop for a WebSocket connection.
//! One connection is one conversation, processed strictly turn by turn.

use crate::web::{
    chat_task::{chat_turn, send},
    protocol::{ClientMessage, ServerMessage},
    state::AppState,
};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use curator_core::domain::ConversationState;
use futures::stream::StreamExt;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// The handler for upgrading HTTP requests to WebSocket connections.
pub async fn ws_handler(ws: WebSocketUpgrade, State(app_state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, app_state))
}

async fn handle_socket(socket: WebSocket, app_state: Arc<AppState>) {
    info!("New WebSocket connection established.");

    // The sender is wrapped in an Arc<Mutex<>> to allow for shared mutable access across tasks.
    let (sender, mut receiver) = socket.split();
    let ws_sender = Arc::new(Mutex::new(sender));

    // Each connection owns its conversation; nothing survives the socket.
    let mut conversation = ConversationState::new();

    // --- 1. Greeting ---
    let greeting = app_state.curator.greet(&mut conversation);
    if send(&ws_sender, &ServerMessage::from_turn(&greeting))
        .await
        .is_err()
    {
        error!("Failed to send greeting; closing connection.");
        return;
    }

    // --- 2. Main Message Loop ---
    // One turn is fully classified, resolved, and appended before the next
    // message is read. A client that disconnects mid-turn simply abandons
    // the in-flight turn — no mutation needs rolling back.
    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => match serde_json::from_str::<ClientMessage>(&text) {
                Ok(ClientMessage::UserMessage { text }) => {
                    if let Err(e) = chat_turn(
                        app_state.clone(),
                        &mut conversation,
                        ws_sender.clone(),
                        text,
                    )
                    .await
                    {
                        warn!(error = %e, "Failed to deliver reply; client likely disconnected.");
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Received malformed client message.");
                    let err_msg = ServerMessage::Error {
                        message: "I couldn't read that message. Please try again.".to_string(),
                    };
                    if send(&ws_sender, &err_msg).await.is_err() {
                        break;
                    }
                }
            },
            Message::Close(_) => {
                info!("Client closed the connection.");
                break;
            }
            // Ping/pong is handled by axum; binary frames have no meaning here.
            _ => {}
        }
    }

    info!(turns = conversation.len(), "WebSocket connection ended.");
}
