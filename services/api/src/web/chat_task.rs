//! services/api/src/web/chat_task.rs
//!
//! This module contains the asynchronous "worker" function responsible for
//! handling a single conversation turn.

use crate::web::{protocol::ServerMessage, state::AppState};
use axum::extract::ws::{Message, WebSocket};
use curator_core::domain::ConversationState;
use curator_core::ports::{PortError, PortResult};
use futures::{stream::SplitSink, SinkExt};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::info;

/// Processes one user utterance to completion: signals the client, drives the
/// orchestrator, and delivers the assistant turn. The caller awaits this
/// before reading the next message, which keeps turns strictly sequential.
pub async fn chat_turn(
    app_state: Arc<AppState>,
    conversation: &mut ConversationState,
    ws_sender: Arc<Mutex<SplitSink<WebSocket, Message>>>,
    text: String,
) -> PortResult<()> {
    let start_time = Instant::now();

    send(&ws_sender, &ServerMessage::CuratorTyping).await?;

    let turn = app_state.curator.respond(conversation, &text).await;
    info!(
        elapsed = ?start_time.elapsed(),
        turns = conversation.len(),
        "turn processed"
    );

    send(&ws_sender, &ServerMessage::from_turn(&turn)).await
}

/// Serializes and delivers one server message.
pub async fn send(
    ws_sender: &Arc<Mutex<SplitSink<WebSocket, Message>>>,
    message: &ServerMessage,
) -> PortResult<()> {
    let json = serde_json::to_string(message).map_err(|e| PortError::Unexpected(e.to_string()))?;
    ws_sender
        .lock()
        .await
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| PortError::Unexpected("Failed to send message to client.".to_string()))
}
