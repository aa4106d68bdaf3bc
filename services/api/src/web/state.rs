//! services/api/src/web/state.rs
//!
//! Defines the application's shared state.

use crate::adapters::WebhookBugReporter;
use crate::config::Config;
use curator_core::Curator;
use std::sync::Arc;

/// The shared application state, created once at startup and passed to all handlers.
///
/// Conversation state is deliberately NOT here: a conversation lives and dies
/// with its WebSocket connection, so each connection task owns its own
/// `ConversationState`.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub curator: Arc<Curator>,
    pub bug_reporter: WebhookBugReporter,
}
