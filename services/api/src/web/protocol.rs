//! services/api/src/web/protocol.rs
//!
//! Defines the WebSocket message protocol between the browser client and the API server
//! for the mood-curator chat.

use chrono::{DateTime, Utc};
use curator_core::domain::{Artwork, ConversationTurn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

//=========================================================================================
// Messages Sent FROM the Client (Browser) TO the Server
//=========================================================================================

/// Represents the structured text messages a client can send to the server.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// A user utterance to process as the next conversation turn.
    UserMessage { text: String },
}

//=========================================================================================
// Messages Sent FROM the Server TO the Client (Browser)
//=========================================================================================

/// Represents the structured text messages the server can send to the client.
#[derive(Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Signals that the turn was accepted and a reply is being produced.
    /// The UI can update to a "thinking..." state.
    CuratorTyping,

    /// One assistant turn: the reply text plus the artwork on display, if any.
    CuratorMessage {
        id: Uuid,
        text: String,
        timestamp: DateTime<Utc>,
        #[serde(skip_serializing_if = "Option::is_none")]
        artwork: Option<ArtworkPayload>,
    },

    /// Reports an error to the client, which should display an error message.
    Error { message: String },
}

impl ServerMessage {
    /// Builds the wire rendering of an assistant turn.
    pub fn from_turn(turn: &ConversationTurn) -> Self {
        ServerMessage::CuratorMessage {
            id: turn.id,
            text: turn.content.clone(),
            timestamp: turn.timestamp,
            artwork: turn.artwork.as_deref().map(ArtworkPayload::from),
        }
    }
}

/// Wire rendering of a validated artwork.
#[derive(Serialize, Debug, Clone)]
pub struct ArtworkPayload {
    pub object_id: u64,
    pub title: String,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url_small: Option<String>,
    pub department: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub culture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_url: Option<String>,
}

impl From<&Artwork> for ArtworkPayload {
    fn from(artwork: &Artwork) -> Self {
        Self {
            object_id: artwork.object_id,
            title: artwork.title.clone(),
            image_url: artwork.image_url.clone(),
            image_url_small: artwork.image_url_small.clone(),
            department: artwork.department.clone(),
            medium: artwork.medium.clone(),
            artist_display_name: artwork.artist_display_name.clone(),
            object_date: artwork.object_date.clone(),
            culture: artwork.culture.clone(),
            object_url: artwork.object_url.clone(),
        }
    }
}
