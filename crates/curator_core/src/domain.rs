//! crates/curator_core/src/domain.rs
//!
//! Defines the pure, core data structures for the application.
//! These structs are independent of any transport or serialization format.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

/// The fixed set of moods a visitor can ask to feel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    Happy,
    Sad,
    Energized,
    Peaceful,
    Inspired,
    Mysterious,
}

impl Mood {
    /// Every mood, in resolution priority order. The order is load-bearing:
    /// the first keyword group that matches a message wins.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Energized,
        Mood::Peaceful,
        Mood::Inspired,
        Mood::Mysterious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Sad => "sad",
            Mood::Energized => "energized",
            Mood::Peaceful => "peaceful",
            Mood::Inspired => "inspired",
            Mood::Mysterious => "mysterious",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static search configuration for one mood.
pub struct MoodProfile {
    /// Catalogue search terms, tried in order until enough artworks accept.
    pub terms: &'static [&'static str],
    /// Department hints declared alongside the terms. Carried as data; the
    /// validator applies the global department allow-list instead.
    pub departments: &'static [&'static str],
}

/// A raw object record from the museum catalogue.
///
/// The catalogue is untrusted input: any field other than the identifier may
/// be missing or empty. All missing-field handling lives in the validator.
#[derive(Debug, Clone, Default)]
pub struct CatalogueRecord {
    pub object_id: u64,
    pub title: Option<String>,
    pub primary_image: Option<String>,
    pub primary_image_small: Option<String>,
    pub is_public_domain: Option<bool>,
    pub department: Option<String>,
    pub object_name: Option<String>,
    pub medium: Option<String>,
    pub artist_display_name: Option<String>,
    pub artist_display_bio: Option<String>,
    pub artist_nationality: Option<String>,
    pub object_date: Option<String>,
    pub dimensions: Option<String>,
    pub culture: Option<String>,
    pub period: Option<String>,
    pub object_url: Option<String>,
}

/// A catalogue record that passed validation and may be shown to a visitor.
///
/// Constructed only by `validator::validate`; `title`, `image_url` and
/// `department` are non-empty by construction. Immutable afterwards, and
/// shared between turns as `Arc<Artwork>` rather than cloned.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    pub object_id: u64,
    pub title: String,
    pub image_url: String,
    pub image_url_small: Option<String>,
    pub department: String,
    pub medium: Option<String>,
    pub artist_display_name: Option<String>,
    pub artist_display_bio: Option<String>,
    pub artist_nationality: Option<String>,
    pub object_date: Option<String>,
    pub dimensions: Option<String>,
    pub culture: Option<String>,
    pub period: Option<String>,
    pub object_url: Option<String>,
}

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// A single message in the conversation sequence.
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// The artwork shown at this turn, if any. A reference, not an owner:
    /// later turns may carry the same `Arc`.
    pub artwork: Option<Arc<Artwork>>,
}

impl ConversationTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            artwork: None,
        }
    }

    pub fn assistant(content: impl Into<String>, artwork: Option<Arc<Artwork>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            artwork,
        }
    }
}

/// The full ordered conversation.
///
/// Append-only: the orchestrator pushes new turns and nothing is ever altered
/// in place. Ordering is conversational order and is meaningful — it is how
/// the current artwork and the last mood used are recovered.
#[derive(Debug, Default)]
pub struct ConversationState {
    turns: Vec<ConversationTurn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn and returns a reference to it.
    pub fn push(&mut self, turn: ConversationTurn) -> &ConversationTurn {
        self.turns.push(turn);
        self.turns.last().expect("just pushed")
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The most recently shown artwork, scanning backward over the turns.
    pub fn current_artwork(&self) -> Option<Arc<Artwork>> {
        self.last_artwork_turn()
            .and_then(|turn| turn.artwork.clone())
    }

    /// The most recent turn that carries an artwork.
    pub fn last_artwork_turn(&self) -> Option<&ConversationTurn> {
        self.turns.iter().rev().find(|turn| turn.artwork.is_some())
    }

    /// The last `n` turns, in conversational order.
    pub fn recent(&self, n: usize) -> &[ConversationTurn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }
}
