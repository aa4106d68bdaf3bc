//! crates/curator_core/src/curator.rs
//!
//! The conversation orchestrator. Owns the turn lifecycle: classify the
//! utterance, drive the sampler or the generative collaborator, and append
//! the resulting turns to the conversation. Every failure mode degrades to a
//! user-visible text — a single bad catalogue record or failed network call
//! never aborts a turn.

use crate::domain::{Artwork, ConversationState, ConversationTurn, Mood};
use crate::intent::{self, Intent};
use crate::ports::{CatalogueService, CuratorAiService};
use crate::sampler::{ArtworkSampler, SharedRng};
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Candidates requested when the visitor asks for something different.
const ALTERNATIVE_CANDIDATES: usize = 5;
/// Conversation turns handed to the generative collaborator as context.
const HISTORY_WINDOW: usize = 6;

/// Opening message of every conversation.
pub const GREETING: &str = "Hello! I'm your personal art curator from The Metropolitan Museum. \
    Tell me how you'd like to feel, and I'll find the perfect artwork to match your mood.";

/// Reply when sampling produced nothing for the requested mood.
pub const NO_ARTWORK_FOUND_REPLY: &str = "I couldn't find artworks matching that mood right now. \
    Could you try describing your desired feeling differently?";

/// Reply when the phrasing asked for a mood the resolver doesn't know.
pub const CLARIFY_MOOD_REPLY: &str = "I'd love to help you find the perfect artwork! Please tell \
    me how you'd like to feel - for example, 'I want to feel happy' or 'I need something peaceful'.";

/// Reply accompanying an alternative artwork.
pub const ALTERNATIVE_REPLY: &str =
    "Let me show you something different that might speak to you more.";

/// Degraded reply when the generative collaborator is unreachable.
pub const AI_UNAVAILABLE_REPLY: &str = "I'm having trouble accessing the museum's collection \
    right now. Please try again in a moment.";

/// The three canned reply variants per mood.
fn mood_replies(mood: Mood) -> [&'static str; 3] {
    match mood {
        Mood::Happy => [
            "Here's a delightful piece that radiates joy and positivity!",
            "This artwork should bring a smile to your face!",
            "Found something bright and cheerful for you!",
        ],
        Mood::Sad => [
            "Sometimes beauty can be found in melancholy.",
            "This piece acknowledges the depth of emotion.",
            "Art that speaks to the soul's quieter moments.",
        ],
        Mood::Energized => [
            "This dynamic piece should get your creative energy flowing!",
            "Here's something vibrant to match your energy!",
            "This artwork pulses with life and movement!",
        ],
        Mood::Peaceful => [
            "This serene piece should help you find your inner calm.",
            "Here's something tranquil to soothe your soul.",
            "This artwork embodies peaceful tranquility.",
        ],
        Mood::Inspired => [
            "This masterpiece should spark your creativity!",
            "Here's something to ignite your imagination!",
            "This artwork embodies artistic innovation!",
        ],
        Mood::Mysterious => [
            "Here's something enigmatic and thought-provoking.",
            "This piece holds secrets waiting to be discovered.",
            "Mysterious and captivating - just what you need!",
        ],
    }
}

/// Sequences classifier, sampler and generative collaborator for one
/// conversation at a time.
pub struct Curator {
    sampler: ArtworkSampler,
    ai: Arc<dyn CuratorAiService>,
    rng: SharedRng,
}

impl Curator {
    pub fn new(
        catalogue: Arc<dyn CatalogueService>,
        ai: Arc<dyn CuratorAiService>,
        rng: SharedRng,
    ) -> Self {
        Self {
            sampler: ArtworkSampler::new(catalogue, rng.clone()),
            ai,
            rng,
        }
    }

    /// Opens a conversation: appends and returns the greeting turn.
    pub fn greet(&self, conversation: &mut ConversationState) -> ConversationTurn {
        conversation.push(ConversationTurn::assistant(GREETING, None)).clone()
    }

    /// Handles one user utterance: appends the user turn, produces the
    /// assistant turn, appends it, and returns it.
    ///
    /// A turn is processed to completion before the next is accepted; the
    /// caller drives turns strictly sequentially per conversation.
    pub async fn respond(
        &self,
        conversation: &mut ConversationState,
        text: &str,
    ) -> ConversationTurn {
        let turn_intent = intent::classify(text);
        debug!(?turn_intent, "classified user turn");

        // Context is read before the new turns are appended: the collaborator
        // sees the history as it stood when the user spoke.
        let current_artwork = conversation.current_artwork();
        let recent: Vec<ConversationTurn> = conversation.recent(HISTORY_WINDOW).to_vec();

        conversation.push(ConversationTurn::user(text));

        let reply = match turn_intent {
            Intent::MoodRequest(Some(mood)) => self.mood_request(mood).await,
            Intent::MoodRequest(None) => {
                ConversationTurn::assistant(CLARIFY_MOOD_REPLY, None)
            }
            Intent::AlternativeRequest => {
                let mood = intent::recover_mood(text, conversation);
                self.alternative_request(mood, current_artwork).await
            }
            Intent::ArtQuestion | Intent::Unclassified => {
                self.art_question(text, current_artwork, &recent).await
            }
        };

        conversation.push(reply).clone()
    }

    async fn mood_request(&self, mood: Mood) -> ConversationTurn {
        let mut artworks = self.sampler.sample(mood, 1).await;
        match artworks.pop() {
            Some(artwork) => {
                info!(%mood, object_id = artwork.object_id, "artwork selected for mood");
                ConversationTurn::assistant(self.pick_mood_reply(mood), Some(Arc::new(artwork)))
            }
            None => {
                warn!(%mood, "catalogue yielded no valid artwork");
                ConversationTurn::assistant(NO_ARTWORK_FOUND_REPLY, None)
            }
        }
    }

    async fn alternative_request(
        &self,
        mood: Mood,
        previous: Option<Arc<Artwork>>,
    ) -> ConversationTurn {
        let candidates = self
            .sampler
            .sample(mood, ALTERNATIVE_CANDIDATES)
            .await;
        if candidates.is_empty() {
            warn!(%mood, "no candidates for alternative request");
            return ConversationTurn::assistant(NO_ARTWORK_FOUND_REPLY, None);
        }

        let chosen = self.pick_alternative(&candidates, previous.as_deref());
        info!(%mood, object_id = chosen.object_id, "alternative artwork selected");
        ConversationTurn::assistant(ALTERNATIVE_REPLY, Some(Arc::new(chosen)))
    }

    async fn art_question(
        &self,
        message: &str,
        current_artwork: Option<Arc<Artwork>>,
        recent: &[ConversationTurn],
    ) -> ConversationTurn {
        let text = match self
            .ai
            .converse(message, current_artwork.as_deref(), recent)
            .await
        {
            Ok(text) => text,
            Err(err) => {
                error!(error = %err, "generative collaborator failed");
                AI_UNAVAILABLE_REPLY.to_string()
            }
        };

        // The artwork reference persists across pure-conversation turns until
        // a new mood or alternative request replaces it.
        ConversationTurn::assistant(text, current_artwork)
    }

    fn pick_mood_reply(&self, mood: Mood) -> &'static str {
        let replies = mood_replies(mood);
        let mut rng = self.rng.lock().expect("rng lock poisoned");
        replies[rng.gen_range(0..replies.len())]
    }

    /// Uniform pick among candidates, excluding the previously shown piece.
    /// Falls back to the first candidate when the exclusion empties the set.
    fn pick_alternative(&self, candidates: &[Artwork], previous: Option<&Artwork>) -> Artwork {
        let remaining: Vec<&Artwork> = match previous {
            Some(previous) => candidates
                .iter()
                .filter(|candidate| candidate.object_id != previous.object_id)
                .collect(),
            None => candidates.iter().collect(),
        };

        if remaining.is_empty() {
            return candidates[0].clone();
        }

        let mut rng = self.rng.lock().expect("rng lock poisoned");
        remaining[rng.gen_range(0..remaining.len())].clone()
    }
}
