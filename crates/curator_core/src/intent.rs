//! crates/curator_core/src/intent.rs
//!
//! Per-turn intent classification, and mood recovery for alternative
//! requests.
//!
//! The classification policy is "complaint-aware": dissatisfaction phrases
//! are checked first, then explicit mood-request phrasing, and everything
//! else is an art question for the generative collaborator. Under this
//! policy the decision depends on the turn's text alone; conversation
//! history enters only at mood recovery.

use crate::domain::{ConversationState, Mood};
use crate::moods::resolve_mood;

/// What a user turn is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// An explicit request to feel something. `None` when the phrasing is a
    /// mood request but no known mood keyword matched.
    MoodRequest(Option<Mood>),
    /// Dissatisfaction with the current artwork — show something else.
    AlternativeRequest,
    /// An open-ended question or remark about art.
    ArtQuestion,
    /// Nothing to classify (blank input).
    Unclassified,
}

/// Phrases signalling the visitor wants a different artwork.
const DISSATISFACTION_PHRASES: &[&str] = &[
    "show me another",
    "something else",
    "different",
    "another one",
    "not feeling",
    "why would this",
    "don't like",
];

/// Phrases signalling an explicit mood request.
const MOOD_REQUEST_PHRASES: &[&str] = &[
    "i want to feel",
    "i need to feel",
    "make me feel",
    "i'm feeling",
    "i am feeling",
    "i feel",
    "i need something",
    "help me feel",
];

/// Classifies a user turn. Pure and side-effect free; first match wins.
pub fn classify(text: &str) -> Intent {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Intent::Unclassified;
    }

    let lowered = trimmed.to_lowercase();

    if DISSATISFACTION_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        return Intent::AlternativeRequest;
    }

    if MOOD_REQUEST_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
        || is_bare_mood_word(&lowered)
    {
        return Intent::MoodRequest(resolve_mood(&lowered));
    }

    Intent::ArtQuestion
}

/// True when the whole message is just a mood word ("peaceful", "happy!").
fn is_bare_mood_word(lowered: &str) -> bool {
    let word = lowered.trim_end_matches(['.', '!', '?']).trim();
    Mood::ALL.iter().any(|mood| mood.as_str() == word)
}

/// Resolves the mood an alternative request should sample from.
///
/// Tries the current text first; failing that, re-runs resolution against
/// the text of the most recent artwork-bearing turn; failing that, defaults
/// to peaceful.
pub fn recover_mood(text: &str, history: &ConversationState) -> Mood {
    if let Some(mood) = resolve_mood(text) {
        return mood;
    }
    if let Some(mood) = history
        .last_artwork_turn()
        .and_then(|turn| resolve_mood(&turn.content))
    {
        return mood;
    }
    Mood::Peaceful
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Artwork, ConversationTurn};
    use std::sync::Arc;

    fn artwork(object_id: u64) -> Arc<Artwork> {
        Arc::new(Artwork {
            object_id,
            title: "Bouquet of Flowers in a Field".to_string(),
            image_url: "https://images.example/flowers.jpg".to_string(),
            image_url_small: None,
            department: "European Paintings".to_string(),
            medium: None,
            artist_display_name: None,
            artist_display_bio: None,
            artist_nationality: None,
            object_date: None,
            dimensions: None,
            culture: None,
            period: None,
            object_url: None,
        })
    }

    #[test]
    fn explicit_mood_phrase_is_a_mood_request() {
        assert_eq!(
            classify("I want to feel happy"),
            Intent::MoodRequest(Some(Mood::Happy))
        );
        assert_eq!(
            classify("make me feel inspired"),
            Intent::MoodRequest(Some(Mood::Inspired))
        );
    }

    #[test]
    fn bare_mood_word_is_a_mood_request() {
        assert_eq!(
            classify("peaceful"),
            Intent::MoodRequest(Some(Mood::Peaceful))
        );
        assert_eq!(classify("Happy!"), Intent::MoodRequest(Some(Mood::Happy)));
    }

    #[test]
    fn mood_phrase_without_known_mood_is_unresolved() {
        assert_eq!(classify("I want to feel like a pirate"), Intent::MoodRequest(None));
    }

    #[test]
    fn dissatisfaction_beats_mood_phrasing() {
        assert_eq!(classify("show me another one"), Intent::AlternativeRequest);
        assert_eq!(
            classify("I'm not feeling this painting"),
            Intent::AlternativeRequest
        );
        assert_eq!(
            classify("show me something different that feels peaceful"),
            Intent::AlternativeRequest
        );
    }

    #[test]
    fn questions_fall_through_to_the_collaborator() {
        assert_eq!(classify("Tell me about this artist"), Intent::ArtQuestion);
        assert_eq!(classify("Who painted this?"), Intent::ArtQuestion);
    }

    #[test]
    fn blank_input_is_unclassified() {
        assert_eq!(classify(""), Intent::Unclassified);
        assert_eq!(classify("   \n"), Intent::Unclassified);
    }

    #[test]
    fn recovery_prefers_the_current_text() {
        let history = ConversationState::new();
        assert_eq!(
            recover_mood("something different that feels peaceful", &history),
            Mood::Peaceful
        );
    }

    #[test]
    fn recovery_falls_back_to_the_last_artwork_turn_text() {
        let mut history = ConversationState::new();
        history.push(ConversationTurn::user("I want to feel happy"));
        history.push(ConversationTurn::assistant(
            "Found something bright and cheerful for you!",
            Some(artwork(12)),
        ));
        // "cheer" appears in the assistant turn's own text.
        assert_eq!(recover_mood("show me another", &history), Mood::Happy);
    }

    #[test]
    fn recovery_defaults_to_peaceful() {
        let history = ConversationState::new();
        assert_eq!(recover_mood("show me another", &history), Mood::Peaceful);
    }
}
