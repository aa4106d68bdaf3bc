//! crates/curator_core/src/moods.rs
//!
//! Maps free text to a mood and moods to their catalogue search profiles.

use crate::domain::{Mood, MoodProfile};

/// Keyword groups per mood, in the same priority order as `Mood::ALL`.
/// Matching is plain lowercase substring containment.
const MOOD_KEYWORDS: [(Mood, &[&str]); 6] = [
    (Mood::Happy, &["happy", "joy", "cheer"]),
    (Mood::Sad, &["sad", "melancholy", "down"]),
    (Mood::Energized, &["energy", "energized", "excited"]),
    (Mood::Peaceful, &["peaceful", "calm", "relaxed"]),
    (Mood::Inspired, &["inspired", "creative", "motivated"]),
    (Mood::Mysterious, &["mysterious", "dark", "unknown"]),
];

/// Resolves a mood from free text.
///
/// First-match, order-sensitive: groups are tried in the fixed priority order
/// happy → sad → energized → peaceful → inspired → mysterious, and the first
/// group with a substring hit wins. This is deliberately not a best-match
/// classifier. Returns `None` when no group matches.
pub fn resolve_mood(text: &str) -> Option<Mood> {
    let text = text.to_lowercase();
    MOOD_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| text.contains(keyword)))
        .map(|(mood, _)| *mood)
}

/// The search profile for a mood. Pure table lookup, total over `Mood`.
pub fn mood_profile(mood: Mood) -> &'static MoodProfile {
    match mood {
        Mood::Happy => &MoodProfile {
            terms: &["flowers", "garden", "celebration", "children", "bright", "colorful"],
            departments: &["European Paintings", "Photographs", "Drawings and Prints"],
        },
        Mood::Sad => &MoodProfile {
            terms: &["melancholy", "solitude", "rain", "winter", "portrait"],
            departments: &["European Paintings", "Drawings and Prints"],
        },
        Mood::Energized => &MoodProfile {
            terms: &["action", "movement", "sport", "dance", "dynamic"],
            departments: &["Modern and Contemporary Art", "Photographs"],
        },
        Mood::Peaceful => &MoodProfile {
            terms: &["landscape", "nature", "calm", "meditation", "quiet"],
            departments: &["Asian Art", "European Paintings", "Drawings and Prints"],
        },
        Mood::Inspired => &MoodProfile {
            terms: &["masterpiece", "innovative", "creative", "artistic"],
            departments: &["Modern and Contemporary Art", "European Paintings"],
        },
        Mood::Mysterious => &MoodProfile {
            terms: &["dark", "shadow", "mysterious", "unknown", "surreal"],
            departments: &["Modern and Contemporary Art", "Drawings and Prints"],
        },
    }
}
