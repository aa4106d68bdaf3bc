pub mod curator;
pub mod domain;
pub mod intent;
pub mod moods;
pub mod ports;
pub mod sampler;
pub mod validator;

pub use curator::Curator;
pub use domain::{
    Artwork, CatalogueRecord, ConversationState, ConversationTurn, Mood, MoodProfile, Role,
};
pub use ports::{CatalogueService, CuratorAiService, PortError, PortResult};
pub use sampler::{ArtworkSampler, SharedRng};
