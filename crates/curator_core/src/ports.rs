//! crates/curator_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of specific external implementations like HTTP APIs.

use async_trait::async_trait;

use crate::domain::{Artwork, CatalogueRecord, ConversationTurn};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("The call did not complete in time: {0}")]
    Timeout(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Keyword search and object lookup against the external museum catalogue.
///
/// Transport only — no validation happens behind this port. Implementations
/// degrade transport failures to an empty id list (`search`) or `None`
/// (`fetch_object`) where they can; callers must still tolerate `Err`, which
/// they treat exactly like a missed candidate.
#[async_trait]
pub trait CatalogueService: Send + Sync {
    /// Returns the object identifiers matching a keyword. Empty on no-match.
    async fn search(&self, keyword: &str) -> PortResult<Vec<u64>>;

    /// Fetches a single raw catalogue record. `None` when the object does
    /// not exist or could not be retrieved.
    async fn fetch_object(&self, object_id: u64) -> PortResult<Option<CatalogueRecord>>;
}

/// The generative-text collaborator answering open-ended art questions.
#[async_trait]
pub trait CuratorAiService: Send + Sync {
    /// Produces a conversational reply to `message`, given the artwork
    /// currently on display (if any) and the recent conversation history.
    async fn converse(
        &self,
        message: &str,
        artwork: Option<&Artwork>,
        history: &[ConversationTurn],
    ) -> PortResult<String>;
}
