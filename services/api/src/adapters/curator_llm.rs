//! services/api/src/adapters/curator_llm.rs
//!
//! This module contains the adapter for the generative art-curator chat.
//! It implements the `CuratorAiService` port from the `core` crate against
//! Groq's OpenAI-compatible chat completion API.

const SYSTEM_INSTRUCTIONS: &str = r#"You are a friendly, enthusiastic art curator who loves chatting about art! Keep your responses conversational, warm, and concise - like talking to a friend at a museum.

Be engaging but brief unless specifically asked for more detail. Use a casual, approachable tone and share interesting tidbits that make art come alive.

You can discuss:
- The artwork's story and significance
- Cool facts about the artist and their life
- Art movements and what makes them special
- Cultural context in an accessible way
- Artistic techniques (but keep it simple)
- Recommendations for similar pieces
- Why a specific art piece should make someone feel an emotion

If a user tells you the art work isn't making them feel an emotion:
- Ask the user why and try your best to respond to their answer

Think of yourself as that awesome museum guide who makes art exciting and accessible to everyone!"#;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestAssistantMessageArgs, ChatCompletionRequestMessage,
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequest, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use curator_core::curator::AI_UNAVAILABLE_REPLY;
use curator_core::domain::{Artwork, ConversationTurn, Role};
use curator_core::ports::{CuratorAiService, PortResult};
use std::time::Duration;
use tracing::error;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `CuratorAiService` using an OpenAI-compatible LLM.
///
/// Failure is absorbed at this boundary: any transport error, timeout or
/// empty completion becomes the fixed apology text, never an `Err`.
#[derive(Clone)]
pub struct GroqCuratorAdapter {
    client: Client<OpenAIConfig>,
    model: String,
    timeout: Duration,
}

impl GroqCuratorAdapter {
    /// Creates a new `GroqCuratorAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String, timeout: Duration) -> Self {
        Self {
            client,
            model,
            timeout,
        }
    }

    fn build_request(
        &self,
        message: &str,
        artwork: Option<&Artwork>,
        history: &[ConversationTurn],
    ) -> Result<CreateChatCompletionRequest, OpenAIError> {
        let mut system_prompt = SYSTEM_INSTRUCTIONS.to_string();
        if let Some(artwork) = artwork {
            system_prompt.push_str(&artwork_context(artwork));
        }

        let mut messages: Vec<ChatCompletionRequestMessage> =
            Vec::with_capacity(history.len() + 2);
        messages.push(
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()?
                .into(),
        );

        for turn in history {
            let mapped: ChatCompletionRequestMessage = match turn.role {
                Role::User => ChatCompletionRequestUserMessageArgs::default()
                    .content(turn.content.clone())
                    .build()?
                    .into(),
                Role::Assistant => ChatCompletionRequestAssistantMessageArgs::default()
                    .content(turn.content.clone())
                    .build()?
                    .into(),
            };
            messages.push(mapped);
        }

        messages.push(
            ChatCompletionRequestUserMessageArgs::default()
                .content(message.to_string())
                .build()?
                .into(),
        );

        CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .max_tokens(500u32)
            .temperature(0.7)
            .build()
    }
}

fn or_unknown(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("Unknown")
}

/// The artwork context block appended to the system prompt when a piece is
/// currently on display.
fn artwork_context(artwork: &Artwork) -> String {
    format!(
        "\n\nCurrent artwork context:\n\
         - Title: {}\n\
         - Artist: {}\n\
         - Date: {}\n\
         - Medium: {}\n\
         - Department: {}\n\
         - Dimensions: {}\n\
         - Culture: {}\n\
         - Period: {}\n\
         - Artist Bio: {}\n\
         - Artist Nationality: {}",
        artwork.title,
        or_unknown(&artwork.artist_display_name),
        or_unknown(&artwork.object_date),
        or_unknown(&artwork.medium),
        artwork.department,
        or_unknown(&artwork.dimensions),
        or_unknown(&artwork.culture),
        or_unknown(&artwork.period),
        or_unknown(&artwork.artist_display_bio),
        or_unknown(&artwork.artist_nationality),
    )
}

//=========================================================================================
// `CuratorAiService` Trait Implementation
//=========================================================================================

#[async_trait]
impl CuratorAiService for GroqCuratorAdapter {
    /// Produces a conversational reply, with the current artwork woven into
    /// the system prompt and the recent history replayed as chat messages.
    async fn converse(
        &self,
        message: &str,
        artwork: Option<&Artwork>,
        history: &[ConversationTurn],
    ) -> PortResult<String> {
        let request = match self.build_request(message, artwork, history) {
            Ok(request) => request,
            Err(err) => {
                error!(error = %err, "failed to build chat completion request");
                return Ok(AI_UNAVAILABLE_REPLY.to_string());
            }
        };

        let response = match tokio::time::timeout(
            self.timeout,
            self.client.chat().create(request),
        )
        .await
        {
            Err(_) => {
                error!(timeout_secs = self.timeout.as_secs(), "chat completion timed out");
                return Ok(AI_UNAVAILABLE_REPLY.to_string());
            }
            Ok(Err(err)) => {
                error!(error = %err, "chat completion failed");
                return Ok(AI_UNAVAILABLE_REPLY.to_string());
            }
            Ok(Ok(response)) => response,
        };

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);

        match content {
            Some(text) => Ok(text),
            None => {
                error!("chat completion contained no text content");
                Ok(AI_UNAVAILABLE_REPLY.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter() -> GroqCuratorAdapter {
        GroqCuratorAdapter::new(
            Client::with_config(OpenAIConfig::new()),
            "llama-3.3-70b-versatile".to_string(),
            Duration::from_secs(5),
        )
    }

    fn artwork() -> Artwork {
        Artwork {
            object_id: 436_535,
            title: "Wheat Field with Cypresses".to_string(),
            image_url: "https://images.example/wheat-field.jpg".to_string(),
            image_url_small: None,
            department: "European Paintings".to_string(),
            medium: Some("Oil on canvas".to_string()),
            artist_display_name: Some("Vincent van Gogh".to_string()),
            artist_display_bio: None,
            artist_nationality: Some("Dutch".to_string()),
            object_date: Some("1889".to_string()),
            dimensions: None,
            culture: None,
            period: None,
            object_url: None,
        }
    }

    #[test]
    fn request_replays_history_between_system_and_current_message() {
        let history = vec![
            ConversationTurn::user("I want to feel happy"),
            ConversationTurn::assistant("Found something bright and cheerful for you!", None),
        ];

        let request = adapter()
            .build_request("Tell me about this artist", Some(&artwork()), &history)
            .expect("request should build");

        // system + 2 history turns + the current message
        assert_eq!(request.messages.len(), 4);
        assert!(matches!(
            request.messages[0],
            ChatCompletionRequestMessage::System(_)
        ));
        assert!(matches!(
            request.messages[1],
            ChatCompletionRequestMessage::User(_)
        ));
        assert!(matches!(
            request.messages[2],
            ChatCompletionRequestMessage::Assistant(_)
        ));
        assert!(matches!(
            request.messages[3],
            ChatCompletionRequestMessage::User(_)
        ));
    }

    #[test]
    fn artwork_context_fills_missing_fields_with_unknown() {
        let context = artwork_context(&artwork());
        assert!(context.contains("- Title: Wheat Field with Cypresses"));
        assert!(context.contains("- Artist: Vincent van Gogh"));
        assert!(context.contains("- Dimensions: Unknown"));
        assert!(context.contains("- Culture: Unknown"));
    }
}
