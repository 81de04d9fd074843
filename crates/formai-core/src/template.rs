//! Turning values into chat messages.
//!
//! Instruction fragments, the user's field description and whole prompts all
//! implement [`IntoPrompt`], so they can be lined up with
//! `formai_prompt::chain::PromptChain` and handed to any
//! [`ChatCompletionProvider`](crate::provider::ChatCompletionProvider).

/// Converts a value into a series of chat messages.
///
/// Provider crates typically use [`crate::generic::GenericMessage`], but a
/// back-end can require its own richer struct. Making the `Message` type an
/// **associated type** keeps the trait flexible without dynamic dispatch.
pub trait IntoPrompt {
    /// Chat message representation emitted by the prompt.
    type Message: Send + Sync + 'static;

    /// Consume `self` and return **all** messages in the desired order.
    fn into_prompt(self) -> Vec<Self::Message>;
}

/// A single [`crate::generic::GenericMessage`] can be passed directly
/// without wrapping it in a struct.
impl IntoPrompt for crate::generic::GenericMessage {
    type Message = crate::generic::GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![self]
    }
}
