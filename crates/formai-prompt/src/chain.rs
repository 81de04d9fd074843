//! Simple **builder** that concatenates multiple values implementing
//! [`IntoPrompt`](formai_core::template::IntoPrompt).
//!
//! ```text
//! ┌──────────────────────────┐    IntoPrompt     ┌────────────────┐
//! │ FieldInstructionFragment │ ─────────────────►│ Vec<Message>   │
//! ├──────────────────────────┤                   ├────────────────┤
//! │ StaticFragment (user)    │ ─────────────────►│ Vec<Message>   │
//! └──────────────────────────┘                   └────────────────┘
//!            ▲                                            │
//!            └────────── PromptChain::build() ◄───────────┘
//! ```
//!
//! The generic parameter `Message` allows back-ends to plug in their own, richer
//! message types while reusing the same chaining logic.
use formai_core::template::IntoPrompt;

/// Lightweight container that accumulates messages produced by
/// [`IntoPrompt`] implementors.
///
/// The single `Vec` field is kept private so the only way to obtain the result
/// is through [`Self::build`].
pub struct PromptChain<Message>(Vec<Message>);

impl<Message> Default for PromptChain<Message> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Message> PromptChain<Message> {
    /// Create an empty chain.
    pub fn new() -> Self {
        Self(vec![])
    }

    /// Append the messages produced by `with` to the chain.
    ///
    /// ```rust
    /// # use formai_prompt::chain::PromptChain;
    /// # use formai_core::generic::{GenericMessage, GenericRole};
    /// #
    /// # let msg = GenericMessage::new("a required email field".into(), GenericRole::User);
    /// let vec = PromptChain::new()
    ///     .with(msg)
    ///     .build();
    /// assert_eq!(vec.len(), 1);
    /// ```
    pub fn with(mut self, with: impl IntoPrompt<Message = Message>) -> Self {
        self.0.append(&mut with.into_prompt());
        self
    }

    /// Consume the builder and return the accumulated messages.
    pub fn build(self) -> Vec<Message> {
        self.0
    }
}
