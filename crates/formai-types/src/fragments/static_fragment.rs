//! A minimal fragment that injects a *static* string into the prompt.
//!
//! ```rust
//! use formai_types::fragments::StaticFragment;
//! use formai_core::{generic::GenericRole, template::IntoPrompt};
//!
//! let messages = StaticFragment::new("a required email field", GenericRole::User)
//!     .into_prompt();
//! assert_eq!(messages[0].role, GenericRole::User);
//! ```

use formai_core::{
    generic::{GenericMessage, GenericRole},
    template::IntoPrompt,
};

/// A borrowed string bundled with a chat role.
pub struct StaticFragment<'a>((&'a str, GenericRole));

impl<'a> StaticFragment<'a> {
    /// Create a new fragment with explicit role.
    pub fn new(value: &'a str, role: GenericRole) -> Self {
        Self((value, role))
    }
}

impl IntoPrompt for StaticFragment<'_> {
    type Message = GenericMessage;

    fn into_prompt(self) -> Vec<Self::Message> {
        vec![GenericMessage::new(self.0.0.to_string(), self.0.1)]
    }
}
