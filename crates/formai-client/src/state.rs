//! Observable per-field runtime state.
//!
//! A [`FieldState`] owns the current value, the last validation error, the
//! loaded [`FieldConfig`] and a loading flag. Every mutation publishes a new
//! [`FieldSnapshot`] on a `tokio::sync::watch` channel, so a UI binding can
//! re-render from [`FieldState::subscribe`] without knowing anything about
//! the code that mutates the field.

use formai_core::FieldConfig;
use tokio::sync::watch;

/// Point-in-time copy of a field's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    pub value: String,
    pub error: Option<String>,
    pub config: Option<FieldConfig>,
    pub loading: bool,
}

impl Default for FieldSnapshot {
    fn default() -> Self {
        Self {
            value: String::new(),
            error: None,
            config: None,
            loading: true,
        }
    }
}

#[derive(Debug)]
pub struct FieldState {
    tx: watch::Sender<FieldSnapshot>,
}

impl Default for FieldState {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldState {
    /// Fresh state: empty value, no error, no config, loading.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(FieldSnapshot::default());
        Self { tx }
    }

    pub fn snapshot(&self) -> FieldSnapshot {
        self.tx.borrow().clone()
    }

    /// Receive every subsequent change. The receiver starts out holding the
    /// current snapshot.
    pub fn subscribe(&self) -> watch::Receiver<FieldSnapshot> {
        self.tx.subscribe()
    }

    pub fn value(&self) -> String {
        self.tx.borrow().value.clone()
    }

    pub fn error(&self) -> Option<String> {
        self.tx.borrow().error.clone()
    }

    pub fn config(&self) -> Option<FieldConfig> {
        self.tx.borrow().config.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.tx.borrow().loading
    }

    pub fn set_value(&self, value: impl Into<String>) {
        let value = value.into();
        self.tx.send_modify(|s| s.value = value);
    }

    pub fn set_error(&self, error: Option<String>) {
        self.tx.send_modify(|s| s.error = error);
    }

    pub fn set_config(&self, config: Option<FieldConfig>) {
        self.tx.send_modify(|s| s.config = config);
    }

    pub fn set_loading(&self, loading: bool) {
        self.tx.send_modify(|s| s.loading = loading);
    }
}
