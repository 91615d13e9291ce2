//! Human-facing diagnostics: `warn`, `note` and `fail`.
//!
//! Messages go through `tracing` under the `tabula::diagnostics` target.
//! Nothing here installs a subscriber, and emitting a message never changes
//! what the caller does next. [`fail`] builds the error for the caller to
//! return; the log line it emits is only a side effect.

use std::fmt::Display;

use tabula_foundation::Error;

/// Target used for every diagnostic event.
pub const TARGET: &str = "tabula::diagnostics";

/// Configuration for [`Diagnostics`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DiagnosticsConfig {
    /// Whether `warn` and `note` emit anything.
    pub enabled: bool,
    /// Prefix placed before warning messages.
    pub warn_prefix: String,
    /// Prefix placed before note messages.
    pub note_prefix: String,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            warn_prefix: "WARNING:".to_string(),
            note_prefix: "NOTE:".to_string(),
        }
    }
}

impl DiagnosticsConfig {
    /// Creates a configuration that emits nothing.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Builder method to set enabled state.
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builder method to set the warning prefix.
    #[must_use]
    pub fn with_warn_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.warn_prefix = prefix.into();
        self
    }

    /// Builder method to set the note prefix.
    #[must_use]
    pub fn with_note_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.note_prefix = prefix.into();
        self
    }
}

/// Emits prefixed diagnostic messages according to a [`DiagnosticsConfig`].
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    config: DiagnosticsConfig,
}

impl Diagnostics {
    /// Creates a diagnostics handle from a configuration.
    #[must_use]
    pub fn new(config: DiagnosticsConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    /// Formats a warning line without emitting it.
    #[must_use]
    pub fn warning_line(&self, thing: impl Display) -> String {
        join(&self.config.warn_prefix, thing)
    }

    /// Formats a note line without emitting it.
    #[must_use]
    pub fn note_line(&self, thing: impl Display) -> String {
        join(&self.config.note_prefix, thing)
    }

    /// Emits a warning.
    pub fn warn(&self, thing: impl Display) {
        if self.config.enabled {
            tracing::warn!(target: TARGET, "{}", self.warning_line(thing));
        }
    }

    /// Emits a note.
    pub fn note(&self, thing: impl Display) {
        if self.config.enabled {
            tracing::info!(target: TARGET, "{}", self.note_line(thing));
        }
    }

    /// Builds a failure error carrying `thing`, logging it when enabled.
    #[must_use]
    pub fn fail(&self, thing: impl Display) -> Error {
        let message = thing.to_string();
        if self.config.enabled {
            tracing::error!(target: TARGET, "{message}");
        }
        Error::failure(message)
    }
}

fn join(prefix: &str, thing: impl Display) -> String {
    if prefix.is_empty() {
        thing.to_string()
    } else {
        format!("{prefix} {thing}")
    }
}

/// Emits a warning with the default configuration.
pub fn warn(thing: impl Display) {
    Diagnostics::default().warn(thing);
}

/// Emits a note with the default configuration.
pub fn note(thing: impl Display) {
    Diagnostics::default().note(thing);
}

/// Builds a failure error with the default configuration.
#[must_use]
pub fn fail(thing: impl Display) -> Error {
    Diagnostics::default().fail(thing)
}
