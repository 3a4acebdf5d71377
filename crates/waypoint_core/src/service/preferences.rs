//! Theme preference use-case service.
//!
//! # Responsibility
//! - Encode/decode the dark-mode flag as a JSON boolean string.
//! - Apply the degrade-silently policy for this cosmetic preference.
//!
//! # Invariants
//! - Reads never surface an error to the caller; absence and failures both
//!   yield the default (`false`).
//! - Write failures are logged and swallowed.

use crate::model::theme::ThemePreference;
use crate::repo::preference_repo::PreferenceRepository;
use log::{error, warn};

const DARK_MODE_KEY: &str = "darkMode";

/// Durable single-flag store for the UI theme.
pub struct PreferenceStore<R: PreferenceRepository> {
    repo: R,
}

impl<R: PreferenceRepository> PreferenceStore<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Returns the stored dark-mode flag, or `false` when never set.
    ///
    /// Storage or decode failures are logged and degrade to the default;
    /// the theme is cosmetic so this call is infallible for the caller.
    pub fn dark_mode(&self) -> bool {
        let raw = match self.repo.read_value(DARK_MODE_KEY) {
            Ok(raw) => raw,
            Err(err) => {
                error!(
                    "event=pref_read module=preferences status=error key={DARK_MODE_KEY} error={err}"
                );
                return ThemePreference::default().dark_mode_enabled;
            }
        };

        match raw {
            None => ThemePreference::default().dark_mode_enabled,
            Some(value) => match serde_json::from_str::<bool>(&value) {
                Ok(enabled) => enabled,
                Err(err) => {
                    warn!(
                        "event=pref_read module=preferences status=error key={DARK_MODE_KEY} error_code=invalid_value error={err}"
                    );
                    ThemePreference::default().dark_mode_enabled
                }
            },
        }
    }

    /// Overwrites the stored dark-mode flag. No read-back verification.
    ///
    /// A failed write is logged and swallowed: losing a theme toggle is
    /// preferable to interrupting the user for a cosmetic setting.
    pub fn set_dark_mode(&self, enabled: bool) {
        // bool serialization is infallible; unwrap_or covers the type-level
        // Result without introducing a panic path.
        let value = serde_json::to_string(&enabled).unwrap_or_else(|_| enabled.to_string());
        if let Err(err) = self.repo.write_value(DARK_MODE_KEY, &value) {
            error!(
                "event=pref_write module=preferences status=error key={DARK_MODE_KEY} error_code=storage_write error={err}"
            );
        }
    }
}
