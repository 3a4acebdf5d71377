//! Theme preference model.

use serde::{Deserialize, Serialize};

/// Single process-wide UI theme flag.
///
/// Absent storage is a valid state and maps to the default (light theme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemePreference {
    pub dark_mode_enabled: bool,
}

impl ThemePreference {
    pub fn new(dark_mode_enabled: bool) -> Self {
        Self { dark_mode_enabled }
    }
}
