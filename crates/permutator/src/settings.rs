//! Persisted user preferences.
//!
//! Preferences share the key-value store with the generated list.

use permutator_core::{KeyValueStore, load, save};
use tracing::{debug, info};

use crate::style::widgets::palette::ThemeMode;

/// Key holding the selected theme (`"light"` or `"dark"`).
pub const THEME_MODE_KEY: &str = "themeMode";

/// Reads the saved theme, falling back to the default.
pub fn load_theme_mode(store: &dyn KeyValueStore) -> ThemeMode {
    match load::<ThemeMode>(store, THEME_MODE_KEY) {
        Ok(Some(mode)) => {
            debug!("Loaded theme {:?}", mode);
            mode
        }
        Ok(None) => ThemeMode::default(),
        Err(e) => {
            info!("Ignoring saved theme: {}", e);
            ThemeMode::default()
        }
    }
}

/// Saves the selected theme.
pub fn save_theme_mode(
    store: &mut dyn KeyValueStore,
    mode: ThemeMode,
) -> permutator_core::Result<()> {
    save(store, THEME_MODE_KEY, &mode)
}
