//! System clipboard access.

use std::sync::{LazyLock, Mutex};

use tracing::debug;

/// Process-wide clipboard handle.
///
/// On Linux the copied text is served by the owning handle, so it is kept
/// alive for the lifetime of the application instead of per copy.
static CLIPBOARD: LazyLock<Mutex<Option<arboard::Clipboard>>> =
    LazyLock::new(|| Mutex::new(None));

/// Writes `text` to the system clipboard.
///
/// `arboard` is synchronous, so the write runs on the blocking pool.
pub async fn write_text(text: String) -> Result<(), String> {
    tokio::task::spawn_blocking(move || {
        let mut guard = CLIPBOARD.lock().map_err(|e| e.to_string())?;
        if guard.is_none() {
            *guard = Some(arboard::Clipboard::new().map_err(|e| e.to_string())?);
        }
        let clipboard = guard
            .as_mut()
            .ok_or_else(|| "clipboard unavailable".to_string())?;
        clipboard.set_text(text).map_err(|e| e.to_string())?;
        debug!("Clipboard updated");
        Ok(())
    })
    .await
    .map_err(|e| e.to_string())?
}
