//! Blocking browser dialogs and page reload.

/// Show an alert. Failures (no window) are logged.
pub fn alert(message: &str) {
    let shown = web_sys::window().map(|w| w.alert_with_message(message));
    if !matches!(shown, Some(Ok(()))) {
        log::warn!("alert not shown: {message}");
    }
}

/// Ask for confirmation. Anything but an explicit OK is a no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Reload the page, the primary way to resync with the server.
pub fn reload() {
    let reloaded = web_sys::window().map(|w| w.location().reload());
    if !matches!(reloaded, Some(Ok(()))) {
        log::warn!("page reload failed");
    }
}
