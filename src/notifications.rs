//! Desktop notification shim.
//!
//! Sends a platform notification on successful submission when enabled in
//! config. On platforms without a supported backend the event is only logged.

use anyhow::Result;

#[cfg(target_os = "macos")]
pub fn send(title: &str, message: &str, sound: bool) -> Result<()> {
    use mac_notification_sys::Notification;

    let mut notification = Notification::new();
    notification.title(title).message(message);
    if sound {
        notification.sound("default");
    }
    // The response is not interesting for a fire-and-forget toast
    let _ = notification.send();
    Ok(())
}

#[cfg(target_os = "linux")]
pub fn send(title: &str, message: &str, _sound: bool) -> Result<()> {
    use notify_rust::Notification;

    Notification::new()
        .summary(title)
        .body(message)
        .appname("enroll")
        .show()?;
    Ok(())
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
pub fn send(title: &str, message: &str, _sound: bool) -> Result<()> {
    tracing::info!("Notification: {} - {}", title, message);
    Ok(())
}
