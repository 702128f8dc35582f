//! Chat-history popup window helpers.
//!
//! Conversation review happens in a separate small browser window so the
//! operator keeps the report table in view. Geometry is computed from the
//! physical screen size so the popup lands centered regardless of how the
//! admin window itself is positioned.

#[cfg(test)]
#[path = "popup_test.rs"]
mod popup_test;

const POPUP_WIDTH: f64 = 480.0;
const POPUP_HEIGHT: f64 = 800.0;

/// Build the `window.open` feature string for a popup centered on a
/// screen of the given dimensions.
pub fn popup_features(screen_width: f64, screen_height: f64) -> String {
    let left = screen_width / 2.0 - POPUP_WIDTH / 2.0;
    let top = screen_height / 2.0 - POPUP_HEIGHT / 2.0;
    format!("width={POPUP_WIDTH},height={POPUP_HEIGHT},top={top},left={left}")
}

/// Popup target for a user's chat history.
pub fn chat_popup_url(user_sid: &str) -> String {
    format!("/chat?userSid={user_sid}")
}

/// Open the chat-history popup for a user. Browser-only; no-op under SSR.
pub fn open_chat_popup(user_sid: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let (width, height) = window.screen().map_or((0.0, 0.0), |screen| {
            (
                screen.width().map_or(0.0, f64::from),
                screen.height().map_or(0.0, f64::from),
            )
        });
        let _ = window.open_with_url_and_target_and_features(
            &chat_popup_url(user_sid),
            "_blank",
            &popup_features(width, height),
        );
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_sid;
    }
}
