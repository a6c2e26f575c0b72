// Accessibility helpers

/// Element id of the polite live region rendered by the app shell.
pub const STATUS_REGION_ID: &str = "store-status";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus-visible{outline:3px solid #7c3aed;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Announces cart and filter changes to assistive technology. Outside the
/// browser this only logs the message.
pub fn set_status(msg: &str) {
    log::debug!("status: {msg}");
    #[cfg(target_arch = "wasm32")]
    if let Some(node) = crate::dom::document().get_element_by_id(STATUS_REGION_ID) {
        node.set_text_content(Some(msg));
    }
}
