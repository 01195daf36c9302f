// =============================================================================
// Cloudora Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. Dialog Utilities
// =============================================================================

use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Smoothly scroll the element with the given id to the top of the viewport.
pub fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
    else {
        log::debug!("No section with id {:?} to scroll to", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Jump back to the top of the page.
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        win.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

// -----------------------------------------------------------------------------
// 2. Dialog Utilities
// -----------------------------------------------------------------------------

/// Ask the user a yes/no question with the browser's confirm dialog.
/// Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|win| win.confirm_with_message(message).ok())
        .unwrap_or(false)
}
