//! Small DOM side effects used by the conversation pane and composer.
//!
//! All functions are no-ops outside the browser.

/// Maximum auto-grow height of the composer textarea, in pixels.
pub const COMPOSER_MAX_HEIGHT_PX: i32 = 150;

/// Run `hljs.highlightAll()` when highlight.js is loaded on the page.
pub fn highlight_code_blocks() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let Ok(hljs) = js_sys::Reflect::get(&window, &"hljs".into()) else {
            return;
        };
        if hljs.is_undefined() {
            return;
        }
        let Ok(highlight_all) = js_sys::Reflect::get(&hljs, &"highlightAll".into()) else {
            return;
        };
        if let Some(func) = highlight_all.dyn_ref::<js_sys::Function>() {
            if let Err(e) = func.call0(&hljs) {
                log::warn!("highlight.js failed: {e:?}");
            }
        }
    }
}

/// Scroll an element to its bottom edge.
#[cfg(feature = "hydrate")]
pub fn scroll_to_bottom(el: &web_sys::Element, smooth: bool) {
    let opts = web_sys::ScrollToOptions::new();
    opts.set_top(f64::from(el.scroll_height()));
    opts.set_behavior(if smooth { web_sys::ScrollBehavior::Smooth } else { web_sys::ScrollBehavior::Auto });
    el.scroll_to_with_scroll_to_options(&opts);
}

/// Grow a textarea with its content, capped at [`COMPOSER_MAX_HEIGHT_PX`].
#[cfg(feature = "hydrate")]
pub fn auto_grow(textarea: &web_sys::HtmlTextAreaElement) {
    let style = textarea.style();
    let _ = style.set_property("height", "auto");
    let height = textarea.scroll_height().min(COMPOSER_MAX_HEIGHT_PX);
    let _ = style.set_property("height", &format!("{height}px"));
}

/// Reset a textarea to its natural height after the draft is cleared.
#[cfg(feature = "hydrate")]
pub fn reset_height(textarea: &web_sys::HtmlTextAreaElement) {
    let _ = textarea.style().set_property("height", "auto");
}
