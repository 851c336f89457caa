//! Theme application on the document.
//!
//! Sets `data-theme="dark|light"` on `<body>`. The persisted flag lives in
//! [`Preferences`](crate::state::prefs::Preferences); this module only reads
//! the system fallback and touches the DOM. Requires a browser environment.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Attribute value for the given mode.
#[must_use]
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Toggle icon class: a sun offers the way back to light mode, a moon to dark.
#[must_use]
pub fn toggle_icon(enabled: bool) -> &'static str {
    if enabled { "fas fa-sun" } else { "fas fa-moon" }
}

/// Whether the system prefers a dark color scheme.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the theme attribute to `<body>`.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
