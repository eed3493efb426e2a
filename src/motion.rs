use web_sys::window;

// Fallback when no window is around, matches a common desktop width.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 1280.0;

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false)
}

pub fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|width| width.as_f64())
        .unwrap_or(DEFAULT_VIEWPORT_WIDTH)
}
