//! Wall-clock access.
//!
//! Browser builds read `Date.now()`; native builds (SSR, tests) use the
//! system clock. Both return milliseconds since the Unix epoch.

/// Current time in milliseconds since the Unix epoch.
pub fn now_millis() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        #[allow(clippy::cast_precision_loss)]
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_millis() as f64)
    }
}
