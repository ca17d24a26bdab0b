//! Render-time clock for message timestamps.
//!
//! Timestamps come from the viewer's clock at receipt and are cosmetic
//! only; nothing orders or persists on them. Local formatting requires a
//! browser environment; host builds fall back to a UTC wall-clock label
//! so callers stay testable.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Milliseconds since the Unix epoch from the browser clock.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Wall-clock label for a timestamp, in the viewer's locale when a
/// browser is present.
#[must_use]
pub fn wall_clock_label(ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        utc_wall_clock(ms)
    }
}

/// "HH:MM:SS" within the UTC day for a millisecond timestamp.
///
/// Non-finite and pre-epoch values clamp to midnight.
#[cfg(any(test, not(feature = "csr")))]
pub(crate) fn utc_wall_clock(ms: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_seconds = if ms.is_finite() && ms > 0.0 {
        (ms / 1000.0) as u64
    } else {
        0
    };
    let seconds_of_day = total_seconds % 86_400;
    let hours = seconds_of_day / 3600;
    let minutes = (seconds_of_day % 3600) / 60;
    let seconds = seconds_of_day % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
