/// Parse a computed CSS length such as `"320px"`.
pub fn css_px(value: &str) -> Option<f64> {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Container length in CSS pixels. Unreadable values such as `auto` count as 0.
pub fn container_length(prop: &str, raw: &str) -> f64 {
    css_px(raw).unwrap_or_else(|| {
        log::warn!("container {prop} is {raw:?}, treating it as 0");
        0.0
    })
}
