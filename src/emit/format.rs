//! Number formatting shared by the text and SVG emitters.

/// Format with exactly one fractional digit, ties rounded away from zero (`0.25 -> "0.3"`).
///
/// Plain `{:.1}` would print `0.2` for `0.25`.
pub fn fmt1(v: f64) -> String {
    // -0.0 + 0.0 == 0.0
    let scaled = (v * 10.0).round() / 10.0 + 0.0;
    format!("{scaled:.1}")
}

/// Round half away from zero to an integer attribute value.
pub fn round_i64(v: f64) -> i64 {
    v.round() as i64
}

/// `(x,y)` with one decimal per component.
pub fn fmt_pair(x: f64, y: f64) -> String {
    format!("({},{})", fmt1(x), fmt1(y))
}

/// Escape `&`, `<`, `>` and `"` for use inside a double-quoted XML attribute.
pub fn escape_attr(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/emit/format.rs"]
mod tests;
