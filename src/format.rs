use std::time::Duration;

pub const GIB: u64 = 1024 * 1024 * 1024;
pub const MIB: u64 = 1024 * 1024;

const ELLIPSIS: &str = "...";

/// Number of glyphs in `s`. Every Unicode scalar value counts as one cell.
pub fn glyph_len(s: &str) -> usize {
    s.chars().count()
}

/// Shorten `s` to at most `max_width` glyphs. Lines that do not fit end in
/// `"..."` when there is room for at least one glyph before it.
pub fn truncate_with_ellipsis(s: &str, max_width: usize) -> String {
    if glyph_len(s) <= max_width {
        return s.to_string();
    }
    if max_width < ELLIPSIS.len() + 1 {
        return s.chars().take(max_width).collect();
    }
    let mut result: String = s.chars().take(max_width - ELLIPSIS.len()).collect();
    result.push_str(ELLIPSIS);
    result
}

pub fn bytes_to_gib(bytes: u64) -> u64 {
    bytes / GIB
}

pub fn bytes_to_mib(bytes: u64) -> f64 {
    bytes as f64 / MIB as f64
}

/// `part / whole * 100`, or 0 when `whole` is zero.
pub fn percent(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { part / whole * 100.0 } else { 0.0 }
}

pub fn format_uptime(uptime: Duration) -> String {
    humantime::format_duration(Duration::from_secs(uptime.as_secs())).to_string()
}
