//! Human-readable byte-size formatting.

/// Convert a byte count to a human-readable string (powers of 1024).
///
/// `0` formats as `"0 B"`; everything else gets two decimals, e.g.
/// `1536` → `"1.50 KB"`. The loop bound is strictly greater-than, so
/// exactly 1024 stays in bytes.
pub fn format_bytes(size_bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    if size_bytes == 0 {
        return "0 B".to_string();
    }

    let mut size = size_bytes as f64;
    let mut unit = 0;
    while size > 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    format!("{size:.2} {}", UNITS[unit])
}
