//! Marker color format.

/// Length of a `#RRGGBB` color string.
pub const HEX_COLOR_LEN: usize = 7;

/// Check that `color` is exactly `#` followed by six hex digits (either case).
pub fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(digits) => {
            color.len() == HEX_COLOR_LEN && digits.bytes().all(|b| b.is_ascii_hexdigit())
        }
        None => false,
    }
}
