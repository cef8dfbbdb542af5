//! Size formatting utilities.
//!
//! Sizes are printed either as a raw byte count (`"1234B"`) or scaled by
//! powers of 1024 to the largest fitting unit with one decimal digit
//! (`"1.2MB"`).

/// Unit suffixes in ascending order; each step is a factor of 1024.
const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

/// Format a byte count for display.
///
/// # Arguments
///
/// * `size` - The size in bytes
/// * `human` - Scale to the largest unit keeping the value at or above 1
///
/// # Returns
///
/// Without `human`, the decimal byte count followed by `B`. With `human`,
/// values under 1024 are still printed as whole bytes; larger values are
/// divided by 1024 until they fall under 1024 (stopping at `EB`) and printed
/// with exactly one decimal digit.
///
/// # Examples
///
/// ```
/// # use path_size::format_size;
/// assert_eq!(format_size(1024, false), "1024B");
/// assert_eq!(format_size(1024, true), "1.0KB");
/// assert_eq!(format_size(1_234_567, true), "1.2MB");
/// ```
#[must_use]
pub fn format_size(size: u64, human: bool) -> String {
    if !human {
        return format!("{size}B");
    }

    #[allow(clippy::cast_precision_loss)]
    let mut value = size as f64;
    let mut unit = 0;

    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        return format!("{size}{}", UNITS[0]);
    }

    format!("{value:.1}{}", UNITS[unit])
}
