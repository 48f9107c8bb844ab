//! Free-form duration codec.
//!
//! Converts user input like `"25"`, `"4m30s"`, `"90s"` or `"12:30"` into
//! whole seconds. This is the validation boundary for durations: the timer
//! engine only ever receives the integer this module produces.

/// Durations above one hour are capped at 55 minutes.
pub const MAX_DURATION_SECS: u32 = 55 * 60;

/// Parse a duration string into whole seconds.
///
/// Accepted forms: `"M"` (minutes), `"M:SS"`, `"MM:SS"`, `"10s"`, `"5m"`,
/// `"4m30s"`. Whitespace around tokens is tolerated. The seconds component
/// of a compound form must be 0-59. Returns `None` for anything else.
/// Values above one hour cap at [`MAX_DURATION_SECS`].
pub fn parse(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let lower = trimmed.to_ascii_lowercase();

    let seconds = if let Some(stripped) = lower.strip_suffix('s') {
        if let Some((min_part, sec_part)) = stripped.split_once('m') {
            // "4m30s"
            let min: u32 = min_part.trim().parse().ok()?;
            let sec: u32 = sec_part.trim().parse().ok()?;
            if sec > 59 {
                return None;
            }
            min.checked_mul(60)?.checked_add(sec)?
        } else {
            // "90s"
            stripped.trim().parse().ok()?
        }
    } else if let Some(stripped) = lower.strip_suffix('m') {
        // "5m"
        let min: u32 = stripped.trim().parse().ok()?;
        min.checked_mul(60)?
    } else if let Some((min_part, sec_part)) = lower.split_once(':') {
        // "M:SS", ":30", "12:"
        let min: u32 = if min_part.trim().is_empty() {
            0
        } else {
            min_part.trim().parse().ok()?
        };
        let sec: u32 = if sec_part.trim().is_empty() {
            0
        } else {
            sec_part.trim().parse().ok()?
        };
        if sec > 59 {
            return None;
        }
        min.checked_mul(60)?.checked_add(sec)?
    } else {
        // Bare number means minutes.
        let min: u32 = lower.parse().ok()?;
        min.checked_mul(60)?
    };

    if seconds > 3600 {
        Some(MAX_DURATION_SECS)
    } else {
        Some(seconds)
    }
}

/// Format whole seconds as `"MM:SS"`.
pub fn format(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
