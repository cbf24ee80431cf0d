//! Start-time normalization.

use chrono::NaiveDateTime;

const UTC_MARKER: &str = "UTC";
const INPUT_FORMAT: &str = "%d %b %H:%M %Y";
const OUTPUT_FORMAT: &str = "%d/%m %H:%M";

/// Reformat `22 Dec 00:00 UTC` as `22/12 00:00`, assuming `year`.
///
/// Alerts carry no year, so the caller supplies the one to parse against
/// (it matters for 29 Feb). Anything that does not parse is returned as-is.
#[must_use]
pub fn normalize_start_time(raw: &str, year: i32) -> String {
    let cleaned = raw.replace(UTC_MARKER, "");
    let with_year = format!("{} {year}", cleaned.trim());

    match NaiveDateTime::parse_from_str(&with_year, INPUT_FORMAT) {
        Ok(dt) => dt.format(OUTPUT_FORMAT).to_string(),
        Err(e) => {
            tracing::debug!(raw, error = %e, "Start time left unnormalized");
            raw.to_string()
        }
    }
}
