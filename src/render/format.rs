//! Field formatting helpers for rendered notifications.

use rust_decimal::RoundingStrategy;

use crate::domain::Percent;

/// Region suffix carried by Spanish bookmaker accounts.
const REGION_SUFFIX: &str = "ES";

/// Market code abbreviations and the phrase each one reads as.
const MARKET_CODES: [(&str, &str); 2] = [("TO", "Total superior a "), ("TU", "Total inferior a ")];

/// `Bet365ES` reads as `Bet365 (ES)`; other names are unchanged.
pub fn display_name(name: &str) -> String {
    match name.strip_suffix(REGION_SUFFIX) {
        Some(prefix) => format!("{prefix} ({REGION_SUFFIX})"),
        None => name.to_string(),
    }
}

/// Spell out total over/under codes. Unknown codes are left as written.
pub fn translate_market(market: &str) -> String {
    MARKET_CODES
        .iter()
        .fold(market.to_string(), |text, (code, phrase)| {
            text.replace(code, phrase)
        })
}

/// Two decimals, half away from zero.
pub fn format_percent(percent: Percent) -> String {
    let rounded = percent.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
