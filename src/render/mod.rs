//! Notification rendering.
//!
//! Turns a parsed [`SurebetRecord`] into the outgoing alert: a fixed header,
//! the profit line, sport/date/event, then one section per bookmaker in the
//! order they were parsed.

mod format;
mod lookup;

pub use format::{display_name, format_percent, translate_market};
pub use lookup::Lookup;

use std::fmt::Write;

use crate::domain::SurebetRecord;
use crate::error::TransformError;

const TITLE: &str = "📢 ALERTA DE SUREBETS (SIN RIESGO)";
const BANNER: &str = "1️⃣ 🔥 -- SURESTABERA -- 🔥";

/// Render a parsed alert. Stake shares must already be allocated.
///
/// # Errors
///
/// Returns an error if writing to the output buffer fails.
pub fn render(record: &SurebetRecord, lookup: &Lookup) -> Result<String, TransformError> {
    let mut out = String::new();
    let sport = record.sport.as_deref().unwrap_or_default();

    writeln!(out, "{TITLE}")?;
    writeln!(out)?;
    writeln!(out, "{BANNER}")?;
    writeln!(
        out,
        "📈 PROFIT: {}%",
        record.profit.as_deref().unwrap_or_default()
    )?;
    writeln!(out)?;
    writeln!(out, "⚽️ Deporte: {}", lookup.sport(sport))?;
    writeln!(
        out,
        "📆 Fecha: {}",
        record.start.as_deref().unwrap_or_default()
    )?;
    writeln!(
        out,
        "🏆 Partido: {}",
        record.event.as_deref().unwrap_or_default()
    )?;

    for (idx, bookmaker) in record.bookmakers.iter().enumerate() {
        writeln!(out)?;
        writeln!(
            out,
            "🏦 Casa {}: {} ({})",
            idx + 1,
            display_name(&bookmaker.name),
            lookup.link(&bookmaker.name, bookmaker.link.as_deref())
        )?;
        writeln!(out, "   🎯 Mercado: {}", translate_market(&bookmaker.market))?;
        writeln!(out, "   📊 Cuota: {}", bookmaker.odds)?;
        writeln!(
            out,
            "   💰 % Stake: {}%",
            format_percent(bookmaker.percent_or_zero())
        )?;
    }

    let len = out.trim_end().len();
    out.truncate(len);
    Ok(out)
}
