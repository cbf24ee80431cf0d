//! Surebet alert parser.
//!
//! The alert is read as trimmed, non-empty lines in two phases:
//!
//! 1. **Header** - `Profit:`, `Sport:`, `League:`, `Event:` and `Start at :`
//!    labels. The first start-time line ends the phase.
//! 2. **Bookmakers** - a line ending in `:` opens a block, bullet lines fill
//!    it. Blocks are collected by [`BlockState`].
//!
//! Lines that match nothing are skipped; a missing field never fails the
//! parse.

mod block;
mod date;
mod line;

pub use block::{BlockEvent, BlockState};
pub use date::normalize_start_time;
pub use line::{Detail, LineKind, Phase};

use tracing::debug;

use crate::domain::{BookmakerEntry, SurebetRecord};
use crate::error::TransformError;

/// Parse an alert into its header and bookmaker legs, with stake shares
/// allocated. `year` is used to normalize the start time.
///
/// # Errors
///
/// Returns an error only if stake share computation overflows.
pub fn parse(text: &str, year: i32) -> Result<SurebetRecord, TransformError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut record = SurebetRecord::default();
    let body_start = parse_header(&lines, year, &mut record);
    record.bookmakers = parse_bookmakers(&lines[body_start..]);
    record.allocate_stakes()?;

    debug!(
        bookmakers = record.bookmakers.len(),
        start = record.start.as_deref().unwrap_or_default(),
        "Parsed surebet"
    );

    Ok(record)
}

/// Fill header fields and return the index of the first bookmaker-phase line.
///
/// Without a start-time line the bookmaker phase covers every line.
fn parse_header(lines: &[&str], year: i32, record: &mut SurebetRecord) -> usize {
    for (i, line) in lines.iter().enumerate() {
        match LineKind::classify(line, Phase::Header) {
            LineKind::Profit(v) => record.profit = Some(v.to_string()),
            LineKind::Sport(v) => record.sport = Some(v.to_string()),
            LineKind::League(v) => record.league = Some(v.to_string()),
            LineKind::Event(v) => record.event = Some(v.to_string()),
            LineKind::StartAt(raw) => {
                record.start = Some(normalize_start_time(raw, year));
                record.start_raw = Some(raw.to_string());
                return i + 1;
            }
            _ => {}
        }
    }

    debug!("No start time line, scanning whole alert for bookmakers");
    0
}

fn parse_bookmakers(lines: &[&str]) -> Vec<BookmakerEntry> {
    let mut state = BlockState::default();
    let mut finished = Vec::new();

    for line in lines {
        let event = match LineKind::classify(line, Phase::Bookmakers) {
            LineKind::BookmakerHeader(name) => BlockEvent::NewBookmaker(name),
            LineKind::BookmakerDetail(detail) => BlockEvent::Detail(detail),
            _ => continue,
        };
        state = state.step(event, &mut finished);
    }

    state.step(BlockEvent::EndOfInput, &mut finished);
    finished
}
