//! Bookmaker block accumulation.
//!
//! A block is open from its header line until the next header or the end of
//! input. Closing a block is the transition itself, so the last block is
//! always emitted.

use super::line::Detail;
use crate::domain::BookmakerEntry;

/// Input to the block state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockEvent<'a> {
    /// A `Name:` line.
    NewBookmaker(&'a str),
    /// A bullet line with market/odds or stake/link.
    Detail(Detail<'a>),
    /// No more lines.
    EndOfInput,
}

/// Whether a bookmaker block is currently being filled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum BlockState {
    #[default]
    NoOpenBlock,
    OpenBlock(BookmakerEntry),
}

impl BlockState {
    /// Apply one event, pushing any block it closes onto `finished`.
    pub fn step(self, event: BlockEvent<'_>, finished: &mut Vec<BookmakerEntry>) -> Self {
        match (self, event) {
            (Self::NoOpenBlock, BlockEvent::NewBookmaker(name)) => {
                Self::OpenBlock(BookmakerEntry::new(name))
            }
            (Self::OpenBlock(entry), BlockEvent::NewBookmaker(name)) => {
                close(entry, finished);
                Self::OpenBlock(BookmakerEntry::new(name))
            }
            (Self::OpenBlock(mut entry), BlockEvent::Detail(detail)) => {
                apply_detail(&mut entry, detail);
                Self::OpenBlock(entry)
            }
            (Self::OpenBlock(entry), BlockEvent::EndOfInput) => {
                close(entry, finished);
                Self::NoOpenBlock
            }
            (Self::NoOpenBlock, BlockEvent::Detail(_) | BlockEvent::EndOfInput) => {
                Self::NoOpenBlock
            }
        }
    }
}

fn close(entry: BookmakerEntry, finished: &mut Vec<BookmakerEntry>) {
    tracing::debug!(
        bookmaker = %entry.name,
        market = %entry.market,
        odds = %entry.odds,
        has_stake = entry.stake.is_some(),
        "Bookmaker block closed"
    );
    finished.push(entry);
}

fn apply_detail(entry: &mut BookmakerEntry, detail: Detail<'_>) {
    match detail {
        Detail::Market { market, odds } => {
            entry.market = market.to_string();
            entry.odds = odds.to_string();
        }
        Detail::Stake { stake, link } => {
            if stake.is_some() {
                entry.stake = stake;
            }
            if let Some(link) = link {
                entry.link = Some(link.to_string());
            }
        }
    }
}
