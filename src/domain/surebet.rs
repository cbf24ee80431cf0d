//! Parsed surebet alert.
//!
//! A [`SurebetRecord`] is the header of one alert plus the bookmaker legs in
//! the order they appeared. Every header field is optional: lines that never
//! showed up in the source simply stay `None`.

use serde::Serialize;

use super::money::{Percent, Stake};
use super::stake::stake_shares;
use crate::error::TransformError;

/// One bookmaker leg of a surebet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BookmakerEntry {
    /// Bookmaker identifier as written in the alert, e.g. `Bet365ES`.
    pub name: String,
    /// Raw market code, e.g. `TO(174.5)`.
    pub market: String,
    /// Odds as written, usually decimal.
    pub odds: String,
    /// Stake in the alert's currency, `None` when missing or unparseable.
    pub stake: Option<Stake>,
    /// Bet link from the alert, if any.
    pub link: Option<String>,
    /// Share of the total stake. Filled once all legs are known.
    pub percent: Option<Percent>,
}

impl BookmakerEntry {
    /// Start an entry for the named bookmaker with no details yet.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Share of the total stake, zero when it was never allocated.
    #[must_use]
    pub fn percent_or_zero(&self) -> Percent {
        self.percent.unwrap_or(Percent::ZERO)
    }
}

/// Header fields and bookmaker legs of one surebet alert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SurebetRecord {
    /// Profit margin as written, without the `%` sign.
    pub profit: Option<String>,
    pub sport: Option<String>,
    pub league: Option<String>,
    pub event: Option<String>,
    /// Start time exactly as it appeared, e.g. `22 Dec 00:00 UTC`.
    pub start_raw: Option<String>,
    /// Start time as `DD/MM HH:MM`, or the raw text when it did not parse.
    pub start: Option<String>,
    pub bookmakers: Vec<BookmakerEntry>,
}

impl SurebetRecord {
    /// Fill every leg's `percent` from its share of the summed stakes.
    ///
    /// # Errors
    ///
    /// Returns an error if the stake total or a share overflows `Decimal`.
    pub fn allocate_stakes(&mut self) -> Result<(), TransformError> {
        let shares = stake_shares(&self.bookmakers)?;
        for (entry, share) in self.bookmakers.iter_mut().zip(shares) {
            entry.percent = Some(share);
        }
        Ok(())
    }

    /// Sum of the allocated shares across all legs.
    #[must_use]
    pub fn total_percent(&self) -> Percent {
        self.bookmakers
            .iter()
            .map(BookmakerEntry::percent_or_zero)
            .sum()
    }
}
