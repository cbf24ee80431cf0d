//! The text-in, text-out boundary.
//!
//! [`Transformer::transform`] never fails: unrelated text comes back
//! untouched, surebet alerts come back rendered, and a pipeline fault comes
//! back as a diagnostic that still carries the original message.

use chrono::{Datelike, Local};
use tracing::{debug, info, warn};

use crate::domain::SurebetRecord;
use crate::error::{Error, Result, TransformError};
use crate::parser;
use crate::render::{self, Lookup};

/// Phrase that marks a message as a surebet alert.
pub const SUREBET_MARKER: &str = "New surebet found!";

/// Alert used by the `demo` command.
pub const EXAMPLE_ALERT: &str = "💰 New surebet found!
Profit: 6.87%
Sport: Basketball
League: USA. NCAA
Event: Cal Poly SLO - Idaho Vandals [Full time with overtimes]
Start at : 22 Dec 00:00 UTC

Bet365ES:
▫️TO(174.5) → 3.0
▫️Stake: 35.62 $ Place Bet (https://www.bet365.es/dl/sportsbookredirect/?bs=24544825-224963434~2/1&bet=1#/IP//AC/B18/C21097732/D19/E24544825/F19/)
LeovegasES:
▫️TU(174.5) → 1.66
▫️Stake: 64.38 $";

/// Whether `text` is a surebet alert.
#[must_use]
pub fn is_surebet(text: &str) -> bool {
    text.contains(SUREBET_MARKER)
}

/// Transform with the built-in lookup tables and the current year.
#[must_use]
pub fn transform(text: &str) -> String {
    Transformer::default().transform(text)
}

/// Parses and re-renders surebet alerts.
#[derive(Debug, Clone, Default)]
pub struct Transformer {
    lookup: Lookup,
    year: Option<i32>,
}

impl Transformer {
    #[must_use]
    pub fn new(lookup: Lookup) -> Self {
        Self { lookup, year: None }
    }

    /// Pin the year used to normalize start times instead of the current one.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    #[must_use]
    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    fn year(&self) -> i32 {
        self.year.unwrap_or_else(|| Local::now().year())
    }

    /// Render `text` if it is a surebet alert, otherwise return it unchanged.
    ///
    /// A fault while parsing or rendering yields
    /// `Error transforming message: ...` followed by the original text.
    #[must_use]
    pub fn transform(&self, text: &str) -> String {
        if !is_surebet(text) {
            debug!(len = text.len(), "Not a surebet alert, passing through");
            return text.to_string();
        }

        match self.try_transform(text) {
            Ok(rendered) => {
                info!(len = rendered.len(), "Surebet alert transformed");
                rendered
            }
            Err(e) => {
                warn!(error = %e, "Surebet alert could not be transformed");
                format!("Error transforming message: {e}\n\nOriginal Message:\n{text}")
            }
        }
    }

    /// Parse a surebet alert without rendering it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotSurebet`] for unrelated text, or a transform error
    /// if stake shares overflow.
    pub fn parse(&self, text: &str) -> Result<SurebetRecord> {
        if !is_surebet(text) {
            return Err(Error::NotSurebet);
        }
        Ok(parser::parse(text, self.year())?)
    }

    /// Parse and render without the guard or the error boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if stake shares overflow or rendering fails.
    pub fn try_transform(&self, text: &str) -> std::result::Result<String, TransformError> {
        let record = parser::parse(text, self.year())?;
        render::render(&record, &self.lookup)
    }
}
