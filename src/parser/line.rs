//! Line classification.
//!
//! Each trimmed line is tagged once with the first pattern it matches for the
//! current phase. Header labels are only looked for before the start-time
//! line; bookmaker headers and bullet details only after it.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::Stake;

/// Bullet that opens every bookmaker detail line.
const BULLET: char = '▫';
/// Emoji presentation selector that usually trails the bullet.
const VARIATION_SELECTOR: char = '\u{FE0F}';
/// Separator between market code and odds.
const ARROW: char = '→';
const STAKE_LABEL: &str = "Stake:";

lazy_static! {
    static ref PROFIT_RE: Regex = Regex::new(r"Profit:\s*([\d.]+)%").unwrap();
    static ref SPORT_RE: Regex = Regex::new(r"Sport:\s*(.+)").unwrap();
    static ref LEAGUE_RE: Regex = Regex::new(r"League:\s*(.+)").unwrap();
    static ref EVENT_RE: Regex = Regex::new(r"Event:\s*(.+)").unwrap();
    static ref START_RE: Regex = Regex::new(r"Start at\s*:\s*(.+)").unwrap();
    static ref STAKE_RE: Regex = Regex::new(r"Stake:\s*([\d.]+)\s*\$").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\((http.+)\)").unwrap();
}

/// Which part of the alert is being scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Before (and including) the start-time line.
    Header,
    /// Everything after the start-time line.
    Bookmakers,
}

/// Content of a bullet line inside a bookmaker block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Detail<'a> {
    /// `TO(174.5) → 3.0`
    Market { market: &'a str, odds: &'a str },
    /// `Stake: 35.62 $ Place Bet (https://...)`
    Stake {
        stake: Option<Stake>,
        link: Option<&'a str>,
    },
}

/// A line tagged with the first pattern it matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Profit(&'a str),
    Sport(&'a str),
    League(&'a str),
    Event(&'a str),
    StartAt(&'a str),
    BookmakerHeader(&'a str),
    BookmakerDetail(Detail<'a>),
    Unrecognized,
}

impl<'a> LineKind<'a> {
    /// Tag a trimmed line for the given phase.
    #[must_use]
    pub fn classify(line: &'a str, phase: Phase) -> Self {
        match phase {
            Phase::Header => Self::classify_header(line),
            Phase::Bookmakers => Self::classify_bookmaker(line),
        }
    }

    fn classify_header(line: &'a str) -> Self {
        let labels: [(&Regex, fn(&'a str) -> Self); 5] = [
            (&*PROFIT_RE, Self::Profit),
            (&*SPORT_RE, Self::Sport),
            (&*LEAGUE_RE, Self::League),
            (&*EVENT_RE, Self::Event),
            (&*START_RE, Self::StartAt),
        ];

        labels
            .iter()
            .find_map(|(re, tag)| capture(re, line).map(*tag))
            .unwrap_or(Self::Unrecognized)
    }

    fn classify_bookmaker(line: &'a str) -> Self {
        if let Some(name) = line.strip_suffix(':') {
            return Self::BookmakerHeader(name);
        }

        let Some(content) = strip_bullet(line) else {
            return Self::Unrecognized;
        };

        if let Some((market, odds)) = content.split_once(ARROW) {
            return Self::BookmakerDetail(Detail::Market {
                market: market.trim(),
                odds: odds.trim(),
            });
        }

        if content.contains(STAKE_LABEL) {
            let stake = capture(&STAKE_RE, content).and_then(|raw| Decimal::from_str(raw).ok());
            let link = capture(&LINK_RE, content);
            return Self::BookmakerDetail(Detail::Stake { stake, link });
        }

        Self::Unrecognized
    }
}

/// First capture group of `re` in `line`.
fn capture<'a>(re: &Regex, line: &'a str) -> Option<&'a str> {
    re.captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Line content after the bullet marker, or `None` if the line has no bullet.
fn strip_bullet(line: &str) -> Option<&str> {
    line.strip_prefix(BULLET)
        .map(|rest| rest.trim_start_matches(VARIATION_SELECTOR).trim())
}
