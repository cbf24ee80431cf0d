//! Surebet relay - parse surebet alerts and re-render them as notifications.
//!
//! A surebet alert lists one arbitrage opportunity: a header (profit, sport,
//! league, event, start time) followed by one block per bookmaker (market,
//! odds, stake, link). This crate turns that alert into a Spanish-language
//! notification with stake shares, a `DD/MM HH:MM` start time, spelled-out
//! market codes and fallback bookmaker links.
//!
//! # Pipeline
//!
//! - **Guard** - [`transform::is_surebet`]; anything else passes through.
//! - **Parser** - [`parser::parse`] builds a [`domain::SurebetRecord`].
//! - **Renderer** - [`render::render`] writes the outgoing text.
//!
//! [`transform()`] wraps all three and always returns a string: on a
//! pipeline fault it returns a diagnostic that embeds the original message.
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Parsed alert types and stake share computation
//! - [`error`] - Error types for the crate
//! - [`parser`] - Line classification and bookmaker block collection
//! - [`render`] - Output formatting and lookup tables
//! - [`transform`] - Guard and error boundary
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```
//! use surebet_relay::transform;
//!
//! assert_eq!(transform("hello"), "hello");
//!
//! let alert = "New surebet found!\nProfit: 2.5%\nStart at : 22 Dec 00:00 UTC\n\
//!              Bet365ES:\n▫️TO(174.5) → 3.0\n▫️Stake: 40 $";
//! assert!(transform(alert).contains("Total superior a (174.5)"));
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod parser;
pub mod render;
pub mod transform;

pub use transform::{is_surebet, transform, Transformer};
