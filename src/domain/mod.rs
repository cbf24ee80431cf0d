//! Surebet domain types: the parsed alert and its bookmaker legs.

mod money;
mod stake;
mod surebet;

pub use money::{Percent, Stake};
pub use stake::stake_shares;
pub use surebet::{BookmakerEntry, SurebetRecord};
