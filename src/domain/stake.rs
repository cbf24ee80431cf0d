//! Stake share computation.

use rust_decimal::Decimal;

use super::money::Percent;
use super::surebet::BookmakerEntry;
use crate::error::TransformError;

/// Share of the summed stakes held by each entry, in percent and entry order.
///
/// Entries without a numeric stake get zero. When the total is zero every
/// share is zero.
///
/// # Errors
///
/// Returns an error if the total or a share overflows `Decimal`.
pub fn stake_shares(entries: &[BookmakerEntry]) -> Result<Vec<Percent>, TransformError> {
    let mut total = Decimal::ZERO;
    for entry in entries {
        if let Some(stake) = entry.stake {
            total = total
                .checked_add(stake)
                .ok_or_else(|| TransformError::StakeOverflow {
                    bookmaker: entry.name.clone(),
                })?;
        }
    }

    if total <= Decimal::ZERO {
        return Ok(vec![Percent::ZERO; entries.len()]);
    }

    entries
        .iter()
        .map(|entry| match entry.stake {
            Some(stake) => stake
                .checked_div(total)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(|| TransformError::PercentOverflow {
                    bookmaker: entry.name.clone(),
                }),
            None => Ok(Percent::ZERO),
        })
        .collect()
}
