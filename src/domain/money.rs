//! Monetary types for stake and share representation.

use rust_decimal::Decimal;

/// Stake amount represented as a Decimal for precision.
pub type Stake = Decimal;

/// Share of the total stake, in percent (0-100).
pub type Percent = Decimal;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn stake_and_percent_are_decimal() {
        let stake: Stake = dec!(35.62);
        let percent: Percent = dec!(64.38);

        assert_eq!(stake + percent, dec!(100.00));
    }
}
