//! Free-text decimal parsing boundary.
//!
//! Editable matrix/vector cells accept loose user input: either `,` or `.`
//! as the decimal separator, surrounding whitespace, and arbitrary garbage.
//! That leniency stays here, at the boundary; the numeric core only ever
//! sees [`Decimal`] values.

use rust_decimal::Decimal;

use crate::error::{InfluenceError, Result};

/// Parse a free-text cell value.
///
/// Accepts comma or period as the decimal separator. Unparseable input
/// yields zero; an editable cell that fails to parse reads back as an empty
/// influence rather than poisoning the computation. Callers that need a
/// hard failure use [`parse_decimal`] instead.
pub fn parse_cell(raw: &str) -> Decimal {
    parse_decimal(raw).unwrap_or(Decimal::ZERO)
}

/// Parse a decimal value strictly.
///
/// Same separator handling as [`parse_cell`], but unparseable input is an
/// [`InfluenceError::InvalidDecimal`]. Used by import paths where a bad
/// value must surface instead of being coerced.
pub fn parse_decimal(raw: &str) -> Result<Decimal> {
    let normalized = raw.trim().replace(',', ".");
    normalized
        .parse::<Decimal>()
        .map_err(|_| InfluenceError::invalid_decimal(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_cell_period_separator() {
        assert_eq!(parse_cell("0.25"), dec!(0.25));
        assert_eq!(parse_cell("-1.5"), dec!(-1.5));
    }

    #[test]
    fn test_parse_cell_comma_separator() {
        assert_eq!(parse_cell("0,25"), dec!(0.25));
        assert_eq!(parse_cell(" -3,75 "), dec!(-3.75));
    }

    #[test]
    fn test_parse_cell_defaults_to_zero() {
        assert_eq!(parse_cell(""), Decimal::ZERO);
        assert_eq!(parse_cell("abc"), Decimal::ZERO);
        assert_eq!(parse_cell("1.2.3"), Decimal::ZERO);
    }

    #[test]
    fn test_parse_decimal_strict_failure() {
        let err = parse_decimal("n/a").unwrap_err();
        assert_eq!(
            err,
            InfluenceError::InvalidDecimal {
                raw: "n/a".to_string()
            }
        );
    }

    #[test]
    fn test_parse_decimal_integer() {
        assert_eq!(parse_decimal("2").unwrap(), dec!(2));
    }
}
