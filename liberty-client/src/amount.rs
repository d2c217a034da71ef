use std::fmt;

use alloy_primitives::utils::{format_ether, parse_ether};
use alloy_primitives::U256;

/// Decimals of the native unit, amounts are entered in ether and sent in wei
pub const DECIMALS: u8 = 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    Negative,
    Invalid(String),
}

impl fmt::Display for AmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "Amount cannot be negative"),
            Self::Invalid(e) => write!(f, "Invalid amount: {e}"),
        }
    }
}

impl std::error::Error for AmountError {}

/// Converts a user entered decimal string into the smallest unit.
pub fn parse_amount(input: &str) -> Result<U256, AmountError> {
    let trimmed = input.trim();
    if trimmed.starts_with('-') {
        return Err(AmountError::Negative);
    }

    parse_ether(trimmed).map_err(|e| AmountError::Invalid(e.to_string()))
}

/// Formats smallest units back into a decimal string without trailing zeros.
pub fn format_amount(value: U256) -> String {
    let formatted = format_ether(value);
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            let fraction = fraction.trim_end_matches('0');
            if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{whole}.{fraction}")
            }
        }
        None => formatted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fractional_amount() {
        let wei = parse_amount("1.5").unwrap();
        assert_eq!(wei, U256::from(1_500_000_000_000_000_000u128));
        assert_eq!(format_amount(wei), "1.5");
    }

    #[test]
    fn test_parse_whole_amount() {
        let wei = parse_amount(" 2 ").unwrap();
        assert_eq!(wei, U256::from(2u64) * U256::from(10u64).pow(U256::from(DECIMALS)));
        assert_eq!(format_amount(wei), "2");
    }

    #[test]
    fn test_format_single_wei() {
        assert_eq!(format_amount(U256::from(1u64)), "0.000000000000000001");
        assert_eq!(format_amount(U256::ZERO), "0");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_amount("abc"), Err(AmountError::Invalid(_))));
        assert!(matches!(parse_amount(""), Err(AmountError::Invalid(_))));
        assert_eq!(parse_amount("-1"), Err(AmountError::Negative));
    }
}
