use rand::Rng;
use rand::distributions::Alphanumeric;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Generate a random alphanumeric token for use as a client-side identifier.
///
/// Tokens only contain `[A-Za-z0-9]`, so `-` is free to act as a separator
/// when several tokens are joined into a composite key.
pub fn random_token(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Parse a user-entered decimal (price, weight).
///
/// Empty or non-numeric input yields `None`.
pub fn parse_decimal(input: &str) -> Option<Decimal> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Parse a user-entered integer quantity.
///
/// Empty or non-numeric input yields `None`.
pub fn parse_quantity(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_token_alphanumeric() {
        let token = random_token(12);
        assert_eq!(token.len(), 12);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(!token.contains('-'));
    }

    #[test]
    fn test_random_token_distinct() {
        assert_ne!(random_token(16), random_token(16));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("10.00"), Some(Decimal::new(1000, 2)));
        assert_eq!(parse_decimal(" 2.5 "), Some(Decimal::new(25, 1)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("   "), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("1,50"), None);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("12"), Some(12));
        assert_eq!(parse_quantity("-3"), Some(-3));
        assert_eq!(parse_quantity(""), None);
        assert_eq!(parse_quantity("1.5"), None);
        assert_eq!(parse_quantity("ten"), None);
    }
}
