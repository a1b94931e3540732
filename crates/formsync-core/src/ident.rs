//! Identifier codec bridging the store's textual identifier and the
//! remote API's numeric identifier.

use crate::error::{CoreError, Result};

/// Parse the store's textual identifier into the remote API's numeric form.
///
/// # Errors
/// Returns `CoreError::IdParse` if the text is empty or not a base-10
/// integer.
pub fn parse_id(text: &str) -> Result<i64> {
    text.parse().map_err(|source| CoreError::IdParse {
        value: text.to_string(),
        source,
    })
}

/// Format a numeric identifier as the store's textual identifier.
///
/// Total inverse of [`parse_id`]; never fails.
#[must_use]
pub fn format_id(id: i64) -> String {
    id.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_id() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert_eq!(parse_id("0").unwrap(), 0);
        assert_eq!(parse_id("-7").unwrap(), -7);
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(matches!(parse_id(""), Err(CoreError::IdParse { .. })));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let err = parse_id("abc").unwrap_err();
        assert!(matches!(&err, CoreError::IdParse { value, .. } if value == "abc"));
        assert!(parse_id("42.5").is_err());
        assert!(parse_id("42 ").is_err());
    }

    #[test]
    fn test_format_round_trips() {
        assert_eq!(format_id(42), "42");
        assert_eq!(parse_id(&format_id(9_007_199_254_740_993)).unwrap(), 9_007_199_254_740_993);
    }
}
