//! Expense submission types and the pure form parsers.

/// A fully parsed expense, ready to hand to the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub payer: String,
    pub amount: i64,
    pub participants: Vec<String>,
}

/// One account's net position as reported by the ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceEntry {
    pub principal: String,
    pub amount: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseFormError {
    /// The amount field did not parse as a whole number.
    AmountNotANumber,
}

/// Splits a raw participants string on "," and trims each element.
///
/// No uniqueness or non-emptiness filtering happens here: the result always
/// has one element per comma-separated segment, empty segments included.
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',').map(|p| p.trim().to_owned()).collect()
}

/// Parses the amount field as a whole number.
///
/// A failed parse is rejected with an explicit error before anything reaches
/// the ledger; there is no sentinel value.
pub fn parse_amount(raw: &str) -> Result<i64, ExpenseFormError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ExpenseFormError::AmountNotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn participants_count_is_commas_plus_one() {
        for raw in ["bob", "bob,carol", "bob, carol, dave", "a,,b", ",", ""] {
            let commas = raw.matches(',').count();
            assert_eq!(parse_participants(raw).len(), commas + 1, "input: {raw:?}");
        }
    }

    #[test]
    fn participants_are_trimmed() {
        let participants = parse_participants("  bob ,\tcarol , dave  ");

        assert_eq!(participants, vec!["bob", "carol", "dave"]);
        for p in &participants {
            assert_eq!(p, p.trim());
        }
    }

    #[test]
    fn empty_segments_are_kept_verbatim() {
        assert_eq!(parse_participants("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn parses_plain_amount() {
        assert_eq!(parse_amount("50"), Ok(50));
    }

    #[test]
    fn parses_amount_with_surrounding_whitespace() {
        assert_eq!(parse_amount("  42 "), Ok(42));
    }

    #[test]
    fn parses_negative_amount() {
        assert_eq!(parse_amount("-5"), Ok(-5));
    }

    #[test]
    fn rejects_non_numeric_amount_without_panicking() {
        assert_eq!(parse_amount("abc"), Err(ExpenseFormError::AmountNotANumber));
        assert_eq!(parse_amount(""), Err(ExpenseFormError::AmountNotANumber));
        assert_eq!(parse_amount("1.5"), Err(ExpenseFormError::AmountNotANumber));
    }
}
