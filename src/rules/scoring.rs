//! Column scoring.
//!
//! A column is scored on its own: if any two of its values are equal the
//! column is worth zero, otherwise it is worth the sum of its values. A hand
//! is worth the sum of its columns.

/// Does any unordered pair of values match?
///
/// ```
/// use dragon_crow::rules::scoring::has_pair;
///
/// assert!(has_pair(&[3, 5, 3]));
/// assert!(!has_pair(&[1, 2, 9]));
/// ```
#[must_use]
pub fn has_pair(values: &[i32]) -> bool {
    values
        .iter()
        .enumerate()
        .any(|(i, value)| values[i + 1..].contains(value))
}

/// What one column adds to the score.
#[must_use]
pub fn column_contribution(values: &[i32]) -> i32 {
    if has_pair(values) {
        0
    } else {
        values.iter().sum()
    }
}

/// Score a full list of slot values split into columns of `column_len`.
///
/// ```
/// use dragon_crow::rules::scoring::score_values;
///
/// assert_eq!(score_values(&[3, 3, 5, 1, 2, 9], 3), 12);
/// assert_eq!(score_values(&[1, 2, 3, 4, 5, 6], 3), 21);
/// ```
#[must_use]
pub fn score_values(values: &[i32], column_len: usize) -> i32 {
    values
        .chunks(column_len.max(1))
        .map(column_contribution)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_pair() {
        assert!(!has_pair(&[]));
        assert!(!has_pair(&[4]));
        assert!(has_pair(&[4, 4]));
        assert!(has_pair(&[1, 2, 1]));
        assert!(has_pair(&[7, 7, 7]));
        assert!(!has_pair(&[-2, 0, 2]));
    }

    #[test]
    fn test_column_contribution() {
        assert_eq!(column_contribution(&[3, 3, 5]), 0);
        assert_eq!(column_contribution(&[1, 2, 9]), 12);
        assert_eq!(column_contribution(&[-2, 0, 1]), -1);
        assert_eq!(column_contribution(&[]), 0);
    }

    #[test]
    fn test_pair_of_negatives_cancels_the_bonus() {
        // Two -2s cancel like any other pair.
        assert_eq!(column_contribution(&[-2, -2, 8]), 0);
    }

    #[test]
    fn test_crows_score_by_value() {
        assert_eq!(score_values(&[9, 10, 11, 0, 0, 5], 3), 30);
    }
}
