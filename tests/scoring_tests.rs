//! Column scoring through hands and the pure scoring functions.

use std::sync::Arc;

use dragon_crow::cards::{Card, CardData, CardId};
use dragon_crow::core::{Player, PlayerId, PlayerMap};
use dragon_crow::rules::{column_contribution, has_pair, score_values, GameOutcome};
use proptest::prelude::*;

fn revealed_player(values: &[i32]) -> Player {
    let mut player = Player::new(PlayerId::new(0), values.len());
    for (slot, &value) in values.iter().enumerate() {
        let data = Arc::new(CardData::dragon(value, "Dragon", "front"));
        player.deal_card(slot, Card::new(CardId::new(slot as u32), data)).unwrap();
    }
    player.reveal_all();
    player
}

/// Left column [3,3,5] cancels, right column [1,2,9] sums to 12.
#[test]
fn test_left_pair_cancels() {
    assert_eq!(revealed_player(&[3, 3, 5, 1, 2, 9]).calculate_score(), 12);
}

/// No pairs anywhere: plain sum.
#[test]
fn test_no_pairs_sums() {
    assert_eq!(revealed_player(&[1, 2, 3, 4, 5, 6]).calculate_score(), 21);
}

/// Equal values in different columns do not cancel.
#[test]
fn test_pair_split_across_columns() {
    assert_eq!(revealed_player(&[5, 1, 2, 5, 3, 4]).calculate_score(), 20);
}

/// Both columns can cancel at once.
#[test]
fn test_both_columns_cancel() {
    assert_eq!(revealed_player(&[11, 11, 10, -2, 8, -2]).calculate_score(), 0);
}

/// Crows score their value like any other card.
#[test]
fn test_crows_score_their_value() {
    assert_eq!(score_values(&[9, 10, 11, 0, 1, 2], 3), 33);
}

/// A negative column can pull a hand below zero.
#[test]
fn test_negative_score() {
    assert_eq!(score_values(&[-2, 0, 1, 4, 4, 6], 3), -1);
}

/// Smaller hands keep two columns.
#[test]
fn test_four_card_hand() {
    assert_eq!(revealed_player(&[2, 2, 3, 4]).calculate_score(), 7);
}

/// The first seat with the minimum wins a tie.
#[test]
fn test_tie_goes_to_first_seat() {
    let outcome = GameOutcome::from_scores(PlayerMap::new(4, |p| [7, 12, 7, 3][p.index()]));
    assert_eq!(outcome.winner, PlayerId::new(3));

    let tied = GameOutcome::from_scores(PlayerMap::new(4, |p| [5, 2, 9, 2][p.index()]));
    assert_eq!(tied.winner, PlayerId::new(1));
    assert!(!tied.is_winner(PlayerId::new(3)));
}

proptest! {
    /// A column with a repeated value is always worth zero.
    #[test]
    fn prop_pair_zeroes_column(a in -2i32..=11, b in -2i32..=11) {
        prop_assert_eq!(column_contribution(&[a, b, a]), 0);
        prop_assert!(has_pair(&[b, a, a]));
    }

    /// Without repeats a column is its sum.
    #[test]
    fn prop_distinct_column_sums(values in proptest::sample::subsequence((-2i32..=11).collect::<Vec<_>>(), 3)) {
        prop_assert!(!has_pair(&values));
        prop_assert_eq!(column_contribution(&values), values.iter().sum::<i32>());
    }

    /// Reordering cards within a column never changes the score.
    #[test]
    fn prop_order_within_column_irrelevant(
        left in proptest::collection::vec(-2i32..=11, 3),
        right in proptest::collection::vec(-2i32..=11, 3),
    ) {
        let mut hand: Vec<i32> = left.iter().chain(&right).copied().collect();
        let score = score_values(&hand, 3);
        hand[..3].reverse();
        hand[3..].rotate_left(1);
        prop_assert_eq!(score_values(&hand, 3), score);
    }

    /// Each column is bounded by the sum of its values or zero.
    #[test]
    fn prop_column_bounded(values in proptest::collection::vec(-2i32..=11, 3)) {
        let sum: i32 = values.iter().sum();
        let contribution = column_contribution(&values);
        prop_assert!(contribution == 0 || contribution == sum);
    }
}
