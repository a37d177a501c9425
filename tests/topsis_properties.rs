//! Property tests for the ranking engine.

use proptest::prelude::*;

use topsis_ranker::domain::analysis::{DecisionMatrix, Impact, TopsisEngine};

/// Strictly positive cell values keep every column norm non-zero, so the
/// engine never reports a degenerate column for generated inputs.
fn arb_case() -> impl Strategy<Value = (Vec<Vec<f64>>, Vec<f64>, Vec<Impact>)> {
    (1usize..8, 2usize..6).prop_flat_map(|(rows, cols)| {
        (
            prop::collection::vec(prop::collection::vec(0.1f64..100.0, cols), rows),
            prop::collection::vec(0.0f64..10.0, cols),
            prop::collection::vec(
                any::<bool>().prop_map(|b| if b { Impact::Benefit } else { Impact::Cost }),
                cols,
            ),
        )
    })
}

proptest! {
    #[test]
    fn ranks_are_a_permutation((rows, weights, impacts) in arb_case()) {
        let n = rows.len();
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let ranking = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        let mut ranks = ranking.ranks.clone();
        ranks.sort_unstable();
        prop_assert_eq!(ranks, (1..=n).collect::<Vec<_>>());
    }

    #[test]
    fn scores_are_bounded((rows, weights, impacts) in arb_case()) {
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let ranking = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        for &score in &ranking.scores {
            prop_assert!((0.0..=1.0).contains(&score), "score {} out of range", score);
        }
    }

    #[test]
    fn ranks_agree_with_scores((rows, weights, impacts) in arb_case()) {
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let ranking = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        // A better (lower) rank never has a lower score, and the rank-1 row
        // holds the maximum score.
        for i in 0..ranking.ranks.len() {
            for j in 0..ranking.ranks.len() {
                if ranking.ranks[i] < ranking.ranks[j] {
                    prop_assert!(ranking.scores[i] >= ranking.scores[j]);
                }
            }
        }
    }

    #[test]
    fn evaluation_is_deterministic((rows, weights, impacts) in arb_case()) {
        let matrix = DecisionMatrix::from_rows(rows).unwrap();
        let a = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();
        let b = TopsisEngine::evaluate(&matrix, &weights, &impacts).unwrap();

        prop_assert_eq!(a.scores, b.scores);
        prop_assert_eq!(a.ranks, b.ranks);
    }

    #[test]
    fn column_scale_does_not_change_scores(
        (rows, weights, impacts) in arb_case(),
        column_seed in any::<usize>(),
        factor in 0.1f64..10.0,
    ) {
        let cols = rows[0].len();
        let column = column_seed % cols;

        let mut scaled_rows = rows.clone();
        for row in &mut scaled_rows {
            row[column] *= factor;
        }

        let base = DecisionMatrix::from_rows(rows).unwrap();
        let scaled = DecisionMatrix::from_rows(scaled_rows).unwrap();

        let a = TopsisEngine::evaluate(&base, &weights, &impacts).unwrap();
        let b = TopsisEngine::evaluate(&scaled, &weights, &impacts).unwrap();

        for (x, y) in a.scores.iter().zip(&b.scores) {
            prop_assert!((x - y).abs() < 1e-6, "scores diverged: {} vs {}", x, y);
        }
    }
}
