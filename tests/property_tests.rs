//! Property-based tests for accuracy metric invariants.
//!
//! These verify relationships that must hold for all valid inputs,
//! using randomly generated actual/predicted pairs.

use energycast::evaluation::accuracy;
use energycast::evaluation::metrics::{mae, rmse};
use proptest::prelude::*;

/// Strategy for a pair of equal-length value vectors with strictly
/// positive actuals (keeps MAPE well-defined).
fn aligned_pairs(max_len: usize) -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1..max_len).prop_flat_map(|len| {
        (
            prop::collection::vec(1.0..1000.0_f64, len),
            prop::collection::vec(-1000.0..1000.0_f64, len),
        )
    })
}

proptest! {
    #[test]
    fn metrics_are_non_negative((actual, predicted) in aligned_pairs(64)) {
        let metrics = accuracy(&actual, &predicted).unwrap();

        prop_assert!(metrics.mae >= 0.0);
        prop_assert!(metrics.rmse >= 0.0);
        prop_assert!(metrics.mape >= 0.0);
        prop_assert!(metrics.mae.is_finite());
        prop_assert!(metrics.rmse.is_finite());
        prop_assert!(metrics.mape.is_finite());
    }

    #[test]
    fn rmse_dominates_mae((actual, predicted) in aligned_pairs(64)) {
        let metrics = accuracy(&actual, &predicted).unwrap();

        // Root-mean-square dominates the mean of absolute values;
        // equality holds for constant error vectors.
        prop_assert!(metrics.rmse + 1e-9 >= metrics.mae);
    }

    #[test]
    fn perfect_prediction_scores_zero(actual in prop::collection::vec(1.0..1000.0_f64, 1..64)) {
        let metrics = accuracy(&actual, &actual).unwrap();

        prop_assert!(metrics.mae.abs() < 1e-10);
        prop_assert!(metrics.rmse.abs() < 1e-10);
        prop_assert!(metrics.mape.abs() < 1e-10);
    }

    #[test]
    fn metrics_are_symmetric_in_error_sign(
        actual in prop::collection::vec(100.0..1000.0_f64, 1..64),
        offset in 0.1..50.0_f64,
    ) {
        // Over- and under-prediction by the same offset score the same
        // MAE and RMSE.
        let over: Vec<f64> = actual.iter().map(|a| a + offset).collect();
        let under: Vec<f64> = actual.iter().map(|a| a - offset).collect();

        let m_over = accuracy(&actual, &over).unwrap();
        let m_under = accuracy(&actual, &under).unwrap();

        prop_assert!((m_over.mae - m_under.mae).abs() < 1e-9);
        prop_assert!((m_over.rmse - m_under.rmse).abs() < 1e-9);
    }

    #[test]
    fn checked_and_unchecked_helpers_agree((actual, predicted) in aligned_pairs(64)) {
        let metrics = accuracy(&actual, &predicted).unwrap();

        prop_assert!((metrics.mae - mae(&actual, &predicted)).abs() < 1e-9);
        prop_assert!((metrics.rmse - rmse(&actual, &predicted)).abs() < 1e-9);
    }
}
