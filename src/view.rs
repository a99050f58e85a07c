//! Presentation Adapter: pure projections from workflow snapshots to
//! display-ready rows and points. Stateless and restartable; empty input
//! yields an empty sequence, never an error.

use alloy_primitives::U256;

use crate::chain::narrow_value;
use crate::predictor::PredictionResult;

/// (index, decimal value) rows for the series table.
pub fn series_rows(series: &[U256]) -> impl Iterator<Item = (usize, String)> + '_ {
    series.iter().enumerate().map(|(i, v)| (i, v.to_string()))
}

/// (index, numeric value) points for the chart. Uses the same lossy
/// narrowing as predictor-input derivation.
pub fn chart_points(series: &[U256]) -> impl Iterator<Item = (usize, f64)> + '_ {
    series.iter().enumerate().map(|(i, v)| (i, narrow_value(v)))
}

/// (years ahead, predicted value) rows for the prediction table.
pub fn prediction_rows(result: &PredictionResult) -> impl Iterator<Item = (usize, f64)> + '_ {
    result.prediction.iter().copied().enumerate()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(vals: &[u64]) -> Vec<U256> {
        vals.iter().map(|v| U256::from(*v)).collect()
    }

    #[test]
    fn rows_are_indexed_in_series_order() {
        let s = series(&[10, 20, 30]);
        let rows: Vec<_> = series_rows(&s).collect();
        assert_eq!(
            rows,
            vec![(0, "10".to_string()), (1, "20".to_string()), (2, "30".to_string())]
        );
    }

    #[test]
    fn chart_points_narrow_like_predictor_input() {
        let s = series(&[10, 20, 30]);
        let points: Vec<_> = chart_points(&s).collect();
        assert_eq!(points, vec![(0, 10.0), (1, 20.0), (2, 30.0)]);
    }

    #[test]
    fn prediction_rows_index_is_years_ahead() {
        let result = PredictionResult { prediction: vec![31.0, 33.0] };
        let rows: Vec<_> = prediction_rows(&result).collect();
        assert_eq!(rows, vec![(0, 31.0), (1, 33.0)]);
    }

    #[test]
    fn projections_are_pure_and_restartable() {
        let s = series(&[5, 6]);
        let first: Vec<_> = series_rows(&s).collect();
        let second: Vec<_> = series_rows(&s).collect();
        assert_eq!(first, second);
        let p1: Vec<_> = chart_points(&s).collect();
        let p2: Vec<_> = chart_points(&s).collect();
        assert_eq!(p1, p2);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(series_rows(&[]).count(), 0);
        assert_eq!(chart_points(&[]).count(), 0);
        let empty = PredictionResult { prediction: vec![] };
        assert_eq!(prediction_rows(&empty).count(), 0);
    }
}
