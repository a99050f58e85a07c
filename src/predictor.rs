//! Predictor: remote inference over HTTP JSON.
//!
//! The request body carries the two most recent series values as strings
//! (`{"val1": "20", "val2": "30"}`); the response carries a `prediction`
//! array, one value per year ahead.

use alloy_primitives::U256;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::chain::narrow_value;
use crate::config::Config;
use crate::error::PredictorError;

/// The last two series values, narrowed to `f64` (see [`narrow_value`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PredictorInput {
    pub val1: f64,
    pub val2: f64,
}

impl PredictorInput {
    /// Only constructible from a series with at least two elements.
    pub fn from_series(series: &[U256]) -> Option<Self> {
        match series {
            [.., a, b] => Some(Self {
                val1: narrow_value(a),
                val2: narrow_value(b),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub prediction: Vec<f64>,
}

#[async_trait]
pub trait Predictor {
    async fn predict(&self, input: PredictorInput) -> Result<PredictionResult, PredictorError>;
}

pub struct HttpPredictor {
    client: Client,
    url: String,
}

impl HttpPredictor {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            url: cfg.predict_url.clone(),
        }
    }
}

/// Wire encoding of the request: both values as strings. `f64` display
/// already renders integral values without a trailing `.0`, so `20.0`
/// goes out as `"20"`.
pub fn encode_request(input: &PredictorInput) -> Value {
    serde_json::json!({
        "val1": input.val1.to_string(),
        "val2": input.val2.to_string(),
    })
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn predict(&self, input: PredictorInput) -> Result<PredictionResult, PredictorError> {
        let resp = self
            .client
            .post(&self.url)
            .json(&encode_request(&input))
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(PredictorError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_takes_last_two_elements() {
        let series = vec![U256::from(10u64), U256::from(20u64), U256::from(30u64)];
        let input = PredictorInput::from_series(&series).unwrap();
        assert_eq!(input, PredictorInput { val1: 20.0, val2: 30.0 });
    }

    #[test]
    fn input_requires_two_elements() {
        assert!(PredictorInput::from_series(&[]).is_none());
        assert!(PredictorInput::from_series(&[U256::from(7u64)]).is_none());
    }

    #[test]
    fn request_encodes_values_as_strings() {
        let body = encode_request(&PredictorInput { val1: 20.0, val2: 30.0 });
        assert_eq!(body["val1"], "20");
        assert_eq!(body["val2"], "30");
    }

    #[test]
    fn request_keeps_fractional_values() {
        let body = encode_request(&PredictorInput { val1: 1.5, val2: 0.25 });
        assert_eq!(body["val1"], "1.5");
        assert_eq!(body["val2"], "0.25");
    }

    #[test]
    fn response_shape_parses() {
        let parsed: PredictionResult =
            serde_json::from_str(r#"{"prediction": [31.0, 33.0]}"#).unwrap();
        assert_eq!(parsed.prediction, vec![31.0, 33.0]);
    }
}
