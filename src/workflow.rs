//! Workflow Controller: the fetch-and-predict lifecycle.
//!
//! One invocation runs validate -> read -> derive -> predict, strictly in
//! that order, and folds every outcome into [`RequestState`]. Chain failures
//! are fatal to the invocation; predictor failures degrade to a notice while
//! the fetched series stays visible. Nothing here propagates an error to the
//! caller.

use alloy_primitives::U256;

use crate::chain::{LedgerReader, Series};
use crate::error::ErrorKind;
use crate::logging::{json_error, json_log, obj, v_num, v_str};
use crate::predictor::{PredictionResult, Predictor, PredictorInput};

pub const MSG_EMPTY_ID: &str = "ID cannot be empty";
pub const MSG_INSUFFICIENT_DATA: &str = "Not enough data to make an API request";
pub const MSG_PREDICTOR_DEGRADED: &str = "Prediction Fetched Successfully!";

/// Lifecycle state of the single outstanding request.
///
/// `Success` and `Failed` are terminal for one invocation; the controller is
/// immediately re-invocable from either.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    Loading,
    Success(Series, Option<PredictionResult>),
    Failed(ErrorKind, String),
}

pub struct Dashboard {
    reader: Box<dyn LedgerReader + Send + Sync>,
    predictor: Box<dyn Predictor + Send + Sync>,
    state: RequestState,
    /// Display snapshot: the series from the last successful read. Survives
    /// a failed read, so the table and chart keep showing prior data.
    series: Series,
    notice: Option<String>,
}

impl Dashboard {
    pub fn new(
        reader: Box<dyn LedgerReader + Send + Sync>,
        predictor: Box<dyn Predictor + Send + Sync>,
    ) -> Self {
        Self {
            reader,
            predictor,
            state: RequestState::Idle,
            series: Vec::new(),
            notice: None,
        }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn series(&self) -> &[U256] {
        &self.series
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading)
    }

    pub fn prediction(&self) -> Option<&PredictionResult> {
        match &self.state {
            RequestState::Success(_, Some(result)) => Some(result),
            _ => None,
        }
    }

    /// The one status line the surface renders: a `Failed` message, or the
    /// degraded-predictor notice, or nothing.
    pub fn status_line(&self) -> Option<String> {
        match &self.state {
            RequestState::Failed(_, message) => Some(format!("Error: {}", message)),
            _ => self.notice.clone(),
        }
    }

    /// Run one fetch-and-predict invocation for a raw user-entered id.
    ///
    /// A call while a request is outstanding is ignored (the submit
    /// affordance is disabled while loading; this guard makes the race
    /// explicit rather than last-write-wins).
    pub async fn run_fetch_and_predict(&mut self, raw_id: &str) {
        if self.is_loading() {
            json_log("workflow", obj(&[("event", v_str("reentry_ignored"))]));
            return;
        }

        let id = match parse_identifier(raw_id) {
            Ok(id) => id,
            Err(message) => {
                json_error(
                    "workflow",
                    obj(&[("event", v_str("invalid_input")), ("msg", v_str(&message))]),
                );
                self.state = RequestState::Failed(ErrorKind::InvalidInput, message);
                return;
            }
        };

        self.state = RequestState::Loading;
        self.notice = None;

        let series = match self.reader.get_series(id).await {
            Ok(series) => series,
            Err(err) => {
                let message = err.to_string();
                json_error(
                    "chain",
                    obj(&[("event", v_str("read_failed")), ("msg", v_str(&message))]),
                );
                self.state = RequestState::Failed(ErrorKind::ChainRead, message);
                return;
            }
        };
        json_log(
            "chain",
            obj(&[
                ("event", v_str("series_read")),
                ("len", v_num(series.len() as f64)),
                ("series", v_str(&format_series(&series))),
            ]),
        );
        self.series = series.clone();

        let input = match PredictorInput::from_series(&series) {
            Some(input) => input,
            None => {
                self.state = RequestState::Failed(
                    ErrorKind::InsufficientData,
                    MSG_INSUFFICIENT_DATA.to_string(),
                );
                return;
            }
        };

        match self.predictor.predict(input).await {
            Ok(result) => {
                json_log(
                    "predictor",
                    obj(&[
                        ("event", v_str("prediction")),
                        ("steps", v_num(result.prediction.len() as f64)),
                    ]),
                );
                self.state = RequestState::Success(series, Some(result));
            }
            Err(err) => {
                // Deliberate asymmetry: the read succeeded, so a predictor
                // failure is informational, not a blocking error.
                json_error(
                    "predictor",
                    obj(&[("event", v_str("predict_failed")), ("msg", v_str(&err.to_string()))]),
                );
                self.notice = Some(MSG_PREDICTOR_DEGRADED.to_string());
                self.state = RequestState::Success(series, None);
            }
        }
    }
}

/// Parse a raw identifier: decimal, or hexadecimal with a `0x` prefix.
/// Rejected input never reaches a collaborator.
pub fn parse_identifier(raw: &str) -> Result<U256, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MSG_EMPTY_ID.to_string());
    }
    let parsed = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
        Some(hex_part) => U256::from_str_radix(hex_part, 16),
        None => U256::from_str_radix(trimmed, 10),
    };
    parsed.map_err(|e| format!("invalid ID: {}", e))
}

fn format_series(series: &Series) -> String {
    series
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
