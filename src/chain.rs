//! Ledger Reader: read-only series lookup against the data contract.
//!
//! The contract exposes `getData(uint256 id) returns (uint256[])`. We speak
//! raw JSON-RPC `eth_call` and hand-roll the 36-byte calldata and the ABI
//! decode of the dynamic `uint256[]` return value. The contract also has an
//! `addData(uint256,uint256)` entry; this crate never writes.

use alloy_primitives::{keccak256, U256};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

use crate::config::Config;
use crate::error::ChainReadError;

/// Ordered series for one identifier. The two most recent values are the
/// last two elements. May be empty.
pub type Series = Vec<U256>;

/// Narrow a ledger value to `f64` for prediction and charting.
///
/// Lossy by design: values are clamped to the `u128` range and then rounded
/// to the nearest `f64`. This mirrors the precision the prediction service
/// and the chart actually consume; do not widen it.
pub fn narrow_value(v: &U256) -> f64 {
    v.saturating_to::<u128>() as f64
}

#[async_trait]
pub trait LedgerReader {
    async fn get_series(&self, id: U256) -> Result<Series, ChainReadError>;
}

pub struct EthLedgerReader {
    client: Client,
    rpc_url: String,
    contract: String,
}

impl EthLedgerReader {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            rpc_url: cfg.rpc_url.clone(),
            contract: cfg.contract_address.clone(),
        }
    }
}

#[derive(Deserialize, Debug)]
struct RpcResponse {
    result: Option<String>,
    error: Option<RpcError>,
}

#[derive(Deserialize, Debug)]
struct RpcError {
    code: i64,
    message: String,
}

#[async_trait]
impl LedgerReader for EthLedgerReader {
    async fn get_series(&self, id: U256) -> Result<Series, ChainReadError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [
                { "to": self.contract, "data": get_data_calldata(id) },
                "latest",
            ],
        });
        let resp = self.client.post(&self.rpc_url).json(&body).send().await?;
        let rpc: RpcResponse = resp.json().await?;
        if let Some(err) = rpc.error {
            return Err(ChainReadError::Rpc {
                code: err.code,
                message: err.message,
            });
        }
        let data = rpc
            .result
            .ok_or_else(|| ChainReadError::Decode("response carries neither result nor error".to_string()))?;
        decode_uint_array(&data)
    }
}

/// `0x`-prefixed calldata for `getData(uint256)`: 4-byte selector, then the
/// identifier as one big-endian word.
pub fn get_data_calldata(id: U256) -> String {
    let selector = keccak256(b"getData(uint256)");
    let mut data = Vec::with_capacity(36);
    data.extend_from_slice(&selector[..4]);
    data.extend_from_slice(&id.to_be_bytes::<32>());
    format!("0x{}", hex::encode(data))
}

/// Decode an ABI-encoded `uint256[]` return value: offset word, length word,
/// then the elements. Empty return data (`0x`) decodes to an empty series.
pub fn decode_uint_array(data: &str) -> Result<Series, ChainReadError> {
    let raw = data.strip_prefix("0x").unwrap_or(data);
    let bytes =
        hex::decode(raw).map_err(|e| ChainReadError::Decode(format!("invalid hex: {}", e)))?;
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let offset = word_at(&bytes, 0)?.saturating_to::<usize>();
    let len = word_at(&bytes, offset)?.saturating_to::<usize>();
    // Reject a length word that promises more elements than the payload holds.
    let elems_start = offset
        .checked_add(32)
        .ok_or_else(|| ChainReadError::Decode(format!("array offset {} out of range", offset)))?;
    if len > (bytes.len().saturating_sub(elems_start)) / 32 {
        return Err(ChainReadError::Decode(format!(
            "array length {} exceeds payload of {} bytes",
            len,
            bytes.len()
        )));
    }

    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        out.push(word_at(&bytes, elems_start + i * 32)?);
    }
    Ok(out)
}

fn word_at(bytes: &[u8], at: usize) -> Result<U256, ChainReadError> {
    at.checked_add(32)
        .and_then(|end| bytes.get(at..end))
        .map(U256::from_be_slice)
        .ok_or_else(|| ChainReadError::Decode(format!("truncated word at byte {}", at)))
}
