//! Advisory fee computation.
//!
//! The breakdown attached to a submission is display-only: the acceptor
//! re-derives anything it acts on. Missing or non-numeric asset values
//! count as zero.

use serde::{Deserialize, Serialize};

/// Management fee rate applied to total assets.
const FEE_RATE: f64 = 0.10;

/// Minimum fee charged regardless of asset total.
const MINIMUM_FEE: f64 = 100.0;

/// Advisory amounts attached to a submission payload.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeBreakdown {
    pub total_assets: f64,
    pub fee: f64,
    pub net_amount: f64,
}

/// Computes the fee breakdown over a sequence of asset values.
///
/// `fee = max(total * 0.10, 100)`; the net amount goes negative when the
/// minimum fee exceeds the total.
pub fn calculate_fees(values: impl IntoIterator<Item = f64>) -> FeeBreakdown {
    let total_assets: f64 = values.into_iter().sum();
    let fee = (total_assets * FEE_RATE).max(MINIMUM_FEE);

    FeeBreakdown {
        total_assets,
        fee,
        net_amount: total_assets - fee,
    }
}

/// Parses a raw form value as an asset amount; anything unparseable is 0.
pub fn parse_asset_value(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}
