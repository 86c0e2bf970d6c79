//! Target configuration records: the hand-authored desired state for
//! each managed market.
//!
//! Numeric conventions follow the on-chain contracts: position sizes and
//! skew scales are e30 USD fixed-point, funding rates are e18.

use alloy::primitives::{B256, U256};

use crate::contracts::IConfigStorage;

/// Desired configuration for one market slot.
#[derive(Debug, Clone)]
pub struct MarketParams {
    pub market_index: u64,
    /// Right-zero-padded UTF-8 symbol, the contract's registry key.
    pub asset_id: B256,
    pub max_long_position_size: U256,
    pub max_short_position_size: U256,
    pub increase_position_fee_rate_bps: u32,
    pub decrease_position_fee_rate_bps: u32,
    pub initial_margin_fraction_bps: u32,
    pub maintenance_margin_fraction_bps: u32,
    pub max_profit_rate_bps: u32,
    pub asset_class: u8,
    pub allow_increase_position: bool,
    pub active: bool,
    pub max_skew_scale_usd: U256,
    pub max_funding_rate: U256,
    pub adaptive_fee_enabled: bool,
}

impl MarketParams {
    /// Human-readable symbol recovered from the asset id.
    pub fn symbol(&self) -> String {
        let bytes = self.asset_id.as_slice();
        let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        String::from_utf8_lossy(&bytes[..end]).into_owned()
    }

    /// The record as the contract's `MarketConfig` struct.
    pub fn as_market_config(&self) -> IConfigStorage::MarketConfig {
        IConfigStorage::MarketConfig {
            assetId: self.asset_id,
            maxLongPositionSize: self.max_long_position_size,
            maxShortPositionSize: self.max_short_position_size,
            increasePositionFeeRateBPS: self.increase_position_fee_rate_bps,
            decreasePositionFeeRateBPS: self.decrease_position_fee_rate_bps,
            initialMarginFractionBPS: self.initial_margin_fraction_bps,
            maintenanceMarginFractionBPS: self.maintenance_margin_fraction_bps,
            maxProfitRateBPS: self.max_profit_rate_bps,
            assetClass: self.asset_class,
            allowIncreasePosition: self.allow_increase_position,
            active: self.active,
            fundingRate: IConfigStorage::FundingRate {
                maxSkewScaleUSD: self.max_skew_scale_usd,
                maxFundingRate: self.max_funding_rate,
            },
        }
    }
}

/// Encode an ASCII symbol as a bytes32 registry key (right-zero-padded),
/// matching the encoding the deploy scripts used when the markets were
/// first registered.
///
/// Panics if the symbol is longer than 31 bytes.
pub fn bytes32_symbol(symbol: &str) -> B256 {
    let bytes = symbol.as_bytes();
    assert!(bytes.len() <= 31, "symbol too long for bytes32: {symbol}");
    let mut buf = [0u8; 32];
    buf[..bytes.len()].copy_from_slice(bytes);
    B256::from(buf)
}

/// `amount` whole USD in e30 fixed-point.
pub fn usd_e30(amount: u64) -> U256 {
    U256::from(amount) * U256::from(10u8).pow(U256::from(30u8))
}

/// `rate` whole units in e18 fixed-point.
pub fn rate_e18(rate: u64) -> U256 {
    U256::from(rate) * U256::from(10u8).pow(U256::from(18u8))
}

/// The current market configuration batch, in submission order.
pub fn market_config_batch() -> Vec<MarketParams> {
    vec![
        MarketParams {
            market_index: 49,
            asset_id: bytes32_symbol("STRK"),
            max_long_position_size: U256::ZERO,
            max_short_position_size: U256::ZERO,
            increase_position_fee_rate_bps: 5,
            decrease_position_fee_rate_bps: 5,
            initial_margin_fraction_bps: 1000,
            maintenance_margin_fraction_bps: 50,
            max_profit_rate_bps: 40000,
            asset_class: 0,
            allow_increase_position: true,
            active: true,
            max_skew_scale_usd: usd_e30(50_000_000),
            max_funding_rate: rate_e18(8),
            adaptive_fee_enabled: true,
        },
        MarketParams {
            market_index: 50,
            asset_id: bytes32_symbol("PYTH"),
            max_long_position_size: usd_e30(100_000),
            max_short_position_size: usd_e30(100_000),
            increase_position_fee_rate_bps: 5,
            decrease_position_fee_rate_bps: 5,
            initial_margin_fraction_bps: 1000,
            maintenance_margin_fraction_bps: 50,
            max_profit_rate_bps: 40000,
            asset_class: 0,
            allow_increase_position: true,
            active: true,
            max_skew_scale_usd: usd_e30(50_000_000),
            max_funding_rate: rate_e18(8),
            adaptive_fee_enabled: true,
        },
        MarketParams {
            market_index: 51,
            asset_id: bytes32_symbol("PENDLE"),
            max_long_position_size: usd_e30(100_000),
            max_short_position_size: usd_e30(100_000),
            increase_position_fee_rate_bps: 5,
            decrease_position_fee_rate_bps: 5,
            initial_margin_fraction_bps: 1000,
            maintenance_margin_fraction_bps: 50,
            max_profit_rate_bps: 40000,
            asset_class: 0,
            allow_increase_position: true,
            active: true,
            max_skew_scale_usd: usd_e30(200_000_000),
            max_funding_rate: rate_e18(8),
            adaptive_fee_enabled: true,
        },
        MarketParams {
            market_index: 52,
            asset_id: bytes32_symbol("W"),
            max_long_position_size: U256::ZERO,
            max_short_position_size: U256::ZERO,
            increase_position_fee_rate_bps: 5,
            decrease_position_fee_rate_bps: 5,
            initial_margin_fraction_bps: 400,
            maintenance_margin_fraction_bps: 50,
            max_profit_rate_bps: 100000,
            asset_class: 0,
            allow_increase_position: true,
            active: true,
            max_skew_scale_usd: usd_e30(200_000_000),
            max_funding_rate: rate_e18(8),
            adaptive_fee_enabled: true,
        },
        MarketParams {
            market_index: 53,
            asset_id: bytes32_symbol("ENA"),
            max_long_position_size: usd_e30(120_000),
            max_short_position_size: usd_e30(120_000),
            increase_position_fee_rate_bps: 5,
            decrease_position_fee_rate_bps: 5,
            initial_margin_fraction_bps: 400,
            maintenance_margin_fraction_bps: 50,
            max_profit_rate_bps: 100000,
            asset_class: 0,
            allow_increase_position: true,
            active: true,
            max_skew_scale_usd: usd_e30(200_000_000),
            max_funding_rate: rate_e18(8),
            adaptive_fee_enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes32_symbol_padding() {
        let id = bytes32_symbol("STRK");
        // "STRK" = 0x5354524b, remainder zero
        assert_eq!(&id.as_slice()[..4], &[0x53, 0x54, 0x52, 0x4b]);
        assert!(id.as_slice()[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_symbol_round_trip() {
        for symbol in ["STRK", "PYTH", "PENDLE", "W", "ENA"] {
            let params = MarketParams {
                asset_id: bytes32_symbol(symbol),
                ..market_config_batch()[0].clone()
            };
            assert_eq!(params.symbol(), symbol);
        }
    }

    #[test]
    #[should_panic(expected = "too long")]
    fn test_bytes32_symbol_rejects_long_input() {
        bytes32_symbol("ABCDEFGHIJKLMNOPQRSTUVWXYZ012345");
    }

    #[test]
    fn test_usd_e30() {
        assert_eq!(usd_e30(1), U256::from(10u8).pow(U256::from(30u8)));
        assert_eq!(
            usd_e30(100_000).to_string(),
            format!("100000{}", "0".repeat(30))
        );
    }

    #[test]
    fn test_rate_e18() {
        assert_eq!(rate_e18(8).to_string(), format!("8{}", "0".repeat(18)));
    }

    #[test]
    fn test_batch_indices_are_strictly_increasing() {
        let batch = market_config_batch();
        assert_eq!(batch.len(), 5);
        for pair in batch.windows(2) {
            assert!(pair[0].market_index < pair[1].market_index);
        }
        assert_eq!(batch[0].market_index, 49);
        assert_eq!(batch[4].market_index, 53);
    }

    #[test]
    fn test_batch_values() {
        let batch = market_config_batch();
        let pendle = &batch[2];
        assert_eq!(pendle.symbol(), "PENDLE");
        assert_eq!(pendle.max_long_position_size, usd_e30(100_000));
        assert_eq!(pendle.max_skew_scale_usd, usd_e30(200_000_000));
        assert_eq!(pendle.initial_margin_fraction_bps, 1000);

        let w = &batch[3];
        assert_eq!(w.symbol(), "W");
        assert_eq!(w.max_long_position_size, U256::ZERO);
        assert_eq!(w.max_profit_rate_bps, 100000);
        assert_eq!(w.initial_margin_fraction_bps, 400);
    }

    #[test]
    fn test_as_market_config_preserves_fields() {
        let record = &market_config_batch()[1];
        let config = record.as_market_config();
        assert_eq!(config.assetId, record.asset_id);
        assert_eq!(config.maxLongPositionSize, record.max_long_position_size);
        assert_eq!(config.fundingRate.maxFundingRate, record.max_funding_rate);
        assert_eq!(config.assetClass, record.asset_class);
        assert!(config.active);
    }
}
