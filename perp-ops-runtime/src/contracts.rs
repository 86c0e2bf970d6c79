//! Solidity contract bindings for the protocol's admin surface.
//!
//! Uses alloy's `sol!` macro to generate type-safe ABI encoders/decoders
//! for the config storage, oracle middleware, trade helper, and the
//! multisig wallet that fronts privileged changes.

use alloy::sol;

sol! {
    #[sol(rpc)]
    interface IConfigStorage {
        struct FundingRate {
            uint256 maxSkewScaleUSD;
            uint256 maxFundingRate;
        }

        struct MarketConfig {
            bytes32 assetId;
            uint256 maxLongPositionSize;
            uint256 maxShortPositionSize;
            uint32 increasePositionFeeRateBPS;
            uint32 decreasePositionFeeRateBPS;
            uint32 initialMarginFractionBPS;
            uint32 maintenanceMarginFractionBPS;
            uint32 maxProfitRateBPS;
            uint8 assetClass;
            bool allowIncreasePosition;
            bool active;
            FundingRate fundingRate;
        }

        function marketConfigs(uint256 marketIndex) external view returns (MarketConfig memory);
        function setMarketConfig(uint256 marketIndex, MarketConfig calldata config, bool isAdaptiveFeeEnabled) external;
        function setMinimumPositionSize(uint256 minimumPositionSize) external;
    }

    #[sol(rpc)]
    interface IOracleMiddleware {
        function setUpdater(address updater, bool isUpdater) external;
        function isUpdater(address updater) external view returns (bool);
    }

    #[sol(rpc)]
    interface ITradeHelper {
        function updateBorrowingRate(uint8 assetClassIndex) external;
        function updateFundingRate(uint256 marketIndex) external;
    }

    #[sol(rpc)]
    interface IMultiSigWallet {
        event Submission(uint256 indexed transactionId);

        function submitTransaction(address destination, uint256 value, bytes calldata data) external returns (uint256 transactionId);
        function required() external view returns (uint256);
    }
}
