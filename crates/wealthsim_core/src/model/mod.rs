mod category;
mod market;
mod results;
mod snapshot;

pub use category::{AssetCategory, AssetReturnParams, DistributionShape};
pub use market::{
    CrisisModel, FeeTable, InflationModel, MarketRegime, RETURN_FLOOR, ShockParams,
};
pub use results::{
    HorizonStats, PercentileKey, PercentileSeries, SimulationResult, SummaryStats,
    TrajectoryTrace,
};
pub use snapshot::{Holding, PortfolioSnapshot, SnapshotAsset};
