mod noise;
mod params;
mod samples;
mod summary;

pub use noise::{FieldNoise, NoiseModel};
pub use params::{ParameterSet, StochasticField};
pub use samples::{MonteCarloRun, ResultSet, SampleBatch};
pub use summary::{AchievementRate, Correlations, StatisticsSummary};
