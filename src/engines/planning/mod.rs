pub mod solution;
pub mod operators;
pub mod progress;
pub mod rhea_engine;

pub use solution::Solution;
pub use rhea_engine::RollingHorizonEngine;
pub use progress::{
    ChannelProgressCallback, LogProgressCallback, ProgressCallback, ProgressMessage,
    SilentProgressCallback,
};
