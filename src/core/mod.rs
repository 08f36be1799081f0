pub mod calculator;
pub mod session;

pub use crate::domain::model::{FaultToleranceTier, UptimePercentage, UptimeReport};
pub use crate::domain::ports::{ConfigProvider, InputSource, OutputSink};
pub use crate::utils::error::Result;
