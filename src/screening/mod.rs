//! Screening flow: measurement sources, orchestration, and history.

pub mod history;
pub mod service;
pub mod synthetic;

pub use history::{HistoryStats, SessionHistory};
pub use service::ScreeningService;
pub use synthetic::{MeasurementSource, SyntheticSource};
