//! # vitalscreen
//!
//! Core library for a contactless health-screening application: risk
//! stratification of camera- and audio-derived biomarkers across five
//! health domains (cardiovascular, respiratory, gait, facial structure,
//! speech).
//!
//! ## Features
//!
//! - **Risk Stratification**: fixed-threshold classification of each
//!   domain as low/medium/high, with explicit uncertainty for domains
//!   that produced no data
//! - **Measurement Model**: immutable per-session bundles with a
//!   documented "0 / null means unmeasured" sentinel convention
//! - **Screening Flow**: module catalogue, synthetic demo source,
//!   one-call session orchestration
//! - **History**: capacity-bounded in-memory session store with summary
//!   statistics
//!
//! ## Architecture
//!
//! ```text
//! MeasurementSource ──▶ MeasurementBundle ──▶ RiskStratifier ──▶ RiskReport
//!   (capture modules)       (immutable)        (pure, total)       │
//!                                                                  ▼
//!                                                          ScreeningSession
//! ```
//!
//! The stratifier is a pure function with no I/O and no hidden state;
//! everything non-deterministic (RNG, timestamps, session ids) lives at
//! the screening layer.
//!
//! ## Example
//!
//! ```
//! use vitalscreen::{ScreeningModule, ScreeningService, SyntheticSource};
//!
//! # fn main() -> vitalscreen::Result<()> {
//! let mut service = ScreeningService::new(SyntheticSource::with_seed(42));
//! let session = service.run(&[ScreeningModule::FaceScan, ScreeningModule::BodyScan])?;
//!
//! // Face and body scans feed three of the five domains; the voice and
//! // 3D-face domains are flagged uncertain rather than scored.
//! let report = session.report();
//! assert_eq!(report.confidence, 0.6);
//! assert_eq!(report.uncertainty_flags.len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod domain;
pub mod screening;
pub mod stratify;

// Re-export main types
pub use domain::{
    measurement::{CardioMetrics, FaceMetrics, GaitMetrics, MeasurementBundle, VoiceMetrics},
    modules::ScreeningModule,
    risk::{DomainSignals, RiskDomain, RiskLevel, RiskReport},
    session::{ScreeningSession, SessionId},
};

pub use screening::{
    HistoryStats, MeasurementSource, ScreeningService, SessionHistory, SyntheticSource,
};

pub use stratify::{RiskStratifier, RiskThresholds};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common result type for screening operations
pub type Result<T> = std::result::Result<T, ScreenError>;

/// Unified error type for screening operations
#[derive(Debug, thiserror::Error)]
pub enum ScreenError {
    /// A screening run was requested with no capture modules selected
    #[error("no screening modules selected")]
    EmptySelection,
}
