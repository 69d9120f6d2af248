//! Domain module containing the screening value objects and entities.
//!
//! - **Value Objects**: immutable measurement and risk types
//!   ([`MeasurementBundle`], [`RiskReport`])
//! - **Entities**: objects with identity ([`ScreeningSession`])
//! - **Catalogue**: the fixed capture-module list ([`ScreeningModule`])

pub mod measurement;
pub mod modules;
pub mod risk;
pub mod session;

// Re-export all domain types
pub use measurement::*;
pub use modules::*;
pub use risk::*;
pub use session::*;
