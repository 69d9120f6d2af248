//! Screening orchestration service.

use tracing::{debug, info};

use crate::domain::{ScreeningModule, ScreeningSession};
use crate::stratify::RiskStratifier;
use crate::{Result, ScreenError};

use super::MeasurementSource;

/// Runs one screening session end to end: capture the selected modules,
/// stratify the bundle, and assemble the session record.
pub struct ScreeningService<S: MeasurementSource> {
    source: S,
    stratifier: RiskStratifier,
}

impl<S: MeasurementSource> ScreeningService<S> {
    /// Create a service over a measurement source, classifying with the
    /// default thresholds.
    pub fn new(source: S) -> Self {
        Self {
            source,
            stratifier: RiskStratifier::with_defaults(),
        }
    }

    /// Create with an explicit stratifier.
    pub fn with_stratifier(source: S, stratifier: RiskStratifier) -> Self {
        Self { source, stratifier }
    }

    /// The stratifier in use.
    pub fn stratifier(&self) -> &RiskStratifier {
        &self.stratifier
    }

    /// Run a session over the selected modules.
    ///
    /// At least one module must be selected; the capture flow never
    /// starts on an empty selection.
    pub fn run(&mut self, modules: &[ScreeningModule]) -> Result<ScreeningSession> {
        if modules.is_empty() {
            return Err(ScreenError::EmptySelection);
        }

        let bundle = self.source.capture(modules);
        let report = self.stratifier.stratify(&bundle);

        for (domain, level) in report.signals.iter() {
            debug!(domain = %domain, level = %level, "domain classified");
        }

        let session = ScreeningSession::new(modules.to_vec(), bundle, report);
        info!(
            session_id = %session.id(),
            modules = modules.len(),
            confidence = session.report().confidence,
            uncertain_domains = session.report().uncertainty_flags.len(),
            "screening session complete"
        );
        Ok(session)
    }
}
