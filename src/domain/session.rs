//! Screening session entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MeasurementBundle, RiskReport, ScreeningModule};

/// Unique identifier for a screening session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the inner UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One completed analysis run: the measurement bundle together with the
/// risk report derived from it.
///
/// A bundle and its report are created together and never mutated; a new
/// analysis produces a wholly new session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningSession {
    id: SessionId,
    completed_at: DateTime<Utc>,
    modules: Vec<ScreeningModule>,
    bundle: MeasurementBundle,
    report: RiskReport,
}

impl ScreeningSession {
    /// Assemble a session from the modules that ran, the bundle they
    /// produced, and the report derived from the bundle.
    pub fn new(
        modules: Vec<ScreeningModule>,
        bundle: MeasurementBundle,
        report: RiskReport,
    ) -> Self {
        Self {
            id: SessionId::new(),
            completed_at: Utc::now(),
            modules,
            bundle,
            report,
        }
    }

    /// Session identifier.
    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// Completion timestamp.
    pub fn completed_at(&self) -> DateTime<Utc> {
        self.completed_at
    }

    /// The modules that ran in this session.
    pub fn modules(&self) -> &[ScreeningModule] {
        &self.modules
    }

    /// The measurement bundle captured in this session.
    pub fn bundle(&self) -> &MeasurementBundle {
        &self.bundle
    }

    /// The risk report derived from the bundle.
    pub fn report(&self) -> &RiskReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DomainSignals, RiskLevel};

    fn empty_report() -> RiskReport {
        RiskReport {
            signals: DomainSignals {
                cardiovascular: RiskLevel::Uncertain,
                respiratory: RiskLevel::Uncertain,
                neuro_motor_gait: RiskLevel::Uncertain,
                neuro_motor_face: RiskLevel::Uncertain,
                speech_pathology: RiskLevel::Uncertain,
            },
            confidence: 0.0,
            uncertainty_flags: crate::domain::RiskDomain::ALL.to_vec(),
        }
    }

    #[test]
    fn session_ids_are_unique() {
        let a = ScreeningSession::new(vec![], MeasurementBundle::unmeasured(), empty_report());
        let b = ScreeningSession::new(vec![], MeasurementBundle::unmeasured(), empty_report());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn session_preserves_its_parts() {
        let modules = vec![ScreeningModule::FaceScan, ScreeningModule::VoiceScan];
        let session = ScreeningSession::new(
            modules.clone(),
            MeasurementBundle::unmeasured(),
            empty_report(),
        );
        assert_eq!(session.modules(), modules.as_slice());
        assert_eq!(session.report().confidence, 0.0);
        assert!(session.completed_at() <= Utc::now());
    }
}
