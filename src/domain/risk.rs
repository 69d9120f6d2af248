//! Risk classification value objects.

use serde::{Deserialize, Serialize};

/// Risk classification for a single health domain.
///
/// Thresholds are calibrated per domain, so levels are only comparable
/// within a domain, never across domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Readings within the normal range.
    Low,
    /// One or more readings outside the normal range.
    Medium,
    /// Multiple or strongly abnormal readings.
    High,
    /// Insufficient input data to classify the domain.
    Uncertain,
}

impl RiskLevel {
    /// A definitive classification was possible (anything but [`RiskLevel::Uncertain`]).
    pub fn is_definitive(&self) -> bool {
        !matches!(self, RiskLevel::Uncertain)
    }

    /// The finding warrants clinical follow-up.
    pub fn is_elevated(&self) -> bool {
        matches!(self, RiskLevel::Medium | RiskLevel::High)
    }

    /// Get display color
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High => "red",
            RiskLevel::Uncertain => "gray",
        }
    }

    /// Get human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Readings within expected range",
            RiskLevel::Medium => "Readings outside expected range, follow-up suggested",
            RiskLevel::High => "Multiple readings outside expected range",
            RiskLevel::Uncertain => "Not enough data to classify",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "LOW"),
            RiskLevel::Medium => write!(f, "MEDIUM"),
            RiskLevel::High => write!(f, "HIGH"),
            RiskLevel::Uncertain => write!(f, "UNCERTAIN"),
        }
    }
}

/// The five screened health domains.
///
/// [`RiskDomain::ALL`] declares the canonical iteration order; every
/// ordered output (uncertainty flags, signal iteration) follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskDomain {
    /// Heart rate and heart rate variability.
    Cardiovascular,
    /// Respiratory rate.
    Respiratory,
    /// Gait symmetry, balance, and cadence.
    NeuroMotorGait,
    /// Facial asymmetry.
    NeuroMotorFace,
    /// Phonation time and voice perturbation measures.
    SpeechPathology,
}

impl RiskDomain {
    /// All domains in canonical order.
    pub const ALL: [RiskDomain; 5] = [
        RiskDomain::Cardiovascular,
        RiskDomain::Respiratory,
        RiskDomain::NeuroMotorGait,
        RiskDomain::NeuroMotorFace,
        RiskDomain::SpeechPathology,
    ];

    /// Number of screened domains.
    pub const COUNT: usize = Self::ALL.len();

    /// The domain key as it appears in report JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskDomain::Cardiovascular => "cardiovascular",
            RiskDomain::Respiratory => "respiratory",
            RiskDomain::NeuroMotorGait => "neuroMotorGait",
            RiskDomain::NeuroMotorFace => "neuroMotorFace",
            RiskDomain::SpeechPathology => "speechPathology",
        }
    }
}

impl std::fmt::Display for RiskDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-domain risk signals, exactly one level per screened domain.
///
/// The key set is fixed at the five domains; none can be added or
/// omitted at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSignals {
    /// Cardiovascular signal.
    pub cardiovascular: RiskLevel,
    /// Respiratory signal.
    pub respiratory: RiskLevel,
    /// Neuro-motor gait signal.
    pub neuro_motor_gait: RiskLevel,
    /// Neuro-motor face signal.
    pub neuro_motor_face: RiskLevel,
    /// Speech pathology signal.
    pub speech_pathology: RiskLevel,
}

impl DomainSignals {
    /// Look up the signal for one domain.
    pub fn get(&self, domain: RiskDomain) -> RiskLevel {
        match domain {
            RiskDomain::Cardiovascular => self.cardiovascular,
            RiskDomain::Respiratory => self.respiratory,
            RiskDomain::NeuroMotorGait => self.neuro_motor_gait,
            RiskDomain::NeuroMotorFace => self.neuro_motor_face,
            RiskDomain::SpeechPathology => self.speech_pathology,
        }
    }

    /// Iterate the signals in canonical domain order.
    pub fn iter(&self) -> impl Iterator<Item = (RiskDomain, RiskLevel)> + '_ {
        RiskDomain::ALL.iter().map(move |&d| (d, self.get(d)))
    }

    /// Count of domains with a definitive (non-Uncertain) signal.
    pub fn definitive_count(&self) -> usize {
        self.iter().filter(|(_, level)| level.is_definitive()).count()
    }
}

/// Risk stratification report for one measurement bundle.
///
/// Derived synchronously and deterministically from a single
/// [`MeasurementBundle`](crate::MeasurementBundle); immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskReport {
    /// Per-domain classification.
    pub signals: DomainSignals,
    /// Fraction of domains with a definitive classification, in [0, 1],
    /// rounded to two decimal places.
    pub confidence: f64,
    /// Domains whose signal is Uncertain, in canonical domain order.
    pub uncertainty_flags: Vec<RiskDomain>,
}

impl RiskReport {
    /// Every domain produced a definitive classification.
    pub fn is_fully_determined(&self) -> bool {
        self.uncertainty_flags.is_empty()
    }

    /// At least one domain classified as High.
    pub fn has_high_signal(&self) -> bool {
        self.signals.iter().any(|(_, level)| level == RiskLevel::High)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_is_stable() {
        let keys: Vec<&str> = RiskDomain::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(
            keys,
            [
                "cardiovascular",
                "respiratory",
                "neuroMotorGait",
                "neuroMotorFace",
                "speechPathology",
            ]
        );
    }

    #[test]
    fn signals_iterate_in_canonical_order() {
        let signals = DomainSignals {
            cardiovascular: RiskLevel::Low,
            respiratory: RiskLevel::High,
            neuro_motor_gait: RiskLevel::Medium,
            neuro_motor_face: RiskLevel::Uncertain,
            speech_pathology: RiskLevel::Low,
        };
        let levels: Vec<RiskLevel> = signals.iter().map(|(_, l)| l).collect();
        assert_eq!(
            levels,
            [
                RiskLevel::Low,
                RiskLevel::High,
                RiskLevel::Medium,
                RiskLevel::Uncertain,
                RiskLevel::Low,
            ]
        );
        assert_eq!(signals.definitive_count(), 4);
    }

    #[test]
    fn level_helpers() {
        assert!(RiskLevel::Low.is_definitive());
        assert!(!RiskLevel::Uncertain.is_definitive());
        assert!(RiskLevel::High.is_elevated());
        assert!(!RiskLevel::Low.is_elevated());
        assert_eq!(RiskLevel::High.color(), "red");
        assert_eq!(RiskLevel::Uncertain.color(), "gray");
    }

    #[test]
    fn levels_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&RiskLevel::Uncertain).unwrap(),
            "\"uncertain\""
        );
        assert_eq!(serde_json::to_string(&RiskLevel::Low).unwrap(), "\"low\"");
    }

    #[test]
    fn domains_serialize_as_report_keys() {
        for domain in RiskDomain::ALL {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{}\"", domain.as_str()));
        }
    }
}
