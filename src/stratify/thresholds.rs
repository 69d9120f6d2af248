//! Threshold table for risk classification.

use serde::{Deserialize, Serialize};

/// Fixed cutoffs used by the [`RiskStratifier`](super::RiskStratifier).
///
/// One table covers all five domains so that test suites can override
/// individual cutoffs without touching the evaluation logic. The
/// defaults are the calibrated screening values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// Heart rate above this is tachycardic (BPM).
    pub heart_rate_high_bpm: f64,
    /// Heart rate below this is bradycardic (BPM).
    pub heart_rate_low_bpm: f64,
    /// SDNN below this indicates reduced variability (ms).
    pub hrv_low_ms: f64,
    /// Respiratory rate above this is tachypneic (breaths/min).
    pub respiratory_high_bpm: f64,
    /// Respiratory rate below this is bradypneic (breaths/min).
    pub respiratory_low_bpm: f64,
    /// Gait symmetry below this is flagged (percent).
    pub gait_symmetry_low_percent: f64,
    /// Balance stability below this is flagged (percent).
    pub gait_balance_low_percent: f64,
    /// Cadence below this is flagged (steps/min).
    pub gait_cadence_low_spm: f64,
    /// Facial asymmetry ratio above this is flagged.
    pub face_asymmetry_high: f64,
    /// Maximum phonation time below this is flagged (seconds).
    pub phonation_low_secs: f64,
    /// Jitter above this indicates vocal instability (percent).
    pub jitter_high_percent: f64,
    /// Shimmer above this indicates vocal instability (percent).
    pub shimmer_high_percent: f64,
    /// HNR below this indicates a breathy or noisy voice (dB).
    pub hnr_low_db: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            heart_rate_high_bpm: 100.0,
            heart_rate_low_bpm: 50.0,
            hrv_low_ms: 20.0,
            respiratory_high_bpm: 20.0,
            respiratory_low_bpm: 10.0,
            gait_symmetry_low_percent: 80.0,
            gait_balance_low_percent: 70.0,
            gait_cadence_low_spm: 90.0,
            face_asymmetry_high: 0.15,
            phonation_low_secs: 3.0,
            jitter_high_percent: 1.0,
            shimmer_high_percent: 3.5,
            hnr_low_db: 15.0,
        }
    }
}
