//! Measurement value objects produced by the capture modules.
//!
//! All metric groups use a sentinel convention for absence: a numeric
//! field of `0.0` (or `None` for the nullable voice sub-metrics) means
//! the value was never measured, as opposed to a genuinely-zero reading.
//! A module that was skipped, or that produced no usable signal, leaves
//! its group at the sentinel.

use serde::{Deserialize, Serialize};

/// Cardio-respiratory metrics extracted from the face scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardioMetrics {
    /// Heart rate in beats per minute. `0.0` = not measured.
    pub heart_rate_bpm: f64,
    /// Heart rate variability (SDNN) in milliseconds. `0.0` = not measured.
    pub hrv_sdnn_ms: f64,
    /// Respiratory rate in breaths per minute. `0.0` = not measured.
    pub respiratory_rate_bpm: f64,
}

impl CardioMetrics {
    /// Sentinel group: nothing measured.
    pub fn unmeasured() -> Self {
        Self {
            heart_rate_bpm: 0.0,
            hrv_sdnn_ms: 0.0,
            respiratory_rate_bpm: 0.0,
        }
    }

    /// Both pulse-derived readings are present.
    pub fn has_pulse_readings(&self) -> bool {
        self.heart_rate_bpm != 0.0 && self.hrv_sdnn_ms != 0.0
    }

    /// A respiratory rate reading is present.
    pub fn has_respiratory_reading(&self) -> bool {
        self.respiratory_rate_bpm != 0.0
    }
}

/// Gait metrics extracted from the body scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaitMetrics {
    /// Left/right symmetry on a 0-100 scale. `0.0` = not measured.
    pub symmetry_percent: f64,
    /// Balance stability on a 0-100 scale. `0.0` = not measured.
    pub balance_stability_percent: f64,
    /// Cadence in steps per minute. `0.0` = not measured.
    pub cadence_steps_per_min: f64,
    /// Average stride length in meters. Recorded but not classified.
    pub avg_stride_length_m: f64,
}

impl GaitMetrics {
    /// Sentinel group: nothing measured.
    pub fn unmeasured() -> Self {
        Self {
            symmetry_percent: 0.0,
            balance_stability_percent: 0.0,
            cadence_steps_per_min: 0.0,
            avg_stride_length_m: 0.0,
        }
    }

    /// At least one classified gait reading is present.
    pub fn has_any_reading(&self) -> bool {
        self.symmetry_percent != 0.0
            || self.balance_stability_percent != 0.0
            || self.cadence_steps_per_min != 0.0
    }
}

/// Facial structure metrics extracted from the 3D face scan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceMetrics {
    /// Unitless asymmetry ratio; 0 would be perfectly symmetric, so the
    /// sentinel overlaps the ideal reading. `0.0` = not measured.
    pub asymmetry_score: f64,
    /// Eye openness ratio. Recorded but not classified.
    pub eye_openness: f64,
}

impl FaceMetrics {
    /// Sentinel group: nothing measured.
    pub fn unmeasured() -> Self {
        Self {
            asymmetry_score: 0.0,
            eye_openness: 0.0,
        }
    }

    /// An asymmetry reading is present.
    pub fn has_reading(&self) -> bool {
        self.asymmetry_score != 0.0
    }
}

/// Voice metrics extracted from the voice scan.
///
/// The perturbation sub-metrics are nullable: microphone capture can
/// yield a phonation time while the acoustic analysis is blocked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceMetrics {
    /// Maximum phonation time in seconds. `0.0` = not measured.
    pub max_phonation_secs: f64,
    /// Cycle-to-cycle frequency perturbation, percent.
    pub jitter_percent: Option<f64>,
    /// Cycle-to-cycle amplitude perturbation, percent.
    pub shimmer_percent: Option<f64>,
    /// Harmonics-to-noise ratio in dB.
    pub hnr_db: Option<f64>,
}

impl VoiceMetrics {
    /// Sentinel group: nothing measured.
    pub fn unmeasured() -> Self {
        Self {
            max_phonation_secs: 0.0,
            jitter_percent: None,
            shimmer_percent: None,
            hnr_db: None,
        }
    }

    /// At least one primary indicator (phonation time or jitter) is present.
    pub fn has_primary_reading(&self) -> bool {
        self.max_phonation_secs != 0.0 || self.jitter_percent.is_some()
    }
}

/// Complete measurement bundle for one analysis session.
///
/// Immutable once assembled; a new session produces a wholly new bundle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementBundle {
    /// Cardio-respiratory group (face scan).
    pub cardio: CardioMetrics,
    /// Gait group (body scan).
    pub gait: GaitMetrics,
    /// Facial structure group (3D face scan).
    pub face: FaceMetrics,
    /// Voice group (voice scan).
    pub voice: VoiceMetrics,
}

impl MeasurementBundle {
    /// Assemble a bundle from its four metric groups.
    pub fn new(
        cardio: CardioMetrics,
        gait: GaitMetrics,
        face: FaceMetrics,
        voice: VoiceMetrics,
    ) -> Self {
        Self {
            cardio,
            gait,
            face,
            voice,
        }
    }

    /// A bundle with every group at its sentinel (no modules run).
    pub fn unmeasured() -> Self {
        Self {
            cardio: CardioMetrics::unmeasured(),
            gait: GaitMetrics::unmeasured(),
            face: FaceMetrics::unmeasured(),
            voice: VoiceMetrics::unmeasured(),
        }
    }
}
