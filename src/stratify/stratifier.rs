//! Fixed-threshold risk stratification.
//!
//! [`RiskStratifier::stratify`] is a pure function over one
//! [`MeasurementBundle`]: no I/O, no hidden state, no reads of clock or
//! RNG. Two calls with the same bundle produce identical reports.
//!
//! Each domain is evaluated independently. A domain whose inputs sit at
//! the "not measured" sentinel (see [`crate::domain::measurement`]) is
//! classified [`RiskLevel::Uncertain`] rather than Low, so missing data
//! is never mistaken for a normal finding.

use crate::domain::{
    CardioMetrics, DomainSignals, FaceMetrics, GaitMetrics, MeasurementBundle,
    RiskDomain, RiskLevel, RiskReport, VoiceMetrics,
};

use super::RiskThresholds;

/// Stratifier for measurement bundles.
///
/// Carries the threshold table it classifies against; construct with
/// [`RiskStratifier::new`] to override cutoffs.
#[derive(Debug, Clone, Default)]
pub struct RiskStratifier {
    thresholds: RiskThresholds,
}

impl RiskStratifier {
    /// Create a stratifier with an explicit threshold table.
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Create with the default calibrated thresholds.
    pub fn with_defaults() -> Self {
        Self::new(RiskThresholds::default())
    }

    /// The threshold table in use.
    pub fn thresholds(&self) -> &RiskThresholds {
        &self.thresholds
    }

    /// Classify every domain of a bundle and aggregate the report.
    ///
    /// Total over its input domain: out-of-range or non-finite values
    /// flow through the same comparisons, and the function never fails.
    pub fn stratify(&self, bundle: &MeasurementBundle) -> RiskReport {
        let signals = DomainSignals {
            cardiovascular: self.cardiovascular(&bundle.cardio),
            respiratory: self.respiratory(&bundle.cardio),
            neuro_motor_gait: self.gait(&bundle.gait),
            neuro_motor_face: self.face(&bundle.face),
            speech_pathology: self.speech(&bundle.voice),
        };

        let uncertainty_flags: Vec<RiskDomain> = signals
            .iter()
            .filter(|(_, level)| *level == RiskLevel::Uncertain)
            .map(|(domain, _)| domain)
            .collect();

        let definitive = RiskDomain::COUNT - uncertainty_flags.len();
        let confidence = if definitive == 0 {
            0.0
        } else {
            round2(definitive as f64 / RiskDomain::COUNT as f64)
        };

        RiskReport {
            signals,
            confidence,
            uncertainty_flags,
        }
    }

    /// Heart rate and HRV. High wins over the Medium sub-conditions.
    fn cardiovascular(&self, cardio: &CardioMetrics) -> RiskLevel {
        if cardio.heart_rate_bpm == 0.0 || cardio.hrv_sdnn_ms == 0.0 {
            return RiskLevel::Uncertain;
        }
        if cardio.heart_rate_bpm > self.thresholds.heart_rate_high_bpm {
            return RiskLevel::High;
        }
        if cardio.heart_rate_bpm < self.thresholds.heart_rate_low_bpm
            || cardio.hrv_sdnn_ms < self.thresholds.hrv_low_ms
        {
            return RiskLevel::Medium;
        }
        RiskLevel::Low
    }

    fn respiratory(&self, cardio: &CardioMetrics) -> RiskLevel {
        let rr = cardio.respiratory_rate_bpm;
        if rr == 0.0 {
            return RiskLevel::Uncertain;
        }
        if rr > self.thresholds.respiratory_high_bpm {
            return RiskLevel::High;
        }
        if rr < self.thresholds.respiratory_low_bpm {
            return RiskLevel::Medium;
        }
        RiskLevel::Low
    }

    /// Flag counting over the three gait readings. A reading only flags
    /// when it was actually measured (> 0).
    fn gait(&self, gait: &GaitMetrics) -> RiskLevel {
        if !gait.has_any_reading() {
            return RiskLevel::Uncertain;
        }
        let mut flags = 0u32;
        if gait.symmetry_percent > 0.0
            && gait.symmetry_percent < self.thresholds.gait_symmetry_low_percent
        {
            flags += 1;
        }
        if gait.balance_stability_percent > 0.0
            && gait.balance_stability_percent < self.thresholds.gait_balance_low_percent
        {
            flags += 1;
        }
        if gait.cadence_steps_per_min > 0.0
            && gait.cadence_steps_per_min < self.thresholds.gait_cadence_low_spm
        {
            flags += 1;
        }
        level_from_flags(flags)
    }

    /// Facial asymmetry alone is treated as a softer signal: this domain
    /// tops out at Medium.
    fn face(&self, face: &FaceMetrics) -> RiskLevel {
        if face.asymmetry_score == 0.0 {
            return RiskLevel::Uncertain;
        }
        if face.asymmetry_score > self.thresholds.face_asymmetry_high {
            return RiskLevel::Medium;
        }
        RiskLevel::Low
    }

    /// Flag counting over phonation time and the nullable perturbation
    /// measures. Uncertain only when both primary indicators (phonation
    /// time, jitter) are absent.
    fn speech(&self, voice: &VoiceMetrics) -> RiskLevel {
        if voice.max_phonation_secs == 0.0 && voice.jitter_percent.is_none() {
            return RiskLevel::Uncertain;
        }
        let mut flags = 0u32;
        if voice.max_phonation_secs > 0.0
            && voice.max_phonation_secs < self.thresholds.phonation_low_secs
        {
            flags += 1;
        }
        if voice
            .jitter_percent
            .map_or(false, |j| j > self.thresholds.jitter_high_percent)
        {
            flags += 1;
        }
        if voice
            .shimmer_percent
            .map_or(false, |s| s > self.thresholds.shimmer_high_percent)
        {
            flags += 1;
        }
        if voice.hnr_db.map_or(false, |h| h < self.thresholds.hnr_low_db) {
            flags += 1;
        }
        level_from_flags(flags)
    }
}

/// Shared Low/Medium/High ladder for the flag-counting domains.
fn level_from_flags(flags: u32) -> RiskLevel {
    match flags {
        0 => RiskLevel::Low,
        1 => RiskLevel::Medium,
        _ => RiskLevel::High,
    }
}

/// Round to two decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
