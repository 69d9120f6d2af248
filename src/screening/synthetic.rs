//! Synthetic measurement source.
//!
//! The demo deployment has no sensor-analysis pipeline behind it; this
//! source fabricates plausible readings for whichever capture modules
//! were selected and leaves everything else at the "not measured"
//! sentinel. Real deployments supply their own [`MeasurementSource`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{
    CardioMetrics, FaceMetrics, GaitMetrics, MeasurementBundle, ScreeningModule,
    VoiceMetrics,
};

/// Supplier of measurement bundles for a screening run.
///
/// Implementations must honor the sentinel convention: a metric group
/// whose module did not run stays at `0.0` / `None`.
pub trait MeasurementSource {
    /// Produce the bundle for one run of the selected modules.
    fn capture(&mut self, modules: &[ScreeningModule]) -> MeasurementBundle;
}

/// Demo source generating readings from per-module value ranges.
pub struct SyntheticSource {
    rng: StdRng,
}

impl SyntheticSource {
    /// Create a source seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed, for reproducible runs.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform draw rounded to a whole number.
    fn whole(&mut self, min: f64, max: f64) -> f64 {
        self.rng.gen_range(min..=max).round()
    }

    /// Uniform draw rounded to two decimal places.
    fn scaled(&mut self, min: f64, max: f64) -> f64 {
        (self.rng.gen_range(min..=max) * 100.0).round() / 100.0
    }
}

impl Default for SyntheticSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasurementSource for SyntheticSource {
    fn capture(&mut self, modules: &[ScreeningModule]) -> MeasurementBundle {
        let has = |module| modules.contains(&module);

        let cardio = if has(ScreeningModule::FaceScan) {
            CardioMetrics {
                heart_rate_bpm: self.whole(62.0, 82.0),
                hrv_sdnn_ms: self.whole(28.0, 58.0),
                respiratory_rate_bpm: self.whole(13.0, 19.0),
            }
        } else {
            CardioMetrics::unmeasured()
        };

        let gait = if has(ScreeningModule::BodyScan) {
            GaitMetrics {
                symmetry_percent: self.whole(78.0, 96.0),
                balance_stability_percent: self.whole(72.0, 95.0),
                cadence_steps_per_min: self.whole(92.0, 116.0),
                avg_stride_length_m: self.scaled(0.55, 0.85),
            }
        } else {
            GaitMetrics::unmeasured()
        };

        let face = if has(ScreeningModule::Face3d) {
            FaceMetrics {
                asymmetry_score: self.scaled(0.02, 0.18),
                eye_openness: self.scaled(0.60, 0.95),
            }
        } else {
            FaceMetrics::unmeasured()
        };

        let voice = if has(ScreeningModule::VoiceScan) {
            VoiceMetrics {
                max_phonation_secs: self.scaled(4.0, 12.0),
                jitter_percent: Some(self.scaled(0.2, 1.2)),
                shimmer_percent: Some(self.scaled(0.8, 3.8)),
                hnr_db: Some(self.scaled(14.0, 26.0)),
            }
        } else {
            VoiceMetrics::unmeasured()
        };

        MeasurementBundle::new(cardio, gait, face, voice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unselected_modules_stay_at_sentinel() {
        let mut source = SyntheticSource::with_seed(1);
        let bundle = source.capture(&[ScreeningModule::FaceScan]);
        assert!(bundle.cardio.has_pulse_readings());
        assert!(!bundle.gait.has_any_reading());
        assert!(!bundle.face.has_reading());
        assert_eq!(bundle.voice.jitter_percent, None);
    }

    #[test]
    fn full_run_populates_every_group() {
        let mut source = SyntheticSource::with_seed(2);
        let bundle = source.capture(&ScreeningModule::ALL);
        assert!(bundle.cardio.has_pulse_readings());
        assert!(bundle.cardio.has_respiratory_reading());
        assert!(bundle.gait.has_any_reading());
        assert!(bundle.face.has_reading());
        assert!(bundle.voice.has_primary_reading());
        assert!(bundle.voice.shimmer_percent.is_some());
        assert!(bundle.voice.hnr_db.is_some());
    }

    #[test]
    fn readings_fall_inside_the_generation_ranges() {
        let mut source = SyntheticSource::with_seed(3);
        for _ in 0..100 {
            let bundle = source.capture(&ScreeningModule::ALL);
            assert!((62.0..=82.0).contains(&bundle.cardio.heart_rate_bpm));
            assert!((28.0..=58.0).contains(&bundle.cardio.hrv_sdnn_ms));
            assert!((13.0..=19.0).contains(&bundle.cardio.respiratory_rate_bpm));
            assert!((78.0..=96.0).contains(&bundle.gait.symmetry_percent));
            assert!((72.0..=95.0).contains(&bundle.gait.balance_stability_percent));
            assert!((92.0..=116.0).contains(&bundle.gait.cadence_steps_per_min));
            assert!((0.55..=0.85).contains(&bundle.gait.avg_stride_length_m));
            assert!((0.02..=0.18).contains(&bundle.face.asymmetry_score));
            assert!((4.0..=12.0).contains(&bundle.voice.max_phonation_secs));
            assert!((0.2..=1.2).contains(&bundle.voice.jitter_percent.unwrap()));
            assert!((0.8..=3.8).contains(&bundle.voice.shimmer_percent.unwrap()));
            assert!((14.0..=26.0).contains(&bundle.voice.hnr_db.unwrap()));
        }
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let mut a = SyntheticSource::with_seed(7);
        let mut b = SyntheticSource::with_seed(7);
        assert_eq!(
            a.capture(&ScreeningModule::ALL),
            b.capture(&ScreeningModule::ALL)
        );
    }
}
