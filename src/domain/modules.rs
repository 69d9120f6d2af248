//! Capture module catalogue.
//!
//! Each screening session runs a subset of the four capture modules.
//! A module that is not selected leaves its metric group at the
//! "not measured" sentinel.

use serde::{Deserialize, Serialize};

/// A capture module the operator can include in a screening run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningModule {
    /// Camera-based cardio-respiratory capture.
    FaceScan,
    /// Camera-based gait capture.
    BodyScan,
    /// Microphone-based voice capture.
    VoiceScan,
    /// Multi-angle facial structure capture.
    #[serde(rename = "3d_face")]
    Face3d,
}

impl ScreeningModule {
    /// All modules in catalogue order.
    pub const ALL: [ScreeningModule; 4] = [
        ScreeningModule::FaceScan,
        ScreeningModule::BodyScan,
        ScreeningModule::VoiceScan,
        ScreeningModule::Face3d,
    ];

    /// Stable module identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ScreeningModule::FaceScan => "face_scan",
            ScreeningModule::BodyScan => "body_scan",
            ScreeningModule::VoiceScan => "voice_scan",
            ScreeningModule::Face3d => "3d_face",
        }
    }

    /// Display title.
    pub fn title(&self) -> &'static str {
        match self {
            ScreeningModule::FaceScan => "Face Scan",
            ScreeningModule::BodyScan => "Body Scan",
            ScreeningModule::VoiceScan => "Voice Scan",
            ScreeningModule::Face3d => "3D Face Scan",
        }
    }

    /// Short label for the signal family the module feeds.
    pub fn focus(&self) -> &'static str {
        match self {
            ScreeningModule::FaceScan => "Cardio-Respiratory",
            ScreeningModule::BodyScan => "Neuro-Motor",
            ScreeningModule::VoiceScan => "Audio Analysis",
            ScreeningModule::Face3d => "Structural Analysis",
        }
    }

    /// Nominal capture duration in seconds.
    pub fn duration_secs(&self) -> u32 {
        match self {
            ScreeningModule::FaceScan => 10,
            ScreeningModule::BodyScan => 12,
            ScreeningModule::VoiceScan => 8,
            ScreeningModule::Face3d => 8,
        }
    }

    /// Operator instructions shown before capture starts.
    pub fn instructions(&self) -> &'static [&'static str] {
        match self {
            ScreeningModule::FaceScan => &[
                "Position your face in the center of the frame",
                "Maintain a neutral, relaxed expression",
                "Sit still — do not speak or move",
                "Ensure even lighting on your face",
            ],
            ScreeningModule::BodyScan => &[
                "Stand up and step back from the camera",
                "Ensure your full body is visible in the frame",
                "Walk naturally across the camera view",
                "Maintain your normal walking pace",
            ],
            ScreeningModule::VoiceScan => &[
                "Ensure a quiet environment with minimal background noise",
                "When prompted, speak clearly and naturally",
                "Say: \"The quick brown fox jumps over the lazy dog\"",
                "Then sustain an \"ahhh\" sound as long as you can",
            ],
            ScreeningModule::Face3d => &[
                "Look directly at the camera",
                "Slowly turn your head to the left when prompted",
                "Return to center, then turn right",
                "Hold a neutral expression throughout",
            ],
        }
    }
}

impl std::fmt::Display for ScreeningModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}
