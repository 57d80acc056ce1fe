// Ambient noise level simulation.

use rand::Rng;

use super::{AlertRequest, Observation};
use crate::core::alerts::AlertKind;

const NOISE_SPAN_DB: f64 = 30.0;
const MIN_DB: f64 = 20.0;
const MAX_DB: f64 = 100.0;

/// Describe a noise reading and decide whether it warrants an alert
pub fn classify_noise(level_db: f64) -> (&'static str, Option<AlertRequest>) {
    if level_db < 40.0 {
        ("Quiet environment - Normal", None)
    } else if level_db < 60.0 {
        ("Normal ambient levels", None)
    } else if level_db < 75.0 {
        (
            "Elevated noise detected",
            Some(AlertRequest::new(
                AlertKind::Warning,
                "Noise Alert",
                "Ambient noise levels elevated",
            )),
        )
    } else {
        (
            "High noise levels - Anomaly detected",
            Some(AlertRequest::new(
                AlertKind::Danger,
                "Noise Anomaly",
                "Unusually high ambient noise detected",
            )),
        )
    }
}

pub struct NoiseMonitor {
    baseline_db: f64,
}

impl NoiseMonitor {
    pub fn new(baseline_db: f64) -> Self {
        Self { baseline_db }
    }

    /// Draw a reading in dB, clamped to the audible range we display
    pub fn read_level<R: Rng>(&self, rng: &mut R) -> f64 {
        let variation = (rng.random::<f64>() - 0.5) * NOISE_SPAN_DB;
        (self.baseline_db + variation).clamp(MIN_DB, MAX_DB)
    }

    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Observation {
        let level = self.read_level(rng);
        let (context, alert) = classify_noise(level);
        Observation {
            summary: format!("{} dB - {}", level.round(), context),
            alert,
        }
    }
}
