// Random "reasoning engine" anomaly sampler.

use rand::Rng;

use super::{AlertRequest, Observation};
use crate::core::alerts::AlertKind;

/// Probability a tick produces an anomaly
const ANOMALY_CHANCE: f64 = 0.05;

pub const ANOMALIES: [AlertRequest; 3] = [
    AlertRequest::new(
        AlertKind::Warning,
        "Behavior Pattern Change",
        "Detected deviation from normal behavioral pattern",
    ),
    AlertRequest::new(
        AlertKind::Info,
        "Pattern Update",
        "Successfully learned new safe pattern",
    ),
    AlertRequest::new(
        AlertKind::Warning,
        "Environmental Change",
        "Multiple environmental factors changed simultaneously",
    ),
];

#[derive(Default)]
pub struct AnomalySampler {
    samples: u64,
}

impl AnomalySampler {
    pub fn new() -> Self {
        Self { samples: 0 }
    }

    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Observation {
        self.samples += 1;
        let alert = if rng.random_bool(ANOMALY_CHANCE) {
            Some(ANOMALIES[rng.random_range(0..ANOMALIES.len())])
        } else {
            None
        };
        Observation {
            summary: format!("Reasoning pass #{}", self.samples),
            alert,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alerts_come_from_fixed_catalog() {
        let mut sampler = AnomalySampler::new();
        let mut rng = StdRng::seed_from_u64(99);
        let mut fired = 0;
        for _ in 0..2000 {
            if let Some(alert) = sampler.sample(&mut rng).alert {
                assert!(ANOMALIES.contains(&alert));
                fired += 1;
            }
        }
        assert!(fired > 20 && fired < 250, "unexpected anomaly rate: {fired}");
    }

    #[test]
    fn test_summary_counts_passes() {
        let mut sampler = AnomalySampler::new();
        let mut rng = StdRng::seed_from_u64(1);
        sampler.sample(&mut rng);
        assert_eq!(sampler.sample(&mut rng).summary, "Reasoning pass #2");
    }
}
