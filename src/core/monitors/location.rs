// GPS jitter around a fixed baseline position.

use rand::Rng;

use super::{AlertRequest, Observation};
use crate::core::alerts::AlertKind;
use crate::core::config::Baseline;

const JITTER_SPAN: f64 = 0.01;
const CAUTION_DEVIATION: f64 = 0.005;
const DANGER_DEVIATION: f64 = 0.008;

const ZONES: [&str; 5] = [
    "Downtown Area",
    "Residential Zone",
    "Commercial District",
    "Safe Zone Alpha",
    "Monitored Area",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Safety {
    Safe,
    Caution,
    Danger,
}

impl Safety {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Safe => "Safe Zone",
            Self::Caution => "Caution",
            Self::Danger => "Alert",
        }
    }
}

/// Classify the summed absolute lat/lng offset from baseline
pub fn classify_deviation(deviation: f64) -> (Safety, Option<AlertRequest>) {
    if deviation < CAUTION_DEVIATION {
        (Safety::Safe, None)
    } else if deviation < DANGER_DEVIATION {
        (
            Safety::Caution,
            Some(AlertRequest::new(
                AlertKind::Warning,
                "Location Deviation",
                "Unusual location pattern detected",
            )),
        )
    } else {
        (
            Safety::Danger,
            Some(AlertRequest::new(
                AlertKind::Danger,
                "Location Anomaly",
                "Significant deviation from normal pattern",
            )),
        )
    }
}

pub struct LocationMonitor {
    latitude: f64,
    longitude: f64,
}

impl LocationMonitor {
    pub fn new(baseline: &Baseline) -> Self {
        Self {
            latitude: baseline.latitude,
            longitude: baseline.longitude,
        }
    }

    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Observation {
        let lat_offset = (rng.random::<f64>() - 0.5) * JITTER_SPAN;
        let lng_offset = (rng.random::<f64>() - 0.5) * JITTER_SPAN;
        let zone = ZONES[rng.random_range(0..ZONES.len())];

        let (safety, alert) = classify_deviation(lat_offset.abs() + lng_offset.abs());
        let summary = format!(
            "Lat: {:.4}, Long: {:.4} ({}) - {}",
            self.latitude + lat_offset,
            self.longitude + lng_offset,
            zone,
            safety.label()
        );
        Observation { summary, alert }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_classify_thresholds() {
        assert_eq!(classify_deviation(0.0).0, Safety::Safe);
        assert_eq!(classify_deviation(0.0049).0, Safety::Safe);

        let (safety, alert) = classify_deviation(0.005);
        assert_eq!(safety, Safety::Caution);
        assert_eq!(alert.unwrap().title, "Location Deviation");

        let (safety, alert) = classify_deviation(0.008);
        assert_eq!(safety, Safety::Danger);
        assert_eq!(alert.unwrap().kind, AlertKind::Danger);
    }

    #[test]
    fn test_sample_stays_near_baseline() {
        let mut monitor = LocationMonitor::new(&Baseline::default());
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let obs = monitor.sample(&mut rng);
            assert!(obs.summary.starts_with("Lat: 37.7"));
            assert!(ZONES.iter().any(|z| obs.summary.contains(z)));
        }
    }
}
