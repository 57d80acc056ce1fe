// Time-of-day context and late-night activity sampling.

use chrono::{DateTime, Local, Timelike};
use rand::Rng;

use super::{AlertRequest, Observation};
use crate::core::alerts::AlertKind;

/// Probability a late-night tick raises an alert
const LATE_NIGHT_ALERT_CHANCE: f64 = 0.05;

const TEMPORAL_ANOMALY: AlertRequest = AlertRequest::new(
    AlertKind::Warning,
    "Temporal Anomaly",
    "Unusual activity during late hours",
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayPeriod {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => Self::Morning,
            12..=16 => Self::Afternoon,
            17..=20 => Self::Evening,
            _ => Self::Night,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Morning => "Morning",
            Self::Afternoon => "Afternoon",
            Self::Evening => "Evening",
            Self::Night => "Night",
        }
    }

    pub fn analysis(&self) -> &'static str {
        match self {
            Self::Morning => "Normal morning activity pattern",
            Self::Afternoon => "Normal afternoon activity pattern",
            Self::Evening => "Normal evening activity pattern",
            Self::Night => "Late night activity - Enhanced monitoring",
        }
    }
}

/// Hours between 23:00 and 05:00
pub fn is_late_night(hour: u32) -> bool {
    hour >= 23 || hour < 5
}

#[derive(Default)]
pub struct TemporalMonitor;

impl TemporalMonitor {
    pub fn new() -> Self {
        Self
    }

    pub fn sample<R: Rng>(&mut self, rng: &mut R, now: DateTime<Local>) -> Observation {
        let period = DayPeriod::from_hour(now.hour());
        let alert = if is_late_night(now.hour()) && rng.random_bool(LATE_NIGHT_ALERT_CHANCE) {
            Some(TEMPORAL_ANOMALY)
        } else {
            None
        };
        Observation {
            summary: format!(
                "{} {} - {}",
                now.format("%H:%M:%S"),
                period.label(),
                period.analysis()
            ),
            alert,
        }
    }
}
