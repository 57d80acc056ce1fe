// Pattern-learning progress: collected data points and model accuracy.

use rand::Rng;

use super::Observation;

/// Accuracy never climbs past this
const MAX_ACCURACY: f64 = 98.0;
/// Largest accuracy gain per tick
const MAX_STEP: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LearningStatus {
    Training,
    Learning,
    Optimized,
}

impl LearningStatus {
    pub fn from_accuracy(accuracy: f64) -> Self {
        if accuracy > 90.0 {
            Self::Optimized
        } else if accuracy > 70.0 {
            Self::Learning
        } else {
            Self::Training
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Training => "Training",
            Self::Learning => "Learning",
            Self::Optimized => "Optimized",
        }
    }
}

#[derive(Default)]
pub struct LearningMonitor {
    accuracy: f64,
}

impl LearningMonitor {
    pub fn new() -> Self {
        Self { accuracy: 0.0 }
    }

    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Observation {
        if self.accuracy < MAX_ACCURACY {
            self.accuracy = (self.accuracy + rng.random::<f64>() * MAX_STEP).min(MAX_ACCURACY);
        }
        Observation {
            summary: format!(
                "Model accuracy {:.1}% - {}",
                self.accuracy,
                LearningStatus::from_accuracy(self.accuracy).label()
            ),
            alert: None,
        }
    }
}

/// Counts sensor data points collected since startup
#[derive(Default)]
pub struct DataPointCounter {
    count: u64,
}

impl DataPointCounter {
    pub fn new() -> Self {
        Self { count: 0 }
    }

    pub fn tick(&mut self) -> Observation {
        self.count += 1;
        Observation {
            summary: format!("{} data points", group_thousands(self.count)),
            alert: None,
        }
    }
}

/// 1234567 -> "1,234,567"
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
