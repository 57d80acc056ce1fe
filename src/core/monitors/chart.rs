// Baseline comparison chart: current vs. learned level per pattern.

use rand::Rng;

use super::Observation;

pub const PATTERNS: [&str; 3] = ["Location Pattern", "Noise Pattern", "Temporal Pattern"];

/// Gap (in percentage points) above which a row is flagged
const ANOMALY_GAP: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub pattern: &'static str,
    pub baseline: f64,
    pub current: f64,
}

impl ChartRow {
    pub fn is_anomaly(&self) -> bool {
        (self.current - self.baseline).abs() >= ANOMALY_GAP
    }

    pub fn status(&self) -> &'static str {
        if self.is_anomaly() {
            "Anomaly"
        } else {
            "Normal"
        }
    }
}

#[derive(Default)]
pub struct BaselineChart;

impl BaselineChart {
    pub fn new() -> Self {
        Self
    }

    pub fn rows<R: Rng>(&self, rng: &mut R) -> Vec<ChartRow> {
        PATTERNS
            .iter()
            .map(|pattern| {
                let baseline = 60.0 + rng.random::<f64>() * 30.0;
                let current = baseline + (rng.random::<f64>() - 0.5) * 10.0;
                ChartRow {
                    pattern: *pattern,
                    baseline,
                    current,
                }
            })
            .collect()
    }

    pub fn sample<R: Rng>(&mut self, rng: &mut R) -> Observation {
        let summary = self
            .rows(rng)
            .iter()
            .map(|row| {
                format!(
                    "{} {:.0}% vs {:.0}% {}",
                    row.pattern,
                    row.current,
                    row.baseline,
                    row.status()
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        Observation {
            summary,
            alert: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_status_threshold() {
        let row = |current| ChartRow {
            pattern: PATTERNS[0],
            baseline: 70.0,
            current,
        };
        assert_eq!(row(74.9).status(), "Normal");
        assert_eq!(row(75.0).status(), "Anomaly");
        assert_eq!(row(65.0).status(), "Anomaly");
    }

    #[test]
    fn test_rows_stay_in_range() {
        let chart = BaselineChart::new();
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let rows = chart.rows(&mut rng);
            assert_eq!(rows.len(), 3);
            for row in rows {
                assert!((60.0..90.0).contains(&row.baseline));
                assert!((row.current - row.baseline).abs() <= 5.0);
            }
        }
    }
}
