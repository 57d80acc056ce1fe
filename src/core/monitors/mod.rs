// Simulated sensor monitors that feed the alert feed.
//
// Each monitor draws fake readings from an RNG, classifies them against a
// baseline, and optionally asks for an alert. The learning and chart
// monitors only report readings. None of them touch the feed
// directly; the app forwards `AlertRequest`s to `AlertFeed::submit`.

pub mod anomaly;
pub mod chart;
pub mod learning;
pub mod location;
pub mod noise;
pub mod temporal;

use super::alerts::{AlertFeed, AlertKind, AlertView, FeedError, SubmitOutcome};

/// An alert a monitor wants raised
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertRequest {
    pub kind: AlertKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl AlertRequest {
    pub const fn new(kind: AlertKind, title: &'static str, message: &'static str) -> Self {
        Self {
            kind,
            title,
            message,
        }
    }

    pub fn submit_to<V: AlertView>(
        &self,
        feed: &mut AlertFeed<V>,
    ) -> Result<SubmitOutcome, FeedError> {
        feed.submit(self.kind, self.title, self.message)
    }
}

/// Greeting posted once shortly after startup
pub const WELCOME: AlertRequest = AlertRequest::new(
    AlertKind::Info,
    "Welcome to VIGIL AI",
    "Your autonomous personal security system is now protecting you 24/7",
);

/// One monitor tick: a status line for the dashboard and an optional alert
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub summary: String,
    pub alert: Option<AlertRequest>,
}
