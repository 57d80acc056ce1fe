// Alert feed - bounded, recency-deduplicated alert log kept in lockstep with a view.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{FeedError, ViewError};
use super::model::{Alert, AlertKind};
use super::time_ago::time_ago;
use super::view::AlertView;

/// Feed sizing - persisted in settings.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Maximum number of alerts kept and displayed (default: 10)
    #[serde(default = "default_capacity")]
    pub capacity: usize,
    /// How many of the newest alerts are checked for a duplicate title (default: 5)
    #[serde(default = "default_dedup_window")]
    pub dedup_window: usize,
}

fn default_capacity() -> usize {
    10
}

fn default_dedup_window() -> usize {
    5
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            dedup_window: default_dedup_window(),
        }
    }
}

/// What `submit` did with an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Alert was added at the head; `evicted` is set when the oldest alert fell off
    Accepted { evicted: bool },
    /// Same title is among the most recent alerts; nothing changed
    Duplicate,
}

/// Feed handle shared between producers on the single scheduler thread
pub type SharedFeed<V> = Rc<RefCell<AlertFeed<V>>>;

pub struct AlertFeed<V: AlertView> {
    config: FeedConfig,
    /// Newest first
    log: VecDeque<Alert>,
    view: V,
}

impl<V: AlertView> AlertFeed<V> {
    /// Attach a feed to an empty view.
    pub fn new(config: FeedConfig, view: V) -> Result<Self, FeedError> {
        let existing = view.node_count();
        if existing > 0 {
            return Err(ViewError::NotEmpty(existing).into());
        }
        let config = FeedConfig {
            capacity: config.capacity.max(1),
            ..config
        };
        Ok(Self {
            log: VecDeque::new(),
            config,
            view,
        })
    }

    pub fn into_shared(self) -> SharedFeed<V> {
        Rc::new(RefCell::new(self))
    }

    pub fn submit(
        &mut self,
        kind: AlertKind,
        title: &str,
        message: &str,
    ) -> Result<SubmitOutcome, FeedError> {
        self.submit_at(kind, title, message, Utc::now())
    }

    /// Add an alert created at `now`, unless its title is among the
    /// `dedup_window` newest alerts. Empty titles and messages are accepted.
    pub fn submit_at(
        &mut self,
        kind: AlertKind,
        title: &str,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmitOutcome, FeedError> {
        if self.is_recent_duplicate(title) {
            log::debug!("Discarding duplicate alert '{}'", title);
            return Ok(SubmitOutcome::Duplicate);
        }

        let alert = Alert::new(kind, title, message, now);
        let label = time_ago(alert.created_at, now);
        let node = self.view.create_node(kind, &alert.title, &alert.message, &label)?;

        // Make room first, so a failing view never leaves more than
        // `capacity` alerts behind
        let evicted = self.view.node_count() >= self.config.capacity;
        if evicted {
            self.view.remove_last()?;
            self.log.truncate(self.config.capacity - 1);
        }

        self.view.insert_at_head(node)?;
        self.log.push_front(alert);

        log::info!("[{}] {}: {}", kind.as_str(), title, message);
        Ok(SubmitOutcome::Accepted { evicted })
    }

    pub fn refresh_timestamps(&mut self) -> Result<(), FeedError> {
        self.refresh_timestamps_at(Utc::now())
    }

    /// Re-render the time-ago label of every displayed node from the log
    /// entry at the same position. Nodes without a log entry keep their label.
    pub fn refresh_timestamps_at(&mut self, now: DateTime<Utc>) -> Result<(), FeedError> {
        let displayed = self.view.node_count();
        for (index, alert) in self.log.iter().enumerate().take(displayed) {
            self.view.set_label(index, &time_ago(alert.created_at, now))?;
        }
        Ok(())
    }

    fn is_recent_duplicate(&self, title: &str) -> bool {
        self.log
            .iter()
            .take(self.config.dedup_window)
            .any(|alert| alert.title == title)
    }

    /// Alerts, newest first
    pub fn alerts(&self) -> impl Iterator<Item = &Alert> {
        self.log.iter()
    }

    pub fn snapshot(&self) -> Vec<Alert> {
        self.log.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }
}
