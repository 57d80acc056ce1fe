// Alert model types shared by the feed, the producers and the renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Severity of an alert. Fixed at creation; drives icon and styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Warning,
    Danger,
}

impl AlertKind {
    /// Glyph shown next to the alert
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Danger => "🚨",
            Self::Warning => "⚠️",
            Self::Info => "ℹ️",
        }
    }

    /// Lowercase name, as used in styling and serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// Style class for a rendered alert node
    pub fn css_class(&self) -> String {
        format!("alert-item {}", self.as_str())
    }

    pub fn all() -> &'static [AlertKind] {
        &[Self::Info, Self::Warning, Self::Danger]
    }
}

/// A single notification record. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    /// Short identifier, also the deduplication key
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(
        kind: AlertKind,
        title: impl Into<String>,
        message: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            message: message.into(),
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_have_distinct_icons() {
        let icons: Vec<_> = AlertKind::all().iter().map(|k| k.icon()).collect();
        assert_eq!(icons, vec!["ℹ️", "⚠️", "🚨"]);
    }

    #[test]
    fn test_css_class() {
        assert_eq!(AlertKind::Danger.css_class(), "alert-item danger");
        assert_eq!(AlertKind::Info.css_class(), "alert-item info");
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&AlertKind::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let back: AlertKind = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(back, AlertKind::Danger);
    }
}
