// Terminal renderer for the alert feed.
//
// New alerts are printed as they arrive; `render` redraws the whole panel
// with current time-ago labels.

use std::io::{self, Write};

use crate::core::alerts::{AlertKind, AlertView, ViewError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleNode {
    pub kind: AlertKind,
    pub title: String,
    pub message: String,
    pub label: String,
}

impl ConsoleNode {
    fn line(&self) -> String {
        format!(
            "{} [{}] {}: {}",
            self.kind.icon(),
            self.label,
            self.title,
            self.message
        )
    }
}

pub struct ConsoleView<W: Write> {
    out: W,
    nodes: Vec<ConsoleNode>,
}

impl ConsoleView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            nodes: Vec::new(),
        }
    }

    pub fn nodes(&self) -> &[ConsoleNode] {
        &self.nodes
    }

    /// Redraw every displayed alert, newest first
    pub fn render(&mut self) -> Result<(), ViewError> {
        writeln!(self.out, "---- Alerts ({}) ----", self.nodes.len())?;
        for node in &self.nodes {
            writeln!(self.out, "  {}", node.line())?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AlertView for ConsoleView<W> {
    type Node = ConsoleNode;

    fn create_node(
        &mut self,
        kind: AlertKind,
        title: &str,
        message: &str,
        label: &str,
    ) -> Result<ConsoleNode, ViewError> {
        Ok(ConsoleNode {
            kind,
            title: title.to_string(),
            message: message.to_string(),
            label: label.to_string(),
        })
    }

    fn insert_at_head(&mut self, node: ConsoleNode) -> Result<(), ViewError> {
        writeln!(self.out, "{}", node.line())?;
        self.out.flush()?;
        self.nodes.insert(0, node);
        Ok(())
    }

    fn remove_last(&mut self) -> Result<Option<ConsoleNode>, ViewError> {
        Ok(self.nodes.pop())
    }

    fn set_label(&mut self, index: usize, text: &str) -> Result<(), ViewError> {
        if let Some(node) = self.nodes.get_mut(index) {
            node.label = text.to_string();
        }
        Ok(())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alerts::{AlertFeed, FeedConfig};
    use chrono::{Duration, TimeZone, Utc};

    /// Writer that always fails, like a closed pipe
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_insert_prints_line() {
        let mut feed = AlertFeed::new(FeedConfig::default(), ConsoleView::new(Vec::new())).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        feed.submit_at(AlertKind::Warning, "Noise Alert", "Ambient noise levels elevated", at)
            .unwrap();

        let out = String::from_utf8(feed.view().out.clone()).unwrap();
        assert_eq!(out, "⚠️ [Just now] Noise Alert: Ambient noise levels elevated\n");
    }

    #[test]
    fn test_render_shows_refreshed_labels() {
        let mut feed = AlertFeed::new(FeedConfig::default(), ConsoleView::new(Vec::new())).unwrap();
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        feed.submit_at(AlertKind::Info, "Pattern Update", "learned", at).unwrap();
        feed.refresh_timestamps_at(at + Duration::minutes(2)).unwrap();
        feed.view_mut().render().unwrap();

        let out = String::from_utf8(feed.view().out.clone()).unwrap();
        assert!(out.contains("---- Alerts (1) ----"));
        assert!(out.contains("ℹ️ [2 min ago] Pattern Update: learned"));
    }

    #[test]
    fn test_render_panel_layout() {
        let mut view = ConsoleView::new(Vec::new());
        let older = view.create_node(AlertKind::Info, "Pattern Update", "learned", "3 min ago").unwrap();
        view.nodes.insert(0, older);
        let newer = view.create_node(AlertKind::Danger, "Noise Anomaly", "loud", "Just now").unwrap();
        view.nodes.insert(0, newer);
        view.render().unwrap();

        let out = String::from_utf8(view.into_inner()).unwrap();
        assert_eq!(
            out,
            "---- Alerts (2) ----\n  🚨 [Just now] Noise Anomaly: loud\n  ℹ️ [3 min ago] Pattern Update: learned\n"
        );
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut view = ConsoleView::new(BrokenPipe);
        let node = view.create_node(AlertKind::Danger, "t", "m", "Just now").unwrap();
        assert!(matches!(view.insert_at_head(node), Err(ViewError::Io(_))));
        assert_eq!(view.node_count(), 0);
    }
}
