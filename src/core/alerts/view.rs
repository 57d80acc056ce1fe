// View adapter interface for the alert feed.
//
// The feed never touches a rendering surface directly. Anything that can
// hold an ordered list of alert nodes (a terminal panel, a DOM container, a
// plain Vec in tests) implements `AlertView`.

use serde::Serialize;

use super::error::ViewError;
use super::model::AlertKind;

/// Rendering surface holding one node per displayed alert, newest at index 0.
pub trait AlertView {
    /// Handle to one rendered alert
    type Node;

    /// Build a detached node for an alert
    fn create_node(
        &mut self,
        kind: AlertKind,
        title: &str,
        message: &str,
        label: &str,
    ) -> Result<Self::Node, ViewError>;

    /// Insert a node before all existing nodes
    fn insert_at_head(&mut self, node: Self::Node) -> Result<(), ViewError>;

    /// Detach and return the last (oldest) node, or None when empty
    fn remove_last(&mut self) -> Result<Option<Self::Node>, ViewError>;

    /// Overwrite the time-ago label of the node at `index`
    fn set_label(&mut self, index: usize, text: &str) -> Result<(), ViewError>;

    fn node_count(&self) -> usize;
}

/// A rendered alert held in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedAlert {
    pub class_name: String,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub label: String,
}

/// In-memory view, used for snapshots and tests.
#[derive(Debug, Default)]
pub struct MemoryView {
    nodes: Vec<RenderedAlert>,
    mounted: bool,
}

impl MemoryView {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            mounted: true,
        }
    }

    /// A view whose container was never attached; every operation fails.
    pub fn unmounted() -> Self {
        Self {
            nodes: Vec::new(),
            mounted: false,
        }
    }

    pub fn nodes(&self) -> &[RenderedAlert] {
        &self.nodes
    }

    pub fn titles(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.title.as_str()).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.label.as_str()).collect()
    }

    fn ensure_mounted(&self) -> Result<(), ViewError> {
        if self.mounted {
            Ok(())
        } else {
            Err(ViewError::Unmounted)
        }
    }
}

impl AlertView for MemoryView {
    type Node = RenderedAlert;

    fn create_node(
        &mut self,
        kind: AlertKind,
        title: &str,
        message: &str,
        label: &str,
    ) -> Result<RenderedAlert, ViewError> {
        self.ensure_mounted()?;
        Ok(RenderedAlert {
            class_name: kind.css_class(),
            icon: kind.icon(),
            title: title.to_string(),
            message: message.to_string(),
            label: label.to_string(),
        })
    }

    fn insert_at_head(&mut self, node: RenderedAlert) -> Result<(), ViewError> {
        self.ensure_mounted()?;
        self.nodes.insert(0, node);
        Ok(())
    }

    fn remove_last(&mut self) -> Result<Option<RenderedAlert>, ViewError> {
        self.ensure_mounted()?;
        Ok(self.nodes.pop())
    }

    fn set_label(&mut self, index: usize, text: &str) -> Result<(), ViewError> {
        self.ensure_mounted()?;
        if let Some(node) = self.nodes.get_mut(index) {
            node.label = text.to_string();
        }
        Ok(())
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }
}
