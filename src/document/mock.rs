use super::sink::{DataNode, MetadataSink};
use crate::error::{PublishError, Result};

/// Recording sink. Stands in for a live document head.
#[derive(Debug, Default)]
pub struct MockHead {
    nodes: Vec<DataNode>,
    unavailable: bool,
    // Handed back by the next append.
    reject_with: Option<PublishError>,
}

impl MockHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink that behaves like a document without a head region.
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// A sink whose next append fails with `err`.
    pub fn rejecting(err: PublishError) -> Self {
        Self {
            reject_with: Some(err),
            ..Self::default()
        }
    }

    pub fn nodes(&self) -> &[DataNode] {
        &self.nodes
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(PublishError::EnvironmentUnavailable(
                "mock head is detached".to_string(),
            ));
        }
        Ok(())
    }
}

impl MetadataSink for MockHead {
    fn append_data_node(&mut self, node: DataNode) -> Result<()> {
        self.check()?;
        if let Some(err) = self.reject_with.take() {
            return Err(err);
        }
        self.nodes.push(node);
        Ok(())
    }

    fn contains_data_node(&self, node: &DataNode) -> Result<bool> {
        self.check()?;
        Ok(self.nodes.contains(node))
    }
}
