use tracing::{debug, warn};

use crate::config::PublisherConfig;
use crate::document::{DataNode, MetadataSink};
use crate::error::Result;
use crate::schema::{fastmcp_runner, to_json_ld};

/// What a single publish did to the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishOutcome {
    Appended,
    /// Guard enabled and the same node was already there.
    AlreadyPresent,
    /// No metadata region; nothing was touched.
    Skipped,
}

#[derive(Debug, Default)]
pub struct MetadataPublisher {
    config: PublisherConfig,
}

impl MetadataPublisher {
    pub fn new(config: PublisherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PublisherConfig {
        &self.config
    }

    /// The inert node this publisher attaches. Pure.
    pub fn data_node(&self) -> Result<DataNode> {
        let record = fastmcp_runner();
        Ok(DataNode::json_ld(to_json_ld(&record)?))
    }

    /// Builds the descriptor, encodes it and appends it to `sink`.
    ///
    /// Fails with `EnvironmentUnavailable` if the sink has no metadata region.
    pub fn publish<S: MetadataSink + ?Sized>(&self, sink: &mut S) -> Result<PublishOutcome> {
        let node = self.data_node()?;

        if self.config.skip_if_present && sink.contains_data_node(&node)? {
            debug!("descriptor already present, not appending");
            return Ok(PublishOutcome::AlreadyPresent);
        }

        sink.append_data_node(node)?;
        Ok(PublishOutcome::Appended)
    }

    /// Like `publish`, but a missing document environment is logged and
    /// reported as `Skipped` so the caller carries on rendering. Any other
    /// failure is returned.
    pub fn publish_or_skip<S: MetadataSink + ?Sized>(&self, sink: &mut S) -> Result<PublishOutcome> {
        match self.publish(sink) {
            Ok(outcome) => Ok(outcome),
            Err(e) if e.is_environment_unavailable() => {
                warn!("structured data not published: {}", e);
                Ok(PublishOutcome::Skipped)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MockHead;
    use crate::error::PublishError;
    use crate::schema::from_json_ld;

    #[test]
    fn publish_appends_one_json_ld_node() {
        let mut head = MockHead::new();
        let outcome = MetadataPublisher::default().publish(&mut head).unwrap();

        assert_eq!(outcome, PublishOutcome::Appended);
        assert_eq!(head.nodes().len(), 1);
        assert_eq!(head.nodes()[0].content_type, "application/ld+json");
        assert_eq!(from_json_ld(&head.nodes()[0].payload).unwrap(), fastmcp_runner());
    }

    #[test]
    fn publishing_twice_duplicates_by_default() {
        let mut head = MockHead::new();
        let publisher = MetadataPublisher::default();
        publisher.publish(&mut head).unwrap();
        publisher.publish(&mut head).unwrap();

        assert_eq!(head.nodes().len(), 2);
        assert_eq!(head.nodes()[0], head.nodes()[1]);
    }

    #[test]
    fn guard_prevents_duplicate() {
        let mut head = MockHead::new();
        let publisher = MetadataPublisher::new(PublisherConfig::guarded());

        assert_eq!(publisher.publish(&mut head).unwrap(), PublishOutcome::Appended);
        assert_eq!(publisher.publish(&mut head).unwrap(), PublishOutcome::AlreadyPresent);
        assert_eq!(head.nodes().len(), 1);
    }

    #[test]
    fn unavailable_environment_is_reported() {
        let mut head = MockHead::unavailable();
        let err = MetadataPublisher::default().publish(&mut head).unwrap_err();
        assert!(err.is_environment_unavailable());
    }

    #[test]
    fn publish_or_skip_does_not_fail() {
        let mut head = MockHead::unavailable();
        let outcome = MetadataPublisher::default().publish_or_skip(&mut head).unwrap();
        assert_eq!(outcome, PublishOutcome::Skipped);
        assert!(head.nodes().is_empty());
    }

    #[test]
    fn publish_or_skip_surfaces_other_errors() {
        let encode_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let mut head = MockHead::rejecting(PublishError::Serialize(encode_error));

        let err = MetadataPublisher::default().publish_or_skip(&mut head).unwrap_err();

        assert!(!err.is_environment_unavailable());
        assert!(matches!(err, PublishError::Serialize(_)));
        assert!(head.nodes().is_empty());
    }

    #[test]
    fn works_through_trait_object() {
        let mut head = MockHead::new();
        let sink: &mut dyn MetadataSink = &mut head;
        MetadataPublisher::default().publish_or_skip(sink).unwrap();
        assert_eq!(head.nodes().len(), 1);
    }
}
