use crate::error::Result;
use crate::schema::JSON_LD_CONTENT_TYPE;

/// An inert, non-executable block of data destined for a document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataNode {
    pub content_type: String,
    pub payload: String,
}

impl DataNode {
    pub fn json_ld(payload: impl Into<String>) -> Self {
        Self {
            content_type: JSON_LD_CONTENT_TYPE.to_string(),
            payload: payload.into(),
        }
    }

    pub fn is_json_ld(&self) -> bool {
        self.content_type.eq_ignore_ascii_case(JSON_LD_CONTENT_TYPE)
    }
}

/// Anything with a metadata region that can take inert data nodes.
///
/// Implementors return `PublishError::EnvironmentUnavailable` when that
/// region does not exist.
pub trait MetadataSink {
    /// Appends `node` as the last child of the metadata region.
    fn append_data_node(&mut self, node: DataNode) -> Result<()>;

    fn contains_data_node(&self, node: &DataNode) -> Result<bool>;
}
