pub mod sink;
pub mod html;
pub mod mock;

pub use sink::{DataNode, MetadataSink};
pub use html::HtmlDocument;
pub use mock::MockHead;
