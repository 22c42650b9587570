pub mod config;
pub mod document;
pub mod error;
pub mod publisher;
pub mod schema;
pub mod site;

// Entry points used by the binary and the tests
pub use config::PublisherConfig;
pub use error::{PublishError, Result};
pub use publisher::{MetadataPublisher, PublishOutcome};
