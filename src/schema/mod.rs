pub mod types;
pub mod descriptor;
pub mod encode;

pub use types::*;
pub use descriptor::fastmcp_runner;
pub use encode::{from_json_ld, to_json_ld, JSON_LD_CONTENT_TYPE};
