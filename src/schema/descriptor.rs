use super::types::{AuthorRecord, DescriptorFields, DescriptorRecord};

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const APPLICATION_TYPE: &str = "SoftwareApplication";
pub const ORGANIZATION_TYPE: &str = "Organization";

pub const NAME: &str = "FastMCP Runner";
pub const DESCRIPTION: &str = "A generic OCI-based runner for MCP (Model Context Protocol) servers. Pulls container images from registries and runs them without requiring a Docker daemon.";
pub const APPLICATION_CATEGORY: &str = "DeveloperApplication";
pub const OPERATING_SYSTEM: &str = "Linux";
pub const URL: &str = "https://fastmcp-runner.readthedocs.io";
pub const DOWNLOAD_URL: &str = "https://github.com/drengskapur/fastmcp-runner";
pub const SOFTWARE_VERSION: &str = "0.1.0";

pub const AUTHOR_NAME: &str = "Drengskapur";
pub const AUTHOR_URL: &str = "https://github.com/drengskapur";

pub const LICENSE: &str = "https://www.apache.org/licenses/LICENSE-2.0";
pub const CODE_REPOSITORY: &str = "https://github.com/drengskapur/fastmcp-runner";

pub const PROGRAMMING_LANGUAGES: [&str; 2] = ["Shell", "Python"];

pub const KEYWORDS: [&str; 9] = [
    "MCP",
    "Model Context Protocol",
    "container",
    "OCI",
    "Docker",
    "Hugging Face",
    "serverless",
    "MCP server",
    "container runner",
];

/// The descriptor published on every FastMCP Runner documentation page.
pub fn fastmcp_runner() -> DescriptorRecord {
    DescriptorRecord::new(DescriptorFields {
        context: SCHEMA_CONTEXT,
        kind: APPLICATION_TYPE,
        name: NAME,
        description: DESCRIPTION,
        application_category: APPLICATION_CATEGORY,
        operating_system: OPERATING_SYSTEM,
        url: URL,
        download_url: DOWNLOAD_URL,
        software_version: SOFTWARE_VERSION,
        author: AuthorRecord::new(ORGANIZATION_TYPE, AUTHOR_NAME, AUTHOR_URL),
        license: LICENSE,
        code_repository: CODE_REPOSITORY,
        programming_language: &PROGRAMMING_LANGUAGES,
        keywords: &KEYWORDS,
    })
}
