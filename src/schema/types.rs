use serde::{Deserialize, Serialize};

/// A schema.org `SoftwareApplication` description of a project.
///
/// Built once with every field populated and never mutated afterwards.
/// Fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DescriptorRecord {
    #[serde(rename = "@context")]
    context: String,
    #[serde(rename = "@type")]
    kind: String,
    name: String,
    description: String,
    application_category: String,
    operating_system: String,
    url: String,
    download_url: String,
    software_version: String, // "0.1.0" must stay a string
    author: AuthorRecord,
    license: String,
    code_repository: String,
    programming_language: Vec<String>,
    keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorRecord {
    #[serde(rename = "@type")]
    kind: String,
    name: String,
    url: String,
}

/// Every key a serialized `DescriptorRecord` carries, in emission order.
pub const DESCRIPTOR_KEYS: [&str; 14] = [
    "@context",
    "@type",
    "name",
    "description",
    "applicationCategory",
    "operatingSystem",
    "url",
    "downloadUrl",
    "softwareVersion",
    "author",
    "license",
    "codeRepository",
    "programmingLanguage",
    "keywords",
];

impl AuthorRecord {
    pub fn new(kind: &str, name: &str, url: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Constructor input. Crate-private: the only records built are the fixed
/// ones in `descriptor`.
pub(crate) struct DescriptorFields<'a> {
    pub context: &'a str,
    pub kind: &'a str,
    pub name: &'a str,
    pub description: &'a str,
    pub application_category: &'a str,
    pub operating_system: &'a str,
    pub url: &'a str,
    pub download_url: &'a str,
    pub software_version: &'a str,
    pub author: AuthorRecord,
    pub license: &'a str,
    pub code_repository: &'a str,
    pub programming_language: &'a [&'a str],
    pub keywords: &'a [&'a str],
}

impl DescriptorRecord {
    pub(crate) fn new(fields: DescriptorFields<'_>) -> Self {
        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Self {
            context: fields.context.to_string(),
            kind: fields.kind.to_string(),
            name: fields.name.to_string(),
            description: fields.description.to_string(),
            application_category: fields.application_category.to_string(),
            operating_system: fields.operating_system.to_string(),
            url: fields.url.to_string(),
            download_url: fields.download_url.to_string(),
            software_version: fields.software_version.to_string(),
            author: fields.author,
            license: fields.license.to_string(),
            code_repository: fields.code_repository.to_string(),
            programming_language: owned(fields.programming_language),
            keywords: owned(fields.keywords),
        }
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn application_category(&self) -> &str {
        &self.application_category
    }

    pub fn operating_system(&self) -> &str {
        &self.operating_system
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn download_url(&self) -> &str {
        &self.download_url
    }

    pub fn software_version(&self) -> &str {
        &self.software_version
    }

    pub fn author(&self) -> &AuthorRecord {
        &self.author
    }

    pub fn license(&self) -> &str {
        &self.license
    }

    pub fn code_repository(&self) -> &str {
        &self.code_repository
    }

    pub fn programming_language(&self) -> &[String] {
        &self.programming_language
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// True when every scalar is non-empty and both lists have entries.
    pub fn is_fully_populated(&self) -> bool {
        let scalars = [
            &self.context,
            &self.kind,
            &self.name,
            &self.description,
            &self.application_category,
            &self.operating_system,
            &self.url,
            &self.download_url,
            &self.software_version,
            &self.author.kind,
            &self.author.name,
            &self.author.url,
            &self.license,
            &self.code_repository,
        ];

        scalars.iter().all(|s| !s.is_empty())
            && !self.programming_language.is_empty()
            && !self.keywords.is_empty()
            && self.programming_language.iter().all(|s| !s.is_empty())
            && self.keywords.iter().all(|s| !s.is_empty())
    }
}
