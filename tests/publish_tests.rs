use docs_schema::document::{HtmlDocument, MetadataSink};
use docs_schema::schema::{fastmcp_runner, from_json_ld, to_json_ld, DESCRIPTOR_KEYS};
use docs_schema::{MetadataPublisher, PublishOutcome, PublisherConfig};
use serde_json::{json, Value};

const EMPTY_HEAD_PAGE: &str = "<!DOCTYPE html><html><head></head><body><p>FastMCP Runner</p></body></html>";

fn expected_descriptor() -> Value {
    json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "FastMCP Runner",
        "description": "A generic OCI-based runner for MCP (Model Context Protocol) servers. Pulls container images from registries and runs them without requiring a Docker daemon.",
        "applicationCategory": "DeveloperApplication",
        "operatingSystem": "Linux",
        "url": "https://fastmcp-runner.readthedocs.io",
        "downloadUrl": "https://github.com/drengskapur/fastmcp-runner",
        "softwareVersion": "0.1.0",
        "author": {
            "@type": "Organization",
            "name": "Drengskapur",
            "url": "https://github.com/drengskapur"
        },
        "license": "https://www.apache.org/licenses/LICENSE-2.0",
        "codeRepository": "https://github.com/drengskapur/fastmcp-runner",
        "programmingLanguage": ["Shell", "Python"],
        "keywords": [
            "MCP",
            "Model Context Protocol",
            "container",
            "OCI",
            "Docker",
            "Hugging Face",
            "serverless",
            "MCP server",
            "container runner"
        ]
    })
}

#[test]
fn test_empty_head_gains_exactly_one_descriptor() {
    let mut page = HtmlDocument::new(EMPTY_HEAD_PAGE);

    let outcome = MetadataPublisher::default().publish(&mut page).unwrap();
    assert_eq!(outcome, PublishOutcome::Appended);

    let nodes = page.data_nodes().unwrap();
    assert_eq!(nodes.len(), 1, "head should hold exactly one data node");

    let parsed: Value = serde_json::from_str(&nodes[0].payload).expect("payload is valid JSON");
    assert_eq!(parsed, expected_descriptor());
}

#[test]
fn test_payload_matches_literal_record_key_for_key() {
    let payload = to_json_ld(&fastmcp_runner()).unwrap();
    let parsed: Value = serde_json::from_str(&payload).unwrap();

    let keys: Vec<&str> = parsed.as_object().unwrap().keys().map(String::as_str).collect();
    let mut expected: Vec<&str> = DESCRIPTOR_KEYS.to_vec();
    let mut actual = keys.clone();
    expected.sort_unstable();
    actual.sort_unstable();
    assert_eq!(actual, expected);
}

#[test]
fn test_canonical_reserialization_is_lossless() {
    let record = fastmcp_runner();
    let payload = to_json_ld(&record).unwrap();

    // serde_json::Value orders object keys, giving a canonical form
    let canonical: Value = serde_json::from_str(&payload).unwrap();
    let reparsed = from_json_ld(&canonical.to_string()).unwrap();

    assert_eq!(reparsed, record);
    assert_eq!(serde_json::to_value(&reparsed).unwrap(), canonical);
}

#[test]
fn test_page_without_head_is_left_alone() {
    let source = "<html><body>no head here</body></html>";
    let mut page = HtmlDocument::new(source);

    let outcome = MetadataPublisher::default().publish_or_skip(&mut page).unwrap();

    assert_eq!(outcome, PublishOutcome::Skipped);
    assert_eq!(page.as_str(), source);
}

#[test]
fn test_double_publish_appends_twice_unless_guarded() {
    let mut page = HtmlDocument::new(EMPTY_HEAD_PAGE);
    let publisher = MetadataPublisher::default();
    publisher.publish(&mut page).unwrap();
    publisher.publish(&mut page).unwrap();
    assert_eq!(page.data_nodes().unwrap().len(), 2);

    let mut guarded_page = HtmlDocument::new(EMPTY_HEAD_PAGE);
    let guarded = MetadataPublisher::new(PublisherConfig::guarded());
    guarded.publish(&mut guarded_page).unwrap();
    assert_eq!(guarded.publish(&mut guarded_page).unwrap(), PublishOutcome::AlreadyPresent);
    assert_eq!(guarded_page.data_nodes().unwrap().len(), 1);
}

#[test]
fn test_existing_head_children_are_preserved() {
    let source = "<html><head><meta charset=\"utf-8\"><link rel=\"stylesheet\" href=\"a.css\"></head><body></body></html>";
    let mut page = HtmlDocument::new(source);
    MetadataPublisher::default().publish(&mut page).unwrap();

    let html = page.as_str();
    let meta = html.find("<meta charset").unwrap();
    let link = html.find("<link rel").unwrap();
    let script = html.find("<script type=\"application/ld+json\">").unwrap();
    assert!(meta < link && link < script);
    assert!(html.ends_with("</script></head><body></body></html>"));

    let node = MetadataPublisher::default().data_node().unwrap();
    assert!(page.contains_data_node(&node).unwrap());
}

#[test]
fn test_head_close_in_inline_script_keeps_script_intact() {
    let script = "<script>var t = \"</head>\";</script>";
    let source = format!("<html><head>{script}<title>x</title></head><body></body></html>");
    let mut page = HtmlDocument::new(source);

    MetadataPublisher::default().publish(&mut page).unwrap();

    let html = page.as_str();
    assert!(html.contains(script), "inline script must be untouched");
    let descriptor = html.find("<script type=\"application/ld+json\">").unwrap();
    assert!(descriptor > html.find("<title>x</title>").unwrap());
    assert!(html.ends_with("</script></head><body></body></html>"));
}

#[test]
fn test_head_close_in_comment_is_not_the_insertion_point() {
    let comment = "<!-- partial ends with </head> -->";
    let source = format!("<html><head>{comment}<meta charset=\"utf-8\"></head><body></body></html>");
    let mut page = HtmlDocument::new(source);

    MetadataPublisher::default().publish(&mut page).unwrap();

    let html = page.as_str();
    assert!(html.contains(comment));
    let nodes = page.data_nodes().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(from_json_ld(&nodes[0].payload).unwrap(), fastmcp_runner());
    assert!(html.find("<script type=").unwrap() > html.find("-->").unwrap());
}
