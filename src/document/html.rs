//! An HTML page held as text, with its `<head>` acting as the metadata region.
//!
//! The page is run through html5ever's tokenizer so that `</head>` inside a
//! comment, an inline script or a style block is never taken for the real end
//! tag. Only the insertion point comes from the tokenizer; the page text is
//! otherwise left byte-for-byte as it was.

use html5ever::tendril::StrTendril;
use html5ever::tokenizer::states::RawKind;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};

use super::sink::{DataNode, MetadataSink};
use crate::error::{PublishError, Result};
use crate::schema::JSON_LD_CONTENT_TYPE;

const HEAD_CLOSE: &str = "</head";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    source: String,
}

impl HtmlDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn into_string(self) -> String {
        self.source
    }

    pub fn has_metadata_region(&self) -> bool {
        self.head_close().is_ok()
    }

    /// Every `application/ld+json` block inside the head, in document order.
    pub fn data_nodes(&self) -> Result<Vec<DataNode>> {
        let scan = scan(&self.source);
        if scan.head_end.is_none() {
            return Err(unavailable(&scan));
        }
        Ok(scan
            .json_ld
            .iter()
            .map(|payload| DataNode::json_ld(unescape_payload(payload)))
            .collect())
    }

    /// Byte offset of the `<` that opens the real `</head>` end tag.
    fn head_close(&self) -> Result<usize> {
        let scan = scan(&self.source);
        let end = scan.head_end.ok_or_else(|| unavailable(&scan))?;

        // `end` sits just past the tag's `>`; the tag itself starts at the
        // last `</head` before it.
        self.source[..end]
            .to_ascii_lowercase()
            .rfind(HEAD_CLOSE)
            .ok_or_else(|| {
                PublishError::EnvironmentUnavailable("could not locate </head> tag".to_string())
            })
    }
}

impl MetadataSink for HtmlDocument {
    fn append_data_node(&mut self, node: DataNode) -> Result<()> {
        let close = self.head_close()?;
        let rendered = format!(
            "<script type=\"{}\">{}</script>",
            node.content_type,
            escape_payload(&node.payload)
        );
        self.source.insert_str(close, &rendered);
        tracing::debug!(bytes = rendered.len(), at = close, "appended data node to <head>");
        Ok(())
    }

    fn contains_data_node(&self, node: &DataNode) -> Result<bool> {
        if !node.is_json_ld() {
            return Ok(false);
        }
        Ok(self.data_nodes()?.iter().any(|n| n.payload == node.payload))
    }
}

/// Token sink that tracks the head and collects JSON-LD script bodies.
#[derive(Debug, Default)]
struct HeadScanner {
    /// Bytes handed to the tokenizer so far.
    fed: usize,
    head_opened: bool,
    in_head: bool,
    head_end: Option<usize>,
    script: Option<ScriptCapture>,
    json_ld: Vec<String>,
}

#[derive(Debug)]
struct ScriptCapture {
    keep: bool,
    text: String,
}

impl HeadScanner {
    fn start_tag(&mut self, tag: &Tag) -> TokenSinkResult<()> {
        match &*tag.name {
            "head" if !self.head_opened => {
                self.head_opened = true;
                self.in_head = true;
                TokenSinkResult::Continue
            }
            "script" => {
                let keep = self.in_head && is_json_ld_tag(tag);
                self.script = Some(ScriptCapture {
                    keep,
                    text: String::new(),
                });
                TokenSinkResult::RawData(RawKind::ScriptData)
            }
            "style" | "noscript" | "noframes" | "iframe" | "noembed" | "xmp" => {
                TokenSinkResult::RawData(RawKind::Rawtext)
            }
            "title" | "textarea" => TokenSinkResult::RawData(RawKind::Rcdata),
            _ => TokenSinkResult::Continue,
        }
    }

    fn end_tag(&mut self, tag: &Tag) {
        match &*tag.name {
            "head" if self.in_head => {
                self.in_head = false;
                self.head_end = Some(self.fed);
            }
            "script" => {
                if let Some(capture) = self.script.take() {
                    if capture.keep {
                        self.json_ld.push(capture.text);
                    }
                }
            }
            _ => {}
        }
    }
}

impl TokenSink for HeadScanner {
    type Handle = ();

    fn process_token(&mut self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => return self.start_tag(&tag),
                TagKind::EndTag => self.end_tag(&tag),
            },
            Token::CharacterTokens(text) => {
                if let Some(capture) = self.script.as_mut() {
                    capture.text.push_str(&text);
                }
            }
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

/// Tokenizes `source`, feeding it in chunks that each end at a `>`.
///
/// A tag is emitted the moment its closing `>` is consumed, and each chunk
/// holds at most one `>`, so `fed` at emission time is the byte just past the
/// tag.
fn scan(source: &str) -> HeadScanner {
    let mut tokenizer = Tokenizer::new(HeadScanner::default(), TokenizerOpts::default());
    let mut queue = BufferQueue::default();
    let mut fed = 0;

    for chunk in source.split_inclusive('>') {
        fed += chunk.len();
        tokenizer.sink.fed = fed;
        queue.push_back(StrTendril::from_slice(chunk));
        let _ = tokenizer.feed(&mut queue);
    }
    tokenizer.end();

    tokenizer.sink
}

fn unavailable(scan: &HeadScanner) -> PublishError {
    let reason = if scan.head_opened {
        "page has no </head> tag"
    } else {
        "page has no <head> element"
    };
    PublishError::EnvironmentUnavailable(reason.to_string())
}

fn is_json_ld_tag(tag: &Tag) -> bool {
    tag.attrs.iter().any(|attr| {
        &*attr.name.local == "type" && attr.value.trim().eq_ignore_ascii_case(JSON_LD_CONTENT_TYPE)
    })
}

// `</` inside a script body would end the element early. `<\/` is the same
// JSON value.
fn escape_payload(payload: &str) -> String {
    payload.replace("</", "<\\/")
}

fn unescape_payload(payload: &str) -> String {
    payload.replace("<\\/", "</")
}
