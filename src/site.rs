//! Post-build pass over a generated documentation site.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::{error, info, warn};
use walkdir::WalkDir;

use crate::document::HtmlDocument;
use crate::publisher::{MetadataPublisher, PublishOutcome};

/// What happened to one page on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    Published(PublishOutcome),
    /// Not valid UTF-8; left untouched.
    Undecodable,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SiteSummary {
    pub appended: usize,
    pub already_present: usize,
    pub skipped: usize,
    pub undecodable: usize,
    pub failed: usize,
}

impl SiteSummary {
    fn record(&mut self, outcome: PageOutcome) {
        match outcome {
            PageOutcome::Published(PublishOutcome::Appended) => self.appended += 1,
            PageOutcome::Published(PublishOutcome::AlreadyPresent) => self.already_present += 1,
            PageOutcome::Published(PublishOutcome::Skipped) => self.skipped += 1,
            PageOutcome::Undecodable => self.undecodable += 1,
        }
    }

    pub fn pages(&self) -> usize {
        self.appended + self.already_present + self.skipped + self.undecodable + self.failed
    }
}

/// Expands the given paths into HTML files. Directories are walked, files
/// are taken as given. A path that cannot be walked is an error.
pub fn collect_pages(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut pages = Vec::new();

    for root in paths {
        if root.is_file() {
            pages.push(root.clone());
            continue;
        }

        for entry in WalkDir::new(root).follow_links(false) {
            let entry = entry.with_context(|| format!("failed to walk {}", root.display()))?;
            let path = entry.path();
            if path.is_file() && path.extension().map_or(false, |ext| ext == "html") {
                pages.push(path.to_path_buf());
            }
        }
    }

    pages.sort();
    Ok(pages)
}

/// Publishes into one page on disk. The file is only rewritten when a node
/// was appended.
pub fn publish_page(path: &Path, publisher: &MetadataPublisher) -> Result<PageOutcome> {
    // 1. Load raw bytes; a page we cannot decode is skipped, not fatal
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let source = match String::from_utf8(bytes) {
        Ok(source) => source,
        Err(e) => {
            warn!(page = %path.display(), "page is not valid UTF-8, left unchanged: {}", e);
            return Ok(PageOutcome::Undecodable);
        }
    };

    // 2. Publish into the in-memory page
    let mut document = HtmlDocument::new(source);
    let outcome = publisher
        .publish_or_skip(&mut document)
        .with_context(|| format!("failed to publish into {}", path.display()))?;

    // 3. Write back only if something changed
    match outcome {
        PublishOutcome::Appended => {
            fs::write(path, document.as_str())
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        PublishOutcome::Skipped => warn!(page = %path.display(), "page left unchanged"),
        PublishOutcome::AlreadyPresent => {}
    }

    Ok(PageOutcome::Published(outcome))
}

/// Runs every page even when some fail, then reports failure if any did.
pub fn publish_site(paths: &[PathBuf], publisher: &MetadataPublisher) -> Result<SiteSummary> {
    // 1. Resolve pages up front so a bad root fails before anything is written
    let pages = collect_pages(paths)?;
    let mut summary = SiteSummary::default();

    // 2. Visit every page; one bad page must not strand the rest
    for page in &pages {
        match publish_page(page, publisher) {
            Ok(outcome) => summary.record(outcome),
            Err(e) => {
                error!(page = %page.display(), "{:#}", e);
                summary.failed += 1;
            }
        }
    }

    // 3. Report
    info!(
        pages = summary.pages(),
        appended = summary.appended,
        already_present = summary.already_present,
        skipped = summary.skipped,
        undecodable = summary.undecodable,
        failed = summary.failed,
        "structured data pass complete"
    );

    if summary.failed > 0 {
        bail!("{} of {} page(s) failed", summary.failed, summary.pages());
    }
    Ok(summary)
}
