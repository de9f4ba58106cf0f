//! Building a link graph from a directory of HTML pages

use crate::error::Result;
use crate::graph::LinkGraph;
use glob::Pattern;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

lazy_static! {
    static ref HREF_RE: Regex =
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("Invalid regex");
}

/// Scan options
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Glob matched against file names in the corpus directory
    pub pattern: String,
    pub follow_symlinks: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            pattern: "*.html".to_string(),
            follow_symlinks: true,
        }
    }
}

/// A page found in the corpus directory
#[derive(Debug, Clone)]
pub struct CorpusPage {
    pub path: PathBuf,
    pub name: String,
}

/// List the pages directly inside `dir`, sorted by name. Subdirectories are
/// not entered.
pub fn scan_pages(dir: &Path, options: &ScanOptions) -> Result<Vec<CorpusPage>> {
    let pattern = Pattern::new(&options.pattern)?;
    let mut pages = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(options.follow_symlinks)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!("Skipping non UTF-8 file name {:?}", entry.path());
            continue;
        };

        if pattern.matches(name) {
            pages.push(CorpusPage {
                path: entry.path().to_path_buf(),
                name: name.to_string(),
            });
        }
    }

    Ok(pages)
}

/// Every `href` target of an `<a>` tag in `content`.
pub fn extract_links(content: &str) -> BTreeSet<String> {
    HREF_RE
        .captures_iter(content)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Read every page in `dir` and link pages by file name.
///
/// Links pointing back at the same page or at files outside the corpus are
/// dropped.
pub fn load_corpus(dir: &Path, options: &ScanOptions) -> Result<LinkGraph> {
    let pages = scan_pages(dir, options)?;

    let mut corpus = Vec::with_capacity(pages.len());
    for page in pages {
        let content = std::fs::read_to_string(&page.path)?;
        corpus.push((page.name, extract_links(&content)));
    }

    let graph = LinkGraph::from_corpus(corpus);
    tracing::info!(
        "Loaded corpus from {}: {} pages, {} links, {} dangling",
        dir.display(),
        graph.len(),
        graph.edge_count(),
        graph.dangling_count()
    );

    Ok(graph)
}
