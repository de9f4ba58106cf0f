//! Immutable link graph over a corpus of pages.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Directed graph of pages and the pages they link to.
///
/// Pages are stored in sorted identifier order and addressed internally by
/// their position in that order. Self-links and links to pages outside the
/// graph are dropped during construction, so every stored edge points at a
/// known page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkGraph {
    pages: Vec<String>,
    index: HashMap<String, usize>,
    outlinks: Vec<Vec<usize>>,
}

impl LinkGraph {
    /// Build a graph from `(page, links)` pairs.
    ///
    /// Repeated pages have their link sets merged.
    pub fn from_corpus<I, P, L, T>(corpus: I) -> Self
    where
        I: IntoIterator<Item = (P, L)>,
        P: Into<String>,
        L: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for (page, links) in corpus {
            raw.entry(page.into())
                .or_default()
                .extend(links.into_iter().map(Into::into));
        }

        let pages: Vec<String> = raw.keys().cloned().collect();
        let index: HashMap<String, usize> = pages
            .iter()
            .enumerate()
            .map(|(i, page)| (page.clone(), i))
            .collect();

        let outlinks = raw
            .iter()
            .enumerate()
            .map(|(src, (_, links))| {
                // BTreeSet iteration keeps targets sorted and unique
                links
                    .iter()
                    .filter_map(|link| index.get(link).copied())
                    .filter(|&tgt| tgt != src)
                    .collect()
            })
            .collect();

        Self {
            pages,
            index,
            outlinks,
        }
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Page identifiers in sorted order.
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn index_of(&self, page: &str) -> Option<usize> {
        self.index.get(page).copied()
    }

    /// Indices of the pages linked from `idx`, sorted ascending.
    pub fn outlinks(&self, idx: usize) -> &[usize] {
        &self.outlinks[idx]
    }

    pub fn out_degree(&self, idx: usize) -> usize {
        self.outlinks[idx].len()
    }

    /// A page with no outgoing links.
    pub fn is_dangling(&self, idx: usize) -> bool {
        self.outlinks[idx].is_empty()
    }

    /// Names of the pages linked from `page`, or `None` if the page is unknown.
    pub fn links_of(&self, page: &str) -> Option<impl Iterator<Item = &str> + '_> {
        let idx = self.index_of(page)?;
        Some(self.outlinks[idx].iter().map(|&tgt| self.pages[tgt].as_str()))
    }

    pub fn edge_count(&self) -> usize {
        self.outlinks.iter().map(Vec::len).sum()
    }

    pub fn dangling_count(&self) -> usize {
        self.outlinks.iter().filter(|links| links.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> LinkGraph {
        LinkGraph::from_corpus(edges.iter().map(|(p, links)| (*p, links.iter().copied())))
    }

    #[test]
    fn test_pages_are_sorted() {
        let g = graph(&[("c.html", &[]), ("a.html", &[]), ("b.html", &[])]);
        assert_eq!(g.pages(), ["a.html", "b.html", "c.html"]);
        assert_eq!(g.index_of("b.html"), Some(1));
        assert_eq!(g.index_of("z.html"), None);
    }

    #[test]
    fn test_self_links_dropped() {
        let g = graph(&[("a.html", &["a.html", "b.html"]), ("b.html", &[])]);
        let links: Vec<&str> = g.links_of("a.html").unwrap().collect();
        assert_eq!(links, vec!["b.html"]);
    }

    #[test]
    fn test_links_outside_corpus_dropped() {
        let g = graph(&[("a.html", &["missing.html", "b.html"]), ("b.html", &["elsewhere.html"])]);
        assert_eq!(g.edge_count(), 1);
        assert!(g.is_dangling(g.index_of("b.html").unwrap()));
        assert_eq!(g.dangling_count(), 1);
    }

    #[test]
    fn test_repeated_pages_merge_links() {
        let g = graph(&[
            ("a.html", &["b.html"]),
            ("a.html", &["c.html", "b.html"]),
            ("b.html", &[]),
            ("c.html", &[]),
        ]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.out_degree(0), 2);
        assert_eq!(g.outlinks(0), &[1, 2]);
    }

    #[test]
    fn test_empty_graph() {
        let g = LinkGraph::from_corpus(Vec::<(String, Vec<String>)>::new());
        assert!(g.is_empty());
        assert_eq!(g.edge_count(), 0);
        assert!(g.links_of("a.html").is_none());
    }
}
