use crate::domain::{DomainKey, KeyExtractor, SuffixPatternExtractor};
use crate::error::{GraphError, Result};
use crate::model::{ArticleRecord, Author};
use petgraph::graph::DiGraph;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// What to do with an article that carries no author
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingAuthorPolicy {
    /// Fail the whole build
    #[default]
    Reject,
    /// Drop the article (its link is still validated) and keep going
    Skip,
}

/// A distinct site, with everyone who posted to it in first-seen order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainNode {
    pub domain: DomainKey,
    pub authors: Vec<Author>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorNode {
    pub author: Author,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphNode {
    Domain(DomainNode),
    Author(AuthorNode),
}

impl GraphNode {
    pub fn is_domain(&self) -> bool {
        matches!(self, GraphNode::Domain(_))
    }

    pub fn is_author(&self) -> bool {
        matches!(self, GraphNode::Author(_))
    }

    pub fn as_domain(&self) -> Option<&DomainNode> {
        match self {
            GraphNode::Domain(node) => Some(node),
            GraphNode::Author(_) => None,
        }
    }

    pub fn as_author(&self) -> Option<&Author> {
        match self {
            GraphNode::Author(node) => Some(&node.author),
            GraphNode::Domain(_) => None,
        }
    }

    /// Short human readable label: the domain key or the username
    pub fn label(&self) -> &str {
        match self {
            GraphNode::Domain(node) => node.domain.as_str(),
            GraphNode::Author(node) => &node.author.username,
        }
    }
}

/// Domain → author edge. Both ends are indices into [`ArticleGraph::nodes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub source: usize,
    pub target: usize,
}

/// The bipartite domain/author graph.
///
/// All domain nodes come first, followed by all author nodes. The edge
/// indices are positions in `nodes`, which is what force-layout renderers
/// resolve links against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArticleGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<GraphEdge>,
}

impl ArticleGraph {
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&GraphNode> {
        self.nodes.get(index)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn domain_nodes(&self) -> impl Iterator<Item = &DomainNode> {
        self.nodes.iter().filter_map(GraphNode::as_domain)
    }

    pub fn author_nodes(&self) -> impl Iterator<Item = &Author> {
        self.nodes.iter().filter_map(GraphNode::as_author)
    }

    pub fn domain_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_domain()).count()
    }

    pub fn author_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_author()).count()
    }

    /// Authors of the domain node at `index`, `None` if it is not a domain
    pub fn authors_of(&self, index: usize) -> Option<&[Author]> {
        self.node(index)
            .and_then(GraphNode::as_domain)
            .map(|d| d.authors.as_slice())
    }

    /// Index of the author node for `user_id`
    pub fn author_index(&self, user_id: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.as_author().is_some_and(|a| a.user_id == user_id))
    }

    /// Index of the domain node for `key`
    pub fn domain_index(&self, key: &str) -> Option<usize> {
        self.nodes
            .iter()
            .position(|n| n.as_domain().is_some_and(|d| d.domain.as_str() == key))
    }

    /// petgraph view of the same structure; node indices line up with
    /// [`ArticleGraph::nodes`].
    pub fn to_petgraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let indices: Vec<_> = self
            .nodes
            .iter()
            .map(|n| graph.add_node(n.label().to_string()))
            .collect();
        for edge in &self.edges {
            graph.add_edge(indices[edge.source], indices[edge.target], ());
        }
        graph
    }
}

/// Builds an [`ArticleGraph`] from an article feed
pub struct GraphBuilder<E = SuffixPatternExtractor> {
    extractor: E,
    missing_author: MissingAuthorPolicy,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            extractor: SuffixPatternExtractor,
            missing_author: MissingAuthorPolicy::default(),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: KeyExtractor> GraphBuilder<E> {
    pub fn with_missing_author_policy(mut self, policy: MissingAuthorPolicy) -> Self {
        self.missing_author = policy;
        self
    }

    pub fn with_extractor<X: KeyExtractor>(self, extractor: X) -> GraphBuilder<X> {
        GraphBuilder {
            extractor,
            missing_author: self.missing_author,
        }
    }

    /// Build the graph. Either every article is keyed and validated and the
    /// full graph is returned, or the first failure is.
    pub fn build(&self, articles: &[ArticleRecord]) -> Result<ArticleGraph> {
        let mut keyed: Vec<(DomainKey, &Author)> = Vec::with_capacity(articles.len());
        for (index, article) in articles.iter().enumerate() {
            // links are validated even for articles that end up skipped
            let key = self.extractor.extract(&article.link)?;
            let author = match (&article.author, self.missing_author) {
                (Some(author), _) => author,
                (None, MissingAuthorPolicy::Reject) => {
                    return Err(GraphError::MissingAuthor {
                        index,
                        id: article.id.clone(),
                    });
                }
                (None, MissingAuthorPolicy::Skip) => {
                    warn!("Skipping article #{} ('{}'): no author present", index, article.id);
                    continue;
                }
            };
            keyed.push((key, author));
        }

        // Domains, in first-seen order, each with its deduplicated authors
        let mut domain_lookup: HashMap<&DomainKey, usize> = HashMap::new();
        let mut domains: Vec<DomainNode> = Vec::new();
        let mut posted: HashSet<(usize, &str)> = HashSet::new();
        for (key, author) in &keyed {
            let idx = *domain_lookup.entry(key).or_insert_with(|| {
                domains.push(DomainNode {
                    domain: key.clone(),
                    authors: Vec::new(),
                });
                domains.len() - 1
            });
            if posted.insert((idx, author.user_id.as_str())) {
                domains[idx].authors.push((*author).clone());
            }
        }

        // Authors sit after every domain node
        let domain_count = domains.len();
        let mut author_lookup: HashMap<&str, usize> = HashMap::new();
        let mut authors: Vec<AuthorNode> = Vec::new();
        for &(_, author) in &keyed {
            if !author_lookup.contains_key(author.user_id.as_str()) {
                author_lookup.insert(&author.user_id, domain_count + authors.len());
                authors.push(AuthorNode {
                    author: author.clone(),
                });
            }
        }

        let mut edges = Vec::new();
        for (source, domain) in domains.iter().enumerate() {
            for author in &domain.authors {
                if let Some(&target) = author_lookup.get(author.user_id.as_str()) {
                    edges.push(GraphEdge { source, target });
                }
            }
        }

        debug!(
            "Built graph from {} articles: {} domains, {} authors, {} edges",
            articles.len(),
            domain_count,
            authors.len(),
            edges.len()
        );

        let nodes = domains
            .into_iter()
            .map(GraphNode::Domain)
            .chain(authors.into_iter().map(GraphNode::Author))
            .collect();

        Ok(ArticleGraph { nodes, edges })
    }
}

/// Build with the default extractor, rejecting authorless articles
pub fn build_graph(articles: &[ArticleRecord]) -> Result<ArticleGraph> {
    GraphBuilder::new().build(articles)
}
