//! Core diagram structures: clusters and the diagram root.

use indexmap::IndexMap;
use thiserror::Error;

use crate::semantic::element::{Id, Node, Relation};

/// Errors raised while assembling or validating a diagram model.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("duplicate node id `{0}`")]
    DuplicateNode(Id),

    #[error("relation references unknown node `{0}`")]
    UnknownNode(Id),
}

/// A visual grouping of nodes and nested clusters.
///
/// Clusters carry no identity of their own; they only contribute a
/// labeled boundary in the rendered image (cloud, VPC, subnet group,
/// availability zone).
#[derive(Debug, Clone, Default)]
pub struct Cluster {
    label: String,
    nodes: Vec<Node>,
    children: Vec<Cluster>,
}

impl Cluster {
    /// Create an empty cluster with the given boundary label.
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }

    /// Add a node to this cluster.
    pub fn with_node(mut self, node: Node) -> Self {
        self.nodes.push(node);
        self
    }

    /// Nest a child cluster inside this one.
    pub fn with_cluster(mut self, child: Cluster) -> Self {
        self.children.push(child);
        self
    }

    /// Get the boundary label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Borrow the nodes owned directly by this cluster.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Borrow the nested child clusters.
    pub fn children(&self) -> &[Cluster] {
        &self.children
    }
}

/// A complete diagram: title, node tree, and relation list.
///
/// Nodes live either at the diagram root (outside every boundary) or
/// inside the cluster tree. Relations refer to nodes by [`Id`] and are
/// checked by [`validate`](Self::validate) before export.
#[derive(Debug, Clone)]
pub struct Diagram {
    title: String,
    nodes: Vec<Node>,
    clusters: Vec<Cluster>,
    relations: Vec<Relation>,
}

impl Diagram {
    /// Create an empty diagram with the given title.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            nodes: Vec::new(),
            clusters: Vec::new(),
            relations: Vec::new(),
        }
    }

    /// Add a node at the diagram root, outside every cluster boundary.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Add a top-level cluster.
    pub fn add_cluster(&mut self, cluster: Cluster) {
        self.clusters.push(cluster);
    }

    /// Add a relation between two declared nodes.
    pub fn add_relation(&mut self, relation: Relation) {
        self.relations.push(relation);
    }

    /// Get the diagram title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Borrow the root-level nodes.
    pub fn root_nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Borrow the top-level clusters.
    pub fn clusters(&self) -> &[Cluster] {
        &self.clusters
    }

    /// Borrow the relation list.
    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    /// All nodes in declaration order: root nodes first, then a
    /// depth-first walk of the cluster tree (cluster-owned nodes before
    /// nested clusters). The order is deterministic across runs.
    pub fn nodes(&self) -> Vec<&Node> {
        fn walk<'a>(cluster: &'a Cluster, out: &mut Vec<&'a Node>) {
            out.extend(cluster.nodes().iter());
            for child in cluster.children() {
                walk(child, out);
            }
        }

        let mut out: Vec<&Node> = self.nodes.iter().collect();
        for cluster in &self.clusters {
            walk(cluster, &mut out);
        }
        out
    }

    /// Check model consistency: node ids must be unique across the
    /// whole tree and every relation endpoint must name a declared
    /// node.
    ///
    /// # Errors
    ///
    /// Returns the first [`Error`] encountered, in declaration order.
    pub fn validate(&self) -> Result<(), Error> {
        let mut registry: IndexMap<&Id, &Node> = IndexMap::new();
        for node in self.nodes() {
            if registry.insert(node.id(), node).is_some() {
                return Err(Error::DuplicateNode(node.id().clone()));
            }
        }

        for relation in &self.relations {
            if !registry.contains_key(relation.source()) {
                return Err(Error::UnknownNode(relation.source().clone()));
            }
            if !registry.contains_key(relation.target()) {
                return Err(Error::UnknownNode(relation.target().clone()));
            }
        }

        Ok(())
    }
}
