use ahash::AHashMap;
use serde::Serialize;

/// Dependency information derived for one authored node.
///
/// `dependencies` and `dependents` are deduplicated and keep the order in which
/// connections were authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DagNode {
    pub id: String,
    pub dependencies: Vec<String>,
    pub dependents: Vec<String>,
    pub level: usize,
    pub is_entry: bool,
    pub is_exit: bool,
}

/// A connection skipped during construction because one of its endpoints does not exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedConnection {
    pub connection_id: String,
    pub missing_node_id: String,
}

/// Id-keyed arena of `DagNode`s.
///
/// Nodes live in a flat vector in authored order. Edges are stored twice, as
/// index lists, so traversals never chase references and cycles need no special care.
#[derive(Debug, Clone, Default)]
pub struct Dag {
    pub(crate) nodes: Vec<DagNode>,
    pub(crate) index: AHashMap<String, usize>,
    /// `forward[i]` = indices of the dependents of node `i`.
    pub(crate) forward: Vec<Vec<usize>>,
    /// `backward[i]` = indices of the dependencies of node `i`.
    pub(crate) backward: Vec<Vec<usize>>,
    pub(crate) dropped: Vec<DroppedConnection>,
    pub(crate) duplicates: Vec<String>,
}

impl Dag {
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&DagNode> {
        self.index.get(id).map(|&i| &self.nodes[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterates nodes in authored order.
    pub fn iter(&self) -> impl Iterator<Item = &DagNode> {
        self.nodes.iter()
    }

    pub fn entries(&self) -> impl Iterator<Item = &DagNode> {
        self.nodes.iter().filter(|n| n.is_entry)
    }

    pub fn exits(&self) -> impl Iterator<Item = &DagNode> {
        self.nodes.iter().filter(|n| n.is_exit)
    }

    /// Nodes with neither dependencies nor dependents.
    pub fn isolated(&self) -> impl Iterator<Item = &DagNode> {
        self.nodes.iter().filter(|n| n.is_entry && n.is_exit)
    }

    /// Connections that referenced an unknown node and were left out of the graph.
    pub fn dropped_connections(&self) -> &[DroppedConnection] {
        &self.dropped
    }

    /// Node ids that appeared more than once in the authored list.
    pub fn duplicate_nodes(&self) -> &[String] {
        &self.duplicates
    }

    /// Current `level` of every node, keyed by id.
    pub fn levels(&self) -> AHashMap<String, usize> {
        self.nodes.iter().map(|n| (n.id.clone(), n.level)).collect()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_at(&self, index: usize) -> &str {
        &self.nodes[index].id
    }

    pub(crate) fn dependents_of(&self, index: usize) -> &[usize] {
        &self.forward[index]
    }

    pub(crate) fn dependencies_of(&self, index: usize) -> &[usize] {
        &self.backward[index]
    }
}
