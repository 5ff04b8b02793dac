use super::dag::{Dag, DagNode, DroppedConnection};
use crate::workflow::{Connection, WorkflowNode};
use ahash::{AHashMap, AHashSet};

/// Turns the authored node and connection lists into a `Dag` arena.
///
/// Cycles are legal at this layer. Connections whose source or target is unknown
/// are recorded in `Dag::dropped_connections` and otherwise ignored.
pub struct GraphBuilder<'a> {
    nodes: &'a [WorkflowNode],
    connections: &'a [Connection],
}

impl<'a> GraphBuilder<'a> {
    pub fn new(nodes: &'a [WorkflowNode], connections: &'a [Connection]) -> Self {
        Self { nodes, connections }
    }

    pub fn build(self) -> Dag {
        let mut dag = Dag {
            nodes: Vec::with_capacity(self.nodes.len()),
            index: AHashMap::with_capacity(self.nodes.len()),
            ..Dag::default()
        };

        for node in self.nodes {
            if dag.index.contains_key(&node.id) {
                log::warn!("Duplicate node id '{}', keeping the first occurrence", node.id);
                dag.duplicates.push(node.id.clone());
                continue;
            }
            dag.index.insert(node.id.clone(), dag.nodes.len());
            dag.nodes.push(DagNode {
                id: node.id.clone(),
                dependencies: Vec::new(),
                dependents: Vec::new(),
                level: 0,
                is_entry: false,
                is_exit: false,
            });
        }
        dag.forward = vec![Vec::new(); dag.nodes.len()];
        dag.backward = vec![Vec::new(); dag.nodes.len()];
        let mut seen: AHashSet<(usize, usize)> = AHashSet::with_capacity(self.connections.len());

        for connection in self.connections {
            let (source, target) = match self.resolve(&dag, connection) {
                Ok(pair) => pair,
                Err(dropped) => {
                    log::debug!(
                        "Dropping connection '{}': node '{}' does not exist",
                        dropped.connection_id,
                        dropped.missing_node_id
                    );
                    dag.dropped.push(dropped);
                    continue;
                }
            };

            // Parallel connections between the same pair collapse into one edge.
            if !seen.insert((source, target)) {
                continue;
            }
            dag.forward[source].push(target);
            dag.backward[target].push(source);
            let target_id = dag.nodes[target].id.clone();
            let source_id = dag.nodes[source].id.clone();
            dag.nodes[source].dependents.push(target_id);
            dag.nodes[target].dependencies.push(source_id);
        }

        for node in &mut dag.nodes {
            node.is_entry = node.dependencies.is_empty();
            node.is_exit = node.dependents.is_empty();
        }

        log::trace!(
            "Built graph with {} nodes, {} dropped connections",
            dag.nodes.len(),
            dag.dropped.len()
        );
        dag
    }

    fn resolve(
        &self,
        dag: &Dag,
        connection: &Connection,
    ) -> Result<(usize, usize), DroppedConnection> {
        let lookup = |id: &str| {
            dag.index_of(id).ok_or_else(|| DroppedConnection {
                connection_id: connection.id.clone(),
                missing_node_id: id.to_string(),
            })
        };
        Ok((lookup(&connection.source)?, lookup(&connection.target)?))
    }
}

/// Builds the `Dag` for an authored node and connection list.
pub fn build(nodes: &[WorkflowNode], connections: &[Connection]) -> Dag {
    GraphBuilder::new(nodes, connections).build()
}
