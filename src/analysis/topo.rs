use crate::graph::{Dag, LevelAssigner};
use serde::Serialize;

/// A dependency-respecting linear order plus the level buckets of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologicalOrder {
    pub nodes: Vec<String>,
    /// `levels[i]` holds the ids at level `i`, in topological order.
    pub levels: Vec<Vec<String>>,
    pub total_levels: usize,
}

impl TopologicalOrder {
    pub fn position(&self, id: &str) -> Option<usize> {
        self.nodes.iter().position(|n| n == id)
    }
}

/// Orders nodes so that each one comes after all of its dependencies.
///
/// Only meaningful for an acyclic graph. On cyclic input every node still appears once,
/// but the edges that close a cycle cannot all be respected.
pub struct TopologicalSorter<'a> {
    dag: &'a Dag,
}

impl<'a> TopologicalSorter<'a> {
    pub fn new(dag: &'a Dag) -> Self {
        Self { dag }
    }

    pub fn sort(&self) -> TopologicalOrder {
        let order = self.post_order();
        let levels = LevelAssigner::new(self.dag).compute();

        let total_levels = levels.iter().max().map_or(0, |max| max + 1);
        let mut buckets: Vec<Vec<String>> = vec![Vec::new(); total_levels];
        for &node in &order {
            buckets[levels[node]].push(self.dag.id_at(node).to_string());
        }

        TopologicalOrder {
            nodes: order
                .into_iter()
                .map(|i| self.dag.id_at(i).to_string())
                .collect(),
            levels: buckets,
            total_levels,
        }
    }

    /// Post-order over dependencies: a node is emitted once everything it depends on is.
    /// Roots are taken in authored order; one global `visited` set.
    fn post_order(&self) -> Vec<usize> {
        let n = self.dag.len();
        let mut visited = vec![false; n];
        let mut order = Vec::with_capacity(n);
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;
                match self.dag.dependencies_of(node).get(cursor) {
                    Some(&dep) => {
                        frame.1 += 1;
                        if !visited[dep] {
                            visited[dep] = true;
                            stack.push((dep, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        order.push(node);
                    }
                }
            }
        }

        order
    }
}
