use super::cycles::CycleDetector;
use super::dag::Dag;
use ahash::AHashSet;
use std::collections::VecDeque;

/// Assigns every node its distance from the start of the workflow.
///
/// A level is the length of the longest path reaching the node from any node without
/// dependencies. Edges that close a cycle (as found by `CycleDetector`) are ignored, which
/// leaves an acyclic graph; levels are then relaxed in Kahn order. The result does not
/// depend on the order in which entries happen to be visited.
pub struct LevelAssigner<'a> {
    dag: &'a Dag,
}

impl<'a> LevelAssigner<'a> {
    pub fn new(dag: &'a Dag) -> Self {
        Self { dag }
    }

    /// Returns the level of each node, indexed like the arena.
    pub fn compute(&self) -> Vec<usize> {
        let scan = CycleDetector::new(self.dag).scan();
        let back_edges: AHashSet<(usize, usize)> = scan.back_edges.into_iter().collect();
        let n = self.dag.len();

        let mut indegree: Vec<usize> = (0..n)
            .map(|i| {
                self.dag
                    .dependencies_of(i)
                    .iter()
                    .filter(|&&dep| !back_edges.contains(&(dep, i)))
                    .count()
            })
            .collect();

        let mut levels = vec![0usize; n];
        let mut queue: VecDeque<usize> = (0..n).filter(|&i| indegree[i] == 0).collect();

        while let Some(node) = queue.pop_front() {
            for &next in self.dag.dependents_of(node) {
                if back_edges.contains(&(node, next)) {
                    continue;
                }
                levels[next] = levels[next].max(levels[node] + 1);
                indegree[next] -= 1;
                if indegree[next] == 0 {
                    queue.push_back(next);
                }
            }
        }

        levels
    }
}

/// Writes computed levels into the `level` field of every node.
pub fn assign_levels(dag: &mut Dag) {
    let levels = LevelAssigner::new(dag).compute();
    for (node, level) in dag.nodes.iter_mut().zip(levels) {
        node.level = level;
    }
}
