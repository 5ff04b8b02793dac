use super::dag::Dag;

/// The outcome of one depth-first sweep over the graph.
#[derive(Debug, Clone, Default)]
pub struct CycleScan {
    /// Every cycle closed during the sweep, as the path slice from the re-entered node
    /// to the node that closed it.
    pub cycles: Vec<Vec<String>>,
    /// `(from, to)` index pairs of the edges that closed a cycle.
    pub(crate) back_edges: Vec<(usize, usize)>,
}

/// Enumerates the cycles reachable by a depth-first walk over dependents.
///
/// Every unvisited node is used as a root, so cycles without an entry node are found too.
/// The search keeps going after the first cycle. A node sitting in several cycles may be
/// reported more than once; this is a report, not a cycle basis.
pub struct CycleDetector<'a> {
    dag: &'a Dag,
}

impl<'a> CycleDetector<'a> {
    pub fn new(dag: &'a Dag) -> Self {
        Self { dag }
    }

    pub fn detect(&self) -> Vec<Vec<String>> {
        self.scan().cycles
    }

    /// Iterative DFS with an explicit frame stack; `path_pos` doubles as the on-stack set.
    pub fn scan(&self) -> CycleScan {
        let n = self.dag.len();
        let mut scan = CycleScan::default();
        let mut visited = vec![false; n];
        let mut path_pos: Vec<Option<usize>> = vec![None; n];
        let mut path: Vec<usize> = Vec::new();
        // (node, index of the next dependent to explore)
        let mut stack: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if visited[root] {
                continue;
            }
            visited[root] = true;
            path_pos[root] = Some(0);
            path.push(root);
            stack.push((root, 0));

            while let Some(frame) = stack.last_mut() {
                let (node, cursor) = *frame;
                match self.dag.dependents_of(node).get(cursor) {
                    Some(&next) => {
                        frame.1 += 1;
                        if let Some(pos) = path_pos[next] {
                            scan.cycles.push(
                                path[pos..]
                                    .iter()
                                    .map(|&i| self.dag.id_at(i).to_string())
                                    .collect(),
                            );
                            scan.back_edges.push((node, next));
                        } else if !visited[next] {
                            visited[next] = true;
                            path_pos[next] = Some(path.len());
                            path.push(next);
                            stack.push((next, 0));
                        }
                    }
                    None => {
                        stack.pop();
                        path.pop();
                        path_pos[node] = None;
                    }
                }
            }
        }

        if !scan.cycles.is_empty() {
            log::debug!("Cycle scan found {} cycle(s)", scan.cycles.len());
        }
        scan
    }
}

pub fn detect_cycles(dag: &Dag) -> Vec<Vec<String>> {
    CycleDetector::new(dag).detect()
}
