use crate::graph::Dag;

/// Computes the readiness frontier: nodes that have not completed and whose
/// dependencies all have. Ids in the completed set that are not part of the graph
/// are ignored.
pub struct ReadinessEngine<'a> {
    dag: &'a Dag,
}

impl<'a> ReadinessEngine<'a> {
    pub fn new(dag: &'a Dag) -> Self {
        Self { dag }
    }

    /// Returns the ready node ids in authored order.
    pub fn ready<I, S>(&self, completed: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut done = vec![false; self.dag.len()];
        for id in completed {
            if let Some(index) = self.dag.index_of(id.as_ref()) {
                done[index] = true;
            }
        }

        (0..self.dag.len())
            .filter(|&i| !done[i])
            .filter(|&i| self.dag.dependencies_of(i).iter().all(|&dep| done[dep]))
            .map(|i| self.dag.id_at(i).to_string())
            .collect()
    }
}
