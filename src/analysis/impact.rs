use crate::config::ImpactThresholds;
use crate::graph::Dag;
use serde::Serialize;
use std::fmt;

/// Coarse severity of a change, meant for UI coloring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImpactLevel::Low => write!(f, "low"),
            ImpactLevel::Medium => write!(f, "medium"),
            ImpactLevel::High => write!(f, "high"),
        }
    }
}

/// Everything downstream of a node, with its severity classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactReport {
    pub affected: Vec<String>,
    pub critical_path: bool,
    pub impact_level: ImpactLevel,
}

pub struct ImpactAnalyzer<'a> {
    dag: &'a Dag,
    thresholds: ImpactThresholds,
}

impl<'a> ImpactAnalyzer<'a> {
    pub fn new(dag: &'a Dag, thresholds: ImpactThresholds) -> Self {
        Self { dag, thresholds }
    }

    /// Transitive dependents of `node_id`, excluding the node itself.
    /// An unknown id yields an empty, low-impact report.
    pub fn impact(&self, node_id: &str) -> ImpactReport {
        let affected = self.closure(node_id, Dag::dependents_of);
        let (impact_level, critical_path) = self.classify(affected.len());
        ImpactReport {
            affected,
            critical_path,
            impact_level,
        }
    }

    /// Transitive dependencies of `node_id`: everything that must finish before it can run.
    pub fn upstream(&self, node_id: &str) -> Vec<String> {
        self.closure(node_id, Dag::dependencies_of)
    }

    /// Ratios are taken over distinct node ids, so a duplicated id counts once.
    fn classify(&self, affected: usize) -> (ImpactLevel, bool) {
        let total = self.dag.len();
        if total == 0 {
            return (ImpactLevel::Low, false);
        }
        let ratio = affected as f64 / total as f64;
        let level = if ratio > self.thresholds.high {
            ImpactLevel::High
        } else if ratio > self.thresholds.medium {
            ImpactLevel::Medium
        } else {
            ImpactLevel::Low
        };
        (level, ratio > self.thresholds.critical_path)
    }

    /// Iterative DFS in discovery order. The start node is excluded even when a
    /// cycle leads back to it.
    fn closure(&self, node_id: &str, neighbors: fn(&Dag, usize) -> &[usize]) -> Vec<String> {
        let Some(start) = self.dag.index_of(node_id) else {
            return Vec::new();
        };

        let mut visited = vec![false; self.dag.len()];
        visited[start] = true;
        let mut stack: Vec<usize> = neighbors(self.dag, start).iter().rev().copied().collect();
        let mut reached = Vec::new();

        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }
            visited[node] = true;
            reached.push(self.dag.id_at(node).to_string());
            stack.extend(
                neighbors(self.dag, node)
                    .iter()
                    .rev()
                    .filter(|&&next| !visited[next]),
            );
        }

        reached
    }
}
