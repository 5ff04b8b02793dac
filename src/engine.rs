use crate::analysis::{
    ImpactAnalyzer, ImpactReport, ReadinessEngine, TopologicalOrder, TopologicalSorter,
    ValidationResult, Validator,
};
use crate::config::{EngineConfig, ImpactThresholds};
use crate::graph::{self, Dag};
use crate::workflow::WorkflowGraph;

/// Entry point for every question asked about a workflow.
///
/// An `Engine` holds configuration only. Each call rebuilds the dependency graph from the
/// `WorkflowGraph` it is given and returns a fresh result, so one engine can be shared
/// freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

pub struct EngineBuilder {
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_impact_thresholds(mut self, thresholds: ImpactThresholds) -> Self {
        self.config.impact = thresholds;
        self
    }

    pub fn with_dangling_connection_warnings(mut self, enabled: bool) -> Self {
        self.config.report_dangling_connections = enabled;
        self
    }

    pub fn with_duplicate_node_warnings(mut self, enabled: bool) -> Self {
        self.config.report_duplicate_nodes = enabled;
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            config: self.config,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::new()
    }

    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builds the dependency graph with levels assigned.
    pub fn build_dag(&self, workflow: &WorkflowGraph) -> Dag {
        let mut dag = graph::build(&workflow.nodes, &workflow.connections);
        graph::assign_levels(&mut dag);
        dag
    }

    pub fn validate(&self, workflow: &WorkflowGraph) -> ValidationResult {
        Validator::new(&self.config).validate(workflow)
    }

    /// Dependency-respecting order and level buckets.
    ///
    /// Check `validate(..).has_cycles()` first: the order is only sound for acyclic graphs.
    pub fn topological_order(&self, workflow: &WorkflowGraph) -> TopologicalOrder {
        let dag = graph::build(&workflow.nodes, &workflow.connections);
        TopologicalSorter::new(&dag).sort()
    }

    /// Nodes that can run now, given the ids that already completed.
    pub fn ready<I, S>(&self, workflow: &WorkflowGraph, completed: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dag = graph::build(&workflow.nodes, &workflow.connections);
        ReadinessEngine::new(&dag).ready(completed)
    }

    pub fn impact(&self, workflow: &WorkflowGraph, node_id: &str) -> ImpactReport {
        let dag = graph::build(&workflow.nodes, &workflow.connections);
        ImpactAnalyzer::new(&dag, self.config.impact).impact(node_id)
    }

    pub fn upstream(&self, workflow: &WorkflowGraph, node_id: &str) -> Vec<String> {
        let dag = graph::build(&workflow.nodes, &workflow.connections);
        ImpactAnalyzer::new(&dag, self.config.impact).upstream(node_id)
    }
}

/// Validates `workflow` with the default configuration.
pub fn validate(workflow: &WorkflowGraph) -> ValidationResult {
    Engine::default().validate(workflow)
}

pub fn topological_order(workflow: &WorkflowGraph) -> TopologicalOrder {
    Engine::default().topological_order(workflow)
}

pub fn ready<I, S>(workflow: &WorkflowGraph, completed: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Engine::default().ready(workflow, completed)
}

pub fn impact(workflow: &WorkflowGraph, node_id: &str) -> ImpactReport {
    Engine::default().impact(workflow, node_id)
}

pub fn upstream(workflow: &WorkflowGraph, node_id: &str) -> Vec<String> {
    Engine::default().upstream(workflow, node_id)
}
