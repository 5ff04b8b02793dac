use crate::config::EngineConfig;
use crate::error::{Diagnostic, Severity};
use crate::graph::{self, Dag};
use crate::workflow::{NodeKind, WorkflowGraph, WorkflowNode};
use itertools::Itertools;
use serde::Serialize;

/// The outcome of a validation pass.
///
/// `errors` and `warnings` carry the rendered messages; `diagnostics` keeps the typed
/// findings in the same order for callers that want to match on them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub cycles: Vec<Vec<String>>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    fn from_diagnostics(diagnostics: Vec<Diagnostic>, cycles: Vec<Vec<String>>) -> Self {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            diagnostics.iter().partition_map(|d| match d.severity() {
                Severity::Error => itertools::Either::Left(d.to_string()),
                Severity::Warning => itertools::Either::Right(d.to_string()),
            });
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
            cycles,
            diagnostics,
        }
    }

    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }
}

/// Runs every structural rule against a workflow. Rules are independent and never
/// short-circuit, so a single pass reports everything that is wrong.
pub struct Validator<'a> {
    config: &'a EngineConfig,
}

impl<'a> Validator<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn validate(&self, workflow: &WorkflowGraph) -> ValidationResult {
        let dag = graph::build(&workflow.nodes, &workflow.connections);
        self.validate_dag(&dag, &workflow.nodes)
    }

    /// Validates an already built arena. `nodes` must be the list it was built from.
    pub fn validate_dag(&self, dag: &Dag, nodes: &[WorkflowNode]) -> ValidationResult {
        let cycles = graph::detect_cycles(dag);
        let mut diagnostics = Vec::new();

        if !cycles.is_empty() {
            diagnostics.push(Diagnostic::CircularDependencies {
                count: cycles.len(),
            });
        }

        Self::check_structure(dag, &mut diagnostics);
        Self::check_node_kinds(nodes, &mut diagnostics);

        if self.config.report_dangling_connections {
            diagnostics.extend(dag.dropped_connections().iter().map(|dropped| {
                Diagnostic::DanglingConnection {
                    connection_id: dropped.connection_id.clone(),
                    missing_node_id: dropped.missing_node_id.clone(),
                }
            }));
        }
        if self.config.report_duplicate_nodes {
            diagnostics.extend(
                dag.duplicate_nodes()
                    .iter()
                    .unique()
                    .map(|id| Diagnostic::DuplicateNode(id.clone())),
            );
        }

        let result = ValidationResult::from_diagnostics(diagnostics, cycles);
        log::debug!(
            "Validated {} nodes: {} errors, {} warnings",
            dag.len(),
            result.errors.len(),
            result.warnings.len()
        );
        result
    }

    /// Entry, exit and isolation rules, based on the derived flags.
    fn check_structure(dag: &Dag, diagnostics: &mut Vec<Diagnostic>) {
        match dag.entries().count() {
            0 => diagnostics.push(Diagnostic::NoStartNode),
            1 => {}
            count => diagnostics.push(Diagnostic::MultipleStartNodes { count }),
        }

        if dag.exits().count() == 0 {
            diagnostics.push(Diagnostic::NoEndNode);
        }

        let isolated = dag.isolated().count();
        if isolated > 0 {
            diagnostics.push(Diagnostic::IsolatedNodes { count: isolated });
        }
    }

    /// Exactly one authored START and one authored END, regardless of how they are wired.
    fn check_node_kinds(nodes: &[WorkflowNode], diagnostics: &mut Vec<Diagnostic>) {
        let counts = nodes.iter().map(WorkflowNode::kind).counts();
        let starts = counts.get(&NodeKind::Start).copied().unwrap_or(0);
        let ends = counts.get(&NodeKind::End).copied().unwrap_or(0);

        if starts != 1 {
            diagnostics.push(Diagnostic::StartKindCardinality { found: starts });
        }
        if ends != 1 {
            diagnostics.push(Diagnostic::EndKindCardinality { found: ends });
        }
    }
}
