use super::config::{NodeConfig, NodeKind};
use crate::error::WorkflowLoadError;
use serde::{Deserialize, Serialize};
use std::fs;

/// The authored workflow: a flat list of nodes and the directed connections between them.
/// This is the only input the engine reads; every derived structure is rebuilt from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkflowGraph {
    #[serde(default)]
    pub nodes: Vec<WorkflowNode>,
    #[serde(default, alias = "edges")]
    pub connections: Vec<Connection>,
}

/// A single node placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub config: NodeConfig,
}

/// A directed edge `source -> target`.
///
/// Handles let a node expose several named inputs or outputs. They never change
/// dependency semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: ConnectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    #[default]
    Default,
    Conditional,
    Success,
    Failure,
}

/// A guard attached to a connection, interpreted by the executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub operator: ConditionOperator,
    #[serde(default)]
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    GreaterThan,
    LessThan,
    Contains,
    Exists,
}

impl WorkflowNode {
    /// Creates a node with the default configuration for `kind`.
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            label: None,
            config: NodeConfig::from(kind),
        }
    }

    pub fn with_config(id: impl Into<String>, config: NodeConfig) -> Self {
        Self {
            id: id.into(),
            label: None,
            config,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn kind(&self) -> NodeKind {
        self.config.kind()
    }
}

impl Connection {
    /// Creates a plain `source -> target` connection with no handles or condition.
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
            label: None,
            kind: ConnectionKind::Default,
            condition: None,
        }
    }

    pub fn with_handles(
        mut self,
        source_handle: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        self.source_handle = Some(source_handle.into());
        self.target_handle = Some(target_handle.into());
        self
    }

    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.kind = ConnectionKind::Conditional;
        self.condition = Some(condition);
        self
    }
}

impl WorkflowGraph {
    pub fn new(nodes: Vec<WorkflowNode>, connections: Vec<Connection>) -> Self {
        Self { nodes, connections }
    }

    /// Appends a node, returning the graph for chaining.
    pub fn node(mut self, id: impl Into<String>, kind: NodeKind) -> Self {
        self.nodes.push(WorkflowNode::new(id, kind));
        self
    }

    /// Appends a `source -> target` connection with a generated id (`e<index>`).
    pub fn connect(mut self, source: impl Into<String>, target: impl Into<String>) -> Self {
        let id = format!("e{}", self.connections.len());
        self.connections.push(Connection::new(id, source, target));
        self
    }

    pub fn from_json(json: &str) -> Result<Self, WorkflowLoadError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: &str) -> Result<Self, WorkflowLoadError> {
        let content = fs::read_to_string(path).map_err(|source| WorkflowLoadError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, WorkflowLoadError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
