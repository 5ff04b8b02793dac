use thiserror::Error;

/// Errors that can occur while loading a `WorkflowGraph` from JSON or disk.
#[derive(Error, Debug)]
pub enum WorkflowLoadError {
    #[error("Failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not read workflow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur when converting a custom editor format into a `WorkflowGraph`.
#[derive(Error, Debug, Clone)]
pub enum WorkflowConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error("Node '{node_id}' has an unknown type: '{type_name}'")]
    UnknownNodeType { node_id: String, type_name: String },
}

/// How much a diagnostic weighs on the validity of a workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Warning,
}

/// A single finding produced by the validator.
///
/// The `Display` text is what ends up in `ValidationResult::errors` and
/// `ValidationResult::warnings`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("{count} circular dependencies detected")]
    CircularDependencies { count: usize },

    #[error("Workflow has no start node")]
    NoStartNode,

    #[error("{count} start nodes present")]
    MultipleStartNodes { count: usize },

    #[error("Workflow has no end node")]
    NoEndNode,

    #[error("{count} isolated nodes")]
    IsolatedNodes { count: usize },

    #[error("Workflow must have exactly one START node, found {found}")]
    StartKindCardinality { found: usize },

    #[error("Workflow must have exactly one END node, found {found}")]
    EndKindCardinality { found: usize },

    #[error("Connection '{connection_id}' references unknown node '{missing_node_id}'")]
    DanglingConnection {
        connection_id: String,
        missing_node_id: String,
    },

    #[error("Duplicate node id '{0}'")]
    DuplicateNode(String),
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::CircularDependencies { .. }
            | Diagnostic::NoStartNode
            | Diagnostic::NoEndNode
            | Diagnostic::StartKindCardinality { .. }
            | Diagnostic::EndKindCardinality { .. } => Severity::Error,
            Diagnostic::MultipleStartNodes { .. }
            | Diagnostic::IsolatedNodes { .. }
            | Diagnostic::DanglingConnection { .. }
            | Diagnostic::DuplicateNode(_) => Severity::Warning,
        }
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }
}
