use super::definition::WorkflowGraph;
use crate::error::WorkflowConversionError;

/// A trait for editor or storage formats that can be converted into a `WorkflowGraph`.
///
/// The engine only understands its own canonical model. Implement this trait on the
/// structs you deserialize your documents into to provide the translation layer.
///
/// # Example
///
/// ```rust
/// use keiro::prelude::*;
/// use keiro::error::WorkflowConversionError;
///
/// struct CanvasNode { id: String, node_type: String }
/// struct CanvasDocument { nodes: Vec<CanvasNode>, edges: Vec<(String, String)> }
///
/// impl IntoWorkflow for CanvasDocument {
///     fn into_workflow(self) -> std::result::Result<WorkflowGraph, WorkflowConversionError> {
///         let mut nodes = Vec::new();
///         for node in self.nodes {
///             let kind = NodeKind::from_name(&node.node_type).ok_or_else(|| {
///                 WorkflowConversionError::UnknownNodeType {
///                     node_id: node.id.clone(),
///                     type_name: node.node_type.clone(),
///                 }
///             })?;
///             nodes.push(WorkflowNode::new(node.id, kind));
///         }
///         let connections = self
///             .edges
///             .into_iter()
///             .enumerate()
///             .map(|(i, (source, target))| Connection::new(format!("edge-{}", i), source, target))
///             .collect();
///         Ok(WorkflowGraph::new(nodes, connections))
///     }
/// }
/// ```
pub trait IntoWorkflow {
    /// Consumes the object and converts it into the engine's workflow model.
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError>;
}

impl IntoWorkflow for WorkflowGraph {
    fn into_workflow(self) -> Result<WorkflowGraph, WorkflowConversionError> {
        Ok(self)
    }
}
