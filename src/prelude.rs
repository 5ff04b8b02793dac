//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the keiro crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = WorkflowGraph::from_file("path/to/workflow.json")?;
//! let engine = Engine::new(EngineConfig::from_file("path/to/config.json")?);
//!
//! let report = engine.validate(&workflow);
//! println!("{}", ReportFormatter::format_validation(&report));
//! if report.is_valid {
//!     println!("{}", ReportFormatter::format_order(&engine.topological_order(&workflow)));
//! }
//! # Ok(())
//! # }
//! ```

// Engine and configuration
pub use crate::config::{EngineConfig, ImpactThresholds};
pub use crate::engine::{Engine, EngineBuilder};

// Authored model
pub use crate::workflow::{
    Condition, ConditionOperator, Connection, ConnectionKind, IntoWorkflow, NodeConfig,
    NodeKind, WorkflowGraph, WorkflowNode,
};

// Derived graph and results
pub use crate::analysis::{ImpactLevel, ImpactReport, TopologicalOrder, ValidationResult};
pub use crate::graph::{Dag, DagNode};

// Error types
pub use crate::error::{Diagnostic, Severity, WorkflowConversionError, WorkflowLoadError};

// Report formatting
pub use crate::report::ReportFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
