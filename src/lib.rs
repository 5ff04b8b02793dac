//! # Keiro - Workflow Dependency-Graph Engine
//!
//! **Keiro** turns a node-based workflow, as drawn in a visual editor, into a validated
//! dependency graph and answers the scheduling questions asked about it: is the workflow
//! well-formed, in which order can its nodes run, which nodes are runnable right now, and
//! what is downstream of a given node.
//!
//! ## Core Workflow
//!
//! The engine is pure: it never executes nodes and keeps no state between calls.
//!
//! 1.  **Load Your Workflow**: Deserialize a `WorkflowGraph` from JSON, or implement the
//!     `IntoWorkflow` trait for your own editor format.
//! 2.  **Validate**: `Engine::validate` reports cycles, missing or duplicated start/end
//!     nodes, isolated nodes and dangling connections.
//! 3.  **Schedule**: `Engine::topological_order` gives a run order and level buckets;
//!     `Engine::ready` gives the frontier after a set of nodes has completed.
//! 4.  **Analyze**: `Engine::impact` lists everything downstream of a node.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! let workflow = WorkflowGraph::default()
//!     .node("start", NodeKind::Start)
//!     .node("build", NodeKind::CiTrigger)
//!     .node("notify", NodeKind::ChatNotification)
//!     .node("end", NodeKind::End)
//!     .connect("start", "build")
//!     .connect("build", "notify")
//!     .connect("notify", "end");
//!
//! let engine = Engine::builder().build();
//!
//! let report = engine.validate(&workflow);
//! assert!(report.is_valid, "{}", ReportFormatter::format_validation(&report));
//!
//! let order = engine.topological_order(&workflow);
//! assert_eq!(order.nodes, ["start", "build", "notify", "end"]);
//!
//! let ready = engine.ready(&workflow, ["start"]);
//! assert_eq!(ready, ["build"]);
//!
//! let impact = engine.impact(&workflow, "build");
//! assert_eq!(impact.affected, ["notify", "end"]);
//! ```

pub mod analysis;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod report;
pub mod workflow;
