//! Common test utilities for building workflow fixtures.
use keiro::prelude::*;

/// `start -> p -> end`
#[allow(dead_code)]
pub fn create_linear_workflow() -> WorkflowGraph {
    WorkflowGraph::default()
        .node("start", NodeKind::Start)
        .node("p", NodeKind::Process)
        .node("end", NodeKind::End)
        .connect("start", "p")
        .connect("p", "end")
}

/// `start -> {a, b} -> end`
#[allow(dead_code)]
pub fn create_diamond_workflow() -> WorkflowGraph {
    WorkflowGraph::default()
        .node("start", NodeKind::Start)
        .node("a", NodeKind::Process)
        .node("b", NodeKind::Process)
        .node("end", NodeKind::End)
        .connect("start", "a")
        .connect("start", "b")
        .connect("a", "end")
        .connect("b", "end")
}

/// `a <-> b`, no START or END node at all.
#[allow(dead_code)]
pub fn create_two_node_cycle() -> WorkflowGraph {
    WorkflowGraph::default()
        .node("a", NodeKind::Process)
        .node("b", NodeKind::Process)
        .connect("a", "b")
        .connect("b", "a")
}

/// A single node with one connection pointing at a node that does not exist.
#[allow(dead_code)]
pub fn create_dangling_workflow() -> WorkflowGraph {
    WorkflowGraph::default()
        .node("a", NodeKind::Process)
        .connect("a", "missing")
}

/// Two entries reaching `join` by paths of different length:
///
/// ```text
/// long:  s1 -> x -> y -> join -> end
/// short: s2 ------------> join
/// ```
///
/// Nodes are authored so that the short path is discovered first.
#[allow(dead_code)]
pub fn create_multi_entry_workflow() -> WorkflowGraph {
    WorkflowGraph::default()
        .node("s2", NodeKind::Start)
        .node("join", NodeKind::Merge)
        .node("end", NodeKind::End)
        .node("s1", NodeKind::Process)
        .node("x", NodeKind::Process)
        .node("y", NodeKind::Process)
        .connect("s2", "join")
        .connect("join", "end")
        .connect("s1", "x")
        .connect("x", "y")
        .connect("y", "join")
}

/// A release pipeline using every node kind, with handles on the branching nodes.
#[allow(dead_code)]
pub fn create_release_workflow() -> WorkflowGraph {
    let nodes = vec![
        WorkflowNode::new("start", NodeKind::Start),
        WorkflowNode::new("checks", NodeKind::Parallel),
        WorkflowNode::new("lint", NodeKind::Process),
        WorkflowNode::new("unit", NodeKind::CiTrigger),
        WorkflowNode::new("gather", NodeKind::Merge),
        WorkflowNode::new("green", NodeKind::Decision),
        WorkflowNode::new("cooldown", NodeKind::Delay),
        WorkflowNode::new("deploy", NodeKind::Condition),
        WorkflowNode::new("announce", NodeKind::ChatNotification),
        WorkflowNode::new("end", NodeKind::End),
    ];
    let connections = vec![
        Connection::new("c1", "start", "checks"),
        Connection::new("c2", "checks", "lint").with_handles("branch1", "in"),
        Connection::new("c3", "checks", "unit").with_handles("branch2", "in"),
        Connection::new("c4", "lint", "gather"),
        Connection::new("c5", "unit", "gather"),
        Connection::new("c6", "gather", "green"),
        Connection::new("c7", "green", "cooldown").with_handles("true", "in"),
        Connection::new("c8", "green", "announce").with_handles("false", "in"),
        Connection::new("c9", "cooldown", "deploy"),
        Connection::new("c10", "deploy", "announce"),
        Connection::new("c11", "announce", "end"),
    ];
    WorkflowGraph::new(nodes, connections)
}

/// Every fixture that contains no cycle.
#[allow(dead_code)]
pub fn acyclic_fixtures() -> Vec<WorkflowGraph> {
    vec![
        create_linear_workflow(),
        create_diamond_workflow(),
        create_multi_entry_workflow(),
        create_release_workflow(),
        create_dangling_workflow(),
    ]
}

/// Sorted copy of a list of ids, for order-independent comparisons.
#[allow(dead_code)]
pub fn sorted(ids: &[String]) -> Vec<String> {
    let mut ids = ids.to_vec();
    ids.sort();
    ids
}
