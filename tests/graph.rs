//! Tests for graph construction, cycle detection and level assignment.
mod common;
use common::*;
use keiro::graph::{CycleDetector, LevelAssigner, assign_levels, build, detect_cycles};
use keiro::prelude::*;

#[test]
fn test_builder_mirrors_every_connection() {
    for workflow in acyclic_fixtures() {
        let dag = build(&workflow.nodes, &workflow.connections);
        for connection in &workflow.connections {
            let (Some(source), Some(target)) =
                (dag.get(&connection.source), dag.get(&connection.target))
            else {
                continue;
            };
            assert!(target.dependencies.contains(&connection.source));
            assert!(source.dependents.contains(&connection.target));
        }
    }
}

#[test]
fn test_entry_and_exit_flags_follow_adjacency() {
    for workflow in acyclic_fixtures()
        .into_iter()
        .chain(std::iter::once(create_two_node_cycle()))
    {
        let dag = build(&workflow.nodes, &workflow.connections);
        for node in dag.iter() {
            assert_eq!(node.is_entry, node.dependencies.is_empty(), "entry flag of {}", node.id);
            assert_eq!(node.is_exit, node.dependents.is_empty(), "exit flag of {}", node.id);
        }
    }
}

#[test]
fn test_parallel_connections_collapse_into_one_edge() {
    let workflow = create_linear_workflow()
        .connect("start", "p")
        .connect("start", "p");
    let dag = build(&workflow.nodes, &workflow.connections);

    assert_eq!(dag.get("p").unwrap().dependencies, vec!["start".to_string()]);
    assert_eq!(dag.get("start").unwrap().dependents, vec!["p".to_string()]);
}

#[test]
fn test_fan_out_hub_keeps_every_distinct_edge_once() {
    const FAN_OUT: usize = 20_000;
    let mut workflow = WorkflowGraph::default().node("start", NodeKind::Start);
    for i in 0..FAN_OUT {
        workflow = workflow.node(format!("n{i}"), NodeKind::Process);
    }
    for i in 0..FAN_OUT {
        workflow = workflow.connect("start", format!("n{i}"));
    }
    // Every hub edge authored a second time, in reverse.
    for i in (0..FAN_OUT).rev() {
        workflow = workflow.connect("start", format!("n{i}"));
    }
    let dag = build(&workflow.nodes, &workflow.connections);

    let hub = dag.get("start").unwrap();
    assert_eq!(hub.dependents.len(), FAN_OUT);
    assert_eq!(hub.dependents.first().map(String::as_str), Some("n0"));
    assert_eq!(hub.dependents.last().map(String::as_str), Some("n19999"));
    assert_eq!(dag.get("n42").unwrap().dependencies, vec!["start".to_string()]);
    assert_eq!(dag.exits().count(), FAN_OUT);
}

#[test]
fn test_handles_do_not_change_dependencies() {
    let workflow = create_release_workflow();
    let dag = build(&workflow.nodes, &workflow.connections);

    let checks = dag.get("checks").unwrap();
    assert_eq!(checks.dependents, vec!["lint".to_string(), "unit".to_string()]);
    let announce = dag.get("announce").unwrap();
    assert_eq!(announce.dependencies, vec!["green".to_string(), "deploy".to_string()]);
}

#[test]
fn test_dependency_order_follows_authoring() {
    let dag = build(
        &create_diamond_workflow().nodes,
        &create_diamond_workflow().connections,
    );
    let ids: Vec<_> = dag.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(ids, vec!["start", "a", "b", "end"]);
    assert_eq!(
        dag.get("end").unwrap().dependencies,
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn test_dangling_connection_is_dropped() {
    let workflow = create_dangling_workflow();
    let dag = build(&workflow.nodes, &workflow.connections);

    let a = dag.get("a").unwrap();
    assert!(a.dependencies.is_empty());
    assert!(a.dependents.is_empty());
    assert!(a.is_entry && a.is_exit);
    assert!(!dag.contains("missing"));

    assert_eq!(dag.dropped_connections().len(), 1);
    assert_eq!(dag.dropped_connections()[0].missing_node_id, "missing");
}

#[test]
fn test_duplicate_node_keeps_first_occurrence() {
    let workflow = create_linear_workflow().node("p", NodeKind::Delay);
    let dag = build(&workflow.nodes, &workflow.connections);

    assert_eq!(dag.len(), 3);
    assert_eq!(dag.duplicate_nodes(), &["p".to_string()]);
}

#[test]
fn test_no_cycles_in_acyclic_fixtures() {
    for workflow in acyclic_fixtures() {
        let dag = build(&workflow.nodes, &workflow.connections);
        assert!(detect_cycles(&dag).is_empty());
    }
}

#[test]
fn test_two_node_cycle_is_found() {
    let workflow = create_two_node_cycle();
    let dag = build(&workflow.nodes, &workflow.connections);
    let cycles = detect_cycles(&dag);

    assert_eq!(cycles, vec![vec!["a".to_string(), "b".to_string()]]);
}

#[test]
fn test_self_loop_is_a_cycle() {
    let workflow = create_linear_workflow().connect("p", "p");
    let dag = build(&workflow.nodes, &workflow.connections);

    assert_eq!(detect_cycles(&dag), vec![vec!["p".to_string()]]);
}

#[test]
fn test_cycle_without_entry_is_found() {
    // `start -> end` is clean; `x -> y -> z -> x` has no entry node at all.
    let workflow = WorkflowGraph::default()
        .node("start", NodeKind::Start)
        .node("end", NodeKind::End)
        .node("x", NodeKind::Process)
        .node("y", NodeKind::Process)
        .node("z", NodeKind::Process)
        .connect("start", "end")
        .connect("x", "y")
        .connect("y", "z")
        .connect("z", "x");
    let dag = build(&workflow.nodes, &workflow.connections);

    let cycles = detect_cycles(&dag);
    assert_eq!(
        cycles,
        vec![vec!["x".to_string(), "y".to_string(), "z".to_string()]]
    );
}

#[test]
fn test_search_continues_after_first_cycle() {
    let workflow = create_diamond_workflow()
        .connect("a", "start")
        .connect("end", "b");
    let dag = build(&workflow.nodes, &workflow.connections);

    let cycles = CycleDetector::new(&dag).detect();
    assert!(cycles.len() >= 2, "found {:?}", cycles);
}

#[test]
fn test_levels_on_linear_chain() {
    let workflow = create_linear_workflow();
    let dag = build(&workflow.nodes, &workflow.connections);
    assert_eq!(LevelAssigner::new(&dag).compute(), vec![0, 1, 2]);
}

#[test]
fn test_levels_use_longest_path_regardless_of_visit_order() {
    let workflow = create_multi_entry_workflow();
    let mut dag = build(&workflow.nodes, &workflow.connections);
    assign_levels(&mut dag);

    let levels = dag.levels();
    assert_eq!(levels["s1"], 0);
    assert_eq!(levels["s2"], 0);
    assert_eq!(levels["x"], 1);
    assert_eq!(levels["y"], 2);
    assert_eq!(levels["join"], 3);
    assert_eq!(levels["end"], 4);
}

#[test]
fn test_engine_dag_carries_levels() {
    let dag = Engine::default().build_dag(&create_multi_entry_workflow());

    assert_eq!(dag.get("end").unwrap().level, 4);
    assert_eq!(dag.get("join").unwrap().level, 3);
    assert_eq!(dag.get("s2").unwrap().level, 0);
    assert!(dag.get("s1").unwrap().is_entry);
    assert!(dag.get("end").unwrap().is_exit);
}

#[test]
fn test_levels_terminate_on_cycles() {
    let workflow = create_two_node_cycle();
    let mut dag = build(&workflow.nodes, &workflow.connections);
    assign_levels(&mut dag);

    assert_eq!(dag.get("a").unwrap().level, 0);
    assert_eq!(dag.get("b").unwrap().level, 1);
}

#[test]
fn test_levels_respect_every_acyclic_edge() {
    for workflow in acyclic_fixtures() {
        let mut dag = build(&workflow.nodes, &workflow.connections);
        assign_levels(&mut dag);
        for node in dag.iter() {
            for dependent in &node.dependents {
                assert!(dag.get(dependent).unwrap().level > node.level);
            }
        }
    }
}
