use clap::Parser;
use keiro::prelude::*;
use rand::{Rng, rngs::ThreadRng};
use std::fs;

/// A CLI tool to generate random workflows for the Keiro engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Number of nodes between START and END
    #[arg(long, default_value_t = 20)]
    nodes: usize,

    /// Number of layers the intermediate nodes are spread across
    #[arg(long, default_value_t = 4)]
    layers: usize,

    /// The maximum number of outgoing connections per node
    #[arg(long, default_value_t = 2)]
    fan_out: usize,

    /// Add a connection from the last layer back to the first one
    #[arg(long)]
    cycle: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.layers == 0 || cli.fan_out == 0 {
        eprintln!("Error: --layers and --fan-out must be at least 1");
        std::process::exit(1);
    }
    if cli.nodes < cli.layers {
        eprintln!(
            "Error: --nodes ({}) cannot be smaller than --layers ({})",
            cli.nodes, cli.layers
        );
        std::process::exit(1);
    }

    println!(
        "Generating workflow ({} nodes in {} layers, fan-out up to {})...",
        cli.nodes, cli.layers, cli.fan_out
    );

    let layers = generate_layers(&mut rng, cli.nodes, cli.layers);
    let workflow = connect_layers(&mut rng, layers, cli.fan_out, cli.cycle);

    let report = Engine::default().validate(&workflow);
    println!("{}", ReportFormatter::format_validation(&report));

    fs::write(&cli.output, workflow.to_json()?)?;
    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// Spreads `count` randomly typed nodes over `layer_count` non-empty layers.
fn generate_layers(
    rng: &mut ThreadRng,
    count: usize,
    layer_count: usize,
) -> Vec<Vec<WorkflowNode>> {
    let kinds = [
        NodeKind::Process,
        NodeKind::Decision,
        NodeKind::Condition,
        NodeKind::Parallel,
        NodeKind::Merge,
        NodeKind::ChatNotification,
        NodeKind::CiTrigger,
        NodeKind::Delay,
    ];

    let mut layers: Vec<Vec<WorkflowNode>> = vec![Vec::new(); layer_count];
    for index in 0..count {
        // The first `layer_count` nodes seed one layer each so no layer stays empty.
        let layer = if index < layer_count {
            index
        } else {
            rng.random_range(0..layer_count)
        };
        let kind = kinds[rng.random_range(0..kinds.len())];
        layers[layer].push(WorkflowNode::new(format!("n{}", index), kind));
    }
    layers
}

/// Wires START to the first layer, each layer to the next, and the last layer to END.
/// Every node gets at least one incoming and one outgoing connection.
fn connect_layers(
    rng: &mut ThreadRng,
    layers: Vec<Vec<WorkflowNode>>,
    fan_out: usize,
    add_cycle: bool,
) -> WorkflowGraph {
    let ids: Vec<Vec<String>> = layers
        .iter()
        .map(|layer| layer.iter().map(|n| n.id.clone()).collect())
        .collect();

    let mut workflow = WorkflowGraph::default().node("start", NodeKind::Start);
    workflow.nodes.extend(layers.into_iter().flatten());
    workflow = workflow.node("end", NodeKind::End);

    for id in &ids[0] {
        workflow = workflow.connect("start", id.clone());
    }
    for pair in ids.windows(2) {
        let (current, next) = (&pair[0], &pair[1]);
        let mut reached = vec![false; next.len()];
        for source in current {
            let edges = rng.random_range(1..=fan_out.min(next.len()));
            for _ in 0..edges {
                let target = rng.random_range(0..next.len());
                reached[target] = true;
                workflow = workflow.connect(source.clone(), next[target].clone());
            }
        }
        for (target, was_reached) in reached.into_iter().enumerate() {
            if !was_reached {
                let source = &current[rng.random_range(0..current.len())];
                workflow = workflow.connect(source.clone(), next[target].clone());
            }
        }
    }
    if let Some(last) = ids.last() {
        for id in last {
            workflow = workflow.connect(id.clone(), "end");
        }
    }

    if add_cycle {
        if let (Some(first), Some(last)) = (ids.first(), ids.last()) {
            let source = &last[rng.random_range(0..last.len())];
            let target = &first[rng.random_range(0..first.len())];
            println!("-> Adding cycle connection {} -> {}", source, target);
            workflow = workflow.connect(source.clone(), target.clone());
        }
    }

    workflow
}
