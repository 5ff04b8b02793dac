use clap::Parser;
use keiro::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Instant;

// --- Canvas Export Structs (Input Format Specific) ---
// These structs match the editor's canvas export and are only used here for conversion.

#[derive(Deserialize)]
struct RawCanvas {
    nodes: Vec<RawNode>,
    #[serde(default)]
    edges: Vec<RawEdge>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    data: RawNodeData,
}

#[derive(Deserialize)]
struct RawNodeData {
    #[serde(alias = "nodeType")]
    node_type: String,
    label: Option<String>,
}

#[derive(Deserialize)]
struct RawEdge {
    id: Option<String>,
    source: String,
    target: String,
    #[serde(alias = "sourceHandle")]
    source_handle: Option<String>,
    #[serde(alias = "targetHandle")]
    target_handle: Option<String>,
    label: Option<String>,
}

// --- Converter Implementation ---

impl IntoWorkflow for RawCanvas {
    fn into_workflow(self) -> std::result::Result<WorkflowGraph, WorkflowConversionError> {
        let nodes = self
            .nodes
            .into_iter()
            .map(|raw| {
                let kind = NodeKind::from_name(&raw.data.node_type).ok_or_else(|| {
                    WorkflowConversionError::UnknownNodeType {
                        node_id: raw.id.clone(),
                        type_name: raw.data.node_type.clone(),
                    }
                })?;
                let mut node = WorkflowNode::new(raw.id, kind);
                node.label = raw.data.label;
                Ok(node)
            })
            .collect::<std::result::Result<Vec<_>, WorkflowConversionError>>()?;

        let connections = self
            .edges
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                let mut connection = Connection::new(
                    raw.id.unwrap_or_else(|| format!("edge-{}", index)),
                    raw.source,
                    raw.target,
                );
                connection.source_handle = raw.source_handle;
                connection.target_handle = raw.target_handle;
                connection.label = raw.label;
                connection
            })
            .collect();

        Ok(WorkflowGraph::new(nodes, connections))
    }
}

/// Validate and analyze a workflow dependency graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow JSON file
    workflow_path: String,

    /// Optional path to an engine configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Comma-separated ids of completed nodes, used to compute the ready frontier
    #[arg(long, value_delimiter = ',')]
    completed: Vec<String>,

    /// Report the downstream impact of this node
    #[arg(long)]
    impact: Option<String>,

    /// Read the editor's canvas export format instead of the canonical one
    #[arg(long)]
    editor: bool,

    /// Print all results as a single JSON document
    #[arg(long)]
    json: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let total_start = Instant::now();

    // --- 1. Loading ---
    let workflow = load_workflow(&cli.workflow_path, cli.editor);
    let config = match &cli.config {
        Some(path) => EngineConfig::from_file(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to load config '{}': {}", path, e))
        }),
        None => EngineConfig::default(),
    };
    let engine = Engine::builder().with_config(config).build();

    // --- 2. Analysis ---
    let validation = engine.validate(&workflow);
    let order = engine.topological_order(&workflow);
    let ready = engine.ready(&workflow, &cli.completed);
    let impact = cli
        .impact
        .as_deref()
        .map(|id| (id, engine.impact(&workflow, id)));
    let analysis_duration = total_start.elapsed();

    // --- 3. Output ---
    if cli.json {
        let document = serde_json::json!({
            "validation": validation,
            "order": order,
            "ready": ready,
            "impact": impact.as_ref().map(|(_, report)| report),
        });
        match serde_json::to_string_pretty(&document) {
            Ok(text) => println!("{}", text),
            Err(e) => exit_with_error(&format!("Failed to serialize results: {}", e)),
        }
    } else {
        println!("{}", ReportFormatter::format_validation(&validation));
        if validation.has_cycles() {
            println!("\nOrder is best-effort: the workflow contains cycles.");
        }
        println!("\n{}", ReportFormatter::format_order(&order));
        println!("\nReady: {}", ready.join(", "));
        if let Some((id, report)) = &impact {
            println!("\n{}", ReportFormatter::format_impact(id, report));
        }
        println!(
            "\nAnalyzed {} nodes / {} connections in {:?}",
            workflow.nodes.len(),
            workflow.connections.len(),
            analysis_duration
        );
    }

    if !validation.is_valid {
        std::process::exit(2);
    }
}

fn load_workflow(path: &str, editor_format: bool) -> WorkflowGraph {
    if !editor_format {
        return WorkflowGraph::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load workflow: {}", e)));
    }

    let content = fs::read_to_string(path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read '{}': {}", path, e)));
    let canvas: RawCanvas = serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse canvas JSON: {}", e)));
    canvas
        .into_workflow()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert canvas: {}", e)))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
