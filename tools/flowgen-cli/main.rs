use clap::Parser;
use flowgen::prelude::*;
use flowgen::workflow::export;
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

/// A keyword-driven workflow generation engine CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Free-text description of the automation to generate
    description: Option<String>,

    /// Path to the JSON file backing the workflow store
    #[arg(short, long, default_value = "workflows.json")]
    store: PathBuf,

    /// Directory to export the generated document into as `<name>.json`
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// List all stored workflows and exit
    #[arg(short, long)]
    list: bool,

    /// Delete a stored workflow by id and exit
    #[arg(short, long, value_name = "ID")]
    delete: Option<String>,

    /// Run in interactive mode to be prompted for a description
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    let engine = Engine::builder()
        .with_store(Arc::new(JsonFileStore::new(&cli.store)))
        .build();

    if cli.list {
        run_list(&engine);
        return;
    }

    if let Some(id) = cli.delete {
        run_delete(&engine, &id);
        return;
    }

    let description = if cli.human {
        prompt_for_input("Describe the automation you want", None)
    } else {
        cli.description
            .unwrap_or_else(|| exit_with_error("A description is required in non-interactive mode."))
    };

    run_generate(&engine, &description, cli.export.as_deref());
}

fn run_generate(engine: &Engine, description: &str, export_dir: Option<&std::path::Path>) {
    println!("\nGenerating workflow...");
    let generate_start = Instant::now();

    let workflow = match engine.generate(description) {
        Ok(workflow) => workflow,
        Err(GenerateError::Persistence { workflow, source }) => {
            eprintln!("Warning: workflow could not be persisted: {}", source);
            *workflow
        }
        Err(e) => exit_with_error(&format!("Generation failed: {}", e)),
    };
    let generate_duration = generate_start.elapsed();

    println!(
        "Generation Successful! '{}' ({} nodes, {} connections) in {:?}",
        workflow.name,
        workflow.nodes.len(),
        workflow.connections.len(),
        generate_duration
    );
    for node in &workflow.nodes {
        println!(
            "  -> {} [{}] at ({}, {})",
            node.name, node.node_type, node.position.x, node.position.y
        );
    }

    if let Some(dir) = export_dir {
        let path = export::save_to_dir(&workflow, dir)
            .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));
        println!("  -> Exported document to '{}'", path.display());
    } else {
        let json = export::to_pretty_json(&workflow)
            .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));
        println!("\n{}", json);
    }
}

fn run_list(engine: &Engine) {
    let workflows = engine
        .list()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to read store: {}", e)));

    if workflows.is_empty() {
        println!("No stored workflows.");
        return;
    }

    println!("{} stored workflow(s):", workflows.len());
    for workflow in &workflows {
        println!(
            "  {} - '{}' ({} nodes, created {})",
            workflow.id,
            workflow.name,
            workflow.nodes.len(),
            workflow.created_at
        );
    }
}

fn run_delete(engine: &Engine, id: &str) {
    let removed = engine
        .delete_by_id(id)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to delete workflow: {}", e)));

    if removed {
        println!("Deleted workflow '{}'", id);
    } else {
        println!("No workflow with id '{}' found; nothing deleted.", id);
    }
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
