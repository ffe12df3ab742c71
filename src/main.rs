use campus_graph_core::prelude::*;
use log::{error, info};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run() {
        error!("{e}");
        std::process::exit(1);
    }

    println!("DONE: Files created successfully.");
}

fn run() -> Result<(), Error> {
    let config = PipelineConfig::default();
    let output = run_pipeline(&config)?;

    info!(
        "{} features layered, {} nodes, {} edges",
        output.layers.len(),
        output.graph.node_count(),
        output.graph.edge_count()
    );
    Ok(())
}
