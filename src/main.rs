use anyhow::{Context, Result};
use trackviz::config::ConfigManager;
use trackviz::operations;

fn main() -> Result<()> {
    // Log lines go to stderr; stdout carries only the trace
    env_logger::init();

    let manager = ConfigManager::new();
    match std::env::args().nth(1) {
        Some(path) => manager
            .load_from_file(&path)
            .with_context(|| format!("loading config from {}", path))?,
        None => log::info!("no config file given, using defaults"),
    }

    let run = manager.get().run;
    let op = run.operation()?;
    let trace = operations::execute(op, &run.array);
    log::info!("{} recorded {} snapshots", op, trace.len());

    let json = if run.pretty {
        trace.to_json_pretty()
    } else {
        trace.to_json()
    }
    .context("serializing trace")?;
    println!("{}", json);

    Ok(())
}
