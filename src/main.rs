use route_finder::adapters::outbound::{
    init_combined_logger, init_console_logger, FilesystemMapSource,
};
use route_finder::application::RouteFindingService;
use route_finder::domains::route_map::{describe, to_map_text};
use route_finder::common::{AggregateRoot, DomainEvent};
use route_finder::Config;
use std::error::Error;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let dump = args.iter().any(|a| a == "--dump");
    let config_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .cloned()
        .unwrap_or_else(|| "config.toml".to_string());

    let (config, from_file) = Config::load_or_default(&config_path).await?;

    // Plain subscriber without a `log` bridge so fast_log can own the `log` facade.
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting route finder");
    if from_file {
        info!("Configuration loaded from {}", config_path);
    } else {
        warn!("{} not found, using defaults", config_path);
    }

    let logger = match &config.logging.file {
        Some(path) => init_combined_logger(path, &config.logging.level),
        None => init_console_logger(),
    };
    let data_source = Arc::new(FilesystemMapSource::new(config.map.data_dir.clone()));
    info!("Map directory: {}", data_source.base().display());

    let mut service = RouteFindingService::new(data_source, logger)
        .with_options(config.map.loader_options())
        .with_builtin_maps()?;

    let title = if service.map(&config.map.source).is_ok() {
        config.map.source.clone()
    } else {
        service.load_map_file(&config.map.source)?.title.clone()
    };

    if dump {
        let graph = service.map(&title)?;
        print!("{}", to_map_text(&title, &graph));
        println!();
        print!("{}", describe(&graph));
        return Ok(());
    }

    let scenario_config = &config.scenario;
    let mut scenario = service.create_scenario(&title, &scenario_config.start)?;
    let (mut agent, report) = service.plan(
        &mut scenario,
        &scenario_config.goal,
        &scenario_config.strategy,
        &scenario_config.heuristic,
    )?;
    if !report.is_found() {
        warn!("No route from {} to {}", scenario_config.start, scenario_config.goal);
    }

    for snapshot in service.run(&mut scenario, &mut agent, scenario_config.max_steps) {
        if config.logging.json {
            println!("{}", serde_json::to_string(&snapshot)?);
        } else {
            println!(
                "step {:>3}  {:<16} cost {:>8.1}  {:?}",
                snapshot.steps_taken, snapshot.location, snapshot.path_cost, snapshot.status
            );
        }
    }

    let environment = scenario.environment();
    for event in environment.uncommitted_events() {
        debug!(
            scenario = event.aggregate_id(),
            at = %event.occurred_at().to_rfc3339(),
            "{}",
            event.event_type()
        );
    }
    info!("Trail: {}", environment.trail().join(" -> "));
    Ok(())
}
