use hystogram::logging::init_logging;
use hystogram::{Configuration, ParamParser, ParseOutcome};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    // Usage and diagnostics have already been printed for the non-Ready outcomes.
    let config = match ParamParser::with_system_defaults().parse_arguments(&args) {
        ParseOutcome::HelpRequested => return Ok(()),
        ParseOutcome::Error(_) => std::process::exit(1),
        ParseOutcome::Ready(config) => config,
    };

    init_logging(config.verbose)?;
    start(config)
}

fn start(config: Configuration) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Configuration: {}", serde_json::to_string_pretty(&config)?);
    log::info!(
        "Input: {}, output: {}",
        config.input_file.display(),
        config.output_file.display()
    );
    log::info!(
        "Memory budget: {} MB ({} bytes)",
        config.max_memory_mb,
        config.max_memory_bytes()
    );

    let pool = config.build_thread_pool()?;
    pool.install(|| {
        log::info!("Worker pool ready with {} threads", rayon::current_num_threads());
    });

    Ok(())
}
