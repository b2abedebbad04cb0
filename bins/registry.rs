use anyhow::Context;
use configs::{AppConfig, LogFormat};
use dict::{namespace, Dict};
use tracing::{error, info};

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    info!(service = "registry", event = "logger_init", "tracing subscriber initialized");
}

fn build_registry(cfg: &AppConfig) -> anyhow::Result<Dict<String>> {
    namespace::install_prefix(&cfg.dict.namespace_prefix)?;
    let registry = cfg.dict.seed_registry()?;
    info!(entries = registry.len(), prefix = namespace::prefix(), "registry seeded");
    Ok(registry)
}

fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::load_and_validate().context("loading configuration")?;
    init_logging(cfg.dict.log_format);

    let registry = build_registry(&cfg)?;
    // Names given on the command line must be registered.
    for name in std::env::args().skip(1) {
        let value = registry.require(&name)?;
        println!("{name} = {value}");
    }
    println!("{}", serde_json::to_string_pretty(&registry.to_json()?)?);
    Ok(())
}

fn main() -> std::process::ExitCode {
    match run() {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "registry", error = %e, "registry failed");
            eprintln!("error: {e:#}");
            std::process::ExitCode::FAILURE
        }
    }
}
