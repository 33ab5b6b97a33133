use platform_kit::config::{self, ConfigValue, Configuration, JsonConfig};
use platform_kit::logging::{LogLevel, Logger, StreamLogger};
use std::env;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt, reload};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

const DEFAULT_CONFIG_PATH: &str = "config.json";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn parse_flag_values(flag: &str) -> Vec<String> {
    env::args()
        .skip(1)
        .filter_map(|arg| arg.strip_prefix(flag).map(str::to_string))
        .collect()
}

fn env_filter(level: LogLevel) -> EnvFilter {
    let directive = LevelFilter::from(level).to_string();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive))
}

/// Starts tracing at `info`; the filter is replaced once the config is read.
fn init_tracing() -> FilterHandle {
    let (filter, handle) = reload::Layer::new(env_filter(LogLevel::Information));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false),
        )
        .init();

    handle
}

fn render(value: &ConfigValue) -> String {
    match value {
        ConfigValue::String(s) => s.clone(),
        ConfigValue::Number(n) => n.to_string(),
        ConfigValue::Bool(b) => b.to_string(),
        ConfigValue::List(items) => {
            let rendered: Vec<String> = items.iter().map(render).collect();
            format!("[{}]", rendered.join(", "))
        }
        ConfigValue::Section(section) => {
            let keys: Vec<&str> = section.keys().map(String::as_str).collect();
            format!("{{{}}}", keys.join(", "))
        }
    }
}

fn answer_query(cfg: &JsonConfig, logger: &StreamLogger, path: &str) {
    match cfg.get(path) {
        Some(value) => println!("{} = {}", path, render(value)),
        None => logger.warnf(format_args!("config key not found: {}", path)),
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    let filter = init_tracing();
    let config_path = parse_config_path();

    let cfg = match config::load(&config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let logger = StreamLogger::from_config(&cfg);
    if let Err(e) = filter.reload(env_filter(logger.min_log_level())) {
        warn!(error = %e, "Failed to apply configured log level");
    }

    info!(config = %config_path, level = %logger.min_log_level(), "Logger initialized");
    logger.infof(format_args!("loaded configuration from {}", config_path));

    for path in parse_flag_values("--require=") {
        if cfg.get(&path).is_some() {
            continue;
        }
        if let Err(e) = logger.panicf(format_args!("required setting missing: {}", path)) {
            error!(error = %e, "Aborting");
            return ExitCode::FAILURE;
        }
    }

    let queries = parse_flag_values("--get=");
    if queries.is_empty() {
        let keys: Vec<&str> = cfg.keys().collect();
        debug!(keys = ?keys, "No queries given, listing top-level keys");
        println!("{}", keys.join("\n"));
    }
    for path in &queries {
        answer_query(&cfg, &logger, path);
    }

    ExitCode::SUCCESS
}
