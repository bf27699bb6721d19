use anyhow::{Context, Result};
use bridge_lookup::config::Config;
use bridge_lookup::resource::{self, ResourceData, DATA_SOURCE_NAME};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Look up a Bridge resource and print its attributes
#[derive(Parser, Debug)]
#[command(name = "bridge-lookup", version, about, long_about = None)]
struct Args {
    /// Resource name to look up
    name: String,

    /// Base endpoint of the Bridge API
    #[arg(long, env = "BRIDGE_API_URL")]
    api_url: Option<String>,

    /// Give up after this many seconds (no limit by default)
    #[arg(long)]
    timeout: Option<u64>,

    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let Some(tracing_level) = level.to_tracing_level() else {
        return Ok(None);
    };

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file {}", log_path.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("bridge-lookup started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Ok(Some(guard))
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("bridge-lookup").join("bridge-lookup.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".bridge-lookup").join("bridge-lookup.log");
    }
    PathBuf::from("bridge-lookup.log")
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level)?;

    let config = Config::load()?;
    let Some(provider) = config.effective_api_url(args.api_url.as_deref()) else {
        anyhow::bail!(
            "No Bridge API endpoint configured. Set BRIDGE_API_URL or use --api-url"
        );
    };

    tracing::info!("Reading {} {:?} from {}", DATA_SOURCE_NAME, args.name, provider.api_url);

    let mut data = ResourceData::for_name(&args.name)?;

    let read = resource::read(&provider, &mut data);
    let diags = match args.timeout {
        Some(secs) => tokio::time::timeout(Duration::from_secs(secs), read)
            .await
            .with_context(|| format!("Lookup of {:?} timed out after {}s", args.name, secs))?,
        None => read.await,
    };

    if diags.has_error() {
        for diag in diags.iter() {
            eprintln!("{diag}");
        }
        return Ok(ExitCode::FAILURE);
    }

    println!("{}", serde_json::to_string_pretty(&data.to_json())?);
    Ok(ExitCode::SUCCESS)
}
