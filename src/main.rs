use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use kruskal_maze::{DirectionOptions, GenerationConfig, app::App};
use tracing_appender::non_blocking::WorkerGuard;

/// Generate a maze with randomized Kruskal, optionally merging rooms diagonally
#[derive(Parser, Debug)]
#[command(name = "kruskal-maze")]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of cells along each side of the grid
    #[arg(short, long, default_value_t = 8, value_parser = clap::value_parser!(u8).range(
        GenerationConfig::MIN_SIZE as i64..=GenerationConfig::MAX_SIZE as i64
    ))]
    size: u8,

    /// Disable the orthogonal directions (top, right, bottom, left)
    #[arg(long)]
    no_standard: bool,

    /// Enable the diagonal directions
    #[arg(short, long)]
    diagonal: bool,

    /// Random seed, for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,

    /// Print every pass and the final graph
    #[arg(short, long)]
    verbose: bool,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Maximum log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

impl Args {
    fn config(&self) -> GenerationConfig {
        let options = DirectionOptions {
            enable_standard: !self.no_standard,
            enable_diagonal: self.diagonal,
        };
        GenerationConfig {
            size: self.size,
            options,
            seed: self.seed,
        }
    }
}

/// Install the fmt subscriber. The returned guard must live until exit so
/// buffered file logs get flushed.
fn init_tracing(args: &Args) -> std::io::Result<Option<WorkerGuard>> {
    match &args.log_file {
        Some(path) => {
            let directory = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| std::path::Path::new("."));
            let file_name = path.file_name().ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("Log file path {} has no file name", path.display()),
                )
            })?;
            let file_appender = tracing_appender::rolling::never(directory, file_name);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            tracing_subscriber::fmt()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_max_level(args.log_level)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_max_level(args.log_level)
                .init();
            Ok(None)
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let _guard = match init_tracing(&args) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match App::new(args.verbose).run(args.config()) {
        Ok(Ok(_)) => ExitCode::SUCCESS,
        // Already reported by the printer
        Ok(Err(_)) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("I/O error: {}", e);
            ExitCode::FAILURE
        }
    }
}
