use clap::Parser;
use duely::cli;
use duely::core::config::{self, DEFAULT_LOG_FILE, DuelyConfig};
use log::{info, warn};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "duely", about = "Interactive homework deadline reminder")]
struct Args {
    /// Config file (defaults to ~/.duely/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Hours ahead that count as urgent
    #[arg(short = 'w', long)]
    urgent_hours: Option<u32>,

    /// Where to write the log
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log_file: PathBuf,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // The logger itself accepts everything; the effective level goes through
    // log::set_max_level, first from env/defaults, then again once the
    // config file has been read.
    let early = config::resolve(&DuelyConfig::default(), args.urgent_hours);
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, log_file);
    }
    log::set_max_level(early.log_level);

    let file_config = match config::load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{e}; using defaults");
            warn!("{e}; using defaults");
            DuelyConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.urgent_hours);
    log::set_max_level(resolved.log_level);

    info!("Duely starting up with {:?}", resolved);

    cli::run(&resolved)
}
