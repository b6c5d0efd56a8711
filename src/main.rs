use std::path::PathBuf;

use clap::Parser;
use timed_quiz::{Config, DEFAULT_DATA_DIR, Quiz, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding one <category>.json question file per category
    #[arg(short, long, env = "QUIZ_DATA_DIR", default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Seed for question sampling, for reproducible play-throughs
    #[arg(short, long, env = "QUIZ_SEED")]
    seed: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG)
    #[arg(short, long, env = "QUIZ_LOG_FILE")]
    log_file: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            data_dir: args.data_dir,
            seed: args.seed,
            log_file: args.log_file,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = Config::from(Args::parse());

    if let Some(path) = &config.log_file {
        if let Err(e) = logging::init(path) {
            eprintln!("Error setting up logging: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = Quiz::new(config).run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
